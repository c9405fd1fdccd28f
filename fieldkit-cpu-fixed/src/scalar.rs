use num_bigint::BigUint;

use fieldkit_hal::{
    error::{FieldError, FieldResult},
    layouts::Field,
    oep::ScalarImpl,
};

use crate::{PrimeFixed, limbs, montgomery::Montgomery};

/// `a^{-1}` by Fermat's little theorem, computed in the Montgomery domain.
pub(crate) fn inv_fermat<const L: usize>(field: &Field<PrimeFixed<L>>, a_mont: &Montgomery<L>) -> Montgomery<L> {
    let handle = field.handle();
    handle.mont.pow(a_mont, &handle.p_minus_two)
}

impl<const L: usize> ScalarImpl<Self> for PrimeFixed<L> {
    #[inline]
    fn elem_from_residue_impl(_field: &Field<Self>, x: &BigUint) -> [u64; L] {
        limbs::from_biguint(x)
    }

    #[inline]
    fn elem_zero_impl(_field: &Field<Self>) -> [u64; L] {
        [0u64; L]
    }

    #[inline]
    fn elem_one_impl(_field: &Field<Self>) -> [u64; L] {
        limbs::one()
    }

    #[inline]
    fn elem_is_zero_impl(_field: &Field<Self>, a: &[u64; L]) -> bool {
        limbs::is_zero(a)
    }

    #[inline]
    fn elem_add_impl(field: &Field<Self>, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        field.handle().mont.add(a, b)
    }

    #[inline]
    fn elem_sub_impl(field: &Field<Self>, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        field.handle().mont.sub(a, b)
    }

    #[inline]
    fn elem_neg_impl(field: &Field<Self>, a: &[u64; L]) -> [u64; L] {
        field.handle().mont.neg(a)
    }

    #[inline]
    fn elem_mul_impl(field: &Field<Self>, a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        field.handle().mont.mul_canonical(a, b)
    }

    fn elem_inv_impl(field: &Field<Self>, a: &[u64; L]) -> FieldResult<[u64; L]> {
        if limbs::is_zero(a) {
            return Err(FieldError::DivisionByZero);
        }
        let mont = &field.handle().mont;
        Ok(mont.unprepare(&inv_fermat(field, &mont.prepare(a))))
    }

    fn elem_pow_impl(field: &Field<Self>, a: &[u64; L], e: &BigUint) -> [u64; L] {
        let mont = &field.handle().mont;
        mont.unprepare(&mont.pow(&mont.prepare(a), &e.to_u64_digits()))
    }
}
