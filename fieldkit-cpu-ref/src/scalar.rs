use num_bigint::BigUint;
use num_traits::{One, Zero};

use fieldkit_hal::{
    error::{FieldError, FieldResult},
    layouts::Field,
    oep::ScalarImpl,
    reference::euclid::inv_mod,
};

use crate::PrimeRef;

impl ScalarImpl<Self> for PrimeRef {
    #[inline]
    fn elem_from_residue_impl(field: &Field<Self>, x: &BigUint) -> BigUint {
        debug_assert!(x < &field.handle().modulus);
        x.clone()
    }

    #[inline]
    fn elem_zero_impl(_field: &Field<Self>) -> BigUint {
        BigUint::zero()
    }

    #[inline]
    fn elem_one_impl(field: &Field<Self>) -> BigUint {
        BigUint::one() % &field.handle().modulus
    }

    #[inline]
    fn elem_is_zero_impl(_field: &Field<Self>, a: &BigUint) -> bool {
        a.is_zero()
    }

    fn elem_add_impl(field: &Field<Self>, a: &BigUint, b: &BigUint) -> BigUint {
        let p: &BigUint = &field.handle().modulus;
        let sum: BigUint = a + b;
        if &sum >= p { sum - p } else { sum }
    }

    fn elem_sub_impl(field: &Field<Self>, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            a - b
        } else {
            &field.handle().modulus - b + a
        }
    }

    fn elem_neg_impl(field: &Field<Self>, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            &field.handle().modulus - a
        }
    }

    fn elem_mul_impl(field: &Field<Self>, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &field.handle().modulus
    }

    fn elem_inv_impl(field: &Field<Self>, a: &BigUint) -> FieldResult<BigUint> {
        inv_mod(a, &field.handle().modulus).ok_or(FieldError::DivisionByZero)
    }

    fn elem_pow_impl(field: &Field<Self>, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &field.handle().modulus)
    }
}
