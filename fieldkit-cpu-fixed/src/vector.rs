use itertools::izip;
use num_bigint::BigUint;

use fieldkit_hal::{
    error::{FieldError, FieldResult},
    layouts::Field,
    oep::{BatchInvImpl, VecKernelImpl},
};

use crate::{
    PrimeFixed, limbs,
    montgomery::{Montgomery, MontgomeryPrecomp},
    scalar::inv_fermat,
    scratch::ScratchOwned,
};

impl<const L: usize> VecKernelImpl<Self> for PrimeFixed<L> {
    fn vec_add_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[[u64; L]]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x, y) in izip!(res.iter_mut(), a.iter(), b.iter()) {
            *r = mont.add(x, y);
        }
    }

    fn vec_add_scalar_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[u64; L]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x) in izip!(res.iter_mut(), a.iter()) {
            *r = mont.add(x, b);
        }
    }

    fn vec_sub_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[[u64; L]]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x, y) in izip!(res.iter_mut(), a.iter(), b.iter()) {
            *r = mont.sub(x, y);
        }
    }

    fn vec_sub_scalar_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[u64; L]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x) in izip!(res.iter_mut(), a.iter()) {
            *r = mont.sub(x, b);
        }
    }

    fn vec_neg_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x) in izip!(res.iter_mut(), a.iter()) {
            *r = mont.neg(x);
        }
    }

    fn vec_mul_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[[u64; L]]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x, y) in izip!(res.iter_mut(), a.iter(), b.iter()) {
            *r = mont.mul_canonical(x, y);
        }
    }

    fn vec_mul_scalar_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], b: &[u64; L]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        let b_mont: Montgomery<L> = mont.prepare(b);
        for (r, x) in izip!(res.iter_mut(), a.iter()) {
            *r = mont.mul_external(&b_mont, x);
        }
    }

    fn vec_pow_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], e: &BigUint) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        let e: Vec<u64> = e.to_u64_digits();
        for (r, x) in izip!(res.iter_mut(), a.iter()) {
            *r = mont.unprepare(&mont.pow(&mont.prepare(x), &e));
        }
    }

    fn vec_pow_each_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]], e: &[[u64; L]]) {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        for (r, x, y) in izip!(res.iter_mut(), a.iter(), e.iter()) {
            *r = mont.unprepare(&mont.pow(&mont.prepare(x), y));
        }
    }

    fn vec_inner_product_impl(field: &Field<Self>, a: &[[u64; L]], b: &[[u64; L]]) -> [u64; L] {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        // sum_i a[i] * b[i] * R^{-1}, scaled back by R once at the end.
        let mut acc: [u64; L] = [0u64; L];
        for (x, y) in izip!(a.iter(), b.iter()) {
            acc = mont.add(&acc, &mont.mul(x, y));
        }
        mont.prepare(&acc)
    }
}

impl<const L: usize> BatchInvImpl<Self> for PrimeFixed<L> {
    fn batch_inv_impl(field: &Field<Self>, res: &mut [[u64; L]], a: &[[u64; L]]) -> FieldResult<()> {
        if res.len() != a.len() {
            return Err(FieldError::DimensionMismatch(format!(
                "batch inversion: output of {} elements for {} inputs",
                res.len(),
                a.len()
            )));
        }
        if a.iter().any(limbs::is_zero) {
            return Err(FieldError::DivisionByZero);
        }

        let n: usize = a.len();
        if n == 0 {
            return Ok(());
        }

        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        let mut scratch: ScratchOwned<L> = ScratchOwned::alloc(field.config(), 2 * n);
        let (a_mont, rest) = scratch.take_slice(n);
        let prefix: &mut [[u64; L]] = &mut rest[..n];

        // prefix[i] = a[0] * ... * a[i]
        let mut acc: Montgomery<L> = mont.one();
        for (am, pi, x) in izip!(a_mont.iter_mut(), prefix.iter_mut(), a.iter()) {
            *am = mont.prepare(x);
            acc = mont.mul(&acc, am);
            *pi = acc;
        }

        let mut inv: Montgomery<L> = inv_fermat(field, &prefix[n - 1]);
        for i in (1..n).rev() {
            res[i] = mont.unprepare(&mont.mul(&inv, &prefix[i - 1]));
            inv = mont.mul(&inv, &a_mont[i]);
        }
        res[0] = mont.unprepare(&inv);

        Ok(())
    }
}
