use num_bigint::BigUint;

use fieldkit_hal::{
    error::FieldResult,
    layouts::Field,
    oep::{BatchInvImpl, VecKernelImpl},
    reference::{
        batch_inv::batch_inv_ref,
        vector::{
            vec_add_ref, vec_add_scalar_ref, vec_inner_product_ref, vec_mul_ref, vec_mul_scalar_ref, vec_neg_ref,
            vec_pow_each_ref, vec_pow_ref, vec_sub_ref, vec_sub_scalar_ref,
        },
    },
};

use crate::PrimeRef;

impl VecKernelImpl<Self> for PrimeRef {
    fn vec_add_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &[BigUint]) {
        vec_add_ref(field, res, a, b);
    }

    fn vec_add_scalar_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &BigUint) {
        vec_add_scalar_ref(field, res, a, b);
    }

    fn vec_sub_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &[BigUint]) {
        vec_sub_ref(field, res, a, b);
    }

    fn vec_sub_scalar_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &BigUint) {
        vec_sub_scalar_ref(field, res, a, b);
    }

    fn vec_neg_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint]) {
        vec_neg_ref(field, res, a);
    }

    fn vec_mul_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &[BigUint]) {
        vec_mul_ref(field, res, a, b);
    }

    fn vec_mul_scalar_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], b: &BigUint) {
        vec_mul_scalar_ref(field, res, a, b);
    }

    fn vec_pow_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], e: &BigUint) {
        vec_pow_ref(field, res, a, e);
    }

    fn vec_pow_each_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint], e: &[BigUint]) {
        vec_pow_each_ref(field, res, a, e);
    }

    fn vec_inner_product_impl(field: &Field<Self>, a: &[BigUint], b: &[BigUint]) -> BigUint {
        vec_inner_product_ref(field, a, b)
    }
}

impl BatchInvImpl<Self> for PrimeRef {
    fn batch_inv_impl(field: &Field<Self>, res: &mut [BigUint], a: &[BigUint]) -> FieldResult<()> {
        batch_inv_ref(field, res, a)
    }
}
