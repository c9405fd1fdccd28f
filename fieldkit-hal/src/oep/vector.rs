use num_bigint::BigUint;

use crate::layouts::{Backend, Field};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::reference::vector] for reference code.
/// * See [crate::api::VectorArithmetic] and [crate::api::VectorCombine] for corresponding public API.
///
/// Slice kernels. Callers guarantee that all slices of one call have the same length.
pub trait VecKernelImpl<B: Backend> {
    fn vec_add_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]);
    fn vec_add_scalar_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem);
    fn vec_sub_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]);
    fn vec_sub_scalar_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem);
    fn vec_neg_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem]);
    fn vec_mul_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]);
    fn vec_mul_scalar_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem);
    /// `res[i] = a[i]^e`.
    fn vec_pow_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], e: &BigUint);
    /// `res[i] = a[i]^e[i]`, exponents taken as canonical values.
    fn vec_pow_each_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], e: &[B::Elem]);
    /// `sum_i a[i] * b[i]`.
    fn vec_inner_product_impl(field: &Field<B>, a: &[B::Elem], b: &[B::Elem]) -> B::Elem;
}
