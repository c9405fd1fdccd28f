use num_bigint::BigUint;

use crate::{
    error::FieldResult,
    layouts::{Backend, Field},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::reference::euclid] for reference code.
/// * See [crate::api::FieldScalarOps] for corresponding public API.
///
/// Inputs are canonical backend elements; outputs must be canonical.
pub trait ScalarImpl<B: Backend> {
    /// `x` is already reduced modulo `p`.
    fn elem_from_residue_impl(field: &Field<B>, x: &BigUint) -> B::Elem;
    fn elem_zero_impl(field: &Field<B>) -> B::Elem;
    fn elem_one_impl(field: &Field<B>) -> B::Elem;
    fn elem_is_zero_impl(field: &Field<B>, a: &B::Elem) -> bool;
    fn elem_add_impl(field: &Field<B>, a: &B::Elem, b: &B::Elem) -> B::Elem;
    fn elem_sub_impl(field: &Field<B>, a: &B::Elem, b: &B::Elem) -> B::Elem;
    fn elem_neg_impl(field: &Field<B>, a: &B::Elem) -> B::Elem;
    fn elem_mul_impl(field: &Field<B>, a: &B::Elem, b: &B::Elem) -> B::Elem;
    /// Fails with [crate::error::FieldError::DivisionByZero] on zero.
    fn elem_inv_impl(field: &Field<B>, a: &B::Elem) -> FieldResult<B::Elem>;
    fn elem_pow_impl(field: &Field<B>, a: &B::Elem, e: &BigUint) -> B::Elem;
}
