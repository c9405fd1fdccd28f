use crate::{
    error::FieldResult,
    layouts::{Backend, Field},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::reference::batch_inv::batch_inv_ref] for reference code.
/// * See [crate::api::VectorArithmetic::inv_vector_elements] for corresponding public API.
///
/// Montgomery batch inversion: one field inversion and `3n` multiplications.
/// Any zero in `a` fails the whole call with
/// [crate::error::FieldError::DivisionByZero] before `res` is written.
pub trait BatchInvImpl<B: Backend> {
    fn batch_inv_impl(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem]) -> FieldResult<()>;
}
