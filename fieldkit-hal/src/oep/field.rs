use num_bigint::BigUint;

use crate::{
    config::FieldConfig,
    error::FieldResult,
    layouts::{Backend, Field},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::layouts::Field::from_handle] for the shared construction path.
/// * See [crate::api::FieldNew] for corresponding public API.
///
/// Implementors reject moduli their representation cannot hold with
/// [crate::error::FieldError::UnsupportedModulus].
pub trait FieldNewImpl<B: Backend> {
    fn new_impl(modulus: &BigUint, config: &FieldConfig) -> FieldResult<Field<B>>;
}
