use num_bigint::BigUint;

use crate::{config::FieldConfig, error::FieldResult, layouts::Backend};

/// Instantiate a new [crate::layouts::Field].
pub trait FieldNew<B: Backend>: Sized {
    fn new(modulus: &BigUint, config: &FieldConfig) -> FieldResult<Self>;
}

/// Constant properties of a field.
pub trait FieldInfos {
    fn characteristic(&self) -> BigUint;

    /// Always 1 for prime fields.
    fn extension_degree(&self) -> u32 {
        1
    }

    /// Bytes per encoded element: `ceil(bits(p) / 8)`.
    fn element_size(&self) -> usize;

    fn zero(&self) -> BigUint;

    fn one(&self) -> BigUint;
}
