use num_bigint::BigUint;

use crate::{
    api::FieldInput,
    error::FieldResult,
    layouts::{Backend, Vector},
};

pub trait RootsOfUnity<B: Backend> {
    /// Primitive root of unity of order `order`, a power of two dividing `p - 1`
    /// (`InvalidOrder` otherwise). Deterministic per field.
    fn get_root_of_unity(&self, order: u64) -> FieldResult<BigUint>;

    /// `[base^0, base^1, ..., base^{length-1}]`.
    fn get_power_series(&self, base: impl FieldInput, length: usize) -> Vector<B>;
}
