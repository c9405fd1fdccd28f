use num_bigint::{BigInt, BigUint};
use rand_core::{CryptoRng, RngCore};

use crate::{api::FieldInput, error::FieldResult};

/// Modular arithmetic on single elements. Results are canonical (`[0, p)`).
pub trait FieldScalarOps {
    /// Canonical residue of `x`.
    fn reduce(&self, x: impl FieldInput) -> BigUint;

    fn add(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint;

    fn sub(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint;

    fn mul(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint;

    fn neg(&self, x: impl FieldInput) -> BigUint;

    /// `x * inv(y)`; fails with `DivisionByZero` when `y ≡ 0`.
    fn div(&self, x: impl FieldInput, y: impl FieldInput) -> FieldResult<BigUint>;

    /// Fails with `DivisionByZero` when `x ≡ 0`.
    fn inv(&self, x: impl FieldInput) -> FieldResult<BigUint>;

    /// `base^exponent` for a signed exponent; negative exponents invert, so they
    /// fail with `DivisionByZero` on a zero base. `exp(0, 0) = 1`.
    fn exp(&self, base: impl FieldInput, exponent: impl Into<BigInt>) -> FieldResult<BigUint>;
}

/// Sampling of uniform field elements.
pub trait FieldRandom {
    /// Uniform element from the thread-local OS-seeded CSPRNG.
    fn rand(&self) -> BigUint;

    /// Uniform element from a caller-provided cryptographic generator.
    fn rand_with<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint;

    /// Deterministic element derived from `seed`; equal to element 0 of
    /// [crate::api::VectorAlloc::prng_vector] for the same seed.
    fn prng(&self, seed: &[u8]) -> BigUint;
}
