//! # fieldkit-cpu-ref
//!
//! Reference backend for [`fieldkit_hal`]: every element is a
//! [`num_bigint::BigUint`] in canonical form, inversion uses the extended
//! Euclidean algorithm and the FFT is the recursive radix-2 Cooley-Tukey
//! transform from [`fieldkit_hal::reference::fft`].
//!
//! Any prime modulus is accepted, including `p = 2` and moduli of any width.
//! This backend is the correctness oracle other backends are tested against.

mod fft;
mod field;
mod scalar;
mod vector;

#[cfg(test)]
mod tests;

pub use field::PrimeRefHandle;

/// Arbitrary-precision reference backend.
pub struct PrimeRef {}
