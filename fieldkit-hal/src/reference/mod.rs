//! Pure-Rust algorithms shared by the backends.
//!
//! Functions here are generic over the [crate::oep] kernels, so the same
//! algorithm runs on every backend and only the element arithmetic differs.

pub mod batch_inv;
pub mod euclid;
pub mod fft;
pub mod lagrange;
pub mod poly;
pub mod primality;
pub mod quartic;
pub mod roots;
pub mod vector;
