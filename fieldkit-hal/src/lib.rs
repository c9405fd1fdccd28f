//! # fieldkit-hal
//!
//! A trait-based abstraction layer for arithmetic over prime fields `GF(p)`,
//! the numerical substrate of polynomial-commitment and STARK-style proof systems.
//!
//! Algorithms are written once against the [`api`] traits and executed on any
//! backend that implements the [`oep`] (Open Extension Point) traits.
//!
//! ## Core Concepts
//!
//! **Field:** A [`layouts::Field`] encapsulates the modulus `p`, the byte width of an
//! encoded element and a backend-specific handle (e.g. Montgomery constants).
//! It is immutable after construction and can be shared between threads.
//!
//! **Layout types** ([`layouts`]):
//! - [`layouts::Vector`] -- ordered sequence of canonical field elements; also used
//!   for polynomials (coefficients in ascending degree).
//! - [`layouts::Matrix`] -- row-major `rows x cols` grid of field elements.
//!
//! Elements are stored in the backend representation [`layouts::Backend::Elem`] and
//! exposed to callers as [`num_bigint::BigUint`] values or as little-endian byte
//! strings of exactly [`api::FieldInfos::element_size`] bytes per element.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing traits (e.g. [`api::FieldScalarOps`],
//!    [`api::PolyEvaluate`]).
//! 2. **[`oep`]** -- Extension-point traits mirroring the kernels a backend must
//!    provide (e.g. [`oep::VecKernelImpl`], [`oep::FftImpl`]).
//! 3. **[`delegates`]** -- Blanket `impl` glue connecting each [`api`] trait to the
//!    corresponding [`oep`] traits on [`layouts::Field`]. Argument validation lives here.
//! 4. **[`mod@reference`]** -- Pure-Rust algorithms shared by the backends (extended
//!    Euclid, batch inversion, recursive FFT, Lagrange and quartic interpolation).
//!
//! ## Testing
//!
//! The [`test_suite`] module provides backend-parametric test functions. Backend crates
//! instantiate them via the [`backend_test_suite!`] and [`cross_backend_test_suite!`]
//! macros; the latter checks a backend value-for-value and byte-for-byte against
//! the reference backend.
//!
//! ## Non-Goals
//!
//! - Field extensions, binary fields and multi-prime (CRT) representations.
//! - Proven primality. Construction runs a Miller-Rabin test
//!   ([`reference::primality`]) and rejects any modulus it finds composite.
//! - Constant-time execution.

pub mod api;
pub mod config;
pub mod delegates;
pub mod error;
pub mod layouts;
pub mod oep;
pub mod reference;
pub mod source;
pub mod test_suite;

pub use config::{BackendKind, FieldConfig};
pub use error::{FieldError, FieldResult};
