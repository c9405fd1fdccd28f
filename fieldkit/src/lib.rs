//! # fieldkit
//!
//! Arithmetic over prime fields `GF(p)` with the backend chosen at runtime.
//!
//! [`create_field`] picks the narrowest fixed-width Montgomery backend that holds
//! the modulus, or the arbitrary-precision reference backend, according to
//! [`FieldConfig::backend`]. The result is a [`PrimeField`]: scalar operations are
//! available on it directly, everything typed by backend (vectors, matrices,
//! polynomials) is reached through [`PrimeField::visit`] or by matching on the
//! variant.
//!
//! ```
//! use fieldkit::{FieldConfig, api::FieldScalarOps, create_field};
//! use num_bigint::BigUint;
//!
//! let field = create_field(&BigUint::from(11u32), &FieldConfig::default()).unwrap();
//! assert_eq!(field.div(1u32, 2u32).unwrap(), BigUint::from(6u32));
//! ```

mod field;

pub use field::*;

pub use fieldkit_cpu_fixed::{PrimeFixed, PrimeFixed64, PrimeFixed128, PrimeFixed192, PrimeFixed256, limbs_for_bits};
pub use fieldkit_cpu_ref::PrimeRef;
pub use fieldkit_hal::{
    BackendKind, FieldConfig, FieldError, FieldResult, api,
    layouts::{self, Backend, Field, Matrix, Vector},
    source,
};
