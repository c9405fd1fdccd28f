use num_bigint::BigUint;
use thiserror::Error;

/// Failures raised by field operations.
///
/// Every failure is synchronous and raised at the violated precondition; no
/// operation returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("operand belongs to GF({found}), not GF({expected})")]
    FieldMismatch { expected: BigUint, found: BigUint },

    #[error("invalid root of unity order {order}: {reason}")]
    InvalidOrder { order: u64, reason: &'static str },

    #[error("interpolation points contain a duplicate x coordinate")]
    DuplicateXCoordinate,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported modulus: {0}")]
    UnsupportedModulus(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

impl FieldError {
    pub(crate) fn dim(msg: impl Into<String>) -> Self {
        FieldError::DimensionMismatch(msg.into())
    }
}
