use num_bigint::{BigInt, BigUint};

use crate::{
    api::FieldInput,
    error::FieldResult,
    layouts::{Backend, Matrix, Vector},
};

/// Construction of [Vector]s.
pub trait VectorAlloc<B: Backend> {
    /// Zero-filled vector of `len` elements.
    fn new_vector(&self, len: usize) -> Vector<B>;

    /// Vector of the residues of `values`.
    fn new_vector_from<X: FieldInput>(&self, values: &[X]) -> Vector<B>;

    /// Decodes `element_size`-byte little-endian elements, each reduced modulo `p`.
    /// Fails with `DimensionMismatch` when `bytes.len()` is not a multiple of `element_size`.
    fn new_vector_from_bytes(&self, bytes: &[u8]) -> FieldResult<Vector<B>>;

    /// Deterministic vector: element `i` depends only on `(seed, i)`.
    fn prng_vector(&self, seed: &[u8], len: usize) -> Vector<B>;
}

/// Elementwise arithmetic. The `_elements` forms require equal lengths
/// (`DimensionMismatch` otherwise); the `_scalar` forms broadcast.
///
/// Every vector operand must come from a field of the same modulus
/// (`FieldMismatch` otherwise); this holds for all vector and matrix operations.
pub trait VectorArithmetic<B: Backend> {
    fn add_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;
    fn add_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>>;

    fn sub_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;
    fn sub_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>>;

    fn mul_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;
    fn mul_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>>;

    /// `a[i] / b[i]`; any zero in `b` fails with `DivisionByZero`.
    fn div_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;
    fn div_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>>;

    /// `a[i]^e[i]`, exponents taken as canonical values.
    fn exp_vector_elements(&self, a: &Vector<B>, e: &Vector<B>) -> FieldResult<Vector<B>>;
    /// `a[i]^e` for a signed exponent; negative exponents batch-invert `a` first.
    fn exp_vector_scalar(&self, a: &Vector<B>, e: impl Into<BigInt>) -> FieldResult<Vector<B>>;

    /// Batch inversion; any zero fails the whole call with `DivisionByZero`.
    fn inv_vector_elements(&self, a: &Vector<B>) -> FieldResult<Vector<B>>;

    fn neg_vector_elements(&self, a: &Vector<B>) -> FieldResult<Vector<B>>;
}

/// Linear combinations.
pub trait VectorCombine<B: Backend> {
    /// `sum_i a[i] * b[i]`.
    fn combine_vectors(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<BigUint>;

    /// `res[j] = sum_i vectors[i][j] * coefficients[i]`. The vectors must be
    /// non-empty in number, of one common length, and as many as the coefficients.
    fn combine_many_vectors(&self, vectors: &[Vector<B>], coefficients: &Vector<B>) -> FieldResult<Vector<B>>;
}

/// Reshaping and slicing.
pub trait VectorReshape<B: Backend> {
    /// Row-major reshape into `len / columns` rows.
    fn vector_to_matrix(&self, v: &Vector<B>, columns: usize) -> FieldResult<Matrix<B>>;

    /// `res[i] = v[i * skip]` for `i < times`.
    fn pluck_vector(&self, v: &Vector<B>, skip: usize, times: usize) -> FieldResult<Vector<B>>;

    /// First `len` elements.
    fn truncate_vector(&self, v: &Vector<B>, len: usize) -> FieldResult<Vector<B>>;

    /// `v` followed by `times` further copies of itself.
    fn duplicate_vector(&self, v: &Vector<B>, times: usize) -> FieldResult<Vector<B>>;
}
