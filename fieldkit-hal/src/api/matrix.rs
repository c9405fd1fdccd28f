use num_bigint::BigInt;

use crate::{
    api::FieldInput,
    error::FieldResult,
    layouts::{Backend, Matrix, Vector},
};

/// Construction of [Matrix]es.
pub trait MatrixAlloc<B: Backend> {
    /// Zero-filled `rows x cols` matrix.
    fn new_matrix(&self, rows: usize, cols: usize) -> Matrix<B>;

    /// From nested rows; ragged rows fail with `DimensionMismatch`.
    fn new_matrix_from<X: FieldInput>(&self, rows: &[Vec<X>]) -> FieldResult<Matrix<B>>;

    /// Stacks equally long vectors as rows.
    fn new_matrix_from_vectors(&self, rows: &[Vector<B>]) -> FieldResult<Matrix<B>>;

    /// Decodes `rows * cols` row-major little-endian elements.
    fn new_matrix_from_bytes(&self, rows: usize, cols: usize, bytes: &[u8]) -> FieldResult<Matrix<B>>;
}

/// Elementwise arithmetic; the `_elements` forms require identical shapes.
pub trait MatrixArithmetic<B: Backend> {
    fn add_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>>;
    fn add_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>>;

    fn sub_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>>;
    fn sub_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>>;

    fn mul_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>>;
    fn mul_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>>;

    fn div_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>>;
    fn div_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>>;

    fn exp_matrix_elements(&self, a: &Matrix<B>, e: &Matrix<B>) -> FieldResult<Matrix<B>>;
    fn exp_matrix_scalar(&self, a: &Matrix<B>, e: impl Into<BigInt>) -> FieldResult<Matrix<B>>;

    fn inv_matrix_elements(&self, a: &Matrix<B>) -> FieldResult<Matrix<B>>;

    fn neg_matrix_elements(&self, a: &Matrix<B>) -> FieldResult<Matrix<B>>;
}

/// Matrix products.
pub trait MatrixProducts<B: Backend> {
    /// `(n x m) * (m x k)`.
    fn mul_matrixes(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>>;

    /// `(n x k) * k`.
    fn mul_matrix_by_vector(&self, a: &Matrix<B>, v: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Scales row `i` of `a` by `v[i]`.
    fn mul_matrix_rows(&self, a: &Matrix<B>, v: &Vector<B>) -> FieldResult<Matrix<B>>;
}
