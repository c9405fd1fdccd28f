use num_bigint::BigUint;

use crate::{
    api::FieldInput,
    error::FieldResult,
    layouts::{Backend, Matrix, Vector},
};

/// Polynomial algebra on coefficient vectors (ascending degree).
pub trait PolyArithmetic<B: Backend> {
    /// Sum, shorter operand zero-padded; length `max(len(a), len(b))`.
    fn add_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Difference, shorter operand zero-padded.
    fn sub_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Product, length `len(a) + len(b) - 1`.
    fn mul_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Quotient of the long division of `a` by `b`; the remainder is discarded.
    /// An all-zero divisor fails with `DivisionByZero`.
    fn div_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Quotient and remainder (`deg(b)` coefficients).
    fn div_rem_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<(Vector<B>, Vector<B>)>;

    fn mul_poly_by_constant(&self, p: &Vector<B>, c: impl FieldInput) -> FieldResult<Vector<B>>;
}

pub trait PolyEvaluate<B: Backend> {
    /// Horner evaluation.
    fn eval_poly_at(&self, p: &Vector<B>, x: impl FieldInput) -> FieldResult<BigUint>;

    /// FFT evaluation at every root. `roots.len()` must be a power of two
    /// (`InvalidOrder`) no smaller than `p.len()` (`DimensionMismatch`);
    /// `roots` must be the power series of a primitive root of that order.
    fn eval_poly_at_roots(&self, p: &Vector<B>, roots: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Row-wise [PolyEvaluate::eval_poly_at_roots].
    fn eval_polys_at_roots(&self, polys: &Matrix<B>, roots: &Vector<B>) -> FieldResult<Matrix<B>>;
}

pub trait PolyInterpolate<B: Backend> {
    /// Lagrange interpolation; `DimensionMismatch` on length mismatch,
    /// `DuplicateXCoordinate` on repeated x values.
    fn interpolate(&self, xs: &Vector<B>, ys: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Inverse FFT: evaluations at `roots` back to coefficients.
    fn interpolate_roots(&self, roots: &Vector<B>, ys: &Vector<B>) -> FieldResult<Vector<B>>;

    /// Row-wise [PolyInterpolate::interpolate_roots].
    fn interpolate_roots_matrix(&self, roots: &Vector<B>, ys: &Matrix<B>) -> FieldResult<Matrix<B>>;
}
