use crate::{
    error::FieldResult,
    layouts::{Backend, Matrix, Vector},
};

/// Batched degree-3 (4-point) polynomials, one per matrix row.
pub trait QuarticBatch<B: Backend> {
    /// `n x 4` x coordinates and values to `n x 4` coefficients.
    fn interpolate_quartic_batch(&self, xs: &Matrix<B>, ys: &Matrix<B>) -> FieldResult<Matrix<B>>;

    /// Evaluates row `i` of `polys` (`n x 4`) at `xs[i]`.
    fn eval_quartic_batch(&self, polys: &Matrix<B>, xs: &Vector<B>) -> FieldResult<Vector<B>>;
}
