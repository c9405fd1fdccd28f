use crate::{
    api::QuarticBatch,
    delegates::wrap,
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Matrix, Vector},
    oep::{BatchInvImpl, ScalarImpl},
    reference::quartic::{eval_quartic_batch_ref, interpolate_quartic_batch_ref},
};

fn check_quartic<B: Backend>(op: &str, m: &Matrix<B>, rows: usize) -> FieldResult<()> {
    if m.cols() != 4 {
        return Err(FieldError::dim(format!("{op}: expected 4 columns, got {}", m.cols())));
    }
    if m.rows() != rows {
        return Err(FieldError::dim(format!("{op}: expected {rows} rows, got {}", m.rows())));
    }
    Ok(())
}

impl<B> QuarticBatch<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + BatchInvImpl<B>,
{
    fn interpolate_quartic_batch(&self, xs: &Matrix<B>, ys: &Matrix<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(xs)?;
        self.check_matrix(ys)?;
        check_quartic("interpolate_quartic_batch", xs, xs.rows())?;
        check_quartic("interpolate_quartic_batch", ys, xs.rows())?;
        let coeffs: Vec<B::Elem> = interpolate_quartic_batch_ref(self, xs.as_slice(), ys.as_slice())?;
        Ok(Matrix::from_elems(self, coeffs, xs.rows(), 4))
    }

    fn eval_quartic_batch(&self, polys: &Matrix<B>, xs: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_matrix(polys)?;
        self.check_vector(xs)?;
        check_quartic("eval_quartic_batch", polys, xs.len())?;
        Ok(wrap(self, eval_quartic_batch_ref(self, polys.as_slice(), xs.as_slice())))
    }
}
