use num_bigint::BigUint;

use crate::{
    api::{FieldInput, PolyArithmetic, PolyEvaluate, PolyInterpolate},
    delegates::{check_len, map_scalar, to_elem, wrap, zeros},
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Matrix, Vector},
    oep::{BatchInvImpl, FftImpl, ScalarImpl, VecKernelImpl},
    reference::{
        fft::inverse_roots,
        lagrange::interpolate_ref,
        poly::{poly_add_ref, poly_div_rem_ref, poly_eval_ref, poly_mul_ref, poly_sub_ref},
    },
};

/// Number of roots, which must be a power of two.
fn check_roots<B: Backend>(roots: &Vector<B>) -> FieldResult<usize> {
    let n: usize = roots.len();
    if !n.is_power_of_two() {
        return Err(FieldError::InvalidOrder {
            order: n as u64,
            reason: "number of roots must be a power of two",
        });
    }
    Ok(n)
}

fn check_degree(op: &str, len: usize, n: usize) -> FieldResult<()> {
    if len > n {
        return Err(FieldError::dim(format!(
            "{op}: polynomial with {len} coefficients exceeds {n} roots"
        )));
    }
    Ok(())
}

fn check_operands<B: Backend>(field: &Field<B>, a: &Vector<B>, b: &Vector<B>) -> FieldResult<()> {
    field.check_vector(a)?;
    field.check_vector(b)
}

/// `n^{-1}` as a backend element.
fn inv_len<B: Backend + ScalarImpl<B>>(field: &Field<B>, n: usize) -> FieldResult<B::Elem> {
    B::elem_inv_impl(field, &to_elem(field, n))
}

impl<B> PolyArithmetic<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B>,
{
    fn add_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, a, b)?;
        Ok(wrap(self, poly_add_ref(self, a.as_slice(), b.as_slice())))
    }

    fn sub_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, a, b)?;
        Ok(wrap(self, poly_sub_ref(self, a.as_slice(), b.as_slice())))
    }

    fn mul_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, a, b)?;
        Ok(wrap(self, poly_mul_ref(self, a.as_slice(), b.as_slice())))
    }

    fn div_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, a, b)?;
        let (quo, _) = poly_div_rem_ref(self, a.as_slice(), b.as_slice())?;
        Ok(wrap(self, quo))
    }

    fn div_rem_polys(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<(Vector<B>, Vector<B>)> {
        check_operands(self, a, b)?;
        let (quo, rem) = poly_div_rem_ref(self, a.as_slice(), b.as_slice())?;
        Ok((wrap(self, quo), wrap(self, rem)))
    }

    fn mul_poly_by_constant(&self, p: &Vector<B>, c: impl FieldInput) -> FieldResult<Vector<B>> {
        self.check_vector(p)?;
        Ok(wrap(self, map_scalar(self, p.as_slice(), &to_elem(self, c), B::vec_mul_scalar_impl)))
    }
}

impl<B> PolyEvaluate<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + FftImpl<B>,
{
    fn eval_poly_at(&self, p: &Vector<B>, x: impl FieldInput) -> FieldResult<BigUint> {
        self.check_vector(p)?;
        Ok(B::elem_to_biguint(&poly_eval_ref(self, p.as_slice(), &to_elem(self, x))))
    }

    fn eval_poly_at_roots(&self, p: &Vector<B>, roots: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, p, roots)?;
        let n: usize = check_roots(roots)?;
        check_degree("eval_poly_at_roots", p.len(), n)?;
        let plan: B::FftPlan = B::fft_plan_impl(self, roots.as_slice())?;
        let mut res: Vec<B::Elem> = zeros(self, n);
        B::fft_apply_impl(self, &plan, &mut res, p.as_slice())?;
        Ok(wrap(self, res))
    }

    fn eval_polys_at_roots(&self, polys: &Matrix<B>, roots: &Vector<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(polys)?;
        self.check_vector(roots)?;
        let n: usize = check_roots(roots)?;
        check_degree("eval_polys_at_roots", polys.cols(), n)?;
        let plan: B::FftPlan = B::fft_plan_impl(self, roots.as_slice())?;
        let mut res: Vec<B::Elem> = zeros(self, polys.rows() * n);
        for (out, row) in res.chunks_exact_mut(n).zip(polys.iter_rows()) {
            B::fft_apply_impl(self, &plan, out, row)?;
        }
        Ok(Matrix::from_elems(self, res, polys.rows(), n))
    }
}

impl<B> PolyInterpolate<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B> + BatchInvImpl<B> + FftImpl<B>,
{
    fn interpolate(&self, xs: &Vector<B>, ys: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, xs, ys)?;
        check_len("interpolate", xs.len(), ys.len())?;
        Ok(wrap(self, interpolate_ref(self, xs.as_slice(), ys.as_slice())?))
    }

    fn interpolate_roots(&self, roots: &Vector<B>, ys: &Vector<B>) -> FieldResult<Vector<B>> {
        check_operands(self, roots, ys)?;
        let n: usize = check_roots(roots)?;
        check_len("interpolate_roots", ys.len(), n)?;
        let n_inv: B::Elem = inv_len(self, n)?;
        let plan: B::FftPlan = B::fft_plan_impl(self, &inverse_roots(roots.as_slice()))?;
        let mut evals: Vec<B::Elem> = zeros(self, n);
        B::fft_apply_impl(self, &plan, &mut evals, ys.as_slice())?;
        let mut res: Vec<B::Elem> = zeros(self, n);
        B::vec_mul_scalar_impl(self, &mut res, &evals, &n_inv);
        Ok(wrap(self, res))
    }

    fn interpolate_roots_matrix(&self, roots: &Vector<B>, ys: &Matrix<B>) -> FieldResult<Matrix<B>> {
        self.check_vector(roots)?;
        self.check_matrix(ys)?;
        let n: usize = check_roots(roots)?;
        check_len("interpolate_roots_matrix", ys.cols(), n)?;
        let n_inv: B::Elem = inv_len(self, n)?;
        let plan: B::FftPlan = B::fft_plan_impl(self, &inverse_roots(roots.as_slice()))?;
        let mut evals: Vec<B::Elem> = zeros(self, n);
        let mut res: Vec<B::Elem> = zeros(self, ys.rows() * n);
        for (out, row) in res.chunks_exact_mut(n).zip(ys.iter_rows()) {
            B::fft_apply_impl(self, &plan, &mut evals, row)?;
            B::vec_mul_scalar_impl(self, out, &evals, &n_inv);
        }
        Ok(Matrix::from_elems(self, res, ys.rows(), n))
    }
}
