use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::{BatchInvImpl, ScalarImpl, VecKernelImpl},
    reference::poly::poly_eval_ref,
};

/// `prod_i (X - xs[i])`, length `len(xs) + 1`.
pub(crate) fn zpoly_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, xs: &[B::Elem]) -> Vec<B::Elem> {
    let n: usize = xs.len();
    let mut z: Vec<B::Elem> = vec![B::elem_zero_impl(field); n + 1];
    z[0] = B::elem_one_impl(field);
    for (k, x) in xs.iter().enumerate() {
        for j in (1..=k + 1).rev() {
            let t: B::Elem = B::elem_mul_impl(field, x, &z[j]);
            z[j] = B::elem_sub_impl(field, &z[j - 1], &t);
        }
        z[0] = B::elem_neg_impl(field, &B::elem_mul_impl(field, x, &z[0]));
    }
    z
}

/// Synthetic division of `z` by `(X - x)`, assuming `x` is a root of `z`.
fn div_by_linear<B: Backend + ScalarImpl<B>>(field: &Field<B>, z: &[B::Elem], x: &B::Elem, res: &mut [B::Elem]) {
    let n: usize = res.len();
    debug_assert_eq!(z.len(), n + 1);
    res[n - 1] = z[n].clone();
    for j in (1..n).rev() {
        let t: B::Elem = B::elem_mul_impl(field, x, &res[j]);
        res[j - 1] = B::elem_add_impl(field, &z[j], &t);
    }
}

/// Lagrange interpolation through `(xs[i], ys[i])`; result length `len(xs)`.
///
/// Every numerator `z(X) / (X - xs[i])` is evaluated at its own `xs[i]` and the
/// denominators are inverted together, so a repeated x coordinate surfaces as a zero
/// denominator and is reported as [FieldError::DuplicateXCoordinate].
pub(crate) fn interpolate_ref<B: Backend + ScalarImpl<B> + VecKernelImpl<B> + BatchInvImpl<B>>(
    field: &Field<B>,
    xs: &[B::Elem],
    ys: &[B::Elem],
) -> FieldResult<Vec<B::Elem>> {
    debug_assert_eq!(xs.len(), ys.len());
    let n: usize = xs.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let z: Vec<B::Elem> = zpoly_ref(field, xs);

    let mut numerators: Vec<B::Elem> = vec![B::elem_zero_impl(field); n * n];
    let mut denominators: Vec<B::Elem> = Vec::with_capacity(n);
    for (num, x) in numerators.chunks_exact_mut(n).zip(xs) {
        div_by_linear(field, &z, x, num);
        denominators.push(poly_eval_ref(field, num, x));
    }

    let mut inv_den: Vec<B::Elem> = vec![B::elem_zero_impl(field); n];
    B::batch_inv_impl(field, &mut inv_den, &denominators).map_err(|err| match err {
        FieldError::DivisionByZero => FieldError::DuplicateXCoordinate,
        other => other,
    })?;

    let mut res: Vec<B::Elem> = vec![B::elem_zero_impl(field); n];
    let mut term: Vec<B::Elem> = vec![B::elem_zero_impl(field); n];
    let mut acc: Vec<B::Elem> = vec![B::elem_zero_impl(field); n];
    for ((num, y), d) in numerators.chunks_exact(n).zip(ys).zip(&inv_den) {
        let scale: B::Elem = B::elem_mul_impl(field, y, d);
        B::vec_mul_scalar_impl(field, &mut term, num, &scale);
        acc.clone_from_slice(&res);
        B::vec_add_impl(field, &mut res, &acc, &term);
    }

    Ok(res)
}
