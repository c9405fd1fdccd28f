//! Closed-form degree-3 (4-point) interpolation and evaluation over batches of rows.
//!
//! Rows are stored row-major with exactly 4 entries each.

use itertools::izip;

use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::{BatchInvImpl, ScalarImpl},
};

/// Coefficients `[c0, c1, c2, c3]` of `(X - a)(X - b)(X - c)` given `a`, `b`, `c`
/// and their pairwise products.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn cubic_from_roots<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    a: &B::Elem,
    b: &B::Elem,
    c: &B::Elem,
    ab: &B::Elem,
    ac: &B::Elem,
    bc: &B::Elem,
    out: &mut [B::Elem],
) {
    let abc: B::Elem = B::elem_mul_impl(field, a, bc);
    let s2: B::Elem = B::elem_add_impl(field, &B::elem_add_impl(field, ab, ac), bc);
    let s1: B::Elem = B::elem_add_impl(field, &B::elem_add_impl(field, a, b), c);
    out[0] = B::elem_neg_impl(field, &abc);
    out[1] = s2;
    out[2] = B::elem_neg_impl(field, &s1);
    out[3] = B::elem_one_impl(field);
}

#[inline(always)]
fn eval_cubic<B: Backend + ScalarImpl<B>>(field: &Field<B>, p: &[B::Elem], x: &B::Elem) -> B::Elem {
    let x2: B::Elem = B::elem_mul_impl(field, x, x);
    let x3: B::Elem = B::elem_mul_impl(field, &x2, x);
    let mut acc: B::Elem = B::elem_add_impl(field, &p[0], &B::elem_mul_impl(field, &p[1], x));
    acc = B::elem_add_impl(field, &acc, &B::elem_mul_impl(field, &p[2], &x2));
    B::elem_add_impl(field, &acc, &B::elem_mul_impl(field, &p[3], &x3))
}

/// Interpolates every row of `xs`/`ys` (`n x 4`, row-major) into 4 coefficients.
///
/// The `4n` Lagrange denominators of the whole batch share one batch inversion.
pub(crate) fn interpolate_quartic_batch_ref<B: Backend + ScalarImpl<B> + BatchInvImpl<B>>(
    field: &Field<B>,
    xs: &[B::Elem],
    ys: &[B::Elem],
) -> FieldResult<Vec<B::Elem>> {
    debug_assert_eq!(xs.len() % 4, 0);
    debug_assert_eq!(xs.len(), ys.len());

    let rows: usize = xs.len() / 4;
    let zero: B::Elem = B::elem_zero_impl(field);

    // 4 basis numerators of 4 coefficients per row.
    let mut numerators: Vec<B::Elem> = vec![zero.clone(); rows * 16];
    let mut denominators: Vec<B::Elem> = vec![zero.clone(); rows * 4];

    for (x, num, den) in izip!(
        xs.chunks_exact(4),
        numerators.chunks_exact_mut(16),
        denominators.chunks_exact_mut(4)
    ) {
        let x01: B::Elem = B::elem_mul_impl(field, &x[0], &x[1]);
        let x02: B::Elem = B::elem_mul_impl(field, &x[0], &x[2]);
        let x03: B::Elem = B::elem_mul_impl(field, &x[0], &x[3]);
        let x12: B::Elem = B::elem_mul_impl(field, &x[1], &x[2]);
        let x13: B::Elem = B::elem_mul_impl(field, &x[1], &x[3]);
        let x23: B::Elem = B::elem_mul_impl(field, &x[2], &x[3]);

        cubic_from_roots(field, &x[1], &x[2], &x[3], &x12, &x13, &x23, &mut num[0..4]);
        cubic_from_roots(field, &x[0], &x[2], &x[3], &x02, &x03, &x23, &mut num[4..8]);
        cubic_from_roots(field, &x[0], &x[1], &x[3], &x01, &x03, &x13, &mut num[8..12]);
        cubic_from_roots(field, &x[0], &x[1], &x[2], &x01, &x02, &x12, &mut num[12..16]);

        for (k, d) in den.iter_mut().enumerate() {
            *d = eval_cubic(field, &num[4 * k..4 * k + 4], &x[k]);
        }
    }

    let mut inv_den: Vec<B::Elem> = vec![zero.clone(); rows * 4];
    B::batch_inv_impl(field, &mut inv_den, &denominators).map_err(|err| match err {
        FieldError::DivisionByZero => FieldError::DuplicateXCoordinate,
        other => other,
    })?;

    let mut res: Vec<B::Elem> = vec![zero; rows * 4];
    for (out, num, y, d) in izip!(
        res.chunks_exact_mut(4),
        numerators.chunks_exact(16),
        ys.chunks_exact(4),
        inv_den.chunks_exact(4)
    ) {
        for k in 0..4 {
            let scale: B::Elem = B::elem_mul_impl(field, &y[k], &d[k]);
            for (o, c) in out.iter_mut().zip(&num[4 * k..4 * k + 4]) {
                *o = B::elem_add_impl(field, o, &B::elem_mul_impl(field, c, &scale));
            }
        }
    }

    Ok(res)
}

/// Evaluates row `i` of `polys` (`n x 4`, row-major) at `xs[i]`.
pub(crate) fn eval_quartic_batch_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, polys: &[B::Elem], xs: &[B::Elem]) -> Vec<B::Elem> {
    debug_assert_eq!(polys.len(), xs.len() * 4);
    izip!(polys.chunks_exact(4), xs)
        .map(|(p, x)| eval_cubic(field, p, x))
        .collect()
}
