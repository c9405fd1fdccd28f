use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::{ScalarImpl, VecKernelImpl},
};

/// `a + b`, the shorter operand zero-padded.
pub fn poly_add_ref<B: Backend + VecKernelImpl<B>>(field: &Field<B>, a: &[B::Elem], b: &[B::Elem]) -> Vec<B::Elem> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut res: Vec<B::Elem> = long.to_vec();
    let k: usize = short.len();
    B::vec_add_impl(field, &mut res[..k], &long[..k], short);
    res
}

/// `a - b`, the shorter operand zero-padded.
pub fn poly_sub_ref<B: Backend + VecKernelImpl<B>>(field: &Field<B>, a: &[B::Elem], b: &[B::Elem]) -> Vec<B::Elem> {
    let n: usize = a.len().max(b.len());
    let k: usize = a.len().min(b.len());
    let mut res: Vec<B::Elem> = Vec::with_capacity(n);
    res.extend_from_slice(&a[..k]);
    B::vec_sub_impl(field, &mut res[..k], &a[..k], &b[..k]);
    if a.len() > k {
        res.extend_from_slice(&a[k..]);
    } else {
        let tail_start: usize = res.len();
        res.extend_from_slice(&b[k..]);
        B::vec_neg_impl(field, &mut res[tail_start..], &b[k..]);
    }
    res
}

/// Schoolbook product, length `len(a) + len(b) - 1` (empty if either is empty).
pub fn poly_mul_ref<B: Backend + ScalarImpl<B> + VecKernelImpl<B>>(
    field: &Field<B>,
    a: &[B::Elem],
    b: &[B::Elem],
) -> Vec<B::Elem> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let m: usize = b.len();
    let mut res: Vec<B::Elem> = vec![B::elem_zero_impl(field); a.len() + m - 1];
    let mut term: Vec<B::Elem> = vec![B::elem_zero_impl(field); m];
    let mut acc: Vec<B::Elem> = vec![B::elem_zero_impl(field); m];

    for (i, ai) in a.iter().enumerate() {
        B::vec_mul_scalar_impl(field, &mut term, b, ai);
        acc.clone_from_slice(&res[i..i + m]);
        B::vec_add_impl(field, &mut res[i..i + m], &acc, &term);
    }

    res
}

/// Index of the last nonzero coefficient, `None` for the zero polynomial.
pub fn poly_degree<B: Backend + ScalarImpl<B>>(field: &Field<B>, p: &[B::Elem]) -> Option<usize> {
    p.iter().rposition(|c| !B::elem_is_zero_impl(field, c))
}

/// Long division `a = q * b + r` with `deg(r) < deg(b)`.
///
/// The quotient has length `max(len(a) - deg(b), 1)` and the remainder length `deg(b)`.
pub fn poly_div_rem_ref<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    a: &[B::Elem],
    b: &[B::Elem],
) -> FieldResult<(Vec<B::Elem>, Vec<B::Elem>)> {
    let db: usize = poly_degree(field, b).ok_or(FieldError::DivisionByZero)?;
    let lead_inv: B::Elem = B::elem_inv_impl(field, &b[db])?;

    let mut rem: Vec<B::Elem> = a.to_vec();
    if rem.len() < db {
        rem.resize(db, B::elem_zero_impl(field));
    }

    let q_len: usize = a.len().saturating_sub(db).max(1);
    let mut quo: Vec<B::Elem> = vec![B::elem_zero_impl(field); q_len];

    for i in (0..a.len().saturating_sub(db)).rev() {
        let coef: B::Elem = B::elem_mul_impl(field, &rem[i + db], &lead_inv);
        for (j, bj) in b[..=db].iter().enumerate() {
            let t: B::Elem = B::elem_mul_impl(field, &coef, bj);
            rem[i + j] = B::elem_sub_impl(field, &rem[i + j], &t);
        }
        quo[i] = coef;
    }

    rem.truncate(db);
    Ok((quo, rem))
}

/// Horner evaluation; the empty polynomial evaluates to zero.
pub fn poly_eval_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, p: &[B::Elem], x: &B::Elem) -> B::Elem {
    p.iter().rev().fold(B::elem_zero_impl(field), |acc, c| {
        B::elem_add_impl(field, &B::elem_mul_impl(field, &acc, x), c)
    })
}
