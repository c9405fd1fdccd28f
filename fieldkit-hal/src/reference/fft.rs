use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::ScalarImpl,
};

/// Validates the sizes of a transform over `n` roots.
pub fn check_fft_dims(n: usize, res_len: usize, coeffs_len: usize) -> FieldResult<()> {
    if !n.is_power_of_two() {
        return Err(FieldError::InvalidOrder {
            order: n as u64,
            reason: "number of roots must be a power of two",
        });
    }
    if res_len != n {
        return Err(FieldError::dim(format!("fft: output of {res_len} elements for {n} roots")));
    }
    if coeffs_len > n {
        return Err(FieldError::dim(format!("fft: {coeffs_len} coefficients exceed {n} roots")));
    }
    Ok(())
}

/// Evaluates the polynomial `coeffs` (zero-padded to `res.len()`) at every entry of
/// `roots`, with `roots = [w^0, ..., w^{n-1}]` for a primitive `n`-th root `w`.
///
/// Recursive radix-2 Cooley-Tukey: `P(x) = E(x^2) + x * O(x^2)`.
pub fn fft_ref<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    roots: &[B::Elem],
    res: &mut [B::Elem],
    coeffs: &[B::Elem],
) -> FieldResult<()> {
    let n: usize = roots.len();
    check_fft_dims(n, res.len(), coeffs.len())?;

    let mut padded: Vec<B::Elem> = coeffs.to_vec();
    padded.resize(n, B::elem_zero_impl(field));

    fft_rec(field, roots, &padded, 0, 1, res);
    Ok(())
}

fn fft_rec<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    roots: &[B::Elem],
    values: &[B::Elem],
    offset: usize,
    stride: usize,
    res: &mut [B::Elem],
) {
    let m: usize = res.len();
    if m == 1 {
        res[0] = values[offset].clone();
        return;
    }

    let half: usize = m >> 1;
    let (lo, hi) = res.split_at_mut(half);
    fft_rec(field, roots, values, offset, stride << 1, lo);
    fft_rec(field, roots, values, offset + stride, stride << 1, hi);

    // At this depth the roots of order m are roots[i * stride].
    for i in 0..half {
        let t: B::Elem = B::elem_mul_impl(field, &hi[i], &roots[i * stride]);
        hi[i] = B::elem_sub_impl(field, &lo[i], &t);
        lo[i] = B::elem_add_impl(field, &lo[i], &t);
    }
}

/// `[r0, r_{n-1}, ..., r1]`: the power series of `w^{-1}` given that of `w`.
pub fn inverse_roots<E: Clone>(roots: &[E]) -> Vec<E> {
    let mut inv: Vec<E> = Vec::with_capacity(roots.len());
    if let Some((first, rest)) = roots.split_first() {
        inv.push(first.clone());
        inv.extend(rest.iter().rev().cloned());
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::{check_fft_dims, inverse_roots};
    use crate::error::FieldError;

    #[test]
    fn fft_dims() {
        assert!(check_fft_dims(8, 8, 5).is_ok());
        assert!(check_fft_dims(1, 1, 0).is_ok());
        assert!(matches!(check_fft_dims(6, 6, 6), Err(FieldError::InvalidOrder { order: 6, .. })));
        assert!(matches!(check_fft_dims(0, 0, 0), Err(FieldError::InvalidOrder { .. })));
        assert!(matches!(check_fft_dims(8, 4, 4), Err(FieldError::DimensionMismatch(_))));
        assert!(matches!(check_fft_dims(8, 8, 9), Err(FieldError::DimensionMismatch(_))));
    }

    #[test]
    fn inverse_roots_order() {
        assert_eq!(inverse_roots(&[1, 2, 3, 4]), vec![1, 4, 3, 2]);
        assert_eq!(inverse_roots(&[7]), vec![7]);
        assert!(inverse_roots::<u8>(&[]).is_empty());
    }
}
