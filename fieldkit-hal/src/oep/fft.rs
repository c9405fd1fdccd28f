use crate::{
    error::FieldResult,
    layouts::{Backend, Field},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT
/// * See [crate::reference::fft::fft_ref] for reference code.
/// * See [crate::api::PolyEvaluate::eval_poly_at_roots] for corresponding public API.
///
/// A plan holds whatever the backend precomputes from the roots (e.g. twiddles in
/// Montgomery form) and is shared across every row of a batched transform.
pub trait FftImpl<B: Backend> {
    type FftPlan: Send + Sync;

    /// `roots` is the power series `[w^0, ..., w^{n-1}]` of a primitive `n`-th root
    /// of unity. Fails with `InvalidOrder` unless `n` is a power of two.
    fn fft_plan_impl(field: &Field<B>, roots: &[B::Elem]) -> FieldResult<Self::FftPlan>;

    /// `res[k] = sum_j coeffs[j] * roots[k]^j`; `coeffs` is zero-padded to `res.len()`.
    /// Fails with `DimensionMismatch` unless `res.len() == n` and `coeffs.len() <= n`.
    fn fft_apply_impl(field: &Field<B>, plan: &Self::FftPlan, res: &mut [B::Elem], coeffs: &[B::Elem]) -> FieldResult<()>;
}
