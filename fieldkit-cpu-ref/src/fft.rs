use num_bigint::BigUint;

use fieldkit_hal::{
    error::FieldResult,
    layouts::Field,
    oep::FftImpl,
    reference::fft::{check_fft_dims, fft_ref},
};

use crate::PrimeRef;

impl FftImpl<Self> for PrimeRef {
    /// The recursive transform reads the power series directly.
    type FftPlan = Vec<BigUint>;

    fn fft_plan_impl(_field: &Field<Self>, roots: &[BigUint]) -> FieldResult<Vec<BigUint>> {
        check_fft_dims(roots.len(), roots.len(), 0)?;
        Ok(roots.to_vec())
    }

    fn fft_apply_impl(field: &Field<Self>, plan: &Self::FftPlan, res: &mut [BigUint], coeffs: &[BigUint]) -> FieldResult<()> {
        fft_ref(field, plan, res, coeffs)
    }
}
