use itertools::izip;

use fieldkit_hal::{error::FieldResult, layouts::Field, oep::FftImpl, reference::fft::check_fft_dims};

use crate::{
    PrimeFixed,
    montgomery::{Montgomery, MontgomeryPrecomp},
    scratch::ScratchOwned,
};

/// Twiddles of a power-of-two evaluation domain, in Montgomery form.
///
/// The table is carved from scratch memory and lives as long as the call
/// that planned it.
pub struct FixedFftPlan<const L: usize> {
    roots: ScratchOwned<L>,
    log_n: u32,
}

impl<const L: usize> FixedFftPlan<L> {
    #[inline]
    pub fn n(&self) -> usize {
        self.roots.available()
    }

    /// Whether the twiddle table exceeded the configured working memory.
    #[inline]
    pub fn over_budget(&self) -> bool {
        self.roots.over_budget()
    }
}

#[inline(always)]
fn bit_reverse(i: usize, log_n: u32) -> usize {
    if log_n == 0 {
        0
    } else {
        i.reverse_bits() >> (usize::BITS - log_n)
    }
}

impl<const L: usize> FftImpl<Self> for PrimeFixed<L> {
    type FftPlan = FixedFftPlan<L>;

    fn fft_plan_impl(field: &Field<Self>, roots: &[[u64; L]]) -> FieldResult<FixedFftPlan<L>> {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        let n: usize = roots.len();
        check_fft_dims(n, n, 0)?;
        let mut table: ScratchOwned<L> = ScratchOwned::alloc(field.config(), n);
        for (t, w) in izip!(table.as_mut_slice().iter_mut(), roots.iter()) {
            *t = mont.prepare(w);
        }
        Ok(FixedFftPlan {
            roots: table,
            log_n: n.trailing_zeros(),
        })
    }

    /// Iterative radix-2 decimation in time: bit-reversed load, then
    /// `log2(n)` butterfly passes with twiddle `w^(j * n / len)` at width `len`.
    fn fft_apply_impl(
        field: &Field<Self>,
        plan: &FixedFftPlan<L>,
        res: &mut [[u64; L]],
        coeffs: &[[u64; L]],
    ) -> FieldResult<()> {
        let mont: &MontgomeryPrecomp<L> = &field.handle().mont;
        let n: usize = plan.n();
        check_fft_dims(n, res.len(), coeffs.len())?;
        let twiddles: &[Montgomery<L>] = plan.roots.as_slice();

        res.fill([0u64; L]);
        for (i, c) in coeffs.iter().enumerate() {
            res[bit_reverse(i, plan.log_n)] = *c;
        }

        let mut len: usize = 2;
        while len <= n {
            let half: usize = len >> 1;
            let step: usize = n / len;
            for block in res.chunks_exact_mut(len) {
                let (lo, hi) = block.split_at_mut(half);
                for (j, (u, v)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let t: [u64; L] = mont.mul_external(&twiddles[j * step], v);
                    *v = mont.sub(u, &t);
                    *u = mont.add(u, &t);
                }
            }
            len <<= 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::bit_reverse;

    #[test]
    fn bit_reversal() {
        assert_eq!(bit_reverse(0, 0), 0);
        assert_eq!(bit_reverse(1, 1), 1);
        assert_eq!(bit_reverse(1, 3), 4);
        assert_eq!(bit_reverse(3, 3), 6);
        assert_eq!(bit_reverse(6, 4), 6);
        assert_eq!(bit_reverse(1, 4), 8);
    }
}
