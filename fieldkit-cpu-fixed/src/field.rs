//! [`Backend`] and [`FieldNewImpl`] for [`PrimeFixed`](crate::PrimeFixed).

use num_bigint::BigUint;

use fieldkit_hal::{
    config::FieldConfig,
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::FieldNewImpl,
};

use crate::{PrimeFixed, limbs, montgomery::MontgomeryPrecomp};

/// Handle of a `Field<PrimeFixed<L>>`.
pub struct PrimeFixedHandle<const L: usize> {
    pub(crate) mont: MontgomeryPrecomp<L>,
    /// Fermat exponent `p - 2` as little-endian words.
    pub(crate) p_minus_two: Vec<u64>,
}

impl<const L: usize> PrimeFixedHandle<L> {
    #[inline]
    pub fn montgomery(&self) -> &MontgomeryPrecomp<L> {
        &self.mont
    }
}

impl<const L: usize> Backend for PrimeFixed<L> {
    type Elem = [u64; L];
    type Handle = PrimeFixedHandle<L>;

    const NAME: &'static str = match L {
        1 => "cpu-fixed-64",
        2 => "cpu-fixed-128",
        3 => "cpu-fixed-192",
        4 => "cpu-fixed-256",
        _ => "cpu-fixed",
    };

    #[inline]
    fn elem_to_biguint(a: &[u64; L]) -> BigUint {
        limbs::to_biguint(a)
    }

    #[inline]
    fn elem_write_le(a: &[u64; L], out: &mut [u8]) {
        limbs::write_le(a, out);
    }
}

/// Rejects moduli the `L`-limb Montgomery representation cannot hold.
fn check_modulus<const L: usize>(modulus: &BigUint) -> FieldResult<()> {
    let max_bits: u64 = 64 * L as u64 - 1;
    if modulus < &BigUint::from(3u32) {
        return Err(FieldError::UnsupportedModulus(format!(
            "fixed backend requires a modulus of at least 3, got {modulus}"
        )));
    }
    if !modulus.bit(0) {
        return Err(FieldError::UnsupportedModulus(format!(
            "fixed backend requires an odd modulus, got {modulus}"
        )));
    }
    if modulus.bits() > max_bits {
        return Err(FieldError::UnsupportedModulus(format!(
            "{}-bit modulus exceeds the {max_bits}-bit limit of {}",
            modulus.bits(),
            PrimeFixed::<L>::NAME
        )));
    }
    Ok(())
}

impl<const L: usize> FieldNewImpl<Self> for PrimeFixed<L> {
    fn new_impl(modulus: &BigUint, config: &FieldConfig) -> FieldResult<Field<Self>> {
        check_modulus::<L>(modulus)?;
        let handle: PrimeFixedHandle<L> = PrimeFixedHandle {
            mont: MontgomeryPrecomp::new(modulus),
            p_minus_two: (modulus - 2u32).to_u64_digits(),
        };
        Field::from_handle(modulus.clone(), handle, config.clone())
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::One;

    use fieldkit_hal::{config::FieldConfig, error::FieldError, layouts::Field, oep::FieldNewImpl};

    use crate::{PrimeFixed, PrimeFixed64, PrimeFixed128};

    #[test]
    fn rejects_unsupported_moduli() {
        let config: FieldConfig = FieldConfig::default();
        for p in [0u64, 1, 2, 15, 96, 561, 3215031751] {
            assert!(
                matches!(
                    PrimeFixed64::new_impl(&BigUint::from(p), &config),
                    Err(FieldError::UnsupportedModulus(_))
                ),
                "p={p}"
            );
        }
        let goldilocks: BigUint = BigUint::from(0xFFFF_FFFF_0000_0001u64);
        assert!(matches!(
            PrimeFixed64::new_impl(&goldilocks, &config),
            Err(FieldError::UnsupportedModulus(_))
        ));
        let field: Field<PrimeFixed128> = PrimeFixed128::new_impl(&goldilocks, &config).unwrap();
        assert_eq!(field.element_size(), 8);

        // 2^64 + 1 = 274177 * 67280421310721
        let fermat_64: BigUint = (BigUint::one() << 64) + 1u32;
        assert!(matches!(
            PrimeFixed128::new_impl(&fermat_64, &config),
            Err(FieldError::UnsupportedModulus(_))
        ));

        let too_wide: BigUint = (BigUint::one() << 255) + 95u32;
        assert!(matches!(
            PrimeFixed::<4>::new_impl(&too_wide, &config),
            Err(FieldError::UnsupportedModulus(_))
        ));
    }
}
