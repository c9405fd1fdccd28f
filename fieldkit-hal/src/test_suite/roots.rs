use num_bigint::BigUint;
use num_traits::One;

use crate::{
    api::{FiniteField, RootsOfUnity},
    error::FieldError,
    layouts::{Backend, Field, Vector},
    test_suite::fft_size,
};

pub fn test_root_of_unity<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let s: u32 = field.two_adicity();

    for log_order in 0..=s.min(12) {
        let order: u64 = 1 << log_order;
        let g: BigUint = field.get_root_of_unity(order).unwrap();
        assert!(g < *p);
        assert_eq!(g.modpow(&BigUint::from(order), p), BigUint::one(), "order {order}");
        if log_order > 0 {
            assert_ne!(g.modpow(&BigUint::from(order >> 1), p), BigUint::one(), "order {order} not primitive");
        }
        assert_eq!(g, field.get_root_of_unity(order).unwrap());
    }

    // Full 2-Sylow order.
    let order: u64 = 1 << s;
    let g: BigUint = field.get_root_of_unity(order).unwrap();
    assert_eq!(g.modpow(&BigUint::from(order), p), BigUint::one());
    assert_eq!(g.modpow(&BigUint::from(order >> 1), p), p - 1u32);
}

pub fn test_root_of_unity_invalid_order<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let s: u32 = field.two_adicity();
    for order in [0u64, 3, 12, 1u64.checked_shl(s + 1).unwrap_or(0)] {
        assert!(
            matches!(field.get_root_of_unity(order), Err(FieldError::InvalidOrder { .. })),
            "order {order}"
        );
    }
}

pub fn test_power_series<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let n: usize = fft_size(field.two_adicity(), 4);
    let g: BigUint = field.get_root_of_unity(n as u64).unwrap();

    let series: Vector<B> = field.get_power_series(&g, n + 1);
    assert_eq!(series.len(), n + 1);
    for (k, x) in series.to_values().iter().enumerate() {
        assert_eq!(*x, g.modpow(&BigUint::from(k), p), "k={k}");
    }
    assert_eq!(series.get(n).unwrap(), BigUint::one());

    assert!(field.get_power_series(&g, 0).is_empty());
    assert_eq!(field.get_power_series(0u64, 3).to_values()[0], BigUint::one());
}
