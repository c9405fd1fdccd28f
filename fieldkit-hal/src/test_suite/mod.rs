//! Backend-parametric tests.
//!
//! Single-backend tests check one [crate::layouts::Field] against plain
//! [num_bigint::BigUint] arithmetic; the `cross` tests check a backend against the
//! reference backend value-for-value and byte-for-byte.

pub mod cross;
pub mod matrix;
pub mod moduli;
pub mod ownership;
pub mod poly;
pub mod quartic;
pub mod roots;
pub mod scalar;
pub mod vector;

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::source::Source;

/// `n` uniform values in `[0, modulus)`.
pub fn random_values(modulus: &BigUint, source: &mut Source, n: usize) -> Vec<BigUint> {
    (0..n).map(|_| source.next_below(modulus)).collect()
}

/// `n` uniform values in `[1, modulus)`.
pub fn nonzero_values(modulus: &BigUint, source: &mut Source, n: usize) -> Vec<BigUint> {
    (0..n)
        .map(|_| loop {
            let x: BigUint = source.next_below(modulus);
            if !x.is_zero() {
                break x;
            }
        })
        .collect()
}

/// `n` pairwise distinct values; requires `n <= modulus`.
pub fn distinct_values(modulus: &BigUint, source: &mut Source, n: usize) -> Vec<BigUint> {
    assert!(BigUint::from(n) <= *modulus, "cannot draw {n} distinct values below {modulus}");
    let mut seen: HashSet<BigUint> = HashSet::with_capacity(n);
    let mut values: Vec<BigUint> = Vec::with_capacity(n);
    while values.len() < n {
        let x: BigUint = source.next_below(modulus);
        if seen.insert(x.clone()) {
            values.push(x);
        }
    }
    values
}

/// `0, 1, 2, p - 2, p - 1` (deduplicated, for `p >= 3`).
pub fn edge_values(modulus: &BigUint) -> Vec<BigUint> {
    let mut values: Vec<BigUint> = vec![
        BigUint::zero(),
        BigUint::one(),
        BigUint::from(2u32) % modulus,
        modulus - 2u32,
        modulus - 1u32,
    ];
    values.sort();
    values.dedup();
    values
}

/// Size of the FFT domain used by the tests: `2^min(two_adicity, max_log)`.
pub fn fft_size(two_adicity: u32, max_log: u32) -> usize {
    1usize << two_adicity.min(max_log)
}

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        modulus = $modulus:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use fieldkit_hal::{api::FieldNew, config::FieldConfig, layouts::Field};

            use once_cell::sync::Lazy;

            static FIELD: Lazy<Field<$backend>> = Lazy::new(|| {
                Field::<$backend>::new(&$modulus, &FieldConfig::default()).expect("field construction")
            });

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*FIELD);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        modulus = $modulus:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use fieldkit_hal::{api::FieldNew, config::FieldConfig, layouts::Field};

            use once_cell::sync::Lazy;

            static FIELD_REF: Lazy<Field<$backend_ref>> = Lazy::new(|| {
                Field::<$backend_ref>::new(&$modulus, &FieldConfig::reference()).expect("reference field construction")
            });
            static FIELD_TEST: Lazy<Field<$backend_test>> = Lazy::new(|| {
                Field::<$backend_test>::new(&$modulus, &FieldConfig::optimized()).expect("test field construction")
            });

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*FIELD_REF, &*FIELD_TEST);
                }
            )+
        }
    };
}
