use num_bigint::BigUint;

use fieldkit_cpu_ref::PrimeRef;
use fieldkit_hal::{
    api::{FieldNew, FieldScalarOps, PolyEvaluate, PolyInterpolate, RootsOfUnity, VectorAlloc, VectorArithmetic},
    backend_test_suite,
    config::FieldConfig,
    cross_backend_test_suite,
    error::FieldError,
    layouts::{Backend, Field, Vector},
    oep::{BatchInvImpl, FftImpl},
    test_suite::{
        moduli::{baby_bear, bn254_scalar},
        ownership::test_field_mismatch,
    },
};

use crate::{PrimeFixed, PrimeFixed64, limbs_for_bits};

#[test]
fn limb_selection() {
    assert_eq!(limbs_for_bits(2), Some(1));
    assert_eq!(limbs_for_bits(63), Some(1));
    assert_eq!(limbs_for_bits(64), Some(2));
    assert_eq!(limbs_for_bits(127), Some(2));
    assert_eq!(limbs_for_bits(128), Some(3));
    assert_eq!(limbs_for_bits(255), Some(4));
    assert_eq!(limbs_for_bits(256), None);
    assert_eq!(PrimeFixed::<2>::NAME, "cpu-fixed-128");
}

#[test]
fn small_field_arithmetic() {
    let field: Field<PrimeFixed64> = Field::new(&BigUint::from(11u32), &FieldConfig::optimized()).unwrap();
    assert_eq!(field.add(5u64, 6u64), BigUint::from(0u32));
    assert_eq!(field.sub(5u64, 6u64), BigUint::from(10u32));
    assert_eq!(field.mul(5u64, 6u64), BigUint::from(8u32));
    assert_eq!(field.div(1u64, 2u64).unwrap(), BigUint::from(6u32));
    assert_eq!(field.exp(2u64, -1).unwrap(), BigUint::from(6u32));
    assert_eq!(field.exp(0u64, 0).unwrap(), BigUint::from(1u32));
    assert_eq!(field.inv(0u64), Err(FieldError::DivisionByZero));
    assert_eq!(field.to_string(), "GF(11) [cpu-fixed-64]");
}

#[test]
fn batch_inversion_over_budget() {
    // 64 KiB budget, 8 bytes per element, 2 buffers of n elements.
    let config: FieldConfig = FieldConfig::optimized().with_initial_memory(64 << 10);
    let field: Field<PrimeFixed64> = Field::new(&BigUint::from(2013265921u64), &config).unwrap();
    let n: usize = 5000;
    let v: Vector<PrimeFixed64> = field.new_vector_from(&(1..=n as u64).collect::<Vec<u64>>());
    let inv: Vector<PrimeFixed64> = field.inv_vector_elements(&v).unwrap();
    let ones: Vector<PrimeFixed64> = field.mul_vector_elements(&v, &inv).unwrap();
    assert!(ones.to_values().iter().all(|x| *x == BigUint::from(1u32)));
}

#[test]
fn fft_single_point() {
    let field: Field<PrimeFixed<2>> = Field::new(&BigUint::from(0xFFFF_FFFF_0000_0001u64), &FieldConfig::optimized()).unwrap();
    let roots: Vector<PrimeFixed<2>> = field.get_power_series(field.get_root_of_unity(1).unwrap(), 1);
    let evals: Vector<PrimeFixed<2>> = field.eval_poly_at_roots(&field.new_vector_from(&[42u64]), &roots).unwrap();
    assert_eq!(evals.to_values(), vec![BigUint::from(42u32)]);
}

#[test]
fn fft_twiddles_use_scratch() {
    // 64 KiB budget, 32 bytes per twiddle.
    let config: FieldConfig = FieldConfig::optimized().with_initial_memory(64 << 10);
    let field: Field<PrimeFixed<4>> = Field::new(&bn254_scalar(), &config).unwrap();
    for (n, over) in [(1024usize, false), (4096, true)] {
        let roots: Vector<PrimeFixed<4>> = field.get_power_series(field.get_root_of_unity(n as u64).unwrap(), n);
        let plan = PrimeFixed::<4>::fft_plan_impl(&field, roots.as_slice()).unwrap();
        assert_eq!(plan.n(), n);
        assert_eq!(plan.over_budget(), over, "n={n}");

        let poly: Vector<PrimeFixed<4>> = field.prng_vector(b"twiddles", n);
        let evals: Vector<PrimeFixed<4>> = field.eval_poly_at_roots(&poly, &roots).unwrap();
        assert_eq!(field.interpolate_roots(&roots, &evals).unwrap(), poly);
    }
}

#[test]
fn kernel_length_errors() {
    let field: Field<PrimeFixed64> = Field::new(&baby_bear(), &FieldConfig::optimized()).unwrap();
    let roots: Vector<PrimeFixed64> = field.get_power_series(field.get_root_of_unity(4).unwrap(), 4);
    let w: &[[u64; 1]] = roots.as_slice();

    assert!(matches!(
        PrimeFixed64::fft_plan_impl(&field, &w[..3]),
        Err(FieldError::InvalidOrder { order: 3, .. })
    ));
    let plan = PrimeFixed64::fft_plan_impl(&field, w).unwrap();
    let mut short: Vec<[u64; 1]> = vec![[0]; 3];
    assert!(matches!(
        PrimeFixed64::fft_apply_impl(&field, &plan, &mut short, w),
        Err(FieldError::DimensionMismatch(_))
    ));
    let mut res: Vec<[u64; 1]> = vec![[0]; 4];
    let long: Vec<[u64; 1]> = vec![[1]; 5];
    assert!(matches!(
        PrimeFixed64::fft_apply_impl(&field, &plan, &mut res, &long),
        Err(FieldError::DimensionMismatch(_))
    ));

    let mut out: Vec<[u64; 1]> = vec![[0]; 2];
    assert!(matches!(
        PrimeFixed64::batch_inv_impl(&field, &mut out, w),
        Err(FieldError::DimensionMismatch(_))
    ));
}

#[test]
fn operands_of_another_field_are_rejected() {
    let config: FieldConfig = FieldConfig::optimized();
    let field: Field<PrimeFixed64> = Field::new(&baby_bear(), &config).unwrap();
    let other: Field<PrimeFixed64> = Field::new(&BigUint::from(11u32), &config).unwrap();
    let twin: Field<PrimeFixed64> = Field::new(&baby_bear(), &config).unwrap();
    test_field_mismatch(&field, &other, &twin);
}

#[test]
fn reference_and_fixed_agree_on_tiny_field() {
    let p: BigUint = BigUint::from(17u32);
    let field_ref: Field<PrimeRef> = Field::new(&p, &FieldConfig::reference()).unwrap();
    let field_fixed: Field<PrimeFixed64> = Field::new(&p, &FieldConfig::optimized()).unwrap();
    for a in 0u64..17 {
        for b in 0u64..17 {
            assert_eq!(field_ref.mul(a, b), field_fixed.mul(a, b));
            assert_eq!(field_ref.sub(a, b), field_fixed.sub(a, b));
            assert_eq!(field_ref.div(a, b), field_fixed.div(a, b));
        }
    }
}

macro_rules! cross_suite {
    ($($name:ident => $backend:ty, $modulus:expr);+ $(;)?) => {
        $(
            cross_backend_test_suite! {
                mod $name,
                backend_ref = fieldkit_cpu_ref::PrimeRef,
                backend_test = $backend,
                modulus = $modulus,
                tests = {
                    test_cross_scalar => fieldkit_hal::test_suite::cross::test_cross_scalar,
                    test_cross_random => fieldkit_hal::test_suite::cross::test_cross_random,
                    test_cross_vector => fieldkit_hal::test_suite::cross::test_cross_vector,
                    test_cross_matrix => fieldkit_hal::test_suite::cross::test_cross_matrix,
                    test_cross_fft => fieldkit_hal::test_suite::cross::test_cross_fft,
                    test_cross_poly => fieldkit_hal::test_suite::cross::test_cross_poly,
                    test_cross_interpolation => fieldkit_hal::test_suite::cross::test_cross_interpolation,
                }
            }
        )+
    };
}

cross_suite! {
    cross_baby_bear => crate::PrimeFixed<1>, fieldkit_hal::test_suite::moduli::baby_bear();
    cross_f62 => crate::PrimeFixed<1>, fieldkit_hal::test_suite::moduli::f62();
    cross_goldilocks => crate::PrimeFixed<2>, fieldkit_hal::test_suite::moduli::goldilocks();
    cross_f128 => crate::PrimeFixed<3>, fieldkit_hal::test_suite::moduli::f128();
    cross_bn254 => crate::PrimeFixed<4>, fieldkit_hal::test_suite::moduli::bn254_scalar();
    cross_curve25519 => crate::PrimeFixed<4>, fieldkit_hal::test_suite::moduli::curve25519();
}

macro_rules! full_suite {
    ($($name:ident => $backend:ty, $modulus:expr);+ $(;)?) => {
        $(
            backend_test_suite! {
                mod $name,
                backend = $backend,
                modulus = $modulus,
                tests = {
                    test_field_axioms => fieldkit_hal::test_suite::scalar::test_field_axioms,
                    test_exp => fieldkit_hal::test_suite::scalar::test_exp,
                    test_division_by_zero => fieldkit_hal::test_suite::scalar::test_division_by_zero,
                    test_input_reduction => fieldkit_hal::test_suite::scalar::test_input_reduction,
                    test_encoding => fieldkit_hal::test_suite::scalar::test_encoding,
                    test_random => fieldkit_hal::test_suite::scalar::test_random,
                    test_vector_elementwise => fieldkit_hal::test_suite::vector::test_vector_elementwise,
                    test_vector_dimension_mismatch => fieldkit_hal::test_suite::vector::test_vector_dimension_mismatch,
                    test_batch_inversion => fieldkit_hal::test_suite::vector::test_batch_inversion,
                    test_vector_exp => fieldkit_hal::test_suite::vector::test_vector_exp,
                    test_combine_vectors => fieldkit_hal::test_suite::vector::test_combine_vectors,
                    test_vector_reshape => fieldkit_hal::test_suite::vector::test_vector_reshape,
                    test_matrix_construction => fieldkit_hal::test_suite::matrix::test_matrix_construction,
                    test_matrix_elementwise => fieldkit_hal::test_suite::matrix::test_matrix_elementwise,
                    test_matrix_products => fieldkit_hal::test_suite::matrix::test_matrix_products,
                    test_root_of_unity => fieldkit_hal::test_suite::roots::test_root_of_unity,
                    test_root_of_unity_invalid_order => fieldkit_hal::test_suite::roots::test_root_of_unity_invalid_order,
                    test_power_series => fieldkit_hal::test_suite::roots::test_power_series,
                    test_poly_add_sub => fieldkit_hal::test_suite::poly::test_poly_add_sub,
                    test_poly_mul_div => fieldkit_hal::test_suite::poly::test_poly_mul_div,
                    test_eval_poly_at => fieldkit_hal::test_suite::poly::test_eval_poly_at,
                    test_fft_eval => fieldkit_hal::test_suite::poly::test_fft_eval,
                    test_fft_round_trip => fieldkit_hal::test_suite::poly::test_fft_round_trip,
                    test_fft_matrix => fieldkit_hal::test_suite::poly::test_fft_matrix,
                    test_fft_errors => fieldkit_hal::test_suite::poly::test_fft_errors,
                    test_interpolate => fieldkit_hal::test_suite::poly::test_interpolate,
                    test_quartic_interpolate => fieldkit_hal::test_suite::quartic::test_quartic_interpolate,
                    test_quartic_eval => fieldkit_hal::test_suite::quartic::test_quartic_eval,
                    test_quartic_errors => fieldkit_hal::test_suite::quartic::test_quartic_errors,
                }
            }
        )+
    };
}

full_suite! {
    fixed64_baby_bear => crate::PrimeFixed<1>, fieldkit_hal::test_suite::moduli::baby_bear();
    fixed128_goldilocks => crate::PrimeFixed<2>, fieldkit_hal::test_suite::moduli::goldilocks();
    fixed192_f128 => crate::PrimeFixed<3>, fieldkit_hal::test_suite::moduli::f128();
    fixed256_bn254 => crate::PrimeFixed<4>, fieldkit_hal::test_suite::moduli::bn254_scalar();
}
