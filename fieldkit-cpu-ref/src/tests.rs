use num_bigint::BigUint;
use num_traits::One;

use fieldkit_hal::{
    api::{FieldNew, FieldScalarOps, MatrixAlloc, PolyArithmetic, PolyEvaluate, RootsOfUnity, VectorAlloc},
    backend_test_suite,
    config::FieldConfig,
    error::FieldError,
    layouts::{Field, Matrix, Vector},
    oep::{BatchInvImpl, FftImpl},
    test_suite::{moduli::goldilocks, ownership::test_field_mismatch},
};

use crate::PrimeRef;

fn small_field(p: u64) -> Field<PrimeRef> {
    Field::<PrimeRef>::new(&BigUint::from(p), &FieldConfig::reference()).unwrap()
}

#[test]
fn small_field_arithmetic() {
    let field: Field<PrimeRef> = small_field(11);
    assert_eq!(field.add(5u64, 6u64), BigUint::from(0u32));
    assert_eq!(field.sub(5u64, 6u64), BigUint::from(10u32));
    assert_eq!(field.mul(5u64, 6u64), BigUint::from(8u32));
    assert_eq!(field.div(1u64, 2u64).unwrap(), BigUint::from(6u32));
    assert_eq!(field.exp(2u64, -1).unwrap(), BigUint::from(6u32));
    assert_eq!(field.inv(5u64).unwrap(), BigUint::from(9u32));
    assert_eq!(field.neg(0u64), BigUint::from(0u32));
    assert_eq!(field.reduce(-1i64), BigUint::from(10u32));
    assert_eq!(field.inv(0u64), Err(FieldError::DivisionByZero));
    assert_eq!(field.element_size(), 1);
    assert_eq!(field.to_string(), "GF(11) [cpu-ref]");
}

#[test]
fn small_field_roots() {
    // 96 = 2^5 * 3
    let field: Field<PrimeRef> = small_field(97);
    assert_eq!(field.two_adicity(), 5);
    let g: BigUint = field.get_root_of_unity(8).unwrap();
    assert_eq!(field.exp(&g, 4).unwrap(), BigUint::from(96u32));
    assert_eq!(field.get_root_of_unity(1).unwrap(), BigUint::from(1u32));
    assert!(matches!(field.get_root_of_unity(64), Err(FieldError::InvalidOrder { .. })));
    assert!(matches!(field.get_root_of_unity(6), Err(FieldError::InvalidOrder { .. })));
}

#[test]
fn signed_polynomial_evaluation() {
    let field: Field<PrimeRef> = small_field(101);
    let poly: Vector<PrimeRef> = field.new_vector_from(&[3i64, -2, 1, -2, 3]);
    // 3 - 20 + 100 - 2000 + 30000 = 28083 = 278 * 101 + 5
    assert_eq!(field.eval_poly_at(&poly, 10u64).unwrap(), BigUint::from(5u32));
}

#[test]
fn polynomial_division_by_linear_factor() {
    let field: Field<PrimeRef> = small_field(11);
    let a: Vector<PrimeRef> = field.new_vector_from(&[-1i64, 0, 1]);
    let b: Vector<PrimeRef> = field.new_vector_from(&[-1i64, 1]);
    let (quo, rem) = field.div_rem_polys(&a, &b).unwrap();
    assert_eq!(quo, field.new_vector_from(&[1u64, 1]));
    assert_eq!(rem, field.new_vector_from(&[0u64]));
    assert_eq!(field.div_polys(&a, &field.new_vector(2)), Err(FieldError::DivisionByZero));
}

#[test]
fn wide_modulus_is_accepted() {
    // 2^521 - 1
    let big: BigUint = (BigUint::from(1u32) << 521) - 1u32;
    let field: Field<PrimeRef> = Field::<PrimeRef>::new(&big, &FieldConfig::default()).unwrap();
    assert_eq!(field.element_size(), 66);
    assert_eq!(field.two_adicity(), 1);
    assert!(matches!(
        Field::<PrimeRef>::new(&BigUint::from(1u32), &FieldConfig::default()),
        Err(FieldError::UnsupportedModulus(_))
    ));
}

#[test]
fn composite_moduli_are_rejected() {
    let goldilocks_squared: BigUint = goldilocks() * goldilocks();
    let composites: [BigUint; 5] = [
        BigUint::from(4u32),
        BigUint::from(561u32),
        BigUint::from(3215031751u64),
        goldilocks_squared,
        (BigUint::one() << 255) - 21u32,
    ];
    for p in composites {
        assert!(
            matches!(
                Field::<PrimeRef>::new(&p, &FieldConfig::reference()),
                Err(FieldError::UnsupportedModulus(_))
            ),
            "p={p}"
        );
    }
}

#[test]
fn operands_of_another_field_are_rejected() {
    let field: Field<PrimeRef> = small_field(101);
    test_field_mismatch(&field, &small_field(97), &small_field(101));
}

#[test]
fn matrix_row_out_of_range() {
    let field: Field<PrimeRef> = small_field(11);
    let m: Matrix<PrimeRef> = field.new_matrix_from(&[vec![1u64, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.row(1).unwrap(), &[BigUint::from(3u32), BigUint::from(4u32)]);
    assert_eq!(m.row(2), Err(FieldError::IndexOutOfRange { index: 2, len: 2 }));
    assert!(matches!(m.row_vector(5), Err(FieldError::IndexOutOfRange { index: 5, len: 2 })));
}

#[test]
fn kernel_length_errors() {
    let field: Field<PrimeRef> = small_field(97);
    let roots: Vector<PrimeRef> = field.get_power_series(field.get_root_of_unity(4).unwrap(), 4);
    let w: &[BigUint] = roots.as_slice();

    assert!(matches!(
        PrimeRef::fft_plan_impl(&field, &w[..3]),
        Err(FieldError::InvalidOrder { order: 3, .. })
    ));
    let plan: Vec<BigUint> = PrimeRef::fft_plan_impl(&field, w).unwrap();
    let mut short: Vec<BigUint> = vec![BigUint::from(0u32); 2];
    assert!(matches!(
        PrimeRef::fft_apply_impl(&field, &plan, &mut short, w),
        Err(FieldError::DimensionMismatch(_))
    ));

    let mut out: Vec<BigUint> = vec![BigUint::from(0u32); 3];
    assert!(matches!(
        PrimeRef::batch_inv_impl(&field, &mut out, w),
        Err(FieldError::DimensionMismatch(_))
    ));
}

macro_rules! full_suite {
    ($($name:ident => $modulus:expr),+ $(,)?) => {
        $(
            backend_test_suite! {
                mod $name,
                backend = crate::PrimeRef,
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
    baby_bear_suite => fieldkit_hal::test_suite::moduli::baby_bear(),
    goldilocks_suite => fieldkit_hal::test_suite::moduli::goldilocks(),
    bn254_suite => fieldkit_hal::test_suite::moduli::bn254_scalar(),
    secp256k1_suite => fieldkit_hal::test_suite::moduli::secp256k1(),
}
