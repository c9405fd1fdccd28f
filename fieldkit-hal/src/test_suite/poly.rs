use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    api::{
        FieldScalarOps, FiniteField, MatrixAlloc, PolyArithmetic, PolyEvaluate, PolyInterpolate, RootsOfUnity, VectorAlloc,
        VectorReshape,
    },
    error::FieldError,
    layouts::{Backend, Field, Matrix, Vector},
    source::Source,
    test_suite::{distinct_values, fft_size, nonzero_values, random_values},
};

/// Random polynomial with `len` coefficients and a nonzero leading one.
fn random_poly(p: &BigUint, source: &mut Source, len: usize) -> Vec<BigUint> {
    let mut coeffs: Vec<BigUint> = random_values(p, source, len - 1);
    coeffs.extend(nonzero_values(p, source, 1));
    coeffs
}

fn roots_of_size<B: Backend>(field: &Field<B>, n: usize) -> Vector<B>
where
    Field<B>: FiniteField<B>,
{
    let g: BigUint = field.get_root_of_unity(n as u64).unwrap();
    field.get_power_series(g, n)
}

pub fn test_poly_add_sub<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([30u8; 32]);

    let a_values: Vec<BigUint> = random_values(p, &mut source, 5);
    let b_values: Vec<BigUint> = random_values(p, &mut source, 3);
    let a: Vector<B> = field.new_vector_from(&a_values);
    let b: Vector<B> = field.new_vector_from(&b_values);

    let sum: Vec<BigUint> = field.add_polys(&a, &b).unwrap().to_values();
    let diff: Vec<BigUint> = field.sub_polys(&a, &b).unwrap().to_values();
    let rdiff: Vec<BigUint> = field.sub_polys(&b, &a).unwrap().to_values();
    assert_eq!(sum, field.add_polys(&b, &a).unwrap().to_values());
    assert_eq!((sum.len(), diff.len(), rdiff.len()), (5, 5, 5));

    for i in 0..5 {
        let bi: BigUint = b_values.get(i).cloned().unwrap_or_default();
        assert_eq!(sum[i], field.add(&a_values[i], &bi));
        assert_eq!(diff[i], field.sub(&a_values[i], &bi));
        assert_eq!(rdiff[i], field.sub(&bi, &a_values[i]));
    }
}

pub fn test_poly_mul_div<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([31u8; 32]);

    let a_values: Vec<BigUint> = random_poly(p, &mut source, 6);
    let b_values: Vec<BigUint> = random_poly(p, &mut source, 3);
    let a: Vector<B> = field.new_vector_from(&a_values);
    let b: Vector<B> = field.new_vector_from(&b_values);

    let prod: Vector<B> = field.mul_polys(&a, &b).unwrap();
    assert_eq!(prod.len(), 8);
    for (k, c) in prod.to_values().iter().enumerate() {
        let expected: BigUint = (0..6)
            .filter(|i| k >= *i && k - i < 3)
            .fold(BigUint::zero(), |acc, i| (acc + &a_values[i] * &b_values[k - i]) % p);
        assert_eq!(*c, expected, "coefficient {k}");
    }
    assert!(field.mul_polys(&a, &field.new_vector(0)).unwrap().is_empty());

    // Exact division.
    assert_eq!(field.div_polys(&prod, &b).unwrap(), a);

    // Trailing zero coefficients of the divisor do not change its degree.
    let b_padded: Vector<B> = field.add_polys(&b, &field.new_vector(5)).unwrap();
    assert_eq!(field.div_polys(&prod, &b_padded).unwrap(), a);

    // Remainder is returned by div_rem_polys and discarded by div_polys.
    let r: Vector<B> = field.new_vector_from(&random_values(p, &mut source, 2));
    let num: Vector<B> = field.add_polys(&prod, &r).unwrap();
    let (q, rem) = field.div_rem_polys(&num, &b).unwrap();
    assert_eq!(q, a);
    assert_eq!(rem, r);
    assert_eq!(field.div_polys(&num, &b).unwrap(), a);

    // Dividend of lower degree than the divisor.
    let (q, rem) = field.div_rem_polys(&b, &a).unwrap();
    assert_eq!(q.to_values(), vec![BigUint::zero()]);
    assert_eq!(rem, field.add_polys(&b, &field.new_vector(5)).unwrap());

    assert_eq!(field.div_polys(&a, &field.new_vector(3)), Err(FieldError::DivisionByZero));
    assert_eq!(field.div_polys(&a, &field.new_vector(0)), Err(FieldError::DivisionByZero));

    let scaled: Vector<B> = field.mul_poly_by_constant(&a, 3u64).unwrap();
    for (x, y) in a_values.iter().zip(scaled.to_values()) {
        assert_eq!(y, field.mul(x, 3u64));
    }
}

pub fn test_eval_poly_at<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([32u8; 32]);

    let coeffs: Vec<BigUint> = random_values(p, &mut source, 9);
    let poly: Vector<B> = field.new_vector_from(&coeffs);
    for x in random_values(p, &mut source, 8) {
        let expected: BigUint = coeffs
            .iter()
            .enumerate()
            .fold(BigUint::zero(), |acc, (i, c)| (acc + c * x.modpow(&BigUint::from(i), p)) % p);
        assert_eq!(field.eval_poly_at(&poly, &x).unwrap(), expected);
    }
    assert_eq!(field.eval_poly_at(&field.new_vector(0), 5u64).unwrap(), BigUint::zero());
}

pub fn test_fft_eval<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([33u8; 32]);
    let n: usize = fft_size(field.two_adicity(), 5);
    let roots: Vector<B> = roots_of_size(field, n);

    for len in [n, n / 2 + 1, 1] {
        let poly: Vector<B> = field.new_vector_from(&random_values(p, &mut source, len));
        let evals: Vector<B> = field.eval_poly_at_roots(&poly, &roots).unwrap();
        assert_eq!(evals.len(), n);
        for (k, y) in evals.to_values().iter().enumerate() {
            assert_eq!(*y, field.eval_poly_at(&poly, roots.get(k).unwrap()).unwrap(), "len={len} k={k}");
        }
    }
}

pub fn test_fft_round_trip<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([34u8; 32]);
    let s: u32 = field.two_adicity();

    for log_n in 0..=s.min(6) {
        let n: usize = 1 << log_n;
        let roots: Vector<B> = roots_of_size(field, n);
        let len: usize = n - n / 4;
        let poly: Vector<B> = field.new_vector_from(&random_values(p, &mut source, len));
        let evals: Vector<B> = field.eval_poly_at_roots(&poly, &roots).unwrap();
        let back: Vector<B> = field.interpolate_roots(&roots, &evals).unwrap();

        let mut padded: Vec<BigUint> = poly.to_values();
        padded.resize(n, BigUint::zero());
        assert_eq!(back.to_values(), padded, "n={n}");
    }
}

pub fn test_fft_matrix<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([35u8; 32]);
    let n: usize = fft_size(field.two_adicity(), 4);
    let roots: Vector<B> = roots_of_size(field, n);

    let rows: Vec<Vec<BigUint>> = (0..3).map(|_| random_values(p, &mut source, n)).collect();
    let polys: Matrix<B> = field.new_matrix_from(&rows).unwrap();

    let evals: Matrix<B> = field.eval_polys_at_roots(&polys, &roots).unwrap();
    assert_eq!((evals.rows(), evals.cols()), (3, n));
    for (r, row) in polys.rows_to_vectors().iter().enumerate() {
        assert_eq!(evals.row_vector(r).unwrap(), field.eval_poly_at_roots(row, &roots).unwrap());
    }

    let back: Matrix<B> = field.interpolate_roots_matrix(&roots, &evals).unwrap();
    assert_eq!(back, polys);
}

pub fn test_fft_errors<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let n: usize = fft_size(field.two_adicity(), 3);
    let roots: Vector<B> = roots_of_size(field, n);

    let three: Vector<B> = field.get_power_series(1u64, 3);
    let poly: Vector<B> = field.new_vector(2);
    assert!(matches!(field.eval_poly_at_roots(&poly, &three), Err(FieldError::InvalidOrder { .. })));
    assert!(matches!(field.interpolate_roots(&three, &three), Err(FieldError::InvalidOrder { .. })));
    assert!(matches!(
        field.eval_poly_at_roots(&poly, &field.new_vector(0)),
        Err(FieldError::InvalidOrder { .. })
    ));

    let too_long: Vector<B> = field.new_vector(n + 1);
    assert!(matches!(field.eval_poly_at_roots(&too_long, &roots), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.interpolate_roots(&roots, &too_long), Err(FieldError::DimensionMismatch(_))));

    let wide: Matrix<B> = field.new_matrix(2, n + 1);
    assert!(matches!(field.eval_polys_at_roots(&wide, &roots), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.interpolate_roots_matrix(&roots, &wide), Err(FieldError::DimensionMismatch(_))));
}

pub fn test_interpolate<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([36u8; 32]);

    let n: usize = 8;
    let xs_values: Vec<BigUint> = distinct_values(p, &mut source, n);
    let ys_values: Vec<BigUint> = random_values(p, &mut source, n);
    let xs: Vector<B> = field.new_vector_from(&xs_values);
    let ys: Vector<B> = field.new_vector_from(&ys_values);

    let poly: Vector<B> = field.interpolate(&xs, &ys).unwrap();
    assert_eq!(poly.len(), n);
    for (x, y) in xs_values.iter().zip(ys_values.iter()) {
        assert_eq!(field.eval_poly_at(&poly, x).unwrap(), *y);
    }

    // Any polynomial of degree < n is recovered from n evaluations.
    let coeffs: Vector<B> = field.new_vector_from(&random_values(p, &mut source, n - 2));
    let evals: Vec<BigUint> = xs_values.iter().map(|x| field.eval_poly_at(&coeffs, x).unwrap()).collect();
    let recovered: Vector<B> = field.interpolate(&xs, &field.new_vector_from(&evals)).unwrap();
    assert_eq!(field.truncate_vector(&recovered, n - 2).unwrap(), coeffs);
    assert!(recovered.to_values()[n - 2..].iter().all(|c| c.is_zero()));

    assert!(field.interpolate(&field.new_vector(0), &field.new_vector(0)).unwrap().is_empty());
    assert!(matches!(
        field.interpolate(&xs, &field.new_vector(n - 1)),
        Err(FieldError::DimensionMismatch(_))
    ));

    let mut duplicated: Vec<BigUint> = xs_values.clone();
    duplicated[5] = duplicated[2].clone();
    assert_eq!(
        field.interpolate(&field.new_vector_from(&duplicated), &ys),
        Err(FieldError::DuplicateXCoordinate)
    );
}
