use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    api::{FieldScalarOps, FiniteField, VectorAlloc, VectorArithmetic, VectorCombine, VectorReshape},
    error::FieldError,
    layouts::{Backend, Field, Matrix, Vector},
    source::Source,
    test_suite::{nonzero_values, random_values},
};

pub fn test_vector_elementwise<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([10u8; 32]);

    for n in [0usize, 1, 7, 64] {
        let a_values: Vec<BigUint> = random_values(p, &mut source, n);
        let b_values: Vec<BigUint> = nonzero_values(p, &mut source, n);
        let s: BigUint = nonzero_values(p, &mut source, 1).remove(0);

        let a: Vector<B> = field.new_vector_from(&a_values);
        let b: Vector<B> = field.new_vector_from(&b_values);

        let add: Vec<BigUint> = field.add_vector_elements(&a, &b).unwrap().to_values();
        let sub: Vec<BigUint> = field.sub_vector_elements(&a, &b).unwrap().to_values();
        let mul: Vec<BigUint> = field.mul_vector_elements(&a, &b).unwrap().to_values();
        let div: Vec<BigUint> = field.div_vector_elements(&a, &b).unwrap().to_values();
        let neg: Vec<BigUint> = field.neg_vector_elements(&a).unwrap().to_values();

        let add_s: Vec<BigUint> = field.add_vector_scalar(&a, &s).unwrap().to_values();
        let sub_s: Vec<BigUint> = field.sub_vector_scalar(&a, &s).unwrap().to_values();
        let mul_s: Vec<BigUint> = field.mul_vector_scalar(&a, &s).unwrap().to_values();
        let div_s: Vec<BigUint> = field.div_vector_scalar(&a, &s).unwrap().to_values();

        for i in 0..n {
            let (x, y) = (&a_values[i], &b_values[i]);
            assert_eq!(add[i], field.add(x, y));
            assert_eq!(sub[i], field.sub(x, y));
            assert_eq!(mul[i], field.mul(x, y));
            assert_eq!(div[i], field.div(x, y).unwrap());
            assert_eq!(neg[i], field.neg(x));
            assert_eq!(add_s[i], field.add(x, &s));
            assert_eq!(sub_s[i], field.sub(x, &s));
            assert_eq!(mul_s[i], field.mul(x, &s));
            assert_eq!(div_s[i], field.div(x, &s).unwrap());
        }

        // Inputs are never modified.
        assert_eq!(a.to_values(), a_values);
        assert_eq!(b.to_values(), b_values);
    }
}

pub fn test_vector_dimension_mismatch<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let a: Vector<B> = field.new_vector(3);
    let b: Vector<B> = field.new_vector(4);

    let is_dim = |r: Result<Vector<B>, FieldError>| matches!(r, Err(FieldError::DimensionMismatch(_)));
    assert!(is_dim(field.add_vector_elements(&a, &b)));
    assert!(is_dim(field.sub_vector_elements(&a, &b)));
    assert!(is_dim(field.mul_vector_elements(&a, &b)));
    assert!(is_dim(field.div_vector_elements(&a, &b)));
    assert!(is_dim(field.exp_vector_elements(&a, &b)));
    assert!(matches!(
        field.combine_vectors(&a, &b),
        Err(FieldError::DimensionMismatch(_))
    ));
}

pub fn test_batch_inversion<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([11u8; 32]);

    let values: Vec<BigUint> = nonzero_values(p, &mut source, 33);
    let v: Vector<B> = field.new_vector_from(&values);
    let inv: Vector<B> = field.inv_vector_elements(&v).unwrap();
    for (x, x_inv) in values.iter().zip(inv.to_values()) {
        assert_eq!(x_inv, field.inv(x).unwrap());
    }

    let empty: Vector<B> = field.new_vector(0);
    assert!(field.inv_vector_elements(&empty).unwrap().is_empty());

    // A single zero fails the whole batch and leaves the input untouched.
    let mut with_zero: Vec<BigUint> = values.clone();
    with_zero[17] = BigUint::zero();
    let v_zero: Vector<B> = field.new_vector_from(&with_zero);
    assert_eq!(field.inv_vector_elements(&v_zero), Err(FieldError::DivisionByZero));
    assert_eq!(field.div_vector_elements(&v, &v_zero), Err(FieldError::DivisionByZero));
    assert_eq!(v_zero.to_values(), with_zero);
}

pub fn test_vector_exp<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([12u8; 32]);

    let values: Vec<BigUint> = nonzero_values(p, &mut source, 16);
    let exponents: Vec<BigUint> = random_values(p, &mut source, 16);
    let v: Vector<B> = field.new_vector_from(&values);
    let e: Vector<B> = field.new_vector_from(&exponents);

    let pow_each: Vec<BigUint> = field.exp_vector_elements(&v, &e).unwrap().to_values();
    let pow_5: Vec<BigUint> = field.exp_vector_scalar(&v, 5).unwrap().to_values();
    let pow_neg_2: Vec<BigUint> = field.exp_vector_scalar(&v, -2).unwrap().to_values();
    let pow_0: Vec<BigUint> = field.exp_vector_scalar(&v, 0).unwrap().to_values();

    for i in 0..values.len() {
        assert_eq!(pow_each[i], values[i].modpow(&exponents[i], p));
        assert_eq!(pow_5[i], field.exp(&values[i], 5).unwrap());
        assert_eq!(pow_neg_2[i], field.exp(&values[i], -2).unwrap());
        assert_eq!(pow_0[i], BigUint::one());
    }

    let zeros: Vector<B> = field.new_vector(4);
    assert_eq!(
        field.exp_vector_scalar(&zeros, 0).unwrap().to_values(),
        vec![BigUint::one(); 4]
    );
    assert_eq!(field.exp_vector_scalar(&zeros, -1), Err(FieldError::DivisionByZero));
}

pub fn test_combine_vectors<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([13u8; 32]);

    let a_values: Vec<BigUint> = random_values(p, &mut source, 20);
    let b_values: Vec<BigUint> = random_values(p, &mut source, 20);
    let expected: BigUint = a_values
        .iter()
        .zip(b_values.iter())
        .fold(BigUint::zero(), |acc, (x, y)| (acc + x * y) % p);

    let a: Vector<B> = field.new_vector_from(&a_values);
    let b: Vector<B> = field.new_vector_from(&b_values);
    assert_eq!(field.combine_vectors(&a, &b).unwrap(), expected);
    assert_eq!(field.combine_vectors(&field.new_vector(0), &field.new_vector(0)).unwrap(), BigUint::zero());

    let rows: Vec<Vec<BigUint>> = (0..5).map(|_| random_values(p, &mut source, 9)).collect();
    let coefficients: Vec<BigUint> = random_values(p, &mut source, 5);
    let vectors: Vec<Vector<B>> = rows.iter().map(|r| field.new_vector_from(r)).collect();
    let k: Vector<B> = field.new_vector_from(&coefficients);

    let combined: Vec<BigUint> = field.combine_many_vectors(&vectors, &k).unwrap().to_values();
    for (j, c) in combined.iter().enumerate() {
        let expected: BigUint = rows
            .iter()
            .zip(coefficients.iter())
            .fold(BigUint::zero(), |acc, (row, k)| (acc + &row[j] * k) % p);
        assert_eq!(*c, expected, "column {j}");
    }

    let is_dim = |r: Result<Vector<B>, FieldError>| matches!(r, Err(FieldError::DimensionMismatch(_)));
    assert!(is_dim(field.combine_many_vectors(&[], &field.new_vector(0))));
    assert!(is_dim(field.combine_many_vectors(&vectors[..4], &k)));
    let mut ragged: Vec<Vector<B>> = vectors.clone();
    ragged[2] = field.new_vector(8);
    assert!(is_dim(field.combine_many_vectors(&ragged, &k)));
}

pub fn test_vector_reshape<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let v: Vector<B> = field.new_vector_from(&(0u64..12).collect::<Vec<u64>>());
    let p: &BigUint = field.modulus();
    let value = |i: u64| BigUint::from(i) % p;

    let m: Matrix<B> = field.vector_to_matrix(&v, 4).unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 4));
    assert_eq!(m.get(2, 1).unwrap(), value(9));
    assert!(matches!(field.vector_to_matrix(&v, 5), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.vector_to_matrix(&v, 0), Err(FieldError::DimensionMismatch(_))));

    let plucked: Vector<B> = field.pluck_vector(&v, 3, 4).unwrap();
    assert_eq!(plucked.to_values(), vec![value(0), value(3), value(6), value(9)]);
    assert!(field.pluck_vector(&v, 5, 0).unwrap().is_empty());
    assert_eq!(
        field.pluck_vector(&v, 4, 4),
        Err(FieldError::IndexOutOfRange { index: 12, len: 12 })
    );

    let truncated: Vector<B> = field.truncate_vector(&v, 5).unwrap();
    assert_eq!(truncated.to_values(), (0u64..5).map(value).collect::<Vec<BigUint>>());
    assert!(matches!(field.truncate_vector(&v, 13), Err(FieldError::IndexOutOfRange { .. })));

    let short: Vector<B> = field.truncate_vector(&v, 2).unwrap();
    assert_eq!(field.duplicate_vector(&short, 0).unwrap(), short);
    assert_eq!(
        field.duplicate_vector(&short, 2).unwrap().to_values(),
        vec![value(0), value(1), value(0), value(1), value(0), value(1)]
    );

    assert!(matches!(v.get(12), Err(FieldError::IndexOutOfRange { index: 12, len: 12 })));
}
