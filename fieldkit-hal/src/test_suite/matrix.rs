use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    api::{FieldScalarOps, FiniteField, MatrixAlloc, MatrixArithmetic, MatrixProducts, VectorAlloc},
    error::FieldError,
    layouts::{Backend, Field, Matrix, Vector},
    source::Source,
    test_suite::{nonzero_values, random_values},
};

fn random_rows(p: &BigUint, source: &mut Source, rows: usize, cols: usize) -> Vec<Vec<BigUint>> {
    (0..rows).map(|_| random_values(p, source, cols)).collect()
}

pub fn test_matrix_construction<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([20u8; 32]);

    let rows: Vec<Vec<BigUint>> = random_rows(p, &mut source, 3, 5);
    let m: Matrix<B> = field.new_matrix_from(&rows).unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 5));
    assert_eq!(m.to_values(), rows);
    assert_eq!(m.byte_len(), 15 * m.element_size());

    let vectors: Vec<Vector<B>> = m.rows_to_vectors();
    assert_eq!(vectors.len(), 3);
    assert_eq!(vectors[1].to_values(), rows[1]);
    assert_eq!(field.new_matrix_from_vectors(&vectors).unwrap(), m);
    assert_eq!(m.row_vector(2).unwrap(), vectors[2]);

    let bytes: Vec<u8> = m.to_bytes();
    assert_eq!(field.new_matrix_from_bytes(3, 5, &bytes).unwrap(), m);
    assert_eq!(m.rows_to_bytes().concat(), bytes);
    assert!(matches!(
        field.new_matrix_from_bytes(5, 3, &bytes[1..]),
        Err(FieldError::DimensionMismatch(_))
    ));

    let mut ragged: Vec<Vec<BigUint>> = rows.clone();
    ragged[1].pop();
    assert!(matches!(field.new_matrix_from(&ragged), Err(FieldError::DimensionMismatch(_))));
    let ragged_vectors: Vec<Vector<B>> = vec![field.new_vector(2), field.new_vector(3)];
    assert!(matches!(
        field.new_matrix_from_vectors(&ragged_vectors),
        Err(FieldError::DimensionMismatch(_))
    ));

    let zero: Matrix<B> = field.new_matrix(2, 3);
    assert_eq!(zero.to_values(), vec![vec![BigUint::zero(); 3]; 2]);
    assert!(matches!(m.get(3, 0), Err(FieldError::IndexOutOfRange { index: 3, len: 3 })));
    assert!(matches!(m.get(0, 5), Err(FieldError::IndexOutOfRange { index: 5, len: 5 })));
    assert_eq!(m.row(2).unwrap().len(), 5);
    assert!(matches!(m.row(3), Err(FieldError::IndexOutOfRange { index: 3, len: 3 })));
    assert!(matches!(m.row_vector(3), Err(FieldError::IndexOutOfRange { index: 3, len: 3 })));
}

pub fn test_matrix_elementwise<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([21u8; 32]);

    let a_rows: Vec<Vec<BigUint>> = random_rows(p, &mut source, 4, 6);
    let b_rows: Vec<Vec<BigUint>> = (0..4).map(|_| nonzero_values(p, &mut source, 6)).collect();
    let s: BigUint = nonzero_values(p, &mut source, 1).remove(0);

    let a: Matrix<B> = field.new_matrix_from(&a_rows).unwrap();
    let b: Matrix<B> = field.new_matrix_from(&b_rows).unwrap();

    let add: Vec<Vec<BigUint>> = field.add_matrix_elements(&a, &b).unwrap().to_values();
    let sub: Vec<Vec<BigUint>> = field.sub_matrix_elements(&a, &b).unwrap().to_values();
    let mul: Vec<Vec<BigUint>> = field.mul_matrix_elements(&a, &b).unwrap().to_values();
    let div: Vec<Vec<BigUint>> = field.div_matrix_elements(&a, &b).unwrap().to_values();
    let exp: Vec<Vec<BigUint>> = field.exp_matrix_elements(&a, &b).unwrap().to_values();
    let inv: Vec<Vec<BigUint>> = field.inv_matrix_elements(&b).unwrap().to_values();
    let neg: Vec<Vec<BigUint>> = field.neg_matrix_elements(&a).unwrap().to_values();
    let add_s: Vec<Vec<BigUint>> = field.add_matrix_scalar(&a, &s).unwrap().to_values();
    let sub_s: Vec<Vec<BigUint>> = field.sub_matrix_scalar(&a, &s).unwrap().to_values();
    let mul_s: Vec<Vec<BigUint>> = field.mul_matrix_scalar(&a, &s).unwrap().to_values();
    let div_s: Vec<Vec<BigUint>> = field.div_matrix_scalar(&a, &s).unwrap().to_values();
    let exp_s: Vec<Vec<BigUint>> = field.exp_matrix_scalar(&b, -3).unwrap().to_values();

    for r in 0..4 {
        for c in 0..6 {
            let (x, y) = (&a_rows[r][c], &b_rows[r][c]);
            assert_eq!(add[r][c], field.add(x, y));
            assert_eq!(sub[r][c], field.sub(x, y));
            assert_eq!(mul[r][c], field.mul(x, y));
            assert_eq!(div[r][c], field.div(x, y).unwrap());
            assert_eq!(exp[r][c], x.modpow(y, p));
            assert_eq!(inv[r][c], field.inv(y).unwrap());
            assert_eq!(neg[r][c], field.neg(x));
            assert_eq!(add_s[r][c], field.add(x, &s));
            assert_eq!(sub_s[r][c], field.sub(x, &s));
            assert_eq!(mul_s[r][c], field.mul(x, &s));
            assert_eq!(div_s[r][c], field.div(x, &s).unwrap());
            assert_eq!(exp_s[r][c], field.exp(y, -3).unwrap());
        }
    }

    let other: Matrix<B> = field.new_matrix(6, 4);
    assert!(matches!(field.add_matrix_elements(&a, &other), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.div_matrix_scalar(&a, 0u64), Err(FieldError::DivisionByZero)));
    assert_eq!(field.inv_matrix_elements(&other), Err(FieldError::DivisionByZero));
}

pub fn test_matrix_products<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([22u8; 32]);

    let (n, m, k) = (3usize, 5usize, 4usize);
    let a_rows: Vec<Vec<BigUint>> = random_rows(p, &mut source, n, m);
    let b_rows: Vec<Vec<BigUint>> = random_rows(p, &mut source, m, k);
    let v_values: Vec<BigUint> = random_values(p, &mut source, m);
    let s_values: Vec<BigUint> = random_values(p, &mut source, n);

    let a: Matrix<B> = field.new_matrix_from(&a_rows).unwrap();
    let b: Matrix<B> = field.new_matrix_from(&b_rows).unwrap();
    let v: Vector<B> = field.new_vector_from(&v_values);
    let s: Vector<B> = field.new_vector_from(&s_values);

    let ab: Matrix<B> = field.mul_matrixes(&a, &b).unwrap();
    assert_eq!((ab.rows(), ab.cols()), (n, k));
    for i in 0..n {
        for j in 0..k {
            let expected: BigUint = (0..m).fold(BigUint::zero(), |acc, t| (acc + &a_rows[i][t] * &b_rows[t][j]) % p);
            assert_eq!(ab.get(i, j).unwrap(), expected, "({i}, {j})");
        }
    }

    let av: Vec<BigUint> = field.mul_matrix_by_vector(&a, &v).unwrap().to_values();
    for i in 0..n {
        let expected: BigUint = (0..m).fold(BigUint::zero(), |acc, t| (acc + &a_rows[i][t] * &v_values[t]) % p);
        assert_eq!(av[i], expected);
    }

    let scaled: Vec<Vec<BigUint>> = field.mul_matrix_rows(&a, &s).unwrap().to_values();
    for i in 0..n {
        for t in 0..m {
            assert_eq!(scaled[i][t], field.mul(&a_rows[i][t], &s_values[i]));
        }
    }

    assert!(matches!(field.mul_matrixes(&b, &b), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.mul_matrix_by_vector(&a, &s), Err(FieldError::DimensionMismatch(_))));
    assert!(matches!(field.mul_matrix_rows(&a, &v), Err(FieldError::DimensionMismatch(_))));
}
