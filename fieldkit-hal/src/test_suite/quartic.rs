use num_bigint::BigUint;

use crate::{
    api::{FiniteField, MatrixAlloc, PolyEvaluate, PolyInterpolate, QuarticBatch, VectorAlloc},
    error::FieldError,
    layouts::{Backend, Field, Matrix, Vector},
    source::Source,
    test_suite::{distinct_values, random_values},
};

fn random_quartic_points(p: &BigUint, source: &mut Source, rows: usize) -> (Vec<Vec<BigUint>>, Vec<Vec<BigUint>>) {
    let xs: Vec<Vec<BigUint>> = (0..rows).map(|_| distinct_values(p, source, 4)).collect();
    let ys: Vec<Vec<BigUint>> = (0..rows).map(|_| random_values(p, source, 4)).collect();
    (xs, ys)
}

pub fn test_quartic_interpolate<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([40u8; 32]);

    let (xs_rows, ys_rows) = random_quartic_points(p, &mut source, 6);
    let xs: Matrix<B> = field.new_matrix_from(&xs_rows).unwrap();
    let ys: Matrix<B> = field.new_matrix_from(&ys_rows).unwrap();

    let polys: Matrix<B> = field.interpolate_quartic_batch(&xs, &ys).unwrap();
    assert_eq!((polys.rows(), polys.cols()), (6, 4));

    for r in 0..6 {
        let general: Vector<B> = field
            .interpolate(&field.new_vector_from(&xs_rows[r]), &field.new_vector_from(&ys_rows[r]))
            .unwrap();
        assert_eq!(polys.row_vector(r).unwrap(), general, "row {r}");
    }

    for k in 0..4 {
        let column: Vec<BigUint> = xs_rows.iter().map(|row| row[k].clone()).collect();
        let evals: Vec<BigUint> = field
            .eval_quartic_batch(&polys, &field.new_vector_from(&column))
            .unwrap()
            .to_values();
        for r in 0..6 {
            assert_eq!(evals[r], ys_rows[r][k], "row {r} point {k}");
        }
    }
}

pub fn test_quartic_eval<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([41u8; 32]);

    let rows: Vec<Vec<BigUint>> = (0..9).map(|_| random_values(p, &mut source, 4)).collect();
    let x_values: Vec<BigUint> = random_values(p, &mut source, 9);
    let polys: Matrix<B> = field.new_matrix_from(&rows).unwrap();
    let xs: Vector<B> = field.new_vector_from(&x_values);

    let evals: Vec<BigUint> = field.eval_quartic_batch(&polys, &xs).unwrap().to_values();
    for (r, x) in x_values.iter().enumerate() {
        assert_eq!(evals[r], field.eval_poly_at(&field.new_vector_from(&rows[r]), x).unwrap());
    }

    assert!(field.eval_quartic_batch(&field.new_matrix(0, 4), &field.new_vector(0)).unwrap().is_empty());
}

pub fn test_quartic_errors<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([42u8; 32]);

    let (mut xs_rows, ys_rows) = random_quartic_points(p, &mut source, 4);
    let ys: Matrix<B> = field.new_matrix_from(&ys_rows).unwrap();

    xs_rows[2][3] = xs_rows[2][0].clone();
    let xs_dup: Matrix<B> = field.new_matrix_from(&xs_rows).unwrap();
    assert_eq!(
        field.interpolate_quartic_batch(&xs_dup, &ys),
        Err(FieldError::DuplicateXCoordinate)
    );

    let narrow: Matrix<B> = field.new_matrix(4, 3);
    let short: Matrix<B> = field.new_matrix(3, 4);
    let is_dim = |r: Result<Matrix<B>, FieldError>| matches!(r, Err(FieldError::DimensionMismatch(_)));
    assert!(is_dim(field.interpolate_quartic_batch(&narrow, &ys)));
    assert!(is_dim(field.interpolate_quartic_batch(&ys, &narrow)));
    assert!(is_dim(field.interpolate_quartic_batch(&short, &ys)));

    assert!(matches!(
        field.eval_quartic_batch(&narrow, &field.new_vector(4)),
        Err(FieldError::DimensionMismatch(_))
    ));
    assert!(matches!(
        field.eval_quartic_batch(&ys, &field.new_vector(3)),
        Err(FieldError::DimensionMismatch(_))
    ));
}
