use num_bigint::BigUint;

use crate::{
    api::{
        FieldInfos, FieldRandom, FieldScalarOps, FiniteField, MatrixAlloc, MatrixArithmetic, MatrixProducts, PolyArithmetic,
        PolyEvaluate, PolyInterpolate, QuarticBatch, RootsOfUnity, VectorAlloc, VectorArithmetic, VectorCombine,
    },
    layouts::{Backend, Field, Matrix, Vector},
    source::Source,
    test_suite::{distinct_values, edge_values, nonzero_values, random_values},
};

fn assert_same_vector<BR: Backend, BT: Backend>(a: &Vector<BR>, b: &Vector<BT>, what: &str) {
    assert_eq!(a.to_values(), b.to_values(), "{what}: values differ");
    assert_eq!(a.to_bytes(), b.to_bytes(), "{what}: encodings differ");
}

fn assert_same_matrix<BR: Backend, BT: Backend>(a: &Matrix<BR>, b: &Matrix<BT>, what: &str) {
    assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()), "{what}: shapes differ");
    assert_eq!(a.to_values(), b.to_values(), "{what}: values differ");
    assert_eq!(a.to_bytes(), b.to_bytes(), "{what}: encodings differ");
}

/// Edge values followed by random ones.
fn inputs(p: &BigUint, source: &mut Source, n: usize) -> Vec<BigUint> {
    let mut values: Vec<BigUint> = edge_values(p);
    values.extend(random_values(p, source, n));
    values
}

pub fn test_cross_scalar<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    assert_eq!(p, field_test.modulus());
    assert_eq!(FieldInfos::element_size(field_ref), FieldInfos::element_size(field_test));
    assert_eq!(field_ref.two_sylow_base(), field_test.two_sylow_base());

    let mut source: Source = Source::new([50u8; 32]);
    let values: Vec<BigUint> = inputs(p, &mut source, 16);

    for a in values.iter() {
        assert_eq!(field_ref.neg(a), field_test.neg(a), "neg({a})");
        assert_eq!(field_ref.inv(a), field_test.inv(a), "inv({a})");
        assert_eq!(field_ref.exp(a, -7), field_test.exp(a, -7), "exp({a}, -7)");
        assert_eq!(field_ref.exp(a, p - 2u32), field_test.exp(a, p - 2u32), "exp({a}, p-2)");
        for b in values.iter() {
            assert_eq!(field_ref.add(a, b), field_test.add(a, b), "add({a}, {b})");
            assert_eq!(field_ref.sub(a, b), field_test.sub(a, b), "sub({a}, {b})");
            assert_eq!(field_ref.mul(a, b), field_test.mul(a, b), "mul({a}, {b})");
            assert_eq!(field_ref.div(a, b), field_test.div(a, b), "div({a}, {b})");
        }
    }
}

pub fn test_cross_random<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let seeds: [&[u8]; 3] = [b"", b"a", b"fieldkit cross-backend seed"];
    for seed in seeds {
        assert_eq!(field_ref.prng(seed), field_test.prng(seed));
        assert_same_vector(
            &field_ref.prng_vector(seed, 17),
            &field_test.prng_vector(seed, 17),
            "prng_vector",
        );
    }
}

pub fn test_cross_vector<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    let mut source: Source = Source::new([51u8; 32]);

    let a_values: Vec<BigUint> = inputs(p, &mut source, 40);
    let b_values: Vec<BigUint> = nonzero_values(p, &mut source, a_values.len());
    let s: BigUint = nonzero_values(p, &mut source, 1).remove(0);

    let (a_ref, b_ref) = (field_ref.new_vector_from(&a_values), field_ref.new_vector_from(&b_values));
    let (a_test, b_test) = (field_test.new_vector_from(&a_values), field_test.new_vector_from(&b_values));
    assert_same_vector(&a_ref, &a_test, "new_vector_from");

    let bytes: Vec<u8> = a_ref.to_bytes();
    assert_same_vector(
        &field_ref.new_vector_from_bytes(&bytes).unwrap(),
        &field_test.new_vector_from_bytes(&bytes).unwrap(),
        "new_vector_from_bytes",
    );

    macro_rules! same_elements {
        ($op:ident) => {
            assert_same_vector(
                &field_ref.$op(&a_ref, &b_ref).unwrap(),
                &field_test.$op(&a_test, &b_test).unwrap(),
                stringify!($op),
            )
        };
    }

    same_elements!(add_vector_elements);
    same_elements!(sub_vector_elements);
    same_elements!(mul_vector_elements);
    same_elements!(div_vector_elements);
    same_elements!(exp_vector_elements);

    assert_same_vector(&field_ref.add_vector_scalar(&a_ref, &s).unwrap(), &field_test.add_vector_scalar(&a_test, &s).unwrap(), "add_vector_scalar");
    assert_same_vector(&field_ref.sub_vector_scalar(&a_ref, &s).unwrap(), &field_test.sub_vector_scalar(&a_test, &s).unwrap(), "sub_vector_scalar");
    assert_same_vector(&field_ref.mul_vector_scalar(&a_ref, &s).unwrap(), &field_test.mul_vector_scalar(&a_test, &s).unwrap(), "mul_vector_scalar");
    assert_same_vector(
        &field_ref.div_vector_scalar(&a_ref, &s).unwrap(),
        &field_test.div_vector_scalar(&a_test, &s).unwrap(),
        "div_vector_scalar",
    );
    assert_same_vector(&field_ref.neg_vector_elements(&a_ref).unwrap(), &field_test.neg_vector_elements(&a_test).unwrap(), "neg_vector_elements");
    assert_same_vector(
        &field_ref.inv_vector_elements(&b_ref).unwrap(),
        &field_test.inv_vector_elements(&b_test).unwrap(),
        "inv_vector_elements",
    );
    assert_same_vector(
        &field_ref.exp_vector_scalar(&b_ref, -5).unwrap(),
        &field_test.exp_vector_scalar(&b_test, -5).unwrap(),
        "exp_vector_scalar",
    );
    assert_eq!(field_ref.inv_vector_elements(&a_ref), Err(crate::error::FieldError::DivisionByZero));
    assert_eq!(field_test.inv_vector_elements(&a_test), Err(crate::error::FieldError::DivisionByZero));

    assert_eq!(
        field_ref.combine_vectors(&a_ref, &b_ref).unwrap(),
        field_test.combine_vectors(&a_test, &b_test).unwrap()
    );
    assert_same_vector(
        &field_ref.combine_many_vectors(&[a_ref.clone(), b_ref.clone()], &field_ref.new_vector_from(&[3u64, 5])).unwrap(),
        &field_test.combine_many_vectors(&[a_test.clone(), b_test.clone()], &field_test.new_vector_from(&[3u64, 5])).unwrap(),
        "combine_many_vectors",
    );
}

pub fn test_cross_matrix<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    let mut source: Source = Source::new([52u8; 32]);

    let a_rows: Vec<Vec<BigUint>> = (0..5).map(|_| inputs(p, &mut source, 2)).collect();
    let cols: usize = a_rows[0].len();
    let b_rows: Vec<Vec<BigUint>> = (0..cols).map(|_| random_values(p, &mut source, 3)).collect();
    let v_values: Vec<BigUint> = random_values(p, &mut source, cols);
    let s_values: Vec<BigUint> = random_values(p, &mut source, 5);

    let a_ref: Matrix<BR> = field_ref.new_matrix_from(&a_rows).unwrap();
    let a_test: Matrix<BT> = field_test.new_matrix_from(&a_rows).unwrap();
    let b_ref: Matrix<BR> = field_ref.new_matrix_from(&b_rows).unwrap();
    let b_test: Matrix<BT> = field_test.new_matrix_from(&b_rows).unwrap();

    assert_same_matrix(&a_ref, &a_test, "new_matrix_from");
    assert_same_matrix(
        &field_ref.mul_matrixes(&a_ref, &b_ref).unwrap(),
        &field_test.mul_matrixes(&a_test, &b_test).unwrap(),
        "mul_matrixes",
    );
    assert_same_vector(
        &field_ref.mul_matrix_by_vector(&a_ref, &field_ref.new_vector_from(&v_values)).unwrap(),
        &field_test.mul_matrix_by_vector(&a_test, &field_test.new_vector_from(&v_values)).unwrap(),
        "mul_matrix_by_vector",
    );
    assert_same_matrix(
        &field_ref.mul_matrix_rows(&a_ref, &field_ref.new_vector_from(&s_values)).unwrap(),
        &field_test.mul_matrix_rows(&a_test, &field_test.new_vector_from(&s_values)).unwrap(),
        "mul_matrix_rows",
    );
    assert_same_matrix(
        &field_ref.add_matrix_elements(&a_ref, &a_ref).unwrap(),
        &field_test.add_matrix_elements(&a_test, &a_test).unwrap(),
        "add_matrix_elements",
    );
    assert_same_matrix(
        &field_ref.exp_matrix_scalar(&a_ref, 3).unwrap(),
        &field_test.exp_matrix_scalar(&a_test, 3).unwrap(),
        "exp_matrix_scalar",
    );
    assert_same_matrix(&field_ref.neg_matrix_elements(&a_ref).unwrap(), &field_test.neg_matrix_elements(&a_test).unwrap(), "neg_matrix_elements");
}

pub fn test_cross_fft<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    let mut source: Source = Source::new([53u8; 32]);

    for log_n in 0..=field_ref.two_adicity().min(8) {
        let n: usize = 1 << log_n;
        let g_ref: BigUint = field_ref.get_root_of_unity(n as u64).unwrap();
        let g_test: BigUint = field_test.get_root_of_unity(n as u64).unwrap();
        assert_eq!(g_ref, g_test, "root of order {n}");

        let roots_ref: Vector<BR> = field_ref.get_power_series(&g_ref, n);
        let roots_test: Vector<BT> = field_test.get_power_series(&g_test, n);
        assert_same_vector(&roots_ref, &roots_test, "get_power_series");

        let coeffs: Vec<BigUint> = random_values(p, &mut source, n.div_ceil(2));
        let evals_ref: Vector<BR> = field_ref
            .eval_poly_at_roots(&field_ref.new_vector_from(&coeffs), &roots_ref)
            .unwrap();
        let evals_test: Vector<BT> = field_test
            .eval_poly_at_roots(&field_test.new_vector_from(&coeffs), &roots_test)
            .unwrap();
        assert_same_vector(&evals_ref, &evals_test, "eval_poly_at_roots");

        let ys: Vec<BigUint> = random_values(p, &mut source, n);
        assert_same_vector(
            &field_ref.interpolate_roots(&roots_ref, &field_ref.new_vector_from(&ys)).unwrap(),
            &field_test.interpolate_roots(&roots_test, &field_test.new_vector_from(&ys)).unwrap(),
            "interpolate_roots",
        );

        let rows: Vec<Vec<BigUint>> = (0..3).map(|_| random_values(p, &mut source, n)).collect();
        let m_ref: Matrix<BR> = field_ref.new_matrix_from(&rows).unwrap();
        let m_test: Matrix<BT> = field_test.new_matrix_from(&rows).unwrap();
        assert_same_matrix(
            &field_ref.eval_polys_at_roots(&m_ref, &roots_ref).unwrap(),
            &field_test.eval_polys_at_roots(&m_test, &roots_test).unwrap(),
            "eval_polys_at_roots",
        );
        assert_same_matrix(
            &field_ref.interpolate_roots_matrix(&roots_ref, &m_ref).unwrap(),
            &field_test.interpolate_roots_matrix(&roots_test, &m_test).unwrap(),
            "interpolate_roots_matrix",
        );
    }
}

pub fn test_cross_poly<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    let mut source: Source = Source::new([54u8; 32]);

    let a: Vec<BigUint> = inputs(p, &mut source, 6);
    let mut b: Vec<BigUint> = random_values(p, &mut source, 4);
    b.extend(nonzero_values(p, &mut source, 1));
    let x: BigUint = source.next_below(p);

    let (a_ref, b_ref) = (field_ref.new_vector_from(&a), field_ref.new_vector_from(&b));
    let (a_test, b_test) = (field_test.new_vector_from(&a), field_test.new_vector_from(&b));

    assert_same_vector(&field_ref.add_polys(&a_ref, &b_ref).unwrap(), &field_test.add_polys(&a_test, &b_test).unwrap(), "add_polys");
    assert_same_vector(&field_ref.sub_polys(&b_ref, &a_ref).unwrap(), &field_test.sub_polys(&b_test, &a_test).unwrap(), "sub_polys");
    assert_same_vector(&field_ref.mul_polys(&a_ref, &b_ref).unwrap(), &field_test.mul_polys(&a_test, &b_test).unwrap(), "mul_polys");

    let (q_ref, r_ref) = field_ref.div_rem_polys(&a_ref, &b_ref).unwrap();
    let (q_test, r_test) = field_test.div_rem_polys(&a_test, &b_test).unwrap();
    assert_same_vector(&q_ref, &q_test, "div_rem_polys quotient");
    assert_same_vector(&r_ref, &r_test, "div_rem_polys remainder");

    assert_eq!(field_ref.eval_poly_at(&a_ref, &x).unwrap(), field_test.eval_poly_at(&a_test, &x).unwrap());
    assert_same_vector(
        &field_ref.mul_poly_by_constant(&a_ref, &x).unwrap(),
        &field_test.mul_poly_by_constant(&a_test, &x).unwrap(),
        "mul_poly_by_constant",
    );
}

pub fn test_cross_interpolation<BR: Backend, BT: Backend>(field_ref: &Field<BR>, field_test: &Field<BT>)
where
    Field<BR>: FiniteField<BR>,
    Field<BT>: FiniteField<BT>,
{
    let p: &BigUint = field_ref.modulus();
    let mut source: Source = Source::new([55u8; 32]);

    let xs: Vec<BigUint> = distinct_values(p, &mut source, 10);
    let ys: Vec<BigUint> = random_values(p, &mut source, 10);
    assert_same_vector(
        &field_ref
            .interpolate(&field_ref.new_vector_from(&xs), &field_ref.new_vector_from(&ys))
            .unwrap(),
        &field_test
            .interpolate(&field_test.new_vector_from(&xs), &field_test.new_vector_from(&ys))
            .unwrap(),
        "interpolate",
    );

    let x_rows: Vec<Vec<BigUint>> = (0..7).map(|_| distinct_values(p, &mut source, 4)).collect();
    let y_rows: Vec<Vec<BigUint>> = (0..7).map(|_| random_values(p, &mut source, 4)).collect();
    let polys_ref: Matrix<BR> = field_ref
        .interpolate_quartic_batch(
            &field_ref.new_matrix_from(&x_rows).unwrap(),
            &field_ref.new_matrix_from(&y_rows).unwrap(),
        )
        .unwrap();
    let polys_test: Matrix<BT> = field_test
        .interpolate_quartic_batch(
            &field_test.new_matrix_from(&x_rows).unwrap(),
            &field_test.new_matrix_from(&y_rows).unwrap(),
        )
        .unwrap();
    assert_same_matrix(&polys_ref, &polys_test, "interpolate_quartic_batch");

    let points: Vec<BigUint> = random_values(p, &mut source, 7);
    assert_same_vector(
        &field_ref.eval_quartic_batch(&polys_ref, &field_ref.new_vector_from(&points)).unwrap(),
        &field_test.eval_quartic_batch(&polys_test, &field_test.new_vector_from(&points)).unwrap(),
        "eval_quartic_batch",
    );

    // A repeated x coordinate fails identically.
    let mut dup: Vec<BigUint> = xs.clone();
    dup[9] = dup[0].clone();
    assert_eq!(
        field_ref
            .interpolate(&field_ref.new_vector_from(&dup), &field_ref.new_vector_from(&ys))
            .map(|v| v.to_values()),
        field_test
            .interpolate(&field_test.new_vector_from(&dup), &field_test.new_vector_from(&ys))
            .map(|v| v.to_values()),
    );
}
