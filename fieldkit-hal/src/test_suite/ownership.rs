use num_bigint::BigUint;

use crate::{
    api::{
        FiniteField, MatrixAlloc, MatrixArithmetic, MatrixProducts, PolyArithmetic, PolyEvaluate, VectorAlloc,
        VectorArithmetic, VectorCombine, VectorReshape,
    },
    error::FieldError,
    layouts::{Backend, Field, Matrix, Vector},
};

/// `other` has a different modulus from `field`; `twin` has the same one but is
/// a separate instance.
pub fn test_field_mismatch<B: Backend>(field: &Field<B>, other: &Field<B>, twin: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    assert_ne!(field.modulus(), other.modulus());
    assert_eq!(field.modulus(), twin.modulus());

    let mine: Vector<B> = field.new_vector_from(&[1000u64, 2000]);
    let theirs: Vector<B> = other.new_vector_from(&[1u64, 1]);
    assert_eq!(theirs.modulus(), other.modulus());
    assert!(field.owns_vector(&mine));
    assert!(!field.owns_vector(&theirs));

    let mismatch: FieldError = FieldError::FieldMismatch {
        expected: field.modulus().clone(),
        found: other.modulus().clone(),
    };
    let err = || Err(mismatch.clone());

    assert_eq!(field.add_vector_elements(&mine, &theirs), err());
    assert_eq!(field.add_vector_elements(&theirs, &mine), err());
    assert_eq!(field.div_vector_elements(&mine, &theirs), err());
    assert_eq!(field.mul_vector_scalar(&theirs, 2u64), err());
    assert_eq!(field.neg_vector_elements(&theirs), err());
    assert_eq!(field.inv_vector_elements(&theirs), err());
    assert_eq!(field.truncate_vector(&theirs, 1), err());
    assert_eq!(field.duplicate_vector(&theirs, 2), err());
    assert_eq!(field.combine_vectors(&mine, &theirs), Err(mismatch.clone()));
    assert_eq!(
        field.combine_many_vectors(&[mine.clone(), theirs.clone()], &field.new_vector_from(&[1u64, 1])),
        err()
    );
    assert_eq!(field.add_polys(&mine, &theirs), err());
    assert_eq!(field.mul_poly_by_constant(&theirs, 3u64), err());
    assert_eq!(field.eval_poly_at(&theirs, 3u64), Err(mismatch.clone()));

    let m_mine: Matrix<B> = field.new_matrix(1, 2);
    let m_theirs: Matrix<B> = other.new_matrix(1, 2);
    assert!(field.owns_matrix(&m_mine));
    assert!(!field.owns_matrix(&m_theirs));
    assert_eq!(field.add_matrix_elements(&m_mine, &m_theirs), Err(mismatch.clone()));
    assert_eq!(field.add_matrix_scalar(&m_theirs, 1u64), Err(mismatch.clone()));
    assert_eq!(field.mul_matrix_by_vector(&m_mine, &theirs), err());
    assert_eq!(field.new_matrix_from_vectors(&[theirs.clone()]), Err(mismatch.clone()));

    // The inputs themselves are left as they were.
    assert_eq!(theirs.to_values(), vec![BigUint::from(1u32); 2]);

    // Fields with equal moduli share operands.
    let shared: Vector<B> = twin.new_vector_from(&[1u64, 1]);
    assert!(field.owns_vector(&shared));
    assert_eq!(
        field.add_vector_elements(&mine, &shared).unwrap().to_values(),
        vec![BigUint::from(1001u32) % field.modulus(), BigUint::from(2001u32) % field.modulus()]
    );
}
