use num_bigint::{BigInt, BigUint};

use crate::{
    api::{FieldInput, VectorAlloc, VectorArithmetic, VectorCombine, VectorReshape},
    delegates::{batch_inv, check_len, decode, map_scalar, map2, pow_signed, to_elem, wrap, zeros},
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Matrix, Vector},
    oep::{BatchInvImpl, ScalarImpl, VecKernelImpl},
    source::Source,
};

impl<B> VectorAlloc<B> for Field<B>
where
    B: Backend + ScalarImpl<B>,
{
    fn new_vector(&self, len: usize) -> Vector<B> {
        wrap(self, zeros(self, len))
    }

    fn new_vector_from<X: FieldInput>(&self, values: &[X]) -> Vector<B> {
        wrap(self, values.iter().map(|x| to_elem(self, x)).collect())
    }

    fn new_vector_from_bytes(&self, bytes: &[u8]) -> FieldResult<Vector<B>> {
        Ok(wrap(self, decode(self, bytes)?))
    }

    fn prng_vector(&self, seed: &[u8], len: usize) -> Vector<B> {
        let mut source: Source = Source::from_seed_bytes(seed);
        let data: Vec<B::Elem> = (0..len as u64)
            .map(|i| {
                source.seek_stream(i);
                B::elem_from_residue_impl(self, &source.next_below(self.modulus()))
            })
            .collect();
        wrap(self, data)
    }
}

impl<B> VectorArithmetic<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B> + BatchInvImpl<B>,
{
    fn add_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        self.check_vector(b)?;
        check_len("add_vector_elements", a.len(), b.len())?;
        Ok(wrap(self, map2(self, a.as_slice(), b.as_slice(), B::vec_add_impl)))
    }

    fn add_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        Ok(wrap(self, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_add_scalar_impl)))
    }

    fn sub_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        self.check_vector(b)?;
        check_len("sub_vector_elements", a.len(), b.len())?;
        Ok(wrap(self, map2(self, a.as_slice(), b.as_slice(), B::vec_sub_impl)))
    }

    fn sub_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        Ok(wrap(self, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_sub_scalar_impl)))
    }

    fn mul_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        self.check_vector(b)?;
        check_len("mul_vector_elements", a.len(), b.len())?;
        Ok(wrap(self, map2(self, a.as_slice(), b.as_slice(), B::vec_mul_impl)))
    }

    fn mul_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        Ok(wrap(self, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_mul_scalar_impl)))
    }

    fn div_vector_elements(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        self.check_vector(b)?;
        check_len("div_vector_elements", a.len(), b.len())?;
        let b_inv: Vec<B::Elem> = batch_inv(self, b.as_slice())?;
        Ok(wrap(self, map2(self, a.as_slice(), &b_inv, B::vec_mul_impl)))
    }

    fn div_vector_scalar(&self, a: &Vector<B>, b: impl FieldInput) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        let b_inv: B::Elem = B::elem_inv_impl(self, &to_elem(self, b))?;
        Ok(wrap(self, map_scalar(self, a.as_slice(), &b_inv, B::vec_mul_scalar_impl)))
    }

    fn exp_vector_elements(&self, a: &Vector<B>, e: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        self.check_vector(e)?;
        check_len("exp_vector_elements", a.len(), e.len())?;
        Ok(wrap(self, map2(self, a.as_slice(), e.as_slice(), B::vec_pow_each_impl)))
    }

    fn exp_vector_scalar(&self, a: &Vector<B>, e: impl Into<BigInt>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        Ok(wrap(self, pow_signed(self, a.as_slice(), e.into())?))
    }

    fn inv_vector_elements(&self, a: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        Ok(wrap(self, batch_inv(self, a.as_slice())?))
    }

    fn neg_vector_elements(&self, a: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_vector(a)?;
        let mut res: Vec<B::Elem> = zeros(self, a.len());
        B::vec_neg_impl(self, &mut res, a.as_slice());
        Ok(wrap(self, res))
    }
}

impl<B> VectorCombine<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B>,
{
    fn combine_vectors(&self, a: &Vector<B>, b: &Vector<B>) -> FieldResult<BigUint> {
        self.check_vector(a)?;
        self.check_vector(b)?;
        check_len("combine_vectors", a.len(), b.len())?;
        Ok(B::elem_to_biguint(&B::vec_inner_product_impl(
            self,
            a.as_slice(),
            b.as_slice(),
        )))
    }

    fn combine_many_vectors(&self, vectors: &[Vector<B>], coefficients: &Vector<B>) -> FieldResult<Vector<B>> {
        let first: &Vector<B> = vectors
            .first()
            .ok_or_else(|| FieldError::dim("combine_many_vectors: no vectors to combine"))?;
        vectors.iter().try_for_each(|v| self.check_vector(v))?;
        self.check_vector(coefficients)?;
        check_len("combine_many_vectors", vectors.len(), coefficients.len())?;

        let n: usize = first.len();
        if let Some(v) = vectors.iter().find(|v| v.len() != n) {
            return Err(FieldError::dim(format!(
                "combine_many_vectors: vector of length {} among vectors of length {n}",
                v.len()
            )));
        }

        let mut res: Vec<B::Elem> = zeros(self, n);
        let mut term: Vec<B::Elem> = zeros(self, n);
        let mut acc: Vec<B::Elem> = zeros(self, n);
        for (v, k) in vectors.iter().zip(coefficients.iter()) {
            B::vec_mul_scalar_impl(self, &mut term, v.as_slice(), k);
            acc.clone_from_slice(&res);
            B::vec_add_impl(self, &mut res, &acc, &term);
        }
        Ok(wrap(self, res))
    }
}

impl<B> VectorReshape<B> for Field<B>
where
    B: Backend,
{
    fn vector_to_matrix(&self, v: &Vector<B>, columns: usize) -> FieldResult<Matrix<B>> {
        self.check_vector(v)?;
        if columns == 0 || v.len() % columns != 0 {
            return Err(FieldError::dim(format!(
                "vector_to_matrix: length {} is not divisible into {columns} columns",
                v.len()
            )));
        }
        Ok(Matrix::from_elems(self, v.as_slice().to_vec(), v.len() / columns, columns))
    }

    fn pluck_vector(&self, v: &Vector<B>, skip: usize, times: usize) -> FieldResult<Vector<B>> {
        self.check_vector(v)?;
        if times == 0 {
            return Ok(wrap(self, Vec::new()));
        }
        let last: usize = (times - 1)
            .checked_mul(skip)
            .ok_or(FieldError::IndexOutOfRange {
                index: usize::MAX,
                len: v.len(),
            })?;
        if last >= v.len() {
            return Err(FieldError::IndexOutOfRange { index: last, len: v.len() });
        }
        let data: Vec<B::Elem> = (0..times).map(|i| v.as_slice()[i * skip].clone()).collect();
        Ok(wrap(self, data))
    }

    fn truncate_vector(&self, v: &Vector<B>, len: usize) -> FieldResult<Vector<B>> {
        self.check_vector(v)?;
        if len > v.len() {
            return Err(FieldError::IndexOutOfRange {
                index: len - 1,
                len: v.len(),
            });
        }
        Ok(wrap(self, v.as_slice()[..len].to_vec()))
    }

    fn duplicate_vector(&self, v: &Vector<B>, times: usize) -> FieldResult<Vector<B>> {
        self.check_vector(v)?;
        let mut data: Vec<B::Elem> = Vec::with_capacity(v.len() * (times + 1));
        for _ in 0..=times {
            data.extend_from_slice(v.as_slice());
        }
        Ok(wrap(self, data))
    }
}
