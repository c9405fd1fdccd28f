use num_bigint::BigInt;

use crate::{
    api::{FieldInput, MatrixAlloc, MatrixArithmetic, MatrixProducts},
    delegates::{batch_inv, decode, map_scalar, map2, pow_signed, to_elem, wrap, zeros},
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Matrix, Vector},
    oep::{BatchInvImpl, ScalarImpl, VecKernelImpl},
};

fn check_shape<B: Backend>(field: &Field<B>, op: &str, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<()> {
    field.check_matrix(a)?;
    field.check_matrix(b)?;
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(FieldError::dim(format!(
            "{op}: shapes {}x{} and {}x{} differ",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    Ok(())
}

#[inline]
fn wrap_like<B: Backend>(field: &Field<B>, like: &Matrix<B>, data: Vec<B::Elem>) -> Matrix<B> {
    Matrix::from_elems(field, data, like.rows(), like.cols())
}

impl<B> MatrixAlloc<B> for Field<B>
where
    B: Backend + ScalarImpl<B>,
{
    fn new_matrix(&self, rows: usize, cols: usize) -> Matrix<B> {
        Matrix::from_elems(self, zeros(self, rows * cols), rows, cols)
    }

    fn new_matrix_from<X: FieldInput>(&self, rows: &[Vec<X>]) -> FieldResult<Matrix<B>> {
        let cols: usize = rows.first().map_or(0, |row| row.len());
        let mut data: Vec<B::Elem> = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(FieldError::dim(format!(
                    "new_matrix_from: row {r} has {} elements, expected {cols}",
                    row.len()
                )));
            }
            data.extend(row.iter().map(|x| to_elem(self, x)));
        }
        Ok(Matrix::from_elems(self, data, rows.len(), cols))
    }

    fn new_matrix_from_vectors(&self, rows: &[Vector<B>]) -> FieldResult<Matrix<B>> {
        let cols: usize = rows.first().map_or(0, |row| row.len());
        let mut data: Vec<B::Elem> = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            self.check_vector(row)?;
            if row.len() != cols {
                return Err(FieldError::dim(format!(
                    "new_matrix_from_vectors: row {r} has {} elements, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row.as_slice());
        }
        Ok(Matrix::from_elems(self, data, rows.len(), cols))
    }

    fn new_matrix_from_bytes(&self, rows: usize, cols: usize, bytes: &[u8]) -> FieldResult<Matrix<B>> {
        let expected: usize = rows * cols * self.element_size();
        if bytes.len() != expected {
            return Err(FieldError::dim(format!(
                "new_matrix_from_bytes: {} bytes for a {rows}x{cols} matrix of {expected} bytes",
                bytes.len()
            )));
        }
        Ok(Matrix::from_elems(self, decode(self, bytes)?, rows, cols))
    }
}

impl<B> MatrixArithmetic<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B> + BatchInvImpl<B>,
{
    fn add_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>> {
        check_shape(self, "add_matrix_elements", a, b)?;
        Ok(wrap_like(self, a, map2(self, a.as_slice(), b.as_slice(), B::vec_add_impl)))
    }

    fn add_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        Ok(wrap_like(self, a, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_add_scalar_impl)))
    }

    fn sub_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>> {
        check_shape(self, "sub_matrix_elements", a, b)?;
        Ok(wrap_like(self, a, map2(self, a.as_slice(), b.as_slice(), B::vec_sub_impl)))
    }

    fn sub_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        Ok(wrap_like(self, a, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_sub_scalar_impl)))
    }

    fn mul_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>> {
        check_shape(self, "mul_matrix_elements", a, b)?;
        Ok(wrap_like(self, a, map2(self, a.as_slice(), b.as_slice(), B::vec_mul_impl)))
    }

    fn mul_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        Ok(wrap_like(self, a, map_scalar(self, a.as_slice(), &to_elem(self, b), B::vec_mul_scalar_impl)))
    }

    fn div_matrix_elements(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>> {
        check_shape(self, "div_matrix_elements", a, b)?;
        let b_inv: Vec<B::Elem> = batch_inv(self, b.as_slice())?;
        Ok(wrap_like(self, a, map2(self, a.as_slice(), &b_inv, B::vec_mul_impl)))
    }

    fn div_matrix_scalar(&self, a: &Matrix<B>, b: impl FieldInput) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        let b_inv: B::Elem = B::elem_inv_impl(self, &to_elem(self, b))?;
        Ok(wrap_like(self, a, map_scalar(self, a.as_slice(), &b_inv, B::vec_mul_scalar_impl)))
    }

    fn exp_matrix_elements(&self, a: &Matrix<B>, e: &Matrix<B>) -> FieldResult<Matrix<B>> {
        check_shape(self, "exp_matrix_elements", a, e)?;
        Ok(wrap_like(self, a, map2(self, a.as_slice(), e.as_slice(), B::vec_pow_each_impl)))
    }

    fn exp_matrix_scalar(&self, a: &Matrix<B>, e: impl Into<BigInt>) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        Ok(wrap_like(self, a, pow_signed(self, a.as_slice(), e.into())?))
    }

    fn inv_matrix_elements(&self, a: &Matrix<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        Ok(wrap_like(self, a, batch_inv(self, a.as_slice())?))
    }

    fn neg_matrix_elements(&self, a: &Matrix<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        let mut res: Vec<B::Elem> = zeros(self, a.as_slice().len());
        B::vec_neg_impl(self, &mut res, a.as_slice());
        Ok(wrap_like(self, a, res))
    }
}

impl<B> MatrixProducts<B> for Field<B>
where
    B: Backend + ScalarImpl<B> + VecKernelImpl<B>,
{
    fn mul_matrixes(&self, a: &Matrix<B>, b: &Matrix<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        self.check_matrix(b)?;
        if a.cols() != b.rows() {
            return Err(FieldError::dim(format!(
                "mul_matrixes: {}x{} times {}x{}",
                a.rows(),
                a.cols(),
                b.rows(),
                b.cols()
            )));
        }

        let (n, m, k) = (a.rows(), a.cols(), b.cols());

        // Columns of b as contiguous rows.
        let mut bt: Vec<B::Elem> = Vec::with_capacity(m * k);
        for j in 0..k {
            bt.extend(b.iter_rows().map(|row| row[j].clone()));
        }

        let mut data: Vec<B::Elem> = Vec::with_capacity(n * k);
        for row in a.iter_rows() {
            for j in 0..k {
                data.push(B::vec_inner_product_impl(self, row, &bt[j * m..(j + 1) * m]));
            }
        }

        Ok(Matrix::from_elems(self, data, n, k))
    }

    fn mul_matrix_by_vector(&self, a: &Matrix<B>, v: &Vector<B>) -> FieldResult<Vector<B>> {
        self.check_matrix(a)?;
        self.check_vector(v)?;
        if a.cols() != v.len() {
            return Err(FieldError::dim(format!(
                "mul_matrix_by_vector: {}x{} times {}",
                a.rows(),
                a.cols(),
                v.len()
            )));
        }
        let data: Vec<B::Elem> = a
            .iter_rows()
            .map(|row| B::vec_inner_product_impl(self, row, v.as_slice()))
            .collect();
        Ok(wrap(self, data))
    }

    fn mul_matrix_rows(&self, a: &Matrix<B>, v: &Vector<B>) -> FieldResult<Matrix<B>> {
        self.check_matrix(a)?;
        self.check_vector(v)?;
        if a.rows() != v.len() {
            return Err(FieldError::dim(format!(
                "mul_matrix_rows: {} rows scaled by {} values",
                a.rows(),
                v.len()
            )));
        }
        let cols: usize = a.cols();
        let mut data: Vec<B::Elem> = zeros(self, a.rows() * cols);
        for (r, (row, s)) in a.iter_rows().zip(v.iter()).enumerate() {
            B::vec_mul_scalar_impl(self, &mut data[r * cols..(r + 1) * cols], row, s);
        }
        Ok(wrap_like(self, a, data))
    }
}
