use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

use num_bigint::BigUint;

use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Vector, vector::encode_elems},
};

/// A `rows x cols` grid of canonical field elements, stored row-major in one buffer.
///
/// Like [Vector], a matrix remembers the modulus of the [Field] that built it.
pub struct Matrix<B: Backend> {
    data: Vec<B::Elem>,
    rows: usize,
    cols: usize,
    modulus: Arc<BigUint>,
    element_size: usize,
}

impl<B: Backend> Matrix<B> {
    /// Wraps a row-major buffer of `rows * cols` canonical elements of `field`.
    pub(crate) fn from_elems(field: &Field<B>, data: Vec<B::Elem>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "buffer of {} elements is not {rows}x{cols}", data.len());
        Self {
            data,
            rows,
            cols,
            modulus: field.shared_modulus().clone(),
            element_size: field.element_size(),
        }
    }

    /// Modulus of the field this matrix belongs to.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub(crate) fn shared_modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len() * self.element_size
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[B::Elem] {
        &self.data
    }

    /// Elements of row `r`.
    pub fn row(&self, r: usize) -> FieldResult<&[B::Elem]> {
        if r >= self.rows {
            return Err(FieldError::IndexOutOfRange { index: r, len: self.rows });
        }
        Ok(self.row_unchecked(r))
    }

    #[inline]
    fn row_unchecked(&self, r: usize) -> &[B::Elem] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[B::Elem]> {
        (0..self.rows).map(move |r| self.row_unchecked(r))
    }

    pub fn get(&self, r: usize, c: usize) -> FieldResult<BigUint> {
        if r >= self.rows {
            return Err(FieldError::IndexOutOfRange { index: r, len: self.rows });
        }
        if c >= self.cols {
            return Err(FieldError::IndexOutOfRange { index: c, len: self.cols });
        }
        Ok(B::elem_to_biguint(&self.data[r * self.cols + c]))
    }

    pub fn row_vector(&self, r: usize) -> FieldResult<Vector<B>> {
        Ok(self.wrap_row(self.row(r)?))
    }

    pub fn rows_to_vectors(&self) -> Vec<Vector<B>> {
        self.iter_rows().map(|row| self.wrap_row(row)).collect()
    }

    fn wrap_row(&self, row: &[B::Elem]) -> Vector<B> {
        Vector::from_parts(row.to_vec(), self.modulus.clone(), self.element_size)
    }

    pub fn to_values(&self) -> Vec<Vec<BigUint>> {
        self.iter_rows()
            .map(|row| row.iter().map(B::elem_to_biguint).collect())
            .collect()
    }

    /// Row-major little-endian encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_elems::<B>(&self.data, self.element_size)
    }

    /// One encoding per row.
    pub fn rows_to_bytes(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| encode_elems::<B>(row, self.element_size))
            .collect()
    }
}

impl<B: Backend> Clone for Matrix<B> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
            modulus: self.modulus.clone(),
            element_size: self.element_size,
        }
    }
}

impl<B: Backend> PartialEq for Matrix<B> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.modulus == other.modulus && self.data == other.data
    }
}

impl<B: Backend> Eq for Matrix<B> {}

impl<B: Backend> Debug for Matrix<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix(rows={}, cols={}, element_size={}):\n{}", self.rows, self.cols, self.element_size, self)
    }
}

impl<B: Backend> Display for Matrix<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            write!(f, "[")?;
            for (j, a) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", B::elem_to_biguint(a))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
