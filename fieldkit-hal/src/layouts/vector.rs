use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

use itertools::izip;
use num_bigint::BigUint;

use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
};

/// An ordered, fixed-length sequence of canonical field elements.
///
/// Also the representation of polynomials (coefficients in ascending degree,
/// never implicitly trimmed). A vector owns its storage exclusively and no
/// field operation mutates it. Vectors are only built by a [Field] and remember
/// its modulus.
pub struct Vector<B: Backend> {
    data: Vec<B::Elem>,
    modulus: Arc<BigUint>,
    element_size: usize,
}

impl<B: Backend> Vector<B> {
    /// Wraps canonical elements of `field`.
    pub(crate) fn from_elems(field: &Field<B>, data: Vec<B::Elem>) -> Self {
        Self::from_parts(data, field.shared_modulus().clone(), field.element_size())
    }

    pub(super) fn from_parts(data: Vec<B::Elem>, modulus: Arc<BigUint>, element_size: usize) -> Self {
        Self {
            data,
            modulus,
            element_size,
        }
    }

    /// Modulus of the field this vector belongs to.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub(crate) fn shared_modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Size of the byte encoding: `len * element_size`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len() * self.element_size
    }

    #[inline]
    pub fn as_slice(&self) -> &[B::Elem] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, B::Elem> {
        self.data.iter()
    }

    pub fn get(&self, i: usize) -> FieldResult<BigUint> {
        self.data
            .get(i)
            .map(B::elem_to_biguint)
            .ok_or(FieldError::IndexOutOfRange {
                index: i,
                len: self.data.len(),
            })
    }

    pub fn to_values(&self) -> Vec<BigUint> {
        self.data.iter().map(B::elem_to_biguint).collect()
    }

    /// Little-endian encoding, `element_size` bytes per element.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_elems::<B>(&self.data, self.element_size)
    }

    /// Encoding of the `count` elements starting at `start`.
    pub fn to_bytes_range(&self, start: usize, count: usize) -> FieldResult<Vec<u8>> {
        let len: usize = self.data.len();
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(encode_elems::<B>(&self.data[start..end], self.element_size)),
            _ => Err(FieldError::IndexOutOfRange {
                index: start.saturating_add(count).saturating_sub(1),
                len,
            }),
        }
    }
}

pub(crate) fn encode_elems<B: Backend>(data: &[B::Elem], element_size: usize) -> Vec<u8> {
    let mut bytes: Vec<u8> = vec![0u8; data.len() * element_size];
    if element_size > 0 {
        izip!(bytes.chunks_exact_mut(element_size), data).for_each(|(out, a)| B::elem_write_le(a, out));
    }
    bytes
}

impl<B: Backend> Clone for Vector<B> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            modulus: self.modulus.clone(),
            element_size: self.element_size,
        }
    }
}

impl<B: Backend> PartialEq for Vector<B> {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.data == other.data
    }
}

impl<B: Backend> Eq for Vector<B> {}

impl<B: Backend> Debug for Vector<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector(len={}, element_size={}): {}", self.len(), self.element_size, self)
    }
}

impl<B: Backend> Display for Vector<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, a) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", B::elem_to_biguint(a))?;
        }
        write!(f, "]")
    }
}
