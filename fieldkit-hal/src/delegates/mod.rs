mod field;
mod matrix;
mod poly;
mod quartic;
mod roots;
mod scalar;
mod vector;

use num_bigint::{BigInt, Sign};

use crate::{
    api::FieldInput,
    error::{FieldError, FieldResult},
    layouts::{Backend, Field, Vector},
    oep::{BatchInvImpl, ScalarImpl},
};

#[inline]
pub(crate) fn to_elem<B: Backend + ScalarImpl<B>>(field: &Field<B>, x: impl FieldInput) -> B::Elem {
    B::elem_from_residue_impl(field, &x.to_residue(field.modulus()))
}

#[inline]
pub(crate) fn zeros<B: Backend + ScalarImpl<B>>(field: &Field<B>, n: usize) -> Vec<B::Elem> {
    vec![B::elem_zero_impl(field); n]
}

#[inline]
pub(crate) fn wrap<B: Backend>(field: &Field<B>, data: Vec<B::Elem>) -> Vector<B> {
    Vector::from_elems(field, data)
}

pub(crate) fn check_len(op: &str, a: usize, b: usize) -> FieldResult<()> {
    if a != b {
        return Err(FieldError::dim(format!("{op}: lengths {a} and {b} differ")));
    }
    Ok(())
}

/// Decodes `element_size`-byte little-endian chunks, reducing each modulo `p`.
pub(crate) fn decode<B: Backend + ScalarImpl<B>>(field: &Field<B>, bytes: &[u8]) -> FieldResult<Vec<B::Elem>> {
    let size: usize = field.element_size();
    if bytes.len() % size != 0 {
        return Err(FieldError::dim(format!(
            "{} bytes is not a multiple of the element size {size}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(size)
        .map(|chunk| B::elem_from_residue_impl(field, &field.decode_le(chunk)))
        .collect())
}

/// Elementwise kernel over equally long slices into a fresh buffer.
pub(crate) fn map2<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    a: &[B::Elem],
    b: &[B::Elem],
    kernel: impl Fn(&Field<B>, &mut [B::Elem], &[B::Elem], &[B::Elem]),
) -> Vec<B::Elem> {
    let mut res: Vec<B::Elem> = zeros(field, a.len());
    kernel(field, &mut res, a, b);
    res
}

/// Broadcast kernel into a fresh buffer.
pub(crate) fn map_scalar<B: Backend + ScalarImpl<B>>(
    field: &Field<B>,
    a: &[B::Elem],
    b: &B::Elem,
    kernel: impl Fn(&Field<B>, &mut [B::Elem], &[B::Elem], &B::Elem),
) -> Vec<B::Elem> {
    let mut res: Vec<B::Elem> = zeros(field, a.len());
    kernel(field, &mut res, a, b);
    res
}

pub(crate) fn batch_inv<B: Backend + ScalarImpl<B> + BatchInvImpl<B>>(field: &Field<B>, a: &[B::Elem]) -> FieldResult<Vec<B::Elem>> {
    let mut res: Vec<B::Elem> = zeros(field, a.len());
    B::batch_inv_impl(field, &mut res, a)?;
    Ok(res)
}

/// `a[i]^e` for a signed `e`; negative exponents batch-invert first.
pub(crate) fn pow_signed<B>(field: &Field<B>, a: &[B::Elem], e: BigInt) -> FieldResult<Vec<B::Elem>>
where
    B: Backend + ScalarImpl<B> + BatchInvImpl<B> + crate::oep::VecKernelImpl<B>,
{
    let (sign, magnitude) = e.into_parts();
    let mut res: Vec<B::Elem> = zeros(field, a.len());
    if sign == Sign::Minus {
        let inv: Vec<B::Elem> = batch_inv(field, a)?;
        B::vec_pow_impl(field, &mut res, &inv, &magnitude);
    } else {
        B::vec_pow_impl(field, &mut res, a, &magnitude);
    }
    Ok(res)
}
