//! Elementwise kernels expressed through [ScalarImpl]; a backend without
//! specialised slice code can forward its [crate::oep::VecKernelImpl] here.

use itertools::izip;
use num_bigint::BigUint;

use crate::{
    layouts::{Backend, Field},
    oep::ScalarImpl,
};

#[inline(always)]
pub fn vec_add_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]) {
    debug_assert_eq!(res.len(), a.len());
    debug_assert_eq!(res.len(), b.len());
    izip!(res.iter_mut(), a, b).for_each(|(r, a, b)| *r = B::elem_add_impl(field, a, b));
}

#[inline(always)]
pub fn vec_add_scalar_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a).for_each(|(r, a)| *r = B::elem_add_impl(field, a, b));
}

#[inline(always)]
pub fn vec_sub_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]) {
    debug_assert_eq!(res.len(), a.len());
    debug_assert_eq!(res.len(), b.len());
    izip!(res.iter_mut(), a, b).for_each(|(r, a, b)| *r = B::elem_sub_impl(field, a, b));
}

#[inline(always)]
pub fn vec_sub_scalar_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a).for_each(|(r, a)| *r = B::elem_sub_impl(field, a, b));
}

#[inline(always)]
pub fn vec_neg_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem]) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a).for_each(|(r, a)| *r = B::elem_neg_impl(field, a));
}

#[inline(always)]
pub fn vec_mul_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &[B::Elem]) {
    debug_assert_eq!(res.len(), a.len());
    debug_assert_eq!(res.len(), b.len());
    izip!(res.iter_mut(), a, b).for_each(|(r, a, b)| *r = B::elem_mul_impl(field, a, b));
}

#[inline(always)]
pub fn vec_mul_scalar_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], b: &B::Elem) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a).for_each(|(r, a)| *r = B::elem_mul_impl(field, a, b));
}

pub fn vec_pow_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], e: &BigUint) {
    debug_assert_eq!(res.len(), a.len());
    izip!(res.iter_mut(), a).for_each(|(r, a)| *r = B::elem_pow_impl(field, a, e));
}

pub fn vec_pow_each_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem], e: &[B::Elem]) {
    debug_assert_eq!(res.len(), a.len());
    debug_assert_eq!(res.len(), e.len());
    izip!(res.iter_mut(), a, e).for_each(|(r, a, e)| *r = B::elem_pow_impl(field, a, &B::elem_to_biguint(e)));
}

pub fn vec_inner_product_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, a: &[B::Elem], b: &[B::Elem]) -> B::Elem {
    debug_assert_eq!(a.len(), b.len());
    izip!(a, b).fold(B::elem_zero_impl(field), |acc, (a, b)| {
        B::elem_add_impl(field, &acc, &B::elem_mul_impl(field, a, b))
    })
}
