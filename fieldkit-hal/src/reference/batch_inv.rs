use itertools::izip;

use crate::{
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
    oep::ScalarImpl,
};

/// Montgomery's trick.
///
/// `res` first receives the exclusive prefix products `P_{i-1} = a_0 * ... * a_{i-1}`;
/// `P_{n-1}` is inverted once, then the backward walk produces
/// `inv(a_i) = P_{i-1} * running` with `running *= a_i`.
pub fn batch_inv_ref<B: Backend + ScalarImpl<B>>(field: &Field<B>, res: &mut [B::Elem], a: &[B::Elem]) -> FieldResult<()> {
    if res.len() != a.len() {
        return Err(FieldError::dim(format!(
            "batch inversion: output of {} elements for {} inputs",
            res.len(),
            a.len()
        )));
    }

    if a.iter().any(|x| B::elem_is_zero_impl(field, x)) {
        return Err(FieldError::DivisionByZero);
    }

    if a.is_empty() {
        return Ok(());
    }

    let mut acc: B::Elem = B::elem_one_impl(field);
    izip!(res.iter_mut(), a).for_each(|(r, x)| {
        let next: B::Elem = B::elem_mul_impl(field, &acc, x);
        *r = std::mem::replace(&mut acc, next);
    });

    let mut running: B::Elem = B::elem_inv_impl(field, &acc)?;
    izip!(res.iter_mut(), a).rev().for_each(|(r, x)| {
        *r = B::elem_mul_impl(field, r, &running);
        running = B::elem_mul_impl(field, &running, x);
    });

    Ok(())
}
