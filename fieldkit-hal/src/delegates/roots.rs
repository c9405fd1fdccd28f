use num_bigint::BigUint;

use crate::{
    api::{FieldInput, RootsOfUnity},
    delegates::{to_elem, wrap},
    error::FieldResult,
    layouts::{Backend, Field, Vector},
    oep::ScalarImpl,
    reference::roots::{check_order, root_of_unity_ref},
};

impl<B> RootsOfUnity<B> for Field<B>
where
    B: Backend + ScalarImpl<B>,
{
    fn get_root_of_unity(&self, order: u64) -> FieldResult<BigUint> {
        let log_order: u32 = check_order(order, self.two_adicity())?;
        Ok(root_of_unity_ref(
            self.modulus(),
            self.two_sylow_base(),
            self.two_adicity(),
            log_order,
        ))
    }

    fn get_power_series(&self, base: impl FieldInput, length: usize) -> Vector<B> {
        let base: B::Elem = to_elem(self, base);
        let mut acc: B::Elem = B::elem_one_impl(self);
        let mut data: Vec<B::Elem> = Vec::with_capacity(length);
        for _ in 0..length {
            let next: B::Elem = B::elem_mul_impl(self, &acc, &base);
            data.push(std::mem::replace(&mut acc, next));
        }
        wrap(self, data)
    }
}
