use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    api::{FieldInfos, FieldNew},
    config::FieldConfig,
    error::FieldResult,
    layouts::{Backend, Field},
    oep::FieldNewImpl,
};

impl<B> FieldNew<B> for Field<B>
where
    B: Backend + FieldNewImpl<B>,
{
    fn new(modulus: &BigUint, config: &FieldConfig) -> FieldResult<Self> {
        config.validate()?;
        B::new_impl(modulus, config)
    }
}

impl<B> FieldInfos for Field<B>
where
    B: Backend,
{
    fn characteristic(&self) -> BigUint {
        self.modulus().clone()
    }

    fn element_size(&self) -> usize {
        self.element_size()
    }

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }
}
