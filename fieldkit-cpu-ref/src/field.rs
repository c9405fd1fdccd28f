//! [`Backend`] and [`FieldNewImpl`] for [`PrimeRef`](crate::PrimeRef).

use num_bigint::BigUint;

use fieldkit_hal::{
    config::FieldConfig,
    error::FieldResult,
    layouts::{Backend, Field},
    oep::FieldNewImpl,
};

use crate::PrimeRef;

/// Handle of a `Field<PrimeRef>`: the modulus the element arithmetic reduces by.
pub struct PrimeRefHandle {
    pub(crate) modulus: BigUint,
}

impl Backend for PrimeRef {
    type Elem = BigUint;
    type Handle = PrimeRefHandle;

    const NAME: &'static str = "cpu-ref";

    #[inline]
    fn elem_to_biguint(a: &Self::Elem) -> BigUint {
        a.clone()
    }
}

impl FieldNewImpl<Self> for PrimeRef {
    fn new_impl(modulus: &BigUint, config: &FieldConfig) -> FieldResult<Field<Self>> {
        let handle: PrimeRefHandle = PrimeRefHandle {
            modulus: modulus.clone(),
        };
        Field::from_handle(modulus.clone(), handle, config.clone())
    }
}
