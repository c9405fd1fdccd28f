use num_bigint::{BigInt, BigUint, Sign};
use rand_core::{CryptoRng, RngCore};

use crate::{
    api::{FieldInput, FieldRandom, FieldScalarOps},
    delegates::to_elem,
    error::FieldResult,
    layouts::{Backend, Field},
    oep::ScalarImpl,
    source::{Source, sample_below},
};

impl<B> FieldScalarOps for Field<B>
where
    B: Backend + ScalarImpl<B>,
{
    fn reduce(&self, x: impl FieldInput) -> BigUint {
        x.to_residue(self.modulus())
    }

    fn add(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        let (x, y) = (to_elem(self, x), to_elem(self, y));
        B::elem_to_biguint(&B::elem_add_impl(self, &x, &y))
    }

    fn sub(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        let (x, y) = (to_elem(self, x), to_elem(self, y));
        B::elem_to_biguint(&B::elem_sub_impl(self, &x, &y))
    }

    fn mul(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        let (x, y) = (to_elem(self, x), to_elem(self, y));
        B::elem_to_biguint(&B::elem_mul_impl(self, &x, &y))
    }

    fn neg(&self, x: impl FieldInput) -> BigUint {
        B::elem_to_biguint(&B::elem_neg_impl(self, &to_elem(self, x)))
    }

    fn div(&self, x: impl FieldInput, y: impl FieldInput) -> FieldResult<BigUint> {
        let y_inv: B::Elem = B::elem_inv_impl(self, &to_elem(self, y))?;
        Ok(B::elem_to_biguint(&B::elem_mul_impl(self, &to_elem(self, x), &y_inv)))
    }

    fn inv(&self, x: impl FieldInput) -> FieldResult<BigUint> {
        Ok(B::elem_to_biguint(&B::elem_inv_impl(self, &to_elem(self, x))?))
    }

    fn exp(&self, base: impl FieldInput, exponent: impl Into<BigInt>) -> FieldResult<BigUint> {
        let (sign, magnitude) = exponent.into().into_parts();
        let mut b: B::Elem = to_elem(self, base);
        if sign == Sign::Minus {
            b = B::elem_inv_impl(self, &b)?;
        }
        Ok(B::elem_to_biguint(&B::elem_pow_impl(self, &b, &magnitude)))
    }
}

impl<B> FieldRandom for Field<B>
where
    B: Backend,
{
    fn rand(&self) -> BigUint {
        self.rand_with(&mut rand::rng())
    }

    fn rand_with<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        sample_below(rng, self.modulus())
    }

    fn prng(&self, seed: &[u8]) -> BigUint {
        let mut source: Source = Source::from_seed_bytes(seed);
        source.seek_stream(0);
        source.next_below(self.modulus())
    }
}
