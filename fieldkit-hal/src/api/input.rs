use num_bigint::{BigInt, BigUint};

use crate::reference::euclid::reduce_signed;

/// A value accepted wherever a field element is expected.
///
/// Inputs are reduced modulo `p` before any operation; negative inputs map to
/// their non-negative residue.
pub trait FieldInput {
    fn to_residue(&self, modulus: &BigUint) -> BigUint;
}

macro_rules! impl_field_input_unsigned {
    ($($t:ty),*) => {
        $(
            impl FieldInput for $t {
                #[inline]
                fn to_residue(&self, modulus: &BigUint) -> BigUint {
                    BigUint::from(*self) % modulus
                }
            }
        )*
    };
}

macro_rules! impl_field_input_signed {
    ($($t:ty),*) => {
        $(
            impl FieldInput for $t {
                #[inline]
                fn to_residue(&self, modulus: &BigUint) -> BigUint {
                    reduce_signed(&BigInt::from(*self), modulus)
                }
            }
        )*
    };
}

impl_field_input_unsigned!(u8, u16, u32, u64, u128, usize);
impl_field_input_signed!(i8, i16, i32, i64, i128, isize);

impl FieldInput for BigUint {
    #[inline]
    fn to_residue(&self, modulus: &BigUint) -> BigUint {
        self % modulus
    }
}

impl FieldInput for BigInt {
    #[inline]
    fn to_residue(&self, modulus: &BigUint) -> BigUint {
        reduce_signed(self, modulus)
    }
}

impl<T: FieldInput + ?Sized> FieldInput for &T {
    #[inline]
    fn to_residue(&self, modulus: &BigUint) -> BigUint {
        (**self).to_residue(modulus)
    }
}
