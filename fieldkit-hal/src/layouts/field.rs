use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
    sync::Arc,
};

use num_bigint::BigUint;
use num_traits::One;

use crate::{
    config::FieldConfig,
    error::{FieldError, FieldResult},
    layouts::{Backend, Matrix, Vector},
    reference::{
        primality::is_probable_prime,
        roots::{two_adicity, two_sylow_base},
    },
};

/// A prime field `GF(p)` bound to a backend.
///
/// Immutable after construction. Holds the modulus, the encoded element width
/// (`ceil(bits(p) / 8)` bytes) and the generator of the 2-Sylow subgroup of the
/// multiplicative group, from which every power-of-two root of unity is derived.
///
/// Every [Vector] and [Matrix] carries the modulus of the field that built it;
/// operations reject operands of another field with [FieldError::FieldMismatch].
pub struct Field<B: Backend> {
    handle: B::Handle,
    modulus: Arc<BigUint>,
    bits: u64,
    element_size: usize,
    two_adicity: u32,
    two_sylow_base: BigUint,
    config: FieldConfig,
    _marker: PhantomData<B>,
}

impl<B: Backend> Field<B> {
    /// Wraps a backend handle. Called by the backends' constructors once they
    /// have validated the modulus for their representation.
    ///
    /// Fails with [FieldError::UnsupportedModulus] unless `modulus` is prime.
    pub fn from_handle(modulus: BigUint, handle: B::Handle, config: FieldConfig) -> FieldResult<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(FieldError::UnsupportedModulus(format!("modulus must be at least 2, got {modulus}")));
        }
        if !is_probable_prime(&modulus) {
            return Err(FieldError::UnsupportedModulus(format!("{modulus} is not prime")));
        }

        let bits: u64 = modulus.bits();
        let element_size: usize = bits.div_ceil(8) as usize;
        let two_adicity: u32 = two_adicity(&modulus);
        let two_sylow_base: BigUint = if two_adicity == 0 {
            BigUint::one()
        } else {
            two_sylow_base(&modulus, two_adicity)?
        };

        tracing::debug!(
            backend = B::NAME,
            bits,
            element_size,
            two_adicity,
            "constructed prime field"
        );

        Ok(Self {
            handle,
            modulus: Arc::new(modulus),
            bits,
            element_size,
            two_adicity,
            two_sylow_base,
            config,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn handle(&self) -> &B::Handle {
        &self.handle
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub(crate) fn shared_modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    #[inline]
    pub fn bit_length(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Largest `s` such that `2^s` divides `p - 1`.
    #[inline]
    pub fn two_adicity(&self) -> u32 {
        self.two_adicity
    }

    /// Generator of the subgroup of order `2^two_adicity`, as a canonical value.
    #[inline]
    pub fn two_sylow_base(&self) -> &BigUint {
        &self.two_sylow_base
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Reads a little-endian byte string and reduces it modulo `p`.
    pub fn decode_le(&self, bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_le(bytes) % &*self.modulus
    }

    /// True if `v` was built by a field of the same modulus.
    pub fn owns_vector(&self, v: &Vector<B>) -> bool {
        self.modulus == *v.shared_modulus()
    }

    /// True if `m` was built by a field of the same modulus.
    pub fn owns_matrix(&self, m: &Matrix<B>) -> bool {
        self.modulus == *m.shared_modulus()
    }

    pub(crate) fn check_vector(&self, v: &Vector<B>) -> FieldResult<()> {
        if self.owns_vector(v) {
            Ok(())
        } else {
            Err(self.mismatch(v.modulus()))
        }
    }

    pub(crate) fn check_matrix(&self, m: &Matrix<B>) -> FieldResult<()> {
        if self.owns_matrix(m) {
            Ok(())
        } else {
            Err(self.mismatch(m.modulus()))
        }
    }

    fn mismatch(&self, found: &BigUint) -> FieldError {
        FieldError::FieldMismatch {
            expected: (*self.modulus).clone(),
            found: found.clone(),
        }
    }
}

impl<B: Backend> Debug for Field<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("backend", &B::NAME)
            .field("modulus", &self.modulus)
            .field("element_size", &self.element_size)
            .field("two_adicity", &self.two_adicity)
            .finish()
    }
}

impl<B: Backend> Display for Field<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF({}) [{}]", self.modulus, B::NAME)
    }
}
