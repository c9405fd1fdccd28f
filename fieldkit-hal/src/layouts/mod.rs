mod field;
mod matrix;
mod vector;

pub use field::*;
pub use matrix::*;
pub use vector::*;

use std::fmt::Debug;

use num_bigint::BigUint;

/// A concrete representation of prime-field elements.
///
/// Backends choose how an element is stored ([`Backend::Elem`]) and which
/// precomputed constants a [`Field`] carries ([`Backend::Handle`]). Everything
/// observable (values, bytes) must be identical across backends.
pub trait Backend: Sized + Send + Sync + 'static {
    type Elem: Clone + Debug + PartialEq + Eq + Send + Sync;
    type Handle: Send + Sync;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Canonical value of `a` (always in `[0, p)`).
    fn elem_to_biguint(a: &Self::Elem) -> BigUint;

    /// Writes the little-endian encoding of `a` into `out`, zero-padding up to `out.len()`.
    fn elem_write_le(a: &Self::Elem, out: &mut [u8]) {
        let bytes: Vec<u8> = Self::elem_to_biguint(a).to_bytes_le();
        debug_assert!(bytes.len() <= out.len(), "{} bytes > {}", bytes.len(), out.len());
        out.fill(0);
        out[..bytes.len()].copy_from_slice(&bytes);
    }
}
