//! # fieldkit-cpu-fixed
//!
//! Fixed-width backend for [`fieldkit_hal`]. Elements are `[u64; L]` little-endian
//! limbs in canonical form, stored in flat `Vec<[u64; L]>` buffers. Products use
//! word-level Montgomery reduction (CIOS) with one operand prepared into Montgomery
//! form, the FFT is iterative and bit-reversed, and batch inversion runs entirely in
//! the Montgomery domain.
//!
//! A modulus is accepted when it is odd, at least 3 and at most `64 * L - 1` bits
//! wide. Every result is bit-identical to `fieldkit-cpu-ref`.

mod fft;
mod field;
pub mod limbs;
pub mod montgomery;
mod scalar;
mod scratch;
mod vector;

#[cfg(test)]
mod tests;

pub use fft::FixedFftPlan;
pub use field::PrimeFixedHandle;

/// Fixed-width backend with `L` 64-bit limbs per element.
pub struct PrimeFixed<const L: usize> {}

/// Moduli up to 63 bits.
pub type PrimeFixed64 = PrimeFixed<1>;
/// Moduli up to 127 bits.
pub type PrimeFixed128 = PrimeFixed<2>;
/// Moduli up to 191 bits.
pub type PrimeFixed192 = PrimeFixed<3>;
/// Moduli up to 255 bits.
pub type PrimeFixed256 = PrimeFixed<4>;

/// Largest limb count any modulus is dispatched to.
pub const MAX_LIMBS: usize = 4;

/// Smallest limb count whose representation holds a modulus of `bits` bits,
/// or `None` past [`MAX_LIMBS`].
///
/// The top bit of the top limb is kept free so that sums of two canonical
/// elements never carry out.
pub fn limbs_for_bits(bits: u64) -> Option<usize> {
    let limbs: usize = (bits / 64 + 1) as usize;
    (limbs <= MAX_LIMBS).then_some(limbs)
}
