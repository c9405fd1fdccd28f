//! Word-level helpers on little-endian `[u64; L]` integers.

use byteorder::{ByteOrder, LittleEndian};
use num_bigint::BigUint;

/// Returns `a + b + carry` as `(low, carry)`.
#[inline(always)]
pub fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t: u128 = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Returns `a - b - borrow` as `(low, borrow)`, `borrow` being 0 or 1.
#[inline(always)]
pub fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t: u128 = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// Returns `acc + a * b + carry` as `(low, high)`. Never overflows 128 bits.
#[inline(always)]
pub fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t: u128 = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// `a + b` with the final carry.
#[inline(always)]
pub fn add<const L: usize>(a: &[u64; L], b: &[u64; L]) -> ([u64; L], u64) {
    let mut res: [u64; L] = [0u64; L];
    let mut carry: u64 = 0;
    for i in 0..L {
        (res[i], carry) = adc(a[i], b[i], carry);
    }
    (res, carry)
}

/// `a - b` with the final borrow.
#[inline(always)]
pub fn sub<const L: usize>(a: &[u64; L], b: &[u64; L]) -> ([u64; L], u64) {
    let mut res: [u64; L] = [0u64; L];
    let mut borrow: u64 = 0;
    for i in 0..L {
        (res[i], borrow) = sbb(a[i], b[i], borrow);
    }
    (res, borrow)
}

/// `a >= b`.
#[inline(always)]
pub fn geq<const L: usize>(a: &[u64; L], b: &[u64; L]) -> bool {
    for i in (0..L).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

#[inline(always)]
pub fn is_zero<const L: usize>(a: &[u64; L]) -> bool {
    a.iter().all(|&x| x == 0)
}

/// `[1, 0, ..., 0]`.
#[inline(always)]
pub fn one<const L: usize>() -> [u64; L] {
    let mut res: [u64; L] = [0u64; L];
    res[0] = 1;
    res
}

/// Panics if `x` does not fit in `L` limbs.
pub fn from_biguint<const L: usize>(x: &BigUint) -> [u64; L] {
    let digits: Vec<u64> = x.to_u64_digits();
    assert!(digits.len() <= L, "{} limbs > {L}", digits.len());
    let mut res: [u64; L] = [0u64; L];
    res[..digits.len()].copy_from_slice(&digits);
    res
}

pub fn to_biguint<const L: usize>(a: &[u64; L]) -> BigUint {
    let mut bytes: Vec<u8> = vec![0u8; 8 * L];
    LittleEndian::write_u64_into(a, &mut bytes);
    BigUint::from_bytes_le(&bytes)
}

/// Writes the little-endian bytes of `a` into `out`, truncating or zero-padding
/// to `out.len()`. Truncated bytes must be zero.
#[inline]
pub fn write_le<const L: usize>(a: &[u64; L], out: &mut [u8]) {
    for (k, byte) in out.iter_mut().enumerate() {
        *byte = if k < 8 * L { (a[k >> 3] >> ((k & 7) << 3)) as u8 } else { 0 };
    }
    debug_assert!((out.len()..8 * L).all(|k| (a[k >> 3] >> ((k & 7) << 3)) as u8 == 0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_and_borrows() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
        assert_eq!(mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX), (u64::MAX, u64::MAX));

        let a: [u64; 2] = [u64::MAX, 0];
        let (s, c) = add(&a, &[1, 0]);
        assert_eq!((s, c), ([0, 1], 0));
        let (d, b) = sub(&[0, 1], &[1, 0]);
        assert_eq!((d, b), ([u64::MAX, 0], 0));
        let (_, b) = sub(&[0, 0], &[1, 0]);
        assert_eq!(b, 1);
    }

    #[test]
    fn comparison() {
        assert!(geq(&[0, 2], &[u64::MAX, 1]));
        assert!(!geq(&[u64::MAX, 1], &[0, 2]));
        assert!(geq(&[7, 7, 7], &[7, 7, 7]));
        assert!(is_zero(&[0u64; 4]));
        assert!(!is_zero(&one::<4>()));
    }

    #[test]
    fn biguint_conversion() {
        let x: BigUint = (BigUint::from(0x0123_4567_89ab_cdefu64) << 64) + 42u32;
        let limbs: [u64; 3] = from_biguint(&x);
        assert_eq!(limbs, [42, 0x0123_4567_89ab_cdef, 0]);
        assert_eq!(to_biguint(&limbs), x);
        assert_eq!(to_biguint(&[0u64; 2]), BigUint::from(0u32));
    }

    #[test]
    fn little_endian_bytes() {
        let a: [u64; 2] = [0x0807_0605_0403_0201, 0x0a09];
        let mut out: [u8; 10] = [0xffu8; 10];
        write_le(&a, &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        let mut wide: [u8; 20] = [0xffu8; 20];
        write_le(&a, &mut wide);
        assert_eq!(&wide[..10], &out);
        assert!(wide[10..].iter().all(|&b| b == 0));
        assert_eq!(BigUint::from_bytes_le(&out), to_biguint(&a));
    }
}
