//! Montgomery arithmetic over `[u64; L]` with `R = 2^(64 * L)`.
//!
//! Values in the Montgomery domain are written `Montgomery<L>`; they are plain
//! limb arrays holding `a * R mod q`. Multiplying a Montgomery value by a
//! canonical one ([`MontgomeryPrecomp::mul_external`]) yields the canonical
//! product, so a single [`MontgomeryPrecomp::prepare`] per operand pair is enough.

use num_bigint::BigUint;
use num_traits::One;

use crate::limbs::{self, adc, mac};

/// An element in the Montgomery domain.
pub type Montgomery<const L: usize> = [u64; L];

/// Precomputations for Montgomery arithmetic modulo an odd `q` of at most
/// `64 * L - 1` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPrecomp<const L: usize> {
    pub q: [u64; L],
    /// `-q^{-1} mod 2^64`.
    pub q_inv_neg: u64,
    /// `R^2 mod q`.
    pub r2: [u64; L],
    /// `R mod q`.
    pub one: Montgomery<L>,
    pub minus_one: Montgomery<L>,
}

impl<const L: usize> MontgomeryPrecomp<L> {
    /// Returns a new instance of [`MontgomeryPrecomp`].
    /// This method will fail if `q` is even or does not leave the top bit free.
    pub fn new(q: &BigUint) -> Self {
        assert!(q.bit(0), "invalid argument: gcd(q={q}, 2^64) != 1");
        assert!(q.bits() < 64 * L as u64, "invalid argument: q={q} has more than {} bits", 64 * L - 1);

        let q_limbs: [u64; L] = limbs::from_biguint(q);

        // q^(2^63 - 1) = q^{-1} mod 2^64
        let mut q_inv: u64 = 1;
        let mut q_pow: u64 = q_limbs[0];
        for _ in 0..63 {
            q_inv = q_inv.wrapping_mul(q_pow);
            q_pow = q_pow.wrapping_mul(q_pow);
        }

        let r: BigUint = BigUint::one() << (64 * L);
        let one: [u64; L] = limbs::from_biguint(&(&r % q));
        let r2: [u64; L] = limbs::from_biguint(&((&r * &r) % q));
        let (minus_one, _) = limbs::sub(&q_limbs, &one);

        Self {
            q: q_limbs,
            q_inv_neg: q_inv.wrapping_neg(),
            r2,
            one,
            minus_one,
        }
    }

    /// Returns `R mod q`, the Montgomery form of 1.
    #[inline(always)]
    pub fn one(&self) -> Montgomery<L> {
        self.one
    }

    /// Returns `(q - 1) * R mod q`.
    #[inline(always)]
    pub fn minus_one(&self) -> Montgomery<L> {
        self.minus_one
    }

    /// Returns `lhs * rhs * R^{-1} mod q` for `lhs, rhs < q` (CIOS).
    #[inline]
    pub fn mul(&self, lhs: &[u64; L], rhs: &[u64; L]) -> [u64; L] {
        let q: &[u64; L] = &self.q;
        let mut t: [u64; L] = [0u64; L];
        let mut t_hi: u64 = 0;

        for i in 0..L {
            let mut carry: u64 = 0;
            for j in 0..L {
                (t[j], carry) = mac(t[j], lhs[j], rhs[i], carry);
            }
            let (hi, top) = adc(t_hi, carry, 0);

            let m: u64 = t[0].wrapping_mul(self.q_inv_neg);
            let (_, mut carry) = mac(t[0], m, q[0], 0);
            for j in 1..L {
                (t[j - 1], carry) = mac(t[j], m, q[j], carry);
            }
            let (last, c) = adc(hi, carry, 0);
            t[L - 1] = last;
            t_hi = top + c;
        }

        if t_hi != 0 || limbs::geq(&t, q) {
            t = limbs::sub(&t, q).0;
        }
        t
    }

    /// Returns `lhs * R mod q` as a [`Montgomery`].
    #[inline(always)]
    pub fn prepare(&self, lhs: &[u64; L]) -> Montgomery<L> {
        self.mul(lhs, &self.r2)
    }

    /// Returns `lhs * R^{-1} mod q` as a canonical value.
    #[inline(always)]
    pub fn unprepare(&self, lhs: &Montgomery<L>) -> [u64; L] {
        self.mul(lhs, &limbs::one())
    }

    /// Returns `lhs * rhs mod q` given `lhs` in Montgomery form and `rhs` canonical.
    #[inline(always)]
    pub fn mul_external(&self, lhs: &Montgomery<L>, rhs: &[u64; L]) -> [u64; L] {
        self.mul(lhs, rhs)
    }

    /// Canonical product of two canonical values.
    #[inline(always)]
    pub fn mul_canonical(&self, lhs: &[u64; L], rhs: &[u64; L]) -> [u64; L] {
        self.mul_external(&self.prepare(lhs), rhs)
    }

    /// `lhs + rhs mod q`; valid in either domain.
    #[inline(always)]
    pub fn add(&self, lhs: &[u64; L], rhs: &[u64; L]) -> [u64; L] {
        let (sum, _) = limbs::add(lhs, rhs);
        if limbs::geq(&sum, &self.q) {
            limbs::sub(&sum, &self.q).0
        } else {
            sum
        }
    }

    /// `lhs - rhs mod q`; valid in either domain.
    #[inline(always)]
    pub fn sub(&self, lhs: &[u64; L], rhs: &[u64; L]) -> [u64; L] {
        let (diff, borrow) = limbs::sub(lhs, rhs);
        if borrow != 0 {
            limbs::add(&diff, &self.q).0
        } else {
            diff
        }
    }

    /// `-x mod q`; valid in either domain.
    #[inline(always)]
    pub fn neg(&self, x: &[u64; L]) -> [u64; L] {
        if limbs::is_zero(x) {
            *x
        } else {
            limbs::sub(&self.q, x).0
        }
    }

    /// Returns `x^e` in the Montgomery domain, `e` given as little-endian 64-bit words.
    pub fn pow(&self, x: &Montgomery<L>, e: &[u64]) -> Montgomery<L> {
        let mut res: Montgomery<L> = self.one;
        for word in e.iter().rev() {
            for bit in (0..64).rev() {
                res = self.mul(&res, &res);
                if (word >> bit) & 1 == 1 {
                    res = self.mul(&res, x);
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<const L: usize>(q: &BigUint, values: &[BigUint]) {
        let precomp: MontgomeryPrecomp<L> = MontgomeryPrecomp::new(q);
        let r: BigUint = BigUint::one() << (64 * L);
        assert_eq!(limbs::to_biguint(&precomp.one()), &r % q);
        assert_eq!(precomp.q[0].wrapping_mul(precomp.q_inv_neg), u64::MAX, "q * -q^-1 != -1");

        for a in values {
            let a_l: [u64; L] = limbs::from_biguint(a);
            let a_mont: Montgomery<L> = precomp.prepare(&a_l);
            assert_eq!(limbs::to_biguint(&a_mont), (a * &r) % q);
            assert_eq!(precomp.unprepare(&a_mont), a_l);

            for b in values {
                let b_l: [u64; L] = limbs::from_biguint(b);
                assert_eq!(limbs::to_biguint(&precomp.mul_external(&a_mont, &b_l)), (a * b) % q);
                assert_eq!(limbs::to_biguint(&precomp.add(&a_l, &b_l)), (a + b) % q);
                assert_eq!(limbs::to_biguint(&precomp.sub(&a_l, &b_l)), (a + q - b) % q);
            }

            assert_eq!(limbs::to_biguint(&precomp.neg(&a_l)), (q - a) % q);

            let e: BigUint = q - 2u32;
            let inv: [u64; L] = precomp.unprepare(&precomp.pow(&a_mont, &e.to_u64_digits()));
            assert_eq!(limbs::to_biguint(&inv), a.modpow(&e, q));
        }
    }

    fn values(q: &BigUint) -> Vec<BigUint> {
        let mut values: Vec<BigUint> = vec![
            BigUint::from(0u32),
            BigUint::from(1u32),
            BigUint::from(2u32),
            BigUint::from(0xdead_beefu64),
            q >> 1,
            q - 2u32,
            q - 1u32,
        ];
        values.retain(|x| x < q);
        values
    }

    #[test]
    fn montgomery_64() {
        let q: BigUint = BigUint::from(0x7fff_ffff_ffff_ffe7u64);
        check::<1>(&q, &values(&q));
        let q: BigUint = BigUint::from(2013265921u64);
        check::<1>(&q, &values(&q));
    }

    #[test]
    fn montgomery_128() {
        let q: BigUint = BigUint::from(0xFFFF_FFFF_0000_0001u64);
        check::<2>(&q, &values(&q));
        let q: BigUint = (BigUint::one() << 127) - 1u32;
        check::<2>(&q, &values(&q));
    }

    #[test]
    fn montgomery_256() {
        let q: BigUint = (BigUint::one() << 255) - 19u32;
        check::<4>(&q, &values(&q));
        check::<4>(&BigUint::from(97u32), &values(&BigUint::from(97u32)));
    }

    #[test]
    fn pow_zero_exponent() {
        let q: BigUint = BigUint::from(97u32);
        let precomp: MontgomeryPrecomp<1> = MontgomeryPrecomp::new(&q);
        let x: Montgomery<1> = precomp.prepare(&[5]);
        assert_eq!(precomp.pow(&x, &[]), precomp.one());
        assert_eq!(precomp.unprepare(&precomp.pow(&x, &[3])), [125 % 97]);
        assert_eq!(precomp.unprepare(&precomp.minus_one()), [96]);
    }

    #[test]
    #[should_panic]
    fn even_modulus_panics() {
        let _ = MontgomeryPrecomp::<1>::new(&BigUint::from(96u32));
    }
}
