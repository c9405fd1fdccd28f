use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Inverse of `a` modulo `p` by the extended Euclidean algorithm.
///
/// Returns `None` when `a ≡ 0 (mod p)` or, for composite `p`, when `a` shares a factor with `p`.
pub fn inv_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a: BigUint = a % p;
    if a.is_zero() {
        return None;
    }

    let p_signed: BigInt = BigInt::from_biguint(Sign::Plus, p.clone());
    let mut r0: BigInt = p_signed.clone();
    let mut r1: BigInt = BigInt::from_biguint(Sign::Plus, a);
    let mut t0: BigInt = BigInt::zero();
    let mut t1: BigInt = BigInt::one();

    while !r1.is_zero() {
        let q: BigInt = &r0 / &r1;
        let r2: BigInt = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let t2: BigInt = &t0 - &q * &t1;
        t0 = std::mem::replace(&mut t1, t2);
    }

    if !r0.is_one() {
        return None;
    }

    t0.mod_floor(&p_signed).to_biguint()
}

/// Non-negative residue of a signed integer.
pub fn reduce_signed(x: &BigInt, p: &BigUint) -> BigUint {
    let p_signed: BigInt = BigInt::from_biguint(Sign::Plus, p.clone());
    match x.mod_floor(&p_signed).to_biguint() {
        Some(r) => r,
        None => unreachable!("mod_floor by a positive modulus is non-negative"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverses_mod_11() {
        let p: BigUint = BigUint::from(11u32);
        for a in 1u32..11 {
            let inv: BigUint = inv_mod(&BigUint::from(a), &p).unwrap();
            assert_eq!((inv * a) % &p, BigUint::one(), "a={a}");
        }
        assert_eq!(inv_mod(&BigUint::from(5u32), &p), Some(BigUint::from(9u32)));
        assert_eq!(inv_mod(&BigUint::from(22u32), &p), None);
    }

    #[test]
    fn signed_reduction() {
        let p: BigUint = BigUint::from(101u32);
        assert_eq!(reduce_signed(&BigInt::from(-2), &p), BigUint::from(99u32));
        assert_eq!(reduce_signed(&BigInt::from(-202), &p), BigUint::zero());
        assert_eq!(reduce_signed(&BigInt::from(205), &p), BigUint::from(3u32));
    }
}
