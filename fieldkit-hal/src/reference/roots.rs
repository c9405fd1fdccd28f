use num_bigint::BigUint;
use num_traits::One;

use crate::error::{FieldError, FieldResult};

/// Candidates tried when searching for a quadratic non-residue. The smallest
/// non-residue of a prime is tiny in practice; exhausting the range means the
/// modulus is not prime.
pub const NONRESIDUE_SEARCH_LIMIT: u32 = 1 << 16;

/// Largest `s` such that `2^s` divides `p - 1`.
pub fn two_adicity(p: &BigUint) -> u32 {
    let p_minus_one: BigUint = p - 1u32;
    p_minus_one.trailing_zeros().unwrap_or(0) as u32
}

/// Generator of the subgroup of order `2^s` of `GF(p)^*`, where `s = two_adicity(p) > 0`.
///
/// Takes the smallest quadratic non-residue `c` (Euler's criterion:
/// `c^((p-1)/2) = -1`) and returns `c^((p-1)/2^s)`.
pub fn two_sylow_base(p: &BigUint, s: u32) -> FieldResult<BigUint> {
    debug_assert!(s > 0);
    let p_minus_one: BigUint = p - 1u32;
    let euler_exp: BigUint = &p_minus_one >> 1;
    let odd_part: BigUint = &p_minus_one >> s;

    for c in 2..NONRESIDUE_SEARCH_LIMIT {
        let c: BigUint = BigUint::from(c);
        if &c >= p {
            break;
        }
        if c.modpow(&euler_exp, p) == p_minus_one {
            return Ok(c.modpow(&odd_part, p));
        }
    }

    Err(FieldError::UnsupportedModulus(format!(
        "no quadratic non-residue below {NONRESIDUE_SEARCH_LIMIT}; {p} is not prime"
    )))
}

/// Validates a root-of-unity order and returns its base-2 logarithm.
pub fn check_order(order: u64, two_adicity: u32) -> FieldResult<u32> {
    if !order.is_power_of_two() {
        return Err(FieldError::InvalidOrder {
            order,
            reason: "order must be a power of two",
        });
    }
    let log_order: u32 = order.trailing_zeros();
    if log_order > two_adicity {
        return Err(FieldError::InvalidOrder {
            order,
            reason: "order does not divide p - 1",
        });
    }
    Ok(log_order)
}

/// Primitive root of unity of order `2^log_order`: the 2-Sylow generator squared
/// `two_adicity - log_order` times.
pub fn root_of_unity_ref(p: &BigUint, base: &BigUint, two_adicity: u32, log_order: u32) -> BigUint {
    debug_assert!(log_order <= two_adicity);
    if log_order == 0 {
        return BigUint::one();
    }
    let mut g: BigUint = base.clone();
    for _ in log_order..two_adicity {
        g = &g * &g % p;
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_adicity_of_small_primes() {
        assert_eq!(two_adicity(&BigUint::from(11u32)), 1);
        assert_eq!(two_adicity(&BigUint::from(97u32)), 5);
        assert_eq!(two_adicity(&BigUint::from(257u32)), 8);
        assert_eq!(two_adicity(&BigUint::from(0xFFFF_FFFF_0000_0001u64)), 32);
    }

    #[test]
    fn base_has_exact_order() {
        let p: BigUint = BigUint::from(257u32);
        let base: BigUint = two_sylow_base(&p, 8).unwrap();
        assert_eq!(base.modpow(&BigUint::from(256u32), &p), BigUint::one());
        assert_ne!(base.modpow(&BigUint::from(128u32), &p), BigUint::one());
    }

    #[test]
    fn composite_modulus_is_rejected() {
        // 225 = 9 * 25: c^112 is never -1 modulo 9.
        let p: BigUint = BigUint::from(225u32);
        assert!(matches!(
            two_sylow_base(&p, two_adicity(&p)),
            Err(FieldError::UnsupportedModulus(_))
        ));
    }

    #[test]
    fn order_validation() {
        assert_eq!(check_order(1, 3).unwrap(), 0);
        assert_eq!(check_order(8, 3).unwrap(), 3);
        assert!(matches!(check_order(0, 3), Err(FieldError::InvalidOrder { .. })));
        assert!(matches!(check_order(6, 3), Err(FieldError::InvalidOrder { .. })));
        assert!(matches!(check_order(16, 3), Err(FieldError::InvalidOrder { .. })));
    }
}
