use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::source::Source;

/// First twelve primes: trial divisors and fixed Miller-Rabin bases.
const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Moduli below `2^78` are decided exactly by [SMALL_PRIMES] as bases.
const DETERMINISTIC_BITS: u64 = 78;

/// Additional bases tried on wider moduli.
pub const MILLER_RABIN_ROUNDS: usize = 20;

/// Miller-Rabin test.
///
/// Exact below `2^78`. Wider candidates are also tested against
/// [MILLER_RABIN_ROUNDS] bases drawn from a [Source] keyed by the candidate
/// itself, so the verdict for a given `n` never changes between runs.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for q in SMALL_PRIMES {
        if n == &BigUint::from(q) {
            return true;
        }
        if (n % q).is_zero() {
            return false;
        }
    }

    let n_minus_one: BigUint = n - 1u32;
    let s: u64 = n_minus_one.trailing_zeros().unwrap_or(0);
    let d: BigUint = &n_minus_one >> s;

    let is_witness = |a: &BigUint| -> bool {
        let mut x: BigUint = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            return false;
        }
        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_one {
                return false;
            }
        }
        true
    };

    if SMALL_PRIMES.iter().any(|&a| is_witness(&BigUint::from(a))) {
        return false;
    }
    if n.bits() <= DETERMINISTIC_BITS {
        return true;
    }

    // Bases uniform in [2, n - 2].
    let span: BigUint = n - 3u32;
    let mut source: Source = Source::from_seed_bytes(&n.to_bytes_le());
    (0..MILLER_RABIN_ROUNDS).all(|_| !is_witness(&(source.next_below(&span) + 2u32)))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::One;

    use super::is_probable_prime;

    #[test]
    fn small_values() {
        let primes: Vec<u64> = (0..200u64).filter(|&n| is_probable_prime(&BigUint::from(n))).collect();
        let expected: Vec<u64> = (2..200u64).filter(|&n| (2..n).all(|d| n % d != 0)).collect();
        assert_eq!(primes, expected);
    }

    #[test]
    fn strong_pseudoprimes_are_rejected() {
        // Carmichael numbers and a strong pseudoprime to bases 2, 3, 5, 7.
        for n in [561u64, 1105, 1729, 3215031751, 101 * 103, (1 << 32) + 1] {
            assert!(!is_probable_prime(&BigUint::from(n)), "n={n}");
        }
    }

    #[test]
    fn wide_moduli() {
        let mersenne_521: BigUint = (BigUint::one() << 521) - 1u32;
        assert!(is_probable_prime(&mersenne_521));
        assert!(is_probable_prime(&((BigUint::one() << 255) - 19u32)));
        assert!(!is_probable_prime(&((BigUint::one() << 255) - 21u32)));
        let goldilocks: BigUint = BigUint::from(0xFFFF_FFFF_0000_0001u64);
        assert!(!is_probable_prime(&(&goldilocks * &goldilocks)));
    }
}
