//! Primes used across the test suites.

use num_bigint::BigUint;
use num_traits::One;

/// 2^31 - 2^27 + 1, two-adicity 27.
pub fn baby_bear() -> BigUint {
    BigUint::from(2013265921u64)
}

/// 2^62 - 111 * 2^39 + 1, two-adicity 39.
pub fn f62() -> BigUint {
    BigUint::from(4611624995532046337u64)
}

/// 2^64 - 2^32 + 1, two-adicity 32.
pub fn goldilocks() -> BigUint {
    BigUint::from(0xFFFF_FFFF_0000_0001u64)
}

/// 2^128 - 45 * 2^40 + 1, two-adicity 40.
pub fn f128() -> BigUint {
    (BigUint::one() << 128) - (BigUint::from(45u32) << 40) + 1u32
}

/// Scalar field of BN254, two-adicity 28.
pub fn bn254_scalar() -> BigUint {
    BigUint::parse_bytes(
        b"30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
        16,
    )
    .expect("valid hex literal")
}

/// 2^255 - 19, two-adicity 2.
pub fn curve25519() -> BigUint {
    (BigUint::one() << 255) - 19u32
}

/// 2^256 - 2^32 - 977, two-adicity 1.
pub fn secp256k1() -> BigUint {
    (BigUint::one() << 256) - (BigUint::one() << 32) - 977u32
}
