use num_bigint::BigUint;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;
use sha2::{Digest, Sha256};

/// Domain tag hashed in front of caller seeds.
pub const PRNG_DOMAIN: &[u8] = b"fieldkit.prng.v1";

/// Deterministic ChaCha8 stream.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Keys the stream with `SHA-256(PRNG_DOMAIN || seed)`, so seeds of any length are accepted.
    pub fn from_seed_bytes(seed: &[u8]) -> Source {
        let mut hasher: Sha256 = Sha256::new();
        hasher.update(PRNG_DOMAIN);
        hasher.update(seed);
        let mut key: [u8; 32] = [0u8; 32];
        key.copy_from_slice(&hasher.finalize());
        Source::new(key)
    }

    /// Moves to the start of ChaCha stream `stream`; distinct streams of one key are independent.
    pub fn seek_stream(&mut self, stream: u64) {
        self.source.set_stream(stream);
        self.source.set_word_pos(0);
    }

    /// Uniform value in `[0, modulus)`.
    pub fn next_below(&mut self, modulus: &BigUint) -> BigUint {
        sample_below(self, modulus)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

/// Rejection sampling: draws `ceil(bits/8)` little-endian bytes, masks the top byte
/// down to `bits(modulus)` bits and redraws until the value is below `modulus`.
/// At most half of the draws are rejected.
pub fn sample_below<R: RngCore + ?Sized>(rng: &mut R, modulus: &BigUint) -> BigUint {
    let bits: u64 = modulus.bits();
    debug_assert!(bits >= 2, "modulus must be at least 2");
    let len: usize = bits.div_ceil(8) as usize;
    let mask: u8 = 0xFF >> (len as u64 * 8 - bits);

    let mut buf: Vec<u8> = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        buf[len - 1] &= mask;
        let x: BigUint = BigUint::from_bytes_le(&buf);
        if &x < modulus {
            return x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_are_pure_in_seed_and_index() {
        let p: BigUint = BigUint::from(0xFFFF_FFFF_0000_0001u64);
        let draw = |seed: &[u8], stream: u64| -> BigUint {
            let mut source: Source = Source::from_seed_bytes(seed);
            source.seek_stream(stream);
            source.next_below(&p)
        };

        let mut source: Source = Source::from_seed_bytes(b"seed");
        source.seek_stream(5);
        source.next_below(&p);
        source.seek_stream(3);
        assert_eq!(source.next_below(&p), draw(b"seed", 3));

        assert_ne!(draw(b"seed", 3), draw(b"seed", 4));
        assert_ne!(draw(b"seed", 3), draw(b"other", 3));
    }

    #[test]
    fn samples_stay_below_modulus() {
        let mut source: Source = Source::new([7u8; 32]);
        for p in [3u64, 11, 257, 65537, 0xFFFF_FFFF_0000_0001] {
            let p: BigUint = BigUint::from(p);
            for _ in 0..200 {
                assert!(source.next_below(&p) < p);
            }
        }
    }
}
