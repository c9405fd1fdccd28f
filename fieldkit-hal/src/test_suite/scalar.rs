use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::{
    api::{FieldInfos, FieldRandom, FieldScalarOps, FiniteField, VectorAlloc},
    error::FieldError,
    layouts::{Backend, Field, Vector},
    reference::euclid::inv_mod,
    source::Source,
    test_suite::{edge_values, random_values},
};

pub fn test_field_axioms<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([1u8; 32]);

    let mut values: Vec<BigUint> = edge_values(p);
    values.extend(random_values(p, &mut source, 12));

    for a in values.iter() {
        for b in values.iter() {
            assert_eq!(field.add(a, b), (a + b) % p, "add({a}, {b})");
            assert_eq!(field.sub(a, b), (a + p - b) % p, "sub({a}, {b})");
            assert_eq!(field.mul(a, b), (a * b) % p, "mul({a}, {b})");
            assert_eq!(field.add(a, b), field.add(b, a));
            assert_eq!(field.mul(a, b), field.mul(b, a));
        }

        assert_eq!(field.add(a, field.zero()), *a);
        assert_eq!(field.mul(a, field.one()), *a);
        assert_eq!(field.add(a, field.neg(a)), BigUint::zero());
        assert_eq!(field.sub(a, a), BigUint::zero());

        if !a.is_zero() {
            let a_inv: BigUint = field.inv(a).unwrap();
            assert_eq!(field.mul(a, &a_inv), BigUint::one(), "a={a}");
            assert_eq!(Some(a_inv), inv_mod(a, p));
        }
    }

    let (a, b, c) = (&values[3], &values[7], &values[11]);
    assert_eq!(field.add(field.add(a, b), c), field.add(a, field.add(b, c)));
    assert_eq!(field.mul(field.mul(a, b), c), field.mul(a, field.mul(b, c)));
    assert_eq!(field.mul(a, field.add(b, c)), field.add(field.mul(a, b), field.mul(a, c)));
}

pub fn test_exp<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let mut source: Source = Source::new([2u8; 32]);

    assert_eq!(field.exp(0u64, 0).unwrap(), BigUint::one());
    assert_eq!(field.exp(0u64, 5).unwrap(), BigUint::zero());
    assert_eq!(field.exp(0u64, -1), Err(FieldError::DivisionByZero));

    for a in random_values(p, &mut source, 16) {
        assert_eq!(field.exp(&a, 0).unwrap(), BigUint::one());
        assert_eq!(field.exp(&a, 13).unwrap(), a.modpow(&BigUint::from(13u32), p));

        let big: BigUint = (BigUint::one() << 300) + 17u32;
        assert_eq!(field.exp(&a, big.clone()).unwrap(), a.modpow(&big, p));

        if !a.is_zero() {
            let a_inv: BigUint = field.inv(&a).unwrap();
            assert_eq!(field.exp(&a, -3).unwrap(), a_inv.modpow(&BigUint::from(3u32), p));
            assert_eq!(field.exp(&a, BigInt::from(-1)).unwrap(), a_inv);
            assert_eq!(field.exp(&a, p - 1u32).unwrap(), BigUint::one());
        }
    }
}

pub fn test_division_by_zero<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    assert_eq!(field.inv(0u64), Err(FieldError::DivisionByZero));
    assert_eq!(field.inv(p), Err(FieldError::DivisionByZero));
    assert_eq!(field.div(1u64, 0u64), Err(FieldError::DivisionByZero));
    assert_eq!(field.div(0u64, 1u64).unwrap(), BigUint::zero());

    let two_inv: BigUint = field.div(1u64, 2u64).unwrap();
    assert_eq!(field.mul(two_inv, 2u64), BigUint::one());
}

pub fn test_input_reduction<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let p_minus_one: BigUint = p - 1u32;

    assert_eq!(field.reduce(-1i64), p_minus_one);
    assert_eq!(field.reduce(p), BigUint::zero());
    assert_eq!(field.reduce(p + 5u32), BigUint::from(5u32) % p);
    assert_eq!(field.reduce(BigInt::from(-3) * BigInt::from(p.clone())), BigUint::zero());
    assert_eq!(field.add(p, 1u64), BigUint::one() % p);
    assert_eq!(field.sub(0u64, 1u64), p_minus_one);
    assert_eq!(field.mul(-1i32, -1i32), BigUint::one() % p);

    let v: Vector<B> = field.new_vector_from(&[-1i64, 0, 1]);
    assert_eq!(v.to_values(), vec![p_minus_one, BigUint::zero(), BigUint::one() % p]);
}

pub fn test_encoding<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();
    let size: usize = FieldInfos::element_size(field);
    assert_eq!(size as u64, p.bits().div_ceil(8));
    assert_eq!(field.characteristic(), *p);
    assert_eq!(field.extension_degree(), 1);

    let mut source: Source = Source::new([3u8; 32]);
    let mut values: Vec<BigUint> = edge_values(p);
    values.extend(random_values(p, &mut source, 8));

    let v: Vector<B> = field.new_vector_from(&values);
    let bytes: Vec<u8> = v.to_bytes();
    assert_eq!(bytes.len(), v.byte_len());
    assert_eq!(bytes.len(), values.len() * size);

    for (chunk, x) in bytes.chunks_exact(size).zip(values.iter()) {
        assert_eq!(BigUint::from_bytes_le(chunk), *x);
    }

    assert_eq!(field.new_vector_from_bytes(&bytes).unwrap(), v);
    assert_eq!(
        v.to_bytes_range(2, 3).unwrap(),
        bytes[2 * size..5 * size].to_vec()
    );
    assert!(matches!(
        v.to_bytes_range(values.len() - 1, 2),
        Err(FieldError::IndexOutOfRange { .. })
    ));

    // An all-ones encoding is at least p and decodes to its residue.
    let ones: Vec<u8> = vec![0xFF; size];
    let decoded: Vector<B> = field.new_vector_from_bytes(&ones).unwrap();
    assert_eq!(decoded.to_values(), vec![BigUint::from_bytes_le(&ones) % p]);

    let mut ragged: Vec<u8> = bytes.clone();
    ragged.push(0);
    assert!(matches!(
        field.new_vector_from_bytes(&ragged),
        Err(FieldError::DimensionMismatch(_))
    ));
}

pub fn test_random<B: Backend>(field: &Field<B>)
where
    Field<B>: FiniteField<B>,
{
    let p: &BigUint = field.modulus();

    for _ in 0..32 {
        assert!(field.rand() < *p);
    }

    let a: BigUint = field.prng(b"fieldkit");
    assert_eq!(a, field.prng(b"fieldkit"));
    assert!(a < *p);

    let v: Vector<B> = field.prng_vector(b"fieldkit", 8);
    assert_eq!(v.get(0).unwrap(), a);
    assert_eq!(v.to_values()[..4], field.prng_vector(b"fieldkit", 4).to_values()[..]);
    assert!(v.to_values().iter().all(|x| x < p));
    assert_ne!(v, field.prng_vector(b"fieldkjt", 8));
}
