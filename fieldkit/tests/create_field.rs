use num_bigint::BigUint;
use num_traits::One;
use rand::{SeedableRng, rngs::StdRng};

use fieldkit::{
    Backend, BackendKind, Field, FieldConfig, FieldError, FieldVisitor, PrimeField, PrimeRef,
    api::{
        FieldInfos, FieldRandom, FieldScalarOps, FiniteField, PolyEvaluate, PolyInterpolate, RootsOfUnity, VectorAlloc,
    },
    create_field,
};

fn goldilocks() -> BigUint {
    BigUint::from(0xFFFF_FFFF_0000_0001u64)
}

fn bn254_scalar() -> BigUint {
    BigUint::parse_bytes(b"30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001", 16).unwrap()
}

fn secp256k1() -> BigUint {
    (BigUint::one() << 256) - (BigUint::one() << 32) - 977u32
}

#[test]
fn auto_picks_narrowest_fixed_backend() {
    let config: FieldConfig = FieldConfig::default();
    let cases: [(BigUint, &str); 4] = [
        (BigUint::from(2013265921u64), "cpu-fixed-64"),
        (goldilocks(), "cpu-fixed-128"),
        ((BigUint::one() << 128) - (BigUint::from(45u32) << 40) + 1u32, "cpu-fixed-192"),
        (bn254_scalar(), "cpu-fixed-256"),
    ];
    for (p, name) in cases {
        let field: PrimeField = create_field(&p, &config).unwrap();
        assert_eq!(field.backend_name(), name);
        assert_eq!(field.modulus(), &p);
        assert!(!field.is_reference());
    }
}

#[test]
fn auto_falls_back_to_reference() {
    let config: FieldConfig = FieldConfig::default();

    let field: PrimeField = create_field(&secp256k1(), &config).unwrap();
    assert!(field.is_reference());
    assert_eq!(field.backend_name(), PrimeRef::NAME);
    assert_eq!(field.element_size(), 32);
    assert_eq!(field.two_adicity(), 1);

    // p = 2 is prime but even.
    let field: PrimeField = create_field(&BigUint::from(2u32), &config).unwrap();
    assert!(field.is_reference());
    assert_eq!(field.add(1u32, 1u32), BigUint::from(0u32));
    assert_eq!(field.inv(1u32).unwrap(), BigUint::from(1u32));
}

#[test]
fn optimized_rejects_unsupported_moduli() {
    let config: FieldConfig = FieldConfig::optimized();
    for p in [secp256k1(), BigUint::from(2u32), BigUint::from(1u32)] {
        assert!(
            matches!(create_field(&p, &config), Err(FieldError::UnsupportedModulus(_))),
            "p={p}"
        );
    }
}

#[test]
fn composite_moduli_are_rejected_by_every_backend() {
    let composites: [BigUint; 4] = [
        BigUint::from(15u32),
        BigUint::from(561u32),
        goldilocks() * goldilocks(),
        (BigUint::one() << 255) - 21u32,
    ];
    let configs: [FieldConfig; 3] = [FieldConfig::default(), FieldConfig::optimized(), FieldConfig::reference()];
    for p in composites.iter() {
        for config in configs.iter() {
            assert!(
                matches!(create_field(p, config), Err(FieldError::UnsupportedModulus(_))),
                "p={p} backend={:?}",
                config.backend
            );
        }
    }
}

#[test]
fn reference_is_honoured() {
    let config: FieldConfig = FieldConfig::default().with_backend(BackendKind::Reference);
    let field: PrimeField = create_field(&goldilocks(), &config).unwrap();
    assert!(matches!(field, PrimeField::Reference(_)));
    assert_eq!(field.to_string(), format!("GF({}) [cpu-ref]", goldilocks()));
}

#[test]
fn invalid_config() {
    for bytes in [1024usize, (4usize << 30) + 1] {
        let config: FieldConfig = FieldConfig::default().with_initial_memory(bytes);
        assert!(matches!(
            create_field(&goldilocks(), &config),
            Err(FieldError::InvalidConfig(_))
        ));
    }
}

#[test]
fn small_field_scalar_ops() {
    let field: PrimeField = create_field(&BigUint::from(11u32), &FieldConfig::default()).unwrap();
    assert_eq!(field.add(5u32, 6u32), BigUint::from(0u32));
    assert_eq!(field.sub(5u32, 6u32), BigUint::from(10u32));
    assert_eq!(field.mul(5u32, 6u32), BigUint::from(8u32));
    assert_eq!(field.div(1u32, 2u32).unwrap(), BigUint::from(6u32));
    assert_eq!(field.exp(2u32, -1).unwrap(), BigUint::from(6u32));
    assert_eq!(field.inv(5u32).unwrap(), BigUint::from(9u32));
    assert_eq!(field.div(1u32, 0u32), Err(FieldError::DivisionByZero));
    assert_eq!(field.reduce(-3i32), BigUint::from(8u32));
    assert_eq!(field.neg(3u32), BigUint::from(8u32));
    assert_eq!(field.characteristic(), BigUint::from(11u32));
    assert_eq!((field.zero(), field.one()), (BigUint::from(0u32), BigUint::from(1u32)));
    assert_eq!(field.get_root_of_unity(2).unwrap(), BigUint::from(10u32));
}

#[test]
fn random_elements_are_backend_independent() {
    let p: BigUint = bn254_scalar();
    let fixed: PrimeField = create_field(&p, &FieldConfig::optimized()).unwrap();
    let reference: PrimeField = create_field(&p, &FieldConfig::reference()).unwrap();

    assert_eq!(fixed.prng(b"seed"), reference.prng(b"seed"));

    let mut rng_a: StdRng = StdRng::seed_from_u64(7);
    let mut rng_b: StdRng = StdRng::seed_from_u64(7);
    for _ in 0..16 {
        let x: BigUint = fixed.rand_with(&mut rng_a);
        assert!(x < p);
        assert_eq!(x, reference.rand_with(&mut rng_b));
    }
    assert!(fixed.rand() < p);
}

/// FFT round trip of `len` pseudo-random coefficients over a domain of size `n`.
struct FftRoundTrip {
    n: usize,
    len: usize,
}

impl FieldVisitor for FftRoundTrip {
    type Output = (Vec<BigUint>, Vec<u8>);

    fn visit<B: Backend>(self, field: &Field<B>) -> Self::Output
    where
        Field<B>: FiniteField<B>,
    {
        let g: BigUint = field.get_root_of_unity(self.n as u64).unwrap();
        let roots = field.get_power_series(g, self.n);
        let poly = field.prng_vector(b"visitor", self.len);
        let evals = field.eval_poly_at_roots(&poly, &roots).unwrap();
        let back = field.interpolate_roots(&roots, &evals).unwrap();
        assert_eq!(back.to_values()[..self.len], poly.to_values()[..]);
        (evals.to_values(), evals.to_bytes())
    }
}

#[test]
fn visitor_results_agree_across_backends() {
    let p: BigUint = goldilocks();
    let fixed: PrimeField = create_field(&p, &FieldConfig::default()).unwrap();
    let reference: PrimeField = create_field(&p, &FieldConfig::reference()).unwrap();
    assert!(matches!(fixed, PrimeField::Fixed128(_)));
    assert_eq!(
        fixed.visit(FftRoundTrip { n: 64, len: 50 }),
        reference.visit(FftRoundTrip { n: 64, len: 50 })
    );
}
