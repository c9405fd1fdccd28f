use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use rand_core::{CryptoRng, RngCore};

use fieldkit_cpu_fixed::{PrimeFixed, limbs_for_bits};
use fieldkit_cpu_ref::PrimeRef;
use fieldkit_hal::{
    api::{FieldInfos, FieldInput, FieldNew, FieldRandom, FieldScalarOps, FiniteField, RootsOfUnity},
    config::{BackendKind, FieldConfig},
    error::{FieldError, FieldResult},
    layouts::{Backend, Field},
};

/// A prime field bound to the backend selected at construction.
#[derive(Debug)]
pub enum PrimeField {
    Reference(Field<PrimeRef>),
    Fixed64(Field<PrimeFixed<1>>),
    Fixed128(Field<PrimeFixed<2>>),
    Fixed192(Field<PrimeFixed<3>>),
    Fixed256(Field<PrimeFixed<4>>),
}

/// Generic code run against whichever backend a [`PrimeField`] holds.
///
/// ```
/// use fieldkit::{Backend, Field, FieldConfig, FieldVisitor, api::{FiniteField, VectorAlloc, VectorCombine}, create_field};
/// use num_bigint::BigUint;
///
/// struct Dot(Vec<u64>, Vec<u64>);
///
/// impl FieldVisitor for Dot {
///     type Output = BigUint;
///
///     fn visit<B: Backend>(self, field: &Field<B>) -> BigUint
///     where
///         Field<B>: FiniteField<B>,
///     {
///         let a = field.new_vector_from(&self.0);
///         let b = field.new_vector_from(&self.1);
///         field.combine_vectors(&a, &b).unwrap()
///     }
/// }
///
/// let field = create_field(&BigUint::from(97u32), &FieldConfig::default()).unwrap();
/// assert_eq!(field.visit(Dot(vec![1, 2, 3], vec![4, 5, 6])), BigUint::from(32u32));
/// ```
pub trait FieldVisitor {
    type Output;

    fn visit<B: Backend>(self, field: &Field<B>) -> Self::Output
    where
        Field<B>: FiniteField<B>;
}

macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            PrimeField::Reference($f) => $body,
            PrimeField::Fixed64($f) => $body,
            PrimeField::Fixed128($f) => $body,
            PrimeField::Fixed192($f) => $body,
            PrimeField::Fixed256($f) => $body,
        }
    };
}

/// Builds a field for `modulus` on the backend requested by `config`.
///
/// - [`BackendKind::Reference`]: always the reference backend.
/// - [`BackendKind::Optimized`]: the fixed-width backend with the fewest limbs
///   holding `modulus`; fails with [`FieldError::UnsupportedModulus`] for even or
///   wider-than-255-bit moduli.
/// - [`BackendKind::Auto`]: as `Optimized`, falling back to the reference backend
///   when the modulus is unsupported.
///
/// Composite moduli fail with [`FieldError::UnsupportedModulus`] on every backend.
pub fn create_field(modulus: &BigUint, config: &FieldConfig) -> FieldResult<PrimeField> {
    match config.backend {
        BackendKind::Reference => Ok(PrimeField::Reference(Field::new(modulus, config)?)),
        BackendKind::Optimized => create_fixed(modulus, config),
        BackendKind::Auto => match create_fixed(modulus, config) {
            Err(FieldError::UnsupportedModulus(reason)) => {
                tracing::info!(
                    bits = modulus.bits(),
                    %reason,
                    "fixed backend unavailable, falling back to {}",
                    PrimeRef::NAME
                );
                Ok(PrimeField::Reference(Field::new(modulus, config)?))
            }
            res => res,
        },
    }
}

fn create_fixed(modulus: &BigUint, config: &FieldConfig) -> FieldResult<PrimeField> {
    match limbs_for_bits(modulus.bits()) {
        Some(1) => Ok(PrimeField::Fixed64(Field::new(modulus, config)?)),
        Some(2) => Ok(PrimeField::Fixed128(Field::new(modulus, config)?)),
        Some(3) => Ok(PrimeField::Fixed192(Field::new(modulus, config)?)),
        Some(4) => Ok(PrimeField::Fixed256(Field::new(modulus, config)?)),
        _ => Err(FieldError::UnsupportedModulus(format!(
            "{}-bit modulus is wider than any fixed-width backend",
            modulus.bits()
        ))),
    }
}

impl PrimeField {
    /// Runs `visitor` on the underlying [`Field`].
    pub fn visit<V: FieldVisitor>(&self, visitor: V) -> V::Output {
        dispatch!(self, f => visitor.visit(f))
    }

    /// Name of the backend in use, as reported in logs.
    pub fn backend_name(&self) -> &'static str {
        match self {
            PrimeField::Reference(_) => PrimeRef::NAME,
            PrimeField::Fixed64(_) => PrimeFixed::<1>::NAME,
            PrimeField::Fixed128(_) => PrimeFixed::<2>::NAME,
            PrimeField::Fixed192(_) => PrimeFixed::<3>::NAME,
            PrimeField::Fixed256(_) => PrimeFixed::<4>::NAME,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, PrimeField::Reference(_))
    }

    pub fn modulus(&self) -> &BigUint {
        dispatch!(self, f => f.modulus())
    }

    pub fn bit_length(&self) -> u64 {
        dispatch!(self, f => f.bit_length())
    }

    pub fn two_adicity(&self) -> u32 {
        dispatch!(self, f => f.two_adicity())
    }

    pub fn config(&self) -> &FieldConfig {
        dispatch!(self, f => f.config())
    }

    /// See [`RootsOfUnity::get_root_of_unity`].
    pub fn get_root_of_unity(&self, order: u64) -> FieldResult<BigUint> {
        dispatch!(self, f => f.get_root_of_unity(order))
    }
}

impl Display for PrimeField {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, f => Display::fmt(f, fmt))
    }
}

impl FieldInfos for PrimeField {
    fn characteristic(&self) -> BigUint {
        dispatch!(self, f => f.characteristic())
    }

    fn element_size(&self) -> usize {
        dispatch!(self, f => FieldInfos::element_size(f))
    }

    fn zero(&self) -> BigUint {
        dispatch!(self, f => f.zero())
    }

    fn one(&self) -> BigUint {
        dispatch!(self, f => f.one())
    }
}

impl FieldScalarOps for PrimeField {
    fn reduce(&self, x: impl FieldInput) -> BigUint {
        dispatch!(self, f => f.reduce(x))
    }

    fn add(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        dispatch!(self, f => f.add(x, y))
    }

    fn sub(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        dispatch!(self, f => f.sub(x, y))
    }

    fn mul(&self, x: impl FieldInput, y: impl FieldInput) -> BigUint {
        dispatch!(self, f => f.mul(x, y))
    }

    fn neg(&self, x: impl FieldInput) -> BigUint {
        dispatch!(self, f => f.neg(x))
    }

    fn div(&self, x: impl FieldInput, y: impl FieldInput) -> FieldResult<BigUint> {
        dispatch!(self, f => f.div(x, y))
    }

    fn inv(&self, x: impl FieldInput) -> FieldResult<BigUint> {
        dispatch!(self, f => f.inv(x))
    }

    fn exp(&self, base: impl FieldInput, exponent: impl Into<BigInt>) -> FieldResult<BigUint> {
        dispatch!(self, f => f.exp(base, exponent))
    }
}

impl FieldRandom for PrimeField {
    fn rand(&self) -> BigUint {
        dispatch!(self, f => f.rand())
    }

    fn rand_with<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        dispatch!(self, f => f.rand_with(rng))
    }

    fn prng(&self, seed: &[u8]) -> BigUint {
        dispatch!(self, f => f.prng(seed))
    }
}
