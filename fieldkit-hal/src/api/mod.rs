mod field;
mod input;
mod matrix;
mod poly;
mod quartic;
mod roots;
mod scalar;
mod vector;

pub use field::*;
pub use input::*;
pub use matrix::*;
pub use poly::*;
pub use quartic::*;
pub use roots::*;
pub use scalar::*;
pub use vector::*;

use crate::layouts::Backend;

/// Every user-facing operation of a prime field.
///
/// Implemented for [crate::layouts::Field] over any backend that provides all
/// extension points; generic code can take `F: FiniteField<B>`.
pub trait FiniteField<B: Backend>:
    FieldInfos
    + FieldScalarOps
    + FieldRandom
    + VectorAlloc<B>
    + VectorArithmetic<B>
    + VectorCombine<B>
    + VectorReshape<B>
    + MatrixAlloc<B>
    + MatrixArithmetic<B>
    + MatrixProducts<B>
    + RootsOfUnity<B>
    + PolyArithmetic<B>
    + PolyEvaluate<B>
    + PolyInterpolate<B>
    + QuarticBatch<B>
{
}

impl<B: Backend, T> FiniteField<B> for T where
    T: FieldInfos
        + FieldScalarOps
        + FieldRandom
        + VectorAlloc<B>
        + VectorArithmetic<B>
        + VectorCombine<B>
        + VectorReshape<B>
        + MatrixAlloc<B>
        + MatrixArithmetic<B>
        + MatrixProducts<B>
        + RootsOfUnity<B>
        + PolyArithmetic<B>
        + PolyEvaluate<B>
        + PolyInterpolate<B>
        + QuarticBatch<B>
{
}
