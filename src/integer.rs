use std::{fmt::Debug, hash::Hash};

use num_traits::{AsPrimitive, CheckedNeg, PrimInt, Signed};

/// Fixed-width signed integer usable as the representation of a [`Rational`](crate::Rational).
///
/// Implemented for every primitive signed integer (`i8` through `i128` and `isize`).
/// Unsigned and floating-point types do not satisfy it:
///
/// ```compile_fail
/// let _ = rational::Rational::<f64>::new(1.0, 2.0);
/// ```
///
/// ```compile_fail
/// let _ = rational::Rational::<u32>::new(1, 2);
/// ```
pub trait Integer:
    PrimInt
    + Signed
    + CheckedNeg
    + num_integer::Integer
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Hash
    + Debug
    + 'static
{
}

impl<T> Integer for T where
    T: PrimInt
        + Signed
        + CheckedNeg
        + num_integer::Integer
        + AsPrimitive<f32>
        + AsPrimitive<f64>
        + Hash
        + Debug
        + 'static
{
}
