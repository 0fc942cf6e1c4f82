use std::{error, fmt};

/// Reasons a [`Rational`](crate::Rational) cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RationalError {
    /// The denominator was zero.
    ZeroDenominator,
    /// A normalized component does not fit in the integer representation.
    Overflow,
}

impl error::Error for RationalError {}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RationalError::ZeroDenominator => write!(f, "denominator == 0"),
            RationalError::Overflow => {
                write!(f, "rational component overflows its integer representation")
            }
        }
    }
}
