//! Rational numbers over fixed-width signed integers, always kept in lowest terms.
//!
//! ```
//! use rational::{q, Rational32};
//!
//! let a = Rational32::new(1, 2) + Rational32::new(1, 3);
//! assert_eq!(a.into_raw(), (5, 6));
//! assert!(Rational32::new(1, 2) == Rational32::new(2, 4));
//! assert_eq!(q!(3) / q!(4), q!(3, 4));
//! ```
#![warn(clippy::pedantic)]
#![expect(clippy::must_use_candidate)]

mod convert;
mod error;
mod integer;
mod rational;

pub use crate::error::RationalError;
pub use crate::integer::Integer;
pub use crate::rational::Rational;

pub type Rational8 = Rational<i8>;
pub type Rational16 = Rational<i16>;
pub type Rational32 = Rational<i32>;
pub type Rational64 = Rational<i64>;
/// The widest representation, used by [`q!`].
pub type Rational128 = Rational<i128>;

/// Literal shorthand for a [`Rational128`].
///
/// `q!(n)` is the integer `n`, `q!(n, d)` the normal form of `n / d`.
///
/// ```
/// use rational::q;
///
/// assert_eq!(q!(6, 8).into_raw(), (3, 4));
/// assert!(q!(1, 2) < q!(1));
/// ```
#[macro_export]
macro_rules! q {
    ($n:expr) => {
        $crate::Rational128::from_integer($n)
    };
    ($n:expr, $d:expr) => {
        $crate::Rational128::new($n, $d)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Rational, Rational128};

    #[test]
    fn test_literal_shorthand() {
        let five: Rational128 = q!(5);
        assert_eq!(five.into_raw(), (5, 1));
        assert_eq!(q!(0), Rational::default());
        assert_eq!(q!(10, -4).into_raw(), (-5, 2));
        assert_eq!(q!(1) + q!(1, 2), q!(3, 2));
    }
}
