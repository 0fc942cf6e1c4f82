use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};

use crate::{error::RationalError, integer::Integer};

/// A rational number `numer / denom` over the fixed-width signed integer `I`.
///
/// Every value is kept in normal form: the denominator is positive, numerator and
/// denominator are coprime, and zero is stored as `0 / 1`. Two values that denote the
/// same number therefore have identical fields, which is what `==` and `Hash` compare.
///
/// All intermediate products are computed in `I`. Overflow behaves as it does for `I`:
/// it panics when overflow checks are enabled and wraps otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<I: Integer> {
    numer: I,
    denom: I,
}

impl<I: Integer> Rational<I> {
    /// Creates the normal form of `numer / denom`.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero. Use [`Rational::try_new`] to get an error instead.
    #[inline]
    pub fn new(numer: I, denom: I) -> Self {
        assert!(!denom.is_zero(), "denominator == 0");
        if numer.is_zero() {
            return Self::zero();
        }
        // gcd(MIN, MIN) is not representable
        if numer == denom {
            return Self::one();
        }
        let gcd = numer.gcd(&denom);
        let mut result = Rational {
            numer: numer / gcd,
            denom: denom / gcd,
        };
        // the sign moves onto the numerator
        if result.denom.is_negative() {
            result.numer = -result.numer;
            result.denom = -result.denom;
        }
        result.check_invariants();
        result
    }

    /// Creates the normal form of `numer / denom`, reporting a zero denominator or a
    /// component that does not fit in `I` (such as `I::MIN / -1`).
    pub fn try_new(numer: I, denom: I) -> Result<Self, RationalError> {
        if denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        if numer.is_zero() {
            return Ok(Self::zero());
        }
        // gcd(MIN, MIN) is not representable
        if numer == denom {
            return Ok(Self::one());
        }
        let gcd = numer.gcd(&denom);
        let mut result = Rational {
            numer: numer / gcd,
            denom: denom / gcd,
        };
        if result.denom.is_negative() {
            result.numer = result.numer.checked_neg().ok_or(RationalError::Overflow)?;
            result.denom = result.denom.checked_neg().ok_or(RationalError::Overflow)?;
        }
        result.check_invariants();
        Ok(result)
    }

    /// Creates the integer `n` as `n / 1`.
    #[inline]
    pub fn from_integer(n: I) -> Self {
        Rational {
            numer: n,
            denom: I::one(),
        }
    }

    #[inline]
    pub fn numer(self) -> I {
        self.numer
    }

    #[inline]
    pub fn denom(self) -> I {
        self.denom
    }

    /// Returns `(numer, denom)`.
    #[inline]
    pub fn into_raw(self) -> (I, I) {
        (self.numer, self.denom)
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.numer.abs(), self.denom)
    }

    /// Returns `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.denom, self.numer)
    }

    #[inline]
    pub fn try_recip(self) -> Result<Self, RationalError> {
        Self::try_new(self.denom, self.numer)
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(
            self.denom.is_positive(),
            "non-positive denominator: {self:?}"
        );
        debug_assert!(
            self.numer.gcd(&self.denom).is_one(),
            "not in lowest terms: {self:?}"
        );
    }
}

impl<I: Integer> Default for Rational<I> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: Integer> From<I> for Rational<I> {
    #[inline]
    fn from(n: I) -> Self {
        Self::from_integer(n)
    }
}

impl<I: Integer> From<(I, I)> for Rational<I> {
    #[inline]
    fn from((numer, denom): (I, I)) -> Self {
        Self::new(numer, denom)
    }
}

impl<I: Integer> Zero for Rational<I> {
    #[inline]
    fn zero() -> Self {
        Self::from_integer(I::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<I: Integer> One for Rational<I> {
    #[inline]
    fn one() -> Self {
        Self::from_integer(I::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<I: Integer> Neg for Rational<I> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.numer, self.denom)
    }
}

impl<I: Integer> Add for Rational<I> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.numer * rhs.denom + rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl<I: Integer> AddAssign for Rational<I> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<I: Integer> Sub for Rational<I> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.numer * rhs.denom - rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl<I: Integer> SubAssign for Rational<I> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<I: Integer> Mul for Rational<I> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl<I: Integer> MulAssign for Rational<I> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<I: Integer> Div for Rational<I> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

impl<I: Integer> DivAssign for Rational<I> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<I: Integer> CheckedAdd for Rational<I> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(&v.denom)?
            .checked_add(&v.numer.checked_mul(&self.denom)?)?;
        let denom = self.denom.checked_mul(&v.denom)?;
        Self::try_new(numer, denom).ok()
    }
}

impl<I: Integer> CheckedSub for Rational<I> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(&v.denom)?
            .checked_sub(&v.numer.checked_mul(&self.denom)?)?;
        let denom = self.denom.checked_mul(&v.denom)?;
        Self::try_new(numer, denom).ok()
    }
}

impl<I: Integer> CheckedMul for Rational<I> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        let numer = self.numer.checked_mul(&v.numer)?;
        let denom = self.denom.checked_mul(&v.denom)?;
        Self::try_new(numer, denom).ok()
    }
}

impl<I: Integer> CheckedDiv for Rational<I> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        let numer = self.numer.checked_mul(&v.denom)?;
        let denom = self.denom.checked_mul(&v.numer)?;
        Self::try_new(numer, denom).ok()
    }
}

impl<I: Integer> Sum for Rational<I> {
    fn sum<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, I: Integer> Sum<&'a Rational<I>> for Rational<I> {
    fn sum<It: Iterator<Item = &'a Self>>(iter: It) -> Self {
        iter.copied().sum()
    }
}

impl<I: Integer> Product for Rational<I> {
    fn product<It: Iterator<Item = Self>>(iter: It) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, I: Integer> Product<&'a Rational<I>> for Rational<I> {
    fn product<It: Iterator<Item = &'a Self>>(iter: It) -> Self {
        iter.copied().product()
    }
}

// Both denominators are positive, so cross-multiplying keeps the order.
impl<I: Integer> Ord for Rational<I> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numer * other.denom).cmp(&(other.numer * self.denom))
    }
}

impl<I: Integer> PartialOrd for Rational<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
