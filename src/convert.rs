use std::ops::Div;

use num_traits::{AsPrimitive, PrimInt, ToPrimitive};

use crate::{error::RationalError, integer::Integer, rational::Rational};

impl<I: Integer> Rational<I> {
    /// Converts to the scalar `T` as `(numer as T) / (denom as T)`, in `T`'s arithmetic.
    ///
    /// Floating-point targets get the correctly rounded quotient of the casts. Integer
    /// targets truncate toward zero, and the casts follow `as` semantics, so narrowing
    /// can lose information.
    #[inline]
    pub fn to<T>(self) -> T
    where
        I: AsPrimitive<T>,
        T: Copy + 'static + Div<Output = T>,
    {
        let numer: T = <I as AsPrimitive<T>>::as_(self.numer());
        let denom: T = <I as AsPrimitive<T>>::as_(self.denom());
        numer / denom
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to()
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to()
    }

    /// Converts to the integer `T`, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if the denominator casts to zero in `T`.
    #[inline]
    pub fn trunc<T>(self) -> T
    where
        I: AsPrimitive<T>,
        T: PrimInt + 'static,
    {
        self.to()
    }

    /// Converts to a rational over `J` by casting both components and normalizing again.
    ///
    /// Widening preserves the value. Narrowing truncates each component as `as` does.
    ///
    /// # Panics
    ///
    /// Panics if the denominator truncates to zero.
    #[inline]
    pub fn cast<J: Integer>(self) -> Rational<J>
    where
        I: AsPrimitive<J>,
    {
        Rational::new(
            <I as AsPrimitive<J>>::as_(self.numer()),
            <I as AsPrimitive<J>>::as_(self.denom()),
        )
    }

    #[inline]
    pub fn try_cast<J: Integer>(self) -> Result<Rational<J>, RationalError>
    where
        I: AsPrimitive<J>,
    {
        Rational::try_new(
            <I as AsPrimitive<J>>::as_(self.numer()),
            <I as AsPrimitive<J>>::as_(self.denom()),
        )
    }
}

// Integer conversions take the quotient truncated toward zero and fail when it does not fit.
impl<I: Integer> ToPrimitive for Rational<I> {
    fn to_i64(&self) -> Option<i64> {
        (self.numer() / self.denom()).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        (self.numer() / self.denom()).to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        (self.numer() / self.denom()).to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        (self.numer() / self.denom()).to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.to::<f32>())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to::<f64>())
    }
}

impl<I: Integer> From<Rational<I>> for f64 {
    #[inline]
    fn from(r: Rational<I>) -> f64 {
        r.to()
    }
}

impl<I: Integer> From<Rational<I>> for f32 {
    #[inline]
    fn from(r: Rational<I>) -> f32 {
        r.to()
    }
}

macro_rules! impl_widening_from {
    ($($from:ty => $($to:ty),+;)*) => {
        $($(
            impl From<Rational<$from>> for Rational<$to> {
                #[inline]
                fn from(r: Rational<$from>) -> Self {
                    r.cast()
                }
            }
        )+)*
    };
}

impl_widening_from! {
    i8 => i16, i32, i64, i128;
    i16 => i32, i64, i128;
    i32 => i64, i128;
    i64 => i128;
}

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;

    use crate::{error::RationalError, Rational, Rational16, Rational32, Rational64, Rational8};

    #[test]
    fn test_to_float() {
        assert_eq!(Rational::new(1i32, 2).to_f64(), 0.5);
        assert_eq!(Rational::new(-3i32, 4).to_f32(), -0.75);
        assert_eq!(Rational::new(1i64, 3).to::<f64>(), 0.333_333_333_333_333_3);
        assert_eq!(Rational::new(1i64, 3).to_f32(), 0.333_333_34);
        assert_eq!(Rational::new(-2i32, 3).to_f64(), -0.666_666_666_666_666_6);
        assert_eq!(f64::from(Rational::new(5i8, 4)), 1.25);
        assert_eq!(f32::from(Rational::new(-5i16, 2)), -2.5);
    }

    #[test]
    fn test_trunc() {
        assert_eq!(Rational::new(7i32, 2).trunc::<i32>(), 3);
        assert_eq!(Rational::new(-7i32, 2).trunc::<i32>(), -3);
        assert_eq!(Rational::new(-7i32, 2).to::<i64>(), -3);
        assert_eq!(Rational::new(1i32, 3).trunc::<i8>(), 0);
        // casts follow `as`: 300 -> 44
        assert_eq!(Rational::new(300i32, 1).trunc::<u8>(), 44);
    }

    #[test]
    fn test_to_primitive() {
        let r = Rational::new(-9i32, 4);
        assert_eq!(r.to_i64(), Some(-2));
        assert_eq!(r.to_u64(), None);
        assert_eq!(Rational::new(9i32, 4).to_u64(), Some(2));
        assert_eq!(r.to_i128(), Some(-2));
        assert_eq!(ToPrimitive::to_f64(&r), Some(-2.25));
        assert_eq!(Rational::new(i64::MAX, 1).to_i8(), None);
    }

    #[test]
    fn test_widening_cast() {
        let r: Rational8 = Rational::new(-100, 127);
        let wide: Rational64 = r.cast();
        assert_eq!(wide.into_raw(), (-100, 127));
        assert_eq!(Rational32::from(r), Rational::new(-100, 127));
        assert_eq!(Rational::<i128>::from(wide), Rational::new(-100, 127));
    }

    #[test]
    fn test_narrowing_cast_truncates() {
        // 300 -> 44
        let r: Rational16 = Rational::new(300, 7);
        assert_eq!(r.cast::<i8>().into_raw(), (44, 7));
        // 258 -> 2
        let r: Rational16 = Rational::new(258, 5);
        assert_eq!(r.cast::<i8>().into_raw(), (2, 5));
        // 200 -> -56, sign moves to the numerator
        let r: Rational16 = Rational::new(3, 200);
        assert_eq!(r.cast::<i8>().into_raw(), (-3, 56));
        // 128 -> -128
        let r: Rational16 = Rational::new(128, 1);
        assert_eq!(r.cast::<i8>().into_raw(), (i8::MIN, 1));
        assert_eq!(r.try_cast::<i8>(), Ok(r.cast::<i8>()));
        let r: Rational16 = Rational::new(128, 3);
        assert_eq!(r.cast::<i8>().into_raw(), (i8::MIN, 3));
    }

    #[test]
    fn test_try_cast() {
        let r: Rational16 = Rational::new(1, 256);
        assert_eq!(r.try_cast::<i8>(), Err(RationalError::ZeroDenominator));
        assert_eq!(r.try_cast::<i32>(), Ok(Rational::new(1, 256)));
    }

    #[test]
    #[should_panic(expected = "denominator == 0")]
    fn test_cast_to_zero_denominator_panics() {
        let r: Rational16 = Rational::new(1, 512);
        let _ = r.cast::<i8>();
    }
}
