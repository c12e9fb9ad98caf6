//! Numeric scalar abstraction used by generic evaluation

use num_traits::Float;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Number type an expression tree can be evaluated in
///
/// Implemented for every `num_traits::Float` (`f32`, `f64`) and for
/// [`Dual`](crate::Dual) numbers, which carry a derivative alongside the value.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Lift a literal from the tree into this type
    fn from_f64(value: f64) -> Self;

    fn pow(self, exponent: Self) -> Self;

    fn ln(self) -> Self;

    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    fn one() -> Self {
        Self::from_f64(1.0)
    }
}

impl<T: Float + Debug> Scalar for T {
    #[inline]
    fn from_f64(value: f64) -> Self {
        T::from(value).unwrap_or_else(T::nan)
    }

    #[inline]
    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    #[inline]
    fn ln(self) -> Self {
        Float::ln(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_scalars() {
        assert_eq!(<f64 as Scalar>::from_f64(2.5), 2.5);
        assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5f32);
        assert_eq!(Scalar::pow(2.0f64, 10.0), 1024.0);
        assert_eq!(<f64 as Scalar>::zero(), 0.0);
    }
}
