use crate::traits::Scalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Dual number `val + eps·ε` with `ε² = 0`
///
/// Evaluating an expression with the differentiation variable seeded as
/// `Dual::variable(x)` yields the value in `val` and the derivative in `eps`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Dual<T: Scalar> {
    pub val: T,
    pub eps: T,
}

impl<T: Scalar> Dual<T> {
    pub fn new(val: T, eps: T) -> Self {
        Self { val, eps }
    }

    pub fn constant(val: T) -> Self {
        Self { val, eps: T::zero() }
    }

    /// The variable being differentiated for
    pub fn variable(val: T) -> Self {
        Self { val, eps: T::one() }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.val, self.eps)
    }
}

// Basic Arithmetic

impl<T: Scalar> Add for Dual<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.eps + rhs.eps)
    }
}

impl<T: Scalar> Sub for Dual<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.eps - rhs.eps)
    }
}

impl<T: Scalar> Mul for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Product rule
        Self::new(self.val * rhs.val, self.val * rhs.eps + self.eps * rhs.val)
    }
}

impl<T: Scalar> Div for Dual<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // Quotient rule
        let val = self.val / rhs.val;
        let eps = (self.eps * rhs.val - self.val * rhs.eps) / (rhs.val * rhs.val);
        Self::new(val, eps)
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(T::zero() - self.val, T::zero() - self.eps)
    }
}

impl<T: Scalar> Scalar for Dual<T> {
    fn from_f64(value: f64) -> Self {
        Self::constant(T::from_f64(value))
    }

    fn pow(self, exponent: Self) -> Self {
        let val = self.val.pow(exponent.val);
        let zero = T::zero();

        // Each term is skipped when its seed is zero so that 0·inf and 0·ln(0)
        // do not leak NaN into otherwise finite derivatives
        let mut eps = zero;
        if self.eps != zero {
            // d(u^c) = c·u^(c-1)·du
            let power_term = exponent.val * self.val.pow(exponent.val - T::one());
            eps = power_term * self.eps;
        }
        if exponent.eps != zero {
            // d(c^v) = c^v·ln(c)·dv
            eps = eps + val * self.val.ln() * exponent.eps;
        }
        Self::new(val, eps)
    }

    fn ln(self) -> Self {
        Self::new(self.val.ln(), self.eps / self.val)
    }
}
