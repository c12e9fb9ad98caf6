//! Building expression trees in code
//!
//! ```
//! use symb_deriv::{constant, var};
//!
//! // 2 * x^(3 + 1)
//! let expr = constant(2.0) * var("x").pow_of(constant(3.0) + 1.0);
//! assert_eq!(expr.render(), "(2 * x^((3 + 1)))");
//! ```

use crate::Expr;
use std::ops::{Add, Div, Mul, Sub};

/// Constant leaf
pub fn constant(value: f64) -> Expr {
    Expr::constant(value)
}

/// Variable leaf
pub fn var(name: impl Into<String>) -> Expr {
    Expr::variable(name)
}

impl Expr {
    /// `self ^ exponent`; method form of [`Expr::pow`]
    pub fn pow_of(self, exponent: impl Into<Expr>) -> Expr {
        Expr::pow(self, exponent.into())
    }
}

// Convert f64 to Expr
impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::constant(n)
    }
}

// Convert i32 to Expr
impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::constant(n as f64)
    }
}

// ===== Macro for generating operator implementations =====

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::add_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sub_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::mul_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::div_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

impl_binary_ops!(Expr, Expr, |l: Expr| l, |r: Expr| r);
impl_binary_ops!(Expr, f64, |l: Expr| l, |r: f64| Expr::constant(r));
impl_binary_ops!(f64, Expr, |l: f64| Expr::constant(l), |r: Expr| r);
impl_binary_ops!(&Expr, &Expr, |l: &Expr| l.clone(), |r: &Expr| r.clone());
