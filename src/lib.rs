//! Symbolic Differentiation of Arithmetic Expressions
//!
//! Parses infix expressions (`+ - * / **`, parentheses, numbers, variables) into
//! an expression tree that can be rendered, evaluated and differentiated.
//!
//! # Features
//! - Shunting-yard parser with byte-positioned errors
//! - Fully parenthesized rendering that parses back to the same tree
//! - Evaluation against a variable map, in `f64` or any [`Scalar`]
//! - Unsimplified symbolic derivatives (sum, product, quotient and power rules)
//! - Forward-mode numeric derivatives via [`Dual`] numbers
//! - Bytecode compilation for repeated evaluation, parallel batches behind the
//!   `parallel` feature
//!
//! # Usage Examples
//!
//! ## String-based API
//! ```
//! use symb_deriv::{diff_str, evaluate_str};
//!
//! assert_eq!(evaluate_str("2 + 3 * 4", &[]).unwrap(), 14.0);
//! assert_eq!(diff_str("x + 1", "x").unwrap(), "(1 + 0)");
//! ```
//!
//! ## Tree API
//! ```
//! use symb_deriv::parse;
//! use std::collections::HashMap;
//!
//! let expr = parse("x * x").unwrap();
//! let derivative = expr.derivative("x").unwrap();
//! let at_five = HashMap::from([("x".to_string(), 5.0)]);
//! assert_eq!(derivative.evaluate(&at_five).unwrap(), 10.0);
//! ```

mod ast;
mod differentiation;
mod display;
mod error;
mod evaluator;
mod helpers;
pub mod math;
mod ops;
mod parser;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{BinaryOp, Expr};
pub use error::{Error, ErrorKind, Span};
pub use evaluator::CompiledExpr;
pub use helpers::{derivative_at_str, diff_str, evaluate_str};
pub use math::Dual;
pub use ops::{constant, var};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, Token, TokenKind, Tokenizer, parse, tokenize};
pub use traits::Scalar;
