//! Parser module - converts strings to expression trees
//!
//! Pipeline: text → [`Tokenizer`] (lazy, borrowed tokens) → [`Parser`]
//! (operator stack + operand stack) → [`Expr`].
mod lexer;
mod shunting;
mod tokens;

pub use lexer::{Tokenizer, tokenize};
pub use shunting::{DEFAULT_MAX_DEPTH, Parser};
pub use tokens::{Token, TokenKind};

use crate::{Error, Expr};

/// Parse a formula string into an expression tree
///
/// Supports `+ - * /`, `**` (also written `^`) for powers, parentheses, numeric
/// literals and variable names. `+ - * /` group left to right, `**` groups
/// right to left.
///
/// # Example
/// ```
/// use symb_deriv::parse;
///
/// let expr = parse("(2 + 3) * x").unwrap();
/// assert_eq!(expr.render(), "((2 + 3) * x)");
/// ```
///
/// # Errors
/// Returns an [`Error`] carrying the byte position of the offending token if:
/// - The input contains a character that starts no token (`UnknownToken`)
/// - A number literal does not convert (`InvalidNumber`)
/// - An operand or operator is missing, or parentheses are unbalanced
///   (`MissingOperand` / `MissingOperator`)
/// - The tree would exceed [`DEFAULT_MAX_DEPTH`] (`MaxDepthExceeded`)
///
/// Use [`Parser`] directly to change the depth limit.
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(input).parse()
}
