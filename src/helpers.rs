//! String-in, value-out shortcuts
//!
//! Each helper parses the formula, runs one operation and drops the tree.

use crate::{Error, parse};
use rustc_hash::FxHashMap;

fn bindings_map(vars: &[(&str, f64)]) -> FxHashMap<String, f64> {
    vars.iter().map(|(name, v)| (name.to_string(), *v)).collect()
}

/// Evaluate a formula with the given variable values
///
/// # Example
/// ```
/// use symb_deriv::evaluate_str;
///
/// assert_eq!(evaluate_str("x * y + 1", &[("x", 3.0), ("y", 2.0)]).unwrap(), 7.0);
/// ```
pub fn evaluate_str(formula: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
    parse(formula)?.evaluate(&bindings_map(vars))
}

/// Rendered symbolic derivative of a formula
///
/// # Example
/// ```
/// use symb_deriv::diff_str;
///
/// assert_eq!(diff_str("x * 3", "x").unwrap(), "((1 * 3) + (x * 0))");
/// ```
pub fn diff_str(formula: &str, var: &str) -> Result<String, Error> {
    Ok(parse(formula)?.derivative(var)?.render())
}

/// Numeric derivative of a formula at a point, via dual numbers
pub fn derivative_at_str(formula: &str, var: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
    parse(formula)?.derivative_at(var, &bindings_map(vars))
}
