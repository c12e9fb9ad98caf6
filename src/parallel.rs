//! Parallel batch evaluation using Rayon
//!
//! Enable with the `parallel` feature:
//! ```toml
//! symb_deriv = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{CompiledExpr, Error, Expr};
use rayon::prelude::*;

/// Evaluate one expression at many points in parallel
///
/// # Arguments
/// * `expr` - Expression to evaluate
/// * `var_names` - Variable names, in the order values appear in each point
/// * `points` - One slice of values per evaluation point
///
/// The expression is compiled once and shared by all worker threads. Results
/// keep the order of `points`.
///
/// # Errors
/// `UnboundVariable` if `expr` uses a name missing from `var_names`.
///
/// # Example
/// ```
/// use symb_deriv::{parse, parallel::evaluate_parallel};
///
/// let expr = parse("x ** 2 + y").unwrap();
/// let points = vec![vec![1.0, 0.0], vec![2.0, 1.0], vec![3.0, 2.0]];
/// let values = evaluate_parallel(&expr, &["x", "y"], &points).unwrap();
/// assert_eq!(values, vec![1.0, 5.0, 11.0]);
/// ```
pub fn evaluate_parallel<P>(
    expr: &Expr,
    var_names: &[&str],
    points: &[P],
) -> Result<Vec<f64>, Error>
where
    P: AsRef<[f64]> + Sync,
{
    let compiled = CompiledExpr::compile(expr, var_names)?;
    tracing::debug!(points = points.len(), "evaluating in parallel");
    Ok(points
        .par_iter()
        .map(|point| compiled.evaluate(point.as_ref()))
        .collect())
}

/// Symbolic derivative evaluated at many points in parallel
pub fn derivative_parallel<P>(
    expr: &Expr,
    var: &str,
    var_names: &[&str],
    points: &[P],
) -> Result<Vec<f64>, Error>
where
    P: AsRef<[f64]> + Sync,
{
    let derivative = expr.derivative(var)?;
    evaluate_parallel(&derivative, var_names, points)
}
