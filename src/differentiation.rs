// Differentiation engine - applies calculus rules structurally
//
// The result is not simplified: d/dx (x * x) comes back as ((1 * x) + (x * 1)).
// Subtrees that appear on both sides of a rule are cloned, the input tree is
// never modified.

use crate::{BinaryOp, Error, Expr};

impl Expr {
    /// Differentiate this expression with respect to a variable
    ///
    /// # Power rule
    /// For `base ^ exponent`:
    /// - exponent mentions `var`: unsupported (would need `ln`), returns an error
    /// - base is exactly `var`: `exponent * var ^ (exponent - 1)`
    /// - base does not mention `var`: `0`
    /// - otherwise: `(exponent * base ^ (exponent - 1)) * d(base)`
    ///
    /// # Example
    /// ```
    /// use symb_deriv::parse;
    ///
    /// let d = parse("x ** 3").unwrap().derivative("x").unwrap();
    /// assert_eq!(d.render(), "(3 * x^((3 - 1)))");
    /// ```
    pub fn derivative(&self, var: &str) -> Result<Expr, Error> {
        match self {
            // Base cases
            Expr::Constant(_) => Ok(Expr::constant(0.0)),

            Expr::Variable(name) => {
                if name == var {
                    Ok(Expr::constant(1.0))
                } else {
                    Ok(Expr::constant(0.0))
                }
            }

            Expr::Binary(op, u, v) => match op {
                // Linearity: (u ± v)' = u' ± v'
                BinaryOp::Add | BinaryOp::Sub => Ok(Expr::binary(
                    *op,
                    u.derivative(var)?,
                    v.derivative(var)?,
                )),

                // Product rule: (u * v)' = u' * v + u * v'
                BinaryOp::Mul => {
                    let u_prime = u.derivative(var)?;
                    let v_prime = v.derivative(var)?;
                    Ok(Expr::add_expr(
                        Expr::mul_expr(u_prime, (**v).clone()),
                        Expr::mul_expr((**u).clone(), v_prime),
                    ))
                }

                // Quotient rule: (u / v)' = (u' * v - u * v') / (v * v)
                BinaryOp::Div => {
                    let u_prime = u.derivative(var)?;
                    let v_prime = v.derivative(var)?;
                    Ok(Expr::div_expr(
                        Expr::sub_expr(
                            Expr::mul_expr(u_prime, (**v).clone()),
                            Expr::mul_expr((**u).clone(), v_prime),
                        ),
                        Expr::mul_expr((**v).clone(), (**v).clone()),
                    ))
                }

                BinaryOp::Pow => power_rule(u, v, var),
            },
        }
    }
}

fn power_rule(base: &Expr, exponent: &Expr, var: &str) -> Result<Expr, Error> {
    if exponent.contains_var(var) {
        tracing::debug!(%exponent, var, "exponent depends on the differentiation variable");
        return Err(Error::unsupported_derivative(format!(
            "exponent '{}' depends on '{}'",
            exponent, var
        )));
    }

    if !base.contains_var(var) {
        return Ok(Expr::constant(0.0));
    }

    // c * u^(c - 1)
    let monomial = Expr::mul_expr(
        exponent.clone(),
        Expr::pow(
            base.clone(),
            Expr::sub_expr(exponent.clone(), Expr::constant(1.0)),
        ),
    );

    if base.as_variable() == Some(var) {
        Ok(monomial)
    } else {
        // Chain rule for a compound base
        Ok(Expr::mul_expr(monomial, base.derivative(var)?))
    }
}
