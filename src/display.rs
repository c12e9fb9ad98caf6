// Display formatting for the expression tree
//
// Output is fully parenthesized so it never depends on precedence and parses
// back to the same tree.
use crate::{BinaryOp, Expr};
use std::fmt;

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Display as integer if no fractional part
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(n) => format_number(f, *n),

            Expr::Variable(name) => write!(f, "{}", name),

            Expr::Binary(BinaryOp::Pow, base, exponent) => {
                // A nested power base needs its own parens, `a^(b)^(c)` would
                // re-read as a^(b^(c))
                if let Expr::Binary(BinaryOp::Pow, _, _) = **base {
                    write!(f, "({})^({})", base, exponent)
                } else {
                    write!(f, "{}^({})", base, exponent)
                }
            }

            Expr::Binary(op, left, right) => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Expr;

    #[test]
    fn test_number_formatting() {
        assert_eq!(Expr::constant(2.0).to_string(), "2");
        assert_eq!(Expr::constant(2.5).to_string(), "2.5");
        assert_eq!(Expr::constant(0.001).to_string(), "0.001");
        assert_eq!(Expr::constant(f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::constant(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Expr::constant(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_binary_formatting() {
        let x = Expr::variable("x");
        let sum = Expr::add_expr(x.clone(), Expr::constant(1.0));
        assert_eq!(sum.to_string(), "(x + 1)");

        let quotient = Expr::div_expr(sum.clone(), Expr::variable("y"));
        assert_eq!(quotient.render(), "((x + 1) / y)");

        let power = Expr::pow(sum, Expr::constant(2.0));
        assert_eq!(power.render(), "(x + 1)^(2)");
    }

    #[test]
    fn test_nested_power_base_is_wrapped() {
        let x = Expr::variable("x");
        let inner = Expr::pow(x.clone(), Expr::constant(2.0));
        assert_eq!(Expr::pow(inner.clone(), Expr::constant(3.0)).render(), "(x^(2))^(3)");
        assert_eq!(Expr::pow(x, inner).render(), "x^(x^(2))");
    }
}
