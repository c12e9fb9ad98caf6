use crate::{
    DEFAULT_MAX_DEPTH, Dual, ErrorKind, Expr, Parser, Scalar, constant, derivative_at_str,
    diff_str, evaluate_str, parse, var,
};
use std::collections::HashMap;

#[test]
fn test_parser_configuration() {
    // Defaults match the free function
    let parsed = Parser::new("x * (y + 1)").parse().unwrap();
    assert_eq!(parsed, parse("x * (y + 1)").unwrap());

    // A depth limit above the default is honored too
    let chain = vec!["x"; DEFAULT_MAX_DEPTH + 10].join(" - ");
    assert_eq!(parse(&chain).unwrap_err().kind, ErrorKind::MaxDepthExceeded);
    let expr = Parser::new(&chain)
        .max_depth(DEFAULT_MAX_DEPTH * 2)
        .parse()
        .unwrap();
    assert_eq!(expr.depth(), DEFAULT_MAX_DEPTH + 10);
}

#[test]
fn test_builder_matches_parser() {
    let x = var("x");
    let built = (x.clone() + 1.0) * x.pow_of(2) / constant(4.0);
    let parsed = parse("(x + 1) * x ** 2 / 4").unwrap();
    assert_eq!(built, parsed);
    assert_eq!(built.to_string(), "(((x + 1) * x^(2)) / 4)");
}

#[test]
fn test_builder_by_reference() {
    let a = var("a");
    let b = var("b");
    let sum = &a + &b;
    let product = &a * &b;
    // originals stay usable
    assert_eq!(a, Expr::variable("a"));
    assert_eq!(sum.variables().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(product.node_count(), 3);
}

#[test]
fn test_string_helpers() {
    assert_eq!(evaluate_str("x ** 2 - y", &[("x", 3.0), ("y", 1.0)]).unwrap(), 8.0);
    assert_eq!(diff_str("x - 5", "x").unwrap(), "(1 - 0)");
    let slope = derivative_at_str("x ** 3", "x", &[("x", 2.0)]).unwrap();
    assert!((slope - 12.0).abs() < 1e-12);
}

#[test]
fn test_helper_errors_keep_position() {
    let err = evaluate_str("1 + $", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownToken);
    assert_eq!(err.to_string(), "Unknown token at position 4");

    let err = diff_str("2 ** x", "x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedDerivative(_)));
    assert_eq!(err.position(), None);
}

#[test]
fn test_generic_evaluation_in_f32() {
    let expr = parse("x / 4 + 0.5").unwrap();
    let value: f32 = expr
        .evaluate_with(&|name: &str| (name == "x").then_some(2.0f32))
        .unwrap();
    assert_eq!(value, 1.0f32);
}

#[test]
fn test_dual_evaluation_gives_value_and_slope() {
    let expr = parse("x ** 2 * y").unwrap();
    let result: Dual<f64> = expr
        .evaluate_with(&|name: &str| match name {
            "x" => Some(Dual::variable(3.0)),
            "y" => Some(Dual::constant(2.0)),
            _ => None,
        })
        .unwrap();
    assert_eq!(result.val, 18.0);
    assert!((result.eps - 12.0).abs() < 1e-12);
}

#[test]
fn test_derivative_at_handles_variable_exponent() {
    // symbolic differentiation refuses this, dual numbers do not
    let expr = parse("2 ** x").unwrap();
    assert!(expr.derivative("x").is_err());

    let point = HashMap::from([("x".to_string(), 3.0)]);
    let slope = expr.derivative_at("x", &point).unwrap();
    assert!((slope - 8.0 * 2f64.ln()).abs() < 1e-12);
}

#[test]
fn test_scalar_defaults() {
    assert_eq!(<f64 as Scalar>::zero(), 0.0);
    assert_eq!(<Dual<f64> as Scalar>::one(), Dual::constant(1.0));
}
