//! Large Expression Benchmark
//!
//! Parse, render, evaluate and differentiate a formula with a few hundred
//! mixed terms.

use criterion::{Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::fmt::Write;
use std::hint::black_box;
use symb_deriv::{CompiledExpr, parse};

// =============================================================================
// Expression Generator
// =============================================================================

/// Generates a mixed expression with N terms over `x` and `y`
fn generate_mixed(n: usize) -> String {
    let mut s = String::with_capacity(n * 24);
    for i in 1..=n {
        if i > 1 {
            if i % 3 == 1 {
                write!(s, " - ").unwrap();
            } else {
                write!(s, " + ").unwrap();
            }
        }

        match i % 4 {
            0 => {
                // Polynomial term: i*x^k
                write!(s, "{} * x ** {}", i, i % 5 + 1).unwrap();
            }
            1 => {
                // Rational: (x^2 + i) / (y + i)
                write!(s, "(x ** 2 + {}) / (y + {})", i, i).unwrap();
            }
            2 => {
                // Product of sums
                write!(s, "(x + {}) * (y - x)", i).unwrap();
            }
            3 => {
                // Nested power
                write!(s, "(x * y + {}.5) ** 2", i).unwrap();
            }
            _ => unreachable!(),
        }
    }
    s
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_large_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_expressions_200");
    group.sample_size(20);

    let mixed_str = generate_mixed(200);

    group.bench_function("parse_mixed_200", |b| {
        b.iter(|| parse(black_box(&mixed_str)))
    });

    let expr = parse(&mixed_str).unwrap();
    let vars = HashMap::from([("x".to_string(), 2.5), ("y".to_string(), -1.25)]);

    group.bench_function("render_mixed_200", |b| b.iter(|| black_box(&expr).render()));

    group.bench_function("evaluate_mixed_200", |b| {
        b.iter(|| black_box(&expr).evaluate(black_box(&vars)))
    });

    group.bench_function("diff_mixed_200", |b| {
        b.iter(|| black_box(&expr).derivative(black_box("x")))
    });

    group.bench_function("derivative_at_mixed_200", |b| {
        b.iter(|| black_box(&expr).derivative_at("x", black_box(&vars)))
    });

    // -------------------------------------------------------------------------
    // Tree walk vs compiled bytecode on the derivative
    // -------------------------------------------------------------------------

    let derivative = expr.derivative("x").unwrap();
    let compiled = CompiledExpr::compile(&derivative, &["x", "y"]).unwrap();

    group.bench_function("eval_tree_deriv", |b| {
        b.iter(|| black_box(&derivative).evaluate(black_box(&vars)))
    });

    group.bench_function("eval_compiled_deriv", |b| {
        b.iter(|| compiled.evaluate(black_box(&[2.5, -1.25])))
    });

    group.finish();
}

criterion_group!(benches, bench_large_expressions);

criterion_main!(benches);
