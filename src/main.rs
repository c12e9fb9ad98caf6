//! Parse an expression, evaluate it, and differentiate it.
//!
//! Usage: `symb-deriv <EXPRESSION> [--var NAME=VALUE]... [--wrt NAME] [--max-depth N]`

use clap::Parser as _;
use std::collections::HashMap;
use std::process;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

use symb_deriv::{DEFAULT_MAX_DEPTH, Parser};

#[derive(clap::Parser, Debug)]
#[command(name = "symb-deriv")]
#[command(about = "Evaluate and differentiate an arithmetic expression")]
struct Args {
    /// Expression to parse, e.g. "2 * x ** 3 + 1"
    expression: String,

    /// Variable binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Variable to differentiate with respect to
    #[arg(long = "wrt", default_value = "x")]
    wrt: String,

    /// Maximum nesting depth of the parsed tree
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{}': {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

/// Initialize logging; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    let bindings: HashMap<String, f64> = args.vars.into_iter().collect();

    let expr = match Parser::new(&args.expression)
        .max_depth(args.max_depth)
        .parse()
    {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!(
                "error parsing expression at position {}: {}",
                e.position().unwrap_or(0),
                e.kind
            );
            process::exit(1);
        }
    };

    let binding_label = {
        let mut pairs: Vec<String> = bindings
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        pairs.sort();
        format!("[{}]", pairs.join(", "))
    };

    println!("{}", expr);
    match expr.evaluate(&bindings) {
        Ok(value) => println!(" {:<16} {}", binding_label, value),
        Err(e) => error!("cannot evaluate: {}", e),
    }

    match expr.derivative(&args.wrt) {
        Ok(derivative) => {
            println!(" diff {:<11} {}", args.wrt, derivative);
            match derivative.evaluate(&bindings) {
                Ok(value) => println!(" diff {} {:<9} {}", args.wrt, binding_label, value),
                Err(e) => error!("cannot evaluate derivative: {}", e),
            }
        }
        Err(e) => error!("cannot differentiate: {}", e),
    }
}
