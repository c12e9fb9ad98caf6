//! Numerical evaluation
//!
//! Two evaluators live here:
//! - [`Expr::evaluate`] walks the tree directly, resolving variables through a
//!   binding map. Good for one-off evaluation.
//! - [`CompiledExpr`] flattens the tree to postfix bytecode once, so repeated
//!   evaluation at many points skips both the recursion and the name lookups.
//!
//! # Example
//! ```
//! use symb_deriv::{parse, CompiledExpr};
//!
//! let expr = parse("x * x + y").unwrap();
//! let compiled = CompiledExpr::compile(&expr, &["x", "y"]).unwrap();
//! assert_eq!(compiled.evaluate(&[3.0, 1.0]), 10.0);
//! ```

use crate::math::Dual;
use crate::traits::Scalar;
use crate::{BinaryOp, Error, Expr};
use std::collections::HashMap;
use std::hash::BuildHasher;

#[inline]
fn apply<T: Scalar>(op: BinaryOp, left: T, right: T) -> T {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
        BinaryOp::Pow => left.pow(right),
    }
}

impl Expr {
    /// Evaluate with every variable bound to a number
    ///
    /// Division by zero and invalid powers give IEEE results (inf/NaN); the only
    /// failure is a variable missing from `bindings`.
    ///
    /// # Example
    /// ```
    /// use symb_deriv::parse;
    /// use std::collections::HashMap;
    ///
    /// let expr = parse("2 * x + 1").unwrap();
    /// let bindings = HashMap::from([("x".to_string(), 4.0)]);
    /// assert_eq!(expr.evaluate(&bindings).unwrap(), 9.0);
    /// ```
    pub fn evaluate<S: BuildHasher>(
        &self,
        bindings: &HashMap<String, f64, S>,
    ) -> Result<f64, Error> {
        self.evaluate_with(&|name: &str| bindings.get(name).copied())
    }

    /// Evaluate in any [`Scalar`] type, resolving variables through `lookup`
    pub fn evaluate_with<T, F>(&self, lookup: &F) -> Result<T, Error>
    where
        T: Scalar,
        F: Fn(&str) -> Option<T>,
    {
        match self {
            Expr::Constant(n) => Ok(T::from_f64(*n)),
            Expr::Variable(name) => {
                lookup(name.as_str()).ok_or_else(|| Error::unbound_variable(name))
            }
            Expr::Binary(op, left, right) => {
                let l = left.evaluate_with(lookup)?;
                let r = right.evaluate_with(lookup)?;
                Ok(apply(*op, l, r))
            }
        }
    }

    /// Numeric value of d(self)/d(var) at `bindings`
    ///
    /// Uses forward-mode dual numbers, so no derivative tree is built and the
    /// power rule has no restrictions on the exponent.
    pub fn derivative_at<S: BuildHasher>(
        &self,
        var: &str,
        bindings: &HashMap<String, f64, S>,
    ) -> Result<f64, Error> {
        let value: Dual<f64> = self.evaluate_with(&|name: &str| {
            bindings.get(name).map(|&v| {
                if name == var {
                    Dual::variable(v)
                } else {
                    Dual::constant(v)
                }
            })
        })?;
        Ok(value.eps)
    }
}

/// Bytecode instruction for stack-based evaluation
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Instruction {
    /// Push a constant value onto the stack
    LoadConst(f64),
    /// Push a parameter value onto the stack (by index)
    LoadParam(usize),
    /// Pop two values, push the result
    Binary(BinaryOp),
}

/// Expression compiled to postfix bytecode over positional parameters
///
/// Immutable after compilation, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct CompiledExpr {
    instructions: Vec<Instruction>,
    param_names: Vec<String>,
    stack_size: usize,
}

impl CompiledExpr {
    /// Compile `expr`; variables are resolved against `params` by position
    ///
    /// # Errors
    /// `UnboundVariable` if the tree uses a name not listed in `params`.
    pub fn compile(expr: &Expr, params: &[&str]) -> Result<Self, Error> {
        let mut compiler = Compiler {
            params,
            instructions: Vec::with_capacity(expr.node_count()),
            depth: 0,
            max_depth: 0,
        };
        compiler.emit(expr)?;

        Ok(CompiledExpr {
            instructions: compiler.instructions,
            param_names: params.iter().map(|p| p.to_string()).collect(),
            stack_size: compiler.max_depth,
        })
    }

    /// Parameter names in the order `evaluate` expects their values
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Evaluate at one point; `params[i]` is the value of `param_names()[i]`
    ///
    /// Missing trailing parameters read as NaN.
    pub fn evaluate(&self, params: &[f64]) -> f64 {
        let mut stack: Vec<f64> = Vec::with_capacity(self.stack_size);

        for instr in &self.instructions {
            match *instr {
                Instruction::LoadConst(c) => stack.push(c),
                Instruction::LoadParam(i) => {
                    stack.push(params.get(i).copied().unwrap_or(f64::NAN));
                }
                Instruction::Binary(op) => {
                    // Compilation guarantees two operands are present
                    let right = stack.pop().unwrap_or(f64::NAN);
                    let left = stack.pop().unwrap_or(f64::NAN);
                    stack.push(apply(op, left, right));
                }
            }
        }

        stack.pop().unwrap_or(f64::NAN)
    }

    #[cfg(test)]
    pub(crate) fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

struct Compiler<'a> {
    params: &'a [&'a str],
    instructions: Vec<Instruction>,
    depth: usize,
    max_depth: usize,
}

impl Compiler<'_> {
    fn push(&mut self, instr: Instruction) {
        match instr {
            Instruction::LoadConst(_) | Instruction::LoadParam(_) => {
                self.depth += 1;
                self.max_depth = self.max_depth.max(self.depth);
            }
            Instruction::Binary(_) => self.depth -= 1,
        }
        self.instructions.push(instr);
    }

    fn emit(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::Constant(n) => self.push(Instruction::LoadConst(*n)),
            Expr::Variable(name) => {
                let index = self
                    .params
                    .iter()
                    .position(|p| *p == name.as_str())
                    .ok_or_else(|| Error::unbound_variable(name))?;
                self.push(Instruction::LoadParam(index));
            }
            Expr::Binary(op, left, right) => {
                self.emit(left)?;
                self.emit(right)?;
                self.push(Instruction::Binary(*op));
            }
        }
        Ok(())
    }
}
