//! Expression tree for parsed arithmetic expressions

use std::collections::BTreeSet;

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Binding strength: `Pow > {Mul, Div} > {Add, Sub}`
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Mul | BinaryOp::Div => 20,
            BinaryOp::Pow => 30,
        }
    }

    /// `a ** b ** c` groups as `a ** (b ** c)`; everything else groups left
    pub fn is_right_associative(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }

    /// Infix symbol used when rendering
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

/// Expression tree node
///
/// Every node owns its children; cloning copies the whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal (e.g., 3, 2.5)
    Constant(f64),

    /// Named variable (e.g., "x", "a1")
    Variable(String),

    /// Binary operation with its left and right operand
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    // Convenience constructors

    /// Create a number expression
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    /// Create a variable expression
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Create a binary expression
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    /// Create an addition expression
    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Add, left, right)
    }

    /// Create a subtraction expression
    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Sub, left, right)
    }

    /// Create a multiplication expression
    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Mul, left, right)
    }

    /// Create a division expression
    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOp::Div, left, right)
    }

    /// Create a power expression
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Expr::binary(BinaryOp::Pow, base, exponent)
    }

    // Accessor methods

    /// Check if expression is a constant number and return its value
    ///
    /// # Example
    /// ```
    /// use symb_deriv::Expr;
    /// assert_eq!(Expr::constant(3.5).as_constant(), Some(3.5));
    /// assert_eq!(Expr::variable("x").as_constant(), None);
    /// ```
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of the variable if this is a variable node
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// True if `name` occurs anywhere in the tree
    pub fn contains_var(&self, name: &str) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(v) => v == name,
            Expr::Binary(_, l, r) => l.contains_var(name) || r.contains_var(name),
        }
    }

    /// All variable names referenced by the tree, sorted
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(v) => {
                names.insert(v.as_str());
            }
            Expr::Binary(_, l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
        }
    }

    /// Height of the tree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Binary(_, l, r) => 1 + l.node_count() + r.node_count(),
        }
    }

    /// Fully parenthesized text form; see the `Display` impl
    pub fn render(&self) -> String {
        self.to_string()
    }
}
