use super::lexer::Tokenizer;
use super::tokens::{Token, TokenKind};
use crate::{BinaryOp, Error, ErrorKind, Expr};

/// Default maximum tree depth accepted by the parser
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(BinaryOp),
    LeftParen,
}

/// Operator stack entry with the byte offset of the token that pushed it
#[derive(Debug, Clone, Copy)]
struct StackOp {
    pending: Pending,
    position: usize,
}

/// Completed sub-expression and its height
#[derive(Debug)]
struct Operand {
    expr: Expr,
    depth: usize,
}

/// Two-stack (shunting-yard) expression parser
///
/// Operators wait on one stack, finished sub-expressions on the other. An
/// incoming operator first reduces every waiting operator that binds at least
/// as tightly (strictly tighter for the right-associative `**`).
///
/// # Example
/// ```
/// use symb_deriv::Parser;
///
/// let expr = Parser::new("2 ** 3 ** 2").max_depth(16).parse().unwrap();
/// assert_eq!(expr.render(), "2^(3^(2))");
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    operators: Vec<StackOp>,
    operands: Vec<Operand>,
    /// An operand (number, literal or `(`) is legal next
    expect_operand: bool,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            tokenizer: Tokenizer::new(input),
            operators: Vec::new(),
            operands: Vec::new(),
            expect_operand: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit the height of the produced tree
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Consume the parser and build the tree
    pub fn parse(mut self) -> Result<Expr, Error> {
        loop {
            let position = self.tokenizer.position();
            let token = self
                .tokenizer
                .next()
                .ok_or_else(|| Error::at(ErrorKind::IteratorEnd, position))??;

            if token.kind == TokenKind::End {
                self.finish_input(token.position)?;
                break;
            }
            self.handle(token)?;
        }

        let end = self.tokenizer.input().len();
        if self.operands.len() > 1 {
            return Err(Error::at(ErrorKind::MissingOperator, end));
        }
        let expr = self
            .operands
            .pop()
            .map(|o| o.expr)
            .ok_or_else(|| Error::at(ErrorKind::MissingOperand, end))?;

        tracing::debug!(input = self.tokenizer.input(), %expr, "parsed expression");
        Ok(expr)
    }

    fn handle(&mut self, token: Token<'a>) -> Result<(), Error> {
        match token.kind {
            TokenKind::Number => {
                self.check_operand_expected(true, token.position)?;
                let value = parse_number(&token)?;
                self.push_operand(Expr::constant(value), 1, token.position)?;
                self.expect_operand = false;
            }

            TokenKind::Literal => {
                self.check_operand_expected(true, token.position)?;
                self.push_operand(Expr::variable(token.text), 1, token.position)?;
                self.expect_operand = false;
            }

            TokenKind::LeftParen => {
                self.check_operand_expected(true, token.position)?;
                self.operators.push(StackOp {
                    pending: Pending::LeftParen,
                    position: token.position,
                });
            }

            TokenKind::RightParen => {
                self.check_operand_expected(false, token.position)?;
                self.close_paren(token.position)?;
            }

            // Reserved for argument lists
            TokenKind::Comma => {}

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::StarStar => {
                self.check_operand_expected(false, token.position)?;
                if let Some(op) = token.kind.binary_op() {
                    self.push_operator(op, token.position)?;
                }
                self.expect_operand = true;
            }

            TokenKind::End => {}
        }
        Ok(())
    }

    /// Reject a token that starts an operand (`operand == true`) where an
    /// operator is due, and the other way round
    fn check_operand_expected(&self, operand: bool, position: usize) -> Result<(), Error> {
        match (operand, self.expect_operand) {
            (true, false) => Err(Error::at(ErrorKind::MissingOperator, position)),
            (false, true) => Err(Error::at(ErrorKind::MissingOperand, position)),
            _ => Ok(()),
        }
    }

    /// Push a finished sub-expression; `position` is blamed if it is too deep
    fn push_operand(&mut self, expr: Expr, depth: usize, position: usize) -> Result<(), Error> {
        if depth > self.max_depth {
            return Err(Error::at(ErrorKind::MaxDepthExceeded, position));
        }
        self.operands.push(Operand { expr, depth });
        Ok(())
    }

    fn push_operator(&mut self, op: BinaryOp, position: usize) -> Result<(), Error> {
        while let Some(&StackOp {
            pending: Pending::Operator(top),
            position: top_position,
        }) = self.operators.last()
        {
            let binds_tighter = top.precedence() > op.precedence()
                || (top.precedence() == op.precedence() && !op.is_right_associative());
            if !binds_tighter {
                break;
            }
            self.operators.pop();
            self.reduce(top, top_position)?;
        }

        self.operators.push(StackOp {
            pending: Pending::Operator(op),
            position,
        });
        Ok(())
    }

    fn close_paren(&mut self, position: usize) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                None => return Err(Error::at(ErrorKind::MissingOperator, position)),
                Some(StackOp {
                    pending: Pending::LeftParen,
                    ..
                }) => return Ok(()),
                Some(StackOp {
                    pending: Pending::Operator(op),
                    position: op_position,
                }) => self.reduce(op, op_position)?,
            }
        }
    }

    fn finish_input(&mut self, end: usize) -> Result<(), Error> {
        if self.expect_operand {
            return Err(Error::at(ErrorKind::MissingOperand, end));
        }

        while let Some(entry) = self.operators.pop() {
            match entry.pending {
                Pending::Operator(op) => self.reduce(op, entry.position)?,
                // `(` never closed
                Pending::LeftParen => {
                    return Err(Error::at(ErrorKind::MissingOperator, entry.position));
                }
            }
        }
        Ok(())
    }

    /// Pop two operands, combine them with `op`, push the result
    fn reduce(&mut self, op: BinaryOp, position: usize) -> Result<(), Error> {
        let right = self
            .operands
            .pop()
            .ok_or_else(|| Error::at(ErrorKind::MissingOperand, position))?;
        let left = self
            .operands
            .pop()
            .ok_or_else(|| Error::at(ErrorKind::MissingOperand, position))?;

        let depth = 1 + left.depth.max(right.depth);
        tracing::trace!(?op, position, depth, "reduce");
        self.push_operand(Expr::binary(op, left.expr, right.expr), depth, position)
    }
}

/// Integer parse when there is no `.`, float parse otherwise
///
/// Integer literals too large for `i64` are read as floats instead of failing.
fn parse_number(token: &Token<'_>) -> Result<f64, Error> {
    let text = token.text;
    let parsed = if text.contains('.') {
        text.parse::<f64>().ok()
    } else {
        text.parse::<i64>()
            .map(|n| n as f64)
            .ok()
            .or_else(|| text.parse::<f64>().ok())
    };

    parsed.ok_or_else(|| {
        Error::spanning(
            ErrorKind::InvalidNumber,
            crate::Span::new(token.position, token.position + text.len()),
        )
    })
}
