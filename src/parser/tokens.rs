use crate::BinaryOp;

/// Token classes produced by the [`Tokenizer`](super::Tokenizer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[0-9][0-9.]*`
    Number,
    /// `[a-zA-Z][a-zA-Z0-9]*`
    Literal,
    Plus,
    Minus,
    Star,
    /// `**` or `^`
    StarStar,
    Slash,
    LeftParen,
    RightParen,
    Comma,
    End,
}

impl TokenKind {
    /// Binary operator this token stands for, if any
    pub(crate) fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::StarStar => Some(BinaryOp::Pow),
            _ => None,
        }
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Source text of the token, borrowed from the input
    pub text: &'a str,
    pub kind: TokenKind,
    /// Byte offset of `text` in the input
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind, position: usize) -> Self {
        Token {
            text,
            kind,
            position,
        }
    }
}
