use std::fmt;

/// Source location span for error reporting
/// Represents a range of bytes in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Format the span for display (0-indexed byte offsets, as stored)
    pub fn display(&self) -> String {
        if self.end <= self.start + 1 {
            format!(" at position {}", self.start)
        } else {
            format!(" at positions {}-{}", self.start, self.end - 1)
        }
    }
}

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    // Lexical errors
    /// Character that starts no token
    UnknownToken,
    /// Number token that does not convert to a value (e.g. `1.2.3`)
    InvalidNumber,

    // Structural errors
    /// An operand was expected (trailing operator, empty parentheses, empty input)
    MissingOperand,
    /// An operator was expected (adjacent operands, unbalanced parentheses)
    MissingOperator,
    /// The token stream ran dry before an `End` token
    IteratorEnd,
    /// Tree would nest deeper than the parser's configured limit
    MaxDepthExceeded,

    // Tree operation errors
    /// Evaluation referenced a name absent from the bindings
    UnboundVariable(String),
    /// Derivative rule not available for this shape of expression
    UnsupportedDerivative(String),
}

/// Error produced while tokenizing, parsing, evaluating or differentiating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl Error {
    /// Create an error located at a single byte offset
    pub fn at(kind: ErrorKind, position: usize) -> Self {
        Error {
            kind,
            span: Some(Span::at(position)),
        }
    }

    /// Create an error covering a byte range
    pub fn spanning(kind: ErrorKind, span: Span) -> Self {
        Error {
            kind,
            span: Some(span),
        }
    }

    /// Create an error without location info
    pub fn new(kind: ErrorKind) -> Self {
        Error { kind, span: None }
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnboundVariable(name.into()))
    }

    pub fn unsupported_derivative(msg: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnsupportedDerivative(msg.into()))
    }

    /// Byte position the error refers to, if it has one
    pub fn position(&self) -> Option<usize> {
        self.span.map(|s| s.start)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownToken => write!(f, "Unknown token"),
            ErrorKind::InvalidNumber => write!(f, "Invalid number format"),
            ErrorKind::MissingOperand => write!(f, "Missing operand"),
            ErrorKind::MissingOperator => write!(f, "Missing operator"),
            ErrorKind::IteratorEnd => write!(f, "Unexpected end of token stream"),
            ErrorKind::MaxDepthExceeded => {
                write!(f, "Expression nesting depth exceeds maximum limit")
            }
            ErrorKind::UnboundVariable(name) => write!(f, "No value for variable '{}'", name),
            ErrorKind::UnsupportedDerivative(msg) => {
                write!(f, "Unsupported derivative: {}", msg)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.kind,
            self.span.map_or(String::new(), |s| s.display())
        )
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let err = Error::at(ErrorKind::UnknownToken, 3);
        assert_eq!(err.to_string(), "Unknown token at position 3");
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn test_display_with_range() {
        let err = Error::spanning(ErrorKind::InvalidNumber, Span::new(2, 7));
        assert_eq!(err.to_string(), "Invalid number format at positions 2-6");
    }

    #[test]
    fn test_display_without_position() {
        let err = Error::unbound_variable("y");
        assert_eq!(err.to_string(), "No value for variable 'y'");
        assert_eq!(err.position(), None);
    }
}
