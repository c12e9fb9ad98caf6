//! Lazy tokenizer over a borrowed input string
//!
//! Tokens borrow their text from the input, so no allocation happens per token.
//! Positions are byte offsets.

use super::tokens::{Token, TokenKind};
use crate::{Error, ErrorKind};

/// Cursor-based tokenizer
///
/// `next_token` never runs out: once the input is consumed it returns an `End`
/// token on every call. On an unknown character it returns an error without
/// advancing, so a tokenizer that has failed should be discarded.
///
/// The `Iterator` implementation stops after the first `End` token or the first
/// error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            position: 0,
            finished: false,
        }
    }

    /// The full input this tokenizer reads from
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// Emit a token covering `start..self.position`
    fn emit(&self, start: usize, kind: TokenKind) -> Token<'a> {
        Token::new(&self.input[start..self.position], kind, start)
    }

    pub fn next_token(&mut self) -> Result<Token<'a>, Error> {
        self.advance_while(char::is_whitespace);

        let start = self.position;
        let Some(c) = self.peek() else {
            return Ok(Token::new("", TokenKind::End, self.input.len()));
        };

        if c.is_ascii_digit() {
            // Repeated dots are left for number conversion to reject
            self.advance_while(|c| c.is_ascii_digit() || c == '.');
            return Ok(self.emit(start, TokenKind::Number));
        }

        if c.is_ascii_alphabetic() {
            self.advance_while(|c| c.is_ascii_alphanumeric());
            return Ok(self.emit(start, TokenKind::Literal));
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '^' => TokenKind::StarStar,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            '*' => {
                if self.input[start + 1..].starts_with('*') {
                    self.position += 2;
                    return Ok(self.emit(start, TokenKind::StarStar));
                }
                TokenKind::Star
            }
            _ => return Err(Error::at(ErrorKind::UnknownToken, start)),
        };

        self.position += 1;
        Ok(self.emit(start, kind))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::End => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a complete input, including the trailing `End` token
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, Error> {
    // Rough capacity guess: one token per two bytes
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    for token in Tokenizer::new(input) {
        tokens.push(token?);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("+-*/(),"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_star_star_and_caret() {
        assert_eq!(
            kinds("2**3^4"),
            vec![
                TokenKind::Number,
                TokenKind::StarStar,
                TokenKind::Number,
                TokenKind::StarStar,
                TokenKind::Number,
                TokenKind::End,
            ]
        );
        // three stars: power then multiply
        assert_eq!(
            kinds("***"),
            vec![TokenKind::StarStar, TokenKind::Star, TokenKind::End]
        );
    }

    #[test]
    fn test_cursor_advances() {
        let mut tokenizer = Tokenizer::new("a**2 + 24");
        assert_eq!(tokenizer.position(), 0);
        tokenizer.next_token().unwrap();
        assert_eq!(tokenizer.position(), 1);
        tokenizer.next_token().unwrap();
        assert_eq!(tokenizer.position(), 3);
        assert_eq!(tokenizer.input(), "a**2 + 24");
    }

    #[test]
    fn test_non_ascii_is_unknown() {
        let err = tokenize("x + é").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownToken);
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_iterator_is_fused_after_error() {
        let mut tokenizer = Tokenizer::new("1 $ 2");
        assert!(tokenizer.next().unwrap().is_ok());
        assert!(tokenizer.next().unwrap().is_err());
        assert!(tokenizer.next().is_none());
    }
}
