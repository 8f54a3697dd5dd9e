//!
//! Crate-level error type covering the whole text-to-AST pipeline.
//!

use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::source::{SourceError, Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Where in the pointcut text the error points; `None` for errors about
    /// the text as a whole.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Source(_) => None,
            Error::Lex(err) => Some(err.span()),
            Error::Parse(err) => Some(err.span()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_error_span() {
        assert_eq!(Error::from(SourceError::Empty).span(), None);

        let lex = LexError::UnexpectedDigit {
            ch: '1',
            span: Span::new(2, 3),
        };
        assert_eq!(Error::from(lex).span(), Some(Span::new(2, 3)));

        let parse = ParseError::expected(TokenKind::RightParen, TokenKind::EndOfText, Span::new(9, 9));
        assert_eq!(Error::from(parse).span(), Some(Span::new(9, 9)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::from(SourceError::Empty).to_string(), "pointcut text is empty");

        let parse = ParseError::expected(TokenKind::RightParen, TokenKind::Comma, Span::new(0, 1));
        assert_eq!(Error::from(parse).to_string(), "expected ')', found ','");
    }
}
