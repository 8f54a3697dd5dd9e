//!
//! Parser Error Types
//!
//! Only malformed parameter lists are fatal; every earlier production falls
//! back to a default. Errors carry the span of the offending lexeme.
//!

use thiserror::Error;

use crate::lexer::TokenKind;
use crate::source::Span;

use super::combinators::{PError, PErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
}

impl ParseError {
    pub fn expected(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        ParseError::Expected {
            expected,
            found,
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. } => *span,
        }
    }

    pub fn expected_kind(&self) -> Option<TokenKind> {
        match self {
            ParseError::Expected { expected, .. } => Some(*expected),
        }
    }
}

impl<'a> From<PError<'a>> for ParseError {
    fn from(err: PError<'a>) -> Self {
        let found = err.input.kind_at(0).unwrap_or(TokenKind::EndOfText);
        let span = err.input.current_span();

        match err.kind {
            PErrorKind::Expected(kind) => ParseError::expected(kind, found, span),
            PErrorKind::ExpectedKeyword(kw) => {
                ParseError::expected(TokenKind::Keyword(kw), found, span)
            }
            // A bare nom error can only come from a failed name.
            PErrorKind::ExpectedSegment | PErrorKind::Nom(_) => {
                ParseError::expected(TokenKind::Identifier, found, span)
            }
        }
    }
}
