//!
//! TokenStream Input Type for nom
//!
//! A slice of lexemes plus the source text they were read from. The
//! combinators in this crate only need `Clone` and forward slicing.
//!

use std::ops::RangeFrom;

use nom::Slice;

use crate::lexer::{Lexeme, TokenKind};
use crate::source::Span;

#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a> {
    pub lexemes: &'a [Lexeme],
    pub source: &'a str,
    pub start: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(lexemes: &'a [Lexeme], source: &'a str) -> Self {
        Self {
            lexemes,
            source,
            start: 0,
        }
    }

    /// Source text under `span`, empty if the span is out of range.
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// The current lexeme; `None` once the stream is exhausted.
    pub fn first(&self) -> Option<&'a Lexeme> {
        self.lexemes.first()
    }

    pub fn nth(&self, n: usize) -> Option<&'a Lexeme> {
        self.lexemes.get(n)
    }

    pub fn kind_at(&self, n: usize) -> Option<TokenKind> {
        self.nth(n).map(|lexeme| lexeme.kind())
    }

    /// Drops `count` lexemes, clamped to the remaining length.
    pub fn advance(&self, count: usize) -> Self {
        self.slice(count.min(self.lexemes.len())..)
    }

    /// Span of the current lexeme, or an empty span at the end of the text.
    pub fn current_span(&self) -> Span {
        match self.lexemes.first() {
            Some(lexeme) => lexeme.span,
            None => {
                let end = self.source.len() as u32;
                Span::new(end, end)
            }
        }
    }
}

impl<'a> Slice<RangeFrom<usize>> for TokenStream<'a> {
    fn slice(&self, range: RangeFrom<usize>) -> Self {
        TokenStream {
            lexemes: &self.lexemes[range.start..],
            source: self.source,
            start: self.start + range.start,
        }
    }
}
