//!
//! Source Text and Span Module
//!
//! A pointcut is a single line of text. This module owns the scanning
//! buffer over that text and the byte ranges every lexeme and error
//! points back into.
//!
//! Key types:
//! - Cursor: bounds-safe character access with a mutable read offset
//! - Span: a byte range in the pointcut text
//! - SourceError: rejected source text (nothing to lex)
//!
//! Design decisions:
//! - Offsets are byte-based; the supported alphabet is ASCII, anything
//!   else is rejected by the lexer before it could be sliced
//! - Spans are Copy and carry no file id (one pointcut, one buffer)
//!

mod cursor;

pub use cursor::{Cursor, TERMINATOR};

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("pointcut text is empty")]
    Empty,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub(crate) fn from_range(start: usize, end: usize) -> Self {
        Self::new(start as u32, end as u32)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
