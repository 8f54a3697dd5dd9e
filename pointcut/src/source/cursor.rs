//!
//! Scanning buffer over the pointcut text.
//!

use super::SourceError;

/// Returned for every index at or past the end of the text.
pub const TERMINATOR: char = '\0';

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Empty pointcut text is rejected rather than parsed as "match nothing".
    pub fn new(text: &'src str) -> Result<Self, SourceError> {
        if text.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { text, offset: 0 })
    }

    #[inline]
    pub fn text(&self) -> &'src str {
        self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Character at `index`, or [`TERMINATOR`] past the end.
    ///
    /// Bytes above 0x7F come back as their Latin-1 char, which the lexer
    /// classifies as unknown; the text is never sliced at such an index.
    #[inline]
    pub fn at(&self, index: usize) -> char {
        self.text
            .as_bytes()
            .get(index)
            .map(|&b| b as char)
            .unwrap_or(TERMINATOR)
    }

    #[inline]
    pub fn peek(&self) -> char {
        self.at(self.offset)
    }

    /// Moves forward by `count`, clamped to the end of the text.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.offset = (self.offset + count).min(self.text.len());
    }

    pub fn slice(&self, offset: usize, count: usize) -> &'src str {
        let end = (offset + count).min(self.text.len());
        &self.text[offset.min(end)..end]
    }

    /// The full character starting at `index`, used for error reporting on
    /// input outside the ASCII alphabet.
    pub(crate) fn char_at(&self, index: usize) -> char {
        self.text
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or_else(|| self.at(index))
    }
}
