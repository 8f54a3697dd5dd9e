//!
//! Lexer Module - Table-Driven Tokenization
//!
//! This module turns pointcut text into lexemes for the parser. Every
//! character is classified through a 128-entry table into a small alphabet,
//! and a transition table drives a DFA from `Initial` to one of the terminal
//! states. Lexemes are single characters for punctuation (there are no
//! multi-character operators), maximal runs for identifiers and whitespace.
//!
//! Key design decisions:
//! - Whitespace is emitted as a token: the parser needs it to tell the
//!   `* Method()` visibility wildcard from the `*Method()` name wildcard
//! - Keyword/punctuation tokens are shared statics (see `token`)
//! - The `Bad` state is a hard error, never a silent empty token
//!
//! Token categories:
//! - Identifiers: letter or `_` first, then letters, digits, `_`
//! - Keywords: public, private, protected, internal, instance, static,
//!   class, new, ctor, get, set, property/prop, out, ref (any casing)
//! - Punctuation: . , ! ( ) + - * # & |
//! - Trivia: whitespace runs
//!

pub mod token;

pub use token::{Keyword, SyntaxToken, Token, TokenKind};

use std::borrow::Cow;

use thiserror::Error;
use tracing::trace;

use crate::error::Error;
use crate::source::{Cursor, Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character {ch:?} in pointcut")]
    InvalidCharacter { ch: char, span: Span },

    #[error("identifiers cannot start with digit {ch:?}")]
    UnexpectedDigit { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. } => *span,
            LexError::UnexpectedDigit { span, .. } => *span,
        }
    }
}

/// A token together with where it was read. The token may be shared, so the
/// position lives here rather than on the token.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: SyntaxToken,
    pub span: Span,
}

impl Lexeme {
    pub fn new(token: SyntaxToken, span: Span) -> Self {
        Self { token, span }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum State {
    Initial,
    Ident,
    White,
    IdentDone,
    WhiteDone,
    PunctDone,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Punct,
    White,
    EndOfText,
    Unknown,
}

const CHAR_CLASSES: [CharClass; 128] = build_char_classes();

const fn build_char_classes() -> [CharClass; 128] {
    let mut table = [CharClass::Unknown; 128];

    table[0] = CharClass::EndOfText;

    let mut c = b'A';
    while c <= b'Z' {
        table[c as usize] = CharClass::Letter;
        table[(c + 32) as usize] = CharClass::Letter;
        c += 1;
    }
    table[b'_' as usize] = CharClass::Letter;

    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = CharClass::Digit;
        d += 1;
    }

    // \t \n \v \f \r and space
    let mut w = 9;
    while w <= 13 {
        table[w] = CharClass::White;
        w += 1;
    }
    table[b' ' as usize] = CharClass::White;

    let punct = b".,!()+-*#&|";
    let mut i = 0;
    while i < punct.len() {
        table[punct[i] as usize] = CharClass::Punct;
        i += 1;
    }

    table
}

// Rows: Initial, Ident, White. Columns follow CharClass order.
const TRANSITIONS: [[State; 6]; 3] = [
    [
        State::Ident,
        State::Bad,
        State::PunctDone,
        State::White,
        State::Bad,
        State::Bad,
    ],
    [
        State::Ident,
        State::Ident,
        State::IdentDone,
        State::IdentDone,
        State::IdentDone,
        State::Bad,
    ],
    [
        State::WhiteDone,
        State::WhiteDone,
        State::WhiteDone,
        State::White,
        State::WhiteDone,
        State::Bad,
    ],
];

#[inline]
fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        CHAR_CLASSES[c as usize]
    } else {
        CharClass::Unknown
    }
}

/// Lexes the whole text. Whitespace lexemes are kept; the last lexeme is
/// always end-of-text.
pub fn tokenize(text: &str) -> Result<Vec<Lexeme>, Error> {
    let cursor = Cursor::new(text)?;
    let mut lexer = Lexer::new(cursor);
    Ok(lexer.tokenize_all()?)
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(cursor: Cursor<'src>) -> Self {
        Self { cursor }
    }

    pub fn tokenize_all(&mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::with_capacity(16);

        loop {
            let lexeme = self.next_token()?;
            let done = lexeme.token.is_eof();
            lexemes.push(lexeme);
            if done {
                break;
            }
        }

        Ok(lexemes)
    }

    /// Reads one lexeme. Once the text is exhausted every call yields
    /// end-of-text.
    pub fn next_token(&mut self) -> Result<Lexeme, LexError> {
        let start = self.cursor.offset();

        if self.cursor.is_eof() {
            return Ok(Lexeme::new(
                Cow::Borrowed(token::end_of_text()),
                Span::from_range(start, start),
            ));
        }

        let mut state = State::Initial;
        let mut i = start;

        loop {
            let class = classify(self.cursor.at(i));
            state = TRANSITIONS[state as usize][class as usize];

            if state >= State::IdentDone {
                break;
            }

            i += 1;
        }

        let lexeme = match state {
            State::IdentDone => {
                let text = self.cursor.slice(start, i - start);
                self.cursor.advance(i - start);
                Lexeme::new(token::make_identifier(text), Span::from_range(start, i))
            }
            State::PunctDone => {
                let span = Span::from_range(start, start + 1);
                let punct = token::make_punct(self.cursor.peek())
                    .ok_or_else(|| self.bad_state(start, start))?;
                self.cursor.advance(1);
                Lexeme::new(Cow::Borrowed(punct), span)
            }
            State::WhiteDone => {
                self.cursor.advance(i - start);
                Lexeme::new(Cow::Borrowed(token::make_white()), Span::from_range(start, i))
            }
            _ => return Err(self.bad_state(start, i)),
        };

        trace!(kind = ?lexeme.kind(), span = ?lexeme.span, "lexeme");
        Ok(lexeme)
    }

    fn bad_state(&self, start: usize, at: usize) -> LexError {
        let ch = self.cursor.char_at(at);
        let span = Span::from_range(at, at + ch.len_utf8());

        if at == start && ch.is_ascii_digit() {
            LexError::UnexpectedDigit { ch, span }
        } else {
            LexError::InvalidCharacter { ch, span }
        }
    }
}
