//!
//! Base Combinators for Token Parsing
//!
//! Reusable nom combinators for matching tokens, keywords and whitespace.
//! Whitespace stays in the token stream, so every production that allows
//! it calls `ws` explicitly.
//!

use nom::error::{ErrorKind, ParseError};
use nom::IResult;

use crate::lexer::{Keyword, Lexeme, TokenKind};

use super::input::TokenStream;

pub type PResult<'a, O> = IResult<TokenStream<'a>, O, PError<'a>>;

#[derive(Debug, Clone)]
pub struct PError<'a> {
    pub input: TokenStream<'a>,
    pub kind: PErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PErrorKind {
    Expected(TokenKind),
    ExpectedKeyword(Keyword),
    ExpectedSegment,
    Nom(ErrorKind),
}

impl<'a> PError<'a> {
    pub fn new(input: TokenStream<'a>, kind: PErrorKind) -> Self {
        Self { input, kind }
    }
}

impl<'a> ParseError<TokenStream<'a>> for PError<'a> {
    fn from_error_kind(input: TokenStream<'a>, kind: ErrorKind) -> Self {
        PError {
            input,
            kind: PErrorKind::Nom(kind),
        }
    }

    fn append(_input: TokenStream<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

pub fn token<'a>(kind: TokenKind) -> impl Fn(TokenStream<'a>) -> PResult<'a, &'a Lexeme> {
    move |input: TokenStream<'a>| match input.first() {
        Some(lexeme) if lexeme.kind() == kind => Ok((input.advance(1), lexeme)),
        _ => Err(nom::Err::Error(PError::new(input, PErrorKind::Expected(kind)))),
    }
}

pub fn keyword<'a>(kw: Keyword) -> impl Fn(TokenStream<'a>) -> PResult<'a, &'a Lexeme> {
    move |input: TokenStream<'a>| match input.first() {
        Some(lexeme) if lexeme.kind() == TokenKind::Keyword(kw) => Ok((input.advance(1), lexeme)),
        _ => Err(nom::Err::Error(PError::new(
            input,
            PErrorKind::ExpectedKeyword(kw),
        ))),
    }
}

/// Like `token`, but a mismatch is a cut: the whole parse fails.
pub fn expect<'a>(kind: TokenKind) -> impl Fn(TokenStream<'a>) -> PResult<'a, &'a Lexeme> {
    move |input: TokenStream<'a>| {
        token(kind)(input).map_err(|err| match err {
            nom::Err::Error(e) => nom::Err::Failure(e),
            other => other,
        })
    }
}

pub fn fail<'a, O>(input: TokenStream<'a>, expected: TokenKind) -> PResult<'a, O> {
    Err(nom::Err::Failure(PError::new(
        input,
        PErrorKind::Expected(expected),
    )))
}

/// Skips one whitespace lexeme if present; reports whether it did.
pub fn ws(input: TokenStream) -> PResult<bool> {
    match input.first() {
        Some(lexeme) if lexeme.token.is_trivia() => Ok((input.advance(1), true)),
        _ => Ok((input, false)),
    }
}

pub fn peek_token(input: TokenStream) -> Option<TokenKind> {
    input.kind_at(0)
}

pub fn check(kind: TokenKind) -> impl Fn(TokenStream) -> bool {
    move |input: TokenStream| input.kind_at(0) == Some(kind)
}

pub fn is_eof(input: TokenStream) -> bool {
    input
        .first()
        .map(|lexeme| lexeme.token.is_eof())
        .unwrap_or(true)
}
