//!
//! Name Parsing
//!
//! Qualified names are runs of segments joined by `.` with no interior
//! whitespace. A segment is a lone `*` or a name with an optional `*` glued
//! on either side:
//!
//! - `Name`   Strict
//! - `*Name`  EndsWith
//! - `Name*`  StartsWith
//! - `*Name*` Contains
//! - `*`      Any
//!
//! Keywords are contextual: in name position a keyword reads as a name
//! using its source text, unless it is a shape marker (`.new`, `.ctor`,
//! `.get`, `.set`, `.property`) closing the name.
//!

use nom::combinator::opt;
use smallvec::SmallVec;

use crate::ast::{IdentifierName, MatchType};
use crate::lexer::{Keyword, TokenKind};

use super::combinators::{token, PError, PErrorKind, PResult};
use super::input::TokenStream;

/// The raw segments of a dotted name, before any folding into a
/// `QualifiedName` or `TypeName`.
pub type Path = SmallVec<[IdentifierName; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Constructor,
    Getter,
    Setter,
    Property,
}

/// Checks for a `.marker` at the head of the stream without consuming it.
pub fn shape_marker(input: TokenStream) -> Option<Marker> {
    if input.kind_at(0) != Some(TokenKind::Dot) {
        return None;
    }

    let marker = match input.kind_at(1)? {
        TokenKind::Keyword(Keyword::New) | TokenKind::Keyword(Keyword::Ctor) => {
            Marker::Constructor
        }
        TokenKind::Keyword(Keyword::Get) => Marker::Getter,
        TokenKind::Keyword(Keyword::Set) => Marker::Setter,
        TokenKind::Keyword(Keyword::Property) => Marker::Property,
        _ => return None,
    };

    match input.kind_at(2) {
        None | Some(TokenKind::Whitespace) | Some(TokenKind::EndOfText) => Some(marker),
        Some(TokenKind::LeftParen) if marker == Marker::Constructor => Some(marker),
        _ => None,
    }
}

/// Parses a dotted name. Never fails on a missing name: an empty path is
/// returned and nothing is consumed.
pub fn qualified_path(input: TokenStream) -> PResult<Path> {
    let mut path = Path::new();

    let (mut input, first) = match segment(input) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(_)) => return Ok((input, path)),
        Err(e) => return Err(e),
    };
    path.push(first);

    loop {
        if input.kind_at(0) != Some(TokenKind::Dot) || shape_marker(input).is_some() {
            break;
        }

        match segment(input.advance(1)) {
            Ok((rest, next)) => {
                path.push(next);
                input = rest;
            }
            // The dot is left for whoever comes next.
            Err(nom::Err::Error(_)) => break,
            Err(e) => return Err(e),
        }
    }

    Ok((input, path))
}

pub fn segment(input: TokenStream) -> PResult<IdentifierName> {
    let (input, leading) = opt(token(TokenKind::Star))(input)?;
    let (input, name) = opt(name_text)(input)?;

    let Some(name) = name else {
        if leading.is_some() {
            return Ok((input, IdentifierName::ANY));
        }
        return Err(nom::Err::Error(PError::new(input, PErrorKind::ExpectedSegment)));
    };

    let (input, trailing) = opt(token(TokenKind::Star))(input)?;
    let match_type = match (leading.is_some(), trailing.is_some()) {
        (false, false) => MatchType::Strict,
        (true, false) => MatchType::EndsWith,
        (false, true) => MatchType::StartsWith,
        (true, true) => MatchType::Contains,
    };

    Ok((input, IdentifierName::new(name, match_type)))
}

/// Identifier text, or the source spelling of a keyword read as a name.
fn name_text<'a>(input: TokenStream<'a>) -> PResult<'a, &'a str> {
    match input.first() {
        Some(lexeme) if lexeme.kind() == TokenKind::Identifier => {
            Ok((input.advance(1), lexeme.token.text()))
        }
        Some(lexeme) if matches!(lexeme.kind(), TokenKind::Keyword(_)) => {
            Ok((input.advance(1), input.span_text(lexeme.span)))
        }
        _ => Err(nom::Err::Error(PError::new(input, PErrorKind::ExpectedSegment))),
    }
}
