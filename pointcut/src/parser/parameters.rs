//!
//! Parameter List Parsing
//!
//! The only fail-fast production: once `(` has been seen, a malformed list
//! aborts the whole parse with the token kind that was expected.
//!
//! - `()`   zero parameters
//! - `(..)` any parameters
//! - `([out|ref] type, ...)` an explicit list
//!

use crate::ast::{Parameter, ParameterList, ParameterModifier, TypeName};
use crate::lexer::{Keyword, TokenKind};

use super::combinators::{check, expect, fail, token, ws, PResult};
use super::input::TokenStream;
use super::names::qualified_path;

pub fn parameter_list(input: TokenStream) -> PResult<ParameterList> {
    let (input, _) = token(TokenKind::LeftParen)(input)?;
    let (input, _) = ws(input)?;

    if check(TokenKind::RightParen)(input) {
        let (input, _) = token(TokenKind::RightParen)(input)?;
        return Ok((input, ParameterList::EMPTY));
    }

    if check(TokenKind::Dot)(input) {
        let (input, _) = token(TokenKind::Dot)(input)?;
        let (input, _) = expect(TokenKind::Dot)(input)?;
        let (input, _) = ws(input)?;
        let (input, _) = expect(TokenKind::RightParen)(input)?;
        return Ok((input, ParameterList::ANY));
    }

    let mut parameters = Vec::with_capacity(4);
    let mut input = input;

    loop {
        let (rest, param) = parameter(input)?;
        parameters.push(param);

        let (rest, _) = ws(rest)?;
        match rest.kind_at(0) {
            Some(TokenKind::Comma) => {
                let (rest, _) = token(TokenKind::Comma)(rest)?;
                let (rest, _) = ws(rest)?;
                input = rest;
            }
            Some(TokenKind::RightParen) => {
                let (rest, _) = token(TokenKind::RightParen)(rest)?;
                return Ok((rest, ParameterList::new(parameters)));
            }
            _ => return fail(rest, TokenKind::RightParen),
        }
    }
}

fn parameter(input: TokenStream) -> PResult<Parameter> {
    let (input, modifier) = modifier(input)?;
    let (input, path) = qualified_path(input)?;

    if path.is_empty() {
        return fail(input, TokenKind::Identifier);
    }

    Ok((input, Parameter::new(modifier, TypeName::from_segments(&path))))
}

fn modifier(input: TokenStream) -> PResult<ParameterModifier> {
    let modifier = match input.kind_at(0) {
        Some(TokenKind::Keyword(Keyword::Out)) => ParameterModifier::Out,
        Some(TokenKind::Keyword(Keyword::Ref)) => ParameterModifier::Ref,
        _ => return Ok((input, ParameterModifier::In)),
    };

    let (input, _) = ws(input.advance(1))?;
    Ok((input, modifier))
}
