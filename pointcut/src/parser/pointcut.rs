//!
//! Pointcut Shape Parsing
//!
//! Consumes, in order: visibility, scope, a leading name, an optional
//! second name, then dispatches on what follows:
//!
//! - `.new` / `.ctor`            Constructor
//! - `.get` / `.set` / `.property` Property
//! - `(`                         Method
//! - anything else               Member
//!
//! With two names, the first is the return (or member/property) type and
//! the second is the declared path; with one name there is no return type.
//! The declared path is split into its type and the trailing member name.
//!

use tracing::debug;

use crate::ast::{
    ConstructorPointcut, IdentifierName, MemberPointcut, MethodPointcut, ParameterList, Pointcut,
    PropertyPointcut, QualifiedName, Scope, TypeName, Visibility,
};
use crate::lexer::{Keyword, TokenKind};

use super::combinators::{check, keyword, peek_token, ws, PResult};
use super::input::TokenStream;
use super::names::{qualified_path, shape_marker, Marker, Path};
use super::parameters::parameter_list;

pub fn pointcut(input: TokenStream) -> PResult<Pointcut> {
    let (input, _) = ws(input)?;
    let (input, visibility) = visibility(input)?;
    let (input, _) = ws(input)?;
    let (input, scope) = scope(input)?;
    let (input, _) = ws(input)?;
    let (input, leading) = qualified_path(input)?;

    if shape_marker(input) == Some(Marker::Constructor) {
        return constructor(input, visibility, scope, &leading);
    }

    // Only whitespace separates a leading type from the declared path.
    let (after_ws, separated) = ws(input)?;
    let (after_second, second) = if separated {
        qualified_path(after_ws)?
    } else {
        (input, Path::new())
    };

    let (input, leading_type, path) = if second.is_empty() {
        (input, TypeName::NONE, leading)
    } else {
        (after_second, TypeName::from_segments(&leading), second)
    };

    let property = |is_get: bool, is_set: bool| {
        let (declared_type, name) = explode(&path);
        Pointcut::Property(PropertyPointcut {
            visibility,
            scope,
            declared_type,
            property_type: leading_type.clone(),
            name,
            is_get,
            is_set,
        })
    };

    match shape_marker(input) {
        Some(Marker::Constructor) => {
            debug!(ignored = %leading_type, "constructor after a leading type");
            return constructor(input, visibility, scope, &path);
        }
        Some(Marker::Getter) => return Ok((input.advance(2), property(true, false))),
        Some(Marker::Setter) => return Ok((input.advance(2), property(false, true))),
        Some(Marker::Property) => return Ok((input.advance(2), property(true, true))),
        None => {}
    }

    let (declared_type, name) = explode(&path);

    let (after_ws, _) = ws(input)?;
    if check(TokenKind::LeftParen)(after_ws) {
        let (input, parameters) = parameter_list(after_ws)?;
        debug!("method pointcut");
        return Ok((
            input,
            Pointcut::Method(MethodPointcut {
                visibility,
                scope,
                declared_type,
                method_name: name,
                return_type: leading_type,
                parameters,
            }),
        ));
    }

    debug!("member pointcut");
    Ok((
        input,
        Pointcut::Member(MemberPointcut {
            visibility,
            scope,
            declared_type,
            name,
            member_type: leading_type,
        }),
    ))
}

/// `input` is positioned on the `.new`/`.ctor` marker.
fn constructor<'a>(
    input: TokenStream<'a>,
    visibility: Visibility,
    scope: Scope,
    path: &[IdentifierName],
) -> PResult<'a, Pointcut> {
    let input = input.advance(2);
    let declared_type = TypeName::from_qualified(QualifiedName::create(path.iter().cloned()));

    let (after_ws, _) = ws(input)?;
    let (input, parameters) = if check(TokenKind::LeftParen)(after_ws) {
        parameter_list(after_ws)?
    } else {
        (input, ParameterList::ANY)
    };

    debug!(declared = %declared_type, "constructor pointcut");
    Ok((
        input,
        Pointcut::Constructor(ConstructorPointcut {
            visibility,
            scope,
            declared_type,
            parameters,
        }),
    ))
}

/// Splits a declared path into its type and the trailing member name.
fn explode(path: &[IdentifierName]) -> (TypeName, IdentifierName) {
    match path.split_last() {
        Some((name, declared)) => (TypeName::from_segments(declared), name.clone()),
        None => (TypeName::NONE, IdentifierName::ANY),
    }
}

fn visibility(input: TokenStream) -> PResult<Visibility> {
    let Some(kind) = peek_token(input) else {
        return Ok((input, Visibility::Public));
    };

    if starts_name(input) {
        return Ok((input, Visibility::Public));
    }

    match kind {
        TokenKind::Star => match input.kind_at(1) {
            Some(TokenKind::Identifier) | Some(TokenKind::Keyword(_)) => {
                debug!("leading '*' belongs to the name");
                Ok((input, Visibility::Public))
            }
            // `*.*()` matches any visibility, so a star heading a dotted
            // path stands for both the visibility and the first segment.
            Some(TokenKind::Dot) => Ok((input, Visibility::Any)),
            _ => Ok((input.advance(1), Visibility::Any)),
        },
        TokenKind::Keyword(Keyword::Public) | TokenKind::Plus => {
            Ok((input.advance(1), Visibility::Public))
        }
        TokenKind::Keyword(Keyword::Private) | TokenKind::Minus => {
            Ok((input.advance(1), Visibility::Private))
        }
        TokenKind::Keyword(Keyword::Protected) | TokenKind::Hash => {
            let rest = input.advance(1);
            let (after_ws, _) = ws(rest)?;
            if starts_name(after_ws) {
                return Ok((rest, Visibility::Protected));
            }
            match keyword(Keyword::Internal)(after_ws) {
                Ok((rest, _)) => Ok((rest, Visibility::ProtectedInternal)),
                Err(_) => Ok((rest, Visibility::Protected)),
            }
        }
        TokenKind::Keyword(Keyword::Internal) => Ok((input.advance(1), Visibility::Internal)),
        _ => Ok((input, Visibility::Public)),
    }
}

fn scope(input: TokenStream) -> PResult<Scope> {
    if starts_name(input) {
        return Ok((input, Scope::Any));
    }

    match input.kind_at(0) {
        Some(TokenKind::Keyword(Keyword::Instance)) => Ok((input.advance(1), Scope::Instance)),
        Some(TokenKind::Keyword(Keyword::Static)) => Ok((input.advance(1), Scope::Static)),
        _ => Ok((input, Scope::Any)),
    }
}

/// A keyword with a `.` or `*` glued after it is the first segment of a
/// name, not a modifier.
fn starts_name(input: TokenStream) -> bool {
    matches!(input.kind_at(0), Some(TokenKind::Keyword(_)))
        && matches!(input.kind_at(1), Some(TokenKind::Dot) | Some(TokenKind::Star))
}
