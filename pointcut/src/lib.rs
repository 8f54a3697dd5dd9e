//!
//! pointcut - The Pointcut Expression Language Front End
//!
//! Turns a one-line join-point pattern such as
//! `protected internal static string Namespace.Class.Method(out int, ref *)`
//! into a typed AST describing which members it selects.
//!
//! - source: Cursor over the pointcut text, spans
//! - lexer: Shared token model and the table-driven tokenizer
//! - ast: Name patterns, parameter lists and the four pointcut shapes
//! - parser: Recursive descent over the lexemes
//! - diagnostic: miette rendering of errors
//! - config: Settings for the command-line tool
//!
//! Entry points:
//! - `parse_pointcut`: text to Pointcut in one call
//! - `tokenize`: text to lexemes
//! - `parse`: lexemes to Pointcut
//!

pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod source;

pub use ast::{Pointcut, PointcutKind};
pub use diagnostic::DiagnosticReporter;
pub use error::Error;
pub use lexer::tokenize;
pub use parser::parse;

/// Lexes and parses `text`. Empty text, characters outside the pointcut
/// alphabet and malformed parameter lists are errors; everything else
/// parses, falling back to defaults where tokens are missing.
pub fn parse_pointcut(text: &str) -> Result<Pointcut, Error> {
    let lexemes = tokenize(text)?;
    Ok(parse(&lexemes, text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParameterList, TypeName, Visibility};
    use crate::source::SourceError;

    #[test]
    fn test_parse_pointcut_method() {
        let pointcut = parse_pointcut("public string Namespace.Class.Method()").unwrap();
        assert_eq!(pointcut.kind(), PointcutKind::Method);
        assert_eq!(pointcut.visibility(), Visibility::Public);
        assert_eq!(pointcut.declared_type().to_string(), "Namespace.Class");
    }

    #[test]
    fn test_parse_pointcut_empty() {
        assert_eq!(parse_pointcut(""), Err(Error::Source(SourceError::Empty)));
    }

    #[test]
    fn test_parse_pointcut_lex_error() {
        assert!(matches!(parse_pointcut("Namespace.Class$"), Err(Error::Lex(_))));
    }

    #[test]
    fn test_parse_pointcut_parse_error() {
        assert!(matches!(parse_pointcut("*.*(int"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_sentinels_are_shared_across_parses() {
        let first = parse_pointcut("*.*(..)").unwrap();
        let second = parse_pointcut("Namespace.Class.Method(..)").unwrap();
        assert_eq!(first.as_method().unwrap().parameters, ParameterList::ANY);
        assert_eq!(second.as_method().unwrap().parameters, ParameterList::ANY);

        let ctor = parse_pointcut("*.ctor").unwrap();
        assert_eq!(ctor.declared_type(), &TypeName::ANY);
    }
}
