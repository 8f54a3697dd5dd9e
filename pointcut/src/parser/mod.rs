//!
//! Parser Module - nom-based Token Parsing
//!
//! Recursive descent over the lexeme array, written with nom combinators
//! on a custom token-stream input. The grammar is permissive up to the
//! parameter list: a missing visibility, scope or name falls back to its
//! default instead of erroring. Inside a parameter list every mismatch is
//! a `nom::Err::Failure` that aborts the parse.
//!
//! The parser is structured as follows:
//! - input: TokenStream type for nom integration
//! - combinators: token, keyword and whitespace combinators
//! - names: wildcard segments and dotted paths
//! - parameters: `()`, `(..)` and explicit parameter lists
//! - pointcut: visibility, scope and shape dispatch
//!
//! Entry point: `parse()` takes lexemes plus their source text and returns
//! one Pointcut.
//!

mod combinators;
mod error;
mod input;
mod names;
mod parameters;
mod pointcut;

pub use combinators::{PError, PErrorKind};
pub use error::ParseError;
pub use input::TokenStream;

use nom::Finish;
use tracing::debug;

use crate::ast::Pointcut;
use crate::lexer::Lexeme;

use combinators::{is_eof, ws};

pub fn parse(lexemes: &[Lexeme], source: &str) -> Result<Pointcut, ParseError> {
    let input = TokenStream::new(lexemes, source);

    match pointcut::pointcut(input).finish() {
        Ok((rest, pointcut)) => {
            let rest = ws(rest).map(|(rest, _)| rest).unwrap_or(rest);
            if !is_eof(rest) {
                debug!(
                    trailing = rest.span_text(rest.current_span()),
                    at = ?rest.current_span(),
                    "ignoring tokens after the pointcut"
                );
            }
            Ok(pointcut)
        }
        Err(e) => Err(e.into()),
    }
}
