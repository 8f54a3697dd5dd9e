//!
//! Diagnostic Module - Rich Error Reporting
//!
//! This module renders pointcut errors with miette: the pointcut text is
//! shown with the offending lexeme underlined, plus a hint where one helps.
//!
//! Usage:
//!   let reporter = DiagnosticReporter::new("rules.txt:3", text);
//!   reporter.report(&err);
//!

use miette::{Diagnostic, LabeledSpan, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::error::Error;
use crate::lexer::{LexError, TokenKind};
use crate::parser::ParseError;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct PointcutDiagnostic {
    message: String,
    src: NamedSource<String>,
    span: SourceSpan,
    label: String,
    help_text: Option<String>,
}

impl Diagnostic for PointcutDiagnostic {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help_text
            .as_ref()
            .map(|h| Box::new(h.clone()) as Box<dyn std::fmt::Display>)
    }
}

impl PointcutDiagnostic {
    pub fn from_error(err: &Error, name: &str, text: &str) -> Self {
        let span = err.span().unwrap_or_default();
        let (label, help_text) = error_details(err);

        Self {
            message: err.to_string(),
            src: NamedSource::new(name, text.to_string()),
            span: (span.start as usize, span.len() as usize).into(),
            label,
            help_text,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

fn error_details(err: &Error) -> (String, Option<String>) {
    match err {
        Error::Source(_) => (
            "nothing to parse".to_string(),
            Some("write a pointcut such as 'public *.*(..)'".to_string()),
        ),
        Error::Lex(LexError::InvalidCharacter { ch, .. }) => (
            format!("{:?} is not allowed here", ch),
            Some("pointcuts use ASCII letters, digits, '_' and . , ! ( ) + - * # & |".to_string()),
        ),
        Error::Lex(LexError::UnexpectedDigit { .. }) => (
            "names cannot start with a digit".to_string(),
            Some("start the name with a letter or '_'".to_string()),
        ),
        Error::Parse(ParseError::Expected { expected, .. }) => {
            (format!("expected {}", expected), expected_help(*expected))
        }
    }
}

fn expected_help(expected: TokenKind) -> Option<String> {
    let help = match expected {
        TokenKind::RightParen => "close the parameter list with ')' and separate parameters with ','",
        TokenKind::Dot => "use '(..)' to match any parameters",
        TokenKind::Identifier => "every parameter needs a type, use '*' for any type",
        _ => return None,
    };
    Some(help.to_string())
}

pub struct DiagnosticReporter<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    pub fn diagnostic(&self, err: &Error) -> PointcutDiagnostic {
        PointcutDiagnostic::from_error(err, self.name, self.text)
    }

    pub fn report(&self, err: &Error) {
        let report = Report::new(self.diagnostic(err));
        eprintln!("{:?}", report);
    }
}
