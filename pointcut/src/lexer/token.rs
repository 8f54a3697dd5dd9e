//!
//! Token Model and Keyword Interner
//!
//! Keyword and punctuation tokens are immutable and shared: every lexeme of
//! the same kind hands out a reference to one process-wide static, so
//! pointer identity is a valid fast-path fingerprint for them. Only
//! identifiers are allocated, carrying their literal text.
//!
//! A lexed token is a `Cow<'static, Token>`: `Borrowed` for the shared
//! statics, `Owned` for identifiers.
//!

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Identifier,

    Dot,
    Comma,
    Not,
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Star,
    Hash,
    Ampersand,
    Pipe,

    Keyword(Keyword),

    Whitespace,
    EndOfText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Public,
    Private,
    Protected,
    Internal,
    Instance,
    Static,
    Class,
    New,
    Ctor,
    Get,
    Set,
    Property,
    Out,
    Ref,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Public => "public",
            Keyword::Private => "private",
            Keyword::Protected => "protected",
            Keyword::Internal => "internal",
            Keyword::Instance => "instance",
            Keyword::Static => "static",
            Keyword::Class => "class",
            Keyword::New => "new",
            Keyword::Ctor => "ctor",
            Keyword::Get => "get",
            Keyword::Set => "set",
            Keyword::Property => "property",
            Keyword::Out => "out",
            Keyword::Ref => "ref",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Not => write!(f, "'!'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Hash => write!(f, "'#'"),
            TokenKind::Ampersand => write!(f, "'&'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Keyword(kw) => write!(f, "keyword '{}'", kw.as_str()),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::EndOfText => write!(f, "end of text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: Cow<'static, str>,
}

/// A token as produced by the lexer: shared for keywords and punctuation,
/// owned for identifiers.
pub type SyntaxToken = Cow<'static, Token>;

impl Token {
    const fn shared(kind: TokenKind, text: &'static str) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
        }
    }

    fn identifier(text: &str) -> Self {
        Self {
            kind: TokenKind::Identifier,
            text: Cow::Owned(text.to_string()),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Literal text for identifiers; the canonical spelling for keywords
    /// (the source casing of a keyword is not kept on the token).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfText
    }
}

static DOT: Token = Token::shared(TokenKind::Dot, ".");
static COMMA: Token = Token::shared(TokenKind::Comma, ",");
static NOT: Token = Token::shared(TokenKind::Not, "!");
static LEFT_PAREN: Token = Token::shared(TokenKind::LeftParen, "(");
static RIGHT_PAREN: Token = Token::shared(TokenKind::RightParen, ")");
static PLUS: Token = Token::shared(TokenKind::Plus, "+");
static MINUS: Token = Token::shared(TokenKind::Minus, "-");
static STAR: Token = Token::shared(TokenKind::Star, "*");
static HASH: Token = Token::shared(TokenKind::Hash, "#");
static AMPERSAND: Token = Token::shared(TokenKind::Ampersand, "&");
static PIPE: Token = Token::shared(TokenKind::Pipe, "|");
static WHITE: Token = Token::shared(TokenKind::Whitespace, " ");
static END_OF_TEXT: Token = Token::shared(TokenKind::EndOfText, "");

static PUBLIC: Token = Token::shared(TokenKind::Keyword(Keyword::Public), "public");
static PRIVATE: Token = Token::shared(TokenKind::Keyword(Keyword::Private), "private");
static PROTECTED: Token = Token::shared(TokenKind::Keyword(Keyword::Protected), "protected");
static INTERNAL: Token = Token::shared(TokenKind::Keyword(Keyword::Internal), "internal");
static INSTANCE: Token = Token::shared(TokenKind::Keyword(Keyword::Instance), "instance");
static STATIC: Token = Token::shared(TokenKind::Keyword(Keyword::Static), "static");
static CLASS: Token = Token::shared(TokenKind::Keyword(Keyword::Class), "class");
static NEW: Token = Token::shared(TokenKind::Keyword(Keyword::New), "new");
static CTOR: Token = Token::shared(TokenKind::Keyword(Keyword::Ctor), "ctor");
static GET: Token = Token::shared(TokenKind::Keyword(Keyword::Get), "get");
static SET: Token = Token::shared(TokenKind::Keyword(Keyword::Set), "set");
static PROPERTY: Token = Token::shared(TokenKind::Keyword(Keyword::Property), "property");
static OUT: Token = Token::shared(TokenKind::Keyword(Keyword::Out), "out");
static REF: Token = Token::shared(TokenKind::Keyword(Keyword::Ref), "ref");

// `prop` is an alias: it interns to the same token as `property`.
static KEYWORDS: [(&str, &Token); 15] = [
    ("public", &PUBLIC),
    ("private", &PRIVATE),
    ("protected", &PROTECTED),
    ("internal", &INTERNAL),
    ("instance", &INSTANCE),
    ("static", &STATIC),
    ("class", &CLASS),
    ("new", &NEW),
    ("ctor", &CTOR),
    ("get", &GET),
    ("set", &SET),
    ("property", &PROPERTY),
    ("prop", &PROPERTY),
    ("out", &OUT),
    ("ref", &REF),
];

/// Case-insensitive keyword lookup.
pub fn keyword(lexeme: &str) -> Option<&'static Token> {
    KEYWORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(lexeme))
        .map(|(_, token)| *token)
}

/// Interns an identifier-shaped lexeme: the shared keyword token when the
/// lexeme is a keyword, otherwise a fresh identifier with the literal text.
pub fn make_identifier(lexeme: &str) -> SyntaxToken {
    match keyword(lexeme) {
        Some(token) => Cow::Borrowed(token),
        None => Cow::Owned(Token::identifier(lexeme)),
    }
}

/// Shared token for a single punctuation character, `None` when the
/// character is not part of the vocabulary.
pub fn make_punct(c: char) -> Option<&'static Token> {
    let token = match c {
        '.' => &DOT,
        ',' => &COMMA,
        '!' => &NOT,
        '(' => &LEFT_PAREN,
        ')' => &RIGHT_PAREN,
        '+' => &PLUS,
        '-' => &MINUS,
        '*' => &STAR,
        '#' => &HASH,
        '&' => &AMPERSAND,
        '|' => &PIPE,
        _ => return None,
    };
    Some(token)
}

pub fn make_white() -> &'static Token {
    &WHITE
}

pub fn end_of_text() -> &'static Token {
    &END_OF_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_punct_tokens_are_shared() {
        let cases = [
            ('.', TokenKind::Dot),
            (',', TokenKind::Comma),
            ('!', TokenKind::Not),
            ('(', TokenKind::LeftParen),
            (')', TokenKind::RightParen),
            ('+', TokenKind::Plus),
            ('-', TokenKind::Minus),
            ('*', TokenKind::Star),
            ('#', TokenKind::Hash),
            ('&', TokenKind::Ampersand),
            ('|', TokenKind::Pipe),
            ('\0', TokenKind::EndOfText),
        ];

        for (c, kind) in cases {
            let t1 = make_punct(c).unwrap();
            let t2 = make_punct(c).unwrap();
            assert!(ptr::eq(t1, t2), "'{}' should be shared", c);
            assert_eq!(t1.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_punct() {
        assert!(make_punct('$').is_none());
        assert!(make_punct('/').is_none());
    }

    #[test]
    fn test_keyword_tokens_are_shared() {
        let cases = [
            ("public", Keyword::Public),
            ("private", Keyword::Private),
            ("protected", Keyword::Protected),
            ("internal", Keyword::Internal),
            ("instance", Keyword::Instance),
            ("static", Keyword::Static),
            ("class", Keyword::Class),
            ("new", Keyword::New),
            ("ctor", Keyword::Ctor),
            ("get", Keyword::Get),
            ("set", Keyword::Set),
            ("property", Keyword::Property),
            ("prop", Keyword::Property),
            ("out", Keyword::Out),
            ("ref", Keyword::Ref),
        ];

        for (text, kw) in cases {
            let t1 = make_identifier(text);
            let t2 = make_identifier(text);
            assert!(matches!(t1, Cow::Borrowed(_)));
            assert!(ptr::eq(&*t1, &*t2), "'{}' should be shared", text);
            assert_eq!(t1.kind(), TokenKind::Keyword(kw));
        }
    }

    #[test]
    fn test_prop_alias_shares_property_token() {
        let prop = make_identifier("prop");
        let property = make_identifier("property");
        assert!(ptr::eq(&*prop, &*property));
        assert_eq!(prop.text(), "property");
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let mixed = make_identifier("iNsTaNce");
        assert_eq!(mixed.kind(), TokenKind::Keyword(Keyword::Instance));
        assert!(ptr::eq(&*mixed, &*make_identifier("instance")));
        assert_eq!(mixed.text(), "instance");
    }

    #[test]
    fn test_identifiers_are_fresh() {
        let t1 = make_identifier("Namespace");
        let t2 = make_identifier("Namespace");
        assert!(matches!(t1, Cow::Owned(_)));
        assert!(!ptr::eq(&*t1, &*t2));
        assert_eq!(t1, t2);
        assert_eq!(t1.kind(), TokenKind::Identifier);
        assert_eq!(t1.text(), "Namespace");
    }

    #[test]
    fn test_white_is_shared() {
        assert!(ptr::eq(make_white(), make_white()));
        assert!(make_white().is_trivia());
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::RightParen.to_string(), "')'");
        assert_eq!(TokenKind::Keyword(Keyword::New).to_string(), "keyword 'new'");
        assert_eq!(TokenKind::EndOfText.to_string(), "end of text");
    }
}
