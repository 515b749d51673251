//! Token types produced by the lexer.
//!
//! Every token carries a [`TokenKind`] and, when it came from a pattern
//! match, the [`Match`] that produced it. The kinds map to wire names as
//! follows:
//!
//! | Kind                  | Name              | Payload                           |
//! |-----------------------|-------------------|-----------------------------------|
//! | [`TokenKind::Eof`]    | `eof`             | -                                 |
//! | [`TokenKind::Eol`]    | `eol`             | -                                 |
//! | [`TokenKind::Indent`] | `indent`          | new indentation width             |
//! | [`TokenKind::Dedent`] | `dedent`          | width returned to                 |
//! | [`TokenKind::Func`]   | `func`            | function name                     |
//! | [`TokenKind::Directive`] | `directive-<n>` | directive name                   |
//! | [`TokenKind::Word`]   | `token`           | word text with trailing space     |
//! | [`TokenKind::Invalid`] | `invalid`        | human-readable error message      |

use std::fmt;

use crate::patterns::Match;

/// The classification and payload of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    Eof,
    /// End of a comment line.
    Eol,
    /// Indentation increased to the carried width.
    Indent(usize),
    /// Indentation decreased; carries the width returned to.
    Dedent(usize),
    /// A shell function header; carries the function name.
    Func(String),
    /// A documentation directive; carries the directive name.
    Directive(String),
    /// One word of comment text, including trailing intra-line space.
    Word(String),
    /// Malformed input, carried as data; the payload is the error
    /// message.
    Invalid(String),
}

impl TokenKind {
    /// The wire name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use shdoc_lex::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::Eol.name(), "eol");
    /// assert_eq!(TokenKind::Directive("module".into()).name(), "directive-module");
    /// assert_eq!(TokenKind::Word("demo ".into()).name(), "token");
    /// ```
    pub fn name(&self) -> String {
        match self {
            TokenKind::Eof => "eof".to_string(),
            TokenKind::Eol => "eol".to_string(),
            TokenKind::Indent(_) => "indent".to_string(),
            TokenKind::Dedent(_) => "dedent".to_string(),
            TokenKind::Func(_) => "func".to_string(),
            TokenKind::Directive(name) => format!("directive-{name}"),
            TokenKind::Word(_) => "token".to_string(),
            TokenKind::Invalid(_) => "invalid".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof | TokenKind::Eol => write!(f, "{}", self.name()),
            TokenKind::Indent(w) | TokenKind::Dedent(w) => {
                write!(f, "{}({})", self.name(), w)
            }
            TokenKind::Func(v) | TokenKind::Word(v) | TokenKind::Invalid(v) => {
                write!(f, "{}({:?})", self.name(), v)
            }
            TokenKind::Directive(_) => write!(f, "{}", self.name()),
        }
    }
}

/// A lexed token: its kind plus the match it was built from, when the
/// token corresponds to matched text. Synthetic tokens (`eof`, `indent`,
/// `dedent`, `invalid`) carry no match.
#[derive(Clone, Debug)]
pub struct Token {
    /// Classification and payload.
    pub kind: TokenKind,
    /// The pattern match that produced this token, if any.
    pub matched: Option<Match>,
}

impl Token {
    /// A synthetic token with no backing match.
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            matched: None,
        }
    }

    /// A token backed by a pattern match.
    pub fn with_match(kind: TokenKind, matched: Match) -> Self {
        Self {
            kind,
            matched: Some(matched),
        }
    }

    /// True for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
