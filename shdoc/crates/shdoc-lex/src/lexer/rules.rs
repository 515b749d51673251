//! The lexer's pattern tables.
//!
//! Each lexer state owns one [`PatternSequence`]; the sequences below
//! are the default shell-doc grammar. Alternative names are public
//! constants so consumers can dispatch on [`Match::name`] without
//! repeating string literals.
//!
//! [`Match::name`]: crate::patterns::Match::name

use crate::patterns::{PatternError, PatternSequence};

/// The exact whitespace that must follow the `#` run for a comment line
/// to open a directive position. A wider lead turns the whole line into
/// plain words.
pub const DIRECTIVE_LEAD: &str = " ";

/// A comment line consisting solely of markers and whitespace.
pub const EMPTY_COMMENT_LINE: &str = "empty-comment-line";
/// A comment line with content after the marker.
pub const COMMENT_LINE: &str = "comment-line";
/// A line that is entirely whitespace.
pub const BLANK_LINE: &str = "blank-line";
/// Any other line; shell code.
pub const CODE_LINE: &str = "code-line";

/// A shell function header on a code line.
pub const FUNC: &str = "func";
/// Code with no recognized structure; consumed silently.
pub const CODE: &str = "code";

/// One word of comment text.
pub const WORD: &str = "token";
/// The end of a comment line.
pub const EOL: &str = "eol";
/// An `@name` directive at the start of a comment.
pub const DIRECTIVE: &str = "directive";

/// The pattern tables driving the lexer, one sequence per state.
///
/// The defaults come from [`LexerRules::new`]; tests substitute custom
/// tables through [`Lexer::with_rules`](crate::lexer::Lexer::with_rules)
/// to exercise the lexer's behavior on degenerate grammars.
#[derive(Clone, Debug)]
pub struct LexerRules {
    /// Dispatched at the start of every line.
    pub start_of_line: PatternSequence,
    /// Active on lines classified as code.
    pub code_line: PatternSequence,
    /// Active inside a comment, after any directive position.
    pub comment_line: PatternSequence,
    /// Active at the directive position of a comment line; extends
    /// `comment_line` with the directive alternative.
    pub comment_line_start: PatternSequence,
}

impl LexerRules {
    /// Builds the default shell-doc grammar.
    ///
    /// Only returns `Err` if one of the built-in expressions fails to
    /// compile, which would be a bug in this crate.
    pub fn new() -> Result<LexerRules, PatternError> {
        // Line classification. Order matters: the empty-comment form
        // must be tried before the general comment form, and the blank
        // form before the code catch-all.
        let start_of_line = PatternSequence::new([
            (EMPTY_COMMENT_LINE, r"[^\S\n]*#+[^\S\n]*\n?$"),
            (COMMENT_LINE, r"[^\S\n]*#+(?P<lead>[^\S\n]*)"),
            (BLANK_LINE, r"[^\S\n]*\n?$"),
            (CODE_LINE, r"[^\S\n]*"),
        ])?;

        // A function header is either `function name` (optionally with
        // `()`) or `name()`. Everything else on a code line is consumed
        // without producing a token. The engine forbids reusing a group
        // name across branches, so each form captures the identifier
        // under its own group.
        let code_line = PatternSequence::new([
            (
                FUNC,
                r"(?:function[ \t]+(?P<kw_name>[-a-zA-Z0-9_:.]+)(?:\(\))?|(?P<name>[-a-zA-Z0-9_:.]+)\(\)).*\n?",
            ),
            (CODE, r".*\n?"),
        ])?;

        let comment_line = PatternSequence::new([
            // TODO: accept quoted words so "a b" lexes as one token
            (WORD, r"\S+[^\S\n]*"),
            (EOL, r"\n?$"),
        ])?;

        let comment_line_start = PatternSequence::new([(
            DIRECTIVE,
            r"@(?P<name>[a-zA-Z0-9_]+)[^\S\n]*",
        )])?
        .then(&comment_line);

        Ok(LexerRules {
            start_of_line,
            code_line,
            comment_line,
            comment_line_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::lines::{Line, Stream};
    use crate::loc::Loc;

    #[test]
    fn test_default_rules_build() {
        let rules = LexerRules::new().unwrap();
        assert_eq!(rules.start_of_line.len(), 4);
        assert_eq!(rules.code_line.len(), 2);
    }

    #[test]
    fn test_function_header_binds_its_own_group_per_form() {
        let rules = LexerRules::new().unwrap();
        let start = |text: &str| {
            let stream = Rc::new(Stream::in_memory("test", text));
            Loc::start_of(Line::from_stream(&stream, 0)).unwrap()
        };

        let m = rules.code_line.match_at(&start("function a::b {\n")).unwrap();
        assert_eq!(m.name(), Some(FUNC));
        assert_eq!(m.named("kw_name"), Some("a::b"));
        assert_eq!(m.named("name"), None);

        let m = rules.code_line.match_at(&start("a::b() {\n")).unwrap();
        assert_eq!(m.name(), Some(FUNC));
        assert_eq!(m.named("name"), Some("a::b"));
        assert_eq!(m.named("kw_name"), None);
    }

    #[test]
    fn test_comment_line_start_extends_comment_line() {
        let rules = LexerRules::new().unwrap();
        assert_eq!(
            rules.comment_line_start.len(),
            rules.comment_line.len() + 1
        );
        assert!(!rules.comment_line.is_prefix(&rules.comment_line_start));

        let directive_only =
            PatternSequence::new([(DIRECTIVE, r"@(?P<name>[a-zA-Z0-9_]+)[^\S\n]*")]).unwrap();
        assert!(directive_only.is_prefix(&rules.comment_line_start));
    }
}
