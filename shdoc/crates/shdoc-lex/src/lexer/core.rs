//! The lexer state machine.
//!
//! [`Lexer`] walks the lazy line chain with a [`Loc`] cursor, dispatches
//! the pattern sequence of its current state at that cursor, and buffers
//! the resulting tokens for [`peek`](Lexer::peek)/[`take`](Lexer::take).
//! It is total: malformed input becomes a [`TokenKind::Invalid`] token
//! plus a diagnostic, and lexing resumes at the next line. After end of
//! input it yields `eof` forever.

use std::collections::VecDeque;
use std::rc::Rc;

use shdoc_util::{Diagnostic, DiagnosticCode, Handler, Span};

use crate::lines::{Line, Stream};
use crate::loc::Loc;
use crate::patterns::PatternError;
use crate::token::{Token, TokenKind};

use super::rules::{self, LexerRules, DIRECTIVE_LEAD};

/// Which pattern sequence applies at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    StartOfLine,
    CodeLine,
    CommentLineStart,
    CommentLine,
}

/// The shell-doc tokenizer.
///
/// Construct one per input stream; pull tokens with [`take`](Lexer::take)
/// or look ahead with [`peek`](Lexer::peek). The [`tokens`](Lexer::tokens)
/// adapter iterates every token before `eof`.
///
/// # Examples
///
/// ```
/// use shdoc_lex::{Lexer, Stream, TokenKind};
/// use shdoc_util::Handler;
///
/// let handler = Handler::new();
/// let stream = Stream::in_memory("demo.sh", "# @module demo\n");
/// let mut lexer = Lexer::new(stream, &handler).unwrap();
///
/// let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Indent(2),
///         TokenKind::Directive("module".into()),
///         TokenKind::Word("demo".into()),
///         TokenKind::Eol,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    stream: Rc<Stream>,
    loc: Option<Loc>,
    tokens: VecDeque<Token>,
    pub(crate) indent: Vec<usize>,
    state: State,
    rules: LexerRules,
    handler: &'a Handler,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default shell-doc grammar.
    pub fn new(stream: Stream, handler: &'a Handler) -> Result<Lexer<'a>, PatternError> {
        Ok(Self::with_rules(stream, LexerRules::new()?, handler))
    }

    /// Creates a lexer over custom pattern tables.
    pub fn with_rules(stream: Stream, rules: LexerRules, handler: &'a Handler) -> Lexer<'a> {
        let stream = Rc::new(stream);
        let loc = Loc::start_of(Line::from_stream(&stream, 0));
        Lexer {
            stream,
            loc,
            tokens: VecDeque::new(),
            indent: vec![0],
            state: State::StartOfLine,
            rules,
            handler,
        }
    }

    /// The stream being lexed.
    pub fn stream(&self) -> &Rc<Stream> {
        &self.stream
    }

    /// The next token, without consuming it.
    ///
    /// Runs the state machine until at least one token is buffered. A
    /// step that consumes no input, emits nothing, and changes no state
    /// is reported as a stall and skipped past, so this always returns.
    pub fn peek(&mut self) -> &Token {
        while self.tokens.is_empty() {
            let loc_before = self.loc.clone();
            let state_before = self.state;
            self.step();
            if self.tokens.is_empty() && self.loc == loc_before && self.state == state_before {
                match loc_before {
                    Some(loc) => {
                        self.bail(&loc, DiagnosticCode::E_LEX_STALLED, "lexer made no progress")
                    }
                    None => self.push(Token::new(TokenKind::Eof)),
                }
            }
        }
        &self.tokens[0]
    }

    /// Consumes and returns the next token.
    ///
    /// Once `eof` has been returned, every further call returns `eof`
    /// again.
    pub fn take(&mut self) -> Token {
        self.peek();
        match self.tokens.pop_front() {
            Some(token) => token,
            None => Token::new(TokenKind::Eof),
        }
    }

    /// Skips tokens until the next `func` or `eof`, leaving that token
    /// pending. A parser calls this after an error to resynchronize at
    /// the next function header.
    pub fn recover(&mut self) {
        while !matches!(self.peek().kind, TokenKind::Func(_) | TokenKind::Eof) {
            self.take();
        }
    }

    /// An iterator over the remaining tokens, stopping before `eof`.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens { lexer: self }
    }

    /// Runs one step of the state machine. May buffer zero or more
    /// tokens.
    fn step(&mut self) {
        match self.loc.clone() {
            None => self.step_at_end(),
            Some(loc) => match self.state {
                State::StartOfLine => self.lex_line_start(&loc),
                State::CodeLine => self.lex_code_line(&loc),
                State::CommentLineStart | State::CommentLine => self.lex_comment(&loc),
            },
        }
    }

    /// The cursor has run off the final line.
    ///
    /// A comment cut off by end of input still gets its closing `eol`;
    /// open indentation is left open. A recorded read failure surfaces
    /// as an `invalid` token before `eof`.
    fn step_at_end(&mut self) {
        match self.state {
            State::CommentLineStart | State::CommentLine => {
                self.push(Token::new(TokenKind::Eol));
                self.state = State::StartOfLine;
            }
            State::CodeLine => self.state = State::StartOfLine,
            State::StartOfLine => {
                if let Some(err) = self.stream.take_failure() {
                    let row = self.stream.rows_read() + 1;
                    let message =
                        format!("{}:{}:1: read failed: {}", self.stream.name(), row, err);
                    self.handler.emit_diagnostic(
                        Diagnostic::error(&message, Span::point(row as u32, 1))
                            .with_code(DiagnosticCode::E_LEX_READ_FAILED),
                    );
                    self.push(Token::new(TokenKind::Invalid(message)));
                }
                self.push(Token::new(TokenKind::Eof));
            }
        }
    }

    /// Classifies a fresh line and updates the indent stack.
    fn lex_line_start(&mut self, loc: &Loc) {
        let Some(m) = self.rules.start_of_line.match_at(loc) else {
            self.bail(loc, DiagnosticCode::E_LEX_NO_MATCH, "no rule matches here");
            return;
        };
        self.loc = m.loc_after();
        let name = m.name().map(str::to_string);
        match name.as_deref() {
            Some(rules::EMPTY_COMMENT_LINE) => {
                self.push(Token::with_match(TokenKind::Eol, m));
            }
            Some(rules::COMMENT_LINE) => {
                let width = m.text().chars().count();
                let opens_directive = m.named("lead") == Some(DIRECTIVE_LEAD);
                self.update_indent(width);
                self.state = if opens_directive {
                    State::CommentLineStart
                } else {
                    State::CommentLine
                };
            }
            Some(rules::BLANK_LINE) => {}
            Some(rules::CODE_LINE) => {
                let width = m.text().chars().count();
                self.update_indent(width);
                self.state = State::CodeLine;
            }
            _ => self.bail(loc, DiagnosticCode::E_LEX_NO_MATCH, "no rule matches here"),
        }
    }

    /// Consumes the rest of a code line, emitting `func` for a function
    /// header and nothing otherwise.
    fn lex_code_line(&mut self, loc: &Loc) {
        let Some(m) = self.rules.code_line.match_at(loc) else {
            self.bail(loc, DiagnosticCode::E_LEX_NO_MATCH, "no rule matches here");
            return;
        };
        self.loc = m.loc_after();
        self.state = State::StartOfLine;
        if m.name() == Some(rules::FUNC) {
            // either header form binds the identifier, under its own group
            let func = m
                .named("kw_name")
                .or_else(|| m.named("name"))
                .map(str::to_string);
            if let Some(func) = func {
                self.push(Token::with_match(TokenKind::Func(func), m));
            }
        }
    }

    /// Lexes one token of comment text. The directive alternative is in
    /// play only in the comment-line-start state.
    fn lex_comment(&mut self, loc: &Loc) {
        let seq = match self.state {
            State::CommentLineStart => &self.rules.comment_line_start,
            _ => &self.rules.comment_line,
        };
        let Some(m) = seq.match_at(loc) else {
            self.bail(loc, DiagnosticCode::E_LEX_NO_MATCH, "no rule matches here");
            return;
        };
        self.loc = m.loc_after();
        let name = m.name().map(str::to_string);
        match name.as_deref() {
            Some(rules::EOL) => {
                self.state = State::StartOfLine;
                self.push(Token::with_match(TokenKind::Eol, m));
            }
            Some(rules::DIRECTIVE) => {
                self.state = State::CommentLine;
                let directive = m.named("name").unwrap_or_default().to_string();
                self.push(Token::with_match(TokenKind::Directive(directive), m));
            }
            Some(rules::WORD) => {
                self.state = State::CommentLine;
                let word = m.text().to_string();
                self.push(Token::with_match(TokenKind::Word(word), m));
            }
            _ => self.bail(loc, DiagnosticCode::E_LEX_NO_MATCH, "no rule matches here"),
        }
    }

    /// Reports malformed input at `loc` and resumes at the next line.
    ///
    /// The failure is delivered twice: as an `invalid` token in the
    /// stream and as an error diagnostic through the handler.
    fn bail(&mut self, loc: &Loc, code: DiagnosticCode, what: &str) {
        let message = format!(
            "{}:{}:{}: {}",
            loc.line().stream().name(),
            loc.line().row_index() + 1,
            loc.column_index() + 1,
            what
        );
        self.handler.emit_diagnostic(
            Diagnostic::error(&message, loc.span(0))
                .with_code(code)
                .with_note("lexing resumes at the next line"),
        );
        self.push(Token::new(TokenKind::Invalid(message)));
        self.loc = Loc::start_of(loc.line().next());
        self.state = State::StartOfLine;
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }
}

/// Borrowing iterator over a lexer's tokens, created by
/// [`Lexer::tokens`]. Yields every token up to, but not including,
/// `eof`.
///
/// The lexer itself deliberately does not implement [`Iterator`]:
/// `Iterator::take(self, n)` would shadow the inherent
/// [`take`](Lexer::take) on an owned receiver.
pub struct Tokens<'l, 'a> {
    lexer: &'l mut Lexer<'a>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.lexer.take();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
