//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and querying
//! diagnostics. The lexer reports malformed input both as data in its
//! token stream and as diagnostics through a [`Handler`], so a consumer
//! can decide after the fact whether anything went wrong.
//!
//! # Examples
//!
//! ```
//! use shdoc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use shdoc_util::span::Span;
//!
//! let handler = Handler::new();
//! let diag = Diagnostic::error("script.sh:4:1: no rule matches here", Span::point(4, 1))
//!     .with_code(DiagnosticCode::E_LEX_NO_MATCH)
//!     .with_help("check the active pattern sequence for a missing catch-all");
//! handler.emit_diagnostic(diag);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use shdoc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that invalidates the token stream
    Error,
    /// A warning that does not invalidate the token stream
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::{Diagnostic, Level};
    /// use shdoc_util::span::Span;
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use shdoc_util::span::Span;
    ///
    /// let diag = Diagnostic::error("stalled", Span::DUMMY)
    ///     .with_code(DiagnosticCode::E_LEX_STALLED);
    /// assert!(diag.code.is_some());
    /// ```
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics through a shared reference, so a
/// lexer and its caller can both hold it. It can be configured to panic
/// on errors for testing.
///
/// # Examples
///
/// ```
/// use shdoc_util::diagnostic::Handler;
/// use shdoc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.error("unexpected input", Span::DUMMY);
///
/// if handler.has_errors() {
///     eprintln!("lexing produced {} errors", handler.error_count());
/// }
/// ```
#[derive(Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new_panicking();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Report an error
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Report a warning
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Emit a pre-built diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::{Diagnostic, Handler};
    /// use shdoc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::warning("odd indentation", Span::DUMMY));
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a snapshot of all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::Handler;
    /// use shdoc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.error("oops", Span::DUMMY);
    /// let taken = handler.take_diagnostics();
    /// assert_eq!(taken.len(), 1);
    /// assert!(!handler.has_errors());
    /// ```
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
