//! Diagnostic codes for categorizing lexical errors.
//!
//! Each diagnostic class gets a stable code so users can look it up in
//! documentation or filter collected diagnostics.
//!
//! # Examples
//!
//! ```
//! use shdoc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_NO_MATCH;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to 4 digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// No pattern alternative matched at the current location.
    pub const E_LEX_NO_MATCH: DiagnosticCode = DiagnosticCode::new("E", 1001);
    /// The underlying stream failed while reading a line.
    pub const E_LEX_READ_FAILED: DiagnosticCode = DiagnosticCode::new("E", 1002);
    /// The lexer matched without consuming input or changing state.
    pub const E_LEX_STALLED: DiagnosticCode = DiagnosticCode::new("E", 1003);

    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Format as the canonical `{prefix}{number:04}` string
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::diagnostic::DiagnosticCode;
    ///
    /// assert_eq!(DiagnosticCode::new("W", 3).as_str(), "W0003");
    /// ```
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({}{:04})", self.prefix, self.number)
    }
}
