//! shdoc-util - Shared infrastructure for the shdoc tokenizer.
//!
//! This crate provides the pieces every shdoc phase needs but no phase
//! owns: source position spans and the diagnostic reporting machinery.
//!
//! # Overview
//!
//! - [`span`] - Source location tracking ([`Span`])
//! - [`diagnostic`] - Error and warning reporting ([`Handler`],
//!   [`Diagnostic`], [`DiagnosticCode`])
//!
//! # Example
//!
//! ```
//! use shdoc_util::{Diagnostic, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error(
//!     "demo.sh:3:1: no rule matches here",
//!     Span::point(3, 1),
//! ));
//! assert!(handler.has_errors());
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use span::Span;
