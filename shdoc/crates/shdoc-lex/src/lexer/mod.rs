//! Lexer module - the shell-doc state machine and its pattern tables.

mod core;
mod indent;
pub mod rules;

pub use self::core::{Lexer, Tokens};
pub use self::rules::{LexerRules, DIRECTIVE_LEAD};
