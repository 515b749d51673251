//! Tokenizer for documentation comments in shell scripts.
//!
//! The lexer turns a shell script into a stream of tokens describing its
//! documentation comments and the function headers they attach to. It is
//! built from four layers:
//!
//! - [`lines`] - a lazy, memoized chain of input lines over a named
//!   [`Stream`]
//! - [`loc`] - an immutable cursor into that chain
//! - [`patterns`] - location-anchored regex matching with ordered,
//!   first-match-wins alternatives
//! - [`lexer`] - the state machine that drives the patterns and manages
//!   indentation
//!
//! Token categories:
//!
//! | Kind        | Meaning                                        |
//! |-------------|------------------------------------------------|
//! | `eof`       | end of input; repeats forever                  |
//! | `eol`       | end of a comment line                          |
//! | `indent`    | comment indentation increased                  |
//! | `dedent`    | comment indentation decreased                  |
//! | `func`      | a shell function header                        |
//! | `directive` | an `@name` directive opening a comment line    |
//! | `token`     | one word of comment text                       |
//! | `invalid`   | malformed input, carried as data               |
//!
//! The lexer never fails: malformed input becomes `invalid` tokens plus
//! diagnostics on the [`Handler`](shdoc_util::Handler), and lexing
//! resumes at the next line.
//!
//! # Examples
//!
//! ```
//! use shdoc_lex::{Lexer, Stream};
//! use shdoc_util::Handler;
//!
//! let source = "\
//! # @module demo
//! # Utilities for the demo.
//! greet() {
//!     echo hello
//! }
//! ";
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(Stream::in_memory("demo.sh", source), &handler).unwrap();
//!
//! loop {
//!     let token = lexer.take();
//!     if token.is_eof() {
//!         break;
//!     }
//!     println!("{token}");
//! }
//! assert!(!handler.has_errors());
//! ```

pub mod lexer;
pub mod lines;
pub mod loc;
pub mod patterns;
pub mod token;

mod edge_cases;

pub use lexer::{Lexer, LexerRules, Tokens, DIRECTIVE_LEAD};
pub use lines::{Line, Stream};
pub use loc::Loc;
pub use patterns::{Match, Pattern, PatternError, PatternSequence};
pub use token::{Token, TokenKind};
