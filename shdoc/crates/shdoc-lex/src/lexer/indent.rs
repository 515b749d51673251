//! Indentation tracking.
//!
//! The lexer keeps a stack of active indentation widths, bottomed out at
//! 0. When a line's indentation rises above the top of the stack the new
//! width is pushed and an `indent` token emitted; when it falls, widths
//! are popped until the top no longer exceeds it, with one `dedent` per
//! pop carrying the width returned to.

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Reconciles the indent stack with the width of the current line,
    /// emitting `indent`/`dedent` tokens as needed.
    ///
    /// A width that falls between two stacked widths pops down past it
    /// and then pushes the new width, so a dedent to an unseen level
    /// produces a `dedent` followed by an `indent`.
    pub(crate) fn update_indent(&mut self, width: usize) {
        while width < *self.indent.last().unwrap_or(&0) {
            self.indent.pop();
            let top = self.indent.last().copied().unwrap_or(0);
            self.push(Token::new(TokenKind::Dedent(top)));
        }
        if width > self.indent.last().copied().unwrap_or(0) {
            self.indent.push(width);
            self.push(Token::new(TokenKind::Indent(width)));
        }
    }
}
