//! Location - an immutable source-position cursor.
//!
//! A [`Loc`] points at a byte offset within one [`Line`] and can be
//! advanced forward, transparently crossing line boundaries through the
//! lazy line chain. Advancing past the final line yields `None`, the
//! distinguished end-of-input value.

use std::fmt;
use std::rc::Rc;

use shdoc_util::Span;

use crate::lines::Line;

/// An immutable cursor: a line reference plus a column byte offset.
///
/// Two locations are equal iff they reference the same line object and
/// the same column. The column always lies within `[0, line.text().len())`;
/// a position past the end of a line is represented as a position on a
/// following line, or as `None` for end of input.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use shdoc_lex::lines::{Line, Stream};
/// use shdoc_lex::loc::Loc;
///
/// let stream = Rc::new(Stream::in_memory("memory", "ab\ncd"));
/// let loc = Loc::start_of(Line::from_stream(&stream, 0)).unwrap();
///
/// assert_eq!(loc.text_at(), "ab\n");
/// assert_eq!(loc.advance(3).unwrap().text_at(), "cd");
/// assert!(loc.advance(5).is_none());
/// ```
#[derive(Clone)]
pub struct Loc {
    line: Rc<Line>,
    column_index: usize,
}

impl Loc {
    /// The location at column 0 of a line, or `None` for the absent
    /// line at end of input.
    pub fn start_of(line: Option<Rc<Line>>) -> Option<Loc> {
        line.map(|line| Loc {
            line,
            column_index: 0,
        })
    }

    /// The referenced line.
    pub fn line(&self) -> &Rc<Line> {
        &self.line
    }

    /// Byte offset within the line.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// The line text from this location to the end of the line.
    pub fn text_at(&self) -> &str {
        &self.line.text()[self.column_index..]
    }

    /// Advances by `n` bytes, crossing line boundaries as needed.
    ///
    /// Returns `None` when the advance runs past the final line. For
    /// any location `l`, `l.advance(a).advance(b) == l.advance(a + b)`.
    pub fn advance(&self, n: usize) -> Option<Loc> {
        let mut line = Rc::clone(&self.line);
        let mut column = self.column_index + n;
        loop {
            let len = line.text().len();
            if column < len {
                return Some(Loc {
                    line,
                    column_index: column,
                });
            }
            let next = line.next()?;
            column -= len;
            line = next;
        }
    }

    /// A diagnostic span of `len` bytes starting here (1-based
    /// line/column).
    pub fn span(&self, len: usize) -> Span {
        Span::new(
            self.column_index,
            self.column_index + len,
            (self.line.row_index() + 1) as u32,
            (self.column_index + 1) as u32,
        )
    }
}

impl PartialEq for Loc {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.line, &other.line) && self.column_index == other.column_index
    }
}

impl Eq for Loc {}

impl fmt::Debug for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loc({}:{}:{}:{:?})",
            self.line.stream().name(),
            self.line.row_index() + 1,
            self.column_index + 1,
            self.text_at()
        )
    }
}
