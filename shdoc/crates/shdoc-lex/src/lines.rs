//! Lazy line model over a named text source.
//!
//! A [`Stream`] is a read-once handle to line-oriented text; a [`Line`]
//! is one row of it, including the trailing terminator when the source
//! provides one. Lines form a forward-only chain: each line computes its
//! successor at most once, on demand, and caches it, so a whole file is
//! never materialized unless something actually walks that far.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use shdoc_lex::lines::{Line, Stream};
//!
//! let stream = Rc::new(Stream::in_memory("demo.sh", "first\nsecond"));
//! let first = Line::from_stream(&stream, 0).unwrap();
//! assert_eq!(first.text(), "first\n");
//!
//! let second = first.next().unwrap();
//! assert_eq!(second.text(), "second");
//! assert!(second.next().is_none());
//! ```

use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;
use std::io::{self, BufRead};
use std::rc::Rc;

/// A named, read-once handle to a character source.
///
/// The name is used only for diagnostics. Consumption is strictly
/// forward; there is no seeking and no re-reading. A read failure ends
/// the line chain and is recorded on the stream, where the lexer picks
/// it up and reports it as data in the token stream.
pub struct Stream {
    name: String,
    reader: RefCell<Box<dyn BufRead>>,
    rows_read: Cell<usize>,
    failure: RefCell<Option<io::Error>>,
}

impl Stream {
    /// Creates a stream over any buffered reader.
    pub fn new(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            reader: RefCell::new(Box::new(reader)),
            rows_read: Cell::new(0),
            failure: RefCell::new(None),
        }
    }

    /// Creates a stream over an in-memory string.
    ///
    /// # Example
    ///
    /// ```
    /// use shdoc_lex::lines::Stream;
    ///
    /// let stream = Stream::in_memory("memory", "# @module demo\n");
    /// assert_eq!(stream.name(), "memory");
    /// ```
    pub fn in_memory(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, io::Cursor::new(text.into().into_bytes()))
    }

    /// The stream name, as used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows successfully read so far.
    pub fn rows_read(&self) -> usize {
        self.rows_read.get()
    }

    /// Removes and returns a recorded read failure, if any.
    pub fn take_failure(&self) -> Option<io::Error> {
        self.failure.borrow_mut().take()
    }

    /// Reads the next row, including its terminator.
    ///
    /// Returns `None` at end of input or after a failure has been
    /// recorded.
    fn read_row(&self) -> Option<String> {
        if self.failure.borrow().is_some() {
            return None;
        }
        let mut text = String::new();
        match self.reader.borrow_mut().read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                self.rows_read.set(self.rows_read.get() + 1);
                Some(text)
            }
            Err(err) => {
                *self.failure.borrow_mut() = Some(err);
                None
            }
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stream({})", self.name)
    }
}

/// One line of input that knows its row index and what line follows it.
///
/// A line's successor is computed at most once; later calls to
/// [`Line::next`] return the identical cached object. Lines are never
/// mutated after creation and are shared through `Rc`, so anything
/// holding a line (a [`Loc`](crate::loc::Loc), a match) keeps exactly
/// the suffix of the chain it still needs alive.
pub struct Line {
    stream: Rc<Stream>,
    row_index: usize,
    text: String,
    next: OnceCell<Option<Rc<Line>>>,
}

impl Line {
    /// Reads exactly one line from the stream.
    ///
    /// Returns `None` if the source is exhausted. The caller supplies
    /// the row index; a single forward-advancing reader is assumed.
    pub fn from_stream(stream: &Rc<Stream>, row_index: usize) -> Option<Rc<Line>> {
        let text = stream.read_row()?;
        Some(Rc::new(Line {
            stream: Rc::clone(stream),
            row_index,
            text,
            next: OnceCell::new(),
        }))
    }

    /// The line immediately following this one, read and cached on
    /// first access.
    pub fn next(&self) -> Option<Rc<Line>> {
        self.next
            .get_or_init(|| Line::from_stream(&self.stream, self.row_index + 1))
            .clone()
    }

    /// The owning stream.
    pub fn stream(&self) -> &Rc<Stream> {
        &self.stream
    }

    /// Zero-based row index.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// The literal line text, including its terminator if present.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}:{:?})", self.row_index, self.text)
    }
}
