//! Span module - Source location tracking.
//!
//! A [`Span`] locates a range of text on one line of input: byte offsets
//! into the line plus 1-based line and column numbers for human-readable
//! output. The owning source is identified by its stream name, which
//! travels inside diagnostic messages rather than in the span itself.

/// Source location span.
///
/// # Examples
///
/// ```
/// use shdoc_util::span::Span;
///
/// // A range on line 1, starting at column 5
/// let span = Span::new(4, 8, 1, 5);
///
/// // A single point
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset within the line
    pub start: usize,
    /// End byte offset within the line
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::span::Span;
    ///
    /// let span = Span::new(4, 8, 2, 5);
    /// assert_eq!(span.len(), 4);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::span::Span;
    ///
    /// let point = Span::point(1, 5);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use shdoc_util::span::Span;
    ///
    /// let a = Span::new(2, 5, 1, 3);
    /// let b = Span::new(8, 11, 1, 9);
    /// let merged = a.merge(b);
    /// assert_eq!(merged.start, 2);
    /// assert_eq!(merged.end, 11);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            column: self.column.min(other.column),
        }
    }
}
