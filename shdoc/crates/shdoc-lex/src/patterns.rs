//! Pattern matching engine: location-anchored regexes and ordered
//! alternatives.
//!
//! A [`Pattern`] wraps a regular expression and applies it at an exact
//! [`Loc`]: the match must begin at the queried column, never later in
//! the line. A [`PatternSequence`] is an ordered list of named patterns
//! with first-match-wins dispatch; it is the grammar-choice primitive
//! the lexer states are built from.
//!
//! Equality and hashing of both types are structural: two patterns are
//! equal iff their expression text is equal, two sequences iff their
//! ordered (name, pattern) lists are equal. This lets grammar code
//! compare "which choice set was in play" without looking at any
//! matched text.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

use crate::loc::Loc;

/// Error compiling a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The expression text was rejected by the regex engine.
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// An anchored matcher built from a regular expression.
///
/// `^` and `$` keep their whole-line meaning: the pattern is applied to
/// the full line text, and a candidate match is accepted only when it
/// starts exactly at the queried location.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    re: Regex,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use shdoc_lex::patterns::Pattern;
    ///
    /// let p = Pattern::new(r"\S+").unwrap();
    /// assert_eq!(p.as_str(), r"\S+");
    /// ```
    pub fn new(pattern: impl Into<String>) -> Result<Pattern, PatternError> {
        let source = pattern.into();
        let re = Regex::new(&source)?;
        Ok(Pattern { source, re })
    }

    /// The expression text this pattern was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Applies the pattern at a location.
    ///
    /// Returns `None` unless the expression matches starting exactly at
    /// `loc.column_index()` of `loc.line()`.
    pub fn match_at(&self, loc: &Loc) -> Option<Match> {
        let text = loc.line().text();
        let caps = self.re.captures_at(text, loc.column_index())?;
        let full = caps.get(0)?;
        if full.start() != loc.column_index() {
            // the engine found a match further along the line; an
            // anchored matcher must reject it
            return None;
        }

        let groups = caps
            .iter()
            .map(|g| g.map(|g| g.as_str().to_string()))
            .collect();
        let mut named = IndexMap::new();
        for name in self.re.capture_names().flatten() {
            if let Some(g) = caps.name(name) {
                named.insert(name.to_string(), g.as_str().to_string());
            }
        }

        Some(Match {
            loc: loc.clone(),
            pattern: self.clone(),
            name: None,
            seq: None,
            text: full.as_str().to_string(),
            groups,
            named,
        })
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}

/// A successful pattern application.
///
/// Carries the originating location, the pattern that matched, the
/// matched text with its capture groups, and - when produced through a
/// [`PatternSequence`] - the winning alternative's name and the prefix
/// of the sequence up to and including the winner.
#[derive(Clone, Debug)]
pub struct Match {
    loc: Loc,
    pattern: Pattern,
    pub(crate) name: Option<String>,
    pub(crate) seq: Option<PatternSequence>,
    text: String,
    groups: Vec<Option<String>>,
    named: IndexMap<String, String>,
}

impl Match {
    /// The location the match started at.
    pub fn loc(&self) -> &Loc {
        &self.loc
    }

    /// The pattern that produced this match.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The winning alternative's name, when matched through a sequence.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The sequence prefix up to and including the winning alternative.
    pub fn pattern_seq(&self) -> Option<&PatternSequence> {
        self.seq.as_ref()
    }

    /// The full matched text (capture group 0).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A capture group by index; `None` if absent or unmatched.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index)?.as_deref()
    }

    /// A named capture group; `None` if unmatched.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// The location just past the matched text, or `None` when the
    /// match consumed the rest of the input.
    pub fn loc_after(&self) -> Option<Loc> {
        self.loc.advance(self.text.len())
    }
}

/// An ordered sequence of named pattern alternatives.
///
/// `match_at` tries each alternative in declaration order and returns
/// the first success - a fixed-priority choice, not longest-match.
/// Sequences compose with [`then`](PatternSequence::then), so a shared
/// prefix (say, a directive marker) can be extended with a shared
/// suffix without restating it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatternSequence {
    data: Vec<(String, Pattern)>,
}

impl PatternSequence {
    /// Builds a sequence from (name, expression) pairs.
    pub fn new<'a>(
        alternatives: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<PatternSequence, PatternError> {
        let mut data = Vec::new();
        for (name, pattern) in alternatives {
            data.push((name.to_string(), Pattern::new(pattern)?));
        }
        Ok(PatternSequence { data })
    }

    /// The sequence with no alternatives; matches nothing.
    pub fn empty() -> PatternSequence {
        PatternSequence { data: Vec::new() }
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the sequence has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Tries the alternatives in order; the first match wins.
    ///
    /// The returned match is tagged with the winner's name and with the
    /// prefix of this sequence ending at the winner.
    pub fn match_at(&self, loc: &Loc) -> Option<Match> {
        for (i, (name, pattern)) in self.data.iter().enumerate() {
            if let Some(mut m) = pattern.match_at(loc) {
                m.name = Some(name.clone());
                m.seq = Some(PatternSequence {
                    data: self.data[..=i].to_vec(),
                });
                return Some(m);
            }
        }
        None
    }

    /// A new sequence with `other`'s alternatives appended.
    pub fn then(&self, other: &PatternSequence) -> PatternSequence {
        let mut data = self.data.clone();
        data.extend(other.data.iter().cloned());
        PatternSequence { data }
    }

    /// A new sequence with one more alternative appended.
    pub fn then_pattern(
        &self,
        name: &str,
        pattern: &str,
    ) -> Result<PatternSequence, PatternError> {
        let mut data = self.data.clone();
        data.push((name.to_string(), Pattern::new(pattern)?));
        Ok(PatternSequence { data })
    }

    /// True iff this sequence's alternatives are exactly the leading
    /// alternatives of `other`, in the same order.
    pub fn is_prefix(&self, other: &PatternSequence) -> bool {
        self.data.len() <= other.data.len() && other.data[..self.data.len()] == self.data[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{Line, Stream};
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    fn start(text: &str) -> Loc {
        let stream = Rc::new(Stream::in_memory("memory", text));
        Loc::start_of(Line::from_stream(&stream, 0)).unwrap()
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_pattern_can_match_to_correct_data() {
        let loc = start("abcdefgh\nwxyz").advance(2).unwrap();

        let p = Pattern::new(r"(cde).*\n?").unwrap();
        let m = p.match_at(&loc).unwrap();

        assert_eq!(m.loc(), &loc);
        assert_eq!(m.text(), "cdefgh\n");
        assert_eq!(m.group(1), Some("cde"));
        assert_eq!(m.pattern(), &p);

        // consuming the terminator lands at the start of the next line
        let after = m.loc_after().unwrap();
        assert_eq!(after.text_at(), "wxyz");
        assert_eq!(after.column_index(), 0);
    }

    #[test]
    fn test_pattern_hash_and_equality_depend_on_expression() {
        let a = Pattern::new("a").unwrap();
        let b = Pattern::new("a").unwrap();
        let c = Pattern::new("b").unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn test_match_must_start_at_the_location() {
        let loc = start("aaaa");
        let p = Pattern::new("^aa").unwrap();

        assert!(p.match_at(&loc).is_some());
        // `^` means the real start of the line, not the query position
        assert!(p.match_at(&loc.advance(1).unwrap()).is_none());
    }

    #[test]
    fn test_match_further_along_the_line_is_rejected() {
        let loc = start("xxabc\n");
        let p = Pattern::new("abc").unwrap();

        assert!(p.match_at(&loc).is_none());
        assert!(p.match_at(&loc.advance(2).unwrap()).is_some());
    }

    #[test]
    fn test_named_captures() {
        let loc = start("@module demo\n");
        let p = Pattern::new(r"@(?P<name>[a-zA-Z0-9_]+)[^\S\n]*").unwrap();
        let m = p.match_at(&loc).unwrap();

        assert_eq!(m.named("name"), Some("module"));
        assert_eq!(m.named("missing"), None);
        assert_eq!(m.text(), "@module ");
    }

    #[test]
    fn test_pattern_sequence_matches_first_pattern() {
        let x = [("p1", r"d.f"), ("p1", r"abc"), ("p2", r"a.cd")];

        let seq = PatternSequence::new(x[..2].iter().copied())
            .unwrap()
            .then(&PatternSequence::new(x[2..].iter().copied()).unwrap());

        let loc = start("abcdefaxcdz");

        let m = seq.match_at(&loc).unwrap();
        assert_eq!(m.name(), Some("p1"));
        assert_eq!(m.loc_after(), loc.advance(3));
        assert_eq!(m.text(), "abc");
        assert_eq!(
            m.pattern_seq(),
            Some(&PatternSequence::new(x[..2].iter().copied()).unwrap())
        );

        assert!(seq.match_at(&loc.advance(1).unwrap()).is_none());

        let m = seq.match_at(&loc.advance(3).unwrap()).unwrap();
        assert_eq!(m.name(), Some("p1"));
        assert_eq!(m.loc_after(), loc.advance(6));
        assert_eq!(m.text(), "def");
        assert_eq!(
            m.pattern_seq(),
            Some(&PatternSequence::new(x[..1].iter().copied()).unwrap())
        );

        let m = seq.match_at(&loc.advance(6).unwrap()).unwrap();
        assert_eq!(m.name(), Some("p2"));
        assert_eq!(m.loc_after(), loc.advance(10));
        assert_eq!(m.text(), "axcd");
        assert_eq!(m.pattern_seq(), Some(&seq));
    }

    #[test]
    fn test_pattern_sequence_hash_and_equality_depend_on_definition() {
        let a = PatternSequence::new([("a", "x")])
            .unwrap()
            .then_pattern("b", "y")
            .unwrap();
        let b = PatternSequence::new([("a", "x"), ("b", "y")]).unwrap();

        let c = PatternSequence::new([("b", "y")])
            .unwrap()
            .then_pattern("a", "x")
            .unwrap();
        let d = PatternSequence::new([("Z", "x"), ("b", "y")]).unwrap();
        let e = PatternSequence::new([("a", "Z"), ("b", "y")]).unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(a, e);
    }

    #[test]
    fn test_pattern_sequence_is_prefix() {
        let x = [("p1", r"d.f"), ("p1", r"abc"), ("p2", r"a.cd")];

        let seq = PatternSequence::new(x).unwrap();
        let two = PatternSequence::new(x[..2].iter().copied()).unwrap();
        let one = PatternSequence::new(x[..1].iter().copied()).unwrap();
        let tail = PatternSequence::new(x[1..].iter().copied()).unwrap();

        assert!(seq.is_prefix(&seq));
        assert!(two.is_prefix(&seq));
        assert!(!seq.is_prefix(&two));
        assert!(one.is_prefix(&seq));
        assert!(!seq.is_prefix(&one));
        assert!(PatternSequence::empty().is_prefix(&seq));
        assert!(!seq.is_prefix(&PatternSequence::empty()));

        assert!(!two.is_prefix(&tail));
        assert!(!tail.is_prefix(&two));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(Pattern::new("(unclosed").is_err());
        assert!(PatternSequence::new([("bad", "(unclosed")]).is_err());
    }
}
