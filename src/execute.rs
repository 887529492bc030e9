//! Running fragments against subject strings and querying results by name.

use regex::Captures;

use crate::captures::CaptureMap;
use crate::errors::PatternError;
use crate::fragment::Fragment;

/// A successful match, queryable by group index or by capture name.
///
/// Borrows the subject string for captured text and the originating fragment
/// for its capture table; views are created per execution and not reused.
#[derive(Debug)]
pub struct MatchView<'f, 't> {
    caps: Captures<'t>,
    groups: &'f CaptureMap,
}

impl<'f, 't> MatchView<'f, 't> {
    fn new(caps: Captures<'t>, groups: &'f CaptureMap) -> Self {
        Self { caps, groups }
    }

    /// The full matched text.
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        self.caps.get(0).map_or("", |m| m.as_str())
    }

    /// Byte offset where the match starts in the subject.
    #[must_use]
    pub fn start(&self) -> usize {
        self.caps.get(0).map_or(0, |m| m.start())
    }

    /// Byte offset just past the end of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.caps.get(0).map_or(0, |m| m.end())
    }

    /// Text of the `index`-th numbered group, `None` when the group did not
    /// participate in the match. Index 0 is the whole match.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&'t str> {
        self.caps.get(index).map(|m| m.as_str())
    }

    /// Text captured by the group registered as `name`.
    ///
    /// `None` means the group exists but did not participate (for example a
    /// branch of an alternation that was not taken) — distinct from an
    /// unregistered name, which is an error.
    ///
    /// # Errors
    /// Returns [`PatternError::UnknownCapture`] when `name` was never
    /// registered on the originating fragment.
    pub fn by_name(&self, name: &str) -> Result<Option<&'t str>, PatternError> {
        let index = self
            .groups
            .index_of(name)
            .ok_or_else(|| PatternError::UnknownCapture(name.to_string()))?;
        // Slot 0 of the positional result is the whole match.
        Ok(self.by_index(index + 1))
    }
}

/// Run `fragment` against `subject`, returning the first match.
///
/// `Ok(None)` reports a non-match; failing to match is a normal outcome, not
/// an error. Compilation happens on the first execution of a fragment and is
/// cached for later runs.
///
/// # Errors
/// Returns [`PatternError::Regex`] when the engine rejects the fragment's
/// generated source.
///
/// # Examples
/// ```
/// use regex_compose::{compose, execute, named_capture, one_or_more, DIGIT, Section};
///
/// let number = named_capture(&one_or_more(&DIGIT, false), "number")
///     .expect("example ensures fallible call succeeds");
/// let line = compose([Section::from("id="), Section::from(&number)])
///     .expect("example ensures fallible call succeeds");
///
/// let matched = execute(&line, "id=42")
///     .expect("example ensures fallible call succeeds")
///     .expect("subject should match");
/// assert_eq!(matched.as_str(), "id=42");
/// assert_eq!(matched.by_name("number").expect("name is registered"), Some("42"));
///
/// assert!(execute(&line, "id=?")
///     .expect("example ensures fallible call succeeds")
///     .is_none());
/// ```
pub fn execute<'f, 't>(
    fragment: &'f Fragment,
    subject: &'t str,
) -> Result<Option<MatchView<'f, 't>>, PatternError> {
    let regex = fragment.regex()?;
    Ok(regex
        .captures(subject)
        .map(|caps| MatchView::new(caps, fragment.captures())))
}

/// Every non-overlapping match of `fragment` in `subject`, left to right.
///
/// This is the repeat-scan callers of the global flag want, recast without
/// mutable matcher state: fragments stay immutable and each call starts from
/// the beginning of the subject.
///
/// # Errors
/// Returns [`PatternError::Regex`] when the engine rejects the fragment's
/// generated source.
pub fn execute_all<'f, 't>(
    fragment: &'f Fragment,
    subject: &'t str,
) -> Result<Vec<MatchView<'f, 't>>, PatternError> {
    let regex = fragment.regex()?;
    Ok(regex
        .captures_iter(subject)
        .map(|caps| MatchView::new(caps, fragment.captures()))
        .collect())
}
