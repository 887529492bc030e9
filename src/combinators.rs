//! Quantification, alternation, character classes, and named-capture wrapping.
//!
//! Every combinator returns a fragment wrapped in a non-capturing group, so
//! repeated combination stays syntactically composable without precedence
//! bugs. Combinator outputs carry no flags of their own; flags are applied at
//! the outermost composition via [`compose_flagged`](crate::compose_flagged).

use crate::captures::CaptureMap;
use crate::errors::PatternError;
use crate::escape::{ClassItem, class_body};
use crate::flags::Flags;
use crate::fragment::Fragment;

fn quantified(fragment: &Fragment, lazy: bool, min: u32, max: Option<u32>) -> Fragment {
    let mut source = format!("(?:{}{{{min},", fragment.source());
    if let Some(max) = max {
        source.push_str(&max.to_string());
    }
    source.push('}');
    if lazy {
        source.push('?');
    }
    source.push(')');
    // A non-capturing wrap shifts no group indices, so the input's capture
    // table carries over unchanged.
    Fragment::from_parts(source, Flags::default(), fragment.captures().clone())
}

/// Repeat `fragment` at least `min` times, up to `max` when given.
///
/// Lazy repetition prefers the shortest acceptable match; greedy repetition
/// (the default elsewhere in the family) prefers the longest.
///
/// # Errors
/// Returns [`PatternError::InvertedBounds`] when `min` exceeds `max`.
///
/// # Examples
/// ```
/// use regex_compose::{compose, repeat, Section};
///
/// let abc = compose([Section::from("abc")])
///     .expect("example ensures fallible call succeeds");
/// let bounded = repeat(&abc, true, 3, Some(5))
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(bounded.source(), "(?:(?:abc){3,5}?)");
/// ```
pub fn repeat(
    fragment: &Fragment,
    lazy: bool,
    min: u32,
    max: Option<u32>,
) -> Result<Fragment, PatternError> {
    if let Some(max) = max {
        if min > max {
            return Err(PatternError::InvertedBounds { min, max });
        }
    }
    Ok(quantified(fragment, lazy, min, max))
}

/// Repeat `fragment` zero or more times.
#[must_use]
pub fn zero_or_more(fragment: &Fragment, lazy: bool) -> Fragment {
    quantified(fragment, lazy, 0, None)
}

/// Repeat `fragment` one or more times.
#[must_use]
pub fn one_or_more(fragment: &Fragment, lazy: bool) -> Fragment {
    quantified(fragment, lazy, 1, None)
}

/// Match `fragment` zero or one time.
#[must_use]
pub fn optional(fragment: &Fragment, lazy: bool) -> Fragment {
    quantified(fragment, lazy, 0, Some(1))
}

/// Match `fragment` exactly `count` times.
#[must_use]
pub fn exactly(fragment: &Fragment, lazy: bool, count: u32) -> Fragment {
    quantified(fragment, lazy, count, Some(count))
}

/// Wrap `fragment` in a new capturing group addressable as `name`.
///
/// The new group takes index 0 in the result's capture table and every name
/// the input already tracked shifts up by one, mirroring the group numbering
/// the engine assigns by position in the pattern text.
///
/// # Errors
/// Returns [`PatternError::DuplicateCaptureName`] when `name` is already
/// bound inside `fragment`.
///
/// # Examples
/// ```
/// use regex_compose::{named_capture, one_or_more, DIGIT};
///
/// let number = named_capture(&one_or_more(&DIGIT, false), "number")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(number.source(), r"((?:(?:\d){1,}))");
/// assert_eq!(number.captures().index_of("number"), Some(0));
/// ```
pub fn named_capture(fragment: &Fragment, name: &str) -> Result<Fragment, PatternError> {
    let captures = CaptureMap::with_group_at_front(name, fragment.captures())?;
    Ok(Fragment::from_parts(
        format!("({})", fragment.source()),
        Flags::default(),
        captures,
    ))
}

/// Match any single character in `items`.
///
/// # Errors
/// Returns [`PatternError::EmptyClass`] for an empty item list and
/// [`PatternError::InvertedRange`] for a high-to-low range.
pub fn char_in(items: &[ClassItem]) -> Result<Fragment, PatternError> {
    let body = class_body(items)?;
    Ok(Fragment::raw(&format!("(?:[{body}])")))
}

/// Match any single character not in `items`.
///
/// # Errors
/// Returns [`PatternError::EmptyClass`] for an empty item list and
/// [`PatternError::InvertedRange`] for a high-to-low range.
pub fn char_not_in(items: &[ClassItem]) -> Result<Fragment, PatternError> {
    let body = class_body(items)?;
    Ok(Fragment::raw(&format!("(?:[^{body}])")))
}

/// Match any one of `branches`, preferring earlier branches.
///
/// Capture tables merge left-to-right at a running offset: the engine numbers
/// groups by their position in the pattern text regardless of which branch
/// ends up matching, so every branch's names stay addressable and groups in
/// unmatched branches simply report no captured text.
///
/// # Errors
/// Returns [`PatternError::EmptyAlternation`] for zero branches and
/// [`PatternError::DuplicateCaptureName`] when two branches bind the same
/// name.
pub fn alternate(branches: &[Fragment]) -> Result<Fragment, PatternError> {
    if branches.is_empty() {
        return Err(PatternError::EmptyAlternation);
    }
    let mut captures = CaptureMap::new();
    let mut offset = 0usize;
    let mut sources = Vec::with_capacity(branches.len());
    for branch in branches {
        captures.merge(branch.captures(), offset)?;
        offset += branch.captures().len();
        sources.push(branch.source());
    }
    Ok(Fragment::from_parts(
        format!("(?:{})", sources.join("|")),
        Flags::default(),
        captures,
    ))
}
