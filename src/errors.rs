//! Error types raised by the builder and the match executor.

use thiserror::Error;

use crate::flags::Flag;

/// Errors surfaced while composing fragments or querying match results.
///
/// Every variant is raised synchronously at the offending call and propagates
/// to the immediate caller; nothing is caught internally, and no fragment is
/// produced when any part of a composition fails. A subject string that simply
/// fails to match is reported as an absent match, never as an error.
///
/// # Examples
/// ```
/// use regex_compose::{alternate, PatternError};
/// let err = alternate(&[]).expect_err("zero branches must be rejected");
/// assert!(matches!(err, PatternError::EmptyAlternation));
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// The same flag token appeared more than once in a single request.
    #[error("flag `{0}` was given more than once")]
    DuplicateFlag(Flag),
    /// Two merged capture tables bind the same name.
    ///
    /// Silent shadowing of capture names is a likely bug source, so merges
    /// reject collisions instead of letting the later entry win.
    #[error("capture name `{0}` is already bound by an earlier group")]
    DuplicateCaptureName(String),
    /// `alternate` was called with zero branches.
    #[error("cannot alternate zero fragments")]
    EmptyAlternation,
    /// A character class was requested with no members.
    #[error("cannot build a character class with no members")]
    EmptyClass,
    /// A character range ran high-to-low.
    #[error("character range `{low}-{high}` is inverted")]
    InvertedRange {
        /// Lower bound as written.
        low: char,
        /// Upper bound as written.
        high: char,
    },
    /// A repetition was requested with its minimum above its maximum.
    #[error("repetition bounds {{{min},{max}}} are inverted")]
    InvertedBounds {
        /// Minimum repetition count.
        min: u32,
        /// Maximum repetition count.
        max: u32,
    },
    /// A match-result lookup used a name the fragment never registered.
    #[error("no capture named `{0}`")]
    UnknownCapture(String),
    /// The native engine rejected a generated pattern.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
