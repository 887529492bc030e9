//! Composable builders for regular expressions with named capture groups.
//!
//! Assemble a matcher from named, reusable pieces — literal text, character
//! classes, quantifiers, alternation, named captures — instead of
//! hand-writing a monolithic pattern string, then pull matched text back out
//! by capture name rather than positional index. The [`regex`] crate supplies
//! the matching engine; this crate generates pattern source and keeps each
//! fragment's name-to-group-index table consistent as fragments nest and
//! concatenate.
//!
//! Fragments are immutable: every builder operation returns a new
//! [`Fragment`], so intermediate pieces can be stored, reused, and shared
//! across threads.
//!
//! ```
//! use regex_compose::{
//!     ALPHANUM, DIGIT, END, START, Section, compose, execute, named_capture, one_or_more,
//! };
//!
//! let key = named_capture(&one_or_more(&ALPHANUM, false), "key")
//!     .expect("example ensures fallible call succeeds");
//! let value = named_capture(&one_or_more(&DIGIT, false), "value")
//!     .expect("example ensures fallible call succeeds");
//! let assignment = compose([
//!     Section::from(&*START),
//!     Section::from(key),
//!     Section::from("="),
//!     Section::from(value),
//!     Section::from(&*END),
//! ])
//! .expect("example ensures fallible call succeeds");
//!
//! let matched = execute(&assignment, "retries=5")
//!     .expect("example ensures fallible call succeeds")
//!     .expect("subject should match");
//! assert_eq!(matched.by_name("key").expect("registered"), Some("retries"));
//! assert_eq!(matched.by_name("value").expect("registered"), Some("5"));
//! ```

mod captures;
mod classes;
mod combinators;
mod errors;
mod escape;
mod execute;
mod flags;
mod fragment;

pub use captures::CaptureMap;
pub use classes::{
    ALPHANUM, ANY, DIGIT, END, IN_WORD, NOT_ALPHANUM, NOT_WHITESPACE, START, WHITESPACE,
    WORD_BOUND,
};
pub use combinators::{
    alternate, char_in, char_not_in, exactly, named_capture, one_or_more, optional, repeat,
    zero_or_more,
};
pub use errors::PatternError;
pub use escape::{ClassItem, class_body, escape_literal};
pub use execute::{MatchView, execute, execute_all};
pub use flags::{Flag, Flags};
pub use fragment::{Fragment, Section, compose, compose_flagged};
