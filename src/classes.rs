//! Prebuilt single-token fragments.
//!
//! Each constant is already wrapped in a non-capturing group so it composes
//! and quantifies like any other fragment; none of them track captures or
//! carry flags.

use std::sync::LazyLock;

use crate::fragment::Fragment;

/// Any character except a line terminator.
pub static ANY: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw("(?:.)"));
/// A decimal digit.
pub static DIGIT: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\d)"));
/// The start of the subject (or of a line under [`Flag::Multiline`](crate::Flag::Multiline)).
pub static START: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw("(?:^)"));
/// The end of the subject (or of a line under [`Flag::Multiline`](crate::Flag::Multiline)).
pub static END: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw("(?:$)"));
/// A word character: letter, digit, or underscore.
pub static ALPHANUM: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\w)"));
/// Any character that is not a word character.
pub static NOT_ALPHANUM: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\W)"));
/// A whitespace character.
pub static WHITESPACE: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\s)"));
/// Any character that is not whitespace.
pub static NOT_WHITESPACE: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\S)"));
/// A word boundary (zero-width).
pub static WORD_BOUND: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\b)"));
/// A position that is not a word boundary (zero-width).
pub static IN_WORD: LazyLock<Fragment> = LazyLock::new(|| Fragment::raw(r"(?:\B)"));
