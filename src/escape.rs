//! Literal escaping and character-class rendering.
//!
//! The builder never parses third-party pattern syntax; the only raw text it
//! accepts is literal text from callers, which must be neutralised before it
//! is spliced into pattern source. [`regex::escape`] covers a wider character
//! set than this builder needs and leaves control characters as raw bytes, so
//! the escape table here is kept explicit: the fixed metacharacter set gets a
//! backslash prefix and control characters render as readable sequences the
//! engine accepts both inside and outside character classes.

use crate::errors::PatternError;

/// Characters with pattern-syntax meaning that must be escaped in literals.
const METACHARACTERS: &str = r"-/\^$*+?.()|[]{}";

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '\t' => out.push_str(r"\t"),
        '\r' => out.push_str(r"\r"),
        '\n' => out.push_str(r"\n"),
        '\u{B}' => out.push_str(r"\v"),
        '\u{C}' => out.push_str(r"\f"),
        // The engine rejects `[\b]` and bare `\0`; the hex spellings are
        // valid in every position, so no class-wrapping caveat is needed.
        '\u{8}' => out.push_str(r"\x08"),
        '\0' => out.push_str(r"\x00"),
        _ if METACHARACTERS.contains(ch) => {
            out.push('\\');
            out.push(ch);
        }
        _ => out.push(ch),
    }
}

/// Escape `text` so it can be spliced into pattern source as literal text.
///
/// # Examples
/// ```
/// use regex_compose::escape_literal;
/// assert_eq!(escape_literal("1+1=2"), r"1\+1=2");
/// assert_eq!(escape_literal("a\tb"), r"a\tb");
/// ```
#[must_use]
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut escaped, ch);
    }
    escaped
}

/// One member of a character class: a single character or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    /// A single character.
    Char(char),
    /// An inclusive `low-high` range.
    Range(char, char),
}

impl From<char> for ClassItem {
    fn from(ch: char) -> Self {
        Self::Char(ch)
    }
}

impl From<(char, char)> for ClassItem {
    fn from((low, high): (char, char)) -> Self {
        Self::Range(low, high)
    }
}

/// Render the escaped body of a character class, ranges as `low-high`.
///
/// # Errors
/// Returns [`PatternError::EmptyClass`] when `items` is empty (an empty class
/// is an engine syntax error) and [`PatternError::InvertedRange`] when a range
/// runs high-to-low.
pub fn class_body(items: &[ClassItem]) -> Result<String, PatternError> {
    if items.is_empty() {
        return Err(PatternError::EmptyClass);
    }
    let mut body = String::new();
    for &item in items {
        match item {
            ClassItem::Char(ch) => push_escaped(&mut body, ch),
            ClassItem::Range(low, high) => {
                if low > high {
                    return Err(PatternError::InvertedRange { low, high });
                }
                push_escaped(&mut body, low);
                body.push('-');
                push_escaped(&mut body, high);
            }
        }
    }
    Ok(body)
}
