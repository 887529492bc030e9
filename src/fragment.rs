//! The immutable pattern-fragment value type and the fragment composer.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::captures::CaptureMap;
use crate::errors::PatternError;
use crate::escape::escape_literal;
use crate::flags::{Flag, Flags};

/// An immutable, composable pattern expression.
///
/// A fragment carries the raw engine source it compiles to, a set of
/// matching-mode flags, and an ordered table mapping capture names to the
/// numbered groups in that source. Fragments never change after
/// construction; every builder operation returns a new one, so fragments can
/// be shared and reused freely, including across threads.
///
/// Compilation is lazy: the engine regex is built on first execution and
/// cached in the fragment for subsequent runs.
#[derive(Debug, Clone)]
pub struct Fragment {
    source: String,
    flags: Flags,
    captures: CaptureMap,
    compiled: OnceLock<Regex>,
}

impl Fragment {
    pub(crate) fn from_parts(source: String, flags: Flags, captures: CaptureMap) -> Self {
        Self {
            source,
            flags,
            captures,
            compiled: OnceLock::new(),
        }
    }

    /// Fragment around raw engine syntax with no tracked captures.
    pub(crate) fn raw(source: &str) -> Self {
        Self::from_parts(source.to_string(), Flags::default(), CaptureMap::new())
    }

    /// The raw pattern source this fragment compiles to.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The matching-mode flags attached to this fragment.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The name-to-group-index table for this fragment's named captures.
    #[must_use]
    pub fn captures(&self) -> &CaptureMap {
        &self.captures
    }

    /// The compiled engine regex, built on first use and cached.
    pub(crate) fn regex(&self) -> Result<&Regex, PatternError> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }
        let regex = self.compile()?;
        Ok(self.compiled.get_or_init(|| regex))
    }

    fn compile(&self) -> Result<Regex, PatternError> {
        // `\A(?:…)` anchors without adding capturing groups, so the table's
        // indices stay valid.
        let source = if self.flags.contains(Flag::Sticky) {
            format!(r"\A(?:{})", self.source)
        } else {
            self.source.clone()
        };
        let mut builder = RegexBuilder::new(&source);
        if self.flags.contains(Flag::IgnoreCase) {
            builder.case_insensitive(true);
        }
        if self.flags.contains(Flag::Multiline) {
            builder.multi_line(true);
        }
        if self.flags.contains(Flag::Unicode) {
            builder.unicode(true);
        }
        builder.build().map_err(PatternError::from)
    }
}

/// One element of a composition: literal text or a pre-built fragment.
#[derive(Debug, Clone)]
pub enum Section {
    /// Literal text, escaped before it is spliced into pattern source.
    Literal(String),
    /// A pre-built fragment, spliced verbatim.
    Fragment(Fragment),
}

impl From<&str> for Section {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Section {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<char> for Section {
    fn from(ch: char) -> Self {
        Self::Literal(ch.to_string())
    }
}

impl From<i64> for Section {
    fn from(number: i64) -> Self {
        Self::Literal(number.to_string())
    }
}

impl From<Fragment> for Section {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&Fragment> for Section {
    fn from(fragment: &Fragment) -> Self {
        Self::Fragment(fragment.clone())
    }
}

/// Concatenate literal and fragment sections into one new fragment.
///
/// Literal sections are escaped and wrapped in a non-capturing group;
/// fragment sections contribute their source verbatim and have their capture
/// tables merged at the running group offset. A single section composes to
/// its bare concatenation (pass-through adds no nesting); multiple sections
/// gain one outer non-capturing wrap so the whole composition can be
/// quantified safely by later consumers.
///
/// # Errors
/// Returns [`PatternError::DuplicateCaptureName`] when two sections bind the
/// same capture name.
///
/// # Examples
/// ```
/// use regex_compose::{compose, Section};
///
/// let literal = compose([Section::from("a+b")])
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(literal.source(), r"(?:a\+b)");
///
/// let pair = compose([Section::from("abc"), Section::from(&literal)])
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(pair.source(), r"(?:(?:abc)(?:a\+b))");
/// ```
pub fn compose<I>(sections: I) -> Result<Fragment, PatternError>
where
    I: IntoIterator<Item = Section>,
{
    compose_inner(sections, Flags::default(), false)
}

/// [`compose`] with matching-mode flags applied to the result.
///
/// An empty flag list behaves exactly like no flags. Flags of embedded
/// fragment sections are not inherited; only the flags given here reach the
/// compiled pattern.
///
/// # Errors
/// Returns [`PatternError::DuplicateFlag`] when a flag token repeats and
/// [`PatternError::DuplicateCaptureName`] when two sections bind the same
/// capture name.
pub fn compose_flagged<I>(sections: I, flags: &[Flag]) -> Result<Fragment, PatternError>
where
    I: IntoIterator<Item = Section>,
{
    let set = Flags::from_tokens(flags)?;
    compose_inner(sections, set, !flags.is_empty())
}

fn compose_inner<I>(sections: I, flags: Flags, flagged: bool) -> Result<Fragment, PatternError>
where
    I: IntoIterator<Item = Section>,
{
    let mut concatenation = String::new();
    let mut captures = CaptureMap::new();
    let mut offset = 0usize;
    let mut count = 0usize;
    for section in sections {
        count += 1;
        match section {
            Section::Literal(text) => {
                concatenation.push_str("(?:");
                concatenation.push_str(&escape_literal(&text));
                concatenation.push(')');
            }
            Section::Fragment(fragment) => {
                captures.merge(fragment.captures(), offset)?;
                offset += fragment.captures().len();
                concatenation.push_str(fragment.source());
            }
        }
    }
    let source = if count == 1 && !flagged {
        concatenation
    } else {
        format!("(?:{concatenation})")
    };
    Ok(Fragment::from_parts(source, flags, captures))
}
