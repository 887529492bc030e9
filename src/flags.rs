//! Matching-mode flag tokens and the per-fragment flag set.

use std::fmt;

use crate::errors::PatternError;

/// One matching-mode token.
///
/// Flags are order-independent and may appear at most once per request;
/// a repeated token is rejected rather than deduplicated. Because the
/// `regex` crate has no runtime equivalent of the source platform's `g`
/// and `y` modes, two tokens translate into executor behaviour instead of
/// compiler options: [`Flag::Sticky`] anchors the compiled pattern to the
/// subject start, and [`Flag::Global`] marks a fragment whose callers want
/// the repeat-scan offered by [`execute_all`](crate::execute_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Repeat-scan mode; meaningful to [`execute_all`](crate::execute_all),
    /// a no-op for single-shot execution.
    Global,
    /// Case-insensitive matching.
    IgnoreCase,
    /// `^` and `$` match at line boundaries as well as subject boundaries.
    Multiline,
    /// Unicode-aware character classes. This is the engine's default; the
    /// token is accepted for API parity and pins the default explicitly.
    Unicode,
    /// Matching must begin at the start of the subject.
    Sticky,
}

impl Flag {
    /// Canonical token name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::IgnoreCase => "IGNORE_CASE",
            Self::Multiline => "MULTILINE",
            Self::Unicode => "UNICODE",
            Self::Sticky => "STICKY",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of flags attached to a fragment, each present at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    global: bool,
    ignore_case: bool,
    multiline: bool,
    unicode: bool,
    sticky: bool,
}

impl Flags {
    /// Collect `tokens` into a set, rejecting duplicates.
    pub(crate) fn from_tokens(tokens: &[Flag]) -> Result<Self, PatternError> {
        let mut set = Self::default();
        for &flag in tokens {
            set.insert(flag)?;
        }
        Ok(set)
    }

    fn slot(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::Global => &mut self.global,
            Flag::IgnoreCase => &mut self.ignore_case,
            Flag::Multiline => &mut self.multiline,
            Flag::Unicode => &mut self.unicode,
            Flag::Sticky => &mut self.sticky,
        }
    }

    pub(crate) fn insert(&mut self, flag: Flag) -> Result<(), PatternError> {
        let slot = self.slot(flag);
        if *slot {
            return Err(PatternError::DuplicateFlag(flag));
        }
        *slot = true;
        Ok(())
    }

    /// Whether `flag` is present in the set.
    #[must_use]
    pub const fn contains(self, flag: Flag) -> bool {
        match flag {
            Flag::Global => self.global,
            Flag::IgnoreCase => self.ignore_case,
            Flag::Multiline => self.multiline,
            Flag::Unicode => self.unicode,
            Flag::Sticky => self.sticky,
        }
    }

    /// Whether no flags are set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}
