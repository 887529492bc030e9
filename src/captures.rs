//! Ordered name-to-index tables for named capture groups.
//!
//! Every fragment carries one of these tables as a partial, name-addressable
//! view over the engine's positional groups: anonymous numbered groups are
//! permitted in fragment source and simply stay untracked. Indices are
//! contiguous from zero while a fragment stands alone and are renumbered by
//! [`merge`](CaptureMap::merge) whenever the fragment is embedded in a larger
//! composition that introduces groups before it.

use crate::errors::PatternError;

/// Ordered mapping from capture-group name to zero-based group index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureMap {
    entries: Vec<(String, usize)>,
}

impl CaptureMap {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of named groups in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table tracks no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The positional index bound to `name`, if registered.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.as_str() == name)
            .map(|(_, index)| *index)
    }

    /// Iterate over `(name, index)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, index)| (name.as_str(), *index))
    }

    pub(crate) fn insert(&mut self, name: String, index: usize) -> Result<(), PatternError> {
        if self.index_of(&name).is_some() {
            return Err(PatternError::DuplicateCaptureName(name));
        }
        self.entries.push((name, index));
        Ok(())
    }

    /// Append `other`'s entries shifted by `offset`, preserving their order.
    ///
    /// `offset` is the count of capturing groups already merged into `self`'s
    /// source ahead of `other`'s. A name collision aborts the merge.
    pub(crate) fn merge(&mut self, other: &Self, offset: usize) -> Result<(), PatternError> {
        for (name, index) in other.iter() {
            self.insert(name.to_string(), index + offset)?;
        }
        Ok(())
    }

    /// Table for a fragment newly wrapped in a capturing group: `name` maps
    /// to index 0 and every `inner` entry shifts up by one.
    pub(crate) fn with_group_at_front(name: &str, inner: &Self) -> Result<Self, PatternError> {
        let mut table = Self::new();
        table.insert(name.to_string(), 0)?;
        table.merge(inner, 1)?;
        Ok(table)
    }
}
