//! Tag model

use std::collections::BTreeSet;
use std::fmt;

/// Category label attached to a journal entry
///
/// Variant order is the order tags are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Documentation,
    Bugfix,
    Code,
    Test,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Documentation => "documentation",
            Tag::Bugfix => "bugfix",
            Tag::Code => "code",
            Tag::Test => "test",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of tags derived from one commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Placeholder rendered for an empty set
    pub const NONE: &'static str = "none";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0.insert(tag);
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    /// Space-joined labels, or `none`
    pub fn display(&self) -> String {
        if self.0.is_empty() {
            Self::NONE.to_string()
        } else {
            self.0
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
