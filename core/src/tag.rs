use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered aliases naming one logical argument (e.g. `--block-size`, `-K`).
///
/// Tags are compared as whole sequences, so `["--block-size", "-K"]` and
/// `["-K", "--block-size"]` are two different keys. Alias order only matters
/// for display.
///
/// # Examples
///
/// ```
/// use argmap_core::Tag;
///
/// let tag = Tag::from(["--block-size", "-K"]);
/// assert_eq!(tag.primary(), Some("--block-size"));
/// assert!(tag.matches("-K"));
/// assert_eq!(tag.to_string(), "--block-size, -K");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Vec<String>);

impl Tag {
    /// Creates a tag from any sequence of aliases.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(aliases.into_iter().map(Into::into).collect())
    }

    /// Returns the aliases in insertion order.
    pub fn aliases(&self) -> &[String] {
        &self.0
    }

    /// Returns the first alias, used as the display name.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns `true` if any alias equals `alias`.
    pub fn matches(&self, alias: &str) -> bool {
        self.0.iter().any(|a| a == alias)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl From<&str> for Tag {
    fn from(alias: &str) -> Self {
        Self(vec![alias.to_string()])
    }
}

impl From<String> for Tag {
    fn from(alias: String) -> Self {
        Self(vec![alias])
    }
}

impl From<Vec<String>> for Tag {
    fn from(aliases: Vec<String>) -> Self {
        Self(aliases)
    }
}

impl From<Vec<&str>> for Tag {
    fn from(aliases: Vec<&str>) -> Self {
        Self::new(aliases)
    }
}

impl From<&[&str]> for Tag {
    fn from(aliases: &[&str]) -> Self {
        Self::new(aliases.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Tag {
    fn from(aliases: [&str; N]) -> Self {
        Self::new(aliases)
    }
}

impl From<&Tag> for Tag {
    fn from(tag: &Tag) -> Self {
        tag.clone()
    }
}
