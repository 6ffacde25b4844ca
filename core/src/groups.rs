use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Tag;
use crate::error::{ArgumentError, Result};

/// Section titles keyed by a short prefix, used to organize help output.
///
/// Groups carry no validation semantics. A definition belongs to the group
/// whose prefix is the longest prefix of its tag's first alias, leading
/// dashes excluded (see [`group_of`](Groups::group_of)).
///
/// # Examples
///
/// ```
/// use argmap_core::{Groups, Tag};
///
/// let mut groups = Groups::new();
/// groups.add("sim", "Simulator parameters").unwrap();
/// groups.add("sim-noise", "Noise parameters").unwrap();
///
/// let (prefix, title) = groups.group_of(&Tag::from(["--sim-noise-min"])).unwrap();
/// assert_eq!(prefix, "sim-noise");
/// assert_eq!(title, "Noise parameters");
/// assert!(groups.add("", "Untitled").is_err());
/// ```
///
/// Deserializing goes through [`add`](Groups::add), so a map with an empty
/// prefix or title is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Groups {
    entries: BTreeMap<String, String>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a group.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if `prefix` or `title` is
    /// empty.
    pub fn add(&mut self, prefix: impl Into<String>, title: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        let title = title.into();

        if prefix.is_empty() {
            return Err(ArgumentError::InvalidArgument(
                "no prefix has been given".to_string(),
            ));
        }
        if title.is_empty() {
            return Err(ArgumentError::InvalidArgument(
                "no title has been given".to_string(),
            ));
        }

        if let Some(previous) = self.entries.insert(prefix.clone(), title) {
            tracing::debug!(prefix = %prefix, previous = %previous, "group title overwritten");
        }
        Ok(())
    }

    pub fn exists(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn remove(&mut self, prefix: &str) -> Option<String> {
        self.entries.remove(prefix)
    }

    /// Iterates over `(prefix, title)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, t)| (p.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the group a tag belongs to, as `(prefix, title)`.
    pub fn group_of(&self, tag: &Tag) -> Option<(&str, &str)> {
        let name = tag.primary()?.trim_start_matches('-');
        self.iter()
            .filter(|(prefix, _)| name.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
    }
}

impl TryFrom<BTreeMap<String, String>> for Groups {
    type Error = ArgumentError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self> {
        let mut groups = Groups::new();
        for (prefix, title) in entries {
            groups.add(prefix, title)?;
        }
        Ok(groups)
    }
}

impl From<Groups> for BTreeMap<String, String> {
    fn from(groups: Groups) -> Self {
        groups.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_empty_strings() {
        let mut groups = Groups::new();
        assert!(matches!(
            groups.add("", "Title"),
            Err(ArgumentError::InvalidArgument(_))
        ));
        assert!(matches!(
            groups.add("enc", ""),
            Err(ArgumentError::InvalidArgument(_))
        ));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_add_overwrites() {
        let mut groups = Groups::new();
        groups.add("enc", "Encoder").unwrap();
        groups.add("enc", "Encoder parameters").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("enc"), Some("Encoder parameters"));
    }

    #[test]
    fn test_exists() {
        let mut groups = Groups::new();
        assert!(!groups.exists("dec"));
        groups.add("dec", "Decoder").unwrap();
        assert!(groups.exists("dec"));
    }

    #[test]
    fn test_group_of_without_match() {
        let mut groups = Groups::new();
        groups.add("enc", "Encoder").unwrap();
        assert_eq!(groups.group_of(&Tag::from(["--dec-type"])), None);
        assert_eq!(groups.group_of(&Tag::default()), None);
    }

    #[test]
    fn test_serializes_as_map() {
        let mut groups = Groups::new();
        groups.add("enc", "Encoder").unwrap();
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"{"enc":"Encoder"}"#);
        let back: Groups = serde_json::from_str(&json).unwrap();
        assert_eq!(back, groups);
    }

    #[test]
    fn test_deserialize_rejects_empty_strings() {
        assert!(serde_json::from_str::<Groups>(r#"{"": "Untitled"}"#).is_err());
        assert!(serde_json::from_str::<Groups>(r#"{"enc": ""}"#).is_err());

        let groups: Groups = serde_json::from_str(r#"{"enc": "Encoder"}"#).unwrap();
        assert_eq!(groups.group_of(&Tag::from(["--dec-type"])), None);
    }
}
