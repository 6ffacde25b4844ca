use std::collections::BTreeMap;

use crate::Tag;
use crate::error::{ArgumentError, Result};

/// Raw strings supplied for each tag, before conversion.
///
/// Values are plain data filled in by the parsing layer. The numeric
/// accessors are a convenience for arguments that were already validated
/// through their [`Definitions`](crate::Definitions) entry: a stored string
/// that does not parse yields `0` / `0.0`, while a tag with no stored value
/// is reported as [`ArgumentError::KeyNotFound`].
///
/// # Examples
///
/// ```
/// use argmap_core::{ArgumentError, Tag, Values};
///
/// let k = Tag::from(["--block-size", "-K"]);
/// let mut values = Values::new();
/// values.add(k.clone(), "32").unwrap();
///
/// assert_eq!(values.to_int(&k).unwrap(), 32);
/// assert!(matches!(
///     values.to_int(&Tag::from("--snr")),
///     Err(ArgumentError::KeyNotFound(_))
/// ));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: BTreeMap<Tag, String>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raw` for `tags`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if `tags` is empty.
    pub fn add(&mut self, tags: impl Into<Tag>, raw: impl Into<String>) -> Result<()> {
        let tags = tags.into();
        if tags.is_empty() {
            return Err(ArgumentError::InvalidArgument(
                "no tag has been given".to_string(),
            ));
        }
        if let Some(previous) = self.entries.insert(tags.clone(), raw.into()) {
            tracing::debug!(tag = %tags, previous = %previous, "value overwritten");
        }
        Ok(())
    }

    pub fn exists(&self, tags: &Tag) -> bool {
        self.entries.contains_key(tags)
    }

    pub fn get(&self, tags: &Tag) -> Option<&str> {
        self.entries.get(tags).map(String::as_str)
    }

    pub fn remove(&mut self, tags: &Tag) -> Option<String> {
        self.entries.remove(tags)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &str)> {
        self.entries.iter().map(|(t, v)| (t, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Integer value of an argument, `0` if the stored string is not an
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::KeyNotFound`] if no value is stored for
    /// `tags`.
    pub fn to_int(&self, tags: &Tag) -> Result<i64> {
        let raw = self.require(tags)?;
        Ok(raw.trim().parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!(tag = %tags, raw, "value is not an integer, defaulting to 0");
            0
        }))
    }

    /// Floating-point value of an argument, `0.0` if the stored string is
    /// not a number.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::KeyNotFound`] if no value is stored for
    /// `tags`.
    pub fn to_float(&self, tags: &Tag) -> Result<f64> {
        let raw = self.require(tags)?;
        Ok(raw.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(tag = %tags, raw, "value is not a number, defaulting to 0.0");
            0.0
        }))
    }

    /// Adds every pair through [`add`](Values::add), stopping at the first
    /// rejected pair. Pairs before it stay stored.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if a tag is empty.
    pub fn extend<I, T, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<Tag>,
        V: Into<String>,
    {
        for (tags, raw) in pairs {
            self.add(tags, raw)?;
        }
        Ok(())
    }

    fn require(&self, tags: &Tag) -> Result<&str> {
        self.get(tags)
            .ok_or_else(|| ArgumentError::KeyNotFound(tags.clone()))
    }
}
