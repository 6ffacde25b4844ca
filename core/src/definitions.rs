//! Registry of argument definitions.
//!
//! [`Definitions`] owns one boxed [`ArgumentType`] per [`Tag`] together with
//! its documentation. Cloning the registry deep-clones every type, so a copy
//! never shares ranges or element types with the original. Dropping or
//! clearing the registry releases every owned type exactly once.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::argument_type::{ArgumentType, TypedArgument};
use crate::error::{ArgumentError, Result};
use crate::{Groups, Tag, Values};

/// One registered argument: its type and documentation.
#[derive(Debug, Clone)]
pub struct Definition {
    arg_type: Box<dyn ArgumentType>,
    doc: String,
}

impl Definition {
    pub fn new(arg_type: Box<dyn ArgumentType>, doc: impl Into<String>) -> Self {
        Self {
            arg_type,
            doc: doc.into(),
        }
    }

    pub fn arg_type(&self) -> &dyn ArgumentType {
        self.arg_type.as_ref()
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }
}

/// Row handed to the help renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    pub tags: Tag,
    pub title: String,
    pub short_title: String,
    pub doc: String,
    /// Title of the group the tag belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl HelpEntry {
    /// JSON object with the same fields as the serialized entry, for help
    /// renderers that consume JSON. `group` is omitted when there is none.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Owning map from [`Tag`] to [`Definition`].
///
/// # Examples
///
/// ```
/// use argmap_core::*;
///
/// let mut defs = Definitions::new();
/// defs.add_type(
///     ["--block-size", "-K"],
///     Limited::new(Integer).with_range(Between::new(1, 64)),
///     "Number of information bits.",
/// )
/// .unwrap();
///
/// let k = Tag::from(["--block-size", "-K"]);
/// assert!(defs.exists(&k));
/// assert_eq!(defs.get(&k).unwrap().arg_type().title(), "integer [1..64]");
///
/// // The copy owns its own types.
/// let copy = defs.clone();
/// defs.add_type(["--block-size", "-K"], Text, "Replaced.").unwrap();
/// assert_eq!(copy.get(&k).unwrap().doc(), "Number of information bits.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    entries: BTreeMap<Tag, Definition>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `arg_type` under `tags`, replacing any previous definition.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if `tags` is empty.
    pub fn add(
        &mut self,
        tags: impl Into<Tag>,
        arg_type: Box<dyn ArgumentType>,
        doc: impl Into<String>,
    ) -> Result<()> {
        let tags = tags.into();
        if tags.is_empty() {
            return Err(ArgumentError::InvalidArgument(
                "no tag has been given".to_string(),
            ));
        }

        let definition = Definition::new(arg_type, doc);
        if self.entries.insert(tags.clone(), definition).is_some() {
            tracing::debug!(tag = %tags, "definition overwritten");
        }
        Ok(())
    }

    /// Same as [`add`](Self::add) for an unboxed typed argument.
    pub fn add_type<A: TypedArgument>(
        &mut self,
        tags: impl Into<Tag>,
        arg_type: A,
        doc: impl Into<String>,
    ) -> Result<()> {
        self.add(tags, Box::new(arg_type), doc)
    }

    pub fn exists(&self, tags: &Tag) -> bool {
        self.entries.contains_key(tags)
    }

    pub fn get(&self, tags: &Tag) -> Option<&Definition> {
        self.entries.get(tags)
    }

    pub fn remove(&mut self, tags: &Tag) -> Option<Definition> {
        self.entries.remove(tags)
    }

    /// Finds the definition whose tag contains `alias`.
    pub fn find(&self, alias: &str) -> Option<(&Tag, &Definition)> {
        self.entries.iter().find(|(tag, _)| tag.matches(alias))
    }

    /// Iterates over definitions in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &Definition)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every definition and the types they own. Safe to call
    /// repeatedly.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Validates every stored value against its definition.
    ///
    /// Returns one error per offending value: [`ArgumentError::UnknownTag`]
    /// when no definition exists for the value's tag, and
    /// [`ArgumentError::Validation`] when the type rejects it.
    pub fn check_values(&self, values: &Values) -> Vec<ArgumentError> {
        let mut errors = Vec::new();

        for (tag, raw) in values.iter() {
            let Some(definition) = self.get(tag) else {
                errors.push(ArgumentError::UnknownTag(tag.clone()));
                continue;
            };
            if let Err(source) = definition.arg_type.check(raw) {
                tracing::debug!(tag = %tag, raw, error = %source, "value rejected");
                errors.push(ArgumentError::Validation {
                    tag: tag.clone(),
                    source,
                });
            }
        }

        errors
    }

    /// Builds help rows for every definition, resolving groups by prefix.
    pub fn help_entries(&self, groups: &Groups) -> Vec<HelpEntry> {
        self.entries
            .iter()
            .map(|(tag, definition)| HelpEntry {
                tags: tag.clone(),
                title: definition.arg_type.title(),
                short_title: definition.arg_type.short_title(),
                doc: definition.doc.clone(),
                group: groups.group_of(tag).map(|(_, title)| title.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Between, Integer, Limited, Text, ValidationError, list};

    fn k() -> Tag {
        Tag::from(["--block-size", "-K"])
    }

    #[test]
    fn test_add_rejects_empty_tag() {
        let mut defs = Definitions::new();
        let err = defs.add_type(Vec::<String>::new(), Integer, "doc").unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidArgument(_)));
        assert!(defs.is_empty());
    }

    #[test]
    fn test_exists_after_add() {
        let mut defs = Definitions::new();
        assert!(!defs.exists(&k()));
        defs.add(k(), Box::new(Integer), "doc").unwrap();
        assert!(defs.exists(&k()));
        assert!(!defs.exists(&Tag::from(["-K"])));
    }

    #[test]
    fn test_add_overwrites() {
        let mut defs = Definitions::new();
        defs.add_type(k(), Integer, "first").unwrap();
        defs.add_type(k(), Text, "second").unwrap();
        assert_eq!(defs.len(), 1);
        let def = defs.get(&k()).unwrap();
        assert_eq!(def.doc(), "second");
        assert_eq!(def.arg_type().title(), "text");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut defs = Definitions::new();
        defs.add_type(k(), list(Integer), "doc").unwrap();
        defs.clear();
        defs.clear();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_find_by_alias() {
        let mut defs = Definitions::new();
        defs.add_type(k(), Integer, "doc").unwrap();
        let (tag, _) = defs.find("-K").unwrap();
        assert_eq!(tag, &k());
        assert!(defs.find("-N").is_none());
    }

    #[test]
    fn test_check_values_reports_each_problem() {
        let mut defs = Definitions::new();
        defs.add_type(k(), Limited::new(Integer).with_range(Between::new(1, 64)), "doc")
            .unwrap();
        defs.add_type(["--names"], list(Text), "doc").unwrap();

        let mut values = Values::new();
        values.add(k(), "128").unwrap();
        values.add(["--names"], "a,b").unwrap();
        values.add(["--unknown"], "1").unwrap();

        let errors = defs.check_values(&values);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| matches!(
            e,
            ArgumentError::Validation { tag, source: ValidationError::Range { .. } } if *tag == k()
        )));
        assert!(errors.contains(&ArgumentError::UnknownTag(Tag::from(["--unknown"]))));
    }

    #[test]
    fn test_help_entries_resolve_groups() {
        let mut defs = Definitions::new();
        defs.add_type(["--sim-snr", "-s"], Limited::new(Integer), "SNR.")
            .unwrap();
        defs.add_type(["--dec-ite"], Integer, "Iterations.").unwrap();

        let mut groups = Groups::new();
        groups.add("sim", "Simulation").unwrap();

        let entries = defs.help_entries(&groups);
        assert_eq!(entries.len(), 2);
        let sim = entries.iter().find(|e| e.tags.matches("-s")).unwrap();
        assert_eq!(sim.group.as_deref(), Some("Simulation"));
        assert_eq!(sim.title, "integer");
        let dec = entries.iter().find(|e| e.tags.matches("--dec-ite")).unwrap();
        assert_eq!(dec.group, None);

        let json = sim.to_json().unwrap();
        assert_eq!(json["tags"][1], "-s");
        assert_eq!(json["group"], "Simulation");

        let json = dec.to_json().unwrap();
        assert!(json.get("group").is_none());
        assert_eq!(json, serde_json::to_value(dec).unwrap());
    }
}
