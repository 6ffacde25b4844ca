//! Strategies that cut a delimited string into pieces.
//!
//! A [`Splitter`] must be deterministic and total: every input, including
//! malformed or unbalanced input, splits into some (possibly empty) sequence.
//! An empty input always yields an empty sequence, so "no value" and "empty
//! list" are the same thing to a list type.
//!
//! [`DelimitedSplitter`] is driven by a serde-friendly [`SplitterConfig`]:
//!
//! ```
//! use argmap_core::{DelimitedSplitter, Splitter, SplitterConfig};
//!
//! let config: SplitterConfig =
//!     serde_json::from_str(r#"{ "separators": "|", "open": "<", "close": ">" }"#).unwrap();
//! let splitter = DelimitedSplitter::new(config).unwrap();
//! assert_eq!(splitter.split("<a|b<c|d>>"), vec!["a", "b<c|d>"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArgumentError, Result};

/// Cuts a raw string into ordered pieces.
pub trait Splitter: Clone + fmt::Debug + Send + Sync + 'static {
    fn split(&self, raw: &str) -> Vec<String>;

    /// Inverse of [`split`](Splitter::split) for well-formed pieces.
    fn join(&self, parts: &[String]) -> String;
}

/// Settings for a [`DelimitedSplitter`].
///
/// `open` and `close` list matching bracket characters by position; a
/// separator inside brackets does not split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Every character here separates two pieces.
    pub separators: String,
    /// Opening bracket characters.
    pub open: String,
    /// Closing bracket characters, matched to `open` by position.
    pub close: String,
    /// Trim whitespace around the input and around every piece.
    pub trim: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            separators: ",".to_string(),
            open: String::new(),
            close: String::new(),
            trim: true,
        }
    }
}

/// Separator- and bracket-aware splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedSplitter {
    separators: Vec<char>,
    open: Vec<char>,
    close: Vec<char>,
    trim: bool,
}

impl DelimitedSplitter {
    /// Builds a splitter from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if there is no separator,
    /// if `open` and `close` have different lengths, or if a character is
    /// used both as a separator and as a bracket.
    pub fn new(config: SplitterConfig) -> Result<Self> {
        let separators: Vec<char> = config.separators.chars().collect();
        let open: Vec<char> = config.open.chars().collect();
        let close: Vec<char> = config.close.chars().collect();

        if separators.is_empty() {
            return Err(ArgumentError::InvalidArgument(
                "no separator has been given".to_string(),
            ));
        }
        if open.len() != close.len() {
            return Err(ArgumentError::InvalidArgument(format!(
                "unbalanced brackets: '{}' vs '{}'",
                config.open, config.close
            )));
        }
        if let Some(c) = separators
            .iter()
            .find(|c| open.contains(c) || close.contains(c))
        {
            return Err(ArgumentError::InvalidArgument(format!(
                "'{c}' is used both as a separator and as a bracket"
            )));
        }

        Ok(Self {
            separators,
            open,
            close,
            trim: config.trim,
        })
    }

    /// Comma separated, no brackets.
    pub fn comma() -> Self {
        Self::preset(',')
    }

    /// Semicolon separated, no brackets. Pairs with [`comma`](Self::comma)
    /// for two-level lists.
    pub fn semicolon() -> Self {
        Self::preset(';')
    }

    /// Comma separated with `()`, `[]` and `{}` nesting. One bracket pair
    /// enclosing the whole input is stripped.
    pub fn bracketed() -> Self {
        Self {
            separators: vec![','],
            open: vec!['(', '[', '{'],
            close: vec![')', ']', '}'],
            trim: true,
        }
    }

    fn preset(separator: char) -> Self {
        Self {
            separators: vec![separator],
            open: Vec::new(),
            close: Vec::new(),
            trim: true,
        }
    }

    /// Returns the configuration this splitter was built from.
    pub fn config(&self) -> SplitterConfig {
        SplitterConfig {
            separators: self.separators.iter().collect(),
            open: self.open.iter().collect(),
            close: self.close.iter().collect(),
            trim: self.trim,
        }
    }

    fn piece<'a>(&self, s: &'a str) -> &'a str {
        if self.trim { s.trim() } else { s }
    }

    /// Removes one bracket pair if it encloses the whole input.
    fn strip_enclosing<'a>(&self, s: &'a str) -> &'a str {
        let mut chars = s.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            return s;
        };
        let Some(kind) = self.open.iter().position(|&c| c == first) else {
            return s;
        };
        if self.close[kind] != last {
            return s;
        }

        let inner = &s[first.len_utf8()..s.len() - last.len_utf8()];
        let mut depth = 0usize;
        for c in inner.chars() {
            if self.open.contains(&c) {
                depth += 1;
            } else if self.close.contains(&c) {
                if depth == 0 {
                    // the leading bracket closes before the end
                    return s;
                }
                depth -= 1;
            }
        }
        if depth == 0 { inner } else { s }
    }
}

impl Default for DelimitedSplitter {
    fn default() -> Self {
        Self::comma()
    }
}

impl Splitter for DelimitedSplitter {
    fn split(&self, raw: &str) -> Vec<String> {
        let s = self.piece(raw);
        let s = self.piece(self.strip_enclosing(s));
        if s.is_empty() {
            return Vec::new();
        }

        let mut parts = Vec::new();
        let mut current = String::new();
        let mut depth = 0usize;
        for c in s.chars() {
            if self.open.contains(&c) {
                depth += 1;
                current.push(c);
            } else if self.close.contains(&c) {
                depth = depth.saturating_sub(1);
                current.push(c);
            } else if depth == 0 && self.separators.contains(&c) {
                parts.push(self.piece(&current).to_string());
                current.clear();
            } else {
                current.push(c);
            }
        }
        parts.push(self.piece(&current).to_string());

        tracing::trace!(raw, pieces = parts.len(), "split delimited value");
        parts
    }

    fn join(&self, parts: &[String]) -> String {
        let separator = self.separators[0].to_string();
        let wrap = self.open.first().zip(self.close.first());
        parts
            .iter()
            .map(|part| match wrap {
                Some((open, close)) if part.contains(&self.separators[..]) => {
                    format!("{open}{part}{close}")
                }
                _ => part.clone(),
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_empty_sequence() {
        assert!(DelimitedSplitter::comma().split("").is_empty());
        assert!(DelimitedSplitter::comma().split("   ").is_empty());
        assert!(DelimitedSplitter::bracketed().split("[]").is_empty());
    }

    #[test]
    fn test_trims_pieces() {
        assert_eq!(
            DelimitedSplitter::comma().split(" 1 , 2,3 "),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn test_keeps_empty_pieces() {
        assert_eq!(DelimitedSplitter::comma().split("1,,2"), vec!["1", "", "2"]);
        assert_eq!(DelimitedSplitter::comma().split("1,"), vec!["1", ""]);
    }

    #[test]
    fn test_bracketed_nesting() {
        let splitter = DelimitedSplitter::bracketed();
        assert_eq!(
            splitter.split("[(1,2),(3,4,5)]"),
            vec!["(1,2)", "(3,4,5)"]
        );
        assert_eq!(splitter.split("(1,2)"), vec!["1", "2"]);
        // not a single enclosing pair
        assert_eq!(splitter.split("(1),(2)"), vec!["(1)", "(2)"]);
    }

    #[test]
    fn test_unbalanced_input_still_splits() {
        let splitter = DelimitedSplitter::bracketed();
        assert_eq!(splitter.split("1),(2"), vec!["1)", "(2"]);
        assert_eq!(splitter.split("((1,2"), vec!["((1,2"]);
    }

    #[test]
    fn test_join_wraps_nested_pieces() {
        let splitter = DelimitedSplitter::bracketed();
        let parts = vec!["1,2".to_string(), "3".to_string()];
        assert_eq!(splitter.join(&parts), "(1,2),3");
        assert_eq!(DelimitedSplitter::semicolon().join(&parts), "1,2;3");
    }

    #[test]
    fn test_rejects_bad_config() {
        let no_sep = SplitterConfig {
            separators: String::new(),
            ..SplitterConfig::default()
        };
        assert!(matches!(
            DelimitedSplitter::new(no_sep),
            Err(ArgumentError::InvalidArgument(_))
        ));

        let unbalanced = SplitterConfig {
            open: "([".into(),
            close: ")".into(),
            ..SplitterConfig::default()
        };
        assert!(DelimitedSplitter::new(unbalanced).is_err());

        let clash = SplitterConfig {
            separators: ",(".into(),
            open: "(".into(),
            close: ")".into(),
            ..SplitterConfig::default()
        };
        assert!(DelimitedSplitter::new(clash).is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
separators: ";"
trim: false
"#;
        let config: SplitterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.separators, ";");
        assert!(config.open.is_empty());
        let splitter = DelimitedSplitter::new(config.clone()).unwrap();
        assert_eq!(splitter.split(" a ; b"), vec![" a ", " b"]);
        assert_eq!(splitter.config(), config);
    }
}
