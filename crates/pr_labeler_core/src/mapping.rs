//! Issue type to label mapping.
//!
//! The mapping document lives in the repository being labeled. It is a flat
//! table from issue type name to label name:
//!
//! ```yaml
//! Bug: bugfix
//! Story: feature
//! Tech Task: techtask
//! ```
//!
//! YAML is the default format. Documents whose path ends in `.toml` are read
//! as TOML, where keys containing spaces must be quoted:
//!
//! ```toml
//! Bug = "bugfix"
//! "Tech Task" = "techtask"
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;

/// Reasons a document is rejected as a label mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The document is not valid YAML.
    #[error("document is not valid YAML: {0}")]
    InvalidYaml(String),

    /// The document is not valid TOML.
    #[error("document is not valid TOML: {0}")]
    InvalidToml(String),

    /// The document contains no data or an empty mapping.
    #[error("document is empty")]
    Empty,

    /// The top level of the document is not a mapping.
    #[error("expected a mapping of issue types to labels, found {0}")]
    NotAMapping(&'static str),

    /// A key is not a string.
    #[error("key {0} is not a string")]
    NonStringKey(String),

    /// A value is not a string.
    #[error("label for '{key}' is not a string")]
    NonStringValue {
        /// The key whose value was rejected.
        key: String,
    },

    /// A value is an empty or whitespace-only string.
    #[error("label for '{key}' is blank")]
    BlankLabel {
        /// The key whose value was rejected.
        key: String,
    },
}

/// Format of a mapping document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML document
    Yaml,
    /// TOML document
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the document path: `.toml` selects TOML,
    /// anything else YAML.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".toml") {
            DocumentFormat::Toml
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// A validated table from issue type name to label name.
///
/// Construct it through [`LabelMapping::parse`] (or `FromIterator` in code);
/// it cannot be modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMapping {
    labels: BTreeMap<String, String>,
}

impl LabelMapping {
    /// Parse and validate a mapping document.
    ///
    /// # Errors
    /// Returns a [`MappingError`] when the document cannot be parsed, has no
    /// entries, is not a flat mapping of strings to strings, or maps an issue
    /// type to a blank label.
    pub fn parse(document: &str, format: DocumentFormat) -> Result<Self, MappingError> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(document),
            DocumentFormat::Toml => Self::from_toml_str(document),
        }
    }

    /// Parse a YAML mapping document.
    pub fn from_yaml_str(document: &str) -> Result<Self, MappingError> {
        use serde_yaml::Value;

        if document.trim().is_empty() {
            return Err(MappingError::Empty);
        }

        let value: Value = serde_yaml::from_str(document)
            .map_err(|e| MappingError::InvalidYaml(e.to_string()))?;

        let mapping = match value {
            Value::Mapping(mapping) if mapping.is_empty() => return Err(MappingError::Empty),
            Value::Mapping(mapping) => mapping,
            Value::Null => return Err(MappingError::Empty),
            Value::Sequence(_) => return Err(MappingError::NotAMapping("a list")),
            Value::String(_) => return Err(MappingError::NotAMapping("a string")),
            Value::Bool(_) | Value::Number(_) => return Err(MappingError::NotAMapping("a scalar")),
            Value::Tagged(_) => return Err(MappingError::NotAMapping("a tagged value")),
        };

        let mut labels = BTreeMap::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(key) => key,
                other => return Err(MappingError::NonStringKey(format!("{:?}", other))),
            };
            let label = match value {
                Value::String(label) => label,
                _ => return Err(MappingError::NonStringValue { key }),
            };
            insert_label(&mut labels, key, label)?;
        }

        Ok(Self { labels })
    }

    /// Parse a TOML mapping document.
    pub fn from_toml_str(document: &str) -> Result<Self, MappingError> {
        let table: toml::Table =
            toml::from_str(document).map_err(|e| MappingError::InvalidToml(e.to_string()))?;

        if table.is_empty() {
            return Err(MappingError::Empty);
        }

        let mut labels = BTreeMap::new();
        for (key, value) in table {
            let label = match value {
                toml::Value::String(label) => label,
                _ => return Err(MappingError::NonStringValue { key }),
            };
            insert_label(&mut labels, key, label)?;
        }

        Ok(Self { labels })
    }

    /// Look up the label for an issue type.
    ///
    /// Lookups are exact and case sensitive. A missing entry is not an error.
    pub fn resolve(&self, classification: &str) -> Option<&str> {
        self.labels.get(classification).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(issue type, label)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn insert_label(
    labels: &mut BTreeMap<String, String>,
    key: String,
    label: String,
) -> Result<(), MappingError> {
    if label.trim().is_empty() {
        return Err(MappingError::BlankLabel { key });
    }
    labels.insert(key, label);
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for LabelMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
