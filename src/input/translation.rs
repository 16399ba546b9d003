//! Translation file input definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::types::Locale;

/// A node in a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A translated string.
    Leaf(String),
    /// A nested group of keys.
    Node(TranslationTree),
}

/// Read-only nested mapping of translation keys for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    /// Child nodes keyed by segment name.
    children: BTreeMap<String, TranslationNode>,
}

/// Errors produced while turning JSON into a [`TranslationTree`].
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The document root is an array, string, or other scalar.
    #[error("Translation document must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the root value.
        found: &'static str,
    },

    #[error("Failed to parse translation JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TranslationTree {
    /// Builds a tree from a JSON object.
    ///
    /// Strings become leaves and objects become nested nodes. Arrays become
    /// nodes keyed by element index (`"0"`, `"1"`, ...). Numbers, booleans
    /// and `null` carry no displayable text and are skipped.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use i18n_site::input::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_json(&json!({ "nav": { "home": "Home" } })).unwrap();
    /// assert_eq!(tree.leaf_keys(), vec!["nav.home".to_string()]);
    /// ```
    pub fn from_json(json: &Value) -> Result<Self, TranslationError> {
        match json {
            Value::Object(map) => Ok(Self::from_entries(
                map.iter().map(|(key, value)| (key.clone(), value)),
            )),
            other => Err(TranslationError::NotAnObject { found: json_type_name(other) }),
        }
    }

    /// Parses JSON text into a tree.
    pub fn parse(json_text: &str) -> Result<Self, TranslationError> {
        let json: Value = serde_json::from_str(json_text)?;
        Self::from_json(&json)
    }

    /// Builds a tree from `(segment, value)` pairs, skipping values with no text.
    fn from_entries<'a>(entries: impl Iterator<Item = (String, &'a Value)>) -> Self {
        let children = entries
            .filter_map(|(key, value)| {
                let node = TranslationNode::from_json(value);
                if node.is_none() {
                    tracing::debug!(key = %key, value = %value, "Skipping non-text translation value");
                }
                node.map(|node| (key, node))
            })
            .collect();
        Self { children }
    }

    /// Returns the child node named `segment`.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&TranslationNode> {
        self.children.get(segment)
    }

    /// Enumerates every dotted key path that ends at a leaf, in sorted order.
    #[must_use]
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(self, None, &mut keys);
        keys
    }
}

impl TranslationNode {
    /// Converts a JSON value; `None` for values without displayable text.
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Leaf(text.clone())),
            Value::Object(map) => Some(Self::Node(TranslationTree::from_entries(
                map.iter().map(|(key, value)| (key.clone(), value)),
            ))),
            Value::Array(items) => Some(Self::Node(TranslationTree::from_entries(
                items.iter().enumerate().map(|(index, value)| (index.to_string(), value)),
            ))),
            Value::Number(_) | Value::Bool(_) | Value::Null => None,
        }
    }
}

/// Depth-first walk appending `prefix.segment` for each leaf.
fn collect_leaf_keys(tree: &TranslationTree, prefix: Option<&str>, keys: &mut Vec<String>) {
    for (segment, node) in &tree.children {
        let full_key = prefix.map_or_else(|| segment.clone(), |p| format!("{p}.{segment}"));
        match node {
            TranslationNode::Leaf(_) => keys.push(full_key),
            TranslationNode::Node(children) => collect_leaf_keys(children, Some(&full_key), keys),
        }
    }
}

/// JSON type name used in error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Detect locale from a translation file path.
///
/// The file stem must be exactly a supported locale tag.
///
/// # Examples
/// - `locales/ko.json` → `Some(Ko)`
/// - `locales/en.json` → `Some(En)`
/// - `locales/en-US.json` → `None`
/// - `locales/common.json` → `None`
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<Locale> {
    let stem = file_path.file_stem()?.to_str()?;
    Locale::from_tag(stem)
}
