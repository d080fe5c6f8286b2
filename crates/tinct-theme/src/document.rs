//! Theme configuration documents.
//!
//! A [`ThemeDocument`] is an insertion-ordered tree of configuration values
//! addressed by dotted paths (`highlight.base.fillMode`). Leaves are plain
//! JSON-like values; a string leaf may contain the `{color}` token, and an
//! object with `light`/`dark` keys is a *variant value* selected at
//! resolution time (see [`ResolvedTheme`](crate::ResolvedTheme)).
//!
//! ## Layering
//!
//! Documents are combined with [`merge_defaults`](ThemeDocument::merge_defaults),
//! a deep-defaults merge where the receiver has priority:
//!
//! ```yaml
//! # user layer              # defaults                  # merged
//! highlight:                highlight:                  highlight:
//!   base:                     base:                       base:
//!     fillMode: solid           fillMode: light             fillMode: solid
//!                               class: hl                   class: hl
//! ```
//!
//! Objects merge recursively. Any non-object leaf in the higher layer
//! replaces whatever the lower layer has at that key, subtree included.
//!
//! ## Loading
//!
//! ```rust
//! use tinct_theme::ThemeDocument;
//!
//! let doc = ThemeDocument::from_yaml(r#"
//! color: red
//! highlightFillLightBg:
//!   light: "bg-{color}-l5"
//!   dark: "bg-{color}-d5"
//! "#).unwrap();
//!
//! assert!(doc.contains("highlightFillLightBg.dark"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ThemeError};

/// Recognized theme document file extensions in priority order.
///
/// When a directory holds several files with the same stem, the extension
/// appearing earlier in this list wins.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// An ordered tree of theme configuration values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeDocument {
    entries: Map<String, Value>,
    /// Source file path (for refresh support).
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl ThemeDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotAMapping`] for any other kind of value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self::from(entries)),
            other => Err(ThemeError::NotAMapping {
                path: None,
                found: kind_of(&other),
            }),
        }
    }

    /// Parses a document from YAML content.
    ///
    /// Non-string mapping keys (numbers, booleans) are converted to their
    /// string form; keys of any other kind are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] on YAML syntax errors and
    /// [`ThemeError::NotAMapping`] if the root is not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        Self::from_value(yaml_to_json(value))
    }

    /// Parses a document from JSON content.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] on JSON syntax errors and
    /// [`ThemeError::NotAMapping`] if the root is not an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Loads a document from a `.yaml`, `.yml` or `.json` file.
    ///
    /// The source path is kept for [`refresh`](ThemeDocument::refresh).
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the extension is not recognized, or the
    /// file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tinct_theme::ThemeDocument;
    ///
    /// let doc = ThemeDocument::from_file("./themes/ocean.yaml")?;
    /// assert!(doc.source_path().is_some());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut doc = read_document(path)?;
        doc.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), keys = doc.len(), "loaded theme document");
        Ok(doc)
    }

    /// Reloads the document from its source file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NoSourcePath`] if the document was not loaded
    /// with [`from_file`](ThemeDocument::from_file), or any load error.
    pub fn refresh(&mut self) -> Result<()> {
        let path = self.source_path.as_ref().ok_or(ThemeError::NoSourcePath)?;
        let fresh = read_document(path)?;
        self.entries = fresh.entries;
        tracing::debug!(path = %path.display(), keys = self.len(), "refreshed theme document");
        Ok(())
    }

    /// Returns the source file path, if this document was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns the value at a dotted path.
    ///
    /// Each segment indexes into an object by key, or into an array when the
    /// segment is a decimal index.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns the value stored under a single top-level key.
    ///
    /// Unlike [`get`](ThemeDocument::get), the key is not split on dots.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if a value exists at the dotted path.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Returns `true` if a value exists at any of the dotted paths.
    pub fn contains_any<'p>(&self, paths: impl IntoIterator<Item = &'p str>) -> bool {
        paths.into_iter().any(|path| self.contains(path))
    }

    /// Sets the value at a dotted path, creating intermediate objects.
    ///
    /// A non-object value in the way is replaced by an object.
    pub fn set(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.').peekable();
        let mut current = &mut self.entries;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value);
                return;
            }
            let slot = current
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            current = match slot {
                Value::Object(map) => map,
                _ => return,
            };
        }
    }

    /// Inserts a top-level entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Builder form of [`insert`](ThemeDocument::insert).
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterates over top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consumes the document, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    /// Fills in everything `defaults` defines and `self` does not.
    ///
    /// `self` has priority. Where both sides hold an object the merge
    /// recurses; otherwise the value already in `self` is kept as-is. Keys
    /// only present in `defaults` are appended after the existing ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use tinct_theme::ThemeDocument;
    ///
    /// let user = ThemeDocument::from_value(json!({ "a": { "x": 1 } })).unwrap();
    /// let base = ThemeDocument::from_value(json!({ "a": { "x": 0, "y": 2 }, "b": 3 })).unwrap();
    ///
    /// let merged = user.merge_defaults(&base);
    /// assert_eq!(merged.get("a.x"), Some(&json!(1)));
    /// assert_eq!(merged.get("a.y"), Some(&json!(2)));
    /// assert_eq!(merged.get("b"), Some(&json!(3)));
    /// ```
    pub fn merge_defaults(mut self, defaults: &ThemeDocument) -> Self {
        fill_defaults(&mut self.entries, &defaults.entries);
        self
    }

    /// Merges layers given in priority order (highest first).
    pub fn layered<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a ThemeDocument>,
    {
        layers
            .into_iter()
            .fold(Self::new(), |merged, layer| merged.merge_defaults(layer))
    }
}

impl PartialEq for ThemeDocument {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl From<Map<String, Value>> for ThemeDocument {
    fn from(entries: Map<String, Value>) -> Self {
        Self {
            entries,
            source_path: None,
        }
    }
}

fn fill_defaults(target: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (key, default) in defaults {
        match (target.get_mut(key), default) {
            (None, _) => {
                target.insert(key.clone(), default.clone());
            }
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                fill_defaults(existing, nested);
            }
            (Some(_), _) => {}
        }
    }
}

fn read_document(path: &Path) -> Result<ThemeDocument> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let parse: fn(&str) -> Result<ThemeDocument> =
        if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
            ThemeDocument::from_yaml
        } else if file_name.ends_with(".json") {
            ThemeDocument::from_json
        } else {
            return Err(ThemeError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        };

    let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|e| e.at_path(path))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Converts a YAML value into the JSON tree used by documents.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                match yaml_key(key) {
                    Some(key) => {
                        map.insert(key, yaml_to_json(value));
                    }
                    None => tracing::trace!("skipping non-scalar mapping key in theme document"),
                }
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
