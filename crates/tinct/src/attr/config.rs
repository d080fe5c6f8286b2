//! Attribute configuration shorthands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An attribute configuration as written by the user.
///
/// Three shapes are accepted wherever an attribute is configured:
///
/// | Shape | Example (JSON) | Meaning |
/// |-------|----------------|---------|
/// | Flag | `true` | theme's default shape for the attribute type |
/// | Color | `"red"` | theme's default shape, in that color |
/// | Structured | `{ "base": {...} }` or `{ "fillMode": "solid" }` | explicit targets, or display fields for `base` |
///
/// `Flag(false)` disables the attribute. Deserializing JSON `null` into
/// `Option<AttrConfig>` gives `None`, which callers treat the same way.
///
/// # Example
///
/// ```rust
/// use tinct::AttrConfig;
/// use serde_json::json;
///
/// let config: AttrConfig = serde_json::from_value(json!({ "fillMode": "solid" })).unwrap();
/// assert!(matches!(config, AttrConfig::Structured(_)));
///
/// assert_eq!(AttrConfig::from_value(json!(null)), None);
/// assert_eq!(AttrConfig::from_value(json!("red")), Some(AttrConfig::from("red")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrConfig {
    Flag(bool),
    Color(String),
    Structured(Map<String, Value>),
}

impl AttrConfig {
    /// Converts a JSON value, returning `None` for shapes that are never
    /// valid attribute configurations (null, numbers, arrays).
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(AttrConfig::Flag(flag)),
            Value::String(color) => Some(AttrConfig::Color(color)),
            Value::Object(map) => Some(AttrConfig::Structured(map)),
            Value::Null | Value::Number(_) | Value::Array(_) => None,
        }
    }

    /// Returns `false` only for `Flag(false)`.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, AttrConfig::Flag(false))
    }

    pub(crate) fn shape(&self) -> Shape<'_> {
        match self {
            AttrConfig::Flag(true) => Shape::Shorthand(None),
            AttrConfig::Flag(false) => Shape::Disabled,
            AttrConfig::Color(color) => Shape::shorthand(color),
            AttrConfig::Structured(map) => Shape::Structured(map),
        }
    }
}

impl From<bool> for AttrConfig {
    fn from(flag: bool) -> Self {
        AttrConfig::Flag(flag)
    }
}

impl From<&str> for AttrConfig {
    fn from(color: &str) -> Self {
        AttrConfig::Color(color.to_string())
    }
}

impl From<String> for AttrConfig {
    fn from(color: String) -> Self {
        AttrConfig::Color(color)
    }
}

impl From<Map<String, Value>> for AttrConfig {
    fn from(map: Map<String, Value>) -> Self {
        AttrConfig::Structured(map)
    }
}

/// How a configuration value is interpreted, decided once per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shape<'a> {
    /// `true` or a color name; carries the color override, if any.
    Shorthand(Option<&'a str>),
    /// A mapping of targets or display fields.
    Structured(&'a Map<String, Value>),
    /// `false`, null, or anything else.
    Disabled,
}

impl<'a> Shape<'a> {
    /// Classifies a raw per-target value.
    pub(crate) fn of(value: &'a Value) -> Self {
        match value {
            Value::Bool(true) => Shape::Shorthand(None),
            Value::String(color) => Shape::shorthand(color),
            Value::Object(map) => Shape::Structured(map),
            _ => Shape::Disabled,
        }
    }

    fn shorthand(color: &'a str) -> Self {
        Shape::Shorthand(Some(color).filter(|c| !c.is_empty()))
    }
}
