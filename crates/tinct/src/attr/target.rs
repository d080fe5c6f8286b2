//! Canonical per-target display attributes.
//!
//! Normalization produces a [`TargetAttributes`] map from [`Target`] to
//! [`DisplayAttrs`]. It serializes to the camelCase shape renderers read:
//!
//! ```json
//! {
//!   "base": {
//!     "class": "hl hl-base bg-blue-l5",
//!     "color": "blue",
//!     "fillMode": "light",
//!     "contentClass": "text-blue-d4"
//!   }
//! }
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names recognized on a target.
pub const CLASS: &str = "class";
pub const STYLE: &str = "style";
pub const COLOR: &str = "color";
pub const FILL_MODE: &str = "fillMode";
pub const CONTENT_CLASS: &str = "contentClass";

/// Inline style rules, keyed by style property.
pub type StyleMap = Map<String, Value>;

/// A region an attribute can style independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// The whole highlighted range.
    Base,
    /// The first cell of a range.
    Start,
    /// The last cell of a range.
    End,
    /// A range that starts and ends on the same cell.
    StartEnd,
}

impl Target {
    /// All targets, in rendering order.
    pub const ALL: [Target; 4] = [Target::Base, Target::Start, Target::End, Target::StartEnd];

    /// The configuration key for this target.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Base => "base",
            Target::Start => "start",
            Target::End => "end",
            Target::StartEnd => "startEnd",
        }
    }

    /// Parses a configuration key.
    pub fn parse(key: &str) -> Option<Self> {
        Target::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s).ok_or_else(|| format!("unknown target: {}", s))
    }
}

/// How a highlight paints its background.
///
/// Unrecognized names are preserved so they round-trip through
/// serialization, but select no fill classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FillMode {
    /// Pale background, tinted text.
    Light,
    /// Saturated background, contrasting text.
    Solid,
    /// Any other name.
    Other(String),
}

impl FillMode {
    pub fn parse(name: &str) -> Self {
        match name {
            "light" => FillMode::Light,
            "solid" => FillMode::Solid,
            other => FillMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FillMode::Light => "light",
            FillMode::Solid => "solid",
            FillMode::Other(name) => name,
        }
    }
}

impl From<String> for FillMode {
    fn from(name: String) -> Self {
        FillMode::parse(&name)
    }
}

impl From<FillMode> for String {
    fn from(mode: FillMode) -> Self {
        match mode {
            FillMode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Fully populated display fields for one target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAttrs {
    /// Space-separated class names for the background element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Inline style rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    /// The target's color. Never empty after normalization.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<FillMode>,
    /// Space-separated class names for the content element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_class: Option<String>,
    /// Fields that are carried along but not interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisplayAttrs {
    /// Builds attributes from a normalized field map.
    ///
    /// Fields of the wrong type are dropped. A missing or empty `color`
    /// falls back to `fallback_color`.
    pub fn from_fields(fields: Map<String, Value>, fallback_color: &str) -> Self {
        let mut attrs = DisplayAttrs {
            color: fallback_color.to_string(),
            ..Default::default()
        };

        for (key, value) in fields {
            let value = match key.as_str() {
                CLASS | STYLE | COLOR | FILL_MODE | CONTENT_CLASS => value,
                _ => {
                    attrs.extra.insert(key, value);
                    continue;
                }
            };
            match (key.as_str(), value) {
                (CLASS, Value::String(class)) => attrs.class = non_empty(class),
                (STYLE, Value::Object(style)) => attrs.style = Some(style),
                (COLOR, Value::String(color)) if !color.is_empty() => attrs.color = color,
                (FILL_MODE, Value::String(mode)) => attrs.fill_mode = Some(FillMode::parse(&mode)),
                (CONTENT_CLASS, Value::String(class)) => attrs.content_class = non_empty(class),
                (field, value) => {
                    tracing::trace!(field, value = %value, "dropping display field of unexpected type");
                }
            }
        }
        attrs
    }

    /// Appends a class to `class`, space-separated. `None` is a no-op.
    pub fn append_class(&mut self, class: Option<&str>) {
        append(&mut self.class, class);
    }

    /// Appends a class to `content_class`, space-separated. `None` is a no-op.
    pub fn append_content_class(&mut self, class: Option<&str>) {
        append(&mut self.content_class, class);
    }

    /// Looks up an inline style rule.
    pub fn style_value(&self, key: &str) -> Option<&Value> {
        self.style.as_ref()?.get(key)
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.trim().is_empty()).then_some(s)
}

fn append(slot: &mut Option<String>, class: Option<&str>) {
    let Some(class) = class.map(str::trim).filter(|c| !c.is_empty()) else {
        return;
    };
    match slot {
        Some(existing) if !existing.trim().is_empty() => {
            existing.push(' ');
            existing.push_str(class);
        }
        _ => *slot = Some(class.to_string()),
    }
}

/// Normalized attributes keyed by target.
///
/// Only targets that appeared in the configuration are present; an absent
/// target means "no styling", not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetAttributes {
    targets: BTreeMap<Target, DisplayAttrs>,
}

impl TargetAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: Target) -> Option<&DisplayAttrs> {
        self.targets.get(&target)
    }

    pub fn get_mut(&mut self, target: Target) -> Option<&mut DisplayAttrs> {
        self.targets.get_mut(&target)
    }

    /// Shorthand for `get(Target::Base)`.
    pub fn base(&self) -> Option<&DisplayAttrs> {
        self.get(Target::Base)
    }

    pub fn contains(&self, target: Target) -> bool {
        self.targets.contains_key(&target)
    }

    pub fn insert(&mut self, target: Target, attrs: DisplayAttrs) -> Option<DisplayAttrs> {
        self.targets.insert(target, attrs)
    }

    /// Present targets, in [`Target::ALL`] order.
    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.targets.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Target, DisplayAttrs> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, Target, DisplayAttrs> {
        self.targets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetAttributes {
    type Item = (&'a Target, &'a DisplayAttrs);
    type IntoIter = btree_map::Iter<'a, Target, DisplayAttrs>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

impl IntoIterator for TargetAttributes {
    type Item = (Target, DisplayAttrs);
    type IntoIter = btree_map::IntoIter<Target, DisplayAttrs>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}
