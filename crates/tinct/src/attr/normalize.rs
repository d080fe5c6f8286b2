//! Expansion of attribute shorthands into per-target display attributes.
//!
//! The normalizer runs the same steps for every attribute type:
//!
//! 1. **Classify** the configuration. `true` or a color name takes the
//!    theme's default shape for the type; a mapping is used as written;
//!    anything else disables the attribute.
//! 2. **Promote to base**. A mapping without any target key describes the
//!    `base` target: `{ fillMode: solid }` becomes `{ base: { fillMode: solid } }`.
//! 3. **Classify each target** the same way. `true`/color name becomes
//!    `{ color }`; a mapping without any display key is a bag of style
//!    rules: `{ opacity: 0.5 }` becomes `{ style: { opacity: 0.5 } }`.
//! 4. **Backfill** each missing display field from the theme path
//!    `<type>.<target>.<field>`.
//! 5. **Backfill the color** from the configured color, else the theme's.

use serde_json::{Map, Value};
use tinct_theme::{default_document, ResolveOverrides, ResolvedTheme};

use super::config::{AttrConfig, Shape};
use super::target::{DisplayAttrs, Target, TargetAttributes, CLASS, COLOR, FILL_MODE, STYLE};

/// Display fields recognized by default.
pub const DISPLAY_PROPS: &[&str] = &[CLASS, STYLE, COLOR, FILL_MODE];

/// Normalizes attribute configurations of one type against a theme.
///
/// # Example
///
/// ```rust
/// use tinct::{default_theme, AttrConfig, Normalizer, Target};
/// use serde_json::json;
///
/// let config = AttrConfig::from_value(json!({ "fontWeight": "bold" })).unwrap();
/// let attrs = Normalizer::new("dot").normalize(&config, default_theme()).unwrap();
///
/// let base = attrs.get(Target::Base).unwrap();
/// assert_eq!(base.style_value("fontWeight"), Some(&json!("bold")));
/// assert_eq!(base.color, "blue");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    attribute_type: &'a str,
    targets: &'a [Target],
    display_props: &'a [&'a str],
}

impl<'a> Normalizer<'a> {
    /// A normalizer for `attribute_type` with all targets and the default
    /// display fields.
    pub fn new(attribute_type: &'a str) -> Self {
        Self {
            attribute_type,
            targets: &Target::ALL,
            display_props: DISPLAY_PROPS,
        }
    }

    /// Restricts which keys count as targets.
    pub fn targets(mut self, targets: &'a [Target]) -> Self {
        self.targets = targets;
        self
    }

    /// Replaces the recognized display fields.
    pub fn display_props(mut self, display_props: &'a [&'a str]) -> Self {
        self.display_props = display_props;
        self
    }

    pub fn attribute_type(&self) -> &'a str {
        self.attribute_type
    }

    /// Normalizes `config`, returning `None` if the attribute is disabled.
    pub fn normalize(&self, config: &AttrConfig, theme: &ResolvedTheme) -> Option<TargetAttributes> {
        let (root, root_color, from_theme) = match config.shape() {
            Shape::Shorthand(color) => (
                self.default_shape(theme),
                color.unwrap_or(theme.color()).to_string(),
                true,
            ),
            Shape::Structured(map) => (map.clone(), theme.color().to_string(), false),
            Shape::Disabled => {
                tracing::trace!(attribute = self.attribute_type, "attribute disabled");
                return None;
            }
        };

        let root = if self.has_target_key(&root) {
            root
        } else {
            tracing::trace!(attribute = self.attribute_type, "promoting flat config to base target");
            let mut wrapped = Map::new();
            wrapped.insert(Target::Base.as_str().to_string(), Value::Object(root));
            wrapped
        };

        let mut normalized = TargetAttributes::new();
        for (key, value) in &root {
            let Some(target) = self.target_for(key) else {
                tracing::trace!(attribute = self.attribute_type, key = %key, "ignoring non-target key");
                continue;
            };
            let fields = match Shape::of(value) {
                Shape::Shorthand(color) => {
                    let mut fields = Map::new();
                    let color = color.unwrap_or(&root_color);
                    fields.insert(COLOR.to_string(), Value::String(color.to_string()));
                    fields
                }
                Shape::Structured(map) if from_theme => resolve_fields(map, theme, &root_color),
                Shape::Structured(map) => map.clone(),
                Shape::Disabled => {
                    tracing::trace!(attribute = self.attribute_type, %target, "target disabled");
                    continue;
                }
            };
            let fields = self.promote_to_style(target, fields);
            let fields = self.backfill(target, fields, theme, &root_color);
            normalized.insert(target, DisplayAttrs::from_fields(fields, &root_color));
        }
        Some(normalized)
    }

    /// The theme's shape for this attribute type, falling back to the
    /// built-in defaults when the theme replaced it with something else.
    fn default_shape(&self, theme: &ResolvedTheme) -> Map<String, Value> {
        match theme.get(self.attribute_type) {
            Some(Value::Object(map)) => map,
            _ => match default_document().get_key(self.attribute_type) {
                Some(Value::Object(map)) => map.clone(),
                _ => Map::new(),
            },
        }
    }

    fn target_for(&self, key: &str) -> Option<Target> {
        Target::parse(key).filter(|t| self.targets.contains(t))
    }

    fn has_target_key(&self, root: &Map<String, Value>) -> bool {
        root.keys().any(|k| self.target_for(k).is_some())
    }

    fn promote_to_style(&self, target: Target, fields: Map<String, Value>) -> Map<String, Value> {
        if fields.keys().any(|k| self.display_props.contains(&k.as_str())) {
            return fields;
        }
        tracing::trace!(attribute = self.attribute_type, %target, "treating target fields as style rules");
        let mut wrapped = Map::new();
        wrapped.insert(STYLE.to_string(), Value::Object(fields));
        wrapped
    }

    fn backfill(
        &self,
        target: Target,
        mut fields: Map<String, Value>,
        theme: &ResolvedTheme,
        root_color: &str,
    ) -> Map<String, Value> {
        let color = fields
            .get(COLOR)
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(root_color)
            .to_string();
        let overrides = ResolveOverrides::new().with_color(&color);

        for prop in self.display_props {
            if fields.contains_key(*prop) {
                continue;
            }
            let path = format!("{}.{}.{}", self.attribute_type, target.as_str(), prop);
            if let Some(value) = theme.resolve(&path, overrides) {
                tracing::trace!(path = %path, "backfilled display field from theme");
                fields.insert((*prop).to_string(), value);
            }
        }

        if !fields.contains_key(COLOR) {
            fields.insert(COLOR.to_string(), Value::String(root_color.to_string()));
        }
        fields
    }
}

/// Resolves variant and templated values in a target taken from the theme.
///
/// Fields whose variant lacks the branch for the theme's mode are dropped.
fn resolve_fields(
    fields: &Map<String, Value>,
    theme: &ResolvedTheme,
    root_color: &str,
) -> Map<String, Value> {
    let color = fields
        .get(COLOR)
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .unwrap_or(root_color);
    let overrides = ResolveOverrides::new().with_color(color);
    fields
        .iter()
        .filter_map(|(key, value)| Some((key.clone(), theme.resolve_value(value, overrides)?)))
        .collect()
}

/// Normalizes `config` for `attribute_type` with explicit target and
/// display field sets.
pub fn normalize_attr(
    config: &AttrConfig,
    attribute_type: &str,
    targets: &[Target],
    display_props: &[&str],
    theme: &ResolvedTheme,
) -> Option<TargetAttributes> {
    Normalizer::new(attribute_type)
        .targets(targets)
        .display_props(display_props)
        .normalize(config, theme)
}
