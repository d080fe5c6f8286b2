//! Resolved themes: a merged document plus an active color and mode.
//!
//! [`generate_theme`] layers three documents, highest priority first:
//!
//! 1. `{ color, isDark }` computed from the options (falling back to the
//!    default document's values)
//! 2. the caller's override document, if any
//! 3. the default theme document
//!
//! The resulting [`ResolvedTheme`] answers path queries with
//! [`resolve`](ResolvedTheme::resolve). Resolution applies two steps:
//!
//! - **Variant selection**: an object holding a `light` or `dark` key is
//!   replaced by the branch matching the effective mode.
//! - **Color substitution**: every `{color}` in a string is replaced by the
//!   effective color.
//!
//! Both the mode and the color can be overridden per query through
//! [`ResolveOverrides`], which is how highlight targets get classes in their
//! own color.
//!
//! ```rust
//! use tinct_theme::{generate_theme, ResolveOverrides, ThemeDocument, ThemeOptions};
//! use serde_json::json;
//!
//! let overrides = ThemeDocument::from_value(json!({
//!     "badge": { "light": "bg-{color}-l4", "dark": "bg-{color}-d4" }
//! })).unwrap();
//!
//! let theme = generate_theme(ThemeOptions::new().color("red").config(overrides));
//! assert_eq!(theme.get("badge"), Some(json!("bg-red-l4")));
//!
//! let dark_green = ResolveOverrides::new().with_color("green").with_dark(true);
//! assert_eq!(theme.resolve("badge", dark_green), Some(json!("bg-green-d4")));
//! ```

use serde_json::{Map, Value};

use super::mode::{detect_color_mode, ColorMode};
use crate::defaults::default_document;
use crate::document::ThemeDocument;

/// Top-level key holding the ambient color.
pub const COLOR_KEY: &str = "color";
/// Top-level key holding the ambient dark-mode flag.
pub const IS_DARK_KEY: &str = "isDark";
/// Placeholder replaced by the effective color in string values.
pub const COLOR_TOKEN: &str = "{color}";

/// Inputs to [`generate_theme`].
///
/// Every field is optional; unset fields fall back to the default document.
#[derive(Debug, Clone, Default)]
pub struct ThemeOptions {
    color: Option<String>,
    is_dark: Option<bool>,
    config: Option<ThemeDocument>,
}

impl ThemeOptions {
    /// Options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ambient color. An empty string counts as unset.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the ambient dark-mode flag.
    pub fn dark(mut self, is_dark: bool) -> Self {
        self.is_dark = Some(is_dark);
        self
    }

    /// Sets the ambient mode.
    pub fn mode(self, mode: ColorMode) -> Self {
        self.dark(mode.is_dark())
    }

    /// Sets the mode from the OS preference (see [`detect_color_mode`]).
    pub fn detect_mode(self) -> Self {
        self.mode(detect_color_mode())
    }

    /// Sets the structured override document, layered over the defaults.
    pub fn config(mut self, config: ThemeDocument) -> Self {
        self.config = Some(config);
        self
    }
}

/// Per-query overrides for [`ResolvedTheme::resolve`].
///
/// Unset fields fall back to the theme's ambient color and mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOverrides<'a> {
    pub color: Option<&'a str>,
    pub is_dark: Option<bool>,
}

impl<'a> ResolveOverrides<'a> {
    /// No overrides: resolve with the ambient color and mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: &'a str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_dark(mut self, is_dark: bool) -> Self {
        self.is_dark = Some(is_dark);
        self
    }

    pub fn with_mode(self, mode: ColorMode) -> Self {
        self.with_dark(mode.is_dark())
    }
}

/// Builds a resolved theme from the built-in default document.
///
/// See the [module docs](self) for the layering order.
pub fn generate_theme(options: ThemeOptions) -> ResolvedTheme {
    ResolvedTheme::generate(options)
}

/// A merged theme document with an active color and mode.
///
/// Immutable once built; every query is a pure function of the document and
/// its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    document: ThemeDocument,
    color: String,
    is_dark: bool,
}

impl ResolvedTheme {
    /// Builds a theme over the built-in default document.
    pub fn generate(options: ThemeOptions) -> Self {
        Self::with_defaults(options, default_document())
    }

    /// Builds a theme over a caller-supplied default document.
    ///
    /// `defaults` takes the place of the built-in document: it supplies the
    /// fallback `color`/`isDark` and the lowest-priority layer.
    pub fn with_defaults(options: ThemeOptions, defaults: &ThemeDocument) -> Self {
        let ThemeOptions {
            color,
            is_dark,
            config,
        } = options;

        let color = color
            .filter(|c| !c.is_empty())
            .or_else(|| {
                defaults
                    .get_key(COLOR_KEY)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_default();
        let is_dark = is_dark.unwrap_or_else(|| {
            defaults
                .get_key(IS_DARK_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false)
        });

        let mut ambient = Map::new();
        ambient.insert(COLOR_KEY.to_string(), Value::String(color.clone()));
        ambient.insert(IS_DARK_KEY.to_string(), Value::Bool(is_dark));

        let mut document = ThemeDocument::from(ambient);
        if let Some(config) = &config {
            document = document.merge_defaults(config);
        }
        let document = document.merge_defaults(defaults);

        tracing::debug!(
            color = %color,
            is_dark,
            keys = document.len(),
            "generated theme"
        );

        Self {
            document,
            color,
            is_dark,
        }
    }

    /// The ambient color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The ambient dark-mode flag.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// The ambient mode.
    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.is_dark)
    }

    /// The merged document.
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// Iterates over the top-level keys of the merged document.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.keys()
    }

    /// Resolves a top-level key with the ambient color and mode.
    ///
    /// Equivalent to `resolve(key, ResolveOverrides::new())`, except that
    /// `key` is taken literally rather than split on dots.
    pub fn get(&self, key: &str) -> Option<Value> {
        let value = self.document.get_key(key)?;
        self.resolve_value(value, ResolveOverrides::new())
    }

    /// Resolves a dotted path.
    ///
    /// Returns `None` when the path is absent, or when it holds a variant
    /// value lacking the branch for the effective mode. Strings come back
    /// with `{color}` substituted; other values come back unchanged.
    pub fn resolve(&self, path: &str, overrides: ResolveOverrides<'_>) -> Option<Value> {
        let value = self.document.get(path)?;
        self.resolve_value(value, overrides)
    }

    /// Like [`resolve`](ResolvedTheme::resolve), but only yields strings.
    pub fn resolve_str(&self, path: &str, overrides: ResolveOverrides<'_>) -> Option<String> {
        match self.resolve(path, overrides)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Applies variant selection and color substitution to a value taken
    /// from this theme's document (or shaped like one).
    pub fn resolve_value(&self, value: &Value, overrides: ResolveOverrides<'_>) -> Option<Value> {
        let mode = ColorMode::from_dark(overrides.is_dark.unwrap_or(self.is_dark));
        let selected = select_variant(value, mode)?;
        match selected {
            Value::String(s) => {
                let color = overrides.color.unwrap_or(&self.color);
                Some(Value::String(s.replace(COLOR_TOKEN, color)))
            }
            other => Some(other.clone()),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self::generate(ThemeOptions::new())
    }
}

/// Returns `true` if `value` is an object with a `light` or `dark` key.
pub fn is_variant(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.contains_key("light") || map.contains_key("dark"))
}

fn select_variant(value: &Value, mode: ColorMode) -> Option<&Value> {
    if is_variant(value) {
        value.get(mode.as_str())
    } else {
        Some(value)
    }
}
