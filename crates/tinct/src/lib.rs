//! # Tinct - Themed Highlight Attributes
//!
//! Tinct turns loose, user-written highlight configuration into the exact
//! class names and inline styles a renderer needs, driven by a layered,
//! light/dark aware theme.
//!
//! - Theme resolution lives in [`tinct_theme`] and is re-exported here
//! - [`attr`]: expands attribute shorthands into per-target display fields
//! - [`highlight`]: adds fill-mode background and content classes
//!
//! ## Core Concepts
//!
//! - [`ResolvedTheme`]: merged theme document plus ambient color and mode
//! - [`AttrConfig`]: `true`, a color name, or a mapping
//! - [`Target`]: `base`, `start`, `end`, `startEnd`
//! - [`TargetAttributes`]: the normalized result, one [`DisplayAttrs`] per
//!   configured target
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{normalize_highlight_default, AttrConfig};
//!
//! let attrs = normalize_highlight_default(&AttrConfig::from(true)).unwrap();
//! let base = attrs.base().unwrap();
//!
//! assert_eq!(base.color, "blue");
//! assert_eq!(base.class.as_deref(), Some("hl hl-base bg-blue-l5"));
//! assert_eq!(base.content_class.as_deref(), Some("text-blue-d4"));
//! ```
//!
//! ## Custom Themes
//!
//! User documents are layered over the built-in defaults; only the keys they
//! set change.
//!
//! ```rust
//! use tinct::{generate_theme, normalize_highlight, AttrConfig, Target, ThemeDocument, ThemeOptions};
//! use serde_json::json;
//!
//! let user = ThemeDocument::from_yaml(r#"
//! highlight:
//!   base:
//!     fillMode: solid
//! "#).unwrap();
//!
//! let theme = generate_theme(ThemeOptions::new().color("green").dark(true).config(user));
//! let config = AttrConfig::from_value(json!({ "base": true, "end": "red" })).unwrap();
//! let attrs = normalize_highlight(&config, &theme).unwrap();
//!
//! assert_eq!(attrs.base().unwrap().class.as_deref(), Some("hl hl-base bg-green-l1"));
//! assert_eq!(attrs.get(Target::End).unwrap().class.as_deref(), Some("hl hl-end bg-red-l1"));
//! ```
//!
//! ## Serialized Shape
//!
//! [`TargetAttributes`] serializes to the camelCase structure renderers
//! read. Only configured targets appear:
//!
//! ```rust
//! use tinct::{normalize_highlight_default, AttrConfig};
//! use serde_json::json;
//!
//! let config = AttrConfig::from_value(json!({ "base": "red" })).unwrap();
//! let attrs = normalize_highlight_default(&config).unwrap();
//! assert_eq!(
//!     serde_json::to_value(&attrs).unwrap(),
//!     json!({
//!         "base": {
//!             "class": "hl hl-base bg-red-l5",
//!             "color": "red",
//!             "fillMode": "light",
//!             "contentClass": "text-red-d4"
//!         }
//!     })
//! );
//! ```

pub mod attr;
pub mod highlight;

pub use tinct_theme;

pub use tinct_theme::{
    default_document, default_theme, detect_color_mode, generate_theme, reset_theme_detector,
    set_theme_detector, ColorMode, ResolveOverrides, ResolvedTheme, ThemeDocument, ThemeError,
    ThemeOptions, ThemeRegistry,
};

pub use attr::{
    normalize_attr, AttrConfig, DisplayAttrs, FillMode, Normalizer, Target, TargetAttributes,
    DISPLAY_PROPS,
};
pub use highlight::{normalize_highlight, normalize_highlight_default, HIGHLIGHT};
