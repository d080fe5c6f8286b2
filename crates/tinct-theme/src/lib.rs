//! # Tinct Theme - Layered Theme Resolution
//!
//! `tinct-theme` turns a stack of configuration layers into a queryable
//! theme. It is the resolution layer beneath the `tinct` crate, which
//! normalizes highlight attributes against the themes built here, but it can
//! be used on its own by anything that needs light/dark aware, color
//! templated configuration values.
//!
//! ## Core Concepts
//!
//! - [`ThemeDocument`]: an ordered tree of configuration values addressed by
//!   dotted paths, loadable from YAML or JSON
//! - [`ResolvedTheme`]: a merged document plus an ambient color and mode
//! - [`ColorMode`]: light or dark, optionally detected from the OS
//! - Variant values: `{ light: ..., dark: ... }` objects picked by mode
//! - Color templating: `{color}` inside strings, substituted at resolve time
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct_theme::{generate_theme, ResolveOverrides, ThemeOptions};
//! use serde_json::json;
//!
//! let theme = generate_theme(ThemeOptions::new().color("red").dark(true));
//!
//! // Top-level lookups use the ambient color and mode
//! assert_eq!(theme.get("highlightFillLightBg"), Some(json!("bg-red-d5")));
//!
//! // Explicit queries can override either one
//! let light_green = ResolveOverrides::new().with_color("green").with_dark(false);
//! assert_eq!(
//!     theme.resolve("highlightFillLightBg", light_green),
//!     Some(json!("bg-green-l5"))
//! );
//!
//! // Unknown paths are simply absent
//! assert_eq!(theme.resolve("no.such.path", ResolveOverrides::new()), None);
//! ```
//!
//! ## User Overrides
//!
//! ```rust
//! use tinct_theme::{generate_theme, ThemeDocument, ThemeOptions};
//! use serde_json::json;
//!
//! let user = ThemeDocument::from_yaml(r#"
//! highlightFillSolidText:
//!   light: text-white
//!   dark: text-{color}-d5
//! "#).unwrap();
//!
//! let theme = generate_theme(ThemeOptions::new().dark(true).config(user));
//! assert_eq!(theme.get("highlightFillSolidText"), Some(json!("text-blue-d5")));
//! ```

mod defaults;
mod document;
mod error;
pub mod registry;
pub mod theme;

pub use defaults::{default_document, default_theme};
pub use document::{ThemeDocument, THEME_EXTENSIONS};
pub use error::{Result, ThemeError};
pub use registry::ThemeRegistry;
pub use theme::{
    detect_color_mode, generate_theme, is_variant, reset_theme_detector, set_theme_detector,
    ColorMode, ResolveOverrides, ResolvedTheme, ThemeOptions, COLOR_KEY, COLOR_TOKEN,
    IS_DARK_KEY,
};
