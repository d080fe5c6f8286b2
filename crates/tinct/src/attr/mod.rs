//! Attribute normalization.
//!
//! Users configure attributes loosely: `true`, a color name, a flat mapping
//! of display fields, or a mapping of targets. This module expands any of
//! those into one canonical [`TargetAttributes`] structure, backfilling
//! missing fields from a [`ResolvedTheme`](tinct_theme::ResolvedTheme).
//!
//! ```rust
//! use tinct::attr::{AttrConfig, Normalizer, Target};
//! use tinct::default_theme;
//! use serde_json::json;
//!
//! let config = AttrConfig::from_value(json!({ "start": "red", "end": { "opacity": 0.5 } })).unwrap();
//! let attrs = Normalizer::new("highlight").normalize(&config, default_theme()).unwrap();
//!
//! assert!(!attrs.contains(Target::Base));
//! assert_eq!(attrs.get(Target::Start).unwrap().color, "red");
//! assert_eq!(attrs.get(Target::End).unwrap().style_value("opacity"), Some(&json!(0.5)));
//! ```

mod config;
mod normalize;
mod target;

pub use config::AttrConfig;
pub use normalize::{normalize_attr, Normalizer, DISPLAY_PROPS};
pub use target::{
    DisplayAttrs, FillMode, StyleMap, Target, TargetAttributes, CLASS, COLOR, CONTENT_CLASS,
    FILL_MODE, STYLE,
};
