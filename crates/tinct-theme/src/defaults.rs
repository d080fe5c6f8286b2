//! The built-in default theme document.
//!
//! Every resolved theme is layered over this document, so any path defined
//! here is always answerable. Class names follow the `{prop}-{color}-{shade}`
//! utility convention (`bg-blue-l5`, `text-blue-d4`), where `l1`–`l5` are
//! progressively lighter and `d1`–`d5` progressively darker shades.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::document::ThemeDocument;
use crate::theme::{ResolvedTheme, ThemeOptions};

static DEFAULT_DOCUMENT: Lazy<ThemeDocument> = Lazy::new(build_default_document);

static DEFAULT_THEME: Lazy<ResolvedTheme> =
    Lazy::new(|| ResolvedTheme::generate(ThemeOptions::new()));

/// Returns the built-in default theme document.
pub fn default_document() -> &'static ThemeDocument {
    &DEFAULT_DOCUMENT
}

/// Returns the theme generated from the defaults with no overrides.
pub fn default_theme() -> &'static ResolvedTheme {
    &DEFAULT_THEME
}

fn build_default_document() -> ThemeDocument {
    ThemeDocument::from_value(json!({
        "color": "blue",
        "isDark": false,
        "highlight": {
            "base": { "fillMode": "light", "class": "hl hl-base" },
            "start": { "fillMode": "solid", "class": "hl hl-start" },
            "end": { "fillMode": "solid", "class": "hl hl-end" },
            "startEnd": { "fillMode": "solid", "class": "hl hl-start-end" }
        },
        "highlightFillLightBg": { "light": "bg-{color}-l5", "dark": "bg-{color}-d5" },
        "highlightFillLightText": { "light": "text-{color}-d4", "dark": "text-white" },
        "highlightFillSolidBg": { "light": "bg-{color}-d1", "dark": "bg-{color}-l1" },
        "highlightFillSolidText": "text-white"
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ResolveOverrides;
    use serde_json::json;

    #[test]
    fn test_default_document_is_populated() {
        let doc = default_document();
        assert_eq!(doc.get("color"), Some(&json!("blue")));
        assert_eq!(doc.get("isDark"), Some(&json!(false)));
        for target in ["base", "start", "end", "startEnd"] {
            assert!(doc.contains(&format!("highlight.{target}.fillMode")));
        }
    }

    #[test]
    fn test_default_theme_fill_classes() {
        let theme = default_theme();
        assert_eq!(theme.get("highlightFillLightBg"), Some(json!("bg-blue-l5")));
        assert_eq!(theme.get("highlightFillSolidText"), Some(json!("text-white")));

        let dark_red = ResolveOverrides::new().with_color("red").with_dark(true);
        assert_eq!(
            theme.resolve("highlightFillSolidBg", dark_red),
            Some(json!("bg-red-l1"))
        );
        assert_eq!(
            theme.resolve("highlightFillLightText", dark_red),
            Some(json!("text-white"))
        );
    }
}
