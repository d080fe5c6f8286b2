//! Highlight attributes with fill-mode classes.
//!
//! A highlight is normalized like any other attribute (type `highlight`),
//! then each target gets two computed classes picked by its fill mode:
//!
//! | Fill mode | Background (`class`) | Content (`contentClass`) |
//! |-----------|----------------------|--------------------------|
//! | `light` | `highlightFillLightBg` | `highlightFillLightText` |
//! | `solid` | `highlightFillSolidBg` | `highlightFillSolidText` |
//!
//! Both are resolved in the target's own color and the theme's mode. Any
//! other fill mode, or none, adds nothing.

use tinct_theme::{default_theme, ResolveOverrides, ResolvedTheme};

use crate::attr::{AttrConfig, DisplayAttrs, FillMode, Normalizer, TargetAttributes};

/// Attribute type used for highlights.
pub const HIGHLIGHT: &str = "highlight";

pub const FILL_LIGHT_BG: &str = "highlightFillLightBg";
pub const FILL_LIGHT_TEXT: &str = "highlightFillLightText";
pub const FILL_SOLID_BG: &str = "highlightFillSolidBg";
pub const FILL_SOLID_TEXT: &str = "highlightFillSolidText";

/// Theme paths of the background and content classes for a fill mode.
pub fn fill_class_paths(mode: &FillMode) -> Option<(&'static str, &'static str)> {
    match mode {
        FillMode::Light => Some((FILL_LIGHT_BG, FILL_LIGHT_TEXT)),
        FillMode::Solid => Some((FILL_SOLID_BG, FILL_SOLID_TEXT)),
        FillMode::Other(_) => None,
    }
}

/// Normalizes a highlight configuration and appends its fill classes.
///
/// Returns `None` when the highlight is disabled.
///
/// # Example
///
/// ```rust
/// use tinct::{generate_theme, normalize_highlight, AttrConfig, ThemeOptions};
///
/// let theme = generate_theme(ThemeOptions::new().color("red"));
/// let attrs = normalize_highlight(&AttrConfig::from(true), &theme).unwrap();
///
/// let base = attrs.base().unwrap();
/// assert_eq!(base.class.as_deref(), Some("hl hl-base bg-red-l5"));
/// assert_eq!(base.content_class.as_deref(), Some("text-red-d4"));
/// ```
pub fn normalize_highlight(config: &AttrConfig, theme: &ResolvedTheme) -> Option<TargetAttributes> {
    let mut attrs = Normalizer::new(HIGHLIGHT).normalize(config, theme)?;
    for (target, display) in attrs.iter_mut() {
        let Some((bg, text)) = fill_classes(display, theme) else {
            let fill_mode = &display.fill_mode;
            tracing::trace!(%target, ?fill_mode, "no fill classes for target");
            continue;
        };
        display.append_class(bg.as_deref());
        display.append_content_class(text.as_deref());
    }
    Some(attrs)
}

/// [`normalize_highlight`] against the default theme.
pub fn normalize_highlight_default(config: &AttrConfig) -> Option<TargetAttributes> {
    normalize_highlight(config, default_theme())
}

fn fill_classes(
    display: &DisplayAttrs,
    theme: &ResolvedTheme,
) -> Option<(Option<String>, Option<String>)> {
    let (bg_path, text_path) = fill_class_paths(display.fill_mode.as_ref()?)?;
    let overrides = ResolveOverrides::new()
        .with_color(&display.color)
        .with_dark(theme.is_dark());
    Some((
        theme.resolve_str(bg_path, overrides),
        theme.resolve_str(text_path, overrides),
    ))
}
