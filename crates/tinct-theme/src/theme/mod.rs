//! Resolved themes with light/dark variants and color templating.
//!
//! A theme is a [`ThemeDocument`](crate::ThemeDocument) merged over the
//! built-in defaults, plus an ambient color and mode. Values are resolved on
//! demand rather than precomputed, so a single theme can answer the same
//! path for different colors and modes:
//!
//! ```yaml
//! color: blue
//! isDark: false
//!
//! # Shared across modes, templated on the color
//! highlightFillSolidText: text-white
//!
//! # Mode-specific variants
//! highlightFillLightBg:
//!   light: bg-{color}-l5
//!   dark: bg-{color}-d5
//! ```
//!
//! ## Resolution Order
//!
//! When resolving `highlightFillLightBg` with color `red` in dark mode:
//! 1. Look up the value (`{ light: ..., dark: ... }`)
//! 2. It is a variant value, so pick the `dark` branch (`bg-{color}-d5`)
//! 3. Substitute the color: `bg-red-d5`
//!
//! ## Color Mode Detection
//!
//! [`detect_color_mode`] queries the OS for the user's preferred scheme.
//! Override it for testing with [`set_theme_detector`].

mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{detect_color_mode, reset_theme_detector, set_theme_detector, ColorMode};
pub use theme::{
    generate_theme, is_variant, ResolveOverrides, ResolvedTheme, ThemeOptions, COLOR_KEY,
    COLOR_TOKEN, IS_DARK_KEY,
};
