//! Light/dark color mode and OS detection.
//!
//! Resolved themes carry an `isDark` flag that picks the `dark` or `light`
//! branch of every variant value. [`ColorMode`] is the typed form of that
//! flag. Callers that want to follow the OS preference can ask
//! [`detect_color_mode`], which queries the platform through `dark-light`.
//!
//! # Testing
//!
//! Use [`set_theme_detector`] to force a mode:
//!
//! ```rust
//! use tinct_theme::{detect_color_mode, set_theme_detector, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! ```

use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The display mode a theme resolves its variant values for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light backgrounds; selects the `light` branch of variant values.
    #[default]
    Light,
    /// Dark backgrounds; selects the `dark` branch of variant values.
    Dark,
}

impl ColorMode {
    /// Converts an `isDark` flag into a mode.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// The variant key this mode selects (`"light"` or `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_color_mode));

/// Overrides the detector used by [`detect_color_mode`].
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores OS-based detection after [`set_theme_detector`].
pub fn reset_theme_detector() {
    set_theme_detector(os_color_mode);
}

/// Detects the preferred color mode.
///
/// Uses the configured detector (default: ask the OS). Detection failures
/// and platforms without a preference resolve to [`ColorMode::Light`].
pub fn detect_color_mode() -> ColorMode {
    let detector = *THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_color_mode() -> ColorMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ColorMode::Dark,
        Ok(_) => ColorMode::Light,
        Err(err) => {
            tracing::debug!(error = ?err, "color mode detection failed, assuming light");
            ColorMode::Light
        }
    }
}
