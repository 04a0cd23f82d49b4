//! Terminal color theme
//!
//! Adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with the
//! --light flag or CV_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for the viewer.
/// UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footer, disabled controls)
    pub text_dim: Color,
    /// Muted text (empty states, placeholder)
    pub text_muted: Color,

    /// Default border color
    pub border: Color,
    /// Informational border (header, help)
    pub border_accent: Color,
    /// Failure border (verdict banner on a loss)
    pub border_danger: Color,

    /// Section headers, accent text
    pub accent: Color,
    /// Matchup header line
    pub header: Color,
    /// Positive (converged rounds, win banner)
    pub good: Color,
    /// Negative (loss banner)
    pub bad: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_danger: Color::Red,
            accent: Color::Cyan,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_danger: Color::Red,
            accent: Color::Blue,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and the CV_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("CV_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15).
        // Light backgrounds typically have bg index >= 7, excluding 8
        // which is bright black.
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return bg_idx >= 7 && bg_idx != 8;
        }

        false
    }
}
