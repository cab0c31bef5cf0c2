//! Colors and ANSI escape sequence generation.
//!
//! A [`Theme`] either carries hex colors that are turned into 24-bit ANSI
//! sequences, or is [`Theme::plain`], which emits no escape codes at all.
//!
//! # Example
//!
//! ```rust
//! use tablescout::ui::Theme;
//!
//! let theme = Theme::default();
//! let red = theme.fg(&theme.colors.favorite_fg);
//! assert!(red.starts_with("\u{1b}[38;2;"));
//! assert_eq!(Theme::plain().fg("#ffffff"), "");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// `false` disables every escape sequence.
    pub enabled: bool,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    pub text_dim: String,
    pub rating_fg: String,
    pub favorite_fg: String,
    pub error_fg: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            header_fg: "#89b4fa".to_string(),
            text_dim: "#6c7086".to_string(),
            rating_fg: "#f9e2af".to_string(),
            favorite_fg: "#f38ba8".to_string(),
            error_fg: "#eba0ac".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: ThemeColors::default(),
        }
    }
}

impl Theme {
    /// A theme that produces uncolored output.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            colors: ThemeColors::default(),
        }
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    #[must_use]
    pub fn fg(&self, hex: &str) -> String {
        if !self.enabled {
            return String::new();
        }
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold(&self) -> &'static str {
        if self.enabled { "\u{001b}[1m" } else { "" }
    }

    #[must_use]
    pub const fn dim(&self) -> &'static str {
        if self.enabled { "\u{001b}[2m" } else { "" }
    }

    #[must_use]
    pub const fn reset(&self) -> &'static str {
        if self.enabled { "\u{001b}[0m" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_become_truecolor_sequences() {
        let theme = Theme::default();
        assert_eq!(theme.fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(theme.fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn plain_theme_is_silent() {
        let theme = Theme::plain();
        assert_eq!(theme.bold(), "");
        assert_eq!(theme.reset(), "");
    }
}
