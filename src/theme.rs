//! Theme colors loaded from Omarchy/Hyprland system theme
//! Reads colors from ~/.config/omarchy/current/theme/kitty.conf

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

use crate::config::AppConfig;
use crate::view::StyleToken;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,           // Glyph tint; tracks the system accent
    pub text: Color,             // Primary text (foreground)
    #[allow(dead_code)]
    pub text_dim: Color,         // Dimmed text - read by the preview footer
    #[allow(dead_code)]
    pub bg: Color,               // Background - reserved for future use
}

impl Default for Theme {
    fn default() -> Self {
        // ANSI fallbacks when no system theme can be loaded. Blue is the
        // conventional system accent; Reset keeps text on the terminal's
        // own foreground.
        Self {
            accent: Color::Blue,
            text: Color::Reset,
            text_dim: Color::DarkGray,
            bg: Color::Reset,
        }
    }
}

impl Theme {
    /// Load theme from the Omarchy system theme, then apply any accent
    /// override from the user config.
    pub fn load(config: &AppConfig) -> Self {
        let mut theme = Self::load_omarchy_theme().unwrap_or_default();

        if let Some(hex) = &config.accent {
            match Self::parse_hex_color(hex) {
                Some(color) => theme.accent = color,
                None => tracing::warn!("Ignoring invalid accent override: {}", hex),
            }
        }

        theme
    }

    /// Resolve a style token against this theme. Called at draw time so
    /// the tint always reflects the currently loaded theme.
    pub fn resolve(&self, token: StyleToken) -> Color {
        match token {
            StyleToken::Tint => self.accent,
            StyleToken::Foreground => self.text,
        }
    }

    /// Load colors from Omarchy kitty.conf theme file
    fn load_omarchy_theme() -> Option<Self> {
        let home = dirs::home_dir()?;
        let theme_path = home.join(".config/omarchy/current/theme/kitty.conf");

        let content = fs::read_to_string(&theme_path).ok()?;
        let colors = Self::parse_kitty_conf(&content);

        if colors.is_empty() {
            return None;
        }

        // color2 carries the accent in Omarchy palettes (gold in Matte
        // Black), with color10 as the bright fallback.
        let accent = colors
            .get("color2")
            .or(colors.get("color10"))
            .copied()
            .unwrap_or(Color::Rgb(255, 193, 7)); // #FFC107

        let text = colors
            .get("foreground")
            .copied()
            .unwrap_or(Color::Rgb(190, 190, 190)); // #bebebe

        let text_dim = colors
            .get("color8")
            .copied()
            .unwrap_or(Color::Rgb(138, 138, 141)); // #8a8a8d

        let bg = colors
            .get("background")
            .copied()
            .unwrap_or(Color::Rgb(18, 18, 18)); // #121212

        Some(Self {
            accent,
            text,
            text_dim,
            bg,
        })
    }

    /// Parse kitty.conf format: `key value` or `key #hexcolor`
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse "key value" format
            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                let key = parts[0].trim();
                let value = parts[1].trim();

                // Parse hex color
                if let Some(color) = Self::parse_hex_color(value) {
                    colors.insert(key.to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
