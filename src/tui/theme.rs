use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemePreference, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub accent: Color,
    pub link: Color,
    pub chip_bg: Color,
    pub chip_pressed_bg: Color,
    pub chip_pressed_fg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    /// Per-tag colors
    pub tag_colors: HashMap<String, Color>,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            surface: Color::Rgb(0x1A, 0x0F, 0x2E),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            accent: Color::Rgb(0xCC, 0x66, 0xFF),
            link: Color::Rgb(0x44, 0xDD, 0xFF),
            chip_bg: Color::Rgb(0x2A, 0x1F, 0x45),
            chip_pressed_bg: Color::Rgb(0xFB, 0x41, 0x96),
            chip_pressed_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            tag_colors: HashMap::new(),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xF8, 0xFF),
            surface: Color::Rgb(0xEE, 0xEA, 0xFA),
            text: Color::Rgb(0x3A, 0x35, 0x60),
            text_bright: Color::Rgb(0x0C, 0x00, 0x1B),
            highlight: Color::Rgb(0xC0, 0x1F, 0x6E),
            dim: Color::Rgb(0x80, 0x7A, 0xA0),
            accent: Color::Rgb(0x7A, 0x2E, 0xC0),
            link: Color::Rgb(0x1A, 0x6F, 0xB0),
            chip_bg: Color::Rgb(0xE0, 0xDA, 0xF5),
            chip_pressed_bg: Color::Rgb(0xC0, 0x1F, 0x6E),
            chip_pressed_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            search_match_bg: Color::Rgb(0xFF, 0xD7, 0x00),
            search_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            tag_colors: HashMap::new(),
        }
    }

    /// Build the palette for `preference`, then apply the matching overrides
    /// from `[ui.colors]` (dark) or `[ui.light_colors]` (light).
    pub fn from_config(ui: &UiConfig, preference: ThemePreference) -> Self {
        let (mut theme, overrides) = match preference {
            ThemePreference::Dark => (Theme::dark(), &ui.colors),
            ThemePreference::Light => (Theme::light(), &ui.light_colors),
        };

        for (key, value) in overrides {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "link" => theme.link = color,
                    "chip_bg" => theme.chip_bg = color,
                    "chip_pressed_bg" => theme.chip_pressed_bg = color,
                    "chip_pressed_fg" => theme.chip_pressed_fg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Get the color for a tag, falling back to text color
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).copied().unwrap_or(self.text)
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
