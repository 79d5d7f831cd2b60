//! Theme system for the tab strip and demo surfaces.
//!
//! Themes can be constructed from the built-in palettes or loaded from
//! TOML files. Beyond the usual static colors, [`ThemeColors`] knows
//! how to interpolate a tab label between its muted and accent colors
//! from a 0.0–1.0 emphasis level, which is how drag progress becomes
//! visible in the strip.

use std::path::Path;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name.
    pub name: String,
    /// Color palette.
    pub colors: ThemeColors,
    /// Border styling for pane frames.
    pub borders: BorderStyle,
}

/// Color palette for the theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    /// Main background color.
    #[serde(with = "color_serde")]
    pub background: Color,
    /// Main foreground/text color.
    #[serde(with = "color_serde")]
    pub foreground: Color,
    /// Accent color for the active tab and underline.
    #[serde(with = "color_serde")]
    pub accent: Color,
    /// Selection/status background.
    #[serde(with = "color_serde")]
    pub selection: Color,
    /// Muted color for inactive tabs and secondary text.
    #[serde(with = "color_serde")]
    pub muted: Color,
}

/// Border style for pane frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Rounded corners (default).
    #[default]
    Rounded,
    /// Square corners.
    Square,
    /// Double-line borders.
    Double,
}

impl BorderStyle {
    /// Maps to the ratatui border type.
    #[must_use]
    pub fn border_type(self) -> BorderType {
        match self {
            BorderStyle::Rounded => BorderType::Rounded,
            BorderStyle::Square => BorderType::Plain,
            BorderStyle::Double => BorderType::Double,
        }
    }
}

impl ThemeColors {
    /// Color for a tab label at the given emphasis level.
    ///
    /// Interpolates muted -> accent. Levels outside 0.0–1.0 are
    /// clamped. Palettes with non-RGB colors fall back to a hard flip
    /// at the midpoint since there is nothing to interpolate in.
    #[must_use]
    pub fn emphasis(&self, level: f32) -> Color {
        lerp_color(self.muted, self.accent, level)
    }

    /// Color for the underline row beneath a tab at the given level.
    ///
    /// Fades the accent in from the background, the terminal stand-in
    /// for an alpha ramp.
    #[must_use]
    pub fn underline(&self, level: f32) -> Color {
        lerp_color(self.background, self.accent, level)
    }
}

fn lerp_color(from: Color, to: Color, level: f32) -> Color {
    let t = level.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
        }
        _ => {
            if t > 0.5 {
                to
            } else {
                from
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Serde support for ratatui colors as `"name"` or `"#rrggbb"` strings.
mod color_serde {
    use ratatui::style::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAMED: &[(&str, Color)] = &[
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("gray", Color::Gray),
        ("darkgray", Color::DarkGray),
        ("white", Color::White),
    ];

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        if let Color::Rgb(r, g, b) = color {
            return serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"));
        }
        match NAMED.iter().find(|(_, c)| c == color) {
            Some((name, _)) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(format!(
                "unsupported color: {color:?}"
            ))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }

    fn parse_color(s: &str) -> Result<Color, String> {
        let lower = s.to_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(format!("invalid hex color: {s}"));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color: {s}"))
            };
            return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, c)| *c)
            .ok_or_else(|| format!("unknown color: {s}"))
    }
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),
                foreground: Color::Rgb(205, 214, 244),
                accent: Color::Rgb(137, 180, 250),
                selection: Color::Rgb(88, 91, 112),
                muted: Color::Rgb(147, 153, 178),
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245),
                foreground: Color::Rgb(76, 79, 105),
                accent: Color::Rgb(30, 102, 245),
                selection: Color::Rgb(188, 192, 204),
                muted: Color::Rgb(108, 111, 133),
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a Nord theme.
    pub fn nord() -> Self {
        Theme {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(46, 52, 64),
                foreground: Color::Rgb(236, 239, 244),
                accent: Color::Rgb(136, 192, 208),
                selection: Color::Rgb(67, 76, 94),
                muted: Color::Rgb(76, 86, 106),
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Looks up a built-in theme by name (case-insensitive).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Theme::dark()),
            "light" => Some(Theme::light()),
            "nord" => Some(Theme::nord()),
            _ => None,
        }
    }

    /// Parses a theme from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or contains invalid
    /// color values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read and
    /// [`CoreError::Theme`] if it does not parse.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Theme::from_toml(&raw).map_err(|source| CoreError::Theme {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes() {
        assert_eq!(Theme::dark().name, "Dark");
        assert_eq!(Theme::light().name, "Light");
        assert_eq!(Theme::nord().name, "Nord");
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("NORD").map(|t| t.name), Some("Nord".into()));
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        for theme in [Theme::dark(), Theme::light(), Theme::nord()] {
            let raw = theme.to_toml().expect("serialize");
            let parsed = Theme::from_toml(&raw).expect("parse");
            assert_eq!(theme, parsed);
        }
    }

    #[test]
    fn test_named_color_parsing() {
        let raw = r#"
            name = "Plain"
            borders = "square"

            [colors]
            background = "black"
            foreground = "white"
            accent = "blue"
            selection = "gray"
            muted = "darkgray"
        "#;
        let theme = Theme::from_toml(raw).expect("should parse named colors");
        assert_eq!(theme.colors.background, Color::Black);
        assert_eq!(theme.colors.accent, Color::Blue);
        assert_eq!(theme.borders, BorderStyle::Square);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let raw = r##"
            name = "Broken"
            borders = "rounded"

            [colors]
            background = "#12345"
            foreground = "white"
            accent = "blue"
            selection = "gray"
            muted = "darkgray"
        "##;
        let err = Theme::from_toml(raw).expect_err("five hex digits must not parse");
        assert!(err.to_string().contains("invalid hex color"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(Theme::nord().to_toml().expect("toml").as_bytes())
            .expect("write");

        let theme = Theme::load(&path).expect("load");
        assert_eq!(theme, Theme::nord());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Theme::load(&dir.path().join("nope.toml")).expect_err("must fail");
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_emphasis_endpoints() {
        let colors = Theme::dark().colors;
        assert_eq!(colors.emphasis(0.0), colors.muted);
        assert_eq!(colors.emphasis(1.0), colors.accent);
        assert_eq!(colors.underline(0.0), colors.background);
        assert_eq!(colors.underline(1.0), colors.accent);
    }

    #[test]
    fn test_emphasis_is_clamped() {
        let colors = Theme::dark().colors;
        assert_eq!(colors.emphasis(-3.0), colors.emphasis(0.0));
        assert_eq!(colors.emphasis(7.5), colors.emphasis(1.0));
    }

    #[test]
    fn test_emphasis_midpoint_interpolates() {
        let colors = ThemeColors {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::White,
            accent: Color::Rgb(200, 100, 0),
            selection: Color::Gray,
            muted: Color::Rgb(0, 0, 0),
        };
        assert_eq!(colors.emphasis(0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_non_rgb_palette_flips_at_midpoint() {
        let colors = ThemeColors {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Blue,
            selection: Color::Gray,
            muted: Color::DarkGray,
        };
        assert_eq!(colors.emphasis(0.4), Color::DarkGray);
        assert_eq!(colors.emphasis(0.6), Color::Blue);
    }
}
