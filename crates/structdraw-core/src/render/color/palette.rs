use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}' (expected #RGB or #RRGGBB)")]
    InvalidHex(String),
    #[error("Unknown color name '{0}'")]
    UnknownName(String),
}

#[derive(Debug, Error)]
pub enum PaletteFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Palette file defines both categorical colors and bands")]
    Ambiguous,
    #[error("Palette file defines neither categorical colors nor bands")]
    Empty,
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fallback for anything a coloring mode cannot classify.
    pub const NEUTRAL_GRAY: Color = Color::rgb(0xCC, 0xCC, 0xCC);
    /// Label color used on dark fills.
    pub const LIGHT_TEXT: Color = Color::rgb(0xFF, 0xFF, 0x99);
    /// Label color used on light fills.
    pub const DARK_TEXT: Color = Color::BLACK;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness, `0.299 R + 0.587 G + 0.114 B`, in `0..=255`.
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Text color that stays readable on top of `self`.
    pub fn contrast_text(&self, threshold: f64) -> Color {
        if self.luminance() < threshold {
            Self::LIGHT_TEXT
        } else {
            Self::DARK_TEXT
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(format!("#{hex}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

static NAMED_COLORS: Map<&'static str, Color> = phf_map! {
    "black" => Color::rgb(0, 0, 0),
    "white" => Color::rgb(255, 255, 255),
    "red" => Color::rgb(255, 0, 0),
    "green" => Color::rgb(0, 128, 0),
    "lime" => Color::rgb(0, 255, 0),
    "blue" => Color::rgb(0, 0, 255),
    "cyan" => Color::rgb(0, 255, 255),
    "magenta" => Color::rgb(255, 0, 255),
    "yellow" => Color::rgb(255, 255, 0),
    "orange" => Color::rgb(255, 165, 0),
    "purple" => Color::rgb(128, 0, 128),
    "pink" => Color::rgb(255, 192, 203),
    "brown" => Color::rgb(165, 42, 42),
    "grey" => Color::rgb(128, 128, 128),
    "gray" => Color::rgb(128, 128, 128),
    "lightgrey" => Color::rgb(211, 211, 211),
    "lightgray" => Color::rgb(211, 211, 211),
    "darkgrey" => Color::rgb(169, 169, 169),
    "darkgray" => Color::rgb(169, 169, 169),
    "silver" => Color::rgb(192, 192, 192),
    "lightblue" => Color::rgb(173, 216, 230),
    "navy" => Color::rgb(0, 0, 128),
    "teal" => Color::rgb(0, 128, 128),
    "darkgreen" => Color::rgb(0, 100, 0),
    "olive" => Color::rgb(128, 128, 0),
    "maroon" => Color::rgb(128, 0, 0),
    "gold" => Color::rgb(255, 215, 0),
    "violet" => Color::rgb(238, 130, 238),
};

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        NAMED_COLORS
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A numeric range `[low, high)` and the color assigned to values inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorBand {
    pub low: f64,
    pub high: f64,
    pub color: Color,
}

impl ColorBand {
    pub const fn new(low: f64, high: f64, color: Color) -> Self {
        Self { low, high, color }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value < self.high
    }
}

/// A user palette, replacing the built-in one of a coloring mode.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteSpec {
    /// Category name to color; names are matched case-insensitively.
    Categorical(HashMap<String, Color>),
    /// Ordered numeric bands, first match wins.
    Bands(Vec<ColorBand>),
}

impl PaletteSpec {
    /// Loads a palette from a TOML file holding either a `[colors]` table or `[[bands]]` entries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteFileError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, PaletteFileError> {
        let raw: RawPaletteFile = toml::from_str(content)?;
        match (raw.colors, raw.bands) {
            (Some(_), Some(_)) => Err(PaletteFileError::Ambiguous),
            (Some(colors), None) => Ok(Self::Categorical(colors)),
            (None, Some(bands)) => Ok(Self::Bands(bands)),
            (None, None) => Err(PaletteFileError::Empty),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaletteFile {
    colors: Option<HashMap<String, Color>>,
    bands: Option<Vec<ColorBand>>,
}

/// Lowercases the keys of a categorical palette for case-insensitive lookups.
pub(crate) fn normalize_keys(palette: &HashMap<String, Color>) -> HashMap<String, Color> {
    palette
        .iter()
        .map(|(key, color)| (key.to_ascii_lowercase(), *color))
        .collect()
}

/// Uppercases the keys of a one-letter palette; residue letters are then matched as written.
pub(crate) fn uppercase_keys(palette: &HashMap<String, Color>) -> HashMap<String, Color> {
    palette
        .iter()
        .map(|(key, color)| (key.to_ascii_uppercase(), *color))
        .collect()
}

/// Builds a categorical palette from static `(name, hex)` pairs.
pub(crate) fn categorical(entries: &[(&str, Color)]) -> HashMap<String, Color> {
    entries
        .iter()
        .map(|(key, color)| (key.to_ascii_lowercase(), *color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!("#FF7F00".parse::<Color>().unwrap(), Color::rgb(255, 127, 0));
        assert_eq!("#0f0".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("Green".parse::<Color>().unwrap(), Color::rgb(0, 128, 0));
        assert_eq!("grey".parse::<Color>().unwrap(), "gray".parse::<Color>().unwrap());
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert_eq!(
            "chartreuse-ish".parse::<Color>(),
            Err(ColorError::UnknownName("chartreuse-ish".to_string()))
        );
    }

    #[test]
    fn contrast_text_switches_at_threshold() {
        assert_eq!(Color::BLACK.contrast_text(128.0), Color::LIGHT_TEXT);
        assert_eq!(Color::WHITE.contrast_text(128.0), Color::DARK_TEXT);
        // Pure green sits at 0.587 * 255 = 149.7.
        assert_eq!(Color::rgb(0, 255, 0).contrast_text(128.0), Color::DARK_TEXT);
        assert_eq!(Color::rgb(0, 0, 255).contrast_text(128.0), Color::LIGHT_TEXT);
    }

    #[test]
    fn bands_are_half_open() {
        let band = ColorBand::new(20.0, 40.0, Color::WHITE);
        assert!(band.contains(20.0));
        assert!(band.contains(39.99));
        assert!(!band.contains(40.0));
        assert!(!band.contains(19.99));
    }

    #[test]
    fn loads_categorical_and_band_palettes_from_toml() {
        let categorical = PaletteSpec::from_toml("[colors]\nhelix = \"red\"\nStrand = \"#00FF00\"\n")
            .unwrap();
        match categorical {
            PaletteSpec::Categorical(map) => {
                assert_eq!(map.get("helix"), Some(&Color::rgb(255, 0, 0)));
                assert_eq!(map.get("Strand"), Some(&Color::rgb(0, 255, 0)));
            }
            other => panic!("unexpected palette {other:?}"),
        }

        let bands = PaletteSpec::from_toml(
            "[[bands]]\nlow = 0.0\nhigh = 50.0\ncolor = \"blue\"\n\n[[bands]]\nlow = 50.0\nhigh = 100.0\ncolor = \"red\"\n",
        )
        .unwrap();
        assert_eq!(
            bands,
            PaletteSpec::Bands(vec![
                ColorBand::new(0.0, 50.0, Color::rgb(0, 0, 255)),
                ColorBand::new(50.0, 100.0, Color::rgb(255, 0, 0)),
            ])
        );
    }

    #[test]
    fn palette_file_must_hold_exactly_one_kind() {
        assert!(matches!(
            PaletteSpec::from_toml(""),
            Err(PaletteFileError::Empty)
        ));
        assert!(matches!(
            PaletteSpec::from_toml("[colors]\na = \"red\"\n[[bands]]\nlow = 0.0\nhigh = 1.0\ncolor = \"red\"\n"),
            Err(PaletteFileError::Ambiguous)
        ));
        assert!(matches!(
            PaletteSpec::from_toml("[colors]\na = \"nope\"\n"),
            Err(PaletteFileError::Toml(_))
        ));
    }

    #[test]
    fn color_serializes_as_hex() {
        let value: String = Color::rgb(1, 2, 255).into();
        assert_eq!(value, "#0102FF");
    }
}
