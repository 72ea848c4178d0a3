use super::color::{Color, ColorMode, ColorModeError, PaletteSpec, create_mode};
use super::surface::DEFAULT_FONT_FAMILY;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Shape size must be greater than zero")]
    InvalidShapeSize,
    #[error("Shape size must be at most {max} pixels")]
    ShapeSizeTooLarge { max: u32 },
    #[error("Split must be greater than zero")]
    InvalidSplit,
    #[error("Split must be at most {max} residues per row")]
    SplitTooLarge { max: usize },
    #[error("Invalid residue range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("Unknown title position '{0}' (valid: left, centered, right)")]
    UnknownTitlePosition(String),
    #[error(transparent)]
    ColorMode(#[from] ColorModeError),
}

/// Chain attributes shown in the annotation area by default.
pub fn default_annotation() -> BTreeMap<String, bool> {
    BTreeMap::from([
        ("algorithm".to_string(), false),
        ("chain_id".to_string(), true),
        ("model_id".to_string(), true),
    ])
}

/// How one chain is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStyle {
    pub shape_size: u32,
    pub show_amino_code: bool,
    /// Maximum glyphs per row; `None` draws a single row.
    pub split: Option<usize>,
    pub start: usize,
    /// Exclusive end of the drawn range; clamped to the chain length.
    pub end: Option<usize>,
    /// Attribute name to visibility; shown entries are listed in key order.
    pub annotation: BTreeMap<String, bool>,
    pub color_mode: String,
    pub color_sub_mode: String,
    pub palette: Option<PaletteSpec>,
}

impl ChainStyle {
    pub fn builder() -> ChainStyleBuilder {
        ChainStyleBuilder::new()
    }

    pub fn color_mode(&self) -> Result<Box<dyn ColorMode>, ColorModeError> {
        create_mode(&self.color_mode, &self.color_sub_mode, self.palette.as_ref())
    }
}

#[derive(Default)]
pub struct ChainStyleBuilder {
    shape_size: Option<u32>,
    show_amino_code: Option<bool>,
    split: Option<usize>,
    start: Option<usize>,
    end: Option<usize>,
    annotation: Option<BTreeMap<String, bool>>,
    color_mode: Option<String>,
    color_sub_mode: Option<String>,
    palette: Option<PaletteSpec>,
}

impl ChainStyleBuilder {
    pub const DEFAULT_SHAPE_SIZE: u32 = 50;
    /// Largest accepted glyph size; keeps every pixel coordinate within `i32`.
    pub const MAX_SHAPE_SIZE: u32 = 10_000;
    pub const MAX_SPLIT: usize = 100_000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape_size(mut self, size: u32) -> Self {
        self.shape_size = Some(size);
        self
    }
    pub fn show_amino_code(mut self, show: bool) -> Self {
        self.show_amino_code = Some(show);
        self
    }
    pub fn split(mut self, split: Option<usize>) -> Self {
        self.split = split;
        self
    }
    pub fn start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }
    pub fn end(mut self, end: Option<usize>) -> Self {
        self.end = end;
        self
    }
    pub fn annotation(mut self, annotation: BTreeMap<String, bool>) -> Self {
        self.annotation = Some(annotation);
        self
    }
    pub fn color_mode(mut self, mode: impl Into<String>) -> Self {
        self.color_mode = Some(mode.into());
        self
    }
    pub fn color_sub_mode(mut self, sub_mode: impl Into<String>) -> Self {
        self.color_sub_mode = Some(sub_mode.into());
        self
    }
    pub fn palette(mut self, palette: Option<PaletteSpec>) -> Self {
        self.palette = palette;
        self
    }

    /// Validates the settings, including the color mode, and fills defaults.
    pub fn build(self) -> Result<ChainStyle, ConfigError> {
        let shape_size = self.shape_size.unwrap_or(Self::DEFAULT_SHAPE_SIZE);
        if shape_size == 0 {
            return Err(ConfigError::InvalidShapeSize);
        }
        if shape_size > Self::MAX_SHAPE_SIZE {
            return Err(ConfigError::ShapeSizeTooLarge {
                max: Self::MAX_SHAPE_SIZE,
            });
        }
        match self.split {
            Some(0) => return Err(ConfigError::InvalidSplit),
            Some(split) if split > Self::MAX_SPLIT => {
                return Err(ConfigError::SplitTooLarge {
                    max: Self::MAX_SPLIT,
                });
            }
            _ => {}
        }
        let start = self.start.unwrap_or(0);
        if let Some(end) = self.end {
            if start > end {
                return Err(ConfigError::InvalidRange { start, end });
            }
        }

        let style = ChainStyle {
            shape_size,
            show_amino_code: self.show_amino_code.unwrap_or(true),
            split: self.split,
            start,
            end: self.end,
            annotation: self.annotation.unwrap_or_else(default_annotation),
            color_mode: self.color_mode.unwrap_or_else(|| "structure".to_string()),
            color_sub_mode: self
                .color_sub_mode
                .unwrap_or_else(|| "secondary".to_string()),
            palette: self.palette,
        };
        style.color_mode()?;
        Ok(style)
    }
}

/// Horizontal anchor of the canvas title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePosition {
    #[default]
    Left,
    Centered,
    Right,
}

impl fmt::Display for TitlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Centered => "centered",
            Self::Right => "right",
        })
    }
}

impl FromStr for TitlePosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "centered" | "center" => Ok(Self::Centered),
            "right" => Ok(Self::Right),
            _ => Err(ConfigError::UnknownTitlePosition(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSpec {
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub position: TitlePosition,
}

impl TitleSpec {
    pub fn new(text: impl Into<String>, font_size: f64, position: TitlePosition) -> Self {
        Self {
            text: text.into(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub background: Color,
    pub title: Option<TitleSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let style = ChainStyle::builder().build().unwrap();
        assert_eq!(style.shape_size, 50);
        assert!(style.show_amino_code);
        assert_eq!(style.split, None);
        assert_eq!(style.start, 0);
        assert_eq!(style.color_mode, "structure");
        assert_eq!(style.color_sub_mode, "secondary");
        assert_eq!(style.annotation, default_annotation());
    }

    #[test]
    fn builder_rejects_invalid_settings() {
        assert_eq!(
            ChainStyle::builder().shape_size(0).build(),
            Err(ConfigError::InvalidShapeSize)
        );
        assert_eq!(
            ChainStyle::builder().split(Some(0)).build(),
            Err(ConfigError::InvalidSplit)
        );
        assert_eq!(
            ChainStyle::builder().shape_size(u32::MAX).build(),
            Err(ConfigError::ShapeSizeTooLarge { max: 10_000 })
        );
        assert_eq!(
            ChainStyle::builder().split(Some(usize::MAX)).build(),
            Err(ConfigError::SplitTooLarge { max: 100_000 })
        );
        assert!(ChainStyle::builder().shape_size(10_000).split(Some(100_000)).build().is_ok());
        assert_eq!(
            ChainStyle::builder().start(5).end(Some(3)).build(),
            Err(ConfigError::InvalidRange { start: 5, end: 3 })
        );
        assert!(matches!(
            ChainStyle::builder().color_sub_mode("mean").build(),
            Err(ConfigError::ColorMode(_))
        ));
    }

    #[test]
    fn default_annotation_shows_chain_and_model() {
        let annotation = default_annotation();
        assert_eq!(annotation.get("chain_id"), Some(&true));
        assert_eq!(annotation.get("model_id"), Some(&true));
        assert_eq!(annotation.get("algorithm"), Some(&false));
    }

    #[test]
    fn title_position_parses_known_anchors() {
        assert_eq!("Centered".parse::<TitlePosition>(), Ok(TitlePosition::Centered));
        assert_eq!("right".parse::<TitlePosition>(), Ok(TitlePosition::Right));
        assert_eq!(
            "top".parse::<TitlePosition>(),
            Err(ConfigError::UnknownTitlePosition("top".to_string()))
        );
    }
}
