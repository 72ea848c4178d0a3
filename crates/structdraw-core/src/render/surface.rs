use super::color::Color;
use nalgebra::Point2;

/// An integer pixel position, origin at the top-left corner, y pointing down.
pub type Pixel = Point2<i32>;

pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Font size in pixels.
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn sans(size: f64) -> Self {
        Self::new(DEFAULT_FONT_FAMILY, size)
    }
}

/// Ink bounding box of a rendered string relative to its draw origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub outline: Color,
    pub outline_width: u32,
}

/// Text measurement, needed before anything is drawn to size the layout.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: &FontSpec) -> TextBox;
}

/// The primitives a rendering backend must offer.
pub trait DrawSurface: TextMeasure {
    fn fill_background(&mut self, color: Color);

    /// Axis-aligned rectangle spanning both corners, inclusive.
    fn rectangle(&mut self, top_left: Pixel, bottom_right: Pixel, style: &ShapeStyle);

    fn polygon(&mut self, points: &[Pixel], style: &ShapeStyle);

    fn line(&mut self, from: Pixel, to: Pixel, color: Color, width: u32);

    /// Draws `text` with its layout origin (not its ink box) at `origin`.
    fn text(&mut self, origin: Pixel, text: &str, font: &FontSpec, color: Color);
}

/// Font-independent text metrics: every glyph advances 0.6 em and text is 0.75 em tall.
///
/// Keeps layouts reproducible on machines without the requested font installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatedMetrics;

impl EstimatedMetrics {
    pub const ADVANCE_EM: f64 = 0.6;
    pub const HEIGHT_EM: f64 = 0.75;
}

impl TextMeasure for EstimatedMetrics {
    fn measure_text(&self, text: &str, font: &FontSpec) -> TextBox {
        let chars = text.chars().count();
        if chars == 0 {
            return TextBox::default();
        }
        TextBox {
            offset_x: 0,
            offset_y: 0,
            width: (chars as f64 * font.size * Self::ADVANCE_EM).round() as i32,
            height: (font.size * Self::HEIGHT_EM).round() as i32,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_metrics_scale_with_font_size_and_length() {
        let font = FontSpec::sans(20.0);
        let bbox = EstimatedMetrics.measure_text("chain_id: A", &font);
        assert_eq!(bbox.width, 132);
        assert_eq!(bbox.height, 15);
        assert_eq!((bbox.offset_x, bbox.offset_y), (0, 0));
    }

    #[test]
    fn empty_text_has_empty_box() {
        assert_eq!(
            EstimatedMetrics.measure_text("", &FontSpec::sans(50.0)),
            TextBox::default()
        );
    }
}
