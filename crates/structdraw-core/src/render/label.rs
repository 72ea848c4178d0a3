use super::color::Color;
use super::surface::{DrawSurface, FontSpec, Pixel, TextBox, TextMeasure};

/// A single line of text whose ink box was measured when it was created.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    text: String,
    font: FontSpec,
    fill: Color,
    bbox: TextBox,
}

impl TextLabel {
    pub fn new(
        text: impl Into<String>,
        font: FontSpec,
        fill: Color,
        measure: &(impl TextMeasure + ?Sized),
    ) -> Self {
        let text = text.into();
        let bbox = measure.measure_text(&text, &font);
        Self {
            text,
            font,
            fill,
            bbox,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> i32 {
        self.bbox.width
    }

    pub fn height(&self) -> i32 {
        self.bbox.height
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.bbox.offset_x, self.bbox.offset_y)
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, x: i32, y: i32, surface: &mut S) {
        surface.text(Pixel::new(x, y), &self.text, &self.font, self.fill);
    }
}
