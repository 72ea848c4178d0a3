use super::color::Color;
use super::label::TextLabel;
use super::surface::{DrawSurface, FontSpec, TextMeasure};
use crate::core::models::chain::Chain;
use std::collections::BTreeMap;

pub const MISSING_VALUE: &str = "N/A";

/// The `key: value` labels stacked to the left of a chain's glyph rows.
#[derive(Debug, Clone)]
pub struct AnnotationArea {
    labels: Vec<TextLabel>,
    padding: i32,
}

impl AnnotationArea {
    /// Creates one label per enabled attribute, in key order. Unknown attributes read `N/A`.
    pub fn new(
        chain: &Chain,
        flags: &BTreeMap<String, bool>,
        font_size: f64,
        measure: &(impl TextMeasure + ?Sized),
    ) -> Self {
        let labels = flags
            .iter()
            .filter(|(_, shown)| **shown)
            .map(|(key, _)| {
                let value = chain
                    .attribute(key)
                    .unwrap_or_else(|| MISSING_VALUE.to_string());
                TextLabel::new(
                    format!("{key}: {value}"),
                    FontSpec::sans(font_size),
                    Color::BLACK,
                    measure,
                )
            })
            .collect();
        Self {
            labels,
            padding: (font_size * 0.5) as i32,
        }
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn width(&self) -> i32 {
        self.labels.iter().map(TextLabel::width).max().unwrap_or(0)
    }

    pub fn height(&self) -> i32 {
        self.padding * self.labels.len() as i32
            + self.labels.iter().map(TextLabel::height).sum::<i32>()
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, y_offset: i32) {
        let mut y = y_offset;
        for label in &self.labels {
            label.draw(self.padding, y, surface);
            y += label.height() + self.padding;
        }
    }
}
