use super::annotation::AnnotationArea;
use super::color::ColorModeError;
use super::config::ChainStyle;
use super::layout::ResidueTrack;
use super::surface::{DrawSurface, TextMeasure};
use crate::core::models::chain::Chain;

/// A chain laid out for drawing: its annotation area beside its glyph rows.
#[derive(Debug, Clone)]
pub struct ChainView {
    annotation: AnnotationArea,
    track: ResidueTrack,
}

impl ChainView {
    /// Lays out `chain` with `style`. Annotation text uses the glyph size as its font size.
    pub fn new(
        chain: &Chain,
        style: &ChainStyle,
        measure: &(impl TextMeasure + ?Sized),
    ) -> Result<Self, ColorModeError> {
        let color_mode = style.color_mode()?;
        // Bounded by `ChainStyleBuilder::MAX_SHAPE_SIZE`.
        let shape_size = i32::try_from(style.shape_size).unwrap_or(i32::MAX);
        let end = style.end.unwrap_or(chain.len());
        Ok(Self {
            annotation: AnnotationArea::new(
                chain,
                &style.annotation,
                f64::from(style.shape_size),
                measure,
            ),
            track: ResidueTrack::new(
                chain,
                style.start..end,
                shape_size,
                style.split,
                style.show_amino_code,
                color_mode.as_ref(),
                measure,
            ),
        })
    }

    pub fn annotation(&self) -> &AnnotationArea {
        &self.annotation
    }

    pub fn track(&self) -> &ResidueTrack {
        &self.track
    }

    pub fn width(&self) -> i32 {
        self.track.width() + self.annotation.width()
    }

    pub fn height(&self) -> i32 {
        self.track.height().max(self.annotation.height())
    }

    /// Draws the annotation at the left edge and the glyph rows `x_offset` to the right.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, y_offset: i32, x_offset: i32) {
        self.annotation.draw(surface, y_offset);
        self.track.draw(surface, x_offset, y_offset);
    }
}
