use super::color::Color;
use super::surface::{
    DrawSurface, EstimatedMetrics, FontSpec, Pixel, ShapeStyle, TextBox, TextMeasure,
};
use std::io;
use std::path::Path;
use svg::Document;
use svg::Node;
use svg::node::element::{Line, Polygon, Rectangle, Text};

/// A [`DrawSurface`] that builds an SVG document.
///
/// Text is placed with `dominant-baseline="hanging"` so the draw origin is the top of the text,
/// consistent with [`EstimatedMetrics`], which it uses for measurement.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    document: Document,
    width: i32,
    height: i32,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));
        Self {
            document,
            width,
            height,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        svg::save(path, &self.document)
    }

    fn points_attribute(points: &[Pixel]) -> String {
        points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TextMeasure for SvgSurface {
    fn measure_text(&self, text: &str, font: &FontSpec) -> TextBox {
        EstimatedMetrics.measure_text(text, font)
    }
}

impl DrawSurface for SvgSurface {
    fn fill_background(&mut self, color: Color) {
        self.document.append(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", self.width)
                .set("height", self.height)
                .set("fill", color.to_hex()),
        );
    }

    fn rectangle(&mut self, top_left: Pixel, bottom_right: Pixel, style: &ShapeStyle) {
        self.document.append(
            Rectangle::new()
                .set("x", top_left.x)
                .set("y", top_left.y)
                .set("width", bottom_right.x - top_left.x)
                .set("height", bottom_right.y - top_left.y)
                .set("fill", style.fill.to_hex())
                .set("stroke", style.outline.to_hex())
                .set("stroke-width", style.outline_width),
        );
    }

    fn polygon(&mut self, points: &[Pixel], style: &ShapeStyle) {
        self.document.append(
            Polygon::new()
                .set("points", Self::points_attribute(points))
                .set("fill", style.fill.to_hex())
                .set("stroke", style.outline.to_hex())
                .set("stroke-width", style.outline_width),
        );
    }

    fn line(&mut self, from: Pixel, to: Pixel, color: Color, width: u32) {
        self.document.append(
            Line::new()
                .set("x1", from.x)
                .set("y1", from.y)
                .set("x2", to.x)
                .set("y2", to.y)
                .set("stroke", color.to_hex())
                .set("stroke-width", width),
        );
    }

    fn text(&mut self, origin: Pixel, text: &str, font: &FontSpec, color: Color) {
        self.document.append(
            Text::new(text)
                .set("x", origin.x)
                .set("y", origin.y)
                .set("font-family", font.family.as_str())
                .set("font-size", font.size)
                .set("dominant-baseline", "hanging")
                .set("fill", color.to_hex()),
        );
    }
}
