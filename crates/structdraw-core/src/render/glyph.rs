use super::color::Color;
use super::label::TextLabel;
use super::surface::{DrawSurface, FontSpec, Pixel, ShapeStyle, TextMeasure};
use crate::core::models::residue::Residue;
use crate::core::utils::translation::{GAP, HELIX, OTHER, STRAND};
use nalgebra::{Point2, Vector2};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Amino-acid labels are drawn at this fraction of the glyph size.
pub const LABEL_FONT_RATIO: f64 = 0.4;
/// Fills darker than this luminance get a light label.
pub const CONTRAST_THRESHOLD: f64 = 128.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("Unknown position tag '{tag}' (valid: first, inner, last)")]
    UnknownPositionTag { tag: String },
}

/// Silhouette family of a glyph, derived from a residue's structural label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    Helix,
    Strand,
    Other,
    Gap,
}

impl GlyphClass {
    /// Unrecognized labels, including custom translation labels, draw as [`GlyphClass::Other`].
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(HELIX) {
            Self::Helix
        } else if label.eq_ignore_ascii_case(STRAND) {
            Self::Strand
        } else if label.eq_ignore_ascii_case(GAP) {
            Self::Gap
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helix => HELIX,
            Self::Strand => STRAND,
            Self::Other => OTHER,
            Self::Gap => GAP,
        }
    }

    /// Outline kind and normalized points for this class at `tag`.
    pub fn outline(&self, tag: PositionTag) -> (OutlineKind, &'static [(f64, f64)]) {
        use PositionTag::*;
        match (self, tag) {
            (Self::Helix, First) => (OutlineKind::Polygon, HELIX_FIRST),
            (Self::Helix, Inner) => (OutlineKind::Polygon, HELIX_INNER),
            (Self::Helix, Last) => (OutlineKind::Polygon, HELIX_LAST),
            (Self::Strand, First | Inner) => (OutlineKind::Rectangle, STRAND_BODY),
            (Self::Strand, Last) => (OutlineKind::Polygon, STRAND_ARROW),
            (Self::Other, _) => (OutlineKind::Rectangle, OTHER_BODY),
            (Self::Gap, _) => (OutlineKind::Line, GAP_TICK),
        }
    }

    /// Outline stroke width for a glyph of `size` pixels.
    pub fn outline_width(&self, size: i32) -> u32 {
        let ratio = match self {
            Self::Helix | Self::Strand => 0.05,
            Self::Other => 0.03,
            Self::Gap => return 1,
        };
        (f64::from(size) * ratio).ceil() as u32
    }
}

/// Where a residue sits inside a run of consecutive residues with the same glyph class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionTag {
    First,
    Inner,
    Last,
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Inner => "inner",
            Self::Last => "last",
        })
    }
}

impl FromStr for PositionTag {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "inner" => Ok(Self::Inner),
            "last" => Ok(Self::Last),
            _ => Err(GlyphError::UnknownPositionTag { tag: s.to_string() }),
        }
    }
}

/// Tags every entry of `classes` with its position in its run.
///
/// A residue whose successor has a different class is `Last`, and its successor starts the next
/// run as `First`. The final entry is always `Last`, so a run of length one is tagged `Last`.
pub fn assign_position_tags(classes: &[GlyphClass]) -> Vec<PositionTag> {
    let mut tags = Vec::with_capacity(classes.len());
    let mut current = PositionTag::First;
    for (i, class) in classes.iter().enumerate() {
        let mut run_ends = false;
        match classes.get(i + 1) {
            Some(next) if next != class => {
                run_ends = true;
                current = PositionTag::Last;
            }
            Some(_) => {}
            None => current = PositionTag::Last,
        }
        tags.push(current);
        current = if run_ends {
            PositionTag::First
        } else {
            PositionTag::Inner
        };
    }
    tags
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// Two points: opposite corners.
    Rectangle,
    Polygon,
    /// Two points: the ends of a segment.
    Line,
}

const HELIX_FIRST: &[(f64, f64)] = &[
    (0.0, 0.3), (0.4, 0.3), (0.6, 0.1), (1.0, 0.1),
    (1.0, 0.5), (0.8, 0.5), (0.6, 0.7), (0.0, 0.7),
];
const HELIX_INNER: &[(f64, f64)] = &[
    (0.0, 0.1), (0.2, 0.1), (0.4, 0.25), (0.6, 0.25), (0.8, 0.1), (1.0, 0.1),
    (1.0, 0.5), (0.8, 0.5), (0.7, 0.7), (0.3, 0.7), (0.2, 0.5), (0.0, 0.5),
];
const HELIX_LAST: &[(f64, f64)] = &[
    (0.0, 0.1), (0.5, 0.1), (0.7, 0.3), (1.0, 0.3),
    (1.0, 0.7), (0.4, 0.7), (0.2, 0.5), (0.0, 0.5),
];
const STRAND_BODY: &[(f64, f64)] = &[(0.0, 0.2), (1.0, 0.8)];
const STRAND_ARROW: &[(f64, f64)] = &[
    (0.0, 0.2), (0.4, 0.2), (0.4, 0.0), (1.0, 0.5),
    (0.4, 1.0), (0.4, 0.8), (0.0, 0.8),
];
const OTHER_BODY: &[(f64, f64)] = &[(0.0, 0.3), (1.0, 0.7)];
const GAP_TICK: &[(f64, f64)] = &[(0.1, 0.5), (0.9, 0.5)];

/// Scales normalized points by `size`, rounds half to even, and translates them to `origin`.
pub fn scale_outline(points: &[(f64, f64)], size: i32, origin: Pixel) -> Vec<Pixel> {
    let scale = f64::from(size);
    let offset = Vector2::new(origin.x, origin.y);
    points
        .iter()
        .map(|&(x, y)| {
            let scaled = Point2::new(x, y) * scale;
            Pixel::new(
                scaled.x.round_ties_even() as i32,
                scaled.y.round_ties_even() as i32,
            ) + offset
        })
        .collect()
}

/// The drawable form of one residue.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    class: GlyphClass,
    tag: PositionTag,
    size: i32,
    fill: Color,
    label: Option<TextLabel>,
}

impl Glyph {
    pub fn new(
        residue: &Residue,
        tag: PositionTag,
        size: i32,
        fill: Color,
        show_amino_code: bool,
        measure: &(impl TextMeasure + ?Sized),
    ) -> Self {
        let text = residue.amino_acid_label();
        let label = (show_amino_code && !text.is_empty()).then(|| {
            TextLabel::new(
                text,
                FontSpec::sans(f64::from(size) * LABEL_FONT_RATIO),
                fill.contrast_text(CONTRAST_THRESHOLD),
                measure,
            )
        });
        Self {
            class: GlyphClass::from_label(&residue.secondary_structure),
            tag,
            size,
            fill,
            label,
        }
    }

    pub fn class(&self) -> GlyphClass {
        self.class
    }

    pub fn tag(&self) -> PositionTag {
        self.tag
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn label(&self) -> Option<&TextLabel> {
        self.label.as_ref()
    }

    pub fn height(&self) -> i32 {
        self.size
    }

    /// Draws the outline with its top-left corner at `origin`, then the centered label.
    pub fn draw<S: DrawSurface + ?Sized>(&self, origin: Pixel, surface: &mut S) {
        let (kind, normalized) = self.class.outline(self.tag);
        let points = scale_outline(normalized, self.size, origin);
        let style = ShapeStyle {
            fill: self.fill,
            outline: Color::BLACK,
            outline_width: self.class.outline_width(self.size),
        };
        match kind {
            OutlineKind::Rectangle => surface.rectangle(points[0], points[1], &style),
            OutlineKind::Polygon => surface.polygon(&points, &style),
            OutlineKind::Line => surface.line(points[0], points[1], Color::BLACK, 1),
        }

        if let Some(label) = &self.label {
            let (offset_x, offset_y) = label.offset();
            let x = origin.x + (self.size - label.width()).div_euclid(2) - offset_x;
            let y = origin.y + (self.size - label.height()).div_euclid(2) - offset_y;
            label.draw(x, y, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::ResidueRecord;
    use crate::render::surface::EstimatedMetrics;
    use crate::render::surface::recording::{DrawCall, RecordingSurface};
    use PositionTag::*;

    fn residue(label: &str, aa: char) -> Residue {
        let record = ResidueRecord {
            residue_index: 1,
            insertion_code: None,
            chain_id: "A".to_string(),
            amino_acid: aa,
            ss_label: label.to_string(),
            ss_code: 'H',
        };
        Residue::from_record(&record, Vec::new())
    }

    fn classes(pattern: &str) -> Vec<GlyphClass> {
        pattern
            .chars()
            .map(|c| match c {
                'H' => GlyphClass::Helix,
                'E' => GlyphClass::Strand,
                '-' => GlyphClass::Gap,
                _ => GlyphClass::Other,
            })
            .collect()
    }

    #[test]
    fn class_from_label_is_case_insensitive_with_other_fallback() {
        assert_eq!(GlyphClass::from_label("Helix"), GlyphClass::Helix);
        assert_eq!(GlyphClass::from_label("strand"), GlyphClass::Strand);
        assert_eq!(GlyphClass::from_label("gap"), GlyphClass::Gap);
        assert_eq!(GlyphClass::from_label("Turn"), GlyphClass::Other);
    }

    #[test]
    fn tags_mark_run_boundaries() {
        assert_eq!(
            assign_position_tags(&classes("HHHEEC")),
            vec![First, Inner, Last, First, Last, Last]
        );
    }

    #[test]
    fn single_member_runs_are_last() {
        assert_eq!(assign_position_tags(&classes("HEH")), vec![Last, Last, Last]);
        assert_eq!(assign_position_tags(&classes("C")), vec![Last]);
        assert!(assign_position_tags(&[]).is_empty());
    }

    #[test]
    fn every_run_has_exactly_one_last_and_starts_with_first_when_longer_than_one() {
        let input = classes("HHCCCCEEEH-HH");
        let tags = assign_position_tags(&input);
        assert_eq!(tags.len(), input.len());
        let mut start = 0;
        while start < input.len() {
            let mut end = start;
            while end + 1 < input.len() && input[end + 1] == input[start] {
                end += 1;
            }
            assert_eq!(tags[end], Last);
            if end > start {
                assert_eq!(tags[start], First);
                assert!(tags[start + 1..end].iter().all(|t| *t == Inner));
            }
            start = end + 1;
        }
    }

    #[test]
    fn unknown_position_tag_is_an_error() {
        assert_eq!("inner".parse::<PositionTag>(), Ok(Inner));
        assert_eq!(
            "middle".parse::<PositionTag>(),
            Err(GlyphError::UnknownPositionTag {
                tag: "middle".to_string()
            })
        );
    }

    #[test]
    fn outline_points_are_scaled_rounded_and_translated() {
        let (_, points) = GlyphClass::Helix.outline(Inner);
        let scaled = scale_outline(points, 50, Pixel::new(100, 10));
        // 0.25 * 50 = 12.5 rounds to the even neighbour.
        assert_eq!(scaled[2], Pixel::new(120, 22));
        assert_eq!(scaled[0], Pixel::new(100, 15));
        assert_eq!(scaled[11], Pixel::new(100, 35));
    }

    #[test]
    fn stroke_width_scales_with_size() {
        assert_eq!(GlyphClass::Helix.outline_width(50), 3);
        assert_eq!(GlyphClass::Other.outline_width(50), 2);
        assert_eq!(GlyphClass::Strand.outline_width(10), 1);
        assert_eq!(GlyphClass::Gap.outline_width(50), 1);
    }

    #[test]
    fn strand_body_is_a_rectangle_and_last_is_an_arrow() {
        let mut surface = RecordingSurface::new();
        let metrics = EstimatedMetrics;
        Glyph::new(&residue("Strand", 'V'), Inner, 50, Color::WHITE, false, &metrics)
            .draw(Pixel::new(0, 0), &mut surface);
        Glyph::new(&residue("Strand", 'V'), Last, 50, Color::WHITE, false, &metrics)
            .draw(Pixel::new(50, 0), &mut surface);

        assert!(matches!(
            &surface.calls[0],
            DrawCall::Rectangle { top_left, bottom_right, .. }
                if *top_left == Pixel::new(0, 10) && *bottom_right == Pixel::new(50, 40)
        ));
        match &surface.calls[1] {
            DrawCall::Polygon { points, style } => {
                assert_eq!(points.len(), 7);
                assert_eq!(points[3], Pixel::new(100, 25));
                assert_eq!(style.outline_width, 3);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn gap_draws_a_black_tick_without_label() {
        let mut surface = RecordingSurface::new();
        Glyph::new(&Residue::gap(), Last, 50, Color::BLACK, true, &EstimatedMetrics)
            .draw(Pixel::new(0, 0), &mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Line {
                from: Pixel::new(5, 25),
                to: Pixel::new(45, 25),
                color: Color::BLACK,
                width: 1,
            }]
        );
    }

    #[test]
    fn label_is_centered_with_contrast_color() {
        let mut surface = RecordingSurface::new();
        let glyph = Glyph::new(
            &residue("Other", 'G'),
            Last,
            50,
            Color::rgb(0, 0, 128),
            true,
            &EstimatedMetrics,
        );
        glyph.draw(Pixel::new(10, 20), &mut surface);

        // Font 20 px: 12 px wide, 15 px tall.
        match surface.calls.last() {
            Some(DrawCall::Text {
                origin,
                text,
                size,
                color,
            }) => {
                assert_eq!(text, "G");
                assert_eq!(*size, 20.0);
                assert_eq!(*origin, Pixel::new(10 + 19, 20 + 17));
                assert_eq!(*color, Color::LIGHT_TEXT);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
