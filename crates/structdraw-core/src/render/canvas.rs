use super::chain_view::ChainView;
use super::color::Color;
use super::config::{CanvasConfig, TitlePosition, TitleSpec};
use super::label::TextLabel;
use super::surface::{DrawSurface, FontSpec, TextMeasure};
use tracing::debug;

/// An optional single line of text above all chains.
#[derive(Debug, Clone)]
pub struct Title {
    label: TextLabel,
    position: TitlePosition,
}

impl Title {
    pub fn new(spec: &TitleSpec, measure: &(impl TextMeasure + ?Sized)) -> Self {
        Self {
            label: TextLabel::new(
                spec.text.clone(),
                FontSpec::new(spec.font_family.clone(), spec.font_size),
                Color::BLACK,
                measure,
            ),
            position: spec.position,
        }
    }

    /// Vertical space reserved above the chains.
    pub fn height(&self) -> i32 {
        2 * self.label.height()
    }

    /// Top-left corner of the text on a canvas `canvas_width` pixels wide.
    pub fn origin(&self, canvas_width: i32) -> (i32, i32) {
        let width = f64::from(canvas_width);
        let x = match self.position {
            TitlePosition::Left => width * 0.1,
            TitlePosition::Centered => width * 0.5,
            TitlePosition::Right => f64::from(canvas_width - self.label.width()) * 0.9,
        };
        let y = f64::from(self.label.height()) * 0.25;
        (x as i32, y as i32)
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, canvas_width: i32) {
        let (x, y) = self.origin(canvas_width);
        self.label.draw(x, y, surface);
    }
}

/// Chains stacked top to bottom under an optional title.
#[derive(Debug, Clone)]
pub struct Canvas {
    background: Color,
    title: Option<Title>,
    chains: Vec<ChainView>,
}

impl Canvas {
    pub fn new(config: &CanvasConfig, measure: &(impl TextMeasure + ?Sized)) -> Self {
        Self {
            background: config.background,
            title: config.title.as_ref().map(|spec| Title::new(spec, measure)),
            chains: Vec::new(),
        }
    }

    pub fn add_chain(&mut self, chain: ChainView) {
        self.chains.push(chain);
    }

    pub fn chains(&self) -> &[ChainView] {
        &self.chains
    }

    pub fn title_height(&self) -> i32 {
        self.title.as_ref().map_or(0, Title::height)
    }

    /// Widest glyph track plus the shared annotation column.
    pub fn width(&self) -> i32 {
        let track_width = self
            .chains
            .iter()
            .map(|chain| chain.track().width())
            .max()
            .unwrap_or(0);
        track_width + self.annotation_offset()
    }

    pub fn height(&self) -> i32 {
        self.chains.iter().map(ChainView::height).sum::<i32>() + self.title_height()
    }

    /// Glyph rows of every chain start after the widest annotation area.
    fn annotation_offset(&self) -> i32 {
        self.chains
            .iter()
            .map(|chain| chain.annotation().width())
            .max()
            .unwrap_or(0)
    }

    /// Renders background, title, then every chain in insertion order.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        debug!(
            "Rendering {} chain(s) on a {}x{} canvas",
            self.chains.len(),
            self.width(),
            self.height()
        );
        surface.fill_background(self.background);
        if let Some(title) = &self.title {
            title.draw(surface, self.width());
        }

        let x_offset = self.annotation_offset();
        let mut y_offset = self.title_height();
        for chain in &self.chains {
            chain.draw(surface, y_offset, x_offset);
            y_offset += chain.height();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::ResidueRecord;
    use crate::core::models::residue::Residue;
    use crate::core::models::chain::Chain;
    use crate::render::config::ChainStyle;
    use crate::render::surface::EstimatedMetrics;
    use crate::render::surface::recording::{DrawCall, RecordingSurface};
    use std::collections::BTreeMap;

    fn chain(id: &str, len: usize) -> Chain {
        let residues = (0..len)
            .map(|i| {
                let record = ResidueRecord {
                    residue_index: i as i32,
                    insertion_code: None,
                    chain_id: id.to_string(),
                    amino_acid: 'G',
                    ss_label: "Helix".to_string(),
                    ss_code: 'H',
                };
                Residue::from_record(&record, Vec::new())
            })
            .collect();
        Chain::new(id, "dssp", "m.pdb", residues)
    }

    fn style(annotation: BTreeMap<String, bool>) -> ChainStyle {
        ChainStyle::builder()
            .shape_size(20)
            .show_amino_code(false)
            .annotation(annotation)
            .build()
            .unwrap()
    }

    #[test]
    fn canvas_size_is_max_width_and_summed_heights_plus_title() {
        let metrics = EstimatedMetrics;
        let config = CanvasConfig {
            background: Color::WHITE,
            title: Some(TitleSpec::new("Demo", 40.0, TitlePosition::Left)),
        };
        let mut canvas = Canvas::new(&config, &metrics);
        let no_labels = style(BTreeMap::new());
        canvas.add_chain(ChainView::new(&chain("A", 5), &no_labels, &metrics).unwrap());
        canvas.add_chain(ChainView::new(&chain("B", 3), &no_labels, &metrics).unwrap());

        // Title label height is 30 px.
        assert_eq!(canvas.title_height(), 60);
        assert_eq!(canvas.width(), 5 * 20 + 40);
        assert_eq!(canvas.height(), 2 * (20 + 20) + 60);
    }

    #[test]
    fn empty_canvas_has_only_title_height() {
        let canvas = Canvas::new(&CanvasConfig::default(), &EstimatedMetrics);
        assert_eq!((canvas.width(), canvas.height()), (0, 0));
    }

    #[test]
    fn title_anchors() {
        let metrics = EstimatedMetrics;
        // 10 characters at 10 px font: 60 px wide, 8 px tall.
        let title = |position| Title::new(&TitleSpec::new("0123456789", 10.0, position), &metrics);
        assert_eq!(title(TitlePosition::Left).origin(1000), (100, 2));
        assert_eq!(title(TitlePosition::Centered).origin(1000), (500, 2));
        assert_eq!(title(TitlePosition::Right).origin(1000), (846, 2));
    }

    #[test]
    fn render_order_is_background_title_then_chains() {
        let metrics = EstimatedMetrics;
        let config = CanvasConfig {
            background: Color::rgb(1, 2, 3),
            title: Some(TitleSpec::new("T", 20.0, TitlePosition::Centered)),
        };
        let mut canvas = Canvas::new(&config, &metrics);
        let flags = BTreeMap::from([("chain_id".to_string(), true)]);
        canvas.add_chain(ChainView::new(&chain("A", 2), &style(flags.clone()), &metrics).unwrap());
        canvas.add_chain(ChainView::new(&chain("B", 2), &style(flags), &metrics).unwrap());

        let mut surface = RecordingSurface::new();
        canvas.render(&mut surface);

        assert_eq!(surface.calls[0], DrawCall::Background(Color::rgb(1, 2, 3)));
        let texts = surface.texts();
        assert_eq!(texts[0].0, "T");
        assert_eq!(texts[1].0, "chain_id: A");
        assert_eq!(texts[2].0, "chain_id: B");
        // Title is 15 px tall, so chains start at y = 30; chain A is 40 px tall.
        assert_eq!(texts[1].1.y, 30);
        assert_eq!(texts[2].1.y, 70);
        assert_eq!(surface.shape_count(), 4);
    }

    #[test]
    fn glyphs_start_after_widest_annotation() {
        let metrics = EstimatedMetrics;
        let mut canvas = Canvas::new(&CanvasConfig::default(), &metrics);
        let wide = BTreeMap::from([("model_id".to_string(), true)]);
        canvas.add_chain(ChainView::new(&chain("A", 1), &style(wide), &metrics).unwrap());
        canvas.add_chain(ChainView::new(&chain("B", 1), &style(BTreeMap::new()), &metrics).unwrap());

        let mut surface = RecordingSurface::new();
        canvas.render(&mut surface);
        // "model_id: m.pdb" is 15 characters at 12 px.
        let polygons: Vec<i32> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Polygon { points, .. } => Some(points[0].x),
                _ => None,
            })
            .collect();
        assert_eq!(polygons, vec![180 + 20, 180 + 20]);
    }

    #[test]
    fn width_covers_long_track_under_wide_annotation_of_another_chain() {
        let metrics = EstimatedMetrics;
        let mut canvas = Canvas::new(&CanvasConfig::default(), &metrics);
        let flags = BTreeMap::from([("model_id".to_string(), true)]);
        let mut short = chain("A", 2);
        short.model_id = "a_very_long_model_name.pdb".to_string();
        let mut long = chain("B", 20);
        long.model_id = "x.pdb".to_string();
        canvas.add_chain(ChainView::new(&short, &style(flags.clone()), &metrics).unwrap());
        canvas.add_chain(ChainView::new(&long, &style(flags), &metrics).unwrap());

        let mut surface = RecordingSurface::new();
        canvas.render(&mut surface);
        let rightmost = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Polygon { points, .. } => points.iter().map(|p| p.x).max(),
                _ => None,
            })
            .max()
            .unwrap();

        // "model_id: a_very_long_model_name.pdb" is 36 characters at 12 px.
        assert_eq!(canvas.width(), 20 * 20 + 40 + 36 * 12);
        assert!(rightmost <= canvas.width());
    }
}
