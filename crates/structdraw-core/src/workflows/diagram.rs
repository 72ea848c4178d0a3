use super::error::WorkflowError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::chain::Chain;
use crate::render::canvas::Canvas;
use crate::render::chain_view::ChainView;
use crate::render::config::{CanvasConfig, ChainStyle};
use crate::render::surface::{EstimatedMetrics, TextMeasure};
use crate::render::svg::SvgSurface;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramSummary {
    pub chains: usize,
    pub width: i32,
    pub height: i32,
}

/// Lays out `chains` top to bottom, all drawn with `style`.
pub fn build_canvas<'c>(
    chains: impl IntoIterator<Item = &'c Chain>,
    style: &ChainStyle,
    config: &CanvasConfig,
    measure: &(impl TextMeasure + ?Sized),
) -> Result<Canvas, WorkflowError> {
    let mut canvas = Canvas::new(config, measure);
    for chain in chains {
        canvas.add_chain(ChainView::new(chain, style, measure)?);
    }
    Ok(canvas)
}

/// Renders a laid-out canvas into a fresh SVG document of the canvas size.
pub fn render_svg(canvas: &Canvas) -> SvgSurface {
    let mut surface = SvgSurface::new(canvas.width(), canvas.height());
    canvas.render(&mut surface);
    surface
}

/// Draws `chains` and writes the diagram to `output` as SVG.
#[instrument(skip_all, name = "diagram_workflow", fields(output = %output.display()))]
pub fn draw_to_file(
    chains: &[&Chain],
    style: &ChainStyle,
    config: &CanvasConfig,
    output: &Path,
    reporter: &ProgressReporter,
) -> Result<DiagramSummary, WorkflowError> {
    if chains.is_empty() {
        return Err(WorkflowError::NoChains);
    }

    reporter.report(Progress::PhaseStart { name: "Layout" });
    let metrics = EstimatedMetrics;
    let mut canvas = Canvas::new(config, &metrics);
    reporter.task(chains.iter(), |chain| {
        canvas.add_chain(ChainView::new(chain, style, &metrics)?);
        Ok::<_, WorkflowError>(())
    })?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Rendering" });
    let surface = render_svg(&canvas);
    surface
        .save(output)
        .map_err(|source| WorkflowError::Output {
            path: output.to_path_buf(),
            source,
        })?;
    reporter.report(Progress::PhaseFinish);

    let summary = DiagramSummary {
        chains: chains.len(),
        width: canvas.width(),
        height: canvas.height(),
    };
    info!(
        "Wrote {}x{} diagram with {} chain(s) to {}",
        summary.width,
        summary.height,
        summary.chains,
        output.display()
    );
    Ok(summary)
}
