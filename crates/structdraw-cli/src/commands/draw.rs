use super::{build_algorithm, progress_handler};
use crate::cli::DrawArgs;
use crate::config::{AppConfig, build_config};
use crate::error::Result;
use structdraw::core::models::chain::Chain;
use structdraw::workflows::diagram::{DiagramSummary, draw_to_file};
use structdraw::workflows::model::{LoadOptions, load_model};
use structdraw::workflows::progress::ProgressReporter;
use tracing::{debug, info};

pub fn run(args: DrawArgs, quiet: bool) -> Result<()> {
    let AppConfig {
        algorithm,
        translation,
        style,
        canvas,
    } = build_config(&args.style)?;
    debug!("Chain style: {:?}", style);
    let algorithm = build_algorithm(&algorithm, translation, args.algorithm_output.as_deref())?;

    let handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let include_only = (!args.chains.is_empty()).then_some(args.chains.as_slice());
    let options = LoadOptions {
        include_only,
        expected_type: None,
    };

    info!("Loading input structure from {:?}", &args.input);
    let model = load_model(&args.input, algorithm.as_ref(), &options, &reporter)?;
    let chains: Vec<&Chain> = model.chains().iter().collect();
    info!("Drawing chains {:?} of {}", model.chain_ids(), model.model_id());

    let summary = draw_to_file(&chains, &style, &canvas, &args.output, &reporter)?;
    report_summary(&summary, &args.output);
    Ok(())
}

pub(crate) fn report_summary(summary: &DiagramSummary, output: &std::path::Path) {
    println!(
        "✓ Diagram of {} chain(s) ({}x{} px) written to: {}",
        summary.chains,
        summary.width,
        summary.height,
        output.display()
    );
}
