use super::draw::report_summary;
use super::{build_algorithm, progress_handler};
use crate::cli::AlignArgs;
use crate::config::{AppConfig, build_config};
use crate::error::Result;
use structdraw::core::algorithms::Algorithm;
use structdraw::core::models::chain::Chain;
use structdraw::workflows::alignment::load_aligned_models;
use structdraw::workflows::diagram::{DiagramSummary, draw_to_file};
use structdraw::workflows::progress::ProgressReporter;
use tracing::info;

pub fn run(args: AlignArgs, quiet: bool) -> Result<()> {
    let config = build_config(&args.style)?;
    let algorithm = build_algorithm(&config.algorithm, config.translation.clone(), None)?;

    let handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let summary = execute(&args, &config, algorithm.as_ref(), &reporter)?;
    report_summary(&summary, &args.output);
    Ok(())
}

/// Loads every aligned model and draws all of their chains, model by model, in one diagram.
pub fn execute(
    args: &AlignArgs,
    config: &AppConfig,
    algorithm: &dyn Algorithm,
    reporter: &ProgressReporter,
) -> Result<DiagramSummary> {
    info!(
        "Loading aligned models from {:?} (structures in {:?})",
        &args.alignment, &args.data_dir
    );
    let models = load_aligned_models(&args.alignment, &args.data_dir, algorithm, reporter)?;
    let chains: Vec<&Chain> = models.iter().flat_map(|model| model.chains()).collect();
    info!(
        "Drawing {} aligned chain(s) from {} model(s)",
        chains.len(),
        models.len()
    );
    Ok(draw_to_file(
        &chains,
        &config.style,
        &config.canvas,
        &args.output,
        reporter,
    )?)
}
