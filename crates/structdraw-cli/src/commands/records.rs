use super::build_algorithm;
use crate::cli::RecordsArgs;
use crate::config::{FileConfig, merge_algorithm};
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use structdraw::core::io::records::write_records_to_path;
use structdraw::workflows::model::load_records;
use tracing::info;

pub fn run(args: RecordsArgs) -> Result<()> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    let (name, translation) = merge_algorithm(
        args.algorithm.as_deref(),
        file_config.algorithm,
        &DefaultsConfig::default(),
    )?;
    let algorithm = build_algorithm(&name, translation, args.algorithm_output.as_deref())?;

    info!("Running {} on {:?}", algorithm.name(), &args.input);
    let records = load_records(&args.input, algorithm.as_ref())?;
    write_records_to_path(&args.output, &records).map_err(|e| CliError::FileParsing {
        path: args.output.clone(),
        source: e.into(),
    })?;

    println!(
        "✓ {} residue record(s) written to: {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}
