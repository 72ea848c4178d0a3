use super::error::WorkflowError;
use super::progress::{Progress, ProgressReporter};
use crate::core::algorithms::Algorithm;
use crate::core::io::detect::{DetectError, StructureFileType};
use crate::core::io::pdb::PdbFile;
use crate::core::io::pdbx::PdbxFile;
use crate::core::io::traits::BFactorSource;
use crate::core::models::model::StructureModel;
use crate::core::models::record::{BFactorTable, ResidueRecord};
use std::path::Path;
use tracing::{info, instrument, warn};

/// What to load from one structure file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions<'a> {
    /// Chains to keep; `None` keeps all. Unknown ids are ignored.
    pub include_only: Option<&'a [String]>,
    /// Fail with a type mismatch unless the file sniffs as this type.
    pub expected_type: Option<StructureFileType>,
}

/// Runs `algorithm` on `path` and returns its normalized records.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(
    path: &Path,
    algorithm: &dyn Algorithm,
) -> Result<Vec<ResidueRecord>, WorkflowError> {
    let output = algorithm.run(path)?;
    let records = algorithm.process_data(&output);
    if records.is_empty() {
        warn!(
            "{} produced no residue records for {}",
            algorithm.name(),
            path.display()
        );
    }
    Ok(records)
}

/// Reads per-residue B-factors with the reader matching `file_type`.
pub fn load_b_factors(
    path: &Path,
    file_type: StructureFileType,
) -> Result<BFactorTable, WorkflowError> {
    let table = match file_type {
        StructureFileType::Pdb => PdbFile::read_from_path(path),
        StructureFileType::Pdbx => PdbxFile::read_from_path(path),
    };
    table.map_err(|source| WorkflowError::BFactors {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds a [`StructureModel`] from one structure file.
///
/// The file is sniffed (and checked against `options.expected_type`), the algorithm is run on
/// it, and B-factors from its atom records are merged into every residue. The model id is the
/// file name.
#[instrument(skip_all, name = "load_model_workflow", fields(path = %path.display()))]
pub fn load_model(
    path: &Path,
    algorithm: &dyn Algorithm,
    options: &LoadOptions,
    reporter: &ProgressReporter,
) -> Result<StructureModel, WorkflowError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading Structure",
    });

    let file_type = match options.expected_type {
        Some(expected) => {
            StructureFileType::validate(path, expected)?;
            expected
        }
        None => StructureFileType::detect_from_path(path).map_err(DetectError::from)?,
    };

    let records = load_records(path, algorithm)?;
    let b_factors = load_b_factors(path, file_type)?;

    let model_id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let model = StructureModel::from_records(
        model_id,
        algorithm.name(),
        &records,
        Some(&b_factors),
        options.include_only,
    );
    info!(
        "Loaded {} chain(s) from {} ({} records, {} residues with B-factors)",
        model.chains().len(),
        path.display(),
        records.len(),
        b_factors.len()
    );
    reporter.report(Progress::PhaseFinish);
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::{Precomputed, algorithm_from_name};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const STRIDE_OUTPUT: &str = "\
ASG  MET A    1    1    C          Coil    360.00    150.21      99.8      1ABC
ASG  LYS A    2    2    H    AlphaHelix    -60.00    -45.00      40.1      1ABC
ASG  GLY B    1    3    E        Strand   -120.00    130.00      10.0      1ABC
";

    fn pdb_line(chain: char, res_seq: i32, b_factor: &str) -> String {
        format!(
            "ATOM  {:>5} {:<4} ALA {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6}",
            1, "CA", chain, res_seq, 0.0, 0.0, 0.0, 1.0, b_factor
        )
    }

    fn pdb_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", pdb_line('A', 1, "10.00")).unwrap();
        writeln!(file, "{}", pdb_line('A', 1, "20.00")).unwrap();
        writeln!(file, "{}", pdb_line('B', 1, "30.00")).unwrap();
        file
    }

    fn precomputed_stride() -> Precomputed {
        Precomputed::new(algorithm_from_name("stride", None).unwrap(), STRIDE_OUTPUT)
    }

    #[test]
    fn load_model_merges_b_factors_and_keeps_chain_order() {
        let file = pdb_file();
        let model = load_model(
            file.path(),
            &precomputed_stride(),
            &LoadOptions::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(model.chain_ids(), vec!["A", "B"]);
        assert_eq!(model.algorithm(), "stride");
        let chain_a = model.chain("A").unwrap();
        assert_eq!(chain_a.residues()[0].b_factors(), &[10.0, 20.0]);
        assert!(chain_a.residues()[1].b_factors().is_empty());
    }

    #[test]
    fn include_only_restricts_chains() {
        let file = pdb_file();
        let keep = vec!["B".to_string(), "Z".to_string()];
        let options = LoadOptions {
            include_only: Some(&keep),
            expected_type: None,
        };
        let model = load_model(
            file.path(),
            &precomputed_stride(),
            &options,
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(model.chain_ids(), vec!["B"]);
    }

    #[test]
    fn expected_type_mismatch_is_an_error() {
        let file = pdb_file();
        let options = LoadOptions {
            include_only: None,
            expected_type: Some(StructureFileType::Pdbx),
        };
        let err = load_model(
            file.path(),
            &precomputed_stride(),
            &options,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, WorkflowError::Detect(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_model(
            Path::new("/definitely/not/here.pdb"),
            &precomputed_stride(),
            &LoadOptions::default(),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, WorkflowError::Detect(_)));
    }
}
