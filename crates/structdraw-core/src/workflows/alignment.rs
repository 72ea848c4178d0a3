use super::error::WorkflowError;
use super::model::{LoadOptions, load_model};
use super::progress::{Progress, ProgressReporter};
use crate::core::algorithms::Algorithm;
use crate::core::io::alignment::{AlignmentFile, group_by_model};
use crate::core::io::detect::StructureFileType;
use crate::core::models::model::StructureModel;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Loads every structure referenced by an alignment file and re-threads its chains.
///
/// Headers name `<model>|<type>|<chain>`; each distinct `<model>.<type>` is loaded once from
/// `data_dir`, restricted to the chains the alignment lists for it, and every listed chain is
/// re-threaded with its aligned sequence. When `<type>` names a known file type the file must
/// sniff as that type. Models are returned in first-appearance order.
#[instrument(skip_all, name = "alignment_workflow", fields(alignment = %alignment_path.display()))]
pub fn load_aligned_models(
    alignment_path: &Path,
    data_dir: &Path,
    algorithm: &dyn Algorithm,
    reporter: &ProgressReporter,
) -> Result<Vec<StructureModel>, WorkflowError> {
    reporter.report(Progress::PhaseStart {
        name: "Reading Alignment",
    });
    let records = AlignmentFile::read_from_path(alignment_path)?;
    let aligned = group_by_model(&records);
    info!(
        "Alignment lists {} chain(s) across {} structure file(s)",
        records.len(),
        aligned.len()
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Loading Aligned Models",
    });
    let silent = ProgressReporter::new();
    let models = reporter.task(aligned.iter(), |entry| {
        let path = data_dir.join(&entry.file_name);
        let chain_ids = entry.chain_ids();
        let expected_type = entry
            .file_name
            .rsplit_once('.')
            .and_then(|(_, tag)| tag.parse::<StructureFileType>().ok());
        if expected_type.is_none() {
            warn!("Unrecognized file type in '{}'; sniffing instead", entry.file_name);
        }
        let options = LoadOptions {
            include_only: Some(&chain_ids),
            expected_type,
        };

        let mut model = load_model(&path, algorithm, &options, &silent)?;
        for (chain_id, sequence) in &entry.chains {
            model.chain_mut(chain_id)?.align_seq(sequence)?;
            debug!("Re-threaded chain '{}' of {}", chain_id, entry.file_name);
        }
        Ok::<_, WorkflowError>(model)
    })?;
    reporter.report(Progress::PhaseFinish);
    Ok(models)
}
