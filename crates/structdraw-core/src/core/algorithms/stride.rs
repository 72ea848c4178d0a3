use super::{Algorithm, AlgorithmError, run_command};
use crate::core::io::columns::char_at;
use crate::core::models::record::ResidueRecord;
use crate::core::utils::identifiers::one_letter_code;
use crate::core::utils::translation::TranslationTable;
use std::path::Path;
use tracing::trace;

/// Adapter for Stride; only its `ASG` assignment lines carry per-residue data.
#[derive(Debug, Clone)]
pub struct Stride {
    program: String,
    translation: TranslationTable,
}

impl Stride {
    pub fn new(program: impl Into<String>, translation: Option<TranslationTable>) -> Self {
        Self {
            program: program.into(),
            translation: translation.unwrap_or_else(TranslationTable::stride_default),
        }
    }

    pub fn translation(&self) -> &TranslationTable {
        &self.translation
    }

    fn parse_line(&self, line: &str) -> Option<ResidueRecord> {
        let amino_acid = one_letter_code(line.get(5..8)?);
        let chain_id = char_at(line, 9)?;
        let (residue_index, insertion_code) = split_residue_number(line.get(10..15)?)?;
        let ss_code = char_at(line, 24)?;
        Some(ResidueRecord {
            residue_index,
            insertion_code,
            chain_id: chain_id.to_string(),
            amino_acid,
            ss_label: self.translation.translate(ss_code).to_string(),
            ss_code,
        })
    }
}

/// Splits Stride's combined number field, e.g. `"  12A"` into `(12, Some('A'))`.
fn split_residue_number(field: &str) -> Option<(i32, Option<char>)> {
    let compact: String = field.chars().filter(|c| *c != ' ').collect();
    let last = compact.chars().last()?;
    if last.is_ascii_digit() {
        Some((compact.parse().ok()?, None))
    } else {
        let number = &compact[..compact.len() - last.len_utf8()];
        Some((number.parse().ok()?, Some(last)))
    }
}

impl Algorithm for Stride {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&self, structure_file: &Path) -> Result<String, AlgorithmError> {
        run_command(&self.program, &[structure_file.as_os_str()])
    }

    fn process_data(&self, output: &str) -> Vec<ResidueRecord> {
        output
            .lines()
            .filter(|line| line.starts_with("ASG"))
            .filter_map(|line| {
                let record = self.parse_line(line);
                if record.is_none() {
                    trace!("Skipping Stride line: '{}'", line);
                }
                record
            })
            .collect()
    }
}
