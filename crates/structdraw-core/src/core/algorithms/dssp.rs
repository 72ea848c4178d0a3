use super::{Algorithm, AlgorithmError, run_command};
use crate::core::io::columns::{char_at, slice_and_trim};
use crate::core::models::record::{ResidueRecord, insertion_code_from};
use crate::core::utils::translation::TranslationTable;
use std::ffi::OsStr;
use std::path::Path;
use tracing::trace;

const HEADER_MARKER: &str = "RESIDUE AA STRUCTURE";

/// Adapter for DSSP (`dssp`/`mkdssp`) in its classic fixed-column output format.
#[derive(Debug, Clone)]
pub struct Dssp {
    program: String,
    translation: TranslationTable,
}

impl Dssp {
    pub fn new(program: impl Into<String>, translation: Option<TranslationTable>) -> Self {
        Self {
            program: program.into(),
            translation: translation.unwrap_or_else(TranslationTable::dssp_default),
        }
    }

    pub fn translation(&self) -> &TranslationTable {
        &self.translation
    }

    fn parse_line(&self, line: &str) -> Option<ResidueRecord> {
        // A blank chain column marks a chain break ('!') line.
        let chain_id = char_at(line, 11).filter(|c| *c != ' ')?;
        let residue_index = slice_and_trim(line, 5, 10).parse::<i32>().ok()?;
        let amino_acid = char_at(line, 13)?;
        let ss_code = match char_at(line, 16) {
            Some(' ') | None => '-',
            Some(code) => code,
        };
        Some(ResidueRecord {
            residue_index,
            insertion_code: insertion_code_from(char_at(line, 10)),
            chain_id: chain_id.to_string(),
            amino_acid,
            ss_label: self.translation.translate(ss_code).to_string(),
            ss_code,
        })
    }
}

impl Algorithm for Dssp {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&self, structure_file: &Path) -> Result<String, AlgorithmError> {
        run_command(
            &self.program,
            &[OsStr::new("--output-format=dssp"), structure_file.as_os_str()],
        )
    }

    fn process_data(&self, output: &str) -> Vec<ResidueRecord> {
        output
            .lines()
            .skip_while(|line| !line.contains(HEADER_MARKER))
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let record = self.parse_line(line);
                if record.is_none() {
                    trace!("Skipping DSSP line: '{}'", line);
                }
                record
            })
            .collect()
    }
}
