use super::columns::{char_at, slice_and_trim};
use super::traits::BFactorSource;
use crate::core::models::record::{BFactorTable, ResidueKey, insertion_code_from};
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;
use tracing::trace;

const ATOM_RECORD_TAG: &str = "ATOM";

static B_FACTOR_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d{2}$").expect("B-factor pattern is valid"));

/// B-factor reader for the legacy fixed-column PDB format.
///
/// Only `ATOM` records are considered. A record is skipped when its residue sequence number
/// (columns 23-26) is not all digits or its temperature factor (columns 61-66) does not have
/// the `ddd.dd` shape.
pub struct PdbFile;

impl BFactorSource for PdbFile {
    type Error = io::Error;

    fn read_from(reader: &mut impl BufRead) -> Result<BFactorTable, Self::Error> {
        let mut table = BFactorTable::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if !line.starts_with(ATOM_RECORD_TAG) {
                continue;
            }

            let chain_id = char_at(&line, 21).unwrap_or(' ');
            let res_seq_str = slice_and_trim(&line, 22, 26);
            if res_seq_str.is_empty() || !res_seq_str.bytes().all(|b| b.is_ascii_digit()) {
                trace!("line {}: skipping atom with residue number '{}'", line_num + 1, res_seq_str);
                continue;
            }
            let Ok(residue_index) = res_seq_str.parse::<i32>() else {
                continue;
            };

            let b_factor_str = slice_and_trim(&line, 60, 66);
            if !B_FACTOR_FORMAT.is_match(b_factor_str) {
                trace!("line {}: skipping atom with B-factor '{}'", line_num + 1, b_factor_str);
                continue;
            }
            let Ok(b_factor) = b_factor_str.parse::<f64>() else {
                continue;
            };

            let insertion_code = insertion_code_from(char_at(&line, 26));
            table
                .entry(ResidueKey::new(chain_id.to_string(), residue_index, insertion_code))
                .or_default()
                .push(b_factor);
        }

        Ok(table)
    }
}
