use super::traits::BFactorSource;
use crate::core::models::record::{BFactorTable, ResidueKey, insertion_code_from};
use std::io::{self, BufRead};
use tracing::{debug, trace};

const ATOM_SITE_PREFIX: &str = "_atom_site.";

/// Column positions of the atom-site fields needed for B-factor extraction.
#[derive(Debug, Default, Clone, Copy)]
struct AtomSiteColumns {
    asym_id: Option<usize>,
    seq_id: Option<usize>,
    ins_code: Option<usize>,
    b_iso: Option<usize>,
    model_num: Option<usize>,
}

impl AtomSiteColumns {
    fn from_tags(tags: &[String]) -> Self {
        let mut columns = Self::default();
        for (i, tag) in tags.iter().enumerate() {
            let Some(field) = tag.strip_prefix(ATOM_SITE_PREFIX) else {
                continue;
            };
            match field {
                "label_asym_id" => columns.asym_id = Some(i),
                "label_seq_id" => columns.seq_id = Some(i),
                "pdbx_PDB_ins_code" => columns.ins_code = Some(i),
                "B_iso_or_equiv" => columns.b_iso = Some(i),
                "pdbx_PDB_model_num" => columns.model_num = Some(i),
                _ => {}
            }
        }
        columns
    }
}

#[derive(Debug)]
enum Block {
    Nothing,
    /// Inside a `loop_`, still reading `_tag` lines.
    LoopHeader { tags: Vec<String> },
    /// Reading data rows of an `_atom_site` loop.
    AtomSiteRows { columns: AtomSiteColumns },
    /// Reading data rows of any other loop.
    OtherRows,
}

/// B-factor reader for the tag/value PDBx/mmCIF format.
///
/// The column order is taken from the `_atom_site.*` tag block of the same `loop_`. Rows that
/// lack a required value (`label_asym_id`, `label_seq_id`, `B_iso_or_equiv`, and
/// `pdbx_PDB_ins_code` when declared) or whose numbers do not parse are skipped. When
/// `pdbx_PDB_model_num` is present only the first model contributes.
pub struct PdbxFile;

impl BFactorSource for PdbxFile {
    type Error = io::Error;

    fn read_from(reader: &mut impl BufRead) -> Result<BFactorTable, Self::Error> {
        let mut table = BFactorTable::new();
        let mut block = Block::Nothing;
        let mut first_model: Option<String> = None;

        for line_res in reader.lines() {
            let line = line_res?;
            let trimmed = line.trim();

            if trimmed.starts_with("loop_") {
                block = Block::LoopHeader { tags: Vec::new() };
                continue;
            }
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("data_") {
                block = Block::Nothing;
                continue;
            }

            match &mut block {
                Block::Nothing => {}
                Block::LoopHeader { tags } => {
                    if trimmed.starts_with('_') {
                        tags.push(trimmed.split_whitespace().next().unwrap_or("").to_string());
                        continue;
                    }
                    block = if tags.iter().any(|t| t.starts_with(ATOM_SITE_PREFIX)) {
                        let columns = AtomSiteColumns::from_tags(tags);
                        debug!("atom_site loop with {} columns: {:?}", tags.len(), columns);
                        Block::AtomSiteRows { columns }
                    } else {
                        Block::OtherRows
                    };
                    if let Block::AtomSiteRows { columns } = &block {
                        read_atom_row(trimmed, columns, &mut first_model, &mut table);
                    }
                }
                Block::AtomSiteRows { columns } => {
                    if trimmed.starts_with('_') {
                        block = Block::Nothing;
                        continue;
                    }
                    read_atom_row(trimmed, columns, &mut first_model, &mut table);
                }
                Block::OtherRows => {
                    if trimmed.starts_with('_') {
                        block = Block::Nothing;
                    }
                }
            }
        }

        Ok(table)
    }
}

fn read_atom_row(
    row: &str,
    columns: &AtomSiteColumns,
    first_model: &mut Option<String>,
    table: &mut BFactorTable,
) {
    let values = tokenize(row);
    let field = |idx: Option<usize>| idx.and_then(|i| values.get(i).copied());

    if let Some(model_idx) = columns.model_num {
        let Some(model) = field(Some(model_idx)) else {
            return;
        };
        match first_model {
            Some(first) if first != model => return,
            Some(_) => {}
            None => *first_model = Some(model.to_string()),
        }
    }

    let (Some(asym_id), Some(seq_id), Some(b_iso)) = (
        field(columns.asym_id),
        field(columns.seq_id),
        field(columns.b_iso),
    ) else {
        trace!("skipping atom_site row with missing columns: {}", row);
        return;
    };
    let insertion_code = match columns.ins_code {
        Some(idx) => match values.get(idx) {
            Some(code) => insertion_code_from(code.chars().next()),
            None => return,
        },
        None => None,
    };
    let (Ok(residue_index), Ok(b_factor)) = (seq_id.parse::<i32>(), b_iso.parse::<f64>()) else {
        trace!("skipping atom_site row with non-numeric fields: {}", row);
        return;
    };

    table
        .entry(ResidueKey::new(asym_id, residue_index, insertion_code))
        .or_default()
        .push(b_factor);
}

/// Splits a CIF data row into values, keeping quoted values (`'...'` or `"..."`) whole.
fn tokenize(row: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let bytes = row.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let quote = bytes[i];
        if quote == b'\'' || quote == b'"' {
            let start = i + 1;
            let mut end = start;
            // A closing quote only counts when followed by whitespace or the end of the row.
            while end < bytes.len()
                && !(bytes[end] == quote
                    && bytes.get(end + 1).is_none_or(|b| b.is_ascii_whitespace()))
            {
                end += 1;
            }
            tokens.push(&row[start..end.min(bytes.len())]);
            i = end + 1;
        } else {
            let start = i;
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            tokens.push(&row[start..i]);
        }
    }
    tokens
}
