use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sequence lines found before any '>' header at line {line}")]
    SequenceWithoutHeader { line: usize },
}

/// One aligned chain: the `>model|type|chain` header fields plus its gapped sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub model_id: String,
    pub file_type: String,
    pub chain_id: String,
    pub sequence: String,
}

impl AlignmentRecord {
    /// Name of the structure file this record refers to, `<model>.<type>`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.model_id, self.file_type)
    }
}

/// All chains of an alignment that come from the same structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedModel {
    pub file_name: String,
    /// `(chain_id, aligned sequence)` in alignment order.
    pub chains: Vec<(String, String)>,
}

impl AlignedModel {
    pub fn chain_ids(&self) -> Vec<String> {
        self.chains.iter().map(|(id, _)| id.clone()).collect()
    }
}

/// Reader for FASTA-like alignment files.
///
/// Each entry is a `>` header line followed by one or more sequence lines, which are
/// concatenated. Blank lines are ignored. Headers with fewer than three `|`-separated fields
/// are skipped together with their sequence.
pub struct AlignmentFile;

impl AlignmentFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<AlignmentRecord>, AlignmentError> {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut current: Option<(String, String)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(header) = line.strip_prefix('>') {
                if let Some(done) = current.take() {
                    entries.push(done);
                }
                current = Some((header.trim().to_string(), String::new()));
            } else {
                match current.as_mut() {
                    Some((_, sequence)) => sequence.push_str(line),
                    None => {
                        return Err(AlignmentError::SequenceWithoutHeader { line: line_num + 1 });
                    }
                }
            }
        }
        if let Some(done) = current {
            entries.push(done);
        }

        let records = entries
            .into_iter()
            .filter_map(|(header, sequence)| {
                let parts: Vec<&str> = header.split('|').collect();
                if parts.len() < 3 {
                    warn!("Skipping alignment header with fewer than 3 fields: '{}'", header);
                    return None;
                }
                Some(AlignmentRecord {
                    model_id: parts[0].trim().to_string(),
                    file_type: parts[1].trim().to_string(),
                    chain_id: parts[2].trim().to_string(),
                    sequence,
                })
            })
            .collect::<Vec<_>>();
        debug!("Read {} alignment records", records.len());
        Ok(records)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AlignmentRecord>, AlignmentError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Groups alignment records by structure file, keeping first-appearance order of both files and
/// chains within a file.
pub fn group_by_model(records: &[AlignmentRecord]) -> Vec<AlignedModel> {
    let mut models: Vec<AlignedModel> = Vec::new();
    for record in records {
        let file_name = record.file_name();
        let entry = (record.chain_id.clone(), record.sequence.clone());
        match models.iter_mut().find(|m| m.file_name == file_name) {
            Some(model) => model.chains.push(entry),
            None => models.push(AlignedModel {
                file_name,
                chains: vec![entry],
            }),
        }
    }
    models
}
