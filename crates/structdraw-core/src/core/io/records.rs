use crate::core::models::record::ResidueRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records as CSV with a header row.
///
/// Columns: `residue_index`, `insertion_code`, `chain_id`, `amino_acid`, `secondary_structure`,
/// `secondary_structure_code`. An absent insertion code is written as an empty field.
pub fn write_records<W: Write>(writer: W, records: &[ResidueRecord]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_records_to_path<P: AsRef<Path>>(
    path: P,
    records: &[ResidueRecord],
) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: i32, ins: Option<char>, ss: &str, code: char) -> ResidueRecord {
        ResidueRecord {
            residue_index: index,
            insertion_code: ins,
            chain_id: "A".to_string(),
            amino_acid: 'G',
            ss_label: ss.to_string(),
            ss_code: code,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buffer = Vec::new();
        write_records(
            &mut buffer,
            &[record(5, None, "Helix", 'H'), record(6, Some('A'), "Other", '-')],
        )
        .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "residue_index,insertion_code,chain_id,amino_acid,secondary_structure,secondary_structure_code"
        );
        assert_eq!(lines[1], "5,,A,G,Helix,H");
        assert_eq!(lines[2], "6,A,A,G,Other,-");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn writes_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        write_records_to_path(&path, &[record(1, None, "Strand", 'E')]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("1,,A,G,Strand,E\n"));
    }
}
