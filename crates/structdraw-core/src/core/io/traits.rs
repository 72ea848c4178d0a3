use crate::core::models::record::BFactorTable;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for extracting per-residue B-factors from a coordinate file format.
///
/// Implementors scan the atom records of their format and group every parsable temperature
/// factor by residue, preserving atom order. Malformed atom rows are skipped rather than
/// reported: partial data is normal for experimental and predicted structures alike.
pub trait BFactorSource {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a B-factor table from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<BFactorTable, Self::Error>;

    /// Reads a B-factor table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<BFactorTable, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
