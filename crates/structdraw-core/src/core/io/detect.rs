use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File type mismatch: expected '{expected}', got '{actual}'")]
    FileTypeMismatch {
        expected: StructureFileType,
        actual: StructureFileType,
    },
    #[error("Unknown structure file type '{0}' (supported: pdb, pdbx, cif)")]
    UnknownType(String),
}

/// The two coordinate file families a structure may be supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFileType {
    /// Legacy fixed-column PDB.
    Pdb,
    /// Tag/value PDBx/mmCIF.
    Pdbx,
}

impl StructureFileType {
    /// Sniffs the file type from buffered content.
    ///
    /// A file is PDBx as soon as one line starts with `data_` or contains an `_atom_site.` tag;
    /// anything else is treated as legacy PDB.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        for line in reader.lines() {
            let line = line?;
            if line.starts_with("data_") || line.contains("_atom_site.") {
                return Ok(Self::Pdbx);
            }
        }
        Ok(Self::Pdb)
    }

    /// Sniffs the file type of the file at `path`.
    pub fn detect_from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let detected = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!("Detected {} structure file: {}", detected, path.display());
        Ok(detected)
    }

    /// Checks that the file at `path` is of type `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::FileTypeMismatch`] when the sniffed type differs, or an I/O error if
    /// the file cannot be read.
    pub fn validate(path: impl AsRef<Path>, expected: Self) -> Result<(), DetectError> {
        let actual = Self::detect_from_path(path)?;
        if actual != expected {
            return Err(DetectError::FileTypeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Conventional file extension used when resolving `model.type` file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Pdbx => "pdbx",
        }
    }
}

impl fmt::Display for StructureFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureFileType {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdb" | "ent" => Ok(Self::Pdb),
            "pdbx" | "cif" | "mmcif" => Ok(Self::Pdbx),
            _ => Err(DetectError::UnknownType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn sniff(text: &str) -> StructureFileType {
        StructureFileType::from_reader(Cursor::new(text.as_bytes())).unwrap()
    }

    #[test]
    fn data_block_marks_pdbx() {
        assert_eq!(sniff("data_1ABC\n#\n"), StructureFileType::Pdbx);
    }

    #[test]
    fn atom_site_tag_marks_pdbx() {
        assert_eq!(
            sniff("loop_\n_atom_site.group_PDB\n"),
            StructureFileType::Pdbx
        );
    }

    #[test]
    fn anything_else_is_pdb() {
        assert_eq!(
            sniff("HEADER    TEST\nATOM      1  N   ALA A   1\n"),
            StructureFileType::Pdb
        );
        assert_eq!(sniff(""), StructureFileType::Pdb);
    }

    #[test]
    fn validate_reports_mismatch() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_X").unwrap();

        assert!(StructureFileType::validate(file.path(), StructureFileType::Pdbx).is_ok());
        let err = StructureFileType::validate(file.path(), StructureFileType::Pdb).unwrap_err();
        assert!(matches!(
            err,
            DetectError::FileTypeMismatch {
                expected: StructureFileType::Pdb,
                actual: StructureFileType::Pdbx
            }
        ));
        assert_eq!(
            err.to_string(),
            "File type mismatch: expected 'pdb', got 'pdbx'"
        );
    }

    #[test]
    fn parses_type_tags() {
        assert_eq!("PDB".parse::<StructureFileType>().unwrap(), StructureFileType::Pdb);
        assert_eq!("cif".parse::<StructureFileType>().unwrap(), StructureFileType::Pdbx);
        assert!("xyz".parse::<StructureFileType>().is_err());
    }
}
