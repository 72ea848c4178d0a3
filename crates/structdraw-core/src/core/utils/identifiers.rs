use phf::{Map, phf_map};

/// One-letter code used for any residue name missing from [`THREE_TO_ONE`].
pub const UNKNOWN_AMINO_ACID: char = 'X';

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

/// Side-chain polarity of a canonical amino acid, as used by the hydrophilicity coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hydropathy {
    Hydrophobic,
    Hydrophilic,
}

impl Hydropathy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hydropathy::Hydrophobic => "hydrophobic",
            Hydropathy::Hydrophilic => "hydrophilic",
        }
    }
}

static HYDROPATHY: Map<char, Hydropathy> = phf_map! {
    'A' => Hydropathy::Hydrophobic, 'R' => Hydropathy::Hydrophilic,
    'N' => Hydropathy::Hydrophilic, 'D' => Hydropathy::Hydrophilic,
    'C' => Hydropathy::Hydrophilic, 'E' => Hydropathy::Hydrophilic,
    'Q' => Hydropathy::Hydrophilic, 'G' => Hydropathy::Hydrophilic,
    'H' => Hydropathy::Hydrophilic, 'I' => Hydropathy::Hydrophobic,
    'L' => Hydropathy::Hydrophobic, 'K' => Hydropathy::Hydrophilic,
    'M' => Hydropathy::Hydrophobic, 'F' => Hydropathy::Hydrophobic,
    'P' => Hydropathy::Hydrophobic, 'S' => Hydropathy::Hydrophilic,
    'T' => Hydropathy::Hydrophilic, 'W' => Hydropathy::Hydrophobic,
    'Y' => Hydropathy::Hydrophilic, 'V' => Hydropathy::Hydrophobic,
};

/// Maps a three-letter residue name to its one-letter code, `X` when unrecognized.
pub fn one_letter_code(residue_name: &str) -> char {
    THREE_TO_ONE
        .get(residue_name.trim())
        .copied()
        .unwrap_or(UNKNOWN_AMINO_ACID)
}

pub fn hydropathy(amino_acid: char) -> Option<Hydropathy> {
    HYDROPATHY.get(&amino_acid).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_letter_code_maps_all_canonical_residues() {
        assert_eq!(one_letter_code("ALA"), 'A');
        assert_eq!(one_letter_code("TRP"), 'W');
        assert_eq!(one_letter_code("VAL"), 'V');
        assert_eq!(THREE_TO_ONE.len(), 20);
    }

    #[test]
    fn one_letter_code_falls_back_to_x() {
        assert_eq!(one_letter_code("MSE"), 'X');
        assert_eq!(one_letter_code(""), 'X');
        assert_eq!(one_letter_code("ala"), 'X');
    }

    #[test]
    fn one_letter_code_trims_whitespace() {
        assert_eq!(one_letter_code(" GLY "), 'G');
    }

    #[test]
    fn hydropathy_classifies_canonical_letters_only() {
        assert_eq!(hydropathy('L'), Some(Hydropathy::Hydrophobic));
        assert_eq!(hydropathy('K'), Some(Hydropathy::Hydrophilic));
        assert_eq!(hydropathy('X'), None);
        assert_eq!(HYDROPATHY.len(), 20);
    }
}
