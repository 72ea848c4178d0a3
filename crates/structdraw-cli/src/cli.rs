use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "StructDraw CLI - draws 2D secondary-structure diagrams of protein chains from DSSP or Stride assignments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the chains of one structure file.
    Draw(DrawArgs),
    /// Draw chains re-threaded against a multiple-sequence alignment.
    Align(AlignArgs),
    /// Export the normalized per-residue records of a structure file as CSV.
    Records(RecordsArgs),
}

/// Arguments for the `draw` subcommand.
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Path to the input structure file (PDB or PDBx/mmCIF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output SVG diagram.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Draw only these chains, e.g. `-C A,B`. Unknown ids are ignored.
    #[arg(short = 'C', long = "chains", value_name = "IDS", value_delimiter = ',')]
    pub chains: Vec<String>,

    /// Parse this saved algorithm output instead of running the algorithm.
    #[arg(long, value_name = "PATH")]
    pub algorithm_output: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for the `align` subcommand.
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Path to the alignment file (`>model|type|chain` headers).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub alignment: PathBuf,

    /// Directory holding the structure files named by the alignment headers.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Path for the output SVG diagram.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for the `records` subcommand.
#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Path to the input structure file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Secondary-structure algorithm (dssp, mkdssp or stride).
    #[arg(short = 'A', long, value_name = "NAME")]
    pub algorithm: Option<String>,

    /// Parse this saved algorithm output instead of running the algorithm.
    #[arg(long, value_name = "PATH")]
    pub algorithm_output: Option<PathBuf>,

    /// Path to a configuration file in TOML format (only `[algorithm]` is used).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Drawing options shared by `draw` and `align`; each overrides the configuration file.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Secondary-structure algorithm (dssp, mkdssp or stride).
    #[arg(short = 'A', long, value_name = "NAME")]
    pub algorithm: Option<String>,

    /// Glyph edge length in pixels.
    #[arg(short = 's', long, value_name = "PIXELS")]
    pub shape_size: Option<u32>,

    /// Maximum number of residues per row.
    #[arg(long, value_name = "INT")]
    pub split: Option<usize>,

    /// First residue position to draw (0-based).
    #[arg(long, value_name = "INT")]
    pub start: Option<usize>,

    /// Residue position to stop before; clamped to the chain length.
    #[arg(long, value_name = "INT")]
    pub end: Option<usize>,

    /// Coloring mode (structure, aa or b_factor).
    #[arg(short = 'm', long, value_name = "MODE")]
    pub color_mode: Option<String>,

    /// Coloring sub-mode, e.g. `secondary`, `hydrophilicity`, `single_aa`, `mean`, `a_fold`.
    #[arg(long, value_name = "SUB_MODE")]
    pub sub_mode: Option<String>,

    /// Palette file replacing the built-in palette of the coloring mode.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub palette: Option<PathBuf>,

    /// Title drawn above the chains.
    #[arg(short = 't', long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Title anchor (left, centered or right).
    #[arg(long, value_name = "POSITION")]
    pub title_position: Option<String>,

    /// Do not print one-letter amino-acid codes inside the glyphs.
    #[arg(long)]
    pub no_amino_code: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S chain.split=20
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_draw_with_chain_list_and_overrides() {
        let cli = Cli::parse_from([
            "structdraw",
            "-vv",
            "draw",
            "-i",
            "1abc.pdb",
            "-o",
            "out.svg",
            "-C",
            "A,B",
            "--split",
            "20",
            "--no-amino-code",
            "-S",
            "chain.shape-size=30",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Draw(args) = cli.command else {
            panic!("Expected 'draw' subcommand");
        };
        assert_eq!(args.chains, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(args.style.split, Some(20));
        assert!(args.style.no_amino_code);
        assert_eq!(args.style.set_values, vec!["chain.shape-size=30".to_string()]);
        assert!(args.algorithm_output.is_none());
    }

    #[test]
    fn parses_align_and_records() {
        let cli = Cli::parse_from([
            "structdraw", "align", "-a", "aln.fasta", "-d", "models", "-o", "out.svg", "-m", "b_factor",
        ]);
        let Commands::Align(args) = cli.command else {
            panic!("Expected 'align' subcommand");
        };
        assert_eq!(args.data_dir, PathBuf::from("models"));
        assert_eq!(args.style.color_mode.as_deref(), Some("b_factor"));

        let cli = Cli::parse_from([
            "structdraw", "records", "-i", "1abc.pdb", "-o", "out.csv", "-A", "stride",
        ]);
        let Commands::Records(args) = cli.command else {
            panic!("Expected 'records' subcommand");
        };
        assert_eq!(args.algorithm.as_deref(), Some("stride"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["structdraw", "-q", "-v", "records", "-i", "a", "-o", "b"]);
        assert!(result.is_err());
    }
}
