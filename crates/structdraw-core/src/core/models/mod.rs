//! # Core Models Module
//!
//! Data structures that describe a structure after its secondary structure has been assigned.
//!
//! ## Key Components
//!
//! - [`record`] - The normalized per-residue record every parser emits
//! - [`residue`] - One residue of a chain, optionally carrying per-atom B-factors
//! - [`chain`] - An ordered residue sequence with provenance, re-threadable against an alignment
//! - [`model`] - All chains obtained from one structure file and one algorithm run
//!
//! ```ignore
//! use structdraw::core::models::model::StructureModel;
//!
//! let model = StructureModel::from_records("1abc.pdb", "mkdssp", records, None, None);
//! let chain = model.chain("A")?;
//! ```

pub mod chain;
pub mod model;
pub mod record;
pub mod residue;
