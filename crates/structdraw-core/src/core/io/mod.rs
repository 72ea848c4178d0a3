//! Provides readers and writers for the text formats around a secondary-structure run.
//!
//! Coordinate files are only read as far as needed to extract per-atom B-factors; the
//! structural interpretation of the coordinates is left to the external algorithms.

pub mod alignment;
pub(crate) mod columns;
pub mod detect;
pub mod pdb;
pub mod pdbx;
pub mod records;
pub mod traits;
