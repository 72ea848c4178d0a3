//! # Core Module
//!
//! The data layer of StructDraw: everything needed to go from the raw text emitted by an
//! external secondary-structure tool to an ordered, per-chain sequence of residues.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Residues, chains, structure models and normalized records
//! - **Algorithms** ([`algorithms`]) - Adapters for DSSP and Stride (invocation + output parsing)
//! - **File I/O** ([`io`]) - B-factor extraction, alignment files, file sniffing, record export
//! - **Lookup Tables** ([`utils`]) - Amino-acid codes and secondary-structure translation tables
//!
//! Nothing in this layer knows about colors or geometry; it only produces immutable data that
//! the [`crate::render`] layer consumes.

pub mod algorithms;
pub mod io;
pub mod models;
pub mod utils;
