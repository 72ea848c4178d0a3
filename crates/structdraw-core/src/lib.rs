//! # StructDraw Core Library
//!
//! Turns per-residue secondary-structure assignments, as produced by external tools such as
//! DSSP and Stride, into a laid-out 2D diagram of colored glyphs per chain.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer architecture so that parsing, geometry and I/O can be
//! tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Residue`, `Chain`, `StructureModel`),
//!   lookup tables, readers for the external text formats and the adapters that invoke the
//!   secondary-structure algorithms.
//!
//! - **[`render`]: The Drawing Engine.** Coloring strategies, glyph geometry, chain layout and
//!   canvas composition, all written against the abstract [`render::surface::DrawSurface`] so the
//!   layout logic never depends on a concrete image backend.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that tie `core` and `render`
//!   together: loading a model from a structure file, re-threading chains against an alignment
//!   and rendering a complete diagram.

pub mod core;
pub mod render;
pub mod workflows;
