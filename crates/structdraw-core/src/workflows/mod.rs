//! End-to-end procedures built on [`core`](crate::core) and [`render`](crate::render).
//!
//! - [`model`]: run an algorithm on a structure file and build a [`StructureModel`] with
//!   B-factors merged in.
//! - [`alignment`]: load every model referenced by an alignment file and re-thread its chains.
//! - [`diagram`]: lay out chains on a canvas and write the SVG.
//!
//! Each workflow reports its phases through a [`ProgressReporter`](progress::ProgressReporter).
//!
//! [`StructureModel`]: crate::core::models::model::StructureModel

pub mod alignment;
pub mod diagram;
pub mod error;
pub mod model;
pub mod progress;
