//! Turns chains into positioned drawing primitives.
//!
//! Layout never talks to a concrete backend: every size is derived through [`TextMeasure`] and
//! every primitive goes through [`DrawSurface`], so the same layout code drives the SVG backend
//! and the recording surface used in tests.
//!
//! [`TextMeasure`]: surface::TextMeasure
//! [`DrawSurface`]: surface::DrawSurface

pub mod annotation;
pub mod canvas;
pub mod chain_view;
pub mod color;
pub mod config;
pub mod glyph;
pub mod label;
pub mod layout;
pub mod surface;
pub mod svg;
