pub mod identifiers;
pub mod translation;
