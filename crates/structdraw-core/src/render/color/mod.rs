pub mod amino;
pub mod bfactor;
pub mod mode;
pub mod palette;
pub mod structure;

pub use mode::{ColorMode, ColorModeError, create_mode};
pub use palette::{Color, ColorBand, ColorError, PaletteSpec};
