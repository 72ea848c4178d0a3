use structdraw::core::utils::translation::TranslationTable;
use structdraw::render::config::{CanvasConfig, ChainStyle};

/// Fully merged settings for one drawing command.
#[derive(Debug)]
pub struct AppConfig {
    pub algorithm: String,
    pub translation: Option<TranslationTable>,
    pub style: ChainStyle,
    pub canvas: CanvasConfig,
}
