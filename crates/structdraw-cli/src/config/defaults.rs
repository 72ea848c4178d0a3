use structdraw::render::color::Color;
use structdraw::render::config::{ChainStyleBuilder, TitlePosition};

/// Values used when neither the command line nor the configuration file sets an option.
pub struct DefaultsConfig {
    pub algorithm: String,
    pub shape_size: u32,
    pub show_amino_code: bool,
    pub start: usize,
    pub color_mode: String,
    pub color_sub_mode: String,
    pub title_font_size: f64,
    pub title_position: TitlePosition,
    pub background: Color,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            algorithm: "dssp".to_string(),
            shape_size: ChainStyleBuilder::DEFAULT_SHAPE_SIZE,
            show_amino_code: true,
            start: 0,
            color_mode: "structure".to_string(),
            color_sub_mode: "secondary".to_string(),
            title_font_size: 100.0,
            title_position: TitlePosition::Left,
            background: Color::WHITE,
        }
    }
}
