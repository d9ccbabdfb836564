pub mod color;
pub mod palette;

pub use color::{handle_color, ColorQuery, ColorResponse, __path_handle_color};
pub use palette::{
    handle_palette, ColorDto, PaletteQuery, PaletteResponse, RangeDto, __path_handle_palette,
};
