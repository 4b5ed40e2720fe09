pub mod palette;

pub use palette::render_palette_bar;
