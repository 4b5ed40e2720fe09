pub mod canvas;
pub mod grid;
pub mod cursor;
pub mod hud;

pub use canvas::CanvasRenderer;
pub use grid::GridRenderer;
pub use cursor::{draw_hover_cell, draw_pick_highlight};
pub use hud::Hud;
