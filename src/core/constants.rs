// Core constants for the square canvas
pub const GRID_SIZE: f32 = 50.0;
pub const MAX_SQUARES: usize = 10_000;
pub const GRID_THICKNESS: f32 = 1.0;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "draw and share!";

pub const MAP_DIR: &str = "maps";
pub const MAP_FILE: &str = "map.txt";
pub const CONFIG_FILE: &str = "draw_and_share.toml";

// Grid color helper function (since Color::from_rgba is not const)
pub fn grid_color() -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(130, 130, 130, 255)
}
