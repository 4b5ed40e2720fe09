use macroquad::prelude::*;

use crate::core::camera::Camera as AppCamera;
use crate::core::{snap_to_grid, SquareList};
use crate::state::PickState;

/// Outline the grid cell under the pointer
pub fn draw_hover_cell(camera: &AppCamera, cell_size: f32, screen_mouse: Vec2) {
    let world_mouse = camera.screen_to_world(screen_mouse);
    let cell_origin = snap_to_grid(world_mouse, cell_size);
    let p = camera.world_to_screen(cell_origin);
    let size = cell_size * camera.zoom;
    draw_rectangle_lines(p.x, p.y, size, size, 2.0, RED);
}

/// Outline the square waiting for a new color, with a swatch of its old color
pub fn draw_pick_highlight(camera: &AppCamera, squares: &SquareList, pick: &PickState) {
    let Some(square) = squares.get(pick.index) else {
        return;
    };
    let p = camera.world_to_screen(square.rect.point());
    let w = square.rect.w * camera.zoom;
    let h = square.rect.h * camera.zoom;
    draw_rectangle_lines(p.x - 2.0, p.y - 2.0, w + 4.0, h + 4.0, 3.0, YELLOW);
    draw_rectangle(p.x + w + 6.0, p.y, 12.0, 12.0, pick.color.to_mq_color());
    draw_rectangle_lines(p.x + w + 6.0, p.y, 12.0, 12.0, 1.0, WHITE);
}
