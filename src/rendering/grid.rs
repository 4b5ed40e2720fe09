use macroquad::prelude::*;
use crate::core::camera::Camera as AppCamera;
use crate::core::{grid_color, GRID_THICKNESS};

pub struct GridRenderer {
    cell_size: f32,
    color: Color,
    thickness: f32,
}

impl GridRenderer {
    pub fn new(cell_size: f32) -> Self {
        GridRenderer {
            cell_size,
            color: grid_color(),
            thickness: GRID_THICKNESS,
        }
    }

    pub fn draw(&self, camera: &AppCamera) {
        let visible = camera.visible_world_rect(screen_width(), screen_height());

        // Widen the spacing when zoomed far out so lines stay readable
        let step = self.cell_size * grid_step_cells(self.cell_size * camera.zoom) as f32;

        // Align start/end to grid step
        let start_x = (visible.x / step).floor() * step;
        let start_y = (visible.y / step).floor() * step;
        let end_x = visible.right();
        let end_y = visible.bottom();

        // Draw vertical lines
        let mut x = start_x;
        while x <= end_x {
            let p0 = camera.world_to_screen(vec2(x, start_y));
            let p1 = camera.world_to_screen(vec2(x, end_y));
            draw_line(p0.x, p0.y, p1.x, p1.y, self.thickness, self.color);
            x += step;
        }

        // Draw horizontal lines
        let mut y = start_y;
        while y <= end_y {
            let p0 = camera.world_to_screen(vec2(start_x, y));
            let p1 = camera.world_to_screen(vec2(end_x, y));
            draw_line(p0.x, p0.y, p1.x, p1.y, self.thickness, self.color);
            y += step;
        }
    }
}

fn grid_step_cells(cell_px: f32) -> i32 {
    if cell_px >= 16.0 { 1 }
    else if cell_px >= 8.0 { 2 }
    else if cell_px >= 4.0 { 4 }
    else if cell_px >= 2.0 { 8 }
    else { 16 }
}

#[cfg(test)]
mod tests {
    use super::grid_step_cells;

    #[test]
    fn step_grows_as_cells_shrink() {
        assert_eq!(grid_step_cells(50.0), 1);
        assert_eq!(grid_step_cells(10.0), 2);
        assert_eq!(grid_step_cells(5.0), 4);
        assert_eq!(grid_step_cells(0.5), 16);
    }
}
