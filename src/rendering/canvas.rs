use macroquad::prelude::*;

use crate::core::camera::Camera as AppCamera;
use crate::core::SquareList;

/// Draws squares in paint order, later squares on top
pub struct CanvasRenderer {
    drawn_last_frame: usize,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        CanvasRenderer { drawn_last_frame: 0 }
    }

    /// Number of squares that passed culling in the last `draw`
    pub fn drawn_last_frame(&self) -> usize {
        self.drawn_last_frame
    }

    /// Draw all visible squares to screen with frustum culling
    pub fn draw(&mut self, squares: &SquareList, camera: &AppCamera) {
        let visible = camera.visible_world_rect(screen_width(), screen_height());
        let mut drawn = 0;

        for square in squares.iter() {
            if !square.rect.overlaps(&visible) {
                continue;
            }
            let screen_pos = camera.world_to_screen(square.rect.point());
            draw_rectangle(
                screen_pos.x,
                screen_pos.y,
                square.rect.w * camera.zoom,
                square.rect.h * camera.zoom,
                square.color.to_mq_color(),
            );
            drawn += 1;
        }

        self.drawn_last_frame = drawn;
    }
}
