use macroquad::math::{Rect, Vec2};

use super::color::Rgba;

/// A grid-aligned colored rectangle placed by the user
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    pub rect: Rect,
    pub color: Rgba,
}

impl Square {
    pub fn new(rect: Rect, color: Rgba) -> Self {
        Square { rect, color }
    }

    /// Square covering the grid cell that contains `world`
    pub fn at_cell(world: Vec2, cell_size: f32, color: Rgba) -> Self {
        let origin = snap_to_grid(world, cell_size);
        Square {
            rect: Rect::new(origin.x, origin.y, cell_size, cell_size),
            color,
        }
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.rect.x
            && point.x < self.rect.x + self.rect.w
            && point.y >= self.rect.y
            && point.y < self.rect.y + self.rect.h
    }
}

pub fn world_to_cell_coords(pos: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (pos.x / cell_size).floor() as i32,
        (pos.y / cell_size).floor() as i32,
    )
}

/// World-space origin of the grid cell containing `pos`
pub fn snap_to_grid(pos: Vec2, cell_size: f32) -> Vec2 {
    Vec2::new(
        (pos.x / cell_size).floor() * cell_size,
        (pos.y / cell_size).floor() * cell_size,
    )
}
