use macroquad::prelude::*;

use crate::core::world_to_cell_coords;
use crate::state::ApplicationState;
use super::frame::FrameInput;

/// Bresenham line algorithm - returns all grid cells between two points
fn bresenham(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

fn cell_center(cell: (i32, i32), cell_size: f32) -> Vec2 {
    vec2(
        (cell.0 as f32 + 0.5) * cell_size,
        (cell.1 as f32 + 0.5) * cell_size,
    )
}

/// Primary button: recolor, pick or paint
///
/// A press first completes a pending recolor, then tries to pick the square
/// under the pointer, and only paints on empty canvas. Holding after a paint
/// press continues the stroke, filling every cell the pointer crosses once.
pub fn handle_primary(state: &mut ApplicationState, input: &FrameInput, world: Vec2) {
    let cell_size = state.squares.cell_size();
    let cell = world_to_cell_coords(world, cell_size);

    if input.primary_pressed {
        if state.picking.is_some() {
            let color = state.current_color();
            state.apply_recolor(color);
            state.stroke_active = false;
        } else if state.pick_for_recolor(world) {
            state.stroke_active = false;
        } else {
            state.paint(world);
            state.stroke_active = true;
            state.last_painted_cell = Some(cell);
        }
    } else if input.primary_down && state.stroke_active {
        // Mouse held - interpolate stroke
        if let Some(last_cell) = state.last_painted_cell {
            if last_cell != cell {
                for coords in bresenham(last_cell, cell).into_iter().skip(1) {
                    state.paint(cell_center(coords, cell_size));
                }
                state.last_painted_cell = Some(cell);
            }
        }
    }
}

/// Secondary button: erase the first square under the pointer every frame
pub fn handle_secondary(state: &mut ApplicationState, input: &FrameInput, world: Vec2) {
    if input.secondary_down {
        state.erase(world);
    }
}

/// End the current stroke
pub fn end_stroke(state: &mut ApplicationState) {
    state.stroke_active = false;
    state.last_painted_cell = None;
}
