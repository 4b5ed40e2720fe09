use macroquad::prelude::*;

use crate::state::{ApplicationState, StatusLevel};

pub struct Hud {
    fps: i32,
    accum_time: f32,
    accum_frames: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            fps: 0,
            accum_time: 0.0,
            accum_frames: 0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.accum_time += dt;
        self.accum_frames += 1;
        if self.accum_time >= 1.0 {
            self.fps = (self.accum_frames as f32 / self.accum_time).round() as i32;
            self.accum_time = 0.0;
            self.accum_frames = 0;
        }
    }

    pub fn draw(&self, state: &ApplicationState, visible_squares: usize) {
        let y_start = screen_height() - 100.0;
        let line_height = 20.0;
        let text_color = LIGHTGRAY;

        draw_text(&format!("FPS: {}", self.fps), 10.0, y_start, 18.0, text_color);

        let zoom_text = format!("Zoom: {:.0}%", state.camera.zoom * 100.0);
        draw_text(&zoom_text, 10.0, y_start + line_height, 18.0, text_color);

        let count_text = format!(
            "Squares: {}/{} ({} visible)",
            state.squares.len(),
            state.squares.capacity(),
            visible_squares
        );
        draw_text(&count_text, 10.0, y_start + line_height * 2.0, 18.0, text_color);

        // Current color swatch
        let color_y = y_start + line_height * 3.0;
        draw_text("Color:", 10.0, color_y, 18.0, text_color);
        draw_rectangle(70.0, color_y - 13.0, 16.0, 16.0, state.current_color().to_mq_color());
        draw_text(state.palette.current_name(), 92.0, color_y, 18.0, text_color);

        if state.picking.is_some() {
            draw_text(
                "Recolor: press C to choose, click to apply, Esc to cancel",
                10.0,
                y_start + line_height * 4.0,
                18.0,
                YELLOW,
            );
        }

        if let Some(status) = &state.status {
            let color = match status.level {
                StatusLevel::Info => GREEN,
                StatusLevel::Warning => ORANGE,
                StatusLevel::Error => RED,
            };
            let size = measure_text(&status.text, None, 20, 1.0);
            draw_text(&status.text, screen_width() - size.width - 10.0, 24.0, 20.0, color);
        }
    }
}
