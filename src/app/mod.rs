// src/app/mod.rs
use log::info;
use macroquad::prelude::*;

use crate::config::AppConfig;
use crate::input::handle_input;
use crate::rendering::{draw_hover_cell, draw_pick_highlight, CanvasRenderer, GridRenderer, Hud};
use crate::state::ApplicationState;
use crate::ui::palette::{palette_bar_rect, render_palette_bar};

pub async fn run(config: AppConfig) {
    let mut state = ApplicationState::new(&config);
    state.load_map();
    info!(
        "Canvas ready: {} squares, capacity {}, overflow {:?}",
        state.squares.len(),
        state.squares.capacity(),
        state.squares.policy()
    );

    let mut hud = Hud::new();
    let grid_renderer = GridRenderer::new(state.squares.cell_size());
    let mut canvas_renderer = CanvasRenderer::new();

    loop {
        let dt = get_frame_time();
        hud.update(dt);
        state.tick_status(dt);

        let mouse_pos = Vec2::from(mouse_position());
        let over_ui = palette_bar_rect(&state.palette).contains(mouse_pos);
        handle_input(&mut state, over_ui);

        clear_background(BLACK);

        if state.show_grid {
            grid_renderer.draw(&state.camera);
        }
        canvas_renderer.draw(&state.squares, &state.camera);

        if state.show_grid && !over_ui {
            draw_hover_cell(&state.camera, state.squares.cell_size(), mouse_pos);
        }
        if let Some(pick) = state.picking {
            draw_pick_highlight(&state.camera, &state.squares, &pick);
        }

        render_palette_bar(&mut state);
        hud.draw(&state, canvas_renderer.drawn_last_frame());

        next_frame().await
    }
}
