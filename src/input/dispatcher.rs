use log::debug;
use macroquad::prelude::*;

use crate::state::ApplicationState;
use super::frame::{Command, FrameInput};
use super::tools::{end_stroke, handle_primary, handle_secondary};

/// Sample this frame's input and apply it
pub fn handle_input(state: &mut ApplicationState, pointer_over_ui: bool) {
    let mut input = FrameInput::capture();
    input.pointer_over_ui = pointer_over_ui;
    apply_frame_input(state, &input);
}

/// Central dispatcher: keyboard commands, camera, then pointer tools
pub fn apply_frame_input(state: &mut ApplicationState, input: &FrameInput) {
    for command in &input.commands {
        run_command(state, *command);
    }

    handle_pan(state, input);
    handle_zoom(state, input);

    if !input.pointer_over_ui {
        let world = state.camera.screen_to_world(input.mouse_screen);
        handle_primary(state, input, world);
        handle_secondary(state, input, world);
    } else {
        // Leaving the canvas breaks the stroke so it does not bridge the bar
        end_stroke(state);
    }

    if input.primary_released || !input.primary_down {
        end_stroke(state);
    }
}

fn run_command(state: &mut ApplicationState, command: Command) {
    debug!("Command {:?}", command);
    match command {
        Command::CyclePalette => state.cycle_color(),
        Command::ToggleGrid => state.toggle_grid(),
        Command::Save => {
            state.save_map();
        }
        Command::Load => {
            state.load_map();
        }
        Command::CancelPick => state.cancel_pick(),
    }
}

/// Arrow-key panning at a fixed screen speed
fn handle_pan(state: &mut ApplicationState, input: &FrameInput) {
    if input.pan != Vec2::ZERO {
        let delta_screen = input.pan * state.pan_speed * input.dt;
        let delta_world = state.camera.screen_delta_to_world(delta_screen);
        state.camera.pan_by(delta_world);
    }
}

/// Zoom via mouse wheel around the cursor
fn handle_zoom(state: &mut ApplicationState, input: &FrameInput) {
    if input.wheel_y != 0.0 {
        let step = 1.0 + state.zoom_step;
        let zoom_factor = if input.wheel_y > 0.0 { step } else { 1.0 / step };
        state.camera.zoom_around(input.mouse_screen, zoom_factor);
    }
}
