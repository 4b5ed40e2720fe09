use macroquad::prelude::*;

/// Discrete actions triggered by a key press this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    CyclePalette,
    ToggleGrid,
    Save,
    Load,
    CancelPick,
}

const KEY_BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::C, Command::CyclePalette),
    (KeyCode::G, Command::ToggleGrid),
    (KeyCode::S, Command::Save),
    (KeyCode::L, Command::Load),
    (KeyCode::Escape, Command::CancelPick),
];

/// Everything the update step reads from the window in one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub mouse_screen: Vec2,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    pub secondary_down: bool,
    /// Vertical wheel movement; positive zooms in
    pub wheel_y: f32,
    /// Arrow-key direction, each axis in -1..=1
    pub pan: Vec2,
    pub commands: Vec<Command>,
    /// Pointer is over a UI widget; canvas tools ignore it
    pub pointer_over_ui: bool,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl FrameInput {
    /// Sample macroquad's input state for the current frame
    pub fn capture() -> Self {
        let axis = |neg: KeyCode, pos: KeyCode| -> f32 {
            (is_key_down(pos) as i32 - is_key_down(neg) as i32) as f32
        };

        FrameInput {
            mouse_screen: Vec2::from(mouse_position()),
            primary_pressed: is_mouse_button_pressed(MouseButton::Left),
            primary_down: is_mouse_button_down(MouseButton::Left),
            primary_released: is_mouse_button_released(MouseButton::Left),
            secondary_down: is_mouse_button_down(MouseButton::Right),
            wheel_y: mouse_wheel().1,
            pan: vec2(
                axis(KeyCode::Left, KeyCode::Right),
                axis(KeyCode::Up, KeyCode::Down),
            ),
            commands: KEY_BINDINGS
                .iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|(_, command)| *command)
                .collect(),
            pointer_over_ui: false,
            dt: get_frame_time(),
        }
    }
}
