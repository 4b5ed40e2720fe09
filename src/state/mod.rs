//! Application State Module
//!
//! Holds everything the frame loop mutates: the square list, the palette
//! cursor, picking mode, the camera, grid visibility and the HUD status
//! line. Also hosts the square-level operations (paint, erase, pick,
//! recolor) and the logged save/load entry points, so input handling only
//! has to decide *which* operation a frame triggers.

use std::path::PathBuf;

use log::{debug, error, info, warn};
use macroquad::math::Vec2;

use crate::config::AppConfig;
use crate::core::camera::Camera as AppCamera;
use crate::core::*;
use crate::persistence;

/// A square selected for recoloring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickState {
    pub index: usize,
    /// Color the square had when it was picked
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Transient message shown in the HUD
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    /// Seconds left on screen
    pub remaining: f32,
}

pub const STATUS_DURATION: f32 = 3.0;

/// The main application state containing all mutable state
pub struct ApplicationState {
    /// Painted squares in paint order
    pub squares: SquareList,
    /// Current paint color
    pub palette: Palette,
    /// Set while a square is waiting for its new color
    pub picking: Option<PickState>,
    pub camera: AppCamera,
    pub show_grid: bool,
    /// Cell painted last during the current stroke
    pub last_painted_cell: Option<(i32, i32)>,
    /// Whether the primary button hold started a paint stroke
    pub stroke_active: bool,
    pub status: Option<StatusMessage>,
    pub map_path: PathBuf,
    /// Screen pixels per second for keyboard panning
    pub pan_speed: f32,
    pub zoom_step: f32,
}

impl ApplicationState {
    pub fn new(config: &AppConfig) -> Self {
        ApplicationState {
            squares: SquareList::new(
                config.canvas.capacity,
                config.canvas.cell_size,
                config.canvas.overflow,
            ),
            palette: Palette::new(),
            picking: None,
            camera: AppCamera::with_zoom_limits(config.camera.min_zoom, config.camera.max_zoom),
            show_grid: config.canvas.show_grid,
            last_painted_cell: None,
            stroke_active: false,
            status: None,
            map_path: config.storage.map_path(),
            pan_speed: config.camera.pan_speed,
            zoom_step: config.camera.zoom_step,
        }
    }

    pub fn current_color(&self) -> Rgba {
        self.palette.current()
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            remaining: STATUS_DURATION,
        });
    }

    /// Age the status line by `dt` seconds
    pub fn tick_status(&mut self, dt: f32) {
        if let Some(status) = &mut self.status {
            status.remaining -= dt;
            if status.remaining <= 0.0 {
                self.status = None;
            }
        }
    }

    /// Paint the cell under `world` with the current palette color
    pub fn paint(&mut self, world: Vec2) -> PaintOutcome {
        let outcome = self.squares.paint(world, self.current_color());
        match outcome {
            PaintOutcome::Rejected => {
                self.set_status(
                    StatusLevel::Warning,
                    format!("Canvas full ({} squares)", self.squares.capacity()),
                );
            }
            PaintOutcome::Overwrote { index, .. } => {
                // The slot now holds a different square
                if self.picking.map_or(false, |p| p.index == index) {
                    self.picking = None;
                }
            }
            PaintOutcome::Evicted { .. } => {
                // Every index shifted down by one
                self.picking = None;
            }
            PaintOutcome::Appended(_) => {}
        }
        outcome
    }

    /// Erase the first square under `world`
    pub fn erase(&mut self, world: Vec2) -> Option<Square> {
        let removed = self.squares.erase(world);
        if removed.is_some() && self.picking.take().is_some() {
            debug!("Picking cancelled by erase");
        }
        removed
    }

    /// Enter picking mode on the first square under `world`
    pub fn pick_for_recolor(&mut self, world: Vec2) -> bool {
        match self.squares.hit_test(world) {
            Some(index) => {
                let color = self.squares.as_slice()[index].color;
                self.picking = Some(PickState { index, color });
                debug!("Picked square {} for recolor", index);
                true
            }
            None => false,
        }
    }

    /// Recolor the picked square and leave picking mode
    pub fn apply_recolor(&mut self, color: Rgba) -> bool {
        let Some(pick) = self.picking.take() else {
            return false;
        };
        match self.squares.recolor(pick.index, color) {
            Some(_) => {
                debug!("Recolored square {}", pick.index);
                true
            }
            None => {
                debug!("Picked square {} no longer exists", pick.index);
                false
            }
        }
    }

    pub fn cancel_pick(&mut self) {
        self.picking = None;
    }

    pub fn cycle_color(&mut self) {
        let color = self.palette.cycle();
        debug!("Selected {} {:?}", self.palette.current_name(), color);
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Write the square list to the map file; failures are logged and skipped
    pub fn save_map(&mut self) -> bool {
        match persistence::save_map(&self.map_path, self.squares.as_slice()) {
            Ok(()) => {
                self.set_status(
                    StatusLevel::Info,
                    format!("Saved {} squares", self.squares.len()),
                );
                true
            }
            Err(e) => {
                error!("Failed to save map: {}", e);
                self.set_status(StatusLevel::Error, "Save failed");
                false
            }
        }
    }

    /// Replace the square list with the map file contents
    ///
    /// A missing file leaves the canvas as is; so does a malformed one.
    pub fn load_map(&mut self) -> bool {
        match persistence::load_map(&self.map_path, self.squares.capacity()) {
            Ok(squares) => {
                let count = squares.len();
                self.squares.replace_all(squares);
                self.picking = None;
                self.last_painted_cell = None;
                self.stroke_active = false;
                info!("Loaded {} squares from {}", count, self.map_path.display());
                self.set_status(StatusLevel::Info, format!("Loaded {} squares", count));
                true
            }
            Err(e) if e.is_not_found() => {
                warn!("No existing map file found at {}", self.map_path.display());
                self.set_status(StatusLevel::Warning, "No saved map");
                false
            }
            Err(e) => {
                error!("Failed to load map: {}", e);
                self.set_status(StatusLevel::Error, "Map file is invalid");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{BLUE, GREEN, RED};
    use macroquad::math::{vec2, Rect};

    fn state() -> ApplicationState {
        ApplicationState::new(&AppConfig::default())
    }

    #[test]
    fn paint_uses_current_palette_color() {
        let mut state = state();
        state.paint(vec2(10.0, 10.0));
        state.cycle_color();
        state.paint(vec2(60.0, 10.0));
        let colors: Vec<Rgba> = state.squares.iter().map(|sq| sq.color).collect();
        assert_eq!(colors, vec![BLUE, GREEN]);
    }

    #[test]
    fn pick_then_recolor() {
        let mut state = state();
        state.paint(vec2(10.0, 10.0));
        assert!(state.pick_for_recolor(vec2(25.0, 25.0)));
        assert_eq!(state.picking, Some(PickState { index: 0, color: BLUE }));

        assert!(state.apply_recolor(RED));
        assert_eq!(state.picking, None);
        assert_eq!(
            state.squares.get(0),
            Some(&Square::new(Rect::new(0.0, 0.0, 50.0, 50.0), RED))
        );
    }

    #[test]
    fn pick_miss_stays_out_of_picking_mode() {
        let mut state = state();
        assert!(!state.pick_for_recolor(vec2(25.0, 25.0)));
        assert!(state.picking.is_none());
        assert!(!state.apply_recolor(RED));
    }

    #[test]
    fn erase_cancels_picking() {
        let mut state = state();
        state.paint(vec2(10.0, 10.0));
        state.paint(vec2(60.0, 10.0));
        state.pick_for_recolor(vec2(60.0, 10.0));
        state.erase(vec2(10.0, 10.0));
        assert!(state.picking.is_none());
        assert_eq!(state.squares.get(0).unwrap().color, BLUE);
    }

    #[test]
    fn stale_pick_is_dropped_without_change() {
        let mut state = state();
        state.paint(vec2(10.0, 10.0));
        state.picking = Some(PickState { index: 7, color: BLUE });
        assert!(!state.apply_recolor(RED));
        assert!(state.picking.is_none());
        assert_eq!(state.squares.get(0).unwrap().color, BLUE);
    }

    #[test]
    fn rejected_paint_sets_warning() {
        let mut config = AppConfig::default();
        config.canvas.capacity = 1;
        config.canvas.overflow = OverflowPolicy::Reject;
        let mut state = ApplicationState::new(&config);
        state.paint(vec2(0.0, 0.0));
        assert_eq!(state.paint(vec2(60.0, 0.0)), PaintOutcome::Rejected);
        assert_eq!(state.status.as_ref().map(|s| s.level), Some(StatusLevel::Warning));
    }

    fn bounded_state(capacity: usize, overflow: OverflowPolicy) -> ApplicationState {
        let mut config = AppConfig::default();
        config.canvas.capacity = capacity;
        config.canvas.overflow = overflow;
        ApplicationState::new(&config)
    }

    #[test]
    fn wrap_overwrite_of_picked_slot_clears_pick() {
        let mut state = bounded_state(2, OverflowPolicy::Wrap);
        state.paint(vec2(10.0, 10.0));
        state.paint(vec2(60.0, 10.0));
        assert!(state.pick_for_recolor(vec2(10.0, 10.0)));

        assert!(matches!(
            state.paint(vec2(110.0, 10.0)),
            PaintOutcome::Overwrote { index: 0, .. }
        ));
        assert!(state.picking.is_none());
        assert!(!state.apply_recolor(RED));
        assert_eq!(state.squares.get(0).unwrap().rect.x, 100.0);
        assert_eq!(state.squares.get(0).unwrap().color, BLUE);
    }

    #[test]
    fn wrap_overwrite_of_other_slot_keeps_pick() {
        let mut state = bounded_state(2, OverflowPolicy::Wrap);
        state.paint(vec2(10.0, 10.0));
        state.paint(vec2(60.0, 10.0));
        assert!(state.pick_for_recolor(vec2(60.0, 10.0)));

        state.paint(vec2(110.0, 10.0));
        assert_eq!(state.picking, Some(PickState { index: 1, color: BLUE }));
    }

    #[test]
    fn evicting_oldest_clears_pick() {
        let mut state = bounded_state(2, OverflowPolicy::EvictOldest);
        state.paint(vec2(10.0, 10.0));
        state.paint(vec2(60.0, 10.0));
        assert!(state.pick_for_recolor(vec2(60.0, 10.0)));

        assert!(matches!(state.paint(vec2(110.0, 10.0)), PaintOutcome::Evicted { .. }));
        assert!(state.picking.is_none());
        let xs: Vec<f32> = state.squares.iter().map(|sq| sq.rect.x).collect();
        assert_eq!(xs, vec![50.0, 100.0]);
    }

    #[test]
    fn status_expires() {
        let mut state = state();
        state.set_status(StatusLevel::Info, "hello");
        state.tick_status(STATUS_DURATION / 2.0);
        assert!(state.status.is_some());
        state.tick_status(STATUS_DURATION);
        assert!(state.status.is_none());
    }

    #[test]
    fn grid_toggles() {
        let mut state = state();
        assert!(state.show_grid);
        state.toggle_grid();
        assert!(!state.show_grid);
    }
}
