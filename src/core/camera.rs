use macroquad::prelude::*;

pub const DEFAULT_MIN_ZOOM: f32 = 0.1;
pub const DEFAULT_MAX_ZOOM: f32 = 8.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// World coordinates at screen position (0, 0)
    pub origin: Vec2,

    /// Screen pixels per world unit
    pub zoom: f32,

    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::with_zoom_limits(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }

    pub fn with_zoom_limits(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            zoom: 1.0_f32.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Convert world coordinates to screen pixels
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.origin) * self.zoom
    }

    /// Convert screen pixels to world coordinates
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen / self.zoom) + self.origin
    }

    /// Get the world-space rect of the visible canvas area
    pub fn visible_world_rect(&self, screen_w: f32, screen_h: f32) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            screen_w / self.zoom,
            screen_h / self.zoom,
        )
    }

    /// Pan the camera by a delta in world units
    pub fn pan_by(&mut self, delta_world: Vec2) {
        self.origin += delta_world;
    }

    /// Convert a screen-pixel distance to world units at the current zoom
    pub fn screen_delta_to_world(&self, delta_screen: Vec2) -> Vec2 {
        delta_screen / self.zoom
    }

    /// Zoom around a point on screen, keeping the world point under it fixed
    pub fn zoom_around(&mut self, cursor_screen: Vec2, zoom_factor: f32) {
        let world_before = self.screen_to_world(cursor_screen);

        self.zoom = (self.zoom * zoom_factor).clamp(self.min_zoom, self.max_zoom);

        let world_after = self.screen_to_world(cursor_screen);
        self.origin += world_before - world_after;
    }
}
