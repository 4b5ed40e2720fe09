//! Configuration management for draw-and-share

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::camera::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::core::{
    OverflowPolicy, CONFIG_FILE, GRID_SIZE, MAP_DIR, MAP_FILE, MAX_SQUARES, SCREEN_HEIGHT,
    SCREEN_WIDTH, WINDOW_TITLE,
};
use crate::error::ConfigError;
use crate::persistence::map_path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub cell_size: f32,
    pub capacity: usize,
    pub overflow: OverflowPolicy,
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: String,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Screen pixels per second
    pub pan_speed: f32,
    /// Fractional zoom change per wheel notch
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            cell_size: GRID_SIZE,
            capacity: MAX_SQUARES,
            overflow: OverflowPolicy::default(),
            show_grid: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: MAP_DIR.to_string(),
            file: MAP_FILE.to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_speed: 300.0,
            zoom_step: 0.05,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl StorageConfig {
    pub fn map_path(&self) -> PathBuf {
        map_path(&self.dir, &self.file)
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`AppConfig::load`], but falls back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Ignoring {}: {}", path.display(), e);
            AppConfig::default()
        })
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        let canvas = CanvasConfig::default();
        if !(self.canvas.cell_size.is_finite() && self.canvas.cell_size > 0.0) {
            warn!("canvas.cell_size {} is invalid, using {}", self.canvas.cell_size, canvas.cell_size);
            self.canvas.cell_size = canvas.cell_size;
        }
        if self.canvas.capacity == 0 {
            warn!("canvas.capacity must be at least 1, using {}", canvas.capacity);
            self.canvas.capacity = canvas.capacity;
        }

        let camera = CameraConfig::default();
        let zoom_ok = self.camera.min_zoom.is_finite()
            && self.camera.max_zoom.is_finite()
            && self.camera.min_zoom > 0.0
            && self.camera.min_zoom <= self.camera.max_zoom;
        if !zoom_ok {
            warn!(
                "camera zoom range [{}, {}] is invalid, using [{}, {}]",
                self.camera.min_zoom, self.camera.max_zoom, camera.min_zoom, camera.max_zoom
            );
            self.camera.min_zoom = camera.min_zoom;
            self.camera.max_zoom = camera.max_zoom;
        }
        if !(self.camera.zoom_step.is_finite() && self.camera.zoom_step > 0.0) {
            self.camera.zoom_step = camera.zoom_step;
        }
        if !self.camera.pan_speed.is_finite() {
            self.camera.pan_speed = camera.pan_speed;
        }

        let window = WindowConfig::default();
        if self.window.width <= 0 || self.window.height <= 0 {
            self.window.width = window.width;
            self.window.height = window.height;
        }
        self
    }

    pub fn window_conf(&self) -> macroquad::window::Conf {
        macroquad::window::Conf {
            window_title: self.window.title.clone(),
            window_width: self.window.width,
            window_height: self.window.height,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.canvas.capacity, 10_000);
        assert_eq!(config.canvas.cell_size, 50.0);
        assert_eq!(config.canvas.overflow, OverflowPolicy::Wrap);
        assert_eq!(config.storage.map_path(), PathBuf::from("maps").join("map.txt"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [canvas]
            capacity = 64
            overflow = "evict_oldest"

            [storage]
            file = "shared.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.capacity, 64);
        assert_eq!(config.canvas.overflow, OverflowPolicy::EvictOldest);
        assert_eq!(config.canvas.cell_size, 50.0);
        assert_eq!(config.storage.dir, "maps");
        assert_eq!(config.storage.file, "shared.txt");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn reject_policy_parses() {
        let config = AppConfig::from_toml_str("[canvas]\noverflow = \"reject\"\n").unwrap();
        assert_eq!(config.canvas.overflow, OverflowPolicy::Reject);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_toml_str(
            r#"
            [canvas]
            cell_size = -5.0
            capacity = 0

            [camera]
            min_zoom = 4.0
            max_zoom = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.cell_size, 50.0);
        assert_eq!(config.canvas.capacity, 10_000);
        assert_eq!(config.camera.min_zoom, DEFAULT_MIN_ZOOM);
        assert_eq!(config.camera.max_zoom, DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[canvas\ncapacity = 1"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[canvas]\noverflow = \"sometimes\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("draw-and-share-no-such-config.toml");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }
}
