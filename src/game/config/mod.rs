//! Editor Configuration
//!
//! Centralizes the visual and interaction settings of the plan editor
//! (palette, camera framing, ground extents, lighting, bloom) so the feel
//! can be tweaked without touching editor code. Values can be overridden
//! from a JSON file next to the executable.

use std::fmt;
use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Bloom post-processing parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomParams {
    /// Additive strength of the blurred glow layer
    pub strength: f32,
    /// Blur kernel spread in texels
    pub radius: f32,
    /// Luminance below this contributes nothing to the glow
    pub threshold: f32,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            strength: 0.7,
            radius: 0.6,
            threshold: 0.0,
        }
    }
}

/// Visual and interaction configuration for the plan editor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    // Palette (RGBA, linear space)
    /// Window clear color behind the base scene
    pub clear_color: Vec4,
    /// Wall color for placed and in-progress buildings
    pub building_color: Vec4,
    /// Floor slab color
    pub floor_color: Vec4,
    /// Cursor arrow color (the glowing element)
    pub arrow_color: Vec4,
    /// Ground plane color
    pub ground_color: Vec4,
    /// Grid helper line color
    pub grid_color: Vec4,

    // Camera framing
    /// Half the vertical extent of the orthographic view volume
    pub camera_half_height: f32,

    // Ground and grid
    /// Ground plane side length in world units
    pub ground_extent: f32,
    /// Number of grid lines along each axis
    pub grid_line_count: u32,

    // Lighting
    /// Direction light travels (normalized before upload)
    pub light_direction: Vec3,
    /// Ambient light intensity (0.0 = unlit faces black)
    pub ambient: f32,

    pub bloom: BloomParams,
}

impl Default for EditorConfig {
    /// Paper-white sheet with dark ink-blue buildings and a red cursor
    /// arrow that carries the bloom.
    fn default() -> Self {
        Self {
            clear_color: rgba(0xfa, 0xfd, 0xf6),
            building_color: rgba(0x17, 0x2a, 0x3a),
            floor_color: rgba(0x14, 0x25, 0x33),
            arrow_color: rgba(0xa4, 0x16, 0x1a),
            ground_color: rgba(0xfa, 0xfd, 0xf6),
            grid_color: rgba(0xcc, 0xcc, 0xcc),

            camera_half_height: 12.0,

            ground_extent: 249.0,
            grid_line_count: 1001,

            light_direction: Vec3::new(-0.25, -1.0, 0.5),
            ambient: 0.55,

            bloom: BloomParams::default(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load configuration, falling back to defaults when the file is
    /// absent or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                println!("[Config] Loaded {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("[Config] Failed to load {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

/// Convert 8-bit sRGB channels to a linear-space RGBA color.
fn rgba(r: u8, g: u8, b: u8) -> Vec4 {
    let channel = |c: u8| {
        let s = c as f32 / 255.0;
        if s <= 0.04045 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec4::new(channel(r), channel(g), channel(b), 1.0)
}

/// Errors from loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io error: {e}"),
            ConfigError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_json() {
        let config = EditorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EditorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.camera_half_height, config.camera_half_height);
        assert_eq!(back.grid_line_count, config.grid_line_count);
        assert_eq!(back.bloom.strength, config.bloom.strength);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "camera_half_height": 20.0 }"#).unwrap();
        assert_eq!(config.camera_half_height, 20.0);
        assert_eq!(config.grid_line_count, EditorConfig::default().grid_line_count);
    }

    #[test]
    fn test_srgb_conversion_endpoints() {
        let white = rgba(0xff, 0xff, 0xff);
        assert!((white.x - 1.0).abs() < 1e-6);
        let black = rgba(0, 0, 0);
        assert_eq!(black.x, 0.0);
        assert_eq!(black.w, 1.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = EditorConfig::load_or_default("/nonexistent/editor.json");
        assert_eq!(config.ground_extent, EditorConfig::default().ground_extent);
    }
}
