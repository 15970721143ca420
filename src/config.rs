//! Session configuration
//!
//! Every tunable constant of the arcade loop, loadable from JSON and
//! validated once at startup so the per-frame paths never see bad ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a [`Config`]
#[derive(Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// Config file could not be read
    Io(std::io::Error),
    /// A pool was configured with no slots
    ZeroCapacity { field: &'static str },
    /// A randomized range has `min > max` (or a non-finite bound)
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A size or interval that must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// Asteroids cannot fit vertically (`2 * radius > height`)
    SpawnBandEmpty { radius: f32, height: f32 },
    /// No explosion clips to choose from
    NoClips,
    /// Explosion sprite sheet has no rows
    NoSpriteRows,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Io(err) => write!(f, "could not read config: {err}"),
            Self::ZeroCapacity { field } => write!(f, "{field} must be at least 1"),
            Self::InvalidRange { field, min, max } => {
                write!(f, "{field} range is invalid ({min} > {max})")
            }
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            Self::SpawnBandEmpty { radius, height } => write!(
                f,
                "asteroid radius {radius} leaves no spawn band in height {height}"
            ),
            Self::NoClips => write!(f, "explosion_clips must be at least 1"),
            Self::NoSpriteRows => write!(f, "explosion_sprite_rows must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Inclusive-exclusive `[min, max)` range for randomized attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Full session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Canvas ===
    pub width: f32,
    pub height: f32,

    // === Pools ===
    pub asteroid_capacity: usize,
    pub explosion_capacity: usize,

    // === Asteroids ===
    /// Hit-circle radius
    pub asteroid_radius: f32,
    /// Sprite is drawn as a square of this size
    pub asteroid_display_size: f32,
    pub asteroid_speed: Range,
    /// Radians added to the angle each update
    pub asteroid_spin: Range,

    // === Explosions ===
    pub explosion_cell_size: f32,
    pub explosion_sprite_rows: u32,
    pub explosion_max_frame: u32,
    pub explosion_frame_interval_ms: f32,
    pub hit_drift_factor: f32,
    pub explosion_clips: usize,

    // === Session ===
    pub spawn_interval_ms: f32,
    pub max_score: u32,
    pub pointer_radius: f32,

    // === HUD ===
    pub hud_font: String,
    pub hud_color: String,
    pub hud_line_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,

            asteroid_capacity: ASTEROID_POOL_CAPACITY,
            explosion_capacity: EXPLOSION_POOL_CAPACITY,

            asteroid_radius: ASTEROID_RADIUS,
            asteroid_display_size: ASTEROID_DISPLAY_SIZE,
            asteroid_speed: Range::new(ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
            asteroid_spin: Range::new(ASTEROID_MIN_SPIN, ASTEROID_MAX_SPIN),

            explosion_cell_size: EXPLOSION_CELL_SIZE,
            explosion_sprite_rows: EXPLOSION_SPRITE_ROWS,
            explosion_max_frame: EXPLOSION_MAX_FRAME,
            explosion_frame_interval_ms: EXPLOSION_FRAME_INTERVAL_MS,
            hit_drift_factor: HIT_DRIFT_FACTOR,
            explosion_clips: EXPLOSION_CLIPS,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_score: MAX_SCORE,
            pointer_radius: POINTER_RADIUS,

            hud_font: HUD_FONT.to_string(),
            hud_color: HUD_COLOR.to_string(),
            hud_line_width: HUD_LINE_WIDTH,
        }
    }
}

impl Config {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every constant the frame loop relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asteroid_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "asteroid_capacity",
            });
        }
        if self.explosion_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "explosion_capacity",
            });
        }

        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("asteroid_radius", self.asteroid_radius),
            ("asteroid_display_size", self.asteroid_display_size),
            ("explosion_cell_size", self.explosion_cell_size),
            ("explosion_frame_interval_ms", self.explosion_frame_interval_ms),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("pointer_radius", self.pointer_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.hit_drift_factor.is_finite() || self.hit_drift_factor < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "hit_drift_factor",
                value: self.hit_drift_factor,
            });
        }

        self.asteroid_speed.check("asteroid_speed")?;
        self.asteroid_spin.check("asteroid_spin")?;

        if 2.0 * self.asteroid_radius > self.height {
            return Err(ConfigError::SpawnBandEmpty {
                radius: self.asteroid_radius,
                height: self.height,
            });
        }
        if self.explosion_clips == 0 {
            return Err(ConfigError::NoClips);
        }
        if self.explosion_sprite_rows == 0 {
            return Err(ConfigError::NoSpriteRows);
        }

        Ok(())
    }
}
