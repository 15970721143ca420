//! Asteroid Clicker - a click-to-destroy asteroid arcade loop
//!
//! Core modules:
//! - `sim`: Entity pools, asteroid/explosion state machines, spawning, collisions
//! - `config`: Startup configuration with fail-fast validation
//! - `render`: Rendering surface capability consumed by the session
//! - `audio`: Audio clip playback capability consumed by the session
//! - `platform`: Frame clock and host event delivery

pub mod audio;
pub mod config;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::GameSession;

use rand::Rng;

/// Default configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const GAME_WIDTH: f32 = 1024.0;
    pub const GAME_HEIGHT: f32 = 576.0;

    /// Pool capacities
    pub const ASTEROID_POOL_CAPACITY: usize = 30;
    pub const EXPLOSION_POOL_CAPACITY: usize = 7;

    /// Asteroid defaults - hit-circle is concentric with the sprite
    pub const ASTEROID_RADIUS: f32 = 75.0;
    pub const ASTEROID_DISPLAY_SIZE: f32 = 150.0;
    pub const ASTEROID_MIN_SPEED: f32 = 1.5;
    pub const ASTEROID_MAX_SPEED: f32 = 1.6;
    /// Angular velocity range (radians per update)
    pub const ASTEROID_MIN_SPIN: f32 = -0.05;
    pub const ASTEROID_MAX_SPIN: f32 = 0.05;

    /// Explosion sprite sheet: 300x300 cells, 3 rows, 23 frames per row
    pub const EXPLOSION_CELL_SIZE: f32 = 300.0;
    pub const EXPLOSION_SPRITE_ROWS: u32 = 3;
    pub const EXPLOSION_MAX_FRAME: u32 = 22;
    /// Milliseconds per animation frame (25 fps)
    pub const EXPLOSION_FRAME_INTERVAL_MS: f32 = 1000.0 / 25.0;
    /// Share of the asteroid's speed an explosion keeps as drift
    pub const HIT_DRIFT_FACTOR: f32 = 0.4;
    /// Number of interchangeable explosion sound clips
    pub const EXPLOSION_CLIPS: usize = 6;

    /// Spawn scheduler interval (ms)
    pub const SPAWN_INTERVAL_MS: f32 = 500.0;

    /// Win threshold
    pub const MAX_SCORE: u32 = 30;

    /// Click hit-test radius
    pub const POINTER_RADIUS: f32 = 2.0;

    /// HUD styling
    pub const HUD_FONT: &str = "30px Helvetica";
    pub const HUD_COLOR: &str = "white";
    pub const HUD_LINE_WIDTH: f32 = 3.0;
}

/// Uniformly sample a value in `[min, max)`
///
/// Returns `min` when the range is empty. Ranges are validated by
/// [`Config::validate`] so callers never pass `min > max`.
#[inline]
pub fn uniform_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    min + rng.random::<f32>() * (max - min)
}
