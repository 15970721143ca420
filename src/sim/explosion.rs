//! Explosion entity
//!
//! Plays a fixed-rate sprite-sheet animation and releases itself after the
//! last frame.

use glam::Vec2;
use rand::Rng;

use super::pool::Pooled;
use crate::config::Config;
use crate::render::{Sprite, SrcRect, Surface};

/// A pooled explosion animation
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    /// Horizontal drift per update
    pub speed: f32,
    /// Current animation column, `0..=max_frame` while playing
    pub frame: u32,
    /// Sprite-sheet row, fixed for the lifetime of the slot
    pub row: u32,
    pub max_frame: u32,
    /// Milliseconds accumulated toward the next frame
    pub timer_ms: f32,
    pub frame_interval_ms: f32,
    /// Square sprite-sheet cell size
    pub cell_size: f32,
    pub active: bool,
}

impl Explosion {
    /// Create an inactive explosion with a random sprite row
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        Self {
            pos: Vec2::ZERO,
            speed: 0.0,
            frame: 0,
            row: rng.random_range(0..config.explosion_sprite_rows),
            max_frame: config.explosion_max_frame,
            timer_ms: 0.0,
            frame_interval_ms: config.explosion_frame_interval_ms,
            cell_size: config.explosion_cell_size,
            active: false,
        }
    }

    /// Start playing from the first frame at `pos`
    pub fn activate(&mut self, pos: Vec2, speed: f32) {
        self.pos = pos;
        self.speed = speed;
        self.frame = 0;
        self.timer_ms = 0.0;
        self.active = true;
    }

    /// Advance drift and animation; returns true on the update that finishes
    /// the animation
    ///
    /// One drift step is applied even while inactive. It is invisible because
    /// inactive explosions are never drawn, and `activate` overwrites the
    /// position.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        self.pos.x += self.speed;
        if !self.active {
            return false;
        }

        self.pos.x += self.speed;
        self.timer_ms += dt_ms;
        if self.timer_ms > self.frame_interval_ms {
            self.frame += 1;
            self.timer_ms = 0.0;
            if self.frame > self.max_frame {
                self.active = false;
                return true;
            }
        }
        false
    }

    /// Sprite-sheet cell for the current frame
    pub fn src_rect(&self) -> SrcRect {
        SrcRect {
            x: self.cell_size * self.frame as f32,
            y: self.cell_size * self.row as f32,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        if !self.active {
            return;
        }
        surface.draw_sprite(
            Sprite::Explosion,
            Some(self.src_rect()),
            self.pos,
            Vec2::splat(self.cell_size),
            0.0,
        );
    }
}

impl Pooled for Explosion {
    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) {
        self.active = false;
    }
}
