//! Asteroid entity
//!
//! Inactive → Active on `activate`, back to Inactive when it crosses the far
//! edge (a burnout) or is shot.

use glam::Vec2;
use rand::Rng;

use super::pool::Pooled;
use crate::config::Config;
use crate::render::{Sprite, Surface};
use crate::uniform_range;

/// Emitted when an asteroid leaves the play field unharmed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burnout {
    /// Position at the moment of exit
    pub pos: Vec2,
}

/// A pooled asteroid
///
/// Position, speed and angle are stale while inactive.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Hit-circle radius (concentric with the sprite)
    pub radius: f32,
    /// Square sprite size
    pub display_size: f32,
    /// Horizontal speed per update
    pub speed: f32,
    /// Rotation (radians, accumulates)
    pub angle: f32,
    /// Radians added to `angle` per update
    pub spin: f32,
    pub active: bool,
}

impl Asteroid {
    /// Create an inactive asteroid parked just off the left edge
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(-config.asteroid_radius, 0.0),
            radius: config.asteroid_radius,
            display_size: config.asteroid_display_size,
            speed: 0.0,
            angle: 0.0,
            spin: 0.0,
            active: false,
        }
    }

    /// Launch from the left edge at a random height, speed and spin
    pub fn activate<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        self.pos = Vec2::new(
            -self.radius,
            uniform_range(rng, self.radius, config.height - self.radius),
        );
        self.speed = uniform_range(rng, config.asteroid_speed.min, config.asteroid_speed.max);
        self.angle = 0.0;
        self.spin = uniform_range(rng, config.asteroid_spin.min, config.asteroid_spin.max);
        self.active = true;
    }

    /// Advance one step; returns a burnout when the far edge is crossed
    ///
    /// The asteroid is released before returning, so the caller only has to
    /// spawn the explosion.
    pub fn update(&mut self, field_width: f32) -> Option<Burnout> {
        if !self.active {
            return None;
        }

        self.angle += self.spin;
        self.pos.x += self.speed;

        if self.pos.x > field_width - self.radius {
            self.release();
            return Some(Burnout { pos: self.pos });
        }
        None
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        if !self.active {
            return;
        }
        surface.draw_sprite(
            Sprite::Asteroid,
            None,
            self.pos,
            Vec2::splat(self.display_size),
            self.angle,
        );
    }

    /// Whether a circle at `point` with `radius` overlaps the hit-circle
    #[inline]
    pub fn hit_by(&self, point: Vec2, radius: f32) -> bool {
        super::collision::circles_overlap(self.pos, self.radius, point, radius)
    }
}

impl Pooled for Asteroid {
    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn launched(speed: f32) -> (Config, Asteroid) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut asteroid = Asteroid::new(&config);
        asteroid.activate(&config, &mut rng);
        asteroid.speed = speed;
        (config, asteroid)
    }

    #[test]
    fn test_activate_ranges() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut asteroid = Asteroid::new(&config);
        assert!(!asteroid.active);

        for _ in 0..200 {
            asteroid.activate(&config, &mut rng);
            assert!(asteroid.active);
            assert_eq!(asteroid.pos.x, -75.0);
            assert!(asteroid.pos.y >= 75.0 && asteroid.pos.y <= config.height - 75.0);
            assert!(asteroid.speed >= 1.5 && asteroid.speed <= 1.6);
            assert!(asteroid.spin >= -0.05 && asteroid.spin <= 0.05);
            assert_eq!(asteroid.angle, 0.0);
        }
    }

    #[test]
    fn test_update_moves_and_rotates() {
        let (config, mut asteroid) = launched(1.5);
        asteroid.spin = 0.02;
        let y = asteroid.pos.y;

        assert!(asteroid.update(config.width).is_none());
        assert_eq!(asteroid.pos.x, -73.5);
        assert_eq!(asteroid.pos.y, y);
        assert!((asteroid.angle - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_boundary_exit_after_expected_updates() {
        let (config, mut asteroid) = launched(1.5);
        // ceil((1024 - 75 + 75) / 1.5) = 683
        let expected = ((config.width - 75.0 + 75.0) / 1.5).ceil() as usize;
        assert_eq!(expected, 683);

        let mut burnouts = 0;
        let mut exit_step = None;
        for step in 1..=expected + 10 {
            if let Some(burnout) = asteroid.update(config.width) {
                burnouts += 1;
                exit_step.get_or_insert(step);
                assert!(burnout.pos.x > config.width - 75.0);
            }
        }
        assert_eq!(exit_step, Some(expected));
        assert_eq!(burnouts, 1);
        assert!(!asteroid.active);
    }

    #[test]
    fn test_burnout_frees_pool_slot() {
        use crate::sim::pool::{Pool, SlotId};

        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = Pool::new(1, |_| Asteroid::new(&config));
        pool.acquire().unwrap().activate(&config, &mut rng);
        assert!(pool.find_free().is_none());

        let asteroid = pool.get_mut(SlotId(0)).unwrap();
        asteroid.pos.x = config.width - 75.0;
        assert!(asteroid.update(config.width).is_some());
        assert!(!asteroid.is_active());
        assert_eq!(pool.find_free(), Some(SlotId(0)));
    }

    #[test]
    fn test_inactive_is_noop() {
        let config = Config::default();
        let mut asteroid = Asteroid::new(&config);
        let before = asteroid.pos;
        let mut surface = RecordingSurface::new();

        for _ in 0..10 {
            assert!(asteroid.update(config.width).is_none());
            asteroid.draw(&mut surface);
        }
        assert_eq!(asteroid.pos, before);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_draw_centered_and_rotated() {
        let (_, mut asteroid) = launched(1.5);
        asteroid.angle = 0.3;
        let mut surface = RecordingSurface::new();
        asteroid.draw(&mut surface);

        assert_eq!(
            surface.commands,
            vec![DrawCommand::Sprite {
                sprite: Sprite::Asteroid,
                src: None,
                center: asteroid.pos,
                size: Vec2::splat(150.0),
                rotation: 0.3,
            }]
        );
    }
}
