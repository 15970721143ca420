//! Click-vs-asteroid collision resolution
//!
//! A click is a tiny circle. Every active asteroid whose hit-circle overlaps
//! it is destroyed in the same pass and replaced by an explosion.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::explosion::Explosion;
use super::pool::{Pool, SlotId};

/// Outcome of resolving one click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickResult {
    /// Asteroids destroyed by the click
    pub hits: u32,
    /// Explosions actually started (lower than `hits` when the pool is full)
    pub explosions: u32,
}

/// Strict circle overlap: touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Destroy every active asteroid under the click
///
/// Each hit starts an explosion at the asteroid's position drifting at
/// `speed * drift_factor`. Destruction is not gated on the explosion pool:
/// when no explosion slot is free only the explosion is skipped, the slot is
/// still released and the hit still counts towards the caller's score.
pub fn resolve_click(
    asteroids: &mut Pool<Asteroid>,
    explosions: &mut Pool<Explosion>,
    point: Vec2,
    point_radius: f32,
    drift_factor: f32,
) -> ClickResult {
    let mut result = ClickResult::default();

    for index in 0..asteroids.capacity() {
        let id = SlotId(index);
        let Some(asteroid) = asteroids.get(id) else {
            continue;
        };
        if !asteroid.active || !asteroid.hit_by(point, point_radius) {
            continue;
        }

        match explosions.acquire() {
            Some(explosion) => {
                explosion.activate(asteroid.pos, asteroid.speed * drift_factor);
                result.explosions += 1;
            }
            None => log::trace!("Explosion pool exhausted, hit at {:?} skipped", asteroid.pos),
        }
        asteroids.release(id);
        result.hits += 1;
    }

    if result.hits > 0 {
        log::debug!("Click at {:?} destroyed {} asteroid(s)", point, result.hits);
    }
    result
}
