//! Timer-driven asteroid spawning

use rand::Rng;

use super::asteroid::Asteroid;
use super::pool::{Pool, SlotId};
use crate::config::Config;

/// Accumulates frame time and launches one asteroid per elapsed interval
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    /// Milliseconds since the last spawn attempt
    pub timer_ms: f32,
    pub interval_ms: f32,
}

impl SpawnScheduler {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            timer_ms: 0.0,
            interval_ms,
        }
    }

    /// Add `dt_ms`; returns true (and resets) once the interval is exceeded
    ///
    /// A single huge delta still fires at most once.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.timer_ms += dt_ms;
        if self.timer_ms > self.interval_ms {
            self.timer_ms = 0.0;
            return true;
        }
        false
    }

    /// Run one frame: activate a free asteroid when the timer fires
    ///
    /// Returns the slot that was launched. A full pool skips this spawn; the
    /// timer resets either way.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt_ms: f32,
        asteroids: &mut Pool<Asteroid>,
        config: &Config,
        rng: &mut R,
    ) -> Option<SlotId> {
        if !self.tick(dt_ms) {
            return None;
        }

        let Some(id) = asteroids.find_free() else {
            log::trace!("Asteroid pool exhausted, spawn skipped");
            return None;
        };
        let asteroid = asteroids.get_mut(id)?;
        asteroid.activate(config, rng);
        log::debug!("Spawned asteroid {} at y={:.1}", id.0, asteroid.pos.y);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fires_only_after_interval_exceeded() {
        let mut scheduler = SpawnScheduler::new(500.0);
        assert!(!scheduler.tick(250.0));
        // exactly 500 is not past the threshold
        assert!(!scheduler.tick(250.0));
        assert!(scheduler.tick(1.0));
        assert_eq!(scheduler.timer_ms, 0.0);
    }

    #[test]
    fn test_large_delta_spawns_once() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut asteroids = Pool::new(config.asteroid_capacity, |_| Asteroid::new(&config));
        let mut scheduler = SpawnScheduler::new(config.spawn_interval_ms);

        let spawned = scheduler.update(10_000.0, &mut asteroids, &config, &mut rng);
        assert_eq!(spawned, Some(SlotId(0)));
        assert_eq!(asteroids.active_count(), 1);
        assert_eq!(scheduler.timer_ms, 0.0);
    }

    #[test]
    fn test_full_pool_skips_and_resets() {
        let config = Config {
            asteroid_capacity: 2,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(9);
        let mut asteroids = Pool::new(config.asteroid_capacity, |_| Asteroid::new(&config));
        let mut scheduler = SpawnScheduler::new(config.spawn_interval_ms);

        assert!(scheduler.update(501.0, &mut asteroids, &config, &mut rng).is_some());
        assert!(scheduler.update(501.0, &mut asteroids, &config, &mut rng).is_some());
        assert!(scheduler.update(501.0, &mut asteroids, &config, &mut rng).is_none());
        assert_eq!(asteroids.active_count(), 2);
        assert_eq!(scheduler.timer_ms, 0.0);
    }
}
