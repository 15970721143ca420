//! Game session: owns every pool and scalar of a run and drives the frame

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::collision::{ClickResult, resolve_click};
use super::explosion::Explosion;
use super::pool::Pool;
use super::spawner::SpawnScheduler;
use crate::audio::AudioSink;
use crate::config::{Config, ConfigError};
use crate::render::{Surface, TextAlign};

/// Instruction line shown at the top of the screen
pub const INSTRUCTIONS: &str = "Click on Asteroid to destroy and score points";

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    pub asteroids: Pool<Asteroid>,
    pub explosions: Pool<Explosion>,
    pub spawner: SpawnScheduler,
    /// Asteroids destroyed by clicks (never decreases)
    pub score: u32,
    /// Last click position, drawn as a small marker
    pub pointer: Option<Vec2>,
    rng: Pcg32,
}

impl GameSession {
    /// Validate `config` and build both pools up front
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let asteroids = Pool::new(config.asteroid_capacity, |_| Asteroid::new(&config));
        let explosions = Pool::new(config.explosion_capacity, |_| {
            Explosion::new(&config, &mut rng)
        });
        let spawner = SpawnScheduler::new(config.spawn_interval_ms);

        log::info!(
            "Session started (seed {}, {} asteroid slots, {} explosion slots)",
            seed,
            asteroids.capacity(),
            explosions.capacity()
        );

        Ok(Self {
            config,
            seed,
            asteroids,
            explosions,
            spawner,
            score: 0,
            pointer: None,
            rng,
        })
    }

    /// Whether the win banner is showing
    pub fn has_won(&self) -> bool {
        self.score >= self.config.max_score
    }

    /// Resolve a click at canvas coordinates `(x, y)`
    ///
    /// Each destroyed asteroid scores one point while `score <= max_score`
    /// (so the score can end one past the cap) and plays a random clip.
    pub fn on_click(&mut self, x: f32, y: f32, audio: &mut impl AudioSink) -> ClickResult {
        let point = Vec2::new(x, y);
        self.pointer = Some(point);

        let result = resolve_click(
            &mut self.asteroids,
            &mut self.explosions,
            point,
            self.config.pointer_radius,
            self.config.hit_drift_factor,
        );

        for _ in 0..result.hits {
            if self.score <= self.config.max_score {
                self.score += 1;
                let clip = self.rng.random_range(0..self.config.explosion_clips);
                audio.play_explosion(clip);
                if self.score == self.config.max_score {
                    log::info!("Win threshold reached (score {})", self.score);
                }
            }
        }
        result
    }

    /// Run one frame: spawn, draw-then-update every slot, then the HUD
    ///
    /// Entities are drawn before they update, so what is shown reflects the
    /// previous frame's motion.
    pub fn render(&mut self, surface: &mut impl Surface, dt_ms: f32) {
        if let Some(pointer) = self.pointer {
            surface.stroke_circle(pointer, self.config.pointer_radius);
        }

        self.spawner
            .update(dt_ms, &mut self.asteroids, &self.config, &mut self.rng);

        for asteroid in self.asteroids.iter_mut() {
            asteroid.draw(surface);
            let Some(burnout) = asteroid.update(self.config.width) else {
                continue;
            };
            match self.explosions.acquire() {
                Some(explosion) => {
                    explosion.activate(burnout.pos, 0.0);
                    log::debug!("Asteroid burned out at {:?}", burnout.pos);
                }
                None => log::trace!("Explosion pool exhausted, burnout skipped"),
            }
        }

        for explosion in self.explosions.iter_mut() {
            explosion.draw(surface);
            explosion.update(dt_ms);
        }

        self.draw_hud(surface);
    }

    fn draw_hud(&self, surface: &mut impl Surface) {
        let center_x = self.config.width * 0.5;

        surface.draw_text(
            &format!("Score {}", self.score),
            Vec2::new(20.0, 35.0),
            TextAlign::Left,
        );
        if self.has_won() {
            surface.draw_text(
                &format!("You Win! Final Score is {}", self.score),
                Vec2::new(center_x, self.config.height * 0.5),
                TextAlign::Center,
            );
        }
        surface.draw_text(INSTRUCTIONS, Vec2::new(center_x, 35.0), TextAlign::Center);
    }
}
