//! Entity lifecycle and frame-update core
//!
//! All gameplay logic lives here. This module has no platform dependencies:
//! - Fixed-capacity pools, no per-frame allocation of entities
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - Drawing and sound go through injected capabilities

pub mod asteroid;
pub mod collision;
pub mod explosion;
pub mod pool;
pub mod session;
pub mod spawner;

pub use asteroid::{Asteroid, Burnout};
pub use collision::{ClickResult, circles_overlap, resolve_click};
pub use explosion::Explosion;
pub use pool::{Pool, Pooled, SlotId};
pub use session::{GameSession, INSTRUCTIONS};
pub use spawner::SpawnScheduler;
