//! Platform abstraction layer
//!
//! Turns host timestamps and pointer input into session calls:
//! - [`FrameClock`] converts absolute frame timestamps into deltas
//! - [`HostEvent`] + [`dispatch`] route one host event to the session
//! - [`run_headless`] drives a scripted session without a browser

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::audio::AudioSink;
use crate::render::Surface;
use crate::sim::GameSession;

/// One event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer click at canvas coordinates
    Click { x: f32, y: f32 },
    /// Frame tick carrying milliseconds since the previous tick
    Tick { delta_ms: f32 },
}

/// Converts monotonically increasing frame timestamps into deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call (measured from 0 on the first)
    ///
    /// A timestamp older than the previous one yields 0 rather than a
    /// negative delta.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let delta = (timestamp_ms - self.last_ms).max(0.0);
        self.last_ms = timestamp_ms;
        self.frames += 1;
        delta as f32
    }

    /// Ticks delivered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Route one host event to the session
///
/// Ticks clear the surface and run a full frame; clicks resolve
/// immediately against the current pool state.
pub fn dispatch(
    session: &mut GameSession,
    event: HostEvent,
    surface: &mut impl Surface,
    audio: &mut impl AudioSink,
) {
    match event {
        HostEvent::Click { x, y } => {
            session.on_click(x, y, audio);
        }
        HostEvent::Tick { delta_ms } => {
            surface.clear();
            session.render(surface, delta_ms);
        }
    }
}

/// Summary of a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub clicks: u64,
    pub hits: u64,
    pub score: u32,
}

/// Drive `session` for `frames` fixed-length ticks
///
/// Every `click_every` frames (0 disables clicking) the scripted player
/// clicks the centre of the first active asteroid.
pub fn run_headless(
    session: &mut GameSession,
    frames: u64,
    frame_ms: f64,
    click_every: u64,
    surface: &mut impl Surface,
    audio: &mut impl AudioSink,
) -> HeadlessReport {
    let mut clock = FrameClock::new();
    let mut report = HeadlessReport {
        frames: 0,
        clicks: 0,
        hits: 0,
        score: 0,
    };

    for frame in 0..frames {
        let delta_ms = clock.tick(frame as f64 * frame_ms);
        dispatch(session, HostEvent::Tick { delta_ms }, surface, audio);

        if click_every > 0 && frame % click_every == 0 {
            let target = session.asteroids.active().next().map(|a| a.pos);
            if let Some(target) = target {
                let before = session.score;
                let hits = session.on_click(target.x, target.y, audio).hits;
                report.clicks += 1;
                report.hits += u64::from(hits);
                if session.score != before {
                    log::debug!("Frame {}: score {}", frame, session.score);
                }
            }
        }
    }

    report.frames = clock.frames();
    report.score = session.score;
    report
}
