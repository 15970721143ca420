//! Asteroid Clicker entry point
//!
//! On the web this starts the canvas frame loop. Natively it runs a headless
//! autoplay session and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = asteroid_clicker::platform::web::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated when no count is given (one minute at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use asteroid_clicker::audio::LogAudio;
    use asteroid_clicker::platform::run_headless;
    use asteroid_clicker::render::CountingSurface;
    use asteroid_clicker::{Config, GameSession};

    env_logger::init();
    log::info!("Asteroid Clicker (native) starting...");

    // Usage: asteroid-clicker [config.json] [frames]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut session = match GameSession::new(config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let mut surface = CountingSurface::default();
    let mut audio = LogAudio;
    let report = run_headless(
        &mut session,
        frames,
        1000.0 / 60.0,
        30,
        &mut surface,
        &mut audio,
    );

    log::info!(
        "Headless run finished: {} frames, {} sprites drawn",
        report.frames,
        surface.sprites
    );
    println!(
        "frames={} clicks={} hits={} score={} won={}",
        report.frames,
        report.clicks,
        report.hits,
        report.score,
        session.has_won()
    );
}
