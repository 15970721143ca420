use asteroid_clicker::audio::RecordingAudio;
use asteroid_clicker::platform::{HostEvent, dispatch};
use asteroid_clicker::render::{RecordingSurface, Sprite};
use asteroid_clicker::{Config, GameSession};

fn session() -> GameSession {
    GameSession::new(Config::default(), 2024).unwrap()
}

#[test]
fn spawn_then_click_center_destroys_asteroid() {
    let mut session = session();
    let mut surface = RecordingSurface::new();
    let mut audio = RecordingAudio::default();

    dispatch(
        &mut session,
        HostEvent::Tick { delta_ms: 501.0 },
        &mut surface,
        &mut audio,
    );
    assert_eq!(session.asteroids.active_count(), 1);

    let asteroid = session.asteroids.active().next().unwrap().clone();
    dispatch(
        &mut session,
        HostEvent::Click {
            x: asteroid.pos.x,
            y: asteroid.pos.y,
        },
        &mut surface,
        &mut audio,
    );

    assert_eq!(session.asteroids.active_count(), 0);
    assert_eq!(session.score, 1);
    assert_eq!(audio.played.len(), 1);

    let explosions: Vec<_> = session.explosions.active().collect();
    assert_eq!(explosions.len(), 1);
    assert_eq!(explosions[0].pos, asteroid.pos);
    assert_eq!(explosions[0].frame, 0);
    assert!((explosions[0].speed - asteroid.speed * 0.4).abs() < 1e-6);

    // The explosion is drawn on the next frame, the asteroid is not
    surface.reset();
    dispatch(
        &mut session,
        HostEvent::Tick { delta_ms: 16.0 },
        &mut surface,
        &mut audio,
    );
    assert_eq!(surface.sprite_count(Sprite::Explosion), 1);
    assert_eq!(surface.sprite_count(Sprite::Asteroid), 0);
    assert!(surface.texts().any(|t| t == "Score 1"));
}

#[test]
fn explosion_releases_after_animation() {
    let mut session = session();
    let mut surface = RecordingSurface::new();
    let mut audio = RecordingAudio::default();

    dispatch(
        &mut session,
        HostEvent::Tick { delta_ms: 501.0 },
        &mut surface,
        &mut audio,
    );
    let pos = session.asteroids.active().next().unwrap().pos;
    session.on_click(pos.x, pos.y, &mut audio);
    assert_eq!(session.explosions.active_count(), 1);

    // 50ms frames cross the 40ms interval every frame: 23 crossings end it
    for _ in 0..22 {
        dispatch(
            &mut session,
            HostEvent::Tick { delta_ms: 50.0 },
            &mut surface,
            &mut audio,
        );
    }
    assert_eq!(session.explosions.active_count(), 1);
    dispatch(
        &mut session,
        HostEvent::Tick { delta_ms: 50.0 },
        &mut surface,
        &mut audio,
    );
    assert_eq!(session.explosions.active_count(), 0);
}

#[test]
fn pools_never_exceed_capacity() {
    let config = Config {
        asteroid_capacity: 3,
        explosion_capacity: 2,
        ..Default::default()
    };
    let mut session = GameSession::new(config, 99).unwrap();
    let mut surface = RecordingSurface::new();
    let mut audio = RecordingAudio::default();

    for _ in 0..2000 {
        dispatch(
            &mut session,
            HostEvent::Tick { delta_ms: 600.0 },
            &mut surface,
            &mut audio,
        );
        surface.reset();
        assert!(session.asteroids.active_count() <= 3);
        assert!(session.explosions.active_count() <= 2);
    }
}
