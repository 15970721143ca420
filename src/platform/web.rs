//! Browser host
//!
//! 2D canvas surface, `<audio>` explosion clips, a click listener and the
//! `requestAnimationFrame` loop. Expects the page to provide `canvas1`, the
//! `asteroid` and `explosion` images and `explosion1`..`explosionN` audio
//! elements.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAudioElement, HtmlCanvasElement, HtmlImageElement,
    MouseEvent,
};

use super::{FrameClock, HostEvent, dispatch};
use crate::audio::AudioSink;
use crate::config::Config;
use crate::render::{Sprite, SrcRect, Surface, TextAlign};
use crate::sim::GameSession;

/// [`Surface`] over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    asteroid: HtmlImageElement,
    explosion: HtmlImageElement,
}

impl CanvasSurface {
    /// Size the canvas and apply the HUD stroke/fill/font styles
    pub fn new(
        canvas: &HtmlCanvasElement,
        config: &Config,
        asteroid: HtmlImageElement,
        explosion: HtmlImageElement,
    ) -> Result<Self, JsValue> {
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()
            .map_err(JsValue::from)?;

        ctx.set_stroke_style_str(&config.hud_color);
        ctx.set_fill_style_str(&config.hud_color);
        ctx.set_line_width(config.hud_line_width as f64);
        ctx.set_font(&config.hud_font);

        Ok(Self {
            ctx,
            width: config.width as f64,
            height: config.height as f64,
            asteroid,
            explosion,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        src: Option<SrcRect>,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    ) {
        let image = match sprite {
            Sprite::Asteroid => &self.asteroid,
            Sprite::Explosion => &self.explosion,
        };
        let (w, h) = (size.x as f64, size.y as f64);

        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        if rotation != 0.0 {
            let _ = self.ctx.rotate(rotation as f64);
        }
        let result = match src {
            Some(r) => self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    r.x as f64,
                    r.y as f64,
                    r.w as f64,
                    r.h as f64,
                    -w * 0.5,
                    -h * 0.5,
                    w,
                    h,
                ),
            None => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, -w * 0.5, -h * 0.5, w, h),
        };
        if let Err(e) = result {
            log::warn!("drawImage failed: {:?}", e);
        }
        self.ctx.restore();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign) {
        self.ctx.save();
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
        self.ctx.restore();
    }
}

/// [`AudioSink`] over a fixed set of `<audio>` elements
pub struct HtmlAudio {
    clips: Vec<HtmlAudioElement>,
}

impl HtmlAudio {
    /// Collect `explosion1`..`explosion{count}`; missing elements are skipped
    pub fn from_document(document: &Document, count: usize) -> Self {
        let clips: Vec<HtmlAudioElement> = (1..=count)
            .filter_map(|i| element(document, &format!("explosion{i}")))
            .collect();
        if clips.len() < count {
            log::warn!("Found {} of {} explosion clips", clips.len(), count);
        }
        Self { clips }
    }
}

impl AudioSink for HtmlAudio {
    fn play_explosion(&mut self, clip: usize) {
        let Some(audio) = self.clips.get(clip) else {
            return;
        };
        audio.set_current_time(0.0);
        if let Err(e) = audio.play() {
            log::warn!("Audio playback failed: {:?}", e);
        }
    }
}

/// Everything the browser callbacks share
struct WebGame {
    session: GameSession,
    surface: CanvasSurface,
    audio: HtmlAudio,
    clock: FrameClock,
}

fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn required<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    element(document, id).ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Build the session and start the frame loop
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Asteroid Clicker starting...");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let config = Config::default();
    let canvas: HtmlCanvasElement = required(&document, "canvas1")?;
    let surface = CanvasSurface::new(
        &canvas,
        &config,
        required(&document, "asteroid")?,
        required(&document, "explosion")?,
    )?;
    let audio = HtmlAudio::from_document(&document, config.explosion_clips);

    let seed = js_sys::Date::now() as u64;
    let session = GameSession::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let game = Rc::new(RefCell::new(WebGame {
        session,
        surface,
        audio,
        clock: FrameClock::new(),
    }));

    setup_click_handler(&window, game.clone())?;
    request_animation_frame(game);

    log::info!("Asteroid Clicker running!");
    Ok(())
}

fn setup_click_handler(window: &web_sys::Window, game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let mut guard = game.borrow_mut();
        let g = &mut *guard;
        let click = HostEvent::Click {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        };
        dispatch(&mut g.session, click, &mut g.surface, &mut g.audio);
    });
    window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>, time: f64) {
    {
        let mut guard = game.borrow_mut();
        let g = &mut *guard;
        let delta_ms = g.clock.tick(time);
        dispatch(
            &mut g.session,
            HostEvent::Tick { delta_ms },
            &mut g.surface,
            &mut g.audio,
        );
    }

    request_animation_frame(game);
}
