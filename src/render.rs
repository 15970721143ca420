//! Rendering surface capability
//!
//! The session draws through [`Surface`] and never touches pixels itself.
//! Hosts implement it over whatever they draw with (a 2D canvas on the web);
//! [`RecordingSurface`] captures the calls for tests and headless runs.

use glam::Vec2;

/// Images the session knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Asteroid,
    /// Explosion sprite sheet (cells addressed by a source rectangle)
    Explosion,
}

/// Source rectangle within a sprite sheet, in sheet pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrcRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Opaque drawing target consumed by the session
pub trait Surface {
    /// Erase the whole canvas
    fn clear(&mut self);

    /// Outline a circle with the configured stroke style
    fn stroke_circle(&mut self, center: Vec2, radius: f32);

    /// Draw `sprite` (or the `src` cell of it) centred on `center`, scaled to
    /// `size` and rotated by `rotation` radians about its centre
    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        src: Option<SrcRect>,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    );

    /// Fill `text` with its baseline anchored at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokeCircle {
        center: Vec2,
        radius: f32,
    },
    Sprite {
        sprite: Sprite,
        src: Option<SrcRect>,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        align: TextAlign,
    },
}

/// Surface that records every call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of sprite draws of the given kind
    pub fn sprite_count(&self, kind: Sprite) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite, .. } if *sprite == kind))
            .count()
    }

    /// All recorded text, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.commands
            .push(DrawCommand::StrokeCircle { center, radius });
    }

    fn draw_sprite(
        &mut self,
        sprite: Sprite,
        src: Option<SrcRect>,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    ) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            src,
            center,
            size,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            align,
        });
    }
}

/// Surface that only tallies draw calls, for long headless runs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSurface {
    pub clears: u64,
    pub circles: u64,
    pub sprites: u64,
    pub texts: u64,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn stroke_circle(&mut self, _center: Vec2, _radius: f32) {
        self.circles += 1;
    }

    fn draw_sprite(
        &mut self,
        _sprite: Sprite,
        _src: Option<SrcRect>,
        _center: Vec2,
        _size: Vec2,
        _rotation: f32,
    ) {
        self.sprites += 1;
    }

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _align: TextAlign) {
        self.texts += 1;
    }
}
