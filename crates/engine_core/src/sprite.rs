// crates/engine_core/src/sprite.rs
use engine_shared::{CSprite, CTransform, CVelocity, Rect};
use glam::{Vec2, Vec4};

use crate::surface::Surface;

/// A solid rectangle that moves by its own velocity once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub transform: CTransform,
    pub velocity: CVelocity,
    pub appearance: CSprite,
}

impl Sprite {
    /// At rest at `pos`, speed bounded by `max_speed` on both axes.
    pub fn new(pos: Vec2, size: Vec2, color: Vec4, max_speed: f32) -> Self {
        Self {
            transform: CTransform { pos, size },
            velocity: CVelocity::new(Vec2::splat(max_speed)),
            appearance: CSprite { color },
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.transform.pos
    }

    pub fn rect(&self) -> Rect {
        self.transform.rect()
    }

    /// `pos += velocity`.
    pub fn advance(&mut self) {
        self.transform.pos += self.velocity.value();
    }

    /// Draws at the current position, then advances. What is drawn in frame N
    /// is where frame N-1 left the sprite.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect(), self.appearance.color);
        self.advance();
    }
}
