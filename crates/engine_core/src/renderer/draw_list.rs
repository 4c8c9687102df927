// crates/engine_core/src/renderer/draw_list.rs
use engine_shared::Rect;
use glam::Vec4;

use super::types::InstanceRaw;
use crate::surface::Surface;

/// CPU-side `Surface`: records one frame of rectangles for the sprite pass.
pub struct DrawList {
    instances: Vec<InstanceRaw>,
    area: Rect,
    background: Vec4,
}

impl DrawList {
    pub fn new(area: Rect, background: Vec4) -> Self {
        Self {
            instances: Vec::new(),
            area,
            background,
        }
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// The last area cleared; the camera maps it onto the whole surface.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn background(&self) -> Vec4 {
        self.background
    }
}

impl Surface for DrawList {
    fn clear(&mut self, area: Rect) {
        self.instances.clear();
        self.area = area;
    }

    fn fill_rect(&mut self, rect: Rect, color: Vec4) {
        self.instances.push(InstanceRaw::from_rect(rect, color));
    }
}
