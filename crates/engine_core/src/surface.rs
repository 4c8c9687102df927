// crates/engine_core/src/surface.rs
//! The two host facilities the frame loop drives: something to draw into and
//! something that calls `tick` again on the next frame.

use engine_shared::Rect;
use glam::Vec4;

/// A 2D drawing target.
pub trait Surface {
    /// Erases everything inside `area`.
    fn clear(&mut self, area: Rect);

    /// Fills `rect` with a solid `color` (linear RGBA).
    fn fill_rect(&mut self, rect: Rect, color: Vec4);
}

/// Host frame pacing. One call requests exactly one further tick.
pub trait FrameScheduler {
    fn schedule_next_frame(&mut self);
}
