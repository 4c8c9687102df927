// crates/engine_shared/src/components.rs
use glam::{Vec2, Vec4};

/// Velocity units removed per `decay()` call, per axis.
pub const DECAY_STEP: f32 = 1.0;

/// Axis-aligned rectangle in surface coordinates (top-left origin, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { pos: Vec2::new(x, y), size: Vec2::new(w, h) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CTransform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl CTransform {
    pub fn rect(&self) -> Rect {
        Rect { pos: self.pos, size: self.size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CSprite {
    pub color: Vec4,
}

impl Default for CSprite {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}

/// A velocity vector with inclusive per-axis bounds.
///
/// `min <= value <= max` holds on both axes after construction and after
/// every `accelerate` / `decay`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CVelocity {
    value: Vec2,
    max: Vec2,
    min: Vec2,
}

impl CVelocity {
    /// Zero velocity with symmetric bounds `[-max, max]`.
    pub fn new(max: Vec2) -> Self {
        Self::with_bounds(max, -max)
    }

    /// Zero velocity (clamped into the bounds) with explicit bounds.
    /// A `min` above `max` on an axis collapses that axis to `max`.
    pub fn with_bounds(max: Vec2, min: Vec2) -> Self {
        let min = min.min(max);
        Self {
            value: Vec2::ZERO.clamp(min, max),
            max,
            min,
        }
    }

    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn x(&self) -> f32 {
        self.value.x
    }

    pub fn y(&self) -> f32 {
        self.value.y
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Adds `delta` per axis, clamping the result into that axis' bounds.
    /// A sum of exactly zero stops the axis.
    pub fn accelerate(&mut self, delta: Vec2) {
        self.value.x = accelerate_axis(self.value.x, delta.x, self.min.x, self.max.x);
        self.value.y = accelerate_axis(self.value.y, delta.y, self.min.y, self.max.y);
    }

    /// Moves each axis one `DECAY_STEP` toward zero without crossing it.
    /// Bounds that exclude zero stop the axis at the nearer bound instead.
    pub fn decay(&mut self) {
        self.value.x = decay_axis(self.value.x).clamp(self.min.x, self.max.x);
        self.value.y = decay_axis(self.value.y).clamp(self.min.y, self.max.y);
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == Vec2::ZERO
    }
}

fn accelerate_axis(current: f32, delta: f32, min: f32, max: f32) -> f32 {
    let candidate = current + delta;
    if candidate > 0.0 {
        candidate.min(max)
    } else if candidate < 0.0 {
        candidate.max(min)
    } else {
        // Exact cancel (or NaN): stop the axis. Zero is inside any bounds
        // built from `new`; `max(min)` keeps asymmetric ones honest.
        0.0_f32.clamp(min, max)
    }
}

fn decay_axis(v: f32) -> f32 {
    if v > 0.0 {
        (v - DECAY_STEP).max(0.0)
    } else if v < 0.0 {
        (v + DECAY_STEP).min(0.0)
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_bounds(v: &CVelocity) -> bool {
        v.x() >= v.min().x && v.x() <= v.max().x && v.y() >= v.min().y && v.y() <= v.max().y
    }

    #[test]
    fn default_bounds_are_symmetric() {
        let v = CVelocity::new(Vec2::splat(3.0));
        assert_eq!(v.min(), Vec2::splat(-3.0));
        assert_eq!(v.value(), Vec2::ZERO);
    }

    #[test]
    fn accelerate_clamps_positive_and_negative() {
        let mut v = CVelocity::new(Vec2::splat(3.0));
        for _ in 0..10 {
            v.accelerate(Vec2::new(1.0, -1.0));
        }
        assert_eq!(v.value(), Vec2::new(3.0, -3.0));
    }

    #[test]
    fn clamp_invariant_holds_over_mixed_sequences() {
        let mut v = CVelocity::with_bounds(Vec2::new(3.0, 5.0), Vec2::new(-2.0, -1.0));
        let deltas = [
            Vec2::new(1.0, 1.0),
            Vec2::new(7.5, -0.5),
            Vec2::new(-20.0, -4.0),
            Vec2::new(0.25, 9.0),
            Vec2::new(-0.25, -9.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(-1.0, 0.0),
        ];
        for _ in 0..5 {
            for d in deltas {
                v.accelerate(d);
                assert!(within_bounds(&v), "out of bounds: {:?}", v);
            }
        }
    }

    #[test]
    fn exact_cancel_stops_the_axis() {
        let mut v = CVelocity::new(Vec2::splat(3.0));
        v.accelerate(Vec2::new(-1.0, 2.0));
        v.accelerate(Vec2::new(1.0, -2.0));
        assert_eq!(v.value(), Vec2::ZERO);
    }

    #[test]
    fn decay_walks_to_rest_one_unit_at_a_time() {
        let mut v = CVelocity::new(Vec2::splat(3.0));
        v.accelerate(Vec2::new(2.0, -1.0));

        v.decay();
        assert_eq!(v.value(), Vec2::new(1.0, 0.0));
        v.decay();
        assert_eq!(v.value(), Vec2::ZERO);
        v.decay();
        assert_eq!(v.value(), Vec2::ZERO);
        assert!(v.is_at_rest());
    }

    #[test]
    fn decay_never_changes_sign() {
        let mut v = CVelocity::new(Vec2::splat(10.0));
        v.accelerate(Vec2::new(2.5, -7.25));
        let mut steps = 0;
        while !v.is_at_rest() {
            let before = v.value();
            v.decay();
            assert!(v.x() * before.x >= 0.0);
            assert!(v.y() * before.y >= 0.0);
            steps += 1;
            assert!(steps <= 8, "decay did not converge");
        }
        assert_eq!(steps, 8);
    }

    #[test]
    fn inverted_bounds_collapse_to_max() {
        let v = CVelocity::with_bounds(Vec2::new(1.0, 1.0), Vec2::new(4.0, -1.0));
        assert_eq!(v.min(), Vec2::new(1.0, -1.0));
        assert!(within_bounds(&v));
    }

    #[test]
    fn decay_stops_at_a_bound_that_excludes_zero() {
        let mut v = CVelocity::with_bounds(Vec2::new(3.0, 3.0), Vec2::new(1.0, -3.0));
        assert_eq!(v.value(), Vec2::new(1.0, 0.0));

        v.accelerate(Vec2::new(2.0, 0.0));
        assert_eq!(v.x(), 3.0);
        for _ in 0..4 {
            v.decay();
            assert!(within_bounds(&v), "out of bounds: {:?}", v);
        }
        assert_eq!(v.value(), Vec2::new(1.0, 0.0));
    }
}
