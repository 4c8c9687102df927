// crates/engine_shared/src/input_types.rs
//! Logical keys and raw key events as delivered by the host's key feed.

use glam::Vec2;

/// The recognized directional inputs plus a sentinel for "nothing pressed yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalKey {
    Left,
    Right,
    Up,
    Down,
    #[default]
    None,
}

impl LogicalKey {
    /// Evaluation order used by the frame loop.
    pub const DIRECTIONS: [LogicalKey; 4] = [
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Up,
        LogicalKey::Down,
    ];

    pub fn is_directional(self) -> bool {
        !matches!(self, LogicalKey::None)
    }

    /// Unit step along this direction. Y grows downward, like a canvas.
    pub fn unit(self) -> Vec2 {
        match self {
            LogicalKey::Left => Vec2::new(-1.0, 0.0),
            LogicalKey::Right => Vec2::new(1.0, 0.0),
            LogicalKey::Up => Vec2::new(0.0, -1.0),
            LogicalKey::Down => Vec2::new(0.0, 1.0),
            LogicalKey::None => Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// One key-down or key-up carrying the host's key identifier string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key: String,
}

impl KeyEvent {
    pub fn down(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Down, key: key.into() }
    }

    pub fn up(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Up, key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_the_only_non_directional_key() {
        assert!(LogicalKey::DIRECTIONS.iter().all(|k| k.is_directional()));
        assert!(!LogicalKey::None.is_directional());
        assert_eq!(LogicalKey::default(), LogicalKey::None);
    }

    #[test]
    fn key_event_constructors_set_kind() {
        assert_eq!(KeyEvent::down("a").kind, KeyEventKind::Down);
        assert_eq!(KeyEvent::up("a").kind, KeyEventKind::Up);
        assert_eq!(KeyEvent::up("a").key, "a");
    }

    #[test]
    fn up_points_toward_smaller_y() {
        assert_eq!(LogicalKey::Up.unit(), Vec2::new(0.0, -1.0));
        assert_eq!(LogicalKey::Down.unit(), Vec2::new(0.0, 1.0));
        assert_eq!(LogicalKey::None.unit(), Vec2::ZERO);
    }
}
