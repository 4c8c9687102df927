// crates/engine_core/src/input/state.rs
use engine_collections::UniqueList;
use engine_shared::LogicalKey;

/// What the key bindings write and the frame loop reads once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: UniqueList<LogicalKey>,
    /// Set by every press, never cleared by a release.
    last_pressed: LogicalKey,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.held.push(key);
        self.last_pressed = key;
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held.remove(&key);
    }

    pub fn held(&self) -> &UniqueList<LogicalKey> {
        &self.held
    }

    pub fn last_pressed(&self) -> LogicalKey {
        self.last_pressed
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held.contains(&key)
    }

    /// Held and most recently pressed: the only key that accelerates.
    pub fn is_driving(&self, key: LogicalKey) -> bool {
        self.last_pressed == key && self.is_held(key)
    }

    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }
}
