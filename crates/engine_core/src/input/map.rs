// crates/engine_core/src/input/map.rs
use std::collections::HashMap;

use engine_shared::LogicalKey;

use crate::config::KeysConfig;

/// Host key identifier -> logical key. Unmapped identifiers resolve to
/// `LogicalKey::None`.
#[derive(Debug, Clone)]
pub struct KeyMap {
    key_bindings: HashMap<String, LogicalKey>,
}

impl KeyMap {
    pub fn empty() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    pub fn from_config(keys: &KeysConfig) -> Self {
        let mut map = Self::empty();
        for (id, key) in keys.identifiers().into_iter().zip(LogicalKey::DIRECTIONS) {
            map.bind(id, key);
        }
        map
    }

    pub fn bind(&mut self, identifier: impl Into<String>, key: LogicalKey) {
        self.key_bindings.insert(identifier.into(), key);
    }

    pub fn resolve(&self, identifier: &str) -> LogicalKey {
        self.key_bindings
            .get(identifier)
            .copied()
            .unwrap_or(LogicalKey::None)
    }
}

/// WASD.
impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeysConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_is_wasd() {
        let map = KeyMap::default();
        assert_eq!(map.resolve("a"), LogicalKey::Left);
        assert_eq!(map.resolve("d"), LogicalKey::Right);
        assert_eq!(map.resolve("w"), LogicalKey::Up);
        assert_eq!(map.resolve("s"), LogicalKey::Down);
    }

    #[test]
    fn unknown_empty_and_shifted_identifiers_resolve_to_none() {
        let map = KeyMap::default();
        assert_eq!(map.resolve(""), LogicalKey::None);
        assert_eq!(map.resolve("A"), LogicalKey::None);
        assert_eq!(map.resolve("ArrowLeft"), LogicalKey::None);
    }

    #[test]
    fn config_remaps_directions() {
        let keys = KeysConfig {
            left: "h".into(),
            right: "l".into(),
            up: "k".into(),
            down: "j".into(),
        };
        let map = KeyMap::from_config(&keys);
        assert_eq!(map.resolve("h"), LogicalKey::Left);
        assert_eq!(map.resolve("j"), LogicalKey::Down);
        assert_eq!(map.resolve("a"), LogicalKey::None);
    }
}
