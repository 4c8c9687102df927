// crates/engine_core/src/config.rs
//! Game configuration, loaded from an optional TOML file.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```toml
//! [player]
//! max_speed = 5.0
//!
//! [keys]
//! left = "h"
//! right = "l"
//! ```

use std::fs;
use std::path::Path;

use engine_shared::Rect;
use glam::{Vec2, Vec4};
use serde::Deserialize;
use tracing::info;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Linear RGBA clear color.
    pub background: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sprite Kinematics".to_string(),
            width: 800.0,
            height: 500.0,
            background: [0.1, 0.2, 0.3, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// Velocity added per frame while a direction key drives the player.
    pub speed: f32,
    /// Per-axis velocity bound, applied symmetrically.
    pub max_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: [10.0, 476.0],
            size: [24.0, 24.0],
            color: [1.0, 0.4, 0.1, 1.0],
            speed: 1.0,
            max_speed: 3.0,
        }
    }
}

/// Key identifiers (as delivered by the host key feed) for each direction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            up: "w".to_string(),
            down: "s".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub keys: KeysConfig,
}

impl GameConfig {
    /// Reads `path` if given, otherwise returns the defaults. Always validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Loaded config from {}", path.display());
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                w.width, w.height
            )));
        }

        let p = &self.player;
        if !(p.size[0] > 0.0 && p.size[1] > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "player size must be positive, got {:?}",
                p.size
            )));
        }
        if !(p.speed > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "player.speed must be positive, got {}",
                p.speed
            )));
        }
        if !(p.max_speed > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "player.max_speed must be positive, got {}",
                p.max_speed
            )));
        }

        let keys = self.keys.identifiers();
        for (i, key) in keys.iter().enumerate() {
            if key.is_empty() {
                return Err(EngineError::InvalidConfig(
                    "key identifiers must not be empty".to_string(),
                ));
            }
            if keys[..i].contains(key) {
                return Err(EngineError::InvalidConfig(format!(
                    "key \"{key}\" is bound to more than one direction"
                )));
            }
        }
        Ok(())
    }

    /// The whole drawable area, cleared every frame.
    pub fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.window.width, self.window.height)
    }

    pub fn background(&self) -> Vec4 {
        Vec4::from_array(self.window.background)
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::from_array(self.player.start)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::from_array(self.player.size)
    }

    pub fn player_color(&self) -> Vec4 {
        Vec4::from_array(self.player.color)
    }
}

impl KeysConfig {
    /// In `LogicalKey::DIRECTIONS` order: left, right, up, down.
    pub fn identifiers(&self) -> [&str; 4] {
        [
            self.left.as_str(),
            self.right.as_str(),
            self.up.as_str(),
            self.down.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.player_start(), Vec2::new(10.0, 476.0));
        assert_eq!(config.player.max_speed, 3.0);
        assert_eq!(config.keys.identifiers(), ["a", "d", "w", "s"]);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [player]
            max_speed = 5.0

            [keys]
            left = "h"
            "#,
        )
        .expect("parse");
        assert_eq!(config.player.max_speed, 5.0);
        assert_eq!(config.player.speed, 1.0);
        assert_eq!(config.keys.left, "h");
        assert_eq!(config.keys.right, "d");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let mut config = GameConfig::default();
        config.player.speed = 0.0;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.player.max_speed = -1.0;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_duplicate_key_identifiers() {
        let mut config = GameConfig::default();
        config.keys.up = "a".to_string();
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_key_identifier() {
        let mut config = GameConfig::default();
        config.keys.down = String::new();
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let mut config = GameConfig::default();
        config.window.width = 0.0;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.window.height = -10.0;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_player_size() {
        let mut config = GameConfig::default();
        config.player.size = [24.0, 0.0];
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.player.size = [f32::NAN, 24.0];
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("[player\nspeed = 1").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, EngineError::ConfigIo { .. }));
    }
}
