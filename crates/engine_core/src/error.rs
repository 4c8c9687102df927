// crates/engine_core/src/error.rs
//! Fatal start-up errors. The frame loop itself never fails; everything in
//! here is surfaced to the binary before the first frame.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(String),

    #[error("Failed to create window: {0}")]
    Window(String),

    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("No graphics adapter compatible with the surface")]
    AdapterUnavailable,

    #[error("Failed to create device: {0}")]
    DeviceCreation(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ConfigParse(err.to_string())
    }
}
