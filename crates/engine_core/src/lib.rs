// crates/engine_core/src/lib.rs

// Kinematics core
pub mod engine_loop;
pub mod input;
pub mod sprite;
pub mod surface;

// Ambient
pub mod config;
pub mod error;

// Host: window, GPU, debug UI
pub mod app;
pub mod gui;
pub mod inspector;
pub mod platform_runner;
pub mod renderer;

// Re-export the entry points so the binary crate can find them easily
pub use app::App;
pub use config::GameConfig;
pub use engine_loop::FrameLoop;
pub use error::{EngineError, Result};
pub use sprite::Sprite;
pub use surface::{FrameScheduler, Surface};
