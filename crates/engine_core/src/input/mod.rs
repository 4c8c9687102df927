// crates/engine_core/src/input/mod.rs
pub mod binding;
pub mod config;
pub mod feed;
pub mod map;
pub mod poller;
pub mod router;
pub mod state;

// Re-export core types to keep the API at `crate::input::InputRouter`
pub use binding::{KeyBinding, KeyCallback};
pub use config::InputDefaults;
pub use feed::KeyFeed;
pub use map::KeyMap;
pub use poller::InputPoller;
pub use router::InputRouter;
pub use state::InputState;
