// crates/engine_shared/src/lib.rs
//! Plain data shared by the engine crates: geometry, sprite components and
//! input identifiers. Nothing in here knows about windows or GPUs.

pub mod components;
pub mod input_types;

pub use components::{CSprite, CTransform, CVelocity, Rect, DECAY_STEP};
pub use input_types::{KeyEvent, KeyEventKind, LogicalKey};
