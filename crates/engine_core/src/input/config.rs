// crates/engine_core/src/input/config.rs

use engine_shared::LogicalKey;

use crate::input::{InputRouter, InputState, KeyBinding};

/// Default bindings for the player.
pub struct InputDefaults;

impl InputDefaults {
    /// One binding per direction: a press marks the key held and most recent,
    /// a release only un-holds it.
    pub fn setup(router: &mut InputRouter<InputState>) {
        for key in LogicalKey::DIRECTIONS {
            router.register(KeyBinding::new(
                key,
                move |state: &mut InputState| state.press(key),
                move |state: &mut InputState| state.release(key),
            ));
        }
    }
}
