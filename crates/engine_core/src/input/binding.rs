// crates/engine_core/src/input/binding.rs
use std::fmt;

use engine_shared::LogicalKey;

pub type KeyCallback<C> = Box<dyn FnMut(&mut C)>;

/// One logical key with a press and a release callback. The callbacks get
/// the router's context (`C`) mutably; they carry no other state of their own.
pub struct KeyBinding<C> {
    key: LogicalKey,
    on_press: KeyCallback<C>,
    on_release: KeyCallback<C>,
}

impl<C> KeyBinding<C> {
    pub fn new(
        key: LogicalKey,
        on_press: impl FnMut(&mut C) + 'static,
        on_release: impl FnMut(&mut C) + 'static,
    ) -> Self {
        Self {
            key,
            on_press: Box::new(on_press),
            on_release: Box::new(on_release),
        }
    }

    pub fn key(&self) -> LogicalKey {
        self.key
    }

    pub fn press(&mut self, ctx: &mut C) {
        (self.on_press)(ctx);
    }

    pub fn release(&mut self, ctx: &mut C) {
        (self.on_release)(ctx);
    }
}

impl<C> fmt::Debug for KeyBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBinding")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
