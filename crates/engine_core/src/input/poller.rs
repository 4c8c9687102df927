// crates/engine_core/src/input/poller.rs

use std::collections::HashMap;

use tracing::trace;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, PhysicalKey};

use engine_shared::KeyEvent;

use crate::input::KeyFeed;

/// Low-level collector that turns winit keyboard events into key feed events.
/// This keeps raw device state out of the FrameLoop / PlatformRunner.
///
/// A release is published under the identifier its press used, keyed by the
/// physical key. Holding "a" and then pressing Shift still releases "a".
#[derive(Default)]
pub struct InputPoller {
    pressed: HashMap<PhysicalKey, String>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single winit WindowEvent, publishing any key event to `feed`.
    /// Returns true if something was published.
    pub fn handle_event(&mut self, event: &WindowEvent, feed: &mut KeyFeed) -> bool {
        let WindowEvent::KeyboardInput { event: key_event, .. } = event else {
            return false;
        };

        match self.translate(key_event.physical_key, &key_event.logical_key, key_event.state) {
            Some(event) => {
                feed.publish(event);
                true
            }
            None => false,
        }
    }

    /// The feed event for one raw key transition, if any.
    pub fn translate(
        &mut self,
        physical: PhysicalKey,
        logical: &Key,
        state: ElementState,
    ) -> Option<KeyEvent> {
        match state {
            // OS auto-repeat arrives as further presses and is forwarded as such.
            ElementState::Pressed => {
                let identifier = key_identifier(logical)?;
                self.pressed.insert(physical, identifier.clone());
                Some(KeyEvent::down(identifier))
            }
            ElementState::Released => {
                let identifier = match self.pressed.remove(&physical) {
                    Some(identifier) => identifier,
                    None => key_identifier(logical)?,
                };
                if identifier != key_identifier(logical).unwrap_or_default() {
                    trace!(%identifier, "Releasing under the identifier used on press");
                }
                Some(KeyEvent::up(identifier))
            }
        }
    }
}

/// The identifier string a key is published under: the produced text for
/// character keys (case preserved), the key name for named keys.
pub fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.as_str().to_owned()),
        Key::Named(named) => Some(format!("{named:?}")),
        _ => None,
    }
}
