// crates/engine_core/src/input/router.rs
use std::collections::HashMap;

use crossbeam_channel::Receiver;
use engine_collections::List;
use engine_shared::{KeyEvent, KeyEventKind, LogicalKey};
use tracing::{debug, trace, warn};

use super::binding::KeyBinding;
use super::feed::KeyFeed;
use super::map::KeyMap;

/// Routes key feed events to the bindings registered for each logical key.
///
/// Only the four directional keys ever dispatch. Identifiers the key map
/// does not know, and bindings registered on `LogicalKey::None`, never fire.
pub struct InputRouter<C> {
    key_map: KeyMap,
    bindings: HashMap<LogicalKey, List<KeyBinding<C>>>,
    events: Option<Receiver<KeyEvent>>,
}

impl<C> InputRouter<C> {
    pub fn new(key_map: KeyMap) -> Self {
        Self {
            key_map,
            bindings: HashMap::new(),
            events: None,
        }
    }

    /// Takes the router's single subscription on `feed`. Call once.
    pub fn subscribe(&mut self, feed: &mut KeyFeed) {
        if self.events.is_some() {
            warn!("InputRouter subscribed twice; dropping the previous subscription");
        }
        self.events = Some(feed.subscribe());
    }

    pub fn is_subscribed(&self) -> bool {
        self.events.is_some()
    }

    /// Appends `binding` after any already registered for the same key.
    pub fn register(&mut self, binding: KeyBinding<C>) {
        debug!(key = ?binding.key(), "Registered key binding");
        self.bindings.entry(binding.key()).or_default().push(binding);
    }

    /// Bindings that an event for `key` would fire, in registration order.
    pub fn bindings_for(&self, key: LogicalKey) -> &[KeyBinding<C>] {
        if !key.is_directional() {
            return &[];
        }
        match self.bindings.get(&key) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    fn bindings_for_mut(&mut self, key: LogicalKey) -> &mut [KeyBinding<C>] {
        if !key.is_directional() {
            return &mut [];
        }
        match self.bindings.get_mut(&key) {
            Some(list) => list.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Fires `on_press` (key-down) or `on_release` (key-up) on every binding
    /// for the event's key. Returns how many callbacks ran.
    pub fn dispatch(&mut self, event: &KeyEvent, ctx: &mut C) -> usize {
        let key = self.key_map.resolve(&event.key);
        if !key.is_directional() {
            trace!(identifier = %event.key, "Ignoring non-directional key");
            return 0;
        }

        let bindings = self.bindings_for_mut(key);
        for binding in bindings.iter_mut() {
            match event.kind {
                KeyEventKind::Down => binding.press(ctx),
                KeyEventKind::Up => binding.release(ctx),
            }
        }
        debug!(?key, kind = ?event.kind, fired = bindings.len(), "Dispatched key event");
        bindings.len()
    }

    /// Dispatches everything the feed delivered since the last pump.
    pub fn pump(&mut self, ctx: &mut C) -> usize {
        let Some(events) = &self.events else {
            return 0;
        };
        let pending: Vec<KeyEvent> = events.try_iter().collect();
        pending.iter().map(|event| self.dispatch(event, ctx)).sum()
    }
}

impl<C> Default for InputRouter<C> {
    fn default() -> Self {
        Self::new(KeyMap::default())
    }
}
