// crates/engine_core/src/input/feed.rs
use crossbeam_channel::{unbounded, Receiver, Sender};
use engine_shared::KeyEvent;

/// The host's key-down/key-up source. Subscribers each get their own
/// unbounded FIFO, so key-downs and key-ups stay in arrival order.
#[derive(Default)]
pub struct KeyFeed {
    subscribers: Vec<Sender<KeyEvent>>,
}

impl KeyFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<KeyEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Delivers `event` to every live subscriber; dropped receivers are pruned.
    pub fn publish(&mut self, event: KeyEvent) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn key_down(&mut self, key: impl Into<String>) {
        self.publish(KeyEvent::down(key));
    }

    pub fn key_up(&mut self, key: impl Into<String>) {
        self.publish(KeyEvent::up(key));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_publish_order() {
        let mut feed = KeyFeed::new();
        let rx = feed.subscribe();
        feed.key_down("a");
        feed.key_up("a");
        feed.key_down("d");

        let got: Vec<KeyEvent> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![KeyEvent::down("a"), KeyEvent::up("a"), KeyEvent::down("d")]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut feed = KeyFeed::new();
        let kept = feed.subscribe();
        drop(feed.subscribe());
        assert_eq!(feed.subscriber_count(), 2);

        feed.key_down("w");
        assert_eq!(feed.subscriber_count(), 1);
        assert_eq!(kept.try_recv().ok(), Some(KeyEvent::down("w")));
    }
}
