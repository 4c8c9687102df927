// crates/engine_core/src/engine_loop.rs

use engine_collections::List;
use engine_shared::{KeyEvent, LogicalKey, Rect};
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::input::{InputDefaults, InputRouter, InputState, KeyFeed, KeyMap};
use crate::sprite::Sprite;
use crate::surface::{FrameScheduler, Surface};

/// One discrete physics step per rendered frame: no timers, no delta time.
///
/// The loop owns the input state the key bindings write, the sprites it
/// draws, and which of those sprites is the player.
pub struct FrameLoop {
    router: InputRouter<InputState>,
    input: InputState,
    entities: List<Sprite>,
    player: usize,
    area: Rect,
    speed: f32,
    running: bool,
    frame: u64,
}

impl FrameLoop {
    /// Spawns the player from `config` and registers the default bindings.
    /// `config` is expected to be validated already.
    pub fn new(config: &GameConfig) -> Self {
        let mut router = InputRouter::new(KeyMap::from_config(&config.keys));
        InputDefaults::setup(&mut router);

        let mut entities = List::new();
        let player = entities.push(Sprite::new(
            config.player_start(),
            config.player_size(),
            config.player_color(),
            config.player.max_speed,
        ));

        Self {
            router,
            input: InputState::new(),
            entities,
            player,
            area: config.area(),
            speed: config.player.speed,
            running: true,
            frame: 0,
        }
    }

    /// Hooks the router up to the host's key feed. Call once.
    pub fn subscribe(&mut self, feed: &mut KeyFeed) {
        self.router.subscribe(feed);
    }

    /// Adds a non-player sprite; it is drawn and advanced every frame.
    pub fn spawn(&mut self, sprite: Sprite) -> usize {
        self.entities.push(sprite)
    }

    /// Delivers a key event immediately, bypassing the feed.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> usize {
        self.router.dispatch(event, &mut self.input)
    }

    /// Runs one frame and, unless stopped, asks `scheduler` for the next one.
    pub fn tick(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn FrameScheduler) {
        // Events that arrived since the previous tick apply before this frame.
        self.router.pump(&mut self.input);

        surface.clear(self.area);
        for sprite in self.entities.iter_mut() {
            sprite.render(surface);
        }

        self.steer_player();
        self.frame += 1;

        trace!(
            frame = self.frame,
            pos = ?self.player().pos(),
            velocity = ?self.player().velocity.value(),
            "Frame done"
        );

        if self.running {
            scheduler.schedule_next_frame();
        } else {
            debug!(frame = self.frame, "Loop stopped; not rescheduling");
        }
    }

    /// Accelerate along the most recently pressed held key, or decay once
    /// when nothing is held. Older held keys do neither.
    fn steer_player(&mut self) {
        let input = &self.input;
        let speed = self.speed;
        let Some(player) = self.entities.get_mut(self.player) else {
            return;
        };

        for key in LogicalKey::DIRECTIONS {
            if input.is_driving(key) {
                player.velocity.accelerate(key.unit() * speed);
            }
        }

        if input.is_idle() {
            player.velocity.decay();
        }
    }

    /// The current tick still completes; no further frame is requested.
    pub fn stop(&mut self) {
        if self.running {
            info!(frame = self.frame, "Frame loop stop requested");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn entities(&self) -> &[Sprite] {
        self.entities.as_slice()
    }

    pub fn player(&self) -> &Sprite {
        &self.entities.as_slice()[self.player]
    }

    pub fn player_mut(&mut self) -> &mut Sprite {
        &mut self.entities.as_mut_slice()[self.player]
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec4};

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        fills: Vec<Rect>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _area: Rect) {
            self.clears += 1;
            self.fills.clear();
        }

        fn fill_rect(&mut self, rect: Rect, _color: Vec4) {
            self.fills.push(rect);
        }
    }

    #[derive(Default)]
    struct CountingScheduler {
        requests: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn schedule_next_frame(&mut self) {
            self.requests += 1;
        }
    }

    struct Harness {
        game: FrameLoop,
        feed: KeyFeed,
        surface: RecordingSurface,
        scheduler: CountingScheduler,
    }

    impl Harness {
        fn new() -> Self {
            let mut feed = KeyFeed::new();
            let mut game = FrameLoop::new(&GameConfig::default());
            game.subscribe(&mut feed);
            Self {
                game,
                feed,
                surface: RecordingSurface::default(),
                scheduler: CountingScheduler::default(),
            }
        }

        fn frames(&mut self, n: usize) {
            for _ in 0..n {
                self.game.tick(&mut self.surface, &mut self.scheduler);
            }
        }

        fn velocity(&self) -> Vec2 {
            self.game.player().velocity.value()
        }

        fn pos(&self) -> Vec2 {
            self.game.player().pos()
        }
    }

    #[test]
    fn first_left_frame_accelerates_after_drawing() {
        let mut h = Harness::new();
        h.feed.key_down("a");
        h.frames(1);

        assert_eq!(h.velocity(), Vec2::new(-1.0, 0.0));
        // Render advanced with the frame-start velocity of zero.
        assert_eq!(h.pos(), Vec2::new(10.0, 476.0));
        assert_eq!(h.surface.fills, vec![Rect::new(10.0, 476.0, 24.0, 24.0)]);

        h.frames(1);
        assert_eq!(h.surface.fills, vec![Rect::new(10.0, 476.0, 24.0, 24.0)]);
        assert_eq!(h.pos(), Vec2::new(9.0, 476.0));
    }

    #[test]
    fn holding_left_clamps_at_max_speed() {
        let mut h = Harness::new();
        h.feed.key_down("a");
        h.frames(1);

        let mut seen = Vec::new();
        for _ in 0..4 {
            h.frames(1);
            seen.push(h.velocity().x);
        }
        assert_eq!(seen, vec![-2.0, -3.0, -3.0, -3.0]);
        assert_eq!(h.velocity().y, 0.0);
    }

    #[test]
    fn later_key_wins_while_both_are_held() {
        let mut h = Harness::new();
        h.feed.key_down("a");
        h.frames(2);
        assert_eq!(h.velocity(), Vec2::new(-2.0, 0.0));

        h.feed.key_down("d");
        h.frames(1);
        assert!(h.game.input().is_held(LogicalKey::Left));
        assert_eq!(h.velocity(), Vec2::new(-1.0, 0.0));

        h.frames(1);
        assert_eq!(h.velocity(), Vec2::new(0.0, 0.0));
        h.frames(1);
        assert_eq!(h.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn other_held_axis_neither_accelerates_nor_decays() {
        let mut h = Harness::new();
        h.feed.key_down("s");
        h.frames(2);
        h.feed.key_down("d");
        h.frames(3);

        // Down is still held but not the latest, so y keeps its speed.
        assert_eq!(h.velocity(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn releasing_the_only_key_decays_from_next_frame() {
        let mut h = Harness::new();
        h.feed.key_down("w");
        h.frames(3);
        assert_eq!(h.velocity(), Vec2::new(0.0, -3.0));

        h.feed.key_up("w");
        h.frames(1);
        assert!(h.game.input().is_idle());
        assert_eq!(h.velocity(), Vec2::new(0.0, -2.0));
        h.frames(5);
        assert_eq!(h.velocity(), Vec2::ZERO);
    }

    #[test]
    fn releasing_the_latest_of_two_keys_coasts() {
        let mut h = Harness::new();
        h.feed.key_down("a");
        h.frames(1);
        h.feed.key_down("w");
        h.frames(2);
        h.feed.key_up("w");
        h.frames(4);

        // Left is still held but was not pressed last: no acceleration, no decay.
        assert_eq!(h.velocity(), Vec2::new(-1.0, -2.0));
        assert_eq!(h.game.input().last_pressed(), LogicalKey::Up);
    }

    #[test]
    fn unrecognized_keys_change_nothing() {
        let mut h = Harness::new();
        h.feed.key_down("q");
        h.feed.key_down("A");
        h.feed.key_down("ArrowLeft");
        h.frames(2);
        assert!(h.game.input().is_idle());
        assert_eq!(h.game.input().last_pressed(), LogicalKey::None);
        assert_eq!(h.velocity(), Vec2::ZERO);
    }

    #[test]
    fn every_tick_clears_renders_and_reschedules() {
        let mut h = Harness::new();
        h.game.spawn(Sprite::new(Vec2::new(100.0, 100.0), Vec2::splat(8.0), Vec4::ONE, 1.0));
        h.frames(3);

        assert_eq!(h.surface.clears, 3);
        assert_eq!(h.surface.fills.len(), 2);
        assert_eq!(h.scheduler.requests, 3);
        assert_eq!(h.game.frame(), 3);
    }

    #[test]
    fn stopped_loop_finishes_the_tick_without_rescheduling() {
        let mut h = Harness::new();
        h.frames(1);
        h.game.stop();
        h.frames(1);

        assert!(!h.game.is_running());
        assert_eq!(h.game.frame(), 2);
        assert_eq!(h.scheduler.requests, 1);
    }

    #[test]
    fn direct_events_bypass_the_feed() {
        let mut h = Harness::new();
        assert_eq!(h.game.handle_key_event(&KeyEvent::down("d")), 1);
        h.frames(1);
        assert_eq!(h.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn remapped_keys_drive_the_player() {
        let mut config = GameConfig::default();
        config.keys.left = "h".to_string();
        let mut game = FrameLoop::new(&config);
        let mut surface = RecordingSurface::default();
        let mut scheduler = CountingScheduler::default();

        game.handle_key_event(&KeyEvent::down("a"));
        game.tick(&mut surface, &mut scheduler);
        assert_eq!(game.player().velocity.value(), Vec2::ZERO);

        game.handle_key_event(&KeyEvent::down("h"));
        game.tick(&mut surface, &mut scheduler);
        assert_eq!(game.player().velocity.value(), Vec2::new(-1.0, 0.0));
    }
}
