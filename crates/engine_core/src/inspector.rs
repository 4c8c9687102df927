// crates/engine_core/src/inspector.rs
use egui::{Color32, Context};
use engine_shared::LogicalKey;

use crate::engine_loop::FrameLoop;

pub fn show(ctx: &Context, game: &FrameLoop, open: &mut bool) {
    egui::Window::new("Kinematics Inspector")
        .open(open)
        .show(ctx, |ui| {
            ui.heading("Frame Loop");
            ui.label(format!("Frame: {}", game.frame()));
            let (color, text) = if game.is_running() {
                (Color32::GREEN, "Running")
            } else {
                (Color32::RED, "Stopped")
            };
            ui.colored_label(color, text);

            ui.separator();

            // 1. INPUT STATE
            let input = game.input();
            ui.label(format!("Last pressed: {:?}", input.last_pressed()));

            ui.collapsing("Held Keys", |ui| {
                if input.is_idle() {
                    ui.colored_label(Color32::from_gray(100), "(none: decaying)");
                }
                for &key in input.held() {
                    // Only the most recent held key accelerates.
                    if input.is_driving(key) {
                        ui.colored_label(Color32::GREEN, format!("  • {:?} (driving)", key));
                    } else {
                        ui.colored_label(Color32::GRAY, format!("  • {:?} (coasting)", key));
                    }
                }
            });

            ui.separator();

            // 2. PLAYER KINEMATICS
            let player = game.player();
            let velocity = &player.velocity;
            ui.label(format!("Position: ({:.1}, {:.1})", player.pos().x, player.pos().y));
            ui.label(format!("Velocity: ({:.1}, {:.1})", velocity.x(), velocity.y()));
            ui.label(format!(
                "Bounds: x [{:.1}, {:.1}]  y [{:.1}, {:.1}]",
                velocity.min().x,
                velocity.max().x,
                velocity.min().y,
                velocity.max().y,
            ));

            ui.collapsing("Directions", |ui| {
                for key in LogicalKey::DIRECTIONS {
                    let held = input.is_held(key);
                    let color = if held { Color32::GREEN } else { Color32::from_gray(100) };
                    ui.colored_label(color, format!("{:?}: {}", key, if held { "held" } else { "up" }));
                }
            });

            ui.label(format!("Entities: {}", game.entities().len()));
        });
}
