// crates/engine_core/src/gui.rs
use egui::{ClippedPrimitive, Context, TexturesDelta};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::engine_loop::FrameLoop;
use crate::inspector;

/// Tessellated overlay output for one frame, ready for the renderer.
pub struct GuiFrame {
    pub primitives: Vec<ClippedPrimitive>,
    pub textures: TexturesDelta,
    pub pixels_per_point: f32,
}

/// The egui overlay that hosts the kinematics inspector.
///
/// F1 shows or hides the inspector window. While egui has keyboard focus
/// the host should keep key events away from the frame loop.
pub struct InspectorOverlay {
    ctx: Context,
    // Needs the window, so it only exists after `attach`.
    state: Option<egui_winit::State>,
    open: bool,
}

impl InspectorOverlay {
    pub fn new(open: bool) -> Self {
        Self {
            ctx: Context::default(),
            state: None,
            open,
        }
    }

    pub fn attach(&mut self, window: &Window) {
        self.state = Some(egui_winit::State::new(
            self.ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        ));
    }

    /// Feeds `event` to egui and handles the F1 toggle.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event: key_event, .. } = event {
            if toggles_inspector(key_event.physical_key, key_event.state, key_event.repeat) {
                self.toggle();
            }
        }
        if let Some(state) = &mut self.state {
            let _ = state.on_window_event(window, event);
        }
    }

    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Builds the overlay for the frame `game` just finished.
    /// Nothing to draw before `attach`.
    pub fn frame(&mut self, window: &Window, game: &FrameLoop) -> Option<GuiFrame> {
        let state = self.state.as_mut()?;

        self.ctx.begin_frame(state.take_egui_input(window));
        if self.open {
            inspector::show(&self.ctx, game, &mut self.open);
        }
        let output = self.ctx.end_frame();

        state.handle_platform_output(window, output.platform_output);

        Some(GuiFrame {
            primitives: self.ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        })
    }
}

impl Default for InspectorOverlay {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Edge-triggered: held F1 auto-repeat does not flicker the window.
fn toggles_inspector(key: PhysicalKey, state: ElementState, repeat: bool) -> bool {
    key == PhysicalKey::Code(KeyCode::F1) && state == ElementState::Pressed && !repeat
}
