// crates/engine_core/src/platform_runner.rs

use std::sync::Arc;

use tracing::{error, info, warn};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::app::App;
use crate::engine_loop::FrameLoop;
use crate::error::{EngineError, Result};
use crate::input::{InputPoller, KeyFeed};
use crate::renderer::Renderer;
use crate::surface::FrameScheduler;

/// Requests the next frame from winit; FIFO presentation paces it.
pub struct WindowScheduler {
    window: Arc<Window>,
}

impl WindowScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl FrameScheduler for WindowScheduler {
    fn schedule_next_frame(&mut self) {
        self.window.request_redraw();
    }
}

/// Owns App and runs the platform (winit) event loop.
/// This isolates OS interaction from the frame loop.
pub struct PlatformRunner {
    app: App,
}

impl PlatformRunner {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn start(mut self) -> Result<()> {
        let event_loop = EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
        let area = self.app.config.area();
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(&self.app.window_title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    area.size.x as f64,
                    area.size.y as f64,
                ))
                .build(&event_loop)
                .map_err(|e| EngineError::Window(e.to_string()))?,
        );

        // Overlay + renderer initialization (fail fast without a surface)
        self.app.overlay.attach(&window);
        let mut renderer = pollster::block_on(Renderer::new(
            window.clone(),
            area,
            self.app.config.background(),
        ))?;

        // Frame loop + key feed
        let mut feed = KeyFeed::new();
        let mut game = FrameLoop::new(&self.app.config);
        game.subscribe(&mut feed);
        let mut input_poller = InputPoller::new();
        let mut scheduler = WindowScheduler::new(window.clone());

        info!(
            title = %self.app.window_title,
            width = area.size.x,
            height = area.size.y,
            "Window ready; starting frame loop"
        );
        scheduler.schedule_next_frame();

        event_loop
            .run(move |event, elwt| {
                // Frames are driven by request_redraw, not by polling.
                elwt.set_control_flow(ControlFlow::Wait);

                // Give the overlay first shot at all window events (focus, F1).
                if let Event::WindowEvent { event: ref w_event, .. } = event {
                    self.app.overlay.on_window_event(&window, w_event);
                }

                let Event::WindowEvent { event: win_event, .. } = event else {
                    return;
                };

                match &win_event {
                    WindowEvent::CloseRequested => {
                        game.stop();
                        elwt.exit();
                    }

                    WindowEvent::KeyboardInput { event: key_event, .. } => {
                        // The pending frame still runs, then the loop stops rescheduling.
                        if key_event.state == ElementState::Pressed
                            && key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                        {
                            game.stop();
                        }

                        // Low-level input: delegate to InputPoller unless egui owns keyboard.
                        if !self.app.overlay.wants_keyboard_input() {
                            input_poller.handle_event(&win_event, &mut feed);
                        }
                    }

                    WindowEvent::Resized(size) => renderer.resize(*size),

                    WindowEvent::RedrawRequested => {
                        // --- UPDATE + RECORD ---
                        game.tick(renderer.surface_mut(), &mut scheduler);

                        // --- GUI ---
                        let gui_frame = self.app.overlay.frame(&window, &game);

                        // --- PRESENT ---
                        match renderer.render(gui_frame.as_ref()) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                                warn!("Surface lost/outdated. Reconfiguring swapchain.");
                                renderer.resize(window.inner_size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("Out of GPU memory. Exiting.");
                                game.stop();
                                elwt.exit();
                            }
                            Err(wgpu::SurfaceError::Timeout) => {
                                warn!("Surface timeout. Skipping this frame.");
                            }
                        }

                        if !game.is_running() {
                            info!(frames = game.frame(), "Frame loop stopped; closing window");
                            elwt.exit();
                        }
                    }

                    _ => {}
                }
            })
            .map_err(|e| EngineError::EventLoop(e.to_string()))
    }
}
