// crates/engine_core/src/renderer/mod.rs
pub mod context;
pub mod draw_list;
pub mod sprite_pass;
pub mod types;

use std::sync::Arc;

use engine_shared::Rect;
use glam::Vec4;
use winit::window::Window;

use self::context::GraphicsContext;
use self::draw_list::DrawList;
use self::sprite_pass::SpritePass;
use crate::error::Result;
use crate::gui::GuiFrame;
use crate::surface::Surface;

pub struct Renderer {
    ctx: GraphicsContext,
    sprite_pass: SpritePass,
    draw_list: DrawList,
    pub gui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, area: Rect, background: Vec4) -> Result<Self> {
        let ctx = GraphicsContext::new(window).await?;
        let sprite_pass = SpritePass::new(&ctx);
        let gui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Ok(Self {
            ctx,
            sprite_pass,
            draw_list: DrawList::new(area, background),
            gui_renderer,
        })
    }

    /// The surface the frame loop draws into for the next `render`.
    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        &mut self.draw_list
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Game first, GUI overlay second, one submission.
    pub fn render(
        &mut self,
        gui: Option<&GuiFrame>,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.ctx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        // 1. Draw Game
        self.sprite_pass
            .draw(&self.ctx, &mut encoder, &view, &self.draw_list);

        // 2. Draw GUI
        let mut user_cmd_bufs = Vec::new();
        if let Some(gui) = gui {
            for (id, image_delta) in &gui.textures.set {
                self.gui_renderer
                    .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
            }

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.ctx.config.width, self.ctx.config.height],
                pixels_per_point: gui.pixels_per_point,
            };

            user_cmd_bufs = self.gui_renderer.update_buffers(
                &self.ctx.device,
                &self.ctx.queue,
                &mut encoder,
                &gui.primitives,
                &screen_descriptor,
            );

            {
                let mut gui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Gui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep the sprite pass result
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
                self.gui_renderer
                    .render(&mut gui_pass, &gui.primitives, &screen_descriptor);
            }

            for id in &gui.textures.free {
                self.gui_renderer.free_texture(id);
            }
        }

        // egui paint callbacks (if any) record into their own buffers, which go first.
        self.ctx
            .queue
            .submit(user_cmd_bufs.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();
        Ok(())
    }
}
