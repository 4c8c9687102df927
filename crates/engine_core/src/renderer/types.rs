// crates/engine_core/src/renderer/types.rs
use engine_shared::Rect;
use glam::{Mat4, Vec3, Vec4};

/// Per-rectangle instance data: a unit quad's model matrix plus its color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    /// Scales the unit quad to `rect.size` and moves its corner to `rect.pos`.
    pub fn from_rect(rect: Rect, color: Vec4) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::new(rect.size.x, rect.size.y, 1.0),
            glam::Quat::IDENTITY,
            Vec3::new(rect.pos.x, rect.pos.y, 0.0),
        );
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute { offset: 0, shader_location: 0, format: wgpu::VertexFormat::Float32x4 },
                wgpu::VertexAttribute { offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress, shader_location: 1, format: wgpu::VertexFormat::Float32x4 },
                wgpu::VertexAttribute { offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress, shader_location: 2, format: wgpu::VertexFormat::Float32x4 },
                wgpu::VertexAttribute { offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress, shader_location: 3, format: wgpu::VertexFormat::Float32x4 },
                wgpu::VertexAttribute { offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress, shader_location: 4, format: wgpu::VertexFormat::Float32x4 },
            ],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Surface coordinates: origin top-left, y down, one unit per logical pixel.
    pub fn for_area(area: Rect) -> Self {
        let projection = Mat4::orthographic_rh(
            area.pos.x,
            area.pos.x + area.size.x,
            area.pos.y + area.size.y,
            area.pos.y,
            -1.0,
            1.0,
        );
        Self {
            view_proj: projection.to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}
