//! GPU vertex format.

/// A vertex with homogeneous position and normal, matching the shader's
/// `vPosition`/`vNormal` attributes.
///
/// `#[repr(C)]` keeps the layout GPU-compatible for buffer uploads.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position [x, y, z, w]; w is 1 for points.
    pub position: [f32; 4],
    /// Normal [nx, ny, nz, 0]; the homogeneous component stays 0 so view
    /// transforms do not translate it.
    pub normal: [f32; 4],
}

impl Vertex {
    /// Vertex buffer layout: position at shader location 0, normal at
    /// location 1, both Float32x4.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
