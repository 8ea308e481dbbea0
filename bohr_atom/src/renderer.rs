//! Rendering system for the Bohr atom
//!
//! Every shape in the scene is a circle, so the renderer is one instanced
//! quad pipeline. [`CircleBatch`] collects circles through the [`Canvas`]
//! trait and [`Renderer`] uploads and draws them.

use common::{CameraUniform, GraphicsContext, ScreenCamera};
use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::scene::{Canvas, CircleStyle};

/// Instance data for GPU rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    /// Zero for a filled disc
    pub ring_width: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32,
        3 => Float32,
        4 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad vertex for instanced rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

// Unit quad vertices
const QUAD_VERTICES: &[QuadVertex] = &[
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0] },
];

/// Background, matching a light gray canvas
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.86,
    g: 0.86,
    b: 0.86,
    a: 1.0,
};

/// Circles collected for one frame, in draw order
#[derive(Debug, Default)]
pub struct CircleBatch {
    pub instances: Vec<CircleInstance>,
}

impl CircleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl Canvas for CircleBatch {
    fn circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        if let Some(color) = style.fill {
            self.instances.push(CircleInstance {
                center: center.to_array(),
                radius,
                ring_width: 0.0,
                color,
            });
        }
        // Stroke goes on top of the fill
        if let Some(stroke) = style.stroke {
            self.instances.push(CircleInstance {
                center: center.to_array(),
                radius,
                ring_width: stroke.width.max(0.5),
                color: stroke.color,
            });
        }
    }
}

pub struct Renderer {
    circle_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    circle_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    max_circles: usize,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext, max_circles: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Circle Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/circle.wgsl").into()),
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let circle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Circle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_circle",
                buffers: &[QuadVertex::layout(), CircleInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_circle",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let circle_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Circle Buffer"),
            size: (std::mem::size_of::<CircleInstance>() * max_circles) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        log::debug!("Circle renderer ready ({} instances max)", max_circles);

        Self {
            circle_pipeline,
            quad_buffer,
            circle_buffer,
            camera_buffer,
            camera_bind_group,
            max_circles,
        }
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &ScreenCamera) {
        let uniform = CameraUniform::from_screen(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Upload the batch, returning how many circles will be drawn
    pub fn update_circles(&self, queue: &wgpu::Queue, batch: &CircleBatch) -> u32 {
        let count = batch.instances.len().min(self.max_circles);
        if count < batch.instances.len() {
            log::warn!(
                "Dropping {} circles over the {} instance limit",
                batch.instances.len() - count,
                self.max_circles
            );
        }
        if count > 0 {
            queue.write_buffer(
                &self.circle_buffer,
                0,
                bytemuck::cast_slice(&batch.instances[..count]),
            );
        }
        count as u32
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        num_circles: u32,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if num_circles > 0 {
            render_pass.set_pipeline(&self.circle_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.circle_buffer.slice(..));
            render_pass.draw(0..6, 0..num_circles);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
    }

    #[test]
    fn test_batch_splits_fill_and_stroke() {
        let mut batch = CircleBatch::new();
        let red = [1.0, 0.0, 0.0, 1.0];
        let black = [0.0, 0.0, 0.0, 1.0];

        batch.circle(Vec2::new(10.0, 20.0), 5.0, CircleStyle::filled(red).with_stroke(black, 2.0));
        batch.circle(Vec2::ZERO, 50.0, CircleStyle::outline(black, 1.0));

        assert_eq!(batch.instances.len(), 3);
        assert_eq!(batch.instances[0].ring_width, 0.0);
        assert_eq!(batch.instances[0].color, red);
        assert_eq!(batch.instances[1].ring_width, 2.0);
        assert_eq!(batch.instances[2].center, [0.0, 0.0]);
        assert_eq!(batch.instances[2].radius, 50.0);

        batch.clear();
        assert!(batch.instances.is_empty());
    }
}
