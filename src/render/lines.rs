use super::helpers;
use love_core::scene::{LineVertex, SceneState};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

/// Trails expanded on the CPU into a line list each frame.
pub(crate) struct LineResources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    capacity: usize,
    staged: Vec<LineVertex>,
}

impl LineResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        scene_bgl: &wgpu::BindGroupLayout,
        shader: &wgpu::ShaderModule,
        scene: &SceneState,
    ) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("line_pl"),
            bind_group_layouts: &[scene_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_line"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(helpers::depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let capacity = scene
            .trails()
            .map(|t| t.segment_vertex_count())
            .sum::<usize>()
            .max(2);
        let vertices = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trail_vertices"),
            size: (capacity * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            pipeline,
            vertices,
            capacity,
            staged: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn update(&mut self, queue: &wgpu::Queue, scene: &SceneState) {
        self.staged.clear();
        for trail in scene.trails() {
            trail.append_segments(&mut self.staged);
        }
        self.staged.truncate(self.capacity);
        if !self.staged.is_empty() {
            queue.write_buffer(&self.vertices, 0, bytemuck::cast_slice(&self.staged));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        if self.staged.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.draw(0..self.staged.len() as u32, 0..1);
    }
}
