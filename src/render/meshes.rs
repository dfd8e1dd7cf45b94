use super::helpers;
use love_core::constants::{HEART_CURVE_SEGMENTS, HEART_DEPTH};
use love_core::scene::{heart_geometry, MeshInstance, MeshVertex, SceneState};
use wgpu::util::DeviceExt;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
    6 => Float32x4, 7 => Float32x4
];

/// The heart mesh drawn once per heart: the centrepiece first, then the
/// floating hearts.
pub(crate) struct MeshResources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    instances: wgpu::Buffer,
    capacity: usize,
    staged: Vec<MeshInstance>,
}

impl MeshResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        scene_bgl: &wgpu::BindGroupLayout,
        shader: &wgpu::ShaderModule,
        heart_count: usize,
    ) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[scene_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_mesh"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MeshVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &VERTEX_ATTRS,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<MeshInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &INSTANCE_ATTRS,
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(helpers::depth_state(true)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_mesh"),
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

        let geo = heart_geometry(HEART_DEPTH, HEART_CURVE_SEGMENTS);
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("heart_vertices"),
            contents: bytemuck::cast_slice(&geo.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("heart_indices"),
            contents: bytemuck::cast_slice(&geo.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let capacity = heart_count + 1;
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("heart_instances"),
            size: (capacity * std::mem::size_of::<MeshInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            pipeline,
            vertices,
            indices,
            index_count: geo.indices.len() as u32,
            instances,
            capacity,
            staged: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn update(&mut self, queue: &wgpu::Queue, scene: &SceneState) {
        self.staged.clear();
        self.staged.push(scene.heart.instance());
        self.staged.extend(
            scene
                .floating_hearts
                .iter()
                .take(self.capacity - 1)
                .map(|h| h.instance()),
        );
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&self.staged));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..self.staged.len() as u32);
    }
}
