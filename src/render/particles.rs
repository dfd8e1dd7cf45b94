use super::helpers;
use glam::Mat4;
use love_core::scene::{ParticleCloud, ParticleInstance};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CloudUniforms {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    audio: f32,
    mode: f32,
    opacity: f32,
    _pad: [f32; 2],
}

/// Per-frame values shared by every cloud.
pub(crate) struct CloudFrame {
    pub(crate) view: Mat4,
    pub(crate) proj: Mat4,
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) audio: f32,
}

struct CloudBuffers {
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    count: u32,
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    clouds: Vec<CloudBuffers>,
}

impl ParticleResources {
    /// Instance data is uploaded once; clouds move through their model matrix.
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        clouds: &[&ParticleCloud],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(love_core::PARTICLES_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "particles_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particles_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(helpers::depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(helpers::ADDITIVE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let clouds = clouds
            .iter()
            .map(|cloud| {
                let uniform = helpers::uniform_buffer::<CloudUniforms>(device, "cloud_uniforms");
                let bind_group = helpers::uniform_bind_group(device, "cloud_bg", &bgl, &uniform);
                let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cloud_instances"),
                    contents: bytemuck::cast_slice(&cloud.instances),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                CloudBuffers {
                    uniform,
                    bind_group,
                    instances,
                    count: cloud.len() as u32,
                }
            })
            .collect();
        Self { pipeline, clouds }
    }

    /// `clouds` must be in the same order as at construction.
    pub(crate) fn update(&self, queue: &wgpu::Queue, clouds: &[&ParticleCloud], frame: &CloudFrame) {
        for (buffers, cloud) in self.clouds.iter().zip(clouds) {
            let u = CloudUniforms {
                model: cloud.model_matrix().to_cols_array_2d(),
                view: frame.view.to_cols_array_2d(),
                proj: frame.proj.to_cols_array_2d(),
                resolution: frame.resolution,
                time: frame.time,
                audio: frame.audio,
                mode: cloud.kind.shader_mode(),
                opacity: cloud.opacity,
                _pad: [0.0; 2],
            };
            queue.write_buffer(&buffers.uniform, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        for c in self.clouds.iter().filter(|c| c.count > 0) {
            rpass.set_bind_group(0, &c.bind_group, &[]);
            rpass.set_vertex_buffer(0, c.instances.slice(..));
            rpass.draw(0..6, 0..c.count);
        }
    }
}
