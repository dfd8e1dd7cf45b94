use super::helpers;
use super::targets::{bloom_size, RenderTargets};
use love_core::constants::{BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
    radius: f32,
    _pad: f32,
}

impl PostUniforms {
    pub(crate) fn new(bloom_resolution: (u32, u32), blur_dir: [f32; 2]) -> Self {
        Self {
            resolution: [bloom_resolution.0 as f32, bloom_resolution.1 as f32],
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
            radius: BLOOM_RADIUS,
            _pad: 0.0,
        }
    }
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // One buffer per blur direction; all passes are encoded before submit.
    pub(crate) uniform_h: wgpu::Buffer,
    pub(crate) uniform_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let uniform_h = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms_h");
    let uniform_v = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms_v");
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        bloom_format,
        None,
    );
    let blur_pipeline = helpers::make_post_pipeline(
        device,
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        bloom_format,
        None,
    );
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_h,
        uniform_v,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

/// Bind groups that reference the offscreen views; rebuilt whenever the
/// targets are recreated.
pub(crate) struct PostBindGroups {
    pub(crate) from_hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup, // group1 for composite
}

fn source_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniform: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buf) = uniform {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buf.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

impl PostBindGroups {
    pub(crate) fn new(
        device: &wgpu::Device,
        post: &PostResources,
        targets: &RenderTargets,
        sampler: &wgpu::Sampler,
    ) -> Self {
        Self {
            from_hdr: source_group(
                device,
                "bg_hdr",
                &post.bgl0,
                &targets.hdr_view,
                sampler,
                Some(&post.uniform_h),
            ),
            from_bloom_a: source_group(
                device,
                "bg_from_bloom_a",
                &post.bgl0,
                &targets.bloom_a_view,
                sampler,
                Some(&post.uniform_h),
            ),
            from_bloom_b: source_group(
                device,
                "bg_from_bloom_b",
                &post.bgl0,
                &targets.bloom_b_view,
                sampler,
                Some(&post.uniform_v),
            ),
            bloom_a_only: source_group(
                device,
                "bg_bloom_a_only",
                &post.bgl1,
                &targets.bloom_a_view,
                sampler,
                None,
            ),
        }
    }
}

impl PostResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let size = bloom_size(width, height);
        queue.write_buffer(
            &self.uniform_h,
            0,
            bytemuck::bytes_of(&PostUniforms::new(size, [1.0, 0.0])),
        );
        queue.write_buffer(
            &self.uniform_v,
            0,
            bytemuck::bytes_of(&PostUniforms::new(size, [0.0, 1.0])),
        );
    }

    /// bright(hdr→A), blur H(A→B), blur V(B→A), composite(hdr+A→surface)
    pub(crate) fn encode_bloom(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        groups: &PostBindGroups,
        surface_view: &wgpu::TextureView,
    ) {
        let clear = wgpu::Color::TRANSPARENT;
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            clear,
            &self.bright_pipeline,
            &groups.from_hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            clear,
            &self.blur_pipeline,
            &groups.from_bloom_a,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            clear,
            &self.blur_pipeline,
            &groups.from_bloom_b,
            None,
        );
        blit(
            encoder,
            "composite",
            surface_view,
            clear,
            &self.composite_pipeline,
            &groups.from_hdr,
            Some(&groups.bloom_a_only),
        );
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
    drop(r);
}
