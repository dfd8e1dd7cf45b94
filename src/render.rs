use glam::Vec3;
use love_core::constants::{FOG_FAR, FOG_NEAR, MAX_POINT_LIGHTS};
use love_core::scene::SceneState;
use web_sys as web;

mod helpers;
mod lines;
mod meshes;
mod particles;
mod post;
mod targets;

use lines::LineResources;
use meshes::MeshResources;
use particles::{CloudFrame, ParticleResources};
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct PackedLight {
    position_range: [f32; 4],
    color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    dir_light_dir: [f32; 4],
    dir_light_color: [f32; 4],
    fog: [f32; 4],
    lights: [PackedLight; MAX_POINT_LIGHTS],
}

#[inline]
fn vec4(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

impl SceneUniforms {
    fn from_scene(scene: &SceneState) -> Self {
        let cam = &scene.camera;
        let mut lights = [PackedLight::default(); MAX_POINT_LIGHTS];
        let mut count = 0;
        for (slot, l) in lights.iter_mut().zip(scene.lights.point_lights()) {
            *slot = PackedLight {
                position_range: vec4(l.position, l.distance),
                color_intensity: [l.color[0], l.color[1], l.color[2], l.intensity],
            };
            count += 1;
        }
        let rig = &scene.lights;
        Self {
            view_proj: (cam.projection_matrix() * cam.view_matrix()).to_cols_array_2d(),
            camera_pos: vec4(cam.eye, 1.0),
            ambient: vec4(rig.ambient, 0.0),
            dir_light_dir: vec4(rig.directional_dir, 0.0),
            dir_light_color: vec4(rig.directional, 0.0),
            fog: [FOG_NEAR, FOG_FAR, count as f32, 0.0],
            lights,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_groups: PostBindGroups,

    scene_uniforms: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    particles: ParticleResources,
    meshes: MeshResources,
    lines: LineResources,

    width: u32,
    height: u32,
}

fn pick_hdr_format(adapter: &wgpu::Adapter) -> wgpu::TextureFormat {
    let float = wgpu::TextureFormat::Rgba16Float;
    let features = adapter.get_texture_format_features(float);
    if features
        .allowed_usages
        .contains(wgpu::TextureUsages::RENDER_ATTACHMENT)
        && features
            .flags
            .contains(wgpu::TextureFormatFeatureFlags::FILTERABLE)
    {
        float
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

impl GpuState {
    /// WebGPU when the browser offers it, WebGL2 otherwise.
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneState) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No graphics adapter"))?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas over the star field
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hdr_format = pick_hdr_format(&adapter);
        let targets = RenderTargets::new(&device, hdr_format, width, height);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(love_core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, hdr_format, format);
        let post_groups = PostBindGroups::new(&device, &post, &targets, &linear_sampler);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(love_core::SCENE_WGSL.into()),
        });
        let scene_bgl = helpers::uniform_layout(&device, "scene_bgl");
        let scene_uniforms = helpers::uniform_buffer::<SceneUniforms>(&device, "scene_uniforms");
        let scene_bg = helpers::uniform_bind_group(&device, "scene_bg", &scene_bgl, &scene_uniforms);

        let particles = ParticleResources::new(&device, hdr_format, &scene.clouds());
        let meshes = MeshResources::new(
            &device,
            hdr_format,
            &scene_bgl,
            &scene_shader,
            scene.floating_hearts.len(),
        );
        let lines = LineResources::new(&device, hdr_format, &scene_bgl, &scene_shader, scene);

        log::info!(
            "[gpu] surface {}x{} {:?}, hdr {:?}",
            width,
            height,
            format,
            hdr_format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            post,
            post_groups,
            scene_uniforms,
            scene_bg,
            particles,
            meshes,
            lines,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reapply the surface configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.post_groups =
                PostBindGroups::new(&self.device, &self.post, &self.targets, &self.linear_sampler);
        }
    }

    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let clouds = scene.clouds();
        self.particles.update(
            &self.queue,
            &clouds,
            &CloudFrame {
                view: scene.camera.view_matrix(),
                proj: scene.camera.projection_matrix(),
                resolution: [self.width as f32, self.height as f32],
                time: scene.time,
                audio: scene.amplitude,
            },
        );
        self.meshes.update(&self.queue, scene);
        self.lines.update(&self.queue, scene);
        self.queue.write_buffer(
            &self.scene_uniforms,
            0,
            bytemuck::bytes_of(&SceneUniforms::from_scene(scene)),
        );
        self.post.write_uniforms(&self.queue, self.width, self.height);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.meshes.draw(&mut rpass, &self.scene_bg);
            self.lines.draw(&mut rpass, &self.scene_bg);
            self.particles.draw(&mut rpass);
        }
        self.post
            .encode_bloom(&mut encoder, &self.targets, &self.post_groups, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
