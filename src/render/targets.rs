use super::helpers;

const SAMPLED_TARGET: wgpu::TextureUsages =
    wgpu::TextureUsages::RENDER_ATTACHMENT.union(wgpu::TextureUsages::TEXTURE_BINDING);

/// Offscreen targets for the scene and the bloom chain.
///
/// - `hdr_*` hold the scene colour, `depth_*` its depth buffer.
/// - `bloom_*` are half-res ping-pong buffers for the bright pass and blur.
///
/// `hdr_format` is Rgba16Float where the adapter can render to it, otherwise
/// Rgba8Unorm (WebGL2 without float colour buffers).
pub(crate) struct RenderTargets {
    pub(crate) hdr_format: wgpu::TextureFormat,
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

#[inline]
pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        hdr_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, hdr_format, SAMPLED_TARGET);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        let (bw, bh) = bloom_size(width, height);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, hdr_format, SAMPLED_TARGET);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, hdr_format, SAMPLED_TARGET);
        Self {
            hdr_format,
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        for tex in [&self.hdr_tex, &self.depth_tex, &self.bloom_a, &self.bloom_b] {
            tex.destroy();
        }
        *self = Self::new(device, self.hdr_format, width, height);
    }
}
