use love_core::audio::average_amplitude;
use love_core::constants::ANALYSER_FFT_SIZE;
use web_sys as web;

/// Media element routed through an analyser on its way to the speakers.
pub struct AudioTap {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

impl AudioTap {
    /// Once a media element is routed through the context it only sounds
    /// while the context runs, so callers must resume it on playback.
    pub fn attach(media: &web::HtmlMediaElement) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        let source = ctx
            .create_media_element_source(media)
            .map_err(|e| anyhow::anyhow!("media source: {:?}", e))?;
        let analyser = ctx
            .create_analyser()
            .map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("connect source: {:?}", e))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect destination: {:?}", e))?;
        let bins = vec![0u8; analyser.frequency_bin_count() as usize];
        Ok(Self {
            ctx,
            analyser,
            bins,
        })
    }

    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// Average level of the current spectrum in [0,1].
    pub fn sample(&mut self) -> f32 {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        average_amplitude(&self.bins)
    }
}

pub fn resume(ctx: &web::AudioContext) {
    if ctx.state() == web::AudioContextState::Suspended {
        _ = ctx.resume();
    }
}
