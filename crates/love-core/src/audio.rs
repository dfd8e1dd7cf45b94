/// Collapse one byte frequency snapshot into a single amplitude in [0,1].
///
/// An empty snapshot reads as silence.
pub fn average_amplitude(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32 / 255.0
}

/// Optional platform capabilities, decided once at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub audio_analysis_available: bool,
}

impl Capabilities {
    /// Amplitude to feed the reactive particles this frame.
    #[inline]
    pub fn amplitude(&self, sample: Option<f32>) -> f32 {
        if !self.audio_analysis_available {
            return 0.0;
        }
        sample.unwrap_or(0.0).clamp(0.0, 1.0)
    }
}
