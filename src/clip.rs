use super::format::AudioFormat;

/// An audio clip held entirely in memory
///
/// A clip is a block of interleaved floating-point samples plus the format
/// describing them. Where the samples came from (a decoder, a capture
/// stream, a synthesizer) is not this type's concern; it only stores them.
///
/// The samples are expected to hold `frames * channels` values. The setters
/// below allow direct edits, but [`AudioEditor`](crate::AudioEditor) is the
/// safer way to modify a clip since it keeps format and samples consistent.
#[derive(Debug, Clone)]
pub struct AudioClip {
    format: AudioFormat,
    samples: Vec<f32>,
}

impl AudioClip {
    pub fn new(format: AudioFormat, samples: Vec<f32>) -> Self {
        Self { format, samples }
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Number of per-channel frames in the clip
    pub fn frames(&self) -> usize {
        self.format.frames_for_samples(self.samples.len())
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        self.format.sample_rate = sample_rate;
    }

    /// Replace the clip's samples and channel count together
    ///
    /// Both change at once so the clip never holds samples that disagree
    /// with its channel layout.
    pub fn set_samples(&mut self, samples: Vec<f32>, channels: u16) {
        self.samples = samples;
        self.format.channels = channels;
    }
}
