use super::clip::AudioClip;
use super::resample::{ResampleEngine, ResampleJob};
use anyhow::Result;

/// Applies edits to an [`AudioClip`]
///
/// The editor owns its clip for the duration of the edits. Pass a clone to
/// keep the original untouched, or move the clip in and take it back with
/// [`into_clip`](Self::into_clip) when done.
pub struct AudioEditor {
    clip: AudioClip,
}

impl AudioEditor {
    pub fn new(clip: AudioClip) -> Self {
        Self { clip }
    }

    /// The clip in its current edited state
    pub fn clip(&self) -> &AudioClip {
        &self.clip
    }

    pub fn into_clip(self) -> AudioClip {
        self.clip
    }

    /// Mix all channels down to mono by averaging each frame
    ///
    /// A mono or channel-less clip is left as-is.
    pub fn mixdown(&mut self) {
        let channels = self.clip.channels() as usize;
        if channels <= 1 {
            return;
        }

        let frames = self.clip.frames();
        let samples = self.clip.samples();
        let mut mono = vec![0.0f32; frames];

        for frame in 0..frames {
            for channel in 0..channels {
                mono[frame] += samples[frame * channels + channel];
            }
            mono[frame] /= channels as f32;
        }

        tracing::debug!(frames, from_channels = channels, "mixed down to mono");
        self.clip.set_samples(mono, 1);
    }

    /// Change the clip's sample rate using the supplied conversion engine
    ///
    /// Prepares a [`ResampleJob`] for the clip's samples, hands it to the
    /// engine, and replaces the clip's samples with however many frames the
    /// engine reports having produced. The clip is untouched if preparation
    /// or the engine fails.
    pub fn resample(&mut self, target_rate: u32, engine: &mut dyn ResampleEngine) -> Result<()> {
        let frames = self.clip.frames();
        let channels = self.clip.channels();
        let source_rate = self.clip.sample_rate();

        let mut job = ResampleJob::new(
            target_rate,
            source_rate,
            frames,
            channels,
            self.clip.samples(),
        )?;
        let produced = engine.process(&mut job)?;

        let mut output = job.into_output();
        output.truncate(produced * channels as usize);

        tracing::debug!(
            source_rate,
            target_rate,
            input_frames = frames,
            produced_frames = produced,
            "resampled clip"
        );

        self.clip.set_samples(output, channels);
        self.clip.set_sample_rate(target_rate);
        Ok(())
    }
}
