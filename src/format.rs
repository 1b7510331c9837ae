// NOTE: The entire crate currently assumes interleaved 32-bit float samples.
// All editing and resample preparation is done with this representation.
// If we need to support integer PCM in the future, this will need to be
// parameterized.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioFormat {
    /// Number of interleaved samples needed to hold a given frame count
    pub fn samples_for_frames(&self, frames: usize) -> usize {
        frames * self.channels as usize
    }

    /// Number of whole frames a sample count represents
    pub fn frames_for_samples(&self, samples: usize) -> usize {
        if self.channels == 0 {
            0
        } else {
            samples / self.channels as usize
        }
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
        }
    }
}
