use anyhow::{Context, Result};

/// One whole-buffer sample-rate conversion, ready to hand to an engine
///
/// The job borrows the caller's input samples, owns a freshly allocated
/// output buffer sized for the conversion, and carries the rate ratio the
/// engine needs for interpolation. The engine fills `output_mut()` up to
/// `output_frames()` frames and reports how many it actually produced;
/// that count is the engine's to track, not the job's.
#[derive(Debug)]
pub struct ResampleJob<'a> {
    input: &'a [f32],
    input_frames: usize,
    output: Vec<f32>,
    output_frames: usize,
    ratio: f64,
}

impl<'a> ResampleJob<'a> {
    /// Prepare a conversion of `frames` frames of interleaved samples from
    /// `source_rate` to `target_rate`
    ///
    /// The output frame count is `floor(frames * target_rate / source_rate)`;
    /// fractional frames are truncated, never rounded. The output buffer is
    /// allocated here, zero-filled, sized exactly `output_frames * channels`.
    ///
    /// `samples` must hold `frames * channels` values; this is the caller's
    /// responsibility and is not checked. A zero channel count is likewise
    /// not rejected and simply yields an empty output buffer.
    ///
    /// Fails if either rate is zero or if the output buffer cannot be
    /// allocated. On failure nothing is allocated and no job is returned.
    pub fn new(
        target_rate: u32,
        source_rate: u32,
        frames: usize,
        channels: u16,
        samples: &'a [f32],
    ) -> Result<Self> {
        if source_rate == 0 {
            anyhow::bail!("invalid sample rate: source rate is zero");
        }
        if target_rate == 0 {
            anyhow::bail!("invalid sample rate: target rate is zero");
        }

        let ratio = target_rate as f64 / source_rate as f64;
        let output_frames = (frames as f64 * ratio) as usize;

        let output_len = output_frames * channels as usize;
        let mut output = Vec::new();
        output
            .try_reserve_exact(output_len)
            .with_context(|| format!("failed to allocate {} output samples", output_len))?;
        output.resize(output_len, 0.0);

        tracing::debug!(
            source_rate,
            target_rate,
            input_frames = frames,
            output_frames,
            channels,
            "prepared resample job"
        );

        Ok(Self {
            input: samples,
            input_frames: frames,
            output,
            output_frames,
            ratio,
        })
    }

    pub fn input(&self) -> &[f32] {
        self.input
    }

    pub fn input_frames(&self) -> usize {
        self.input_frames
    }

    pub fn output(&self) -> &[f32] {
        &self.output
    }

    /// The buffer the engine writes converted samples into
    pub fn output_mut(&mut self) -> &mut [f32] {
        &mut self.output
    }

    /// Capacity bound for the engine, in frames
    pub fn output_frames(&self) -> usize {
        self.output_frames
    }

    /// Conversion factor, `target_rate / source_rate`
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Consume the job and take ownership of the output buffer
    pub fn into_output(self) -> Vec<f32> {
        self.output
    }
}

/// Trait for sample-rate conversion engines
///
/// Implementations read `job.input()`, write interpolated samples into
/// `job.output_mut()` without exceeding `job.output_frames()` frames, and
/// return the number of frames actually produced.
pub trait ResampleEngine {
    fn process(&mut self, job: &mut ResampleJob<'_>) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_frames_follow_rate_ratio() {
        let samples = vec![0.0f32; 2000];

        let job = ResampleJob::new(22050, 44100, 1000, 2, &samples).unwrap();
        assert_eq!(job.ratio(), 0.5);
        assert_eq!(job.output_frames(), 500);
        assert_eq!(job.output().len(), 1000);

        let samples = vec![0.0f32; 1000];
        let job = ResampleJob::new(44100, 22050, 1000, 1, &samples).unwrap();
        assert_eq!(job.ratio(), 2.0);
        assert_eq!(job.output_frames(), 2000);
        assert_eq!(job.output().len(), 2000);
    }

    #[test]
    fn test_fractional_frames_truncate() {
        // 1000 * 3 / 7 = 428.57..., floor to 428
        let samples = vec![0.0f32; 1000];
        let job = ResampleJob::new(3000, 7000, 1000, 1, &samples).unwrap();

        assert_eq!(job.output_frames(), 428);
        assert_eq!(job.output().len(), 428);
    }

    #[test]
    fn test_identical_rates_preserve_frame_count() {
        let samples = vec![0.0f32; 600];
        let job = ResampleJob::new(48000, 48000, 300, 2, &samples).unwrap();

        assert_eq!(job.ratio(), 1.0);
        assert_eq!(job.output_frames(), 300);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let samples: Vec<f32> = vec![];
        let job = ResampleJob::new(48000, 44100, 0, 2, &samples).unwrap();

        assert_eq!(job.output_frames(), 0);
        assert_eq!(job.output().len(), 0);
    }

    #[test]
    fn test_repeated_jobs_get_distinct_buffers() {
        let samples = vec![0.0f32; 100];
        let a = ResampleJob::new(48000, 24000, 100, 1, &samples).unwrap();
        let b = ResampleJob::new(48000, 24000, 100, 1, &samples).unwrap();

        assert_eq!(a.output_frames(), b.output_frames());
        assert_eq!(a.ratio(), b.ratio());
        assert!(!std::ptr::eq(a.output().as_ptr(), b.output().as_ptr()));
    }

    #[test]
    fn test_input_is_borrowed_not_copied() {
        let samples = vec![0.25f32; 40];
        let job = ResampleJob::new(16000, 8000, 20, 2, &samples).unwrap();

        assert!(std::ptr::eq(job.input().as_ptr(), samples.as_ptr()));
        assert_eq!(job.input_frames(), 20);
    }

    #[test]
    fn test_zero_source_rate_rejected() {
        let samples = vec![0.0f32; 10];
        let result = ResampleJob::new(44100, 0, 10, 1, &samples);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid sample rate"));
    }

    #[test]
    fn test_zero_target_rate_rejected() {
        let samples = vec![0.0f32; 10];
        let result = ResampleJob::new(0, 44100, 10, 1, &samples);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid sample rate"));
    }
}
