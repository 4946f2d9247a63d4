//! Decoded audio sample buffer

/// Normalized audio samples decoded from a PCM data chunk
///
/// Samples are `f32` in [-1.0, 1.0], interleaved channel-major within each
/// frame, exactly as they appeared in the source data. The buffer is
/// created once by the decoder and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl SampleBuffer {
    pub(crate) fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        SampleBuffer {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Get the normalized samples, interleaved
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get the total number of samples across all channels
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Get the largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Consume the buffer and return the samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
