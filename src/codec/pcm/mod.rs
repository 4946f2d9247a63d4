//! PCM (Pulse Code Modulation) codec
//!
//! PCM is uncompressed audio, the simplest codec there is. This module
//! converts raw integer sample bytes into normalized floating-point
//! samples according to the bit depth declared in the WAV header.

pub mod decoder;

pub use decoder::PcmDecoder;

use crate::error::Result;
use crate::format::wav::WavHeader;
use crate::util::SampleFormat;

/// PCM codec configuration
#[derive(Debug, Clone, Copy)]
pub struct PcmConfig {
    /// Sample format
    pub sample_format: SampleFormat,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl PcmConfig {
    /// Create a new PCM configuration
    pub fn new(sample_format: SampleFormat, channels: u16, sample_rate: u32) -> Self {
        PcmConfig {
            sample_format,
            channels,
            sample_rate,
        }
    }

    /// Derive the configuration from a validated WAV header
    ///
    /// Fails with `UnsupportedBitDepth` for depths outside 8/16/24/32,
    /// even though the header parser already rejects those.
    pub fn from_header(header: &WavHeader) -> Result<Self> {
        Ok(PcmConfig {
            sample_format: header.format.sample_format()?,
            channels: header.format.channels,
            sample_rate: header.format.sample_rate,
        })
    }

    /// Get bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> usize {
        self.sample_format.sample_size()
    }

    /// Get bytes per frame (all channels)
    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Calculate number of samples from byte count
    pub fn samples_from_bytes(&self, bytes: usize) -> usize {
        bytes / self.bytes_per_sample()
    }
}
