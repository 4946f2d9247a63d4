//! Codec implementations
//!
//! Only linear PCM is supported; the decoder turns raw integer sample
//! bytes into normalized floating-point audio.

pub mod pcm;
pub mod sample_buffer;

pub use pcm::{PcmConfig, PcmDecoder};
pub use sample_buffer::SampleBuffer;
