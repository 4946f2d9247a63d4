//! PCM decoder implementation
//!
//! Normalization rules by bit depth:
//!
//! - 8-bit: unsigned, biased by 128 -> `(byte - 128) / 128.0`
//! - 16-bit: signed little-endian -> `value / 32768.0`
//! - 24-bit: signed little-endian, sign-extended -> `value / 8388608.0`
//! - 32-bit: signed little-endian -> `value / 2147483648.0`

use super::PcmConfig;
use crate::codec::SampleBuffer;
use crate::error::{Error, Result};
use crate::format::wav::WavHeader;
use crate::util::SampleFormat;

/// PCM decoder
///
/// Bound to one header's format fields and declared data size; decoding is
/// a pure function of the raw bytes, safe to call from any thread.
#[derive(Debug, Clone)]
pub struct PcmDecoder {
    config: PcmConfig,
    data_size: u32,
}

impl PcmDecoder {
    /// Create a decoder for the format a validated header declares
    pub fn from_header(header: &WavHeader) -> Result<Self> {
        Ok(PcmDecoder {
            config: PcmConfig::from_header(header)?,
            data_size: header.data_size,
        })
    }

    /// Get the decoder configuration
    pub fn config(&self) -> &PcmConfig {
        &self.config
    }

    /// Decode raw PCM bytes into a normalized sample buffer
    ///
    /// The buffer must be exactly the header's declared data size and a
    /// whole number of samples. Samples stay interleaved in source order.
    pub fn decode(&self, raw: &[u8]) -> Result<SampleBuffer> {
        if raw.len() != self.data_size as usize {
            return Err(Error::SampleLengthMismatch {
                declared: self.data_size,
                actual: raw.len(),
            });
        }

        let bytes_per_sample = self.config.bytes_per_sample();
        if raw.len() % bytes_per_sample != 0 {
            return Err(Error::UnalignedSampleData {
                length: raw.len(),
                bytes_per_sample,
            });
        }

        let samples: Vec<f32> = match self.config.sample_format {
            SampleFormat::U8 => raw
                .iter()
                .map(|&b| (b as f32 - 128.0) / 128.0)
                .collect(),
            SampleFormat::I16 => raw
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]]) as f32 / 32768.0)
                .collect(),
            SampleFormat::I24 => raw
                .chunks_exact(3)
                .map(|c| {
                    // load into the top three bytes so the arithmetic shift
                    // extends the sign
                    let value = i32::from_le_bytes([0, c[0], c[1], c[2]]) >> 8;
                    value as f32 / 8_388_608.0
                })
                .collect(),
            SampleFormat::I32 => raw
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]) as f32 / 2_147_483_648.0)
                .collect(),
        };

        Ok(SampleBuffer::new(
            samples,
            self.config.sample_rate,
            self.config.channels,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder(format: SampleFormat, channels: u16, data_size: u32) -> PcmDecoder {
        PcmDecoder {
            config: PcmConfig::new(format, channels, 44100),
            data_size,
        }
    }

    #[test]
    fn test_decode_u8_anchors() {
        let dec = decoder(SampleFormat::U8, 1, 3);
        let buf = dec.decode(&[0, 128, 255]).unwrap();
        assert_eq!(buf.samples()[0], -1.0);
        assert_eq!(buf.samples()[1], 0.0);
        assert!((buf.samples()[2] - 0.9921875).abs() < 1e-7);
    }

    #[test]
    fn test_decode_i16_anchors() {
        let dec = decoder(SampleFormat::I16, 1, 6);
        let raw = [
            32767i16.to_le_bytes(),
            (-32768i16).to_le_bytes(),
            0i16.to_le_bytes(),
        ]
        .concat();
        let buf = dec.decode(&raw).unwrap();
        assert!((buf.samples()[0] - 0.999969).abs() < 1e-6);
        assert_eq!(buf.samples()[1], -1.0);
        assert_eq!(buf.samples()[2], 0.0);
    }

    #[test]
    fn test_decode_i24_sign_extension() {
        let dec = decoder(SampleFormat::I24, 1, 9);
        // +128, -8388608 (most negative), +8388607 (most positive)
        let raw = [0x80, 0x00, 0x00, 0x00, 0x00, 0x80, 0xFF, 0xFF, 0x7F];
        let buf = dec.decode(&raw).unwrap();
        assert!((buf.samples()[0] - 128.0 / 8_388_608.0).abs() < 1e-9);
        assert_eq!(buf.samples()[1], -1.0);
        assert!((buf.samples()[2] - 8_388_607.0 / 8_388_608.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_i32_anchors() {
        let dec = decoder(SampleFormat::I32, 1, 8);
        let raw = [i32::MIN.to_le_bytes(), 65536i32.to_le_bytes()].concat();
        let buf = dec.decode(&raw).unwrap();
        assert_eq!(buf.samples()[0], -1.0);
        assert_eq!(buf.samples()[1], 65536.0 / 2_147_483_648.0);
    }

    #[test]
    fn test_decode_preserves_interleave_order() {
        let dec = decoder(SampleFormat::I16, 2, 8);
        let raw = [
            100i16.to_le_bytes(),
            (-100i16).to_le_bytes(),
            200i16.to_le_bytes(),
            (-200i16).to_le_bytes(),
        ]
        .concat();
        let buf = dec.decode(&raw).unwrap();
        assert_eq!(buf.frames(), 2);
        assert_eq!(
            buf.samples(),
            &[
                100.0 / 32768.0,
                -100.0 / 32768.0,
                200.0 / 32768.0,
                -200.0 / 32768.0
            ]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let dec = decoder(SampleFormat::I16, 1, 10);
        match dec.decode(&[0u8; 8]) {
            Err(Error::SampleLengthMismatch { declared, actual }) => {
                assert_eq!(declared, 10);
                assert_eq!(actual, 8);
            }
            other => panic!("expected SampleLengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unaligned_data() {
        let dec = decoder(SampleFormat::I16, 1, 7);
        match dec.decode(&[0u8; 7]) {
            Err(Error::UnalignedSampleData {
                length,
                bytes_per_sample,
            }) => {
                assert_eq!(length, 7);
                assert_eq!(bytes_per_sample, 2);
            }
            other => panic!("expected UnalignedSampleData, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_payload() {
        let dec = decoder(SampleFormat::I16, 2, 0);
        let buf = dec.decode(&[]).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.frames(), 0);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let dec = decoder(SampleFormat::I16, 1, 4);
        let raw = [1000i16.to_le_bytes(), (-1000i16).to_le_bytes()].concat();
        let a = dec.decode(&raw).unwrap();
        let b = dec.decode(&raw).unwrap();
        assert_eq!(a, b);
    }
}
