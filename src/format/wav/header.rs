//! WAV file header structures and parsing
//!
//! The canonical PCM header is a fixed 44-byte layout; every field is read
//! at a named offset, little-endian, and validated before the header value
//! is handed out. Parsing is a pure function of the input bytes.

use super::{DATA_CHUNK, FMT_CHUNK, HEADER_LEN, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::SampleFormat;

// Byte offsets of each field within the canonical 44-byte header.
const CHUNK_ID_OFFSET: usize = 0;
const CHUNK_SIZE_OFFSET: usize = 4;
const FORMAT_OFFSET: usize = 8;
const SUBCHUNK1_ID_OFFSET: usize = 12;
const SUBCHUNK1_SIZE_OFFSET: usize = 16;
const AUDIO_FORMAT_OFFSET: usize = 20;
const NUM_CHANNELS_OFFSET: usize = 22;
const SAMPLE_RATE_OFFSET: usize = 24;
const BYTE_RATE_OFFSET: usize = 28;
const BLOCK_ALIGN_OFFSET: usize = 32;
const BITS_PER_SAMPLE_OFFSET: usize = 34;
const SUBCHUNK2_ID_OFFSET: usize = 36;
const SUBCHUNK2_SIZE_OFFSET: usize = 40;

/// fmt chunk size for canonical PCM (no extension field)
const PCM_FMT_SIZE: u32 = 16;

/// Header bytes counted by chunk_size beyond the RIFF chunk header itself
const RIFF_OVERHEAD: u32 = 36;

fn read_tag(buf: &[u8], offset: usize) -> [u8; 4] {
    [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

fn expect_tag(buf: &[u8], offset: usize, expected: &[u8; 4], field: &'static str) -> Result<()> {
    let actual = read_tag(buf, offset);
    if &actual != expected {
        return Err(Error::InvalidTag {
            field,
            expected: *expected,
            actual,
        });
    }
    Ok(())
}

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
///
/// Holds the six numeric fields of the canonical 16-byte fmt chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (codec ID); only PCM survives validation
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment (bytes per frame)
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Get the internal sample format
    pub fn sample_format(&self) -> Result<SampleFormat> {
        SampleFormat::from_bits_per_sample(self.bits_per_sample).ok_or(
            Error::UnsupportedBitDepth {
                value: self.bits_per_sample,
            },
        )
    }

    /// Get bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculate expected byte rate
    pub fn calculate_byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * self.bytes_per_sample() as u32
    }

    /// Calculate expected block alignment
    pub fn calculate_block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }
}

/// Complete canonical WAV file header
///
/// Immutable value produced once per file by [`WavHeader::from_bytes`].
/// The four magic tags are not stored; a validated header always carries
/// exactly `RIFF`, `WAVE`, `fmt ` and `data`, which [`WavHeader::to_bytes`]
/// re-emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file size minus 8)
    pub chunk_size: u32,
    /// WAV format information from the fmt chunk
    pub format: WavFormat,
    /// Data chunk size in bytes
    pub data_size: u32,
}

impl WavHeader {
    /// Parse and validate a canonical 44-byte WAV header
    ///
    /// Validation is strict and fail-fast; the first violated constraint is
    /// reported. Tags are compared byte-for-byte, all integers are read
    /// little-endian regardless of host byte order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::TruncatedHeader { len: bytes.len() });
        }

        expect_tag(bytes, CHUNK_ID_OFFSET, RIFF_MAGIC, "chunk_id")?;
        expect_tag(bytes, FORMAT_OFFSET, WAVE_MAGIC, "format")?;

        let chunk_size = read_u32(bytes, CHUNK_SIZE_OFFSET);
        if chunk_size < RIFF_OVERHEAD {
            return Err(Error::InvalidFieldValue {
                field: "chunk_size",
                expected: format!("at least {}", RIFF_OVERHEAD),
                actual: chunk_size,
            });
        }

        expect_tag(bytes, SUBCHUNK1_ID_OFFSET, FMT_CHUNK, "subchunk1_id")?;

        let subchunk1_size = read_u32(bytes, SUBCHUNK1_SIZE_OFFSET);
        if subchunk1_size != PCM_FMT_SIZE {
            return Err(Error::InvalidFieldValue {
                field: "subchunk1_size",
                expected: format!("{} (canonical PCM fmt chunk)", PCM_FMT_SIZE),
                actual: subchunk1_size,
            });
        }

        let format_tag = FormatTag::from(read_u16(bytes, AUDIO_FORMAT_OFFSET));
        if format_tag != FormatTag::Pcm {
            return Err(Error::InvalidFieldValue {
                field: "audio_format",
                expected: "1 (linear PCM)".to_string(),
                actual: u16::from(format_tag) as u32,
            });
        }

        let channels = read_u16(bytes, NUM_CHANNELS_OFFSET);
        if channels == 0 {
            return Err(Error::InvalidFieldValue {
                field: "num_channels",
                expected: "at least 1".to_string(),
                actual: 0,
            });
        }

        let sample_rate = read_u32(bytes, SAMPLE_RATE_OFFSET);
        if sample_rate == 0 {
            return Err(Error::InvalidFieldValue {
                field: "sample_rate",
                expected: "greater than 0".to_string(),
                actual: 0,
            });
        }

        let bits_per_sample = read_u16(bytes, BITS_PER_SAMPLE_OFFSET);
        if SampleFormat::from_bits_per_sample(bits_per_sample).is_none() {
            return Err(Error::InvalidFieldValue {
                field: "bits_per_sample",
                expected: "one of 8, 16, 24, 32".to_string(),
                actual: bits_per_sample as u32,
            });
        }

        let format = WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate: read_u32(bytes, BYTE_RATE_OFFSET),
            block_align: read_u16(bytes, BLOCK_ALIGN_OFFSET),
            bits_per_sample,
        };

        let expected_byte_rate = format.calculate_byte_rate();
        if format.byte_rate != expected_byte_rate {
            return Err(Error::InvalidFieldValue {
                field: "byte_rate",
                expected: format!("{} (sample_rate * num_channels * bytes per sample)", expected_byte_rate),
                actual: format.byte_rate,
            });
        }

        let expected_block_align = format.calculate_block_align();
        if format.block_align != expected_block_align {
            return Err(Error::InvalidFieldValue {
                field: "block_align",
                expected: format!("{} (num_channels * bytes per sample)", expected_block_align),
                actual: format.block_align as u32,
            });
        }

        expect_tag(bytes, SUBCHUNK2_ID_OFFSET, DATA_CHUNK, "subchunk2_id")?;

        let data_size = read_u32(bytes, SUBCHUNK2_SIZE_OFFSET);

        Ok(WavHeader {
            chunk_size,
            format,
            data_size,
        })
    }

    /// Re-encode the header into its canonical 44-byte layout
    ///
    /// For any header accepted by [`WavHeader::from_bytes`] the round trip
    /// reproduces the original buffer byte-for-byte.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];

        bytes[CHUNK_ID_OFFSET..CHUNK_ID_OFFSET + 4].copy_from_slice(RIFF_MAGIC);
        bytes[CHUNK_SIZE_OFFSET..CHUNK_SIZE_OFFSET + 4]
            .copy_from_slice(&self.chunk_size.to_le_bytes());
        bytes[FORMAT_OFFSET..FORMAT_OFFSET + 4].copy_from_slice(WAVE_MAGIC);
        bytes[SUBCHUNK1_ID_OFFSET..SUBCHUNK1_ID_OFFSET + 4].copy_from_slice(FMT_CHUNK);
        bytes[SUBCHUNK1_SIZE_OFFSET..SUBCHUNK1_SIZE_OFFSET + 4]
            .copy_from_slice(&PCM_FMT_SIZE.to_le_bytes());
        bytes[AUDIO_FORMAT_OFFSET..AUDIO_FORMAT_OFFSET + 2]
            .copy_from_slice(&u16::from(self.format.format_tag).to_le_bytes());
        bytes[NUM_CHANNELS_OFFSET..NUM_CHANNELS_OFFSET + 2]
            .copy_from_slice(&self.format.channels.to_le_bytes());
        bytes[SAMPLE_RATE_OFFSET..SAMPLE_RATE_OFFSET + 4]
            .copy_from_slice(&self.format.sample_rate.to_le_bytes());
        bytes[BYTE_RATE_OFFSET..BYTE_RATE_OFFSET + 4]
            .copy_from_slice(&self.format.byte_rate.to_le_bytes());
        bytes[BLOCK_ALIGN_OFFSET..BLOCK_ALIGN_OFFSET + 2]
            .copy_from_slice(&self.format.block_align.to_le_bytes());
        bytes[BITS_PER_SAMPLE_OFFSET..BITS_PER_SAMPLE_OFFSET + 2]
            .copy_from_slice(&self.format.bits_per_sample.to_le_bytes());
        bytes[SUBCHUNK2_ID_OFFSET..SUBCHUNK2_ID_OFFSET + 4].copy_from_slice(DATA_CHUNK);
        bytes[SUBCHUNK2_SIZE_OFFSET..SUBCHUNK2_SIZE_OFFSET + 4]
            .copy_from_slice(&self.data_size.to_le_bytes());

        bytes
    }

    /// Get total number of frames (samples per channel)
    pub fn num_samples(&self) -> u64 {
        self.data_size as u64 / self.format.block_align as u64
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples() as f64 / self.format.sample_rate as f64
    }
}
