//! WAV audio format support
//!
//! This module implements canonical RIFF/WAV header parsing and file
//! reading. Only the fixed 44-byte PCM layout is accepted: a RIFF chunk
//! wrapping exactly one 16-byte fmt chunk and one data chunk, with no
//! extra sub-chunks in between.

pub mod header;
pub mod reader;

pub use header::{FormatTag, WavFormat, WavHeader};
pub use reader::{decode_file, decode_files, read_file};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the canonical PCM WAV header in bytes
pub const HEADER_LEN: usize = 44;
