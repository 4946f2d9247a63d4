//! Error types for wavedec

use thiserror::Error;

/// Result type alias for wavedec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavedec
#[derive(Error, Debug)]
pub enum Error {
    /// Header buffer shorter than the canonical 44 bytes
    #[error(
        "truncated WAV header: need {} bytes, have {len}",
        crate::format::wav::HEADER_LEN
    )]
    TruncatedHeader { len: usize },

    /// A 4-byte tag did not match its expected magic
    #[error(
        "invalid {field} tag: expected {:?}, found {:?}",
        String::from_utf8_lossy(.expected),
        String::from_utf8_lossy(.actual)
    )]
    InvalidTag {
        field: &'static str,
        expected: [u8; 4],
        actual: [u8; 4],
    },

    /// A header field violated a declared or derived constraint
    #[error("invalid {field}: expected {expected}, found {actual}")]
    InvalidFieldValue {
        field: &'static str,
        expected: String,
        actual: u32,
    },

    /// Sample payload length disagrees with the header's declared data size
    #[error("sample data length mismatch: header declares {declared} bytes, buffer has {actual}")]
    SampleLengthMismatch { declared: u32, actual: usize },

    /// Sample payload is not a whole number of samples
    #[error("unaligned sample data: {length} bytes is not a multiple of {bytes_per_sample}")]
    UnalignedSampleData {
        length: usize,
        bytes_per_sample: usize,
    },

    /// Bit depth outside the supported 8/16/24/32 set
    #[error("unsupported bit depth: {value}")]
    UnsupportedBitDepth { value: u16 },

    /// Initialization error
    #[error("initialization error: {0}")]
    Init(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
