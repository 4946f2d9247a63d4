//! wavedec - canonical PCM WAV decoding in pure Rust
//!
//! wavedec parses the fixed 44-byte RIFF/WAV header, validates its
//! structural invariants, and converts raw PCM sample bytes into
//! normalized floating-point audio in [-1.0, 1.0]. Rendering, plotting,
//! and spectral analysis are external consumers of the decoded buffer.
//!
//! # Architecture
//!
//! - `format`: container handling (header layout, parsing, file reading)
//! - `codec`: PCM sample decoding and the decoded sample buffer
//! - `util`: common small types (sample formats)
//! - `error`: the crate-wide error type
//!
//! Header parsing and sample decoding are pure, synchronous functions with
//! no shared state; callers wanting throughput parallelize per file, which
//! is what [`format::wav::decode_files`] does.

pub mod codec;
pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};

/// wavedec version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;

/// Configuration for the wavedec library
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of threads to use for batch decoding
    pub max_threads: Option<usize>,
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_threads: None,
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize the wavedec library with the given configuration
pub fn init(config: Config) -> Result<()> {
    // Initialize thread pool if max_threads is specified
    if let Some(threads) = config.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| Error::Init(format!("failed to initialize thread pool: {}", e)))?;
    }

    // Initialize logging
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }

    Ok(())
}
