//! Container format handling
//!
//! This module provides functionality for reading canonical RIFF/WAV
//! containers. The header parser is a pure function over a byte buffer;
//! file access lives in the reader layer.

pub mod wav;

pub use wav::{FormatTag, WavFormat, WavHeader};
