//! WAV file reading
//!
//! Thin file-access layer over the pure header parser and PCM decoder.
//! All I/O and diagnostics live here; the core components never touch the
//! filesystem or the log.

use super::header::WavHeader;
use super::HEADER_LEN;
use crate::codec::{PcmDecoder, SampleBuffer};
use crate::error::{Error, Result};
use bytes::Bytes;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a WAV file and split it into a parsed header and its sample bytes
///
/// The whole file is read into memory; streaming larger-than-memory files
/// is out of scope. Bytes past the declared data chunk are ignored, since
/// the canonical layout ends at the data chunk.
pub fn read_file(path: &Path) -> Result<(WavHeader, Bytes)> {
    let buf = fs::read(path)?;

    let header = WavHeader::from_bytes(&buf)?;

    let declared = header.data_size as usize;
    let available = buf.len() - HEADER_LEN;
    if available < declared {
        return Err(Error::SampleLengthMismatch {
            declared: header.data_size,
            actual: available,
        });
    }
    if available > declared {
        debug!(
            path = %path.display(),
            trailing = available - declared,
            "ignoring bytes after data chunk"
        );
    }

    let data = Bytes::from(buf).slice(HEADER_LEN..HEADER_LEN + declared);
    Ok((header, data))
}

/// Decode a WAV file to a normalized sample buffer
pub fn decode_file(path: &Path) -> Result<SampleBuffer> {
    let (header, data) = read_file(path)?;

    debug!(
        path = %path.display(),
        sample_rate = header.format.sample_rate,
        channels = header.format.channels,
        bits_per_sample = header.format.bits_per_sample,
        data_size = header.data_size,
        "parsed WAV header"
    );

    let decoder = PcmDecoder::from_header(&header)?;
    decoder.decode(&data)
}

/// Decode many WAV files, one rayon task per file
///
/// Files are independent; a corrupt file fails on its own and never aborts
/// the rest of the batch. Results come back in input order.
pub fn decode_files(paths: &[PathBuf]) -> Vec<(PathBuf, Result<SampleBuffer>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), decode_file(path)))
        .collect()
}
