//! wavedec CLI
//!
//! A command-line tool for inspecting and decoding canonical PCM WAV
//! files. Decoded samples can be dumped as little-endian f32 for an
//! external analysis or visualization tool.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use wavedec_lib::format::wav::{self, WavHeader};
use wavedec_lib::{init, Config, Result};

#[derive(Parser)]
#[command(name = "wavedec")]
#[command(about = "wavedec - canonical PCM WAV decoding", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Number of threads to use for batch decoding
    #[arg(short = 't', long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header information for a WAV file
    Info {
        /// Input file path
        input: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file to normalized samples
    Decode {
        /// Input file path
        input: PathBuf,

        /// Write decoded samples as little-endian f32 to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode many WAV files in parallel
    Batch {
        /// Input file paths
        inputs: Vec<PathBuf>,
    },
}

/// Header summary for the `info` command
#[derive(Serialize)]
struct HeaderReport {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
    data_size: u32,
    frames: u64,
    duration_seconds: f64,
}

impl From<&WavHeader> for HeaderReport {
    fn from(header: &WavHeader) -> Self {
        HeaderReport {
            audio_format: header.format.format_tag.into(),
            channels: header.format.channels,
            sample_rate: header.format.sample_rate,
            byte_rate: header.format.byte_rate,
            block_align: header.format.block_align,
            bits_per_sample: header.format.bits_per_sample,
            data_size: header.data_size,
            frames: header.num_samples(),
            duration_seconds: header.duration_seconds(),
        }
    }
}

fn cmd_info(input: &PathBuf, json: bool) -> Result<()> {
    let (header, _data) = wav::read_file(input)?;
    let report = HeaderReport::from(&header);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        );
    } else {
        println!("File:            {}", input.display());
        println!("Format:          PCM (audio_format={})", report.audio_format);
        println!("Channels:        {}", report.channels);
        println!("Sample rate:     {} Hz", report.sample_rate);
        println!("Byte rate:       {} B/s", report.byte_rate);
        println!("Block align:     {}", report.block_align);
        println!("Bits per sample: {}", report.bits_per_sample);
        println!("Data size:       {} bytes", report.data_size);
        println!("Frames:          {}", report.frames);
        println!("Duration:        {:.3}s", report.duration_seconds);
    }

    Ok(())
}

fn cmd_decode(input: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let buffer = wav::decode_file(input)?;

    println!(
        "{}: {} samples, {} frames, {} ch, {} Hz, {:.3}s, peak {:.6}",
        input.display(),
        buffer.len(),
        buffer.frames(),
        buffer.channels(),
        buffer.sample_rate(),
        buffer.duration_seconds(),
        buffer.peak()
    );

    if let Some(path) = output {
        let mut raw = Vec::with_capacity(buffer.len() * 4);
        for sample in buffer.samples() {
            raw.extend_from_slice(&sample.to_le_bytes());
        }
        let mut file = std::fs::File::create(path)?;
        file.write_all(&raw)?;
        info!(path = %path.display(), bytes = raw.len(), "wrote f32le samples");
    }

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf]) -> Result<()> {
    let results = wav::decode_files(inputs);

    let mut failed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(buffer) => println!(
                "ok    {} ({} frames, {:.3}s)",
                path.display(),
                buffer.frames(),
                buffer.duration_seconds()
            ),
            Err(e) => {
                failed += 1;
                println!("error {}: {}", path.display(), e);
            }
        }
    }
    println!("{} decoded, {} failed", results.len() - failed, failed);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init(Config {
        max_threads: cli.threads,
        verbose: cli.verbose,
        debug: cli.debug,
    }) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Commands::Info { input, json } => cmd_info(input, *json),
        Commands::Decode { input, output } => cmd_decode(input, output.as_ref()),
        Commands::Batch { inputs } => cmd_batch(inputs),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
