//! Convert command implementation

use anyhow::{Context, Result};
use citekit_core::decoder::decoder_for_extension;
use citekit_core::encoder::encoder_for_format;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Convert a Word bibliography file to the requested citation format
pub fn convert(input: &str, output: Option<&str>, format: &str) -> Result<()> {
    let input_path = Path::new(input);

    // Get file extension
    let ext = input_path
        .extension()
        .and_then(|e| e.to_str())
        .context("Could not determine input file extension")?;

    // Get decoder
    let decoder = decoder_for_extension(ext)
        .with_context(|| format!("No decoder available for .{} files", ext))?;

    // Get encoder
    let encoder = encoder_for_format(format)
        .with_context(|| format!("No encoder available for {} format", format))?;

    let output = output.map(str::to_string).unwrap_or_else(|| {
        format!("sources_converted.{}", encoder.file_extension())
    });
    let output_path = Path::new(&output);

    // Set up progress bar with animation
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    // Read and decode input file
    pb.set_message("Reading input file...");
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open input file: {}", input))?;
    let mut reader = BufReader::new(file);

    pb.set_message("Decoding...");
    let sources = decoder
        .decode(&mut reader)
        .with_context(|| format!("Failed to decode {}", input))?;

    tracing::info!("Decoded {} sources from {}", sources.len(), input);

    if sources.is_empty() {
        pb.finish_with_message(format!("No sources found in {}; nothing to write", input));
        println!("No sources found in {}", input);
        return Ok(());
    }

    // Encode
    pb.set_message(format!("Encoding to {}...", encoder.format_name()));
    let mut output_file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output))?;

    encoder
        .encode(&sources, &mut output_file)
        .with_context(|| format!("Failed to encode to {}", format))?;

    pb.finish_with_message(format!(
        "Converted {} sources to {} -> {}",
        sources.len(),
        encoder.format_name(),
        output
    ));
    println!("Converted {} sources -> {}", sources.len(), output);

    Ok(())
}
