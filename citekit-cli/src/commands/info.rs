//! Info command implementation

use anyhow::{Context, Result};
use citekit_core::decoder::decoder_for_extension;
use citekit_core::table::{to_rows, SourceRow};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Source list summary output
#[derive(Serialize)]
struct SourcesInfo {
    count: usize,
    rows: Vec<SourceRow>,
}

/// Display information about the sources in a bibliography file
pub fn info(input: &str, json: bool) -> Result<()> {
    let input_path = Path::new(input);

    // Get file extension
    let ext = input_path
        .extension()
        .and_then(|e| e.to_str())
        .context("Could not determine input file extension")?;

    // Get decoder
    let decoder = decoder_for_extension(ext)
        .with_context(|| format!("No decoder available for .{} files", ext))?;

    // Read and decode
    let file =
        File::open(input_path).with_context(|| format!("Failed to open input file: {}", input))?;
    let mut reader = BufReader::new(file);

    let sources = decoder
        .decode(&mut reader)
        .with_context(|| format!("Failed to decode {}", input))?;

    let info = SourcesInfo {
        count: sources.len(),
        rows: to_rows(&sources),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Sources:     {}", info.count);
        for row in &info.rows {
            println!();
            println!("Key:         {}", row.key);
            if !row.source_type.is_empty() {
                println!("Type:        {}", row.source_type);
            }
            if !row.title.is_empty() {
                println!("Title:       {}", row.title);
            }
            if !row.authors.is_empty() {
                println!("Authors:     {}", row.authors);
            }
            if !row.year.is_empty() {
                println!("Year:        {}", row.year);
            }
            if !row.journal.is_empty() {
                println!("Journal:     {}", row.journal);
            }
            if !row.url.is_empty() {
                println!("URL:         {}", row.url);
            }
        }
    }

    Ok(())
}
