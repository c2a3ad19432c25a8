//! Encoders for converting source records to citation formats

mod bibtex;
mod ris;

pub use bibtex::{to_bibtex, BibtexEncoder};
pub use ris::{to_ris, RisEncoder};

use crate::error::ConversionError;
use crate::types::Source;
use std::io::Write;

/// Trait for encoding source lists to output formats
pub trait Encoder: Send + Sync {
    /// Encode sources to a writer
    fn encode(&self, sources: &[Source], writer: &mut dyn Write) -> Result<(), ConversionError>;

    /// Format name (e.g., "BibTeX", "RIS")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for the converted text
    fn mime_type(&self) -> &str;
}

/// Get an encoder by format name
pub fn encoder_for_format(format: &str) -> Option<Box<dyn Encoder>> {
    match format.to_lowercase().as_str() {
        "bib" | "bibtex" => Some(Box::new(BibtexEncoder::new())),
        "ris" => Some(Box::new(RisEncoder::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_by_format() {
        assert_eq!(encoder_for_format("bib").unwrap().file_extension(), "bib");
        assert_eq!(encoder_for_format("bibtex").unwrap().file_extension(), "bib");
        assert_eq!(encoder_for_format("RIS").unwrap().file_extension(), "ris");
        assert!(encoder_for_format("endnote").is_none());
    }

    #[test]
    fn test_mime_types_are_plain_text() {
        assert_eq!(encoder_for_format("bib").unwrap().mime_type(), "text/plain");
        assert_eq!(encoder_for_format("ris").unwrap().mime_type(), "text/plain");
    }
}
