//! Decoders for converting input documents to source records

mod word_xml;

pub use word_xml::{parse_sources, WordXmlDecoder, BIBLIOGRAPHY_NS};

use crate::error::ParseError;
use crate::types::Source;
use std::io::Read;

/// Trait for decoding bibliography documents into source records
pub trait Decoder: Send + Sync {
    /// Decode sources from a reader
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Source>, ParseError>;

    /// File extensions this decoder supports
    fn supported_extensions(&self) -> &[&str];

    /// MIME types this decoder supports
    fn supported_mime_types(&self) -> &[&str];
}

/// Get the appropriate decoder for a file extension
pub fn decoder_for_extension(ext: &str) -> Option<Box<dyn Decoder>> {
    match ext.to_lowercase().as_str() {
        "xml" => Some(Box::new(WordXmlDecoder::new())),
        _ => None,
    }
}

/// Get the appropriate decoder for a MIME type
pub fn decoder_for_mime_type(mime: &str) -> Option<Box<dyn Decoder>> {
    match mime {
        "text/xml" | "application/xml" => Some(Box::new(WordXmlDecoder::new())),
        _ => None,
    }
}
