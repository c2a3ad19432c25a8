//! Citekit Core Library
//!
//! This crate provides the core types and conversion logic for the Citekit
//! bibliography converter. Microsoft Word bibliography documents
//! (`Sources.xml`) are decoded to a list of [`Source`] records before being
//! encoded to the target citation formats (BibTeX, RIS).

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;
pub mod types;

pub use decoder::{decoder_for_extension, decoder_for_mime_type, parse_sources, Decoder};
pub use encoder::{encoder_for_format, to_bibtex, to_ris, Encoder};
pub use error::{ConversionError, ParseError};
pub use table::{to_rows, SourceRow};
pub use types::{Name, Source};
