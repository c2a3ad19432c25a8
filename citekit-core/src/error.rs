//! Error types for Citekit Core

use thiserror::Error;

/// Errors that occur while decoding an input document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),
}

/// Errors that occur while writing converted output
///
/// Serialization itself is total; only the output sink can fail.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Write failed: {0}")]
    WriteFailed(String),
}
