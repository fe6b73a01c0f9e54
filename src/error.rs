//! Error types for valuekit

use thiserror::Error;

/// Errors that can occur during encoding, decoding or formatting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Invalid encoded value: {0}")]
    InvalidEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
