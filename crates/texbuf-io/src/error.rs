//! Error types for PNG I/O.
//!
//! Every codec failure surfaces as an [`IoError`]; nothing is swallowed.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error reported by the PNG codec.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error reported by the PNG codec.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded color type / bit depth combination that cannot become RGB.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoded pixels do not fit a pixel buffer.
    #[error(transparent)]
    Core(#[from] texbuf_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
