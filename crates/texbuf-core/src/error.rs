//! Error types for texbuf-core operations.
//!
//! Only buffer construction can fail in the core: adopting caller-provided
//! samples whose length does not match the requested dimensions. Indexed
//! access is unchecked by contract and wraparound lookups cannot fail.
//!
//! # Usage
//!
//! ```rust
//! use texbuf_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_data(4, 4, vec![0.0; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a pixel buffer.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample data does not fit the requested dimensions.
    ///
    /// Returned when the supplied data length is not
    /// `width * height * CHANNELS`, or that product overflows.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
