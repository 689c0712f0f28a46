//! # texbuf-io
//!
//! PNG encoding and decoding for [`texbuf_core::PixelBuffer`].
//!
//! Files are always 8-bit RGB. On write, samples are clamped to `[0, 1]`
//! and scaled to bytes; on read, any PNG the codec understands (palette,
//! grayscale, 16-bit, with or without alpha) is normalized to 8-bit RGB and
//! mapped back to floats by `b / 255`. Alpha is dropped.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use texbuf_core::PixelBuffer;
//! use texbuf_io::PngExt;
//!
//! let mut frame = PixelBuffer::new(320, 240);
//! // ... render into `frame` ...
//! frame.save_png("frame.png")?;
//!
//! let mut texture = PixelBuffer::default();
//! texture.load_png("frame.png")?;
//! assert_eq!(texture.dimensions(), (320, 240));
//! # Ok::<(), texbuf_io::IoError>(())
//! ```
//!
//! # Options
//!
//! ```rust,no_run
//! use texbuf_io::{Compression, ImageWriter, PngCodec};
//! # let frame = texbuf_core::PixelBuffer::new(4, 4);
//!
//! let codec = PngCodec::new()
//!     .with_compression(Compression::Fast)
//!     .with_srgb_chunk(false);
//! codec.write("preview.png", &frame)?;
//! # Ok::<(), texbuf_io::IoError>(())
//! ```
//!
//! # Errors and Logging
//!
//! Codec failures are returned as [`IoError`] and also reported through
//! [`tracing`] at `error` level; successful reads and writes are traced at
//! `debug` level. Install a subscriber in the application to see them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod ext;
mod traits;
pub mod png;

pub use error::{IoError, IoResult};
pub use ext::PngExt;
pub use traits::{ImageReader, ImageWriter};
pub use crate::png::{Compression, PngCodec, read, write};
