//! I/O traits for pixel buffer readers and writers.

use crate::IoResult;
use std::path::Path;
use texbuf_core::PixelBuffer;

/// Trait for pixel buffer readers.
///
/// # Example
///
/// ```rust,no_run
/// use texbuf_io::{ImageReader, PngCodec};
///
/// let buf = PngCodec::new().read("albedo.png")?;
/// # Ok::<(), texbuf_io::IoError>(())
/// ```
pub trait ImageReader {
    /// Reads a pixel buffer from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer>;

    /// Reads a pixel buffer from encoded bytes in memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer>;
}

/// Trait for pixel buffer writers.
pub trait ImageWriter {
    /// Writes a pixel buffer to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()>;

    /// Encodes a pixel buffer to bytes in memory.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>>;
}
