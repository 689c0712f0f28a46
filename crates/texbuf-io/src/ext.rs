//! PNG convenience methods on [`PixelBuffer`].

use crate::{IoResult, png};
use std::path::Path;
use texbuf_core::PixelBuffer;

/// Saves and loads a [`PixelBuffer`] as PNG with default codec options.
///
/// Failures are returned, never swallowed. A failed
/// [`load_png`](PngExt::load_png) leaves the buffer exactly as it was.
///
/// # Example
///
/// ```rust,no_run
/// use texbuf_core::PixelBuffer;
/// use texbuf_io::PngExt;
///
/// let mut texture = PixelBuffer::default();
/// if let Err(e) = texture.load_png("missing.png") {
///     eprintln!("keeping previous texture: {e}");
/// }
/// ```
pub trait PngExt: Sized {
    /// Reads a PNG file into a new buffer.
    fn from_png<P: AsRef<Path>>(path: P) -> IoResult<Self>;

    /// Encodes the buffer as an 8-bit RGB PNG file.
    fn save_png<P: AsRef<Path>>(&self, path: P) -> IoResult<()>;

    /// Replaces dimensions and samples with the decoded PNG file.
    fn load_png<P: AsRef<Path>>(&mut self, path: P) -> IoResult<()>;
}

impl PngExt for PixelBuffer {
    fn from_png<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        png::read(path)
    }

    fn save_png<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        png::write(path, self)
    }

    fn load_png<P: AsRef<Path>>(&mut self, path: P) -> IoResult<()> {
        *self = png::read(path)?;
        Ok(())
    }
}
