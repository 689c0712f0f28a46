//! PNG format support.
//!
//! Reads and writes 8-bit RGB PNG files for [`PixelBuffer`].
//!
//! # Features
//!
//! - 8-bit RGB output with optional sRGB chunk
//! - Compression level control
//! - Decoding of palette, grayscale, 16-bit and alpha images, normalized to RGB
//! - Decoder memory limit
//!
//! # Example
//!
//! ```rust,no_run
//! use texbuf_io::png::{read, write};
//!
//! let texture = read("input.png")?;
//! write("output.png", &texture)?;
//! # Ok::<(), texbuf_io::IoError>(())
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;
use texbuf_core::PixelBuffer;

/// Default decoder memory limit: 64 MiB.
pub const DEFAULT_MAX_DECODE_BYTES: usize = 64 * 1024 * 1024;

/// PNG compression effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Fast encoding, larger files.
    Fast,
    /// The codec's balanced default.
    #[default]
    Default,
}

impl From<Compression> for png::Compression {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::default(),
        }
    }
}

/// PNG reader/writer with encoding and decoding options.
///
/// # Example
///
/// ```rust,no_run
/// use texbuf_io::{Compression, ImageReader, PngCodec};
///
/// let codec = PngCodec::new()
///     .with_compression(Compression::Fast)
///     .with_max_decode_bytes(16 * 1024 * 1024);
/// let texture = codec.read("input.png")?;
/// # Ok::<(), texbuf_io::IoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PngCodec {
    compression: Compression,
    srgb_chunk: bool,
    max_decode_bytes: usize,
}

impl Default for PngCodec {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            srgb_chunk: true,
            max_decode_bytes: DEFAULT_MAX_DECODE_BYTES,
        }
    }
}

impl PngCodec {
    /// Creates a codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression effort used when writing.
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Controls whether written files carry an sRGB chunk.
    pub fn with_srgb_chunk(mut self, enabled: bool) -> Self {
        self.srgb_chunk = enabled;
        self
    }

    /// Sets the maximum number of bytes the decoder may allocate.
    pub fn with_max_decode_bytes(mut self, bytes: usize) -> Self {
        self.max_decode_bytes = bytes;
        self
    }

    /// Compression effort used when writing.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Decodes a PNG stream into a pixel buffer.
    pub fn decode<R: BufRead + Seek>(&self, reader: R) -> IoResult<PixelBuffer> {
        let mut limits = png::Limits::default();
        limits.bytes = self.max_decode_bytes;
        let mut decoder = png::Decoder::new_with_limits(reader, limits);
        // Palette and sub-byte gray expand to 8 bits, 16-bit drops to 8.
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let bytes = &buf[..info.buffer_size()];
        let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgb, png::BitDepth::Eight) => bytes.to_vec(),
            (png::ColorType::Rgba, png::BitDepth::Eight) => bytes
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                bytes.iter().flat_map(|&g| [g, g, g]).collect()
            }
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => bytes
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0]])
                .collect(),
            // Not produced once EXPAND | STRIP_16 is set; only 8-bit cases remain.
            (color_type, bit_depth) => {
                return Err(IoError::UnsupportedBitDepth(format!(
                    "{:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        Ok(PixelBuffer::from_rgb8(info.width, info.height, &rgb)?)
    }

    /// Encodes a pixel buffer as 8-bit RGB PNG into `writer`.
    ///
    /// Samples are clamped to `[0, 1]` and truncated to bytes.
    pub fn encode<W: Write>(&self, writer: W, image: &PixelBuffer) -> IoResult<()> {
        ensure_encodable(image)?;

        let mut encoder = png::Encoder::new(writer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.compression.into());
        if self.srgb_chunk {
            encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);
        }

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(&image.to_rgb8())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;

        Ok(())
    }
}

impl ImageReader for PngCodec {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let path = path.as_ref();
        let result = File::open(path)
            .map_err(IoError::from)
            .and_then(|file| self.decode(BufReader::new(file)));
        match &result {
            Ok(image) => tracing::debug!(
                "decoded {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            ),
            Err(e) => tracing::error!("png decode of {} failed: {}", path.display(), e),
        }
        result
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        self.decode(Cursor::new(data))
            .inspect_err(|e| tracing::error!("png decode from memory failed: {}", e))
    }
}

impl ImageWriter for PngCodec {
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()> {
        let path = path.as_ref();
        let result = ensure_encodable(image)
            .and_then(|()| File::create(path).map_err(IoError::from))
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                self.encode(&mut writer, image)?;
                writer.flush()?;
                Ok(())
            });
        match &result {
            Ok(()) => tracing::debug!(
                "encoded {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            ),
            Err(e) => tracing::error!("png encode of {} failed: {}", path.display(), e),
        }
        result
    }

    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(&mut out, image)
            .inspect_err(|e| tracing::error!("png encode to memory failed: {}", e))?;
        Ok(out)
    }
}

/// Reads a PNG file with default options.
///
/// # Example
///
/// ```rust,no_run
/// use texbuf_io::png;
///
/// let texture = png::read("input.png")?;
/// # Ok::<(), texbuf_io::IoError>(())
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    PngCodec::new().read(path)
}

/// Writes a PNG file with default options.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    PngCodec::new().write(path, image)
}

fn ensure_encodable(image: &PixelBuffer) -> IoResult<()> {
    if image.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode empty {}x{} buffer",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use texbuf_core::Vec3;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().expect("header");
            writer.write_image_data(data).expect("data");
            writer.finish().expect("finish");
        }
        out
    }

    #[test]
    fn test_roundtrip_memory() {
        let width = 32;
        let height = 16;
        let mut image = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.set_texel(
                    x,
                    y,
                    Vec3::new(x as f32 / 31.0, y as f32 / 15.0, 0.5),
                );
            }
        }

        let codec = PngCodec::new();
        let bytes = codec.write_to_memory(&image).expect("encode");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let loaded = codec.read_from_memory(&bytes).expect("decode");
        assert_eq!(loaded.dimensions(), (width, height));
        for (a, b) in image.data().iter().zip(loaded.data()) {
            assert_abs_diff_eq!(a, b, epsilon = 1.0 / 255.0 + 1e-6);
        }
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let image = PixelBuffer::from_data(1, 1, vec![-2.0, 0.5, 7.0]).unwrap();
        let codec = PngCodec::new();
        let loaded = codec
            .read_from_memory(&codec.write_to_memory(&image).unwrap())
            .unwrap();
        assert_eq!(loaded.value(0, 0, 0), 0.0);
        assert_abs_diff_eq!(loaded.value(0, 0, 1), 127.0 / 255.0, epsilon = 1e-6);
        assert_eq!(loaded.value(0, 0, 2), 1.0);
    }

    #[test]
    fn test_decode_grayscale_to_rgb() {
        let bytes = encode_raw(2, 1, png::ColorType::Grayscale, png::BitDepth::Eight, &[0, 255]);
        let image = PngCodec::new().read_from_memory(&bytes).unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.data(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let bytes = encode_raw(
            1,
            2,
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            &[255, 0, 0, 10, 0, 255, 0, 200],
        );
        let image = PngCodec::new().read_from_memory(&bytes).unwrap();
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.data(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_decode_sixteen_bit_is_stripped() {
        // Big-endian 16-bit RGB: high bytes 0xFF, 0x00, 0x80
        let bytes = encode_raw(
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Sixteen,
            &[0xFF, 0xFF, 0x00, 0x10, 0x80, 0x00],
        );
        let image = PngCodec::new().read_from_memory(&bytes).unwrap();
        assert_eq!(image.value(0, 0, 0), 1.0);
        assert_eq!(image.value(0, 0, 1), 0.0);
        assert_abs_diff_eq!(image.value(0, 0, 2), 128.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = PngCodec::new().read_from_memory(b"definitely not a png").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_decode_limit_rejects_large_image() {
        let bytes = PngCodec::new().write_to_memory(&PixelBuffer::new(64, 64)).unwrap();
        let err = PngCodec::new()
            .with_max_decode_bytes(16)
            .read_from_memory(&bytes)
            .unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_default_decode_limit_accepts_image() {
        let bytes = PngCodec::new().write_to_memory(&PixelBuffer::new(64, 64)).unwrap();
        let image = PngCodec::new().read_from_memory(&bytes).unwrap();
        assert_eq!(image.dimensions(), (64, 64));
    }

    #[test]
    fn test_encode_empty_fails() {
        let err = PngCodec::new().write_to_memory(&PixelBuffer::empty()).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }

    #[test]
    fn test_options() {
        let codec = PngCodec::new();
        assert_eq!(codec.compression(), Compression::Default);

        let image = PixelBuffer::new(8, 8);
        let fast = codec.clone().with_compression(Compression::Fast).with_srgb_chunk(false);
        assert_eq!(fast.compression(), Compression::Fast);

        let bytes = fast.write_to_memory(&image).unwrap();
        assert!(!bytes.windows(4).any(|w| w == b"sRGB"));
        let bytes = codec.write_to_memory(&image).unwrap();
        assert!(bytes.windows(4).any(|w| w == b"sRGB"));
    }
}
