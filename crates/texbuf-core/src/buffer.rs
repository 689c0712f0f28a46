//! Owned RGB pixel buffer.
//!
//! [`PixelBuffer`] owns a flat `Vec<f32>` of `width * height * 3` samples in
//! row-major, channel-interleaved order. It has three access paths:
//!
//! - **Raw**: [`value`](PixelBuffer::value) / [`value_mut`](PixelBuffer::value_mut)
//!   and `buf[(x, y, c)]`. No wraparound; the caller keeps coordinates in range.
//! - **Texel**: [`texel`](PixelBuffer::texel) takes signed coordinates and
//!   wraps them into the image, so it never fails.
//! - **Sample**: [`sample`](PixelBuffer::sample) takes normalized `(u, v)` and
//!   interpolates bilinearly between the four surrounding texels.
//!
//! # Example
//!
//! ```rust
//! use texbuf_core::{PixelBuffer, Vec3};
//!
//! let mut buf = PixelBuffer::new(2, 2);
//! buf.set_texel(0, 0, Vec3::new(1.0, 0.0, 0.0));
//! buf.set_texel(1, 0, Vec3::new(0.0, 1.0, 0.0));
//! buf.set_texel(0, 1, Vec3::new(0.0, 0.0, 1.0));
//! buf.set_texel(1, 1, Vec3::new(1.0, 1.0, 1.0));
//!
//! // Halfway between all four texels
//! let c = buf.sample(0.25, 0.25);
//! assert_eq!(c, Vec3::new(0.5, 0.5, 0.5));
//! ```

use std::ops::{Index, IndexMut};

use crate::wrap::{WrapMode, wrap_coord};
use crate::{Error, Result, Vec3};

/// Floating-point RGB image buffer.
///
/// A buffer is either empty (`0x0`, no storage) or holds exactly
/// `width * height * CHANNELS` samples. Samples are conventionally in
/// `[0, 1]` but any `f32` is allowed; clamping only happens when converting
/// to 8-bit.
///
/// Cloning is a deep copy. [`Clone::clone_from`] reuses the destination's
/// allocation when it is large enough.
#[derive(Debug, Default, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Number of interleaved channels per pixel (R, G, B).
    pub const CHANNELS: usize = 3;

    /// Creates a `width x height` buffer with every sample set to zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use texbuf_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(640, 480);
    /// assert_eq!(buf.len(), 640 * 480 * 3);
    /// assert!(buf.data().iter().all(|&s| s == 0.0));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; sample_count(width, height)],
        }
    }

    /// Creates an empty `0x0` buffer without allocating.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Adopts existing samples laid out as `3 * (width * y + x) + channel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = checked_sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a buffer from 8-bit RGB bytes, mapping each byte to `b / 255`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `bytes.len()` is not
    /// `width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let data = bytes.iter().map(|&b| f32::from(b) / 255.0).collect();
        Self::from_data(width, height, data)
    }

    /// Converts to 8-bit RGB bytes.
    ///
    /// Each sample is clamped to `[0, 1]`, scaled by 255 and truncated.
    /// NaN maps to 0.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&s| (s.clamp(0.0, 1.0) * 255.0) as u8)
            .collect()
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of samples (`width * height * 3`, or 0 when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer owns no sample storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the raw samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutably borrows the raw samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the buffer and returns its samples.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32, channel: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height && channel < Self::CHANNELS,
            "({x}, {y}, {channel}) out of range for {}x{}",
            self.width,
            self.height
        );
        Self::CHANNELS * (self.width as usize * y as usize + x as usize) + channel
    }

    /// Reads one sample without wraparound.
    ///
    /// The caller guarantees `x < width`, `y < height` and `channel < 3`.
    /// Debug builds assert this; release builds only panic when the flat
    /// index falls outside the storage.
    #[inline]
    pub fn value(&self, x: u32, y: u32, channel: usize) -> f32 {
        self.data[self.offset(x, y, channel)]
    }

    /// Mutable access to one sample without wraparound.
    ///
    /// Same contract as [`value`](Self::value).
    #[inline]
    pub fn value_mut(&mut self, x: u32, y: u32, channel: usize) -> &mut f32 {
        let i = self.offset(x, y, channel);
        &mut self.data[i]
    }

    /// Writes all three channels of the pixel at `(x, y)`.
    ///
    /// Same contract as [`value`](Self::value).
    #[inline]
    pub fn set_texel(&mut self, x: u32, y: u32, color: Vec3) {
        let i = self.offset(x, y, 0);
        self.data[i..i + Self::CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Vec3) {
        let rgb = color.to_array();
        for px in self.data.chunks_exact_mut(Self::CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }

    /// Returns the color at `(x, y)`, tiling the image in both directions.
    ///
    /// Coordinates outside `[0, width)` / `[0, height)` wrap by Euclidean
    /// modulo, so `texel(width, 0)` and `texel(-width, 0)` both equal
    /// `texel(0, 0)`. An empty buffer yields black.
    #[inline]
    pub fn texel(&self, x: i32, y: i32) -> Vec3 {
        self.texel_wrapped(x, y, WrapMode::Repeat)
    }

    /// Returns the color at `(x, y)` using an explicit wrap mode.
    ///
    /// Coordinates with no texel ([`WrapMode::Black`] outside the image, or
    /// any lookup on an empty buffer) yield black.
    pub fn texel_wrapped(&self, x: i32, y: i32, mode: WrapMode) -> Vec3 {
        self.fetch(i64::from(x), i64::from(y), mode)
    }

    fn fetch(&self, x: i64, y: i64, mode: WrapMode) -> Vec3 {
        match (
            wrap_coord(x, self.width, mode),
            wrap_coord(y, self.height, mode),
        ) {
            (Some(x), Some(y)) => {
                let i = self.offset(x, y, 0);
                Vec3::new(self.data[i], self.data[i + 1], self.data[i + 2])
            }
            _ => Vec3::ZERO,
        }
    }

    /// Bilinear texture lookup at normalized `(u, v)`, repeating at the edges.
    ///
    /// `(u, v)` are scaled to pixel space and the four texels around the
    /// result are blended by the fractional offsets. Texel `(x, y)` is hit
    /// exactly at `u = x / width, v = y / height`, and the blend is
    /// continuous across the wraparound seam.
    ///
    /// # Example
    ///
    /// ```rust
    /// use texbuf_core::{PixelBuffer, Vec3};
    ///
    /// let mut buf = PixelBuffer::new(4, 1);
    /// buf.set_texel(1, 0, Vec3::ONE);
    ///
    /// assert_eq!(buf.sample(0.25, 0.0), Vec3::ONE);
    /// assert_eq!(buf.sample(0.375, 0.0), Vec3::splat(0.5));
    /// ```
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        self.sample_wrapped(u, v, WrapMode::Repeat)
    }

    /// Bilinear texture lookup using an explicit wrap mode for the four taps.
    pub fn sample_wrapped(&self, u: f32, v: f32, mode: WrapMode) -> Vec3 {
        let u_pos = u * self.width as f32;
        let v_pos = v * self.height as f32;

        let u_floor = u_pos.floor();
        let v_floor = v_pos.floor();
        let uw = u_pos - u_floor;
        let vw = v_pos - v_floor;

        // i64 keeps pixel positions past i32::MAX on the right texel.
        let ui = u_floor as i64;
        let vi = v_floor as i64;
        let ui1 = ui.saturating_add(1);
        let vi1 = vi.saturating_add(1);

        let p00 = self.fetch(ui, vi, mode);
        let p01 = self.fetch(ui, vi1, mode);
        let p10 = self.fetch(ui1, vi, mode);
        let p11 = self.fetch(ui1, vi1, mode);

        (1.0 - uw) * (1.0 - vw) * p00
            + (1.0 - uw) * vw * p01
            + uw * (1.0 - vw) * p10
            + uw * vw * p11
    }
}

impl Clone for PixelBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.data.clone_from(&source.data);
    }
}

impl Index<(u32, u32, usize)> for PixelBuffer {
    type Output = f32;

    #[inline]
    fn index(&self, (x, y, channel): (u32, u32, usize)) -> &f32 {
        &self.data[self.offset(x, y, channel)]
    }
}

impl IndexMut<(u32, u32, usize)> for PixelBuffer {
    #[inline]
    fn index_mut(&mut self, (x, y, channel): (u32, u32, usize)) -> &mut f32 {
        self.value_mut(x, y, channel)
    }
}

#[inline]
fn sample_count(width: u32, height: u32) -> usize {
    width as usize * height as usize * PixelBuffer::CHANNELS
}

fn checked_sample_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(PixelBuffer::CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows usize"))
}
