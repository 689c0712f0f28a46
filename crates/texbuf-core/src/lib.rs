//! # texbuf-core
//!
//! Floating-point RGB pixel buffer for rendering pipelines.
//!
//! This crate provides the in-memory side of texbuf:
//!
//! - [`PixelBuffer`] - Owned `width x height x 3` buffer of `f32` samples
//! - [`WrapMode`] - How out-of-range texel coordinates map back into the image
//! - [`Error`] / [`Result`] - Core error type
//!
//! A buffer serves both as a framebuffer (write samples with
//! [`PixelBuffer::value_mut`] or [`PixelBuffer::set_texel`]) and as a texture
//! source (read with [`PixelBuffer::texel`] and [`PixelBuffer::sample`]).
//!
//! ## Memory Layout
//!
//! Samples are stored row-major and interleaved by channel:
//!
//! ```text
//! index = 3 * (width * y + x) + channel
//!
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use texbuf_core::{PixelBuffer, Vec3};
//!
//! let mut buf = PixelBuffer::new(2, 2);
//! buf.set_texel(1, 1, Vec3::new(1.0, 0.5, 0.25));
//!
//! // Wraparound: (3, 3) lands on (1, 1)
//! assert_eq!(buf.texel(3, 3), Vec3::new(1.0, 0.5, 0.25));
//! ```
//!
//! PNG encoding and decoding live in the `texbuf-io` crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod wrap;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use wrap::{WrapMode, wrap_coord};

/// Color type returned by texel lookups and sampling.
pub use glam::Vec3;
