//! Texel coordinate wrapping.
//!
//! Texture lookups address texels with signed integer coordinates. A
//! [`WrapMode`] decides how a coordinate outside `[0, size)` maps back into
//! the image. [`WrapMode::Repeat`] is the default and tiles the image in both
//! directions, including negative coordinates:
//!
//! ```text
//! size = 4
//! coord:  -5 -4 -3 -2 -1  0  1  2  3  4  5  6  7  8
//! repeat:  3  0  1  2  3  0  1  2  3  0  1  2  3  0
//! mirror:  3  3  2  1  0  0  1  2  3  3  2  1  0  0
//! clamp:   0  0  0  0  0  0  1  2  3  3  3  3  3  3
//! ```

/// Texture wrap modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Repeat texture (tile).
    #[default]
    Repeat,
    /// Clamp to edge.
    Clamp,
    /// Mirror at edges.
    Mirror,
    /// Return black outside the image.
    Black,
}

/// Maps `c` into `[0, size)` according to `mode`.
///
/// Returns `None` when the coordinate has no texel: with [`WrapMode::Black`]
/// outside the image, or for any mode when `size == 0`.
///
/// # Example
///
/// ```rust
/// use texbuf_core::{WrapMode, wrap_coord};
///
/// assert_eq!(wrap_coord(5, 4, WrapMode::Repeat), Some(1));
/// assert_eq!(wrap_coord(-1, 4, WrapMode::Repeat), Some(3));
/// assert_eq!(wrap_coord(-1, 4, WrapMode::Black), None);
/// ```
#[inline]
pub fn wrap_coord(c: i64, size: u32, mode: WrapMode) -> Option<u32> {
    if size == 0 {
        return None;
    }
    let n = i64::from(size);
    let wrapped = match mode {
        WrapMode::Repeat => c.rem_euclid(n),
        WrapMode::Clamp => c.clamp(0, n - 1),
        WrapMode::Mirror => {
            let m = c.rem_euclid(2 * n);
            if m >= n { 2 * n - 1 - m } else { m }
        }
        WrapMode::Black => {
            if c < 0 || c >= n {
                return None;
            }
            c
        }
    };
    Some(wrapped as u32)
}
