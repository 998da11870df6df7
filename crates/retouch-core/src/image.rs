//! RGBA8 pixel buffer.
//!
//! [`PixelBuffer`] is the value every pipeline stage consumes and produces.
//! It is an immutable view over a flat byte array:
//!
//! ```text
//! Memory: [R G B A R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Row-major, top-left origin, `stride = width * 4`, no padding.
//!
//! # Ownership
//!
//! Pixel data sits behind an [`Arc`], so cloning a buffer is cheap and
//! never copies pixels. Pipeline operations never mutate a buffer in place;
//! they build a fresh `Vec<u8>` and wrap it with [`PixelBuffer::from_data`].
//!
//! # Usage
//!
//! ```rust
//! use retouch_core::PixelBuffer;
//!
//! let buf = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 255]).unwrap();
//! assert_eq!(buf.pixel(2, 1).unwrap(), [2, 1, 0, 255]);
//! assert_eq!(buf.pixels().count(), 6);
//! ```

use crate::{Error, Result, Rgba, CHANNELS};
use std::fmt;
use std::sync::Arc;

/// Immutable RGBA8 image buffer.
///
/// Invariant: `data.len() == width * height * 4`. Every constructor checks it.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixel data (Arc for cheap cloning)
    data: Arc<Vec<u8>>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

/// Byte length of a `width x height` RGBA8 buffer, guarding against overflow.
pub fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimension(width, height))
}

impl PixelBuffer {
    /// Creates a transparent black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            data: Arc::new(vec![0; len]),
            width,
            height,
        })
    }

    /// Creates a zero-pixel buffer.
    pub fn empty() -> Self {
        Self {
            data: Arc::new(Vec::new()),
            width: 0,
            height: 0,
        }
    }

    /// Wraps existing RGBA8 data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_data(1, 1, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(buf.data(), &[1, 2, 3, 4]);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::buffer_size(width, height, expected, data.len()));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Creates a buffer where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: Rgba) -> Result<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&rgba);
        }
        Self::from_data(width, height, data)
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::from_data(width, height, data)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// `true` when the buffer holds no pixels (either side is zero).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.data[i..i + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Byte offset of pixel `(x, y)`. Does not check bounds.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * CHANNELS
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Iterates rows as byte slices of length [`stride`](Self::stride).
    ///
    /// A zero-width buffer yields no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let stride = self.stride().max(1);
        self.data.chunks_exact(stride)
    }

    /// Unwraps the pixel data, copying only if the storage is shared.
    pub fn into_vec(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
