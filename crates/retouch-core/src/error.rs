//! Error types for retouch-core operations.
//!
//! The [`Error`] enum covers the ways a [`crate::PixelBuffer`] can be
//! constructed or accessed incorrectly:
//! - Data length not matching `width * height * 4`
//! - Pixel coordinates outside the buffer
//! - Dimensions that overflow the addressable size
//!
//! # Usage
//!
//! ```rust
//! use retouch_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! assert!(check(5, 0, 4, 4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by pixel buffer construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raw data length does not match the declared dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_core::PixelBuffer;
    ///
    /// let err = PixelBuffer::from_data(2, 2, vec![0; 15]).unwrap_err();
    /// assert!(err.to_string().contains("expected 16"));
    /// ```
    #[error("buffer size mismatch for {width}x{height}: expected {expected} bytes, got {got}")]
    BufferSize {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Bytes required by the dimensions
        expected: usize,
        /// Bytes actually supplied
        got: usize,
    },

    /// Pixel coordinates are outside the buffer.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Dimensions cannot be represented in memory.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(width: u32, height: u32, expected: usize, got: usize) -> Self {
        Self::BufferSize {
            width,
            height,
            expected,
            got,
        }
    }

    /// Creates an [`Error::InvalidDimension`] error.
    #[inline]
    pub fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_buffer_size() {
        let err = Error::buffer_size(2, 2, 16, 12);
        assert_eq!(
            err.to_string(),
            "buffer size mismatch for 2x2: expected 16 bytes, got 12"
        );
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_helpers_cover_every_variant() {
        let errs = [
            Error::out_of_bounds(1, 1, 1, 1),
            Error::buffer_size(1, 1, 4, 0),
            Error::invalid_dimension(0, 0),
        ];
        for err in errs {
            // exhaustive: a new variant needs a helper and a case here
            match err {
                Error::OutOfBounds { .. } | Error::BufferSize { .. } | Error::InvalidDimension { .. } => {}
            }
        }
    }

    #[test]
    fn test_invalid_dimension() {
        let err = Error::invalid_dimension(0, 10);
        assert_eq!(err.to_string(), "invalid dimensions: 0x10");
    }
}
