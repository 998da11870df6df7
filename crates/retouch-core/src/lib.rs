//! # retouch-core
//!
//! Core types for the retouch pixel pipeline.
//!
//! This crate provides the foundational types shared by every other retouch crate:
//!
//! - [`PixelBuffer`] - Immutable RGBA8 image buffer, the common currency of the pipeline
//! - [`Rgba`], [`Rgb`] - Plain pixel and color triples
//! - [`Error`], [`Result`] - Buffer construction and bounds errors
//!
//! ## Crate Structure
//!
//! ```text
//! retouch-core (this crate)
//!    ^
//!    |
//!    +-- retouch-color (XYZ/LAB conversion, contrast)
//!    +-- retouch-ops (resize, histogram, tone curve, filters)
//!    +-- retouch-cli (PNG host)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use retouch_core::PixelBuffer;
//!
//! let buf = PixelBuffer::filled(4, 2, [10, 20, 30, 255]).unwrap();
//! assert_eq!(buf.dimensions(), (4, 2));
//! assert_eq!(buf.pixel(3, 1).unwrap(), [10, 20, 30, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::PixelBuffer;
pub use pixel::{
    luminance_rec709, Rgb, Rgba, CHANNELS, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G,
    REC709_LUMA_R,
};

/// Prelude module for convenient imports.
///
/// ```
/// use retouch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::PixelBuffer;
    pub use crate::pixel::{Rgb, Rgba, CHANNELS};
}
