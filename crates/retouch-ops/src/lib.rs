//! # retouch-ops
//!
//! Pixel operations over [`PixelBuffer`](retouch_core::PixelBuffer).
//!
//! Every operation reads an immutable buffer and returns a new one (or a
//! value such as a [`Histogram`]). Parameters are validated before any pixel
//! work starts.
//!
//! # Modules
//!
//! - [`resize`] - Nearest-neighbor resampling and view geometry
//! - [`histogram`] - Per-channel intensity counts
//! - [`curve`] - Two-point tone curve
//! - [`filter`] - 3x3 convolution filters
//!
//! # Example
//!
//! ```rust
//! use retouch_core::PixelBuffer;
//! use retouch_ops::{curve, resize, Histogram, ToneCurve};
//!
//! let src = PixelBuffer::filled(8, 8, [10, 20, 30, 255]).unwrap();
//! let small = resize::resize(&src, 4, 2).unwrap();
//! assert_eq!(small.dimensions(), (4, 2));
//!
//! let hist = Histogram::compute(&small);
//! assert_eq!(hist.r[10], 8);
//!
//! let flat = ToneCurve::new((0, 128).into(), (255, 128).into()).unwrap();
//! let out = curve::apply(&small, &flat).unwrap();
//! assert!(out.pixels().all(|p| p == [128, 128, 128, 255]));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Split row loops across a rayon pool (output is identical)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
mod error;
pub mod filter;
pub mod histogram;
pub mod resize;
mod rows;

pub use curve::{Axis, CurvePoint, Handle, ToneCurve};
pub use error::{OpsError, OpsResult};
pub use filter::Kernel;
pub use histogram::{Channel, Histogram};
