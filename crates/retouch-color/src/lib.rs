//! # retouch-color
//!
//! Color math for sampled pixels.
//!
//! Everything here is stateless: free functions over value types plus a few
//! named constants (reference white, transform matrix).
//!
//! # Modules
//!
//! - [`transfer`] - sRGB encode/decode (IEC 61966-2-1)
//! - [`convert`] - sRGB → XYZ → CIELAB
//! - [`sample`] - [`ColorSample`] and picking colors out of a buffer
//! - [`contrast`] - WCAG relative luminance and contrast ratio
//!
//! # Example
//!
//! ```rust
//! use retouch_color::{contrast, ColorSample};
//!
//! let text = ColorSample::new(0, 0, 0);
//! let page = ColorSample::new(255, 255, 255);
//!
//! let lab = page.lab();
//! assert!((lab[0] - 100.0).abs() < 0.01);
//!
//! let result = contrast::evaluate(&text, &page);
//! assert!(result.is_contrast);
//! assert!((result.scale - 21.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod contrast;
pub mod convert;
mod error;
pub mod sample;
pub mod transfer;

pub use contrast::{ContrastResult, WcagLevel};
pub use convert::{rgb_to_lab, rgb_to_xyz, xyz_to_lab, D65_WHITE, SRGB_TO_XYZ};
pub use error::{ColorError, ColorResult};
pub use sample::{sample_at, ColorSample, PickedColor};
