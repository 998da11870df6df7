//! 3x3 convolution filters.
//!
//! # Kernels
//!
//! - [`Kernel::identity`] - Passes pixels through
//! - [`Kernel::box_blur`] - Simple average blur
//! - [`Kernel::gaussian`] - Binomial 1-2-1 blur
//! - [`Kernel::sharpen`] - Laplacian sharpen
//! - [`Kernel::edge_detect`] - Laplacian edges
//!
//! Sampling outside the image clamps to the nearest edge pixel. Results are
//! rounded and clamped to 0-255; alpha is copied.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::PixelBuffer;
//! use retouch_ops::filter::{convolve, Kernel};
//!
//! let src = PixelBuffer::filled(8, 8, [90, 90, 90, 255]).unwrap();
//! let blurred = convolve(&src, &Kernel::gaussian()).unwrap();
//! assert_eq!(blurred, src);
//! ```

use crate::rows::for_each_row;
use crate::{OpsError, OpsResult};
use retouch_core::image::byte_len;
use retouch_core::{PixelBuffer, CHANNELS};
use tracing::trace;

/// Convolution kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Row-major weights.
    pub data: Vec<f32>,
    /// Width (odd).
    pub width: usize,
    /// Height (odd).
    pub height: usize,
}

impl Kernel {
    /// Preset names accepted by [`Kernel::by_name`].
    pub const NAMES: [&'static str; 5] = ["identity", "box", "gaussian", "sharpen", "edge"];

    /// Creates a kernel from weights.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if a side is even or `data` does not
    /// hold `width * height` weights.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> OpsResult<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(OpsError::InvalidParameter(format!(
                "kernel dimensions must be odd, got {width}x{height}"
            )));
        }
        if data.len() != width * height {
            return Err(OpsError::InvalidParameter(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { data, width, height })
    }

    fn square3(data: [f32; 9]) -> Self {
        Self {
            data: data.to_vec(),
            width: 3,
            height: 3,
        }
    }

    /// Kernel that leaves the image unchanged.
    pub fn identity() -> Self {
        Self::square3([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// 3x3 average.
    pub fn box_blur() -> Self {
        Self::square3([1.0 / 9.0; 9])
    }

    /// 3x3 binomial blur (`[1 2 1]` outer product, divided by 16).
    pub fn gaussian() -> Self {
        let w = |n: f32| n / 16.0;
        Self::square3([
            w(1.0), w(2.0), w(1.0),
            w(2.0), w(4.0), w(2.0),
            w(1.0), w(2.0), w(1.0),
        ])
    }

    /// Laplacian sharpen. Weights sum to 1.
    pub fn sharpen() -> Self {
        Self::square3([
            0.0, -1.0, 0.0,
            -1.0, 5.0, -1.0,
            0.0, -1.0, 0.0,
        ])
    }

    /// Laplacian edge detector. Weights sum to 0.
    pub fn edge_detect() -> Self {
        Self::square3([
            0.0, -1.0, 0.0,
            -1.0, 4.0, -1.0,
            0.0, -1.0, 0.0,
        ])
    }

    /// Looks up a preset by name, ignoring case.
    ///
    /// ```rust
    /// use retouch_ops::Kernel;
    ///
    /// assert_eq!(Kernel::by_name("Gaussian").unwrap(), Kernel::gaussian());
    /// assert!(Kernel::by_name("emboss").is_err());
    /// ```
    pub fn by_name(name: &str) -> OpsResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "identity" => Ok(Self::identity()),
            "box" | "box_blur" | "blur" => Ok(Self::box_blur()),
            "gaussian" => Ok(Self::gaussian()),
            "sharpen" => Ok(Self::sharpen()),
            "edge" | "edge_detect" => Ok(Self::edge_detect()),
            _ => Err(OpsError::InvalidParameter(format!(
                "unknown kernel '{name}', expected one of: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }

    /// Half-size in x and y.
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }
}

/// Convolves R, G and B of `buffer` with `kernel`.
///
/// A zero-pixel buffer yields a zero-pixel buffer of the same dimensions.
pub fn convolve(buffer: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    let (w, h) = buffer.dimensions();
    trace!(width = w, height = h, kernel_w = kernel.width, kernel_h = kernel.height, "convolve");

    if buffer.is_empty() {
        return Ok(PixelBuffer::new(w, h)?);
    }

    let (rx, ry) = kernel.radius();
    let (wi, hi) = (w as isize, h as isize);
    let src = buffer.data();
    let stride = buffer.stride();
    let mut out = vec![0u8; byte_len(w, h)?];

    for_each_row(&mut out, stride, |y, row| {
        for (x, dst) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let mut sums = [0.0f32; 3];

            for ky in 0..kernel.height {
                let sy = (y as isize + ky as isize - ry as isize).clamp(0, hi - 1) as usize;
                for kx in 0..kernel.width {
                    let sx = (x as isize + kx as isize - rx as isize).clamp(0, wi - 1) as usize;
                    let kw = kernel.data[ky * kernel.width + kx];
                    let i = sy * stride + sx * CHANNELS;
                    for (sum, &v) in sums.iter_mut().zip(&src[i..i + 3]) {
                        *sum += v as f32 * kw;
                    }
                }
            }

            for (d, sum) in dst.iter_mut().zip(sums) {
                *d = sum.round().clamp(0.0, 255.0) as u8;
            }
            let i = y * stride + x * CHANNELS;
            dst[3] = src[i + 3];
        }
    });

    Ok(PixelBuffer::from_data(w, h, out)?)
}
