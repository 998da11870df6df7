//! Sampled colors.
//!
//! A [`ColorSample`] is the transient value a pixel picker produces: an sRGB
//! triple plus its derived XYZ and LAB coordinates. [`PickedColor`] pairs a
//! sample with the pixel it came from.

use crate::contrast::relative_luminance;
use crate::convert::{rgb_to_lab, rgb_to_xyz};
use crate::transfer::linearize_rgb;
use crate::{ColorError, ColorResult};
use retouch_core::{PixelBuffer, Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color sampled from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorSample {
    rgb: Rgb,
}

impl ColorSample {
    /// Creates a sample from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Creates a sample from an RGB triple.
    #[inline]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Creates a sample from an RGBA pixel, dropping alpha.
    #[inline]
    pub const fn from_rgba(px: Rgba) -> Self {
        Self {
            rgb: [px[0], px[1], px[2]],
        }
    }

    /// The sRGB triple.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Linear-light RGB in [0, 1].
    #[inline]
    pub fn linear(&self) -> [f64; 3] {
        linearize_rgb(self.rgb)
    }

    /// CIE XYZ (D65, 0-100).
    #[inline]
    pub fn xyz(&self) -> [f64; 3] {
        rgb_to_xyz(self.rgb)
    }

    /// CIELAB.
    #[inline]
    pub fn lab(&self) -> [f64; 3] {
        rgb_to_lab(self.rgb)
    }

    /// WCAG relative luminance in [0, 1].
    #[inline]
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }

    /// `#rrggbb` in lowercase.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

impl From<Rgb> for ColorSample {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// Parses `#rrggbb`, `rrggbb` or `r,g,b` (decimal, whitespace allowed).
impl FromStr for ColorSample {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let s = s.trim();
        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ColorError::InvalidValue(format!(
                    "expected 3 components, got {}: '{}'",
                    parts.len(),
                    s
                )));
            }
            let mut rgb = [0u8; 3];
            for (slot, part) in rgb.iter_mut().zip(&parts) {
                *slot = part.parse::<u8>().map_err(|_| {
                    ColorError::InvalidValue(format!("component '{}' is not in 0-255", part))
                })?;
            }
            return Ok(Self::from_rgb(rgb));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidValue(format!(
                "expected #rrggbb or r,g,b: '{}'",
                s
            )));
        }
        let mut rgb = [0u8; 3];
        for (i, slot) in rgb.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorError::InvalidValue(format!("bad hex digits '{}'", pair)))?;
        }
        Ok(Self::from_rgb(rgb))
    }
}

/// A sample paired with the pixel coordinates it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedColor {
    /// The sampled color.
    pub sample: ColorSample,
    /// Column of the source pixel.
    pub x: u32,
    /// Row of the source pixel.
    pub y: u32,
}

/// Picks the color under `(x, y)`.
///
/// # Errors
///
/// Returns [`ColorError::Core`] wrapping an out-of-bounds error when the
/// coordinates fall outside the buffer.
///
/// # Example
///
/// ```rust
/// use retouch_core::PixelBuffer;
/// use retouch_color::sample_at;
///
/// let buf = PixelBuffer::filled(2, 2, [9, 8, 7, 255]).unwrap();
/// let picked = sample_at(&buf, 1, 1).unwrap();
/// assert_eq!(picked.sample.rgb(), [9, 8, 7]);
/// assert!(sample_at(&buf, 2, 0).is_err());
/// ```
pub fn sample_at(buffer: &PixelBuffer, x: u32, y: u32) -> ColorResult<PickedColor> {
    let px = buffer.pixel(x, y)?;
    Ok(PickedColor {
        sample: ColorSample::from_rgba(px),
        x,
        y,
    })
}
