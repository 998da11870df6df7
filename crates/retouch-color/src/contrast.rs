//! WCAG contrast between two colors.
//!
//! Relative luminance is the Rec.709 weighting of linearised sRGB channels.
//! The contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)` and ranges
//! from 1 (identical luminance) to 21 (black on white).
//!
//! # Example
//!
//! ```rust
//! use retouch_color::{contrast, ColorSample, WcagLevel};
//!
//! let gray = ColorSample::new(118, 118, 118);
//! let white = ColorSample::new(255, 255, 255);
//! let result = contrast::evaluate(&gray, &white);
//! assert!(result.is_contrast);
//! assert_eq!(result.level(), WcagLevel::Aa);
//! ```

use crate::transfer::linearize_rgb;
use crate::ColorSample;
use retouch_core::{luminance_rec709, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum ratio for legible normal-size text.
pub const CONTRAST_THRESHOLD: f64 = 4.5;

/// Minimum ratio for large text.
pub const LARGE_TEXT_THRESHOLD: f64 = 3.0;

/// Ratio for enhanced (AAA) contrast.
pub const ENHANCED_THRESHOLD: f64 = 7.0;

/// Result of comparing two colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio in [1, 21].
    pub scale: f64,
    /// `scale >= 4.5`.
    pub is_contrast: bool,
}

impl ContrastResult {
    /// Builds a result from a ratio.
    pub fn from_scale(scale: f64) -> Self {
        Self {
            scale,
            is_contrast: scale >= CONTRAST_THRESHOLD,
        }
    }

    /// WCAG conformance level reached by this ratio.
    pub fn level(&self) -> WcagLevel {
        if self.scale >= ENHANCED_THRESHOLD {
            WcagLevel::Aaa
        } else if self.scale >= CONTRAST_THRESHOLD {
            WcagLevel::Aa
        } else if self.scale >= LARGE_TEXT_THRESHOLD {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }
}

/// WCAG 2.x text contrast levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// At least 3:1, enough for large text only.
    AaLarge,
    /// At least 4.5:1.
    Aa,
    /// At least 7:1.
    Aaa,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WcagLevel::Fail => "fail",
            WcagLevel::AaLarge => "AA (large text)",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        };
        f.write_str(s)
    }
}

/// WCAG relative luminance of an 8-bit sRGB color.
#[inline]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    luminance_rec709(linearize_rgb(rgb))
}

/// Contrast ratio between two relative luminances, in either order.
#[inline]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compares two sampled colors.
pub fn evaluate(c1: &ColorSample, c2: &ColorSample) -> ContrastResult {
    ContrastResult::from_scale(contrast_ratio(c1.luminance(), c2.luminance()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BLACK: ColorSample = ColorSample::new(0, 0, 0);
    const WHITE: ColorSample = ColorSample::new(255, 255, 255);

    #[test]
    fn test_black_on_white() {
        let r = evaluate(&BLACK, &WHITE);
        assert_abs_diff_eq!(r.scale, 21.0, epsilon = 1e-4);
        assert!(r.is_contrast);
        assert_eq!(r.level(), WcagLevel::Aaa);
    }

    #[test]
    fn test_identical_colors() {
        let c = ColorSample::new(90, 160, 33);
        let r = evaluate(&c, &c);
        assert_eq!(r.scale, 1.0);
        assert!(!r.is_contrast);
        assert_eq!(r.level(), WcagLevel::Fail);
    }

    #[test]
    fn test_symmetric() {
        let a = ColorSample::new(200, 30, 90);
        let b = ColorSample::new(12, 60, 140);
        assert_eq!(evaluate(&a, &b), evaluate(&b, &a));
    }

    #[test]
    fn test_threshold_edges() {
        // 119 gray on white is 4.478, 118 gray is 4.542
        let r119 = evaluate(&ColorSample::new(119, 119, 119), &WHITE);
        let r118 = evaluate(&ColorSample::new(118, 118, 118), &WHITE);
        assert!(!r119.is_contrast);
        assert_eq!(r119.level(), WcagLevel::AaLarge);
        assert!(r118.is_contrast);
        assert_eq!(r118.level(), WcagLevel::Aa);
    }

    #[test]
    fn test_known_ratios() {
        let red = evaluate(&ColorSample::new(255, 0, 0), &WHITE);
        assert_abs_diff_eq!(red.scale, 3.998, epsilon = 1e-3);
        let blue = evaluate(&ColorSample::new(0, 0, 255), &WHITE);
        assert_abs_diff_eq!(blue.scale, 8.592, epsilon = 1e-3);
    }

    #[test]
    fn test_from_scale_boundary() {
        assert!(ContrastResult::from_scale(4.5).is_contrast);
        assert!(!ContrastResult::from_scale(4.499_999).is_contrast);
        assert_eq!(ContrastResult::from_scale(3.0).level(), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::AaLarge.to_string(), "AA (large text)");
    }
}
