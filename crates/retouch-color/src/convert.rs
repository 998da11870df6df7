//! sRGB → CIE XYZ → CIELAB conversion.
//!
//! ```text
//! rgb (0-255) --/255--> sRGB (0-1) --eotf--> linear --SRGB_TO_XYZ * 100--> XYZ
//! XYZ --/D65_WHITE--> (t) --f(t)--> (fx, fy, fz) --> L*a*b*
//! ```
//!
//! XYZ is on the 0-100 scale (Y of sRGB white = 100).
//!
//! # Example
//!
//! ```rust
//! use retouch_color::convert::{rgb_to_lab, rgb_to_xyz};
//!
//! let xyz = rgb_to_xyz([255, 255, 255]);
//! assert!((xyz[1] - 100.0).abs() < 1e-3);
//!
//! let lab = rgb_to_lab([0, 0, 0]);
//! assert!(lab.iter().all(|v| v.abs() < 1e-9));
//! ```

use crate::transfer::linearize_rgb;
use glam::{DMat3, DVec3};
use retouch_core::Rgb;

/// Linear sRGB to XYZ (D65) matrix. Columns are the XYZ of the R, G and B
/// primaries.
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124564, 0.2126729, 0.0193339),
    DVec3::new(0.3575761, 0.7151522, 0.1191920),
    DVec3::new(0.1804375, 0.0721750, 0.9503041),
);

/// D65 reference white on the 0-100 scale.
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE constant `6/29`.
const DELTA: f64 = 6.0 / 29.0;

/// Converts an 8-bit sRGB triple to CIE XYZ (D65, 0-100).
#[inline]
pub fn rgb_to_xyz(rgb: Rgb) -> [f64; 3] {
    let linear = DVec3::from_array(linearize_rgb(rgb));
    (SRGB_TO_XYZ * linear * 100.0).to_array()
}

/// Converts CIE XYZ (D65, 0-100) to CIELAB.
#[inline]
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts an 8-bit sRGB triple to CIELAB.
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// CIELAB companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_triple(got: [f64; 3], want: [f64; 3], eps: f64) {
        for (g, w) in got.iter().zip(want) {
            assert_abs_diff_eq!(*g, w, epsilon = eps);
        }
    }

    #[test]
    fn test_white_and_black_lab() {
        assert_triple(rgb_to_lab([255, 255, 255]), [100.0, 0.0, 0.0], 0.01);
        assert_triple(rgb_to_lab([0, 0, 0]), [0.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn test_white_xyz_matches_reference_white() {
        assert_triple(rgb_to_xyz([255, 255, 255]), D65_WHITE, 0.01);
    }

    #[test]
    fn test_primaries() {
        assert_triple(rgb_to_xyz([255, 0, 0]), [41.2456, 21.2673, 1.9334], 1e-3);
        assert_triple(rgb_to_lab([255, 0, 0]), [53.2408, 80.0925, 67.2032], 1e-3);
        assert_triple(rgb_to_lab([0, 255, 0]), [87.7347, -86.1827, 83.1793], 1e-3);
        assert_triple(rgb_to_lab([0, 0, 255]), [32.2970, 79.1875, -107.8602], 1e-3);
    }

    #[test]
    fn test_gray_is_neutral() {
        let lab = rgb_to_lab([128, 128, 128]);
        assert_abs_diff_eq!(lab[0], 53.585, epsilon = 1e-3);
        assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_dark_color() {
        // Only R of (10, 20, 30) is below the sRGB knee.
        assert_triple(rgb_to_xyz([10, 20, 30]), [0.6096, 0.6585, 1.3230], 1e-3);
        assert_triple(rgb_to_lab([10, 20, 30]), [5.9485, -0.6687, -8.1375], 1e-3);
    }

    #[test]
    fn test_composition() {
        let rgb = [200, 50, 120];
        assert_eq!(rgb_to_lab(rgb), xyz_to_lab(rgb_to_xyz(rgb)));
    }
}
