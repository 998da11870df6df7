//! Two-point tone curve.
//!
//! A [`ToneCurve`] has an `enter` and an `exit` control point. Values at or
//! below `enter.in` map to `enter.out`, values at or above `exit.in` map to
//! `exit.out`, and values in between are interpolated along the line through
//! both points:
//!
//! ```text
//! a = (y2 - y1) / (x2 - x1)
//! b = y1 - a * x1
//! v' = clamp(round(a * v + b), 0, 255)
//! ```
//!
//! When both points share the same input the curve is a step:
//! `v <= x1 -> y1`, `v > x1 -> y2`.
//!
//! Edits never mutate a curve; they return a new one or an
//! [`OpsError::InvalidCurvePoint`], so a rejected edit leaves the previous
//! curve in place.
//!
//! # Example
//!
//! ```rust
//! use retouch_ops::{Axis, Handle, ToneCurve};
//!
//! let curve = ToneCurve::identity()
//!     .with_value(Handle::Enter, Axis::In, 64)
//!     .unwrap();
//! assert_eq!(curve.eval(32), 0);
//! assert_eq!(curve.eval(255), 255);
//!
//! // enter.in may not pass exit.in
//! let narrow = curve.with_value(Handle::Exit, Axis::In, 100).unwrap();
//! assert!(narrow.with_value(Handle::Enter, Axis::In, 101).is_err());
//! ```

use crate::rows::for_each_row;
use crate::{OpsError, OpsResult};
use retouch_core::image::byte_len;
use retouch_core::{PixelBuffer, CHANNELS};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// One control point of a [`ToneCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Source intensity
    #[serde(rename = "in")]
    pub input: u8,
    /// Mapped intensity
    #[serde(rename = "out")]
    pub output: u8,
}

impl CurvePoint {
    /// Creates a control point.
    #[inline]
    pub const fn new(input: u8, output: u8) -> Self {
        Self { input, output }
    }
}

impl From<(u8, u8)> for CurvePoint {
    fn from((input, output): (u8, u8)) -> Self {
        Self::new(input, output)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.input, self.output)
    }
}

/// Which control point an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Lower point
    Enter,
    /// Upper point
    Exit,
}

/// Which coordinate of a control point an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Input coordinate
    In,
    /// Output coordinate
    Out,
}

/// Two-point piecewise-linear curve. Invariant: `enter.input <= exit.input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CurvePoints")]
pub struct ToneCurve {
    enter: CurvePoint,
    exit: CurvePoint,
}

// Unchecked wire form, validated through `ToneCurve::new` on deserialize.
#[derive(Deserialize)]
struct CurvePoints {
    enter: CurvePoint,
    exit: CurvePoint,
}

impl TryFrom<CurvePoints> for ToneCurve {
    type Error = OpsError;

    fn try_from(points: CurvePoints) -> OpsResult<Self> {
        Self::new(points.enter, points.exit)
    }
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ToneCurve {
    /// `enter = (0, 0)`, `exit = (255, 255)`.
    pub const IDENTITY: Self = Self {
        enter: CurvePoint::new(0, 0),
        exit: CurvePoint::new(255, 255),
    };

    /// Identity curve.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a curve from two points.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidCurvePoint`] if `enter.input > exit.input`.
    pub fn new(enter: CurvePoint, exit: CurvePoint) -> OpsResult<Self> {
        if enter.input > exit.input {
            return Err(OpsError::InvalidCurvePoint(format!(
                "enter input {} is above exit input {}",
                enter.input, exit.input
            )));
        }
        Ok(Self { enter, exit })
    }

    /// Lower control point.
    #[inline]
    pub fn enter(&self) -> CurvePoint {
        self.enter
    }

    /// Upper control point.
    #[inline]
    pub fn exit(&self) -> CurvePoint {
        self.exit
    }

    /// Returns a copy with one control point replaced.
    pub fn with_point(&self, handle: Handle, point: CurvePoint) -> OpsResult<Self> {
        match handle {
            Handle::Enter => Self::new(point, self.exit),
            Handle::Exit => Self::new(self.enter, point),
        }
    }

    /// Returns a copy with one coordinate changed.
    ///
    /// `value` is taken as an `i32` so raw user input can be passed through;
    /// anything outside 0-255 is rejected.
    pub fn with_value(&self, handle: Handle, axis: Axis, value: i32) -> OpsResult<Self> {
        let value = u8::try_from(value).map_err(|_| {
            OpsError::InvalidCurvePoint(format!("value {value} is outside 0-255"))
        })?;
        let mut point = match handle {
            Handle::Enter => self.enter,
            Handle::Exit => self.exit,
        };
        match axis {
            Axis::In => point.input = value,
            Axis::Out => point.output = value,
        }
        self.with_point(handle, point)
    }

    /// Back to identity.
    #[inline]
    pub fn reset(&self) -> Self {
        Self::IDENTITY
    }

    /// True if the curve leaves every value unchanged.
    pub fn is_identity(&self) -> bool {
        lut_is_identity(&self.lut())
    }

    /// True if both points share one input, making the curve a step.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.enter.input == self.exit.input
    }

    /// Maps one intensity.
    pub fn eval(&self, v: u8) -> u8 {
        let (x1, y1) = (self.enter.input, self.enter.output);
        let (x2, y2) = (self.exit.input, self.exit.output);

        if v <= x1 {
            return y1;
        }
        if v >= x2 {
            return y2;
        }
        let a = (y2 as f64 - y1 as f64) / (x2 as f64 - x1 as f64);
        let b = y1 as f64 - a * x1 as f64;
        (a * v as f64 + b).round().clamp(0.0, 255.0) as u8
    }

    /// Lookup table of [`eval`](Self::eval) over 0-255.
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (i, out) in lut.iter_mut().enumerate() {
            *out = self.eval(i as u8);
        }
        lut
    }

    /// The four points a curve widget draws: `(0, enter.out)`, `enter`,
    /// `exit`, `(255, exit.out)`.
    pub fn polyline(&self) -> [CurvePoint; 4] {
        [
            CurvePoint::new(0, self.enter.output),
            self.enter,
            self.exit,
            CurvePoint::new(255, self.exit.output),
        ]
    }

    /// Applies the curve to `buffer`. See [`apply`].
    pub fn apply(&self, buffer: &PixelBuffer) -> OpsResult<PixelBuffer> {
        apply(buffer, self)
    }
}

fn lut_is_identity(lut: &[u8; 256]) -> bool {
    lut.iter().enumerate().all(|(i, &v)| i == v as usize)
}

impl fmt::Display for ToneCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enter={} exit={}", self.enter, self.exit)
    }
}

/// Maps R, G and B of every pixel through `curve`. Alpha is copied.
///
/// # Example
///
/// ```rust
/// use retouch_core::PixelBuffer;
/// use retouch_ops::{curve, ToneCurve};
///
/// let src = PixelBuffer::filled(2, 2, [10, 200, 90, 40]).unwrap();
/// let out = curve::apply(&src, &ToneCurve::identity()).unwrap();
/// assert_eq!(out, src);
/// ```
pub fn apply(buffer: &PixelBuffer, curve: &ToneCurve) -> OpsResult<PixelBuffer> {
    trace!(width = buffer.width(), height = buffer.height(), %curve, "tone curve");

    let lut = curve.lut();
    if lut_is_identity(&lut) {
        return Ok(buffer.clone());
    }
    if curve.is_degenerate() {
        debug!(input = curve.enter.input, "degenerate curve, applying step");
    }

    let (w, h) = buffer.dimensions();
    let mut out = vec![0u8; byte_len(w, h)?];
    let src = buffer.data();
    let stride = buffer.stride();

    for_each_row(&mut out, stride, |y, row| {
        let src_row = &src[y * stride..(y + 1) * stride];
        for (d, s) in row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            d[0] = lut[s[0] as usize];
            d[1] = lut[s[1] as usize];
            d[2] = lut[s[2] as usize];
            d[3] = s[3];
        }
    });

    Ok(PixelBuffer::from_data(w, h, out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> PixelBuffer {
        PixelBuffer::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            [v, 255 - v, v / 2, v ^ 0x5a]
        })
        .unwrap()
    }

    #[test]
    fn test_identity_is_noop() {
        let src = ramp();
        assert_eq!(apply(&src, &ToneCurve::identity()).unwrap(), src);
        assert!(ToneCurve::default().is_identity());
        let lut = ToneCurve::IDENTITY.lut();
        assert!(lut.iter().enumerate().all(|(i, &v)| i as u8 == v));
    }

    #[test]
    fn test_identity_lut_shares_storage() {
        // different points, same identity mapping
        let curve = ToneCurve::new((1, 1).into(), (254, 254).into()).unwrap();
        assert_ne!(curve, ToneCurve::IDENTITY);
        assert!(curve.is_identity());

        let src = ramp();
        let out = apply(&src, &curve).unwrap();
        assert_eq!(out, src);
        assert_eq!(out.data().as_ptr(), src.data().as_ptr());

        let shifted = ToneCurve::new((0, 1).into(), (255, 255).into()).unwrap();
        assert!(!shifted.is_identity());
        assert_ne!(apply(&src, &shifted).unwrap().data().as_ptr(), src.data().as_ptr());
    }

    #[test]
    fn test_flat_curve() {
        let flat = ToneCurve::new((0, 128).into(), (255, 128).into()).unwrap();
        let out = apply(&ramp(), &flat).unwrap();
        for (o, s) in out.pixels().zip(ramp().pixels()) {
            assert_eq!(&o[..3], &[128, 128, 128]);
            assert_eq!(o[3], s[3]);
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let curve = ToneCurve::new((50, 10).into(), (200, 240).into()).unwrap();
        let src = ramp();
        let out = curve.apply(&src).unwrap();
        assert_eq!(out.dimensions(), src.dimensions());
        for (o, s) in out.pixels().zip(src.pixels()) {
            assert_eq!(o[3], s[3]);
        }
    }

    #[test]
    fn test_linear_segment() {
        // a = 2, b = -100
        let curve = ToneCurve::new((50, 0).into(), (150, 200).into()).unwrap();
        assert_eq!(curve.eval(0), 0);
        assert_eq!(curve.eval(50), 0);
        assert_eq!(curve.eval(75), 50);
        assert_eq!(curve.eval(149), 198);
        assert_eq!(curve.eval(150), 200);
        assert_eq!(curve.eval(255), 200);
    }

    #[test]
    fn test_rounding() {
        // a = 0.5, halves round away from zero
        let curve = ToneCurve::new((0, 0).into(), (254, 127).into()).unwrap();
        assert_eq!(curve.eval(1), 1);
        assert_eq!(curve.eval(3), 2);
        assert_eq!(curve.eval(4), 2);
        assert_eq!(curve.eval(253), 127);
    }

    #[test]
    fn test_inverting_curve() {
        let curve = ToneCurve::new((0, 255).into(), (255, 0).into()).unwrap();
        assert_eq!(curve.eval(0), 255);
        assert_eq!(curve.eval(100), 155);
        assert_eq!(curve.eval(255), 0);
    }

    #[test]
    fn test_step_when_degenerate() {
        let curve = ToneCurve::new((100, 20).into(), (100, 220).into()).unwrap();
        assert!(curve.is_degenerate());
        assert_eq!(curve.eval(99), 20);
        assert_eq!(curve.eval(100), 20);
        assert_eq!(curve.eval(101), 220);

        let src = PixelBuffer::filled(1, 1, [100, 101, 0, 9]).unwrap();
        let out = apply(&src, &curve).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), [20, 220, 20, 9]);
    }

    #[test]
    fn test_crossing_edit_rejected() {
        let curve = ToneCurve::new((10, 0).into(), (200, 255).into()).unwrap();
        let before = curve;

        let err = curve.with_value(Handle::Enter, Axis::In, 201).unwrap_err();
        assert!(matches!(err, OpsError::InvalidCurvePoint(_)));
        assert!(curve.with_value(Handle::Exit, Axis::In, 9).is_err());
        assert_eq!(curve, before);

        // touching is allowed
        let touch = curve.with_value(Handle::Enter, Axis::In, 200).unwrap();
        assert_eq!(touch.enter(), CurvePoint::new(200, 0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let curve = ToneCurve::identity();
        assert!(curve.with_value(Handle::Exit, Axis::Out, 256).is_err());
        assert!(curve.with_value(Handle::Enter, Axis::Out, -1).is_err());
        assert!(ToneCurve::new((200, 0).into(), (100, 0).into()).is_err());
    }

    #[test]
    fn test_out_edits_unrestricted() {
        let curve = ToneCurve::identity()
            .with_value(Handle::Enter, Axis::Out, 255)
            .unwrap()
            .with_value(Handle::Exit, Axis::Out, 0)
            .unwrap();
        assert_eq!(curve.enter(), CurvePoint::new(0, 255));
        assert_eq!(curve.exit(), CurvePoint::new(255, 0));
        assert_eq!(curve.reset(), ToneCurve::IDENTITY);
    }

    #[test]
    fn test_polyline() {
        let curve = ToneCurve::new((40, 30).into(), (220, 250).into()).unwrap();
        assert_eq!(
            curve.polyline(),
            [
                CurvePoint::new(0, 30),
                CurvePoint::new(40, 30),
                CurvePoint::new(220, 250),
                CurvePoint::new(255, 250),
            ]
        );
    }

    #[test]
    fn test_serde_field_names() {
        let curve = ToneCurve::new((1, 2).into(), (3, 4).into()).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"{"enter":{"in":1,"out":2},"exit":{"in":3,"out":4}}"#);
        assert_eq!(serde_json::from_str::<ToneCurve>(&json).unwrap(), curve);

        let crossed = r#"{"enter":{"in":9,"out":0},"exit":{"in":3,"out":4}}"#;
        assert!(serde_json::from_str::<ToneCurve>(crossed).is_err());
    }
}
