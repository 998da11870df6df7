//! Nearest-neighbor resampling and view geometry.
//!
//! Each destination pixel copies the source pixel at
//!
//! ```text
//! sx = floor(dx * src_w / dst_w)    sy = floor(dy * src_h / dst_h)
//! ```
//!
//! computed in integer arithmetic, so no color is ever invented and an
//! N x N to N x N resize is an exact copy. Alpha is copied like any other
//! channel.
//!
//! # Example
//!
//! ```rust
//! use retouch_core::PixelBuffer;
//! use retouch_ops::resize::resize;
//!
//! let src = PixelBuffer::from_fn(2, 2, |x, y| [x as u8 * 100, y as u8 * 100, 0, 255]).unwrap();
//! let dst = resize(&src, 4, 4).unwrap();
//! assert_eq!(dst.pixel(3, 3).unwrap(), [100, 100, 0, 255]);
//! ```

use crate::rows::for_each_row;
use crate::{OpsError, OpsResult};
use retouch_core::image::byte_len;
use retouch_core::{PixelBuffer, CHANNELS};
use tracing::trace;

/// Maps a destination coordinate to its nearest source coordinate.
///
/// `src_len` and `dst_len` must be non-zero. The result is clamped to
/// `src_len - 1`.
#[inline]
pub fn nearest_source(d: u32, src_len: u32, dst_len: u32) -> u32 {
    let s = d as u64 * src_len as u64 / dst_len.max(1) as u64;
    s.min(src_len.saturating_sub(1) as u64) as u32
}

/// Resizes `buffer` to `new_width x new_height` with nearest-neighbor sampling.
///
/// # Errors
///
/// [`OpsError::InvalidDimension`] if either target side is zero.
///
/// A zero-pixel source has nothing to sample, so it yields a transparent
/// black buffer of the requested size.
///
/// # Example
///
/// ```rust
/// use retouch_core::PixelBuffer;
/// use retouch_ops::{resize::resize, OpsError};
///
/// let src = PixelBuffer::filled(4, 4, [1, 2, 3, 4]).unwrap();
/// assert_eq!(resize(&src, 0, 4).unwrap_err(), OpsError::invalid_dimension(0, 4));
/// ```
pub fn resize(buffer: &PixelBuffer, new_width: u32, new_height: u32) -> OpsResult<PixelBuffer> {
    let (src_w, src_h) = buffer.dimensions();
    trace!(src_w, src_h, new_width, new_height, "resize nearest");

    if new_width == 0 || new_height == 0 {
        return Err(OpsError::invalid_dimension(new_width, new_height));
    }
    if buffer.is_empty() {
        return Ok(PixelBuffer::new(new_width, new_height)?);
    }

    let len = byte_len(new_width, new_height)?;
    let mut out = vec![0u8; len];

    // Column lookup is shared by every row.
    let x_offsets: Vec<usize> = (0..new_width)
        .map(|dx| nearest_source(dx, src_w, new_width) as usize * CHANNELS)
        .collect();

    let src = buffer.data();
    let src_stride = buffer.stride();

    for_each_row(&mut out, new_width as usize * CHANNELS, |dy, row| {
        let sy = nearest_source(dy as u32, src_h, new_height) as usize;
        let src_row = &src[sy * src_stride..(sy + 1) * src_stride];
        for (dst_px, &sx) in row.chunks_exact_mut(CHANNELS).zip(&x_offsets) {
            dst_px.copy_from_slice(&src_row[sx..sx + CHANNELS]);
        }
    });

    Ok(PixelBuffer::from_data(new_width, new_height, out)?)
}

/// Zoom factor that shows the whole image inside a `max_w x max_h` viewport.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimension`] if the source has a zero side.
///
/// # Example
///
/// ```rust
/// use retouch_ops::resize::fit_scale;
///
/// assert_eq!(fit_scale(2000, 1000, 1000, 1000).unwrap(), 0.5);
/// ```
pub fn fit_scale(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> OpsResult<f64> {
    if src_w == 0 || src_h == 0 {
        return Err(OpsError::invalid_dimension(src_w, src_h));
    }
    let scale_w = max_w as f64 / src_w as f64;
    let scale_h = max_h as f64 / src_h as f64;
    Ok(scale_w.min(scale_h))
}

/// Aspect-preserving dimensions that fit into `max_w x max_h`.
///
/// The limiting side lands exactly on the box; the other side is floored.
/// Both sides are at least 1.
///
/// # Example
///
/// ```rust
/// use retouch_ops::resize::fit_dimensions;
///
/// // Fit 1920x1080 into 640x480 box
/// assert_eq!(fit_dimensions(1920, 1080, 640, 480).unwrap(), (640, 360));
/// ```
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> OpsResult<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(OpsError::invalid_dimension(src_w, src_h));
    }
    if max_w == 0 || max_h == 0 {
        return Err(OpsError::invalid_dimension(max_w, max_h));
    }
    let (sw, sh, mw, mh) = (src_w as u64, src_h as u64, max_w as u64, max_h as u64);

    let (w, h) = if mw * sh <= mh * sw {
        (mw, sh * mw / sw)
    } else {
        (sw * mh / sh, mh)
    };
    Ok((w.max(1) as u32, h.max(1) as u32))
}

/// Scales both sides by an integer percentage (`floor(side * percent / 100)`).
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimension`] if a side would become zero or
/// exceed `u32::MAX`.
pub fn scale_dimensions(width: u32, height: u32, percent: u32) -> OpsResult<(u32, u32)> {
    let scale = |side: u32| side as u64 * percent as u64 / 100;
    let (w, h) = (scale(width), scale(height));
    if w == 0 || h == 0 || w > u32::MAX as u64 || h > u32::MAX as u64 {
        return Err(OpsError::invalid_dimension(
            w.min(u32::MAX as u64) as u32,
            h.min(u32::MAX as u64) as u32,
        ));
    }
    Ok((w as u32, h as u32))
}

/// Converts a zoom factor to the whole percentage shown on a zoom slider.
#[inline]
pub fn zoom_percent(scale: f64) -> u32 {
    (scale * 100.0).floor().max(0.0) as u32
}
