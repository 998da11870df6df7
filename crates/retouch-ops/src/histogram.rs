//! Per-channel intensity histogram.
//!
//! [`Histogram::compute`] counts how often each 0-255 value occurs in the R,
//! G and B channels. Alpha is ignored. The result does not depend on pixel
//! order, and each channel sums to `width * height`.

use retouch_core::{PixelBuffer, CHANNELS};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use tracing::trace;

/// Number of bins per channel.
pub const BINS: usize = 256;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl Channel {
    /// All channels in R, G, B order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset within an RGBA pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// Three 256-bin count arrays.
#[derive(Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red counts
    pub r: [u64; BINS],
    /// Green counts
    pub g: [u64; BINS],
    /// Blue counts
    pub b: [u64; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            r: [0; BINS],
            g: [0; BINS],
            b: [0; BINS],
        }
    }
}

impl fmt::Debug for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Histogram")
            .field("total", &self.total())
            .field("peak", &self.peak())
            .finish()
    }
}

impl Histogram {
    /// Counts every R, G and B value of `buffer`.
    ///
    /// A zero-pixel buffer yields an all-zero histogram.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retouch_core::PixelBuffer;
    /// use retouch_ops::Histogram;
    ///
    /// let buf = PixelBuffer::filled(3, 2, [10, 20, 30, 255]).unwrap();
    /// let hist = Histogram::compute(&buf);
    /// assert_eq!(hist.r[10], 6);
    /// assert_eq!(hist.g[20], 6);
    /// assert_eq!(hist.b[30], 6);
    /// ```
    pub fn compute(buffer: &PixelBuffer) -> Self {
        trace!(width = buffer.width(), height = buffer.height(), "histogram");

        let mut hist = Self::default();
        for px in buffer.data().chunks_exact(CHANNELS) {
            hist.r[px[0] as usize] += 1;
            hist.g[px[1] as usize] += 1;
            hist.b[px[2] as usize] += 1;
        }
        hist
    }

    /// Bins of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &[u64; BINS] {
        match channel {
            Channel::Red => &self.r,
            Channel::Green => &self.g,
            Channel::Blue => &self.b,
        }
    }

    /// Number of counted pixels (the sum of any one channel).
    pub fn total(&self) -> u64 {
        self.r.iter().sum()
    }

    /// True if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Largest single bin across all three channels.
    pub fn peak(&self) -> u64 {
        Channel::ALL
            .iter()
            .flat_map(|&c| self.channel(c).iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Mean value of a channel, `None` when empty.
    pub fn mean(&self, channel: Channel) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: u64 = self
            .channel(channel)
            .iter()
            .enumerate()
            .map(|(v, &n)| v as u64 * n)
            .sum();
        Some(sum as f64 / total as f64)
    }

    /// Bar heights scaled so the global peak reaches `max_height`.
    ///
    /// Heights are floored. All channels share one scale so they can be
    /// drawn over each other.
    pub fn bar_heights(&self, channel: Channel, max_height: u32) -> [u32; BINS] {
        let mut out = [0u32; BINS];
        let peak = self.peak();
        if peak == 0 {
            return out;
        }
        for (h, &n) in out.iter_mut().zip(self.channel(channel)) {
            *h = (n as u128 * max_height as u128 / peak as u128) as u32;
        }
        out
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Histogram", 3)?;
        s.serialize_field("r", &self.r[..])?;
        s.serialize_field("g", &self.g[..])?;
        s.serialize_field("b", &self.b[..])?;
        s.end()
    }
}
