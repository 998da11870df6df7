//! Host-side helpers for the `retouch` binary.
//!
//! The pipeline crates only see [`PixelBuffer`](retouch_core::PixelBuffer)s;
//! decoding and encoding files happens here.

pub mod io;
pub mod parse;
