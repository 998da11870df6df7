//! Integration tests for the retouch crates.
//!
//! End-to-end checks across buffer, ops, color and the PNG host layer.
