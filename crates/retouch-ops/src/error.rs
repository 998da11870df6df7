//! Error types for pixel operations.

use thiserror::Error;

/// Error type for pixel operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Target width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A curve edit would cross the control points or leave 0-255.
    #[error("invalid curve point: {0}")]
    InvalidCurvePoint(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer construction failed.
    #[error(transparent)]
    Core(#[from] retouch_core::Error),
}

impl OpsError {
    /// Creates an [`OpsError::InvalidDimension`] error.
    #[inline]
    pub fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }
}

/// Result type for pixel operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        let errs = [
            OpsError::invalid_dimension(0, 2),
            OpsError::InvalidCurvePoint("x".into()),
            OpsError::InvalidParameter("y".into()),
            OpsError::from(retouch_core::Error::invalid_dimension(0, 2)),
        ];
        for err in &errs {
            match err {
                OpsError::InvalidDimension { .. }
                | OpsError::InvalidCurvePoint(_)
                | OpsError::InvalidParameter(_)
                | OpsError::Core(_) => {}
            }
        }
        assert_eq!(errs[0].to_string(), "invalid dimensions: 0x2");
        assert_eq!(errs[3].to_string(), "invalid dimensions: 0x2");
    }
}
