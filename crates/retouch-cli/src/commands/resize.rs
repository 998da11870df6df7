//! Resize command
//!
//! Nearest-neighbor scaling. Giving only one side keeps the aspect ratio.

use crate::ResizeArgs;
use anyhow::{Result, bail};
use retouch_ops::resize::{resize, scale_dimensions};
use tracing::info;

/// Picks the output size from the given width, height or percentage.
fn target_size(src: (u32, u32), args: &ResizeArgs) -> Result<(u32, u32)> {
    let (src_w, src_h) = src;
    // side * a / b, at least 1
    let keep = |side: u32, a: u32, b: u32| -> Result<u32> {
        let v = (side as u64 * a as u64 / b.max(1) as u64).max(1);
        match u32::try_from(v) {
            Ok(v) => Ok(v),
            Err(_) => bail!("aspect-preserving side {v} for {src_w}x{src_h} exceeds {}", u32::MAX),
        }
    };

    Ok(match (args.width, args.height, args.scale) {
        (Some(w), Some(h), _) => (w, h),
        (Some(w), None, _) => (w, keep(src_h, w, src_w)?),
        (None, Some(h), _) => (keep(src_w, h, src_h)?, h),
        (None, None, Some(p)) => scale_dimensions(src_w, src_h, p)?,
        (None, None, None) => bail!("Specify --width, --height, or --scale"),
    })
}

pub fn run(args: ResizeArgs) -> Result<()> {
    super::transform(&args.input, &args.output, |src| {
        let (w, h) = target_size(src.dimensions(), &args)?;
        info!("Resizing {}x{} -> {}x{}", src.width(), src.height(), w, h);
        Ok(resize(src, w, h)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(width: Option<u32>, height: Option<u32>, scale: Option<u32>) -> ResizeArgs {
        ResizeArgs {
            input: PathBuf::from("in.png"),
            output: PathBuf::from("out.png"),
            width,
            height,
            scale,
        }
    }

    #[test]
    fn test_target_size() {
        assert_eq!(target_size((640, 480), &args(Some(320), None, None)).unwrap(), (320, 240));
        assert_eq!(target_size((640, 480), &args(None, Some(120), None)).unwrap(), (160, 120));
        assert_eq!(target_size((640, 480), &args(Some(10), Some(20), None)).unwrap(), (10, 20));
        assert_eq!(target_size((640, 480), &args(None, None, Some(25))).unwrap(), (160, 120));
        assert!(target_size((640, 480), &args(None, None, None)).is_err());
    }

    #[test]
    fn test_keep_aspect_never_zero() {
        assert_eq!(target_size((1000, 1), &args(Some(10), None, None)).unwrap(), (10, 1));
    }

    #[test]
    fn test_keep_aspect_overflow_rejected() {
        // 1000 * 5_000_000 / 1 does not fit in u32
        let err = target_size((1, 1000), &args(Some(5_000_000), None, None)).unwrap_err();
        assert!(err.to_string().contains("5000000000"));
        assert!(target_size((1000, 1), &args(None, Some(5_000_000), None)).is_err());
    }
}
