//! CLI command implementations

pub mod contrast;
pub mod curves;
pub mod filter;
pub mod info;
pub mod pick;
pub mod resize;

use anyhow::Result;
use retouch_cli::io::{load_png, save_png};
use retouch_core::PixelBuffer;
use std::path::Path;
use tracing::info;

/// Loads `input`, runs `op` and writes the result to `output`.
pub fn transform<F>(input: &Path, output: &Path, op: F) -> Result<()>
where
    F: FnOnce(&PixelBuffer) -> Result<PixelBuffer>,
{
    let src = load_png(input)?;
    let dst = op(&src)?;
    save_png(output, &dst)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        width = dst.width(),
        height = dst.height(),
        "done"
    );
    Ok(())
}
