//! Filter command

use crate::FilterArgs;
use anyhow::Result;
use retouch_ops::{Kernel, filter::convolve};
use tracing::info;

pub fn run(args: FilterArgs) -> Result<()> {
    let kernel = Kernel::by_name(&args.kernel)?;
    info!(kernel = %args.kernel, "applying filter");
    super::transform(&args.input, &args.output, |src| Ok(convolve(src, &kernel)?))
}
