//! Curves command

use crate::CurvesArgs;
use anyhow::Result;
use retouch_ops::ToneCurve;
use tracing::info;

pub fn run(args: CurvesArgs) -> Result<()> {
    let curve = ToneCurve::new(args.enter, args.exit)?;
    info!(%curve, "applying tone curve");
    super::transform(&args.input, &args.output, |src| Ok(curve.apply(src)?))
}
