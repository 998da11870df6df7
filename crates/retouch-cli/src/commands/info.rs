//! Image info command.
//!
//! Prints dimensions and, with `--histogram`, the histogram peak and
//! per-channel means.

use crate::InfoArgs;
use anyhow::Result;
use retouch_cli::io::load_png;
use retouch_ops::{Channel, Histogram};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct InfoReport {
    path: String,
    width: u32,
    height: u32,
    pixels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    histogram: Option<HistogramSummary>,
}

#[derive(Debug, Serialize)]
struct HistogramSummary {
    peak: u64,
    mean: [Option<f64>; 3],
    bins: Histogram,
}

fn report(path: &Path, with_histogram: bool) -> Result<InfoReport> {
    let image = load_png(path)?;
    let histogram = with_histogram.then(|| {
        let bins = Histogram::compute(&image);
        HistogramSummary {
            peak: bins.peak(),
            mean: Channel::ALL.map(|c| bins.mean(c)),
            bins,
        }
    });
    Ok(InfoReport {
        path: path.display().to_string(),
        width: image.width(),
        height: image.height(),
        pixels: image.pixel_count(),
        histogram,
    })
}

fn print_text(r: &InfoReport) {
    println!("{}", r.path);
    println!("  Resolution: {}x{}", r.width, r.height);
    println!("  Pixels:     {}", r.pixels);
    if let Some(h) = &r.histogram {
        println!("  Peak bin:   {}", h.peak);
        for (c, mean) in Channel::ALL.iter().zip(h.mean) {
            match mean {
                Some(m) => println!("  Mean {c:<6} {m:.2}"),
                None => println!("  Mean {c:<6} -"),
            }
        }
    }
}

/// Runs the info command for every input.
pub fn run(args: InfoArgs) -> Result<()> {
    let reports = args
        .input
        .iter()
        .map(|p| report(p, args.histogram))
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_text(r);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_cli::io::save_png;
    use retouch_core::PixelBuffer;

    #[test]
    fn test_report_with_histogram() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        save_png(&path, &PixelBuffer::filled(4, 2, [10, 20, 30, 255]).unwrap()).unwrap();

        let r = report(&path, true).unwrap();
        assert_eq!((r.width, r.height, r.pixels), (4, 2, 8));
        let h = r.histogram.as_ref().unwrap();
        assert_eq!(h.peak, 8);
        assert_eq!(h.mean, [Some(10.0), Some(20.0), Some(30.0)]);

        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["histogram"]["bins"]["g"][20], 8);
        assert!(report(&path, false).unwrap().histogram.is_none());
    }
}
