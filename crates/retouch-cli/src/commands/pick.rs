//! Pick command
//!
//! Samples one or two pixels and prints their RGB, XYZ and LAB values.

use crate::PickArgs;
use anyhow::{Context, Result};
use retouch_cli::io::load_png;
use retouch_color::{ContrastResult, PickedColor, contrast, sample_at};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PickReport {
    colors: Vec<PickedColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contrast: Option<ContrastResult>,
}

pub(crate) fn print_color(label: &str, p: &PickedColor) {
    let [x, y, z] = p.sample.xyz();
    let [l, a, b] = p.sample.lab();
    println!("{label} ({}, {}): {} {}", p.x, p.y, p.sample, p.sample.hex());
    println!("  XYZ: {x:.4}, {y:.4}, {z:.4}");
    println!("  LAB: {l:.4}, {a:.4}, {b:.4}");
}

pub(crate) fn print_contrast(c: &ContrastResult) {
    println!("Contrast: {:.2}:1 ({})", c.scale, c.level());
    println!("  Readable: {}", if c.is_contrast { "yes" } else { "no" });
}

pub fn run(args: PickArgs) -> Result<()> {
    let image = load_png(&args.input)?;
    let mut colors = Vec::with_capacity(2);
    for (x, y) in std::iter::once(args.at).chain(args.with) {
        let picked = sample_at(&image, x, y)
            .with_context(|| format!("Cannot sample {}", args.input.display()))?;
        colors.push(picked);
    }

    let contrast = match colors.as_slice() {
        [a, b] => Some(contrast::evaluate(&a.sample, &b.sample)),
        _ => None,
    };
    let report = PickReport { colors, contrast };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for (i, p) in report.colors.iter().enumerate() {
        print_color(&format!("Color {}", i + 1), p);
    }
    if let Some(c) = &report.contrast {
        print_contrast(c);
    }
    Ok(())
}
