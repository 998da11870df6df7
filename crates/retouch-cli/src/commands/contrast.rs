//! Contrast command

use crate::ContrastArgs;
use anyhow::Result;
use retouch_color::contrast::evaluate;
use serde_json::json;

pub fn run(args: ContrastArgs) -> Result<()> {
    let result = evaluate(&args.first, &args.second);

    if args.json {
        let out = json!({
            "first": args.first,
            "second": args.second,
            "contrast": result,
            "level": result.level().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} vs {}", args.first.hex(), args.second.hex());
    super::pick::print_contrast(&result);
    Ok(())
}
