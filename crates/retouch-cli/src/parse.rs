//! Argument parsers used by clap's `value_parser`.

use retouch_ops::CurvePoint;

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected two comma-separated numbers, got '{s}'"))
}

/// Parses `X,Y` pixel coordinates.
pub fn coords(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = split_pair(s)?;
    let x = x.parse().map_err(|_| format!("invalid x coordinate '{x}'"))?;
    let y = y.parse().map_err(|_| format!("invalid y coordinate '{y}'"))?;
    Ok((x, y))
}

/// Parses an `IN,OUT` curve point, both 0-255.
pub fn curve_point(s: &str) -> Result<CurvePoint, String> {
    let (i, o) = split_pair(s)?;
    let input = i.parse().map_err(|_| format!("curve input '{i}' is not in 0-255"))?;
    let output = o.parse().map_err(|_| format!("curve output '{o}' is not in 0-255"))?;
    Ok(CurvePoint::new(input, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        assert_eq!(coords("3,4").unwrap(), (3, 4));
        assert_eq!(coords(" 10 , 0 ").unwrap(), (10, 0));
        assert!(coords("3").is_err());
        assert!(coords("-1,2").is_err());
    }

    #[test]
    fn test_curve_point() {
        assert_eq!(curve_point("0,128").unwrap(), CurvePoint::new(0, 128));
        assert!(curve_point("256,0").is_err());
        assert!(curve_point("a,b").is_err());
    }
}
