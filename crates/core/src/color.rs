//! CSS color parsing and hue math for picking a readable highlight accent.

use wet_report_protocol::Rgb;

/// Parse a hex color (`#rgb` or `#rrggbb`).
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb::new(
                channels.next()??,
                channels.next()??,
                channels.next()??,
            ))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Parse a computed background color as browsers report it.
///
/// Accepts hex, `rgb(...)` and `rgba(...)`. Returns `None` for
/// `transparent`, fully transparent `rgba`, and anything unparsable.
pub fn parse_css_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if value.starts_with('#') {
        return parse_hex(value);
    }

    let lower = value.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = inner
        .split([',', ' ', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        return None;
    }

    if let Some(alpha) = parts.get(3) {
        let alpha: f64 = alpha.parse().ok()?;
        if alpha <= 0.0 {
            return None;
        }
    }

    let channel = |s: &str| -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    Some(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
}

/// Hue in degrees `[0, 360)`, or `None` for greys (no chroma).
pub fn hue(color: Rgb) -> Option<f64> {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    if chroma <= f64::EPSILON {
        return None;
    }

    let h = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    Some((h * 60.0).rem_euclid(360.0))
}

/// Shortest angular distance between two hues, in degrees `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse_hex("#E65212"), Some(Rgb::new(0xE6, 0x52, 0x12)));
        assert_eq!(parse_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(parse_hex("E65212"), None);
        assert_eq!(parse_hex("#E6521"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn parses_computed_styles() {
        assert_eq!(
            parse_css_color("rgb(230, 82, 18)"),
            Some(Rgb::new(230, 82, 18))
        );
        assert_eq!(
            parse_css_color("rgba(10, 20, 30, 0.5)"),
            Some(Rgb::new(10, 20, 30))
        );
        assert_eq!(parse_css_color("rgba(0, 0, 0, 0)"), None);
        assert_eq!(parse_css_color("transparent"), None);
        assert_eq!(parse_css_color("rgb(1 2 3)"), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn hue_of_primaries_and_greys() {
        assert_eq!(hue(Rgb::new(255, 0, 0)), Some(0.0));
        assert_eq!(hue(Rgb::new(0, 255, 0)), Some(120.0));
        assert_eq!(hue(Rgb::new(0, 0, 255)), Some(240.0));
        assert_eq!(hue(Rgb::new(128, 128, 128)), None);

        let orange = hue(Rgb::new(0xE6, 0x52, 0x12)).unwrap();
        assert!((orange - 18.1).abs() < 0.1, "got {orange}");
    }

    #[test]
    fn hue_distance_wraps() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
    }
}
