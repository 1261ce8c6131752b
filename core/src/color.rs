use std::fmt;

const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;
const SRGB_LINEAR_DIVISOR: f64 = 12.92;
const SRGB_GAMMA: f64 = 2.4;
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `"r, g, b"`, the form consumed by `rgba(var(--vetrom-text-rgb), a)`.
    pub fn triple(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {alpha})", self.triple())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Parses `#rgb`, `#rrggbb`, `rgb(..)` and `rgba(..)`. Anything else is black.
pub fn parse_color(value: &str) -> Rgb {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Rgb::BLACK);
    }
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgb_function(&lower).unwrap_or(Rgb::BLACK);
    }
    Rgb::BLACK
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|ch| {
                let digit = ch.to_digit(16).unwrap_or(0) as u8;
                digit * 16 + digit
            });
            Some(Rgb::new(channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => None,
    }
}

fn parse_rgb_function(value: &str) -> Option<Rgb> {
    let open = value.find('(')?;
    let close = value.rfind(')')?;
    if close <= open {
        return None;
    }
    let name = value[..open].trim();
    if name != "rgb" && name != "rgba" {
        return None;
    }
    let mut parts = value[open + 1..close]
        .split(|ch: char| ch == ',' || ch == '/' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_channel);
    Some(Rgb::new(parts.next()??, parts.next()??, parts.next()??))
}

fn parse_channel(part: &str) -> Option<u8> {
    let (number, scale) = match part.strip_suffix('%') {
        Some(percent) => (percent, 255.0 / 100.0),
        None => (part, 1.0),
    };
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((value * scale).round().clamp(0.0, 255.0) as u8)
}

fn linearize(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= SRGB_LINEAR_THRESHOLD {
        value / SRGB_LINEAR_DIVISOR
    } else {
        ((value + 0.055) / 1.055).powf(SRGB_GAMMA)
    }
}

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: Rgb) -> f64 {
    linearize(color.r) * LUMA_WEIGHTS[0]
        + linearize(color.g) * LUMA_WEIGHTS[1]
        + linearize(color.b) * LUMA_WEIGHTS[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_color("#fff"), Rgb::WHITE);
        assert_eq!(parse_color("#1a2B3c"), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(parse_color("  #0f0 "), Rgb::new(0, 255, 0));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(parse_color("rgb(18, 18, 18)"), Rgb::new(18, 18, 18));
        assert_eq!(parse_color("rgba(255, 0, 10, 0.5)"), Rgb::new(255, 0, 10));
        assert_eq!(parse_color("rgb(10 20 30 / 50%)"), Rgb::new(10, 20, 30));
        assert_eq!(parse_color("RGB(1,2,3)"), Rgb::new(1, 2, 3));
    }

    #[test]
    fn unknown_formats_fall_back_to_black() {
        assert_eq!(parse_color("transparent"), Rgb::BLACK);
        assert_eq!(parse_color("hsl(0, 0%, 100%)"), Rgb::BLACK);
        assert_eq!(parse_color("#abcd"), Rgb::BLACK);
        assert_eq!(parse_color("#zzzzzz"), Rgb::BLACK);
        assert_eq!(parse_color("rgb(1, 2)"), Rgb::BLACK);
        assert_eq!(parse_color(""), Rgb::BLACK);
    }

    #[test]
    fn luminance_extremes() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-12);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mid_gray_is_dark() {
        let luminance = relative_luminance(parse_color("#767676"));
        assert!((luminance - 0.181).abs() < 0.005, "got {luminance}");
    }

    #[test]
    fn triple_and_alpha_formatting() {
        assert_eq!(Rgb::WHITE.triple(), "255, 255, 255");
        assert_eq!(Rgb::BLACK.with_alpha(0.5), "rgba(0, 0, 0, 0.5)");
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }
}
