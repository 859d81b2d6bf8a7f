// ABOUTME: Hex color parsing and RGB <-> HSL conversion for base color variables
// ABOUTME: Rejects malformed hex strings instead of silently converting them to black

use crate::error::ColorError;
use tokenvars_types::{Hsl, Rgb};

/// Unrounded HSL components: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslComponents {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslComponents {
    /// Round each component to the nearest integer, as written into stylesheets
    pub fn rounded(&self) -> Hsl {
        Hsl::new(
            self.hue.round().clamp(0.0, 360.0) as u16,
            self.saturation.round().clamp(0.0, 100.0) as u8,
            self.lightness.round().clamp(0.0, 100.0) as u8,
        )
    }
}

impl From<Hsl> for HslComponents {
    fn from(hsl: Hsl) -> Self {
        Self {
            hue: f64::from(hsl.hue),
            saturation: f64::from(hsl.saturation),
            lightness: f64::from(hsl.lightness),
        }
    }
}

/// Convert a hex color string into a rounded HSL triple.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(rgb_to_hsl(parse_hex(hex)?).rounded())
}

/// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.is_empty() {
        return Err(ColorError::invalid_hex(hex, "no hex digits"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid_hex(hex, "contains non-hex characters"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::invalid_hex(hex, "contains non-hex characters"))
    };

    match digits.len() {
        // Short form: each digit is doubled, so `f` becomes `ff`
        3 => Ok(Rgb::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::invalid_hex(hex, "expected 3 or 6 hex digits")),
    }
}

/// Standard RGB → HSL conversion.
pub fn rgb_to_hsl(rgb: Rgb) -> HslComponents {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut hue = (sector * 60.0).min(360.0);
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (max + min) / 2.0;

    let saturation = if delta == 0.0 {
        0.0
    } else if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    HslComponents {
        hue,
        saturation: saturation * 100.0,
        lightness: lightness * 100.0,
    }
}

/// Standard HSL → RGB conversion, the inverse of [`rgb_to_hsl`].
pub fn hsl_to_rgb(hsl: HslComponents) -> Rgb {
    let h = (hsl.hue / 360.0).rem_euclid(1.0);
    let s = (hsl.saturation / 100.0).clamp(0.0, 1.0);
    let l = (hsl.lightness / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
