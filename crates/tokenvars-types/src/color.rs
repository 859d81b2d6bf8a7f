// ABOUTME: Color value types shared by the converter and the variable renderer
// ABOUTME: Integer HSL triples and 8-bit RGB channels with stylesheet formatting

use serde::{Deserialize, Serialize};
use std::fmt;

/// HSL color with integer components.
///
/// `hue` is in degrees (0..=360), `saturation` and `lightness` are percentages (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Renders as a stylesheet literal: `hsl(225, 100%, 60%)`
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase six-digit hex with a leading `#`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_display() {
        assert_eq!(Hsl::new(225, 100, 60).to_string(), "hsl(225, 100%, 60%)");
        assert_eq!(Hsl::new(0, 0, 0).to_string(), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(Rgb::new(0x33, 0x66, 0xff).to_hex(), "#3366ff");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }
}
