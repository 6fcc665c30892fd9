//! RGB color stops and hex decoding
//!
//! Color stops are usually written as packed `0xRRGGBB` integers (in TOML
//! config files they can be written literally as hex integers) and decoded
//! to normalized `f32` channels.

use serde::{Deserialize, Serialize};

use crate::error::WormholeError;

/// Largest packed color value
pub const MAX_HEX: u32 = 0xffffff;

/// Linear RGB color with channels in `[0, 1]`
///
/// Serialized as a packed `0xRRGGBB` integer, so each channel is rounded to
/// the nearest 1/255 on the way out. Values above [`MAX_HEX`] fail to
/// deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Create a color from normalized channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decode a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Pack into `0xRRGGBB`, rounding each channel to the nearest byte
    pub fn to_hex(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// Channels as an array, in buffer order
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// True if every channel lies in `[0, 1]`
    pub fn is_normalized(self) -> bool {
        self.to_array()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl TryFrom<u32> for Rgb {
    type Error = WormholeError;

    fn try_from(hex: u32) -> Result<Self, Self::Error> {
        if hex > MAX_HEX {
            return Err(WormholeError::invalid(format!(
                "color {:#x} is wider than 0xRRGGBB",
                hex
            )));
        }
        Ok(Self::from_hex(hex))
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Extract every `0xRRGGBB` (or `#RRGGBB`) token from free-form text.
///
/// Tokens are matched case-insensitively and returned in the order they
/// appear; anything between them is ignored. Text without a single match
/// yields an empty list, leaving the decision to the caller.
///
/// ```
/// use wormhole_mesh::color::{parse_color_list, Rgb};
///
/// let colors = parse_color_list("0xFF00FF, 0x000000");
/// assert_eq!(colors, vec![Rgb::from_hex(0xff00ff), Rgb::BLACK]);
/// ```
pub fn parse_color_list(text: &str) -> Vec<Rgb> {
    let bytes = text.as_bytes();
    let mut colors = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let prefix_len = match bytes[i] {
            b'#' => 1,
            b'0' if matches!(bytes.get(i + 1), Some(b'x' | b'X')) => 2,
            _ => 0,
        };

        if prefix_len > 0 {
            let start = i + prefix_len;
            let hex = bytes
                .get(start..start + 6)
                .filter(|digits| digits.iter().all(u8::is_ascii_hexdigit))
                .and_then(|digits| std::str::from_utf8(digits).ok())
                .and_then(|digits| u32::from_str_radix(digits, 16).ok());

            if let Some(hex) = hex {
                colors.push(Rgb::from_hex(hex));
                i = start + 6;
                continue;
            }
        }

        i += 1;
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_magenta() {
        let c = Rgb::from_hex(0xff00ff);
        assert_eq!(c, Rgb::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hex_ignores_high_bits() {
        assert_eq!(Rgb::from_hex(0xab_12_34_56), Rgb::from_hex(0x12_34_56));
    }

    #[test]
    fn test_to_hex_inverts_from_hex() {
        for hex in [0x000000, 0xffffff, 0x123456, 0xff00ff, 0x7f8081] {
            assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
        }
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_hex(), 0xff0080);
    }

    #[test]
    fn test_parse_color_list_mixed_case_and_noise() {
        let colors = parse_color_list("start 0xFF0000 then 0x00ff00; last=#0000Ff!");
        assert_eq!(
            colors,
            vec![
                Rgb::new(1.0, 0.0, 0.0),
                Rgb::new(0.0, 1.0, 0.0),
                Rgb::new(0.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_parse_color_list_rejects_short_tokens() {
        assert!(parse_color_list("0xfff #12345 0x").is_empty());
    }

    #[test]
    fn test_parse_color_list_takes_first_six_digits() {
        // Longer runs match on their first six digits
        assert_eq!(parse_color_list("0xff00ff00"), vec![Rgb::from_hex(0xff00ff)]);
    }

    #[test]
    fn test_try_from_rejects_wide_values() {
        assert_eq!(Rgb::try_from(0xff00ff).unwrap(), Rgb::new(1.0, 0.0, 1.0));
        assert_eq!(Rgb::try_from(MAX_HEX).unwrap(), Rgb::WHITE);
        assert!(matches!(
            Rgb::try_from(0x1ff00ff),
            Err(WormholeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_is_normalized() {
        assert!(Rgb::WHITE.is_normalized());
        assert!(!Rgb::new(1.5, 0.0, 0.0).is_normalized());
        assert!(!Rgb::new(f32::NAN, 0.0, 0.0).is_normalized());
    }
}
