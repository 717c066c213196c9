use std::fmt;

use crate::foundation::error::{ShimmerError, ShimmerResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as `"#RRGGBB"` when opaque and `"#RRGGBBAA"` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Same color with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn parse_hex(s: &str) -> ShimmerResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !(digits.len() == 6 || digits.len() == 8) {
            return Err(ShimmerError::validation(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }
        // `from_str_radix` would accept a leading sign in each pair.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ShimmerError::validation(format!(
                "color '{s}' has invalid hex digits"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ShimmerError::validation(format!("color '{s}' has invalid hex digits")))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Euclidean distance over normalized RGBA channels.
    pub fn distance(self, other: Self) -> f64 {
        let d = |x: u8, y: u8| (f64::from(x) - f64::from(y)) / 255.0;
        let (dr, dg, db, da) = (
            d(self.r, other.r),
            d(self.g, other.g),
            d(self.b, other.b),
            d(self.a, other.a),
        );
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ShimmerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

/// Horizontal text alignment as reported by the host label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

impl TextAlign {
    /// Only right alignment anchors the shimmer band to the trailing edge.
    pub fn is_trailing(self) -> bool {
        matches!(self, Self::Right)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
