//! Colors and gradients

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::units::format_number;

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    fn channels(&self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Hex notation, `#rrggbb` for opaque colors and `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.channels();
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", channel(self.a))
        }
    }

    /// CSS notation, `#rrggbb` for opaque colors and `rgba(..)` otherwise
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            return self.to_hex();
        }
        let [r, g, b] = self.channels();
        format!("rgba({r}, {g}, {b}, {})", format_number(self.a.max(0.0)))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    #[error("color `{0}` must have 3, 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains non-hex digits")]
    InvalidDigit(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        // Digits are validated above, so the radix conversions below cannot fail.
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        let [r, g, b, a] = match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    let v = u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
                    v * 17
                };
                [nibble(0), nibble(1), nibble(2), 255]
            }
            6 => [byte(0), byte(2), byte(4), 255],
            8 => [byte(0), byte(2), byte(4), byte(6)],
            _ => return Err(ColorParseError::InvalidLength(s.to_string())),
        };

        Ok(Color::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A color stop in a gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient line, `0.0..=1.0`
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Angle of the gradient line in degrees
    pub angle: f32,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Two-stop gradient running from `from` to `to`
    pub fn linear(angle: f32, from: Color, to: Color) -> Self {
        Self {
            angle,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// CSS `linear-gradient(..)` notation
    pub fn to_css(&self) -> String {
        let mut out = format!("linear-gradient({}deg", format_number(self.angle));
        for stop in &self.stops {
            out.push_str(&format!(
                ", {} {}%",
                stop.color.to_css(),
                format_number(stop.offset * 100.0)
            ));
        }
        out.push(')');
        out
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::from_hex(0x1E66F5).to_css(), "#1e66f5");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let color = Color::from_hex(0x1E66F5).with_alpha(0.3);
        assert_eq!(color.to_css(), "rgba(30, 102, 245, 0.3)");
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn parses_short_long_and_alpha_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "#1e66f5".parse::<Color>().unwrap().to_hex(),
            Color::from_hex(0x1E66F5).to_hex()
        );
        let translucent: Color = "#00000080".parse().unwrap();
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(
            "fff".parse::<Color>(),
            Err(ColorParseError::MissingHash("fff".to_string()))
        );
        assert_eq!(
            "#ffff".parse::<Color>(),
            Err(ColorParseError::InvalidLength("#ffff".to_string()))
        );
        assert_eq!(
            "#gggggg".parse::<Color>(),
            Err(ColorParseError::InvalidDigit("#gggggg".to_string()))
        );
    }

    #[test]
    fn gradient_css() {
        let gradient = Gradient::linear(135.0, Color::from_hex(0x1E66F5), Color::from_hex(0x8839EF));
        assert_eq!(
            gradient.to_css(),
            "linear-gradient(135deg, #1e66f5 0%, #8839ef 100%)"
        );
    }
}
