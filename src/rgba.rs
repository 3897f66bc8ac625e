//!
//! Normalized RGBA color.
//!

use crate::error::ParseColorErr;
use ratatui_core::style::Color;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color with four channels in the range `0.0..=1.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// From 8-bit channels.
    pub fn from_rgba8(v: [u8; 4]) -> Self {
        Self {
            r: v[0] as f32 / 255.0,
            g: v[1] as f32 / 255.0,
            b: v[2] as f32 / 255.0,
            a: v[3] as f32 / 255.0,
        }
    }

    /// To 8-bit channels. Values outside the range are clamped.
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn c8(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [c8(self.r), c8(self.g), c8(self.b), c8(self.a)]
    }

    /// Hex notation `#RRGGBB`.
    /// Translucent colors get `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// All channels are within `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        self.as_array()
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    /// Gives the luminance according to BT.709.
    pub fn luminance_bt(&self) -> f32 {
        0.2126f32 * self.r + 0.7152f32 * self.g + 0.0722f32 * self.b
    }

    /// Black or white, whichever is readable on this color.
    pub fn text_color(&self) -> Color {
        if self.luminance_bt() >= 0.4117f32 {
            Color::Black
        } else {
            Color::White
        }
    }

    pub const fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(v: Rgba) -> Self {
        v.as_array()
    }
}

/// Terminal color. Alpha is dropped.
impl From<Rgba> for Color {
    fn from(v: Rgba) -> Self {
        let [r, g, b, _] = v.to_rgba8();
        Color::Rgb(r, g, b)
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorErr;

    /// Parses `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
            return Err(ParseColorErr(s.to_string()));
        }

        let mut v = [255u8; 4];
        for (i, c) in v.iter_mut().enumerate().take(hex.len() / 2) {
            *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseColorErr(s.to_string()))?;
        }
        Ok(Self::from_rgba8(v))
    }
}
