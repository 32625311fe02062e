//! Input shapes accepted by the transform pipeline.
//!
//! A color can arrive as a hex string, a numeric triplet or quadruplet, or a
//! record of named channels. [`ColorInput`] captures the shape once at the
//! boundary; the rest of the pipeline only ever sees normalized channels.

use std::str::FromStr;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A color in one of the accepted input shapes.
///
/// `From` conversions exist for the common source shapes so call sites can
/// pass a `&str`, an array, or an [`Rgba`] directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorInput {
    /// Hex string: `"#RGB"`, `"#RRGGBB"`, or `"#RRGGBBAA"`; the `#` is
    /// optional and digits are case-insensitive.
    Hex(String),
    /// Numeric `[r, g, b]` triplet, channels in `0.0..=255.0`.
    Rgb([f32; 3]),
    /// Numeric `[r, g, b, a]` quadruplet; the fourth element is an alpha
    /// fraction in `0.0..=1.0`.
    Rgba([f32; 4]),
    /// Named channels with an optional alpha fraction.
    Channels {
        /// Red channel (0.0-255.0).
        r: f32,
        /// Green channel (0.0-255.0).
        g: f32,
        /// Blue channel (0.0-255.0).
        b: f32,
        /// Alpha fraction (0.0-1.0), if the source carried one.
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        a: Option<f32>,
    },
}

/// Channels normalized out of a [`ColorInput`], before alpha resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Decoded {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha the input itself carried, already clamped to `0.0..=1.0`.
    pub alpha: Option<f32>,
}

impl ColorInput {
    /// Normalize to 8-bit channels plus whatever alpha the input carried.
    ///
    /// Numeric channels round to the nearest integer and clamp to `0..=255`;
    /// embedded alpha values clamp to `0.0..=1.0`. Only hex parsing can fail.
    pub(crate) fn decode(&self) -> Result<Decoded> {
        match self {
            Self::Hex(text) => parse_hex(text),
            Self::Rgb([r, g, b]) => Ok(Decoded {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
                alpha: None,
            }),
            Self::Rgba([r, g, b, a]) => Ok(Decoded {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
                alpha: Some(clamp_alpha(*a)),
            }),
            Self::Channels { r, g, b, a } => Ok(Decoded {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
                alpha: a.map(clamp_alpha),
            }),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Hex(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Hex(text)
    }
}

impl From<[f32; 3]> for ColorInput {
    fn from(channels: [f32; 3]) -> Self {
        Self::Rgb(channels)
    }
}

impl From<[f32; 4]> for ColorInput {
    fn from(channels: [f32; 4]) -> Self {
        Self::Rgba(channels)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(channels: [u8; 3]) -> Self {
        Self::Rgb(channels.map(f32::from))
    }
}

impl From<Rgba> for ColorInput {
    fn from(color: Rgba) -> Self {
        Self::Channels {
            r: f32::from(color.r),
            g: f32::from(color.g),
            b: f32::from(color.b),
            a: Some(color.a),
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Parse a hex color string; inputs without an alpha byte come back
    /// fully opaque.
    fn from_str(s: &str) -> Result<Self> {
        let decoded = parse_hex(s)?;
        Ok(Self::new(
            decoded.r,
            decoded.g,
            decoded.b,
            decoded.alpha.unwrap_or(1.0),
        ))
    }
}

/// Parse a hex color string.
///
/// Accepts 3-digit shorthand (each nibble doubled), 6-digit `rrggbb`, and
/// 8-digit `rrggbbaa`, case-insensitive, with an optional leading `#` and
/// surrounding ASCII whitespace tolerated.
///
/// # Errors
///
/// Returns [`Error::InvalidColorFormat`] for any other digit count or any
/// non-hex character.
pub(crate) fn parse_hex(input: &str) -> Result<Decoded> {
    let trimmed = input.trim();
    decode_hex(trimmed).ok_or_else(|| Error::InvalidColorFormat(trimmed.to_string()))
}

fn decode_hex(text: &str) -> Option<Decoded> {
    let digits = text.strip_prefix('#').unwrap_or(text).as_bytes();

    match digits.len() {
        3 => {
            // Shorthand doubles each nibble: "f0c" reads as "ff00cc".
            let r = hex_nibble(digits[0])?;
            let g = hex_nibble(digits[1])?;
            let b = hex_nibble(digits[2])?;
            Some(Decoded {
                r: r * 17,
                g: g * 17,
                b: b * 17,
                alpha: None,
            })
        }
        6 => Some(Decoded {
            r: hex_pair(digits, 0)?,
            g: hex_pair(digits, 2)?,
            b: hex_pair(digits, 4)?,
            alpha: None,
        }),
        8 => Some(Decoded {
            r: hex_pair(digits, 0)?,
            g: hex_pair(digits, 2)?,
            b: hex_pair(digits, 4)?,
            alpha: Some(f32::from(hex_pair(digits, 6)?) / 255.0),
        }),
        _ => None,
    }
}

fn hex_pair(digits: &[u8], index: usize) -> Option<u8> {
    let hi = hex_nibble(digits[index])?;
    let lo = hex_nibble(digits[index + 1])?;
    Some((hi << 4) | lo)
}

fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Round and clamp a numeric channel to `0..=255`.
///
/// The saturating cast maps NaN to 0 and out-of-range values to the nearest
/// bound, so numeric inputs never error.
fn channel(value: f32) -> u8 {
    value.round() as u8
}

/// Clamp an alpha fraction to `0.0..=1.0`; NaN collapses to 0.0.
fn clamp_alpha(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
