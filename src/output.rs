//! Serializers for the textual output formats.
//!
//! All three emit CSS-compatible color literals. Alpha is appended only when
//! the color is not fully opaque, so opaque colors stay in the shortest form.

use crate::color::Rgba;
use crate::options::OutputFormat;

/// Serialize a color in the requested format.
pub(crate) fn serialize(color: Rgba, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => to_hex_string(color),
        OutputFormat::Rgb => to_rgb_string(color),
        OutputFormat::Hsl => to_hsl_string(color),
    }
}

/// Lowercase hex literal: `#rrggbb`, or `#rrggbbaa` when not fully opaque.
///
/// The alpha byte is `round(a * 255)`, so any hex-parsed color reserializes
/// to the digits it came from.
#[must_use]
pub fn to_hex_string(color: Rgba) -> String {
    if color.is_opaque() {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r,
            color.g,
            color.b,
            (color.a * 255.0).round() as u8
        )
    }
}

/// Functional RGB literal: `rgb(R G B)`, or `rgb(R G B / A.AA)` when not
/// fully opaque (alpha to two decimal places).
#[must_use]
pub fn to_rgb_string(color: Rgba) -> String {
    if color.is_opaque() {
        format!("rgb({} {} {})", color.r, color.g, color.b)
    } else {
        format!("rgb({} {} {} / {:.2})", color.r, color.g, color.b, color.a)
    }
}

/// Functional HSL literal: `hsl(Hdeg S% L%)`, or with `/ A.AA` appended when
/// not fully opaque.
///
/// Hue rounds to whole degrees and stays in `0..360` even when the rounding
/// itself lands on 360; saturation and lightness round to whole percent.
#[must_use]
pub fn to_hsl_string(color: Rgba) -> String {
    let hsla = color.to_hsla();
    let h = (hsla.h.round() as i32).rem_euclid(360);
    let s = (hsla.s * 100.0).round() as i32;
    let l = (hsla.l * 100.0).round() as i32;

    if color.is_opaque() {
        format!("hsl({h}deg {s}% {l}%)")
    } else {
        format!("hsl({h}deg {s}% {l}% / {:.2})", color.a)
    }
}
