//! Transform options: fallback alpha, HSL adjustments, output format.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Options controlling a [`transform`](crate::transform::transform) call.
///
/// Built builder-style; the default is fully opaque, no adjustments,
/// functional RGB output.
///
/// ```
/// use matiz::{Adjustments, ColorOptions, OutputFormat};
///
/// let options = ColorOptions::new()
///     .format(OutputFormat::Hsl)
///     .adjustments(Adjustments::new().lightness(0.1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorOptions {
    /// Fallback alpha fraction (0.0-1.0), used only when neither the call
    /// nor the input supplies one. Validated, not clamped.
    pub alpha: f32,
    /// Output serialization format.
    pub format: OutputFormat,
    /// Deltas applied in HSL space before serialization.
    pub adjustments: Adjustments,
}

impl ColorOptions {
    /// Create options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback alpha fraction.
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the HSL adjustments.
    #[must_use]
    pub fn adjustments(mut self, adjustments: Adjustments) -> Self {
        self.adjustments = adjustments;
        self
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            format: OutputFormat::Rgb,
            adjustments: Adjustments::new(),
        }
    }
}

/// Additive deltas applied in HSL space.
///
/// An absent field means "leave the component alone"; an explicit `0.0` is
/// still applied (and still forces the round-trip through HSL). Lightness
/// and saturation results clamp to `0.0..=1.0`; hue wraps into `0..360`
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Adjustments {
    /// Lightness delta, conceptually in `-1.0..=1.0`.
    pub lightness: Option<f32>,
    /// Saturation delta, conceptually in `-1.0..=1.0`.
    pub saturation: Option<f32>,
    /// Hue rotation in degrees; negative values rotate backwards.
    pub hue: Option<f32>,
}

impl Adjustments {
    /// No adjustments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lightness: None,
            saturation: None,
            hue: None,
        }
    }

    /// Set the lightness delta.
    #[must_use]
    pub fn lightness(mut self, delta: f32) -> Self {
        self.lightness = Some(delta);
        self
    }

    /// Set the saturation delta.
    #[must_use]
    pub fn saturation(mut self, delta: f32) -> Self {
        self.saturation = Some(delta);
        self
    }

    /// Set the hue rotation in degrees.
    #[must_use]
    pub fn hue(mut self, degrees: f32) -> Self {
        self.hue = Some(degrees);
        self
    }

    /// Whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lightness.is_none() && self.saturation.is_none() && self.hue.is_none()
    }
}

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// Lowercase `#rrggbb`, alpha byte appended when not fully opaque.
    Hex,
    /// Functional `rgb(R G B)`, slash-separated alpha when not fully opaque.
    #[default]
    Rgb,
    /// Functional `hsl(Hdeg S% L%)`, slash-separated alpha when not fully
    /// opaque.
    Hsl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Parse a format name. Only the lowercase names `"hex"`, `"rgb"`, and
    /// `"hsl"` are recognized; anything else is [`Error::InvalidFormat`] —
    /// never a silent fallback.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_options() {
        let options = ColorOptions::default();
        assert_relative_eq!(options.alpha, 1.0);
        assert_eq!(options.format, OutputFormat::Rgb);
        assert!(options.adjustments.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let options = ColorOptions::new()
            .alpha(0.5)
            .format(OutputFormat::Hex)
            .adjustments(Adjustments::new().hue(30.0));

        assert_relative_eq!(options.alpha, 0.5);
        assert_eq!(options.format, OutputFormat::Hex);
        assert_eq!(options.adjustments.hue, Some(30.0));
    }

    #[test]
    fn test_adjustments_builders() {
        let adjustments = Adjustments::new()
            .lightness(0.1)
            .saturation(-0.2)
            .hue(-30.0);

        assert_eq!(adjustments.lightness, Some(0.1));
        assert_eq!(adjustments.saturation, Some(-0.2));
        assert_eq!(adjustments.hue, Some(-30.0));
    }

    #[test]
    fn test_adjustments_is_empty() {
        assert!(Adjustments::new().is_empty());
        assert!(Adjustments::default().is_empty());

        // An explicit zero delta still counts as present.
        assert!(!Adjustments::new().lightness(0.0).is_empty());
        assert!(!Adjustments::new().hue(0.0).is_empty());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Hex.to_string(), "hex");
        assert_eq!(OutputFormat::Rgb.to_string(), "rgb");
        assert_eq!(OutputFormat::Hsl.to_string(), "hsl");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("hex".parse::<OutputFormat>().unwrap(), OutputFormat::Hex);
        assert_eq!("rgb".parse::<OutputFormat>().unwrap(), OutputFormat::Rgb);
        assert_eq!("hsl".parse::<OutputFormat>().unwrap(), OutputFormat::Hsl);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        for name in ["css", "HEX", "rgba", ""] {
            let err = name.parse::<OutputFormat>().unwrap_err();
            assert_eq!(err, Error::InvalidFormat(name.to_string()));
        }
    }

    #[test]
    fn test_output_format_roundtrip() {
        for format in [OutputFormat::Hex, OutputFormat::Rgb, OutputFormat::Hsl] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Rgb);
    }
}
