//! The color transform pipeline.
//!
//! [`transform`] runs the whole chain in one call: decode the input shape,
//! resolve the effective alpha, apply any HSL adjustments, and serialize in
//! the requested format. Everything is pure computation over the arguments.

use crate::color::{wrap_hue, Rgba};
use crate::error::{Error, Result};
use crate::input::ColorInput;
use crate::options::{Adjustments, ColorOptions};
use crate::output;

/// Parse a color, apply the configured adjustments, and serialize it.
///
/// The input can be anything convertible to [`ColorInput`]: a hex string, a
/// `[r, g, b]` or `[r, g, b, a]` array, or an [`Rgba`] value. Alpha is
/// resolved by precedence: an explicit `opacity` argument wins outright,
/// else an alpha embedded in the input (8-digit hex, array fourth element,
/// record `a` field), else `options.alpha`. The explicit argument and
/// `options.alpha` must lie in `0.0..=1.0`; embedded alphas are clamped
/// instead, since they were part of a successfully parsed color.
///
/// When no adjustment is configured the HSL round-trip is skipped entirely,
/// so channel values pass through exactly.
///
/// ```
/// use matiz::{transform, Adjustments, ColorOptions, OutputFormat};
///
/// let options = ColorOptions::new()
///     .format(OutputFormat::Hsl)
///     .adjustments(Adjustments::new().hue(-30.0));
///
/// assert_eq!(transform("#FF0000", None, &options)?, "hsl(330deg 100% 50%)");
/// # Ok::<(), matiz::Error>(())
/// ```
///
/// # Errors
///
/// - [`Error::InvalidColorFormat`] if a hex input has a digit count other
///   than 3, 6, or 8, or contains non-hex characters.
/// - [`Error::InvalidOpacityRange`] if `opacity` (or, when it is the one
///   consulted, `options.alpha`) lies outside `0.0..=1.0`.
pub fn transform(
    color: impl Into<ColorInput>,
    opacity: Option<f32>,
    options: &ColorOptions,
) -> Result<String> {
    let decoded = color.into().decode()?;
    let alpha = resolve_alpha(opacity, decoded.alpha, options.alpha)?;

    let mut resolved = Rgba::new(decoded.r, decoded.g, decoded.b, alpha);
    if !options.adjustments.is_empty() {
        resolved = apply_adjustments(resolved, &options.adjustments);
    }

    Ok(output::serialize(resolved, options.format))
}

/// Pick the effective alpha: explicit argument, then input-embedded, then
/// the configured fallback.
fn resolve_alpha(opacity: Option<f32>, embedded: Option<f32>, fallback: f32) -> Result<f32> {
    match (opacity, embedded) {
        (Some(explicit), _) => validate_alpha(explicit),
        (None, Some(embedded)) => Ok(embedded),
        (None, None) => validate_alpha(fallback),
    }
}

fn validate_alpha(value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidOpacityRange { value })
    }
}

/// Shift the color in HSL space, one component per configured delta.
///
/// Alpha rides along untouched.
fn apply_adjustments(color: Rgba, adjustments: &Adjustments) -> Rgba {
    let mut hsla = color.to_hsla();

    if let Some(degrees) = adjustments.hue {
        hsla.h = wrap_hue(hsla.h + degrees);
    }
    if let Some(delta) = adjustments.saturation {
        hsla.s = (hsla.s + delta).clamp(0.0, 1.0);
    }
    if let Some(delta) = adjustments.lightness {
        hsla.l = (hsla.l + delta).clamp(0.0, 1.0);
    }

    hsla.to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OutputFormat;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_alpha_explicit_wins() {
        let alpha = resolve_alpha(Some(0.25), Some(0.5), 1.0).unwrap();
        assert_relative_eq!(alpha, 0.25);
    }

    #[test]
    fn test_resolve_alpha_embedded_beats_fallback() {
        let alpha = resolve_alpha(None, Some(0.5), 0.9).unwrap();
        assert_relative_eq!(alpha, 0.5);
    }

    #[test]
    fn test_resolve_alpha_fallback() {
        let alpha = resolve_alpha(None, None, 0.9).unwrap();
        assert_relative_eq!(alpha, 0.9);
    }

    #[test]
    fn test_resolve_alpha_validates_explicit() {
        assert_eq!(
            resolve_alpha(Some(1.5), None, 1.0),
            Err(Error::InvalidOpacityRange { value: 1.5 })
        );
        assert_eq!(
            resolve_alpha(Some(-0.1), Some(0.5), 1.0),
            Err(Error::InvalidOpacityRange { value: -0.1 })
        );
        assert!(resolve_alpha(Some(f32::NAN), None, 1.0).is_err());
    }

    #[test]
    fn test_resolve_alpha_validates_fallback() {
        assert_eq!(
            resolve_alpha(None, None, 2.0),
            Err(Error::InvalidOpacityRange { value: 2.0 })
        );
    }

    #[test]
    fn test_resolve_alpha_skips_fallback_validation_when_unused() {
        // A bad fallback only matters when it is the value consulted.
        assert!(resolve_alpha(Some(0.5), None, 9.0).is_ok());
        assert!(resolve_alpha(None, Some(0.5), 9.0).is_ok());
    }

    #[test]
    fn test_apply_adjustments_hue_wraps() {
        let adjusted = apply_adjustments(Rgba::RED, &Adjustments::new().hue(-30.0));
        assert_relative_eq!(adjusted.to_hsla().h, 330.0, epsilon = 0.5);
    }

    #[test]
    fn test_apply_adjustments_clamps_lightness() {
        let adjusted = apply_adjustments(Rgba::RED, &Adjustments::new().lightness(2.0));
        assert_eq!(adjusted, Rgba::WHITE);

        let adjusted = apply_adjustments(Rgba::RED, &Adjustments::new().lightness(-2.0));
        assert_eq!(adjusted, Rgba::BLACK);
    }

    #[test]
    fn test_apply_adjustments_clamps_saturation() {
        let adjusted = apply_adjustments(Rgba::rgb(128, 64, 64), &Adjustments::new().saturation(-2.0));
        assert_eq!(adjusted.r, adjusted.g);
        assert_eq!(adjusted.g, adjusted.b);
    }

    #[test]
    fn test_apply_adjustments_preserves_alpha() {
        let adjusted = apply_adjustments(
            Rgba::RED.with_alpha(0.3),
            &Adjustments::new().hue(45.0).lightness(0.1),
        );
        assert_relative_eq!(adjusted.a, 0.3);
    }

    #[test]
    fn test_transform_default_options() {
        let out = transform("#FF0000", None, &ColorOptions::default()).unwrap();
        assert_eq!(out, "rgb(255 0 0)");
    }

    #[test]
    fn test_transform_accepts_array_inputs() {
        let options = ColorOptions::default();
        assert_eq!(
            transform([255.0, 0.0, 0.0], None, &options).unwrap(),
            "rgb(255 0 0)"
        );
        assert_eq!(
            transform([255.0, 0.0, 0.0, 0.5], None, &options).unwrap(),
            "rgb(255 0 0 / 0.50)"
        );
        assert_eq!(
            transform([255u8, 0, 0], None, &options).unwrap(),
            "rgb(255 0 0)"
        );
    }

    #[test]
    fn test_transform_rejects_bad_hex() {
        let err = transform("#12345", None, &ColorOptions::default()).unwrap_err();
        assert_eq!(err, Error::InvalidColorFormat("#12345".to_string()));
    }

    #[test]
    fn test_transform_rejects_bad_opacity() {
        let err = transform("#FF0000", Some(1.5), &ColorOptions::default()).unwrap_err();
        assert_eq!(err, Error::InvalidOpacityRange { value: 1.5 });
    }

    #[test]
    fn test_transform_skips_roundtrip_without_adjustments() {
        // With no adjustments, channels must pass through exactly.
        let options = ColorOptions::new().format(OutputFormat::Hex);
        for hex in ["#010203", "#fdfe01", "#6be0d1", "#808080"] {
            assert_eq!(transform(hex, None, &options).unwrap(), hex);
        }
    }

    #[test]
    fn test_transform_explicit_zero_delta_still_applies() {
        // Some(0.0) is a real adjustment: the color goes through HSL and
        // back, staying within one step per channel.
        let options = ColorOptions::new()
            .format(OutputFormat::Hex)
            .adjustments(Adjustments::new().lightness(0.0));
        let out = transform("#6be0d1", None, &options).unwrap();

        let original: Rgba = "#6be0d1".parse().unwrap();
        let adjusted: Rgba = out.parse().unwrap();
        assert!(adjusted.r.abs_diff(original.r) <= 1);
        assert!(adjusted.g.abs_diff(original.g) <= 1);
        assert!(adjusted.b.abs_diff(original.b) <= 1);
    }
}
