//! Color types and color space conversions.
//!
//! Provides RGBA and HSLA color representations with conversions between them.
//! RGB channels are 8-bit integers; alpha, hue, saturation, and lightness are
//! floating-point fractions (hue in degrees).
//!
//! # References
//!
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." *SIGGRAPH '78*.
//!   (the RGB ↔ HSL conversion pair implemented here)

/// RGBA color: 8-bit channels with a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = fully transparent, 1.0 = fully opaque).
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 1.0);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether the color is fully opaque.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Linear interpolation between two colors, alpha included.
    ///
    /// `t` is clamped to `0.0..=1.0`; channels round to the nearest integer.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        let mix = |a: u8, b: u8| (f32::from(a) * inv_t + f32::from(b) * t).round() as u8;

        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            self.a * inv_t + other.a * t,
        )
    }

    /// Convert to HSLA.
    ///
    /// Equal channels (pure greys) are achromatic: hue and saturation are 0.
    #[must_use]
    pub fn to_hsla(self) -> Hsla {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsla::new(0.0, 0.0, l, self.a);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Hue from the dominant channel, in sixths of a turn.
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsla::new(h * 60.0, s, l, self.a)
    }

    /// Raise lightness by `amount` (clamped to `0.0..=1.0` after the shift).
    ///
    /// Negative amounts darken; alpha passes through untouched.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let mut hsla = self.to_hsla();
        hsla.l = (hsla.l + amount).clamp(0.0, 1.0);
        hsla.to_rgba()
    }

    /// Lower lightness by `amount` (clamped to `0.0..=1.0` after the shift).
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    /// Raise saturation by `amount` (clamped to `0.0..=1.0` after the shift).
    ///
    /// Negative amounts desaturate; alpha passes through untouched.
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        let mut hsla = self.to_hsla();
        hsla.s = (hsla.s + amount).clamp(0.0, 1.0);
        hsla.to_rgba()
    }

    /// Lower saturation by `amount` (clamped to `0.0..=1.0` after the shift).
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        self.saturate(-amount)
    }

    /// Rotate hue by `degrees`, wrapping into `[0, 360)`.
    #[must_use]
    pub fn rotate_hue(self, degrees: f32) -> Self {
        let mut hsla = self.to_hsla();
        hsla.h = wrap_hue(hsla.h + degrees);
        hsla.to_rgba()
    }
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue (0.0-360.0 degrees).
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Lightness (0.0-1.0).
    pub l: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Convert to RGBA, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h / 360.0;
        let s = self.s;
        let l = self.l;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;

            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            self.a,
        )
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Wrap a hue angle into `[0.0, 360.0)` degrees.
///
/// Negative angles wrap upward: `-30.0` becomes `330.0`.
pub(crate) fn wrap_hue(h: f32) -> f32 {
    h.rem_euclid(360.0)
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

impl From<Rgba> for Hsla {
    fn from(rgba: Rgba) -> Self {
        rgba.to_hsla()
    }
}
