//! # Matiz
//!
//! CSS-style color parsing, HSL adjustment, and formatting.
//!
//! Matiz accepts a color in any of the common source shapes (hex string,
//! numeric triplet or quadruplet, named channels), optionally re-colors it
//! with hue/saturation/lightness deltas or a new opacity, and serializes it
//! as a hex, functional `rgb()`, or functional `hsl()` literal.
//!
//! The whole pipeline is pure computation: no I/O, no global state, no
//! allocation beyond the returned string. It is safe to call from any number
//! of threads without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use matiz::{transform, Adjustments, ColorOptions, OutputFormat};
//!
//! // Parse, re-format.
//! let options = ColorOptions::default();
//! assert_eq!(transform("#F00", None, &options)?, "rgb(255 0 0)");
//!
//! // Darken a theme color and emit hex.
//! let options = ColorOptions::new()
//!     .format(OutputFormat::Hex)
//!     .adjustments(Adjustments::new().lightness(-0.1));
//! let darker = transform("#80cbc4", None, &options)?;
//! assert_eq!(darker, "#5cbcb3");
//!
//! // Override opacity; the explicit argument beats any embedded alpha.
//! let faded = transform("#ff000080", Some(0.25), &ColorOptions::default())?;
//! assert_eq!(faded, "rgb(255 0 0 / 0.25)");
//! # Ok::<(), matiz::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for inputs, options, and color types
//!
//! ## Academic References
//!
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." *SIGGRAPH '78*.
//!   (the RGB ↔ HSL conversion pair)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color arithmetic
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Input shapes accepted by the transform pipeline.
pub mod input;

/// Transform options: fallback alpha, HSL adjustments, output format.
pub mod options;

/// The color transform pipeline.
pub mod transform;

/// Serializers for the textual output formats.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for matiz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Re-exports
// ============================================================================

pub use color::{Hsla, Rgba};
pub use input::ColorInput;
pub use options::{Adjustments, ColorOptions, OutputFormat};
pub use output::{to_hex_string, to_hsl_string, to_rgb_string};
pub use transform::transform;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use matiz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsla, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::input::ColorInput;
    pub use crate::options::{Adjustments, ColorOptions, OutputFormat};
    pub use crate::transform::transform;
}

// ============================================================================
// Tests
// ============================================================================
