//! Readout color and NEG marker state.
//!
//! # Color
//!
//! Digits turn amber when the altitude is below the minimum descent altitude
//! (MDA). An MDA of exactly `0.0` means none is set and the comparison is
//! skipped; this sentinel comes from the source bus and is not a numeric
//! edge case.
//!
//! # Sign
//!
//! The readout has no minus glyph. Negative altitudes show a vertical "NEG"
//! marker to the left of the drums instead.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{AMBER, GREEN, WHITE};

/// Sentinel threshold meaning "no minimum set".
pub const THRESHOLD_DISABLED: f32 = 0.0;

// =============================================================================
// Color Threshold
// =============================================================================

/// Two-state digit color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorTag {
    /// At or above the threshold, or no threshold set (green).
    #[default]
    Normal,
    /// Below the threshold (amber).
    Caution,
}

impl ColorTag {
    /// Display color for digits in this state.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Normal => GREEN,
            Self::Caution => AMBER,
        }
    }

    #[inline]
    pub const fn is_caution(self) -> bool { matches!(self, Self::Caution) }
}

/// Compare the value against the threshold.
///
/// Returns `Caution` only when a threshold is set and the value is strictly below it.
#[inline]
pub fn evaluate_color(
    value: f32,
    threshold: f32,
) -> ColorTag {
    if threshold != THRESHOLD_DISABLED && value < threshold {
        ColorTag::Caution
    } else {
        ColorTag::Normal
    }
}

// =============================================================================
// Sign Indicator
// =============================================================================

/// Visibility of the NEG marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignState {
    #[default]
    Hidden,
    Visible,
}

impl SignState {
    #[inline]
    pub const fn is_visible(self) -> bool { matches!(self, Self::Visible) }

    /// Text color of the marker.
    pub const fn color(self) -> Rgb565 { WHITE }
}

/// NEG marker state for a value. No hysteresis.
#[inline]
pub fn sign_indicator(value: f32) -> SignState { if value < 0.0 { SignState::Visible } else { SignState::Hidden } }

// =============================================================================
// Unit Tests
// =============================================================================
