//! Decade drums: one rolling digit per power of ten.
//!
//! Each drum shows two stacked glyphs, the current digit and the one that
//! rolls in next, and is translated vertically by a fractional offset so the
//! digit appears to scroll continuously as the value changes.
//!
//! # Sign Handling
//!
//! Digit counts are always taken from `|value|`. The scroll offset of the
//! topmost drum is also computed on `|value|`, but subordinate drums use the
//! signed value for their offset, so below zero they scroll in the opposite
//! direction. This matches the instrument being emulated and is kept as-is.

use micromath::F32;

use crate::config::is_decade_magnitude;

/// The two glyphs shown by a drum and how far it has rolled between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DigitPair {
    /// Digit currently in the window (lower glyph).
    pub low: u32,
    /// Digit rolling in from above (upper glyph).
    pub high: u32,
    /// Fractional roll from `low` (0.0) toward `high` (1.0).
    pub offset: f32,
}

/// Computes the [`DigitPair`] for one decade of the readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecadeWheel {
    magnitude: u32,
    topmost: bool,
}

impl DecadeWheel {
    /// Most significant drum. Its count is not wrapped, so it never carries.
    ///
    /// # Panics
    ///
    /// If `magnitude` is not a power of ten >= 10.
    pub const fn topmost(magnitude: u32) -> Self {
        assert!(is_decade_magnitude(magnitude), "decade magnitude must be a power of ten >= 10");
        Self {
            magnitude,
            topmost: true,
        }
    }

    /// Drum below another one; shows a single digit that wraps 9 -> 0.
    ///
    /// # Panics
    ///
    /// If `magnitude` is not a power of ten >= 10.
    pub const fn subordinate(magnitude: u32) -> Self {
        assert!(is_decade_magnitude(magnitude), "decade magnitude must be a power of ten >= 10");
        Self {
            magnitude,
            topmost: false,
        }
    }

    #[inline]
    pub const fn magnitude(&self) -> u32 { self.magnitude }

    #[inline]
    pub const fn is_topmost(&self) -> bool { self.topmost }

    /// Compute the digits and roll offset for `value`.
    ///
    /// `value` must be finite; the pipeline filters everything else.
    pub fn compute(
        &self,
        value: f32,
    ) -> DigitPair {
        let magnitude = self.magnitude as f32;
        let abs = F32(value).abs().0;
        let count = F32(abs / magnitude).trunc().0;

        if self.topmost {
            let low = count as u32;
            return DigitPair {
                low,
                high: low.saturating_add(1),
                offset: (abs - count * magnitude) / magnitude,
            };
        }

        let upper_count = F32(abs / (magnitude * 10.0)).trunc().0;
        // Guard against f32 rounding once counts exceed the mantissa
        let low = ((count - upper_count * 10.0) as u32) % 10;
        let signed_count = F32(value / magnitude).trunc().0;

        DigitPair {
            low,
            high: (low + 1) % 10,
            offset: (value - signed_count * magnitude) / magnitude,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
