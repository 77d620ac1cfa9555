//! Fine wheel: the small two-digit drum to the right of the decade drums.
//!
//! Unlike the decade drums it moves in coarse steps (20 ft by default) and
//! shows four labels at once, stacked bottom to top:
//!
//! ```text
//! slot 3   base + 2*step   (top, rolling in)
//! slot 2   base + step
//! slot 1   base            (in the window)
//! slot 0   base - step     (bottom, rolling out)
//! ```
//!
//! Every label is wrapped into `[0, 100)`, so across a hundreds carry the
//! stack reads e.g. `40 / 20 / 00 / 80` without a discontinuity.

use core::fmt::Write;

use heapless::String;
use micromath::F32;

use crate::config::{FINE_WHEEL_PHASES, FINE_WHEEL_RANGE, ReadoutConfig};

/// Label text for one fine-wheel slot, always two zero-padded digits.
pub type FineLabel = String<2>;

/// The four fine-wheel labels and the shared roll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FineWheelState {
    /// Label values bottom to top, each in `[0, 100)`.
    pub values: [u8; FINE_WHEEL_PHASES],
    /// Roll within the current step, in half-steps (`0.0..2.0` for positive values).
    pub offset: f32,
}

impl FineWheelState {
    /// Format a single slot as a two-digit, zero-padded label (`7` -> `"07"`).
    pub fn label(
        &self,
        slot: usize,
    ) -> FineLabel {
        let mut label = FineLabel::new();
        write!(label, "{:02}", self.values[slot]).ok();
        label
    }

    /// All four labels, bottom to top.
    pub fn labels(&self) -> [FineLabel; FINE_WHEEL_PHASES] { core::array::from_fn(|slot| self.label(slot)) }
}

/// Computes the [`FineWheelState`] for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FineWheel {
    step: u32,
}

impl FineWheel {
    /// Create a fine wheel using the step from a validated config.
    pub const fn new(config: &ReadoutConfig) -> Self {
        Self {
            step: config.fine_step(),
        }
    }

    #[inline]
    pub const fn step(&self) -> u32 { self.step }

    /// Compute labels and offset for `value`.
    ///
    /// `value` must be finite; the pipeline filters everything else.
    pub fn compute(
        &self,
        value: f32,
    ) -> FineWheelState {
        let step_ft = self.step as f32;
        let steps = F32(value / step_ft).trunc().0;

        // Whole steps within the current hundred; the hundreds carry cancels mod 100
        let range = i64::from(FINE_WHEEL_RANGE);
        let step = i64::from(self.step);
        let base = (steps as i64).rem_euclid(range / step) * step;
        let values = [base - step, base, base + step, base + 2 * step].map(|v| v.rem_euclid(range) as u8);

        FineWheelState {
            values,
            offset: (value - steps * step_ft) / (step_ft / 2.0),
        }
    }
}

impl Default for FineWheel {
    fn default() -> Self { Self::new(&ReadoutConfig::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
