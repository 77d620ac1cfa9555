//! Readout configuration constants.
//!
//! All fixed parameters of the drum display are compile-time constants with
//! validation assertions, so a bad edit fails the build instead of producing
//! a readout that scrolls wrong.
//!
//! The only runtime knob is the fine-wheel step, carried by [`ReadoutConfig`]
//! and validated when the config is built.

use crate::error::ConfigError;

// =============================================================================
// Decade Drums
// =============================================================================

/// Number of decade drums (ten-thousands, thousands, hundreds).
pub const DECADE_COUNT: usize = 3;

/// Decade magnitudes, most significant first.
/// Each drum counts in units of its magnitude and carries into the drum above.
pub const DECADE_MAGNITUDES: [u32; DECADE_COUNT] = [10_000, 1_000, 100];

/// Check that `n` is a power of ten no smaller than 10.
pub const fn is_decade_magnitude(n: u32) -> bool {
    if n < 10 {
        return false;
    }
    let mut rest = n;
    while rest % 10 == 0 {
        rest /= 10;
    }
    rest == 1
}

// Compile-time validation: strictly decreasing powers of ten, each carrying into the next
const _: () = assert!(is_decade_magnitude(DECADE_MAGNITUDES[0]));
const _: () = assert!(is_decade_magnitude(DECADE_MAGNITUDES[1]));
const _: () = assert!(is_decade_magnitude(DECADE_MAGNITUDES[2]));
const _: () = assert!(DECADE_MAGNITUDES[0] == DECADE_MAGNITUDES[1] * 10);
const _: () = assert!(DECADE_MAGNITUDES[1] == DECADE_MAGNITUDES[2] * 10);

// =============================================================================
// Fine Wheel
// =============================================================================

/// Quantization step of the fine (tens) wheel in feet.
pub const FINE_WHEEL_STEP: u32 = 20;

/// The fine wheel shows two-digit values, wrapping every hundred.
pub const FINE_WHEEL_RANGE: u32 = 100;

/// Number of simultaneously visible fine-wheel labels.
pub const FINE_WHEEL_PHASES: usize = 4;

/// Check the four-phase wrap invariant for a fine-wheel step.
///
/// The step must divide the wrap range, and four steps must fit inside it
/// so that every visible label is distinct.
pub const fn validate_fine_step(step: u32) -> Result<u32, ConfigError> {
    if step == 0 {
        return Err(ConfigError::ZeroStep);
    }
    if FINE_WHEEL_RANGE % step != 0 {
        return Err(ConfigError::StepNotDivisor(step));
    }
    if step * FINE_WHEEL_PHASES as u32 > FINE_WHEEL_RANGE {
        return Err(ConfigError::StepTooCoarse(step));
    }
    Ok(step)
}

const _: () = assert!(validate_fine_step(FINE_WHEEL_STEP).is_ok());
// Fine wheel wraps exactly where the hundreds drum carries
const _: () = assert!(FINE_WHEEL_RANGE == DECADE_MAGNITUDES[DECADE_COUNT - 1]);

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime configuration for an [`UpdatePipeline`](crate::pipeline::UpdatePipeline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadoutConfig {
    fine_step: u32,
}

impl ReadoutConfig {
    /// Build a config with a custom fine-wheel step.
    pub const fn new(fine_step: u32) -> Result<Self, ConfigError> {
        match validate_fine_step(fine_step) {
            Ok(fine_step) => Ok(Self { fine_step }),
            Err(e) => Err(e),
        }
    }

    /// Fine-wheel quantization step.
    #[inline]
    pub const fn fine_step(&self) -> u32 { self.fine_step }
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self {
            fine_step: FINE_WHEEL_STEP,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
