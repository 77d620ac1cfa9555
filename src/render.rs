//! Output frame and change tracking for the readout.
//!
//! This module provides:
//! - [`ReadoutFrame`] - every output cell the renderer consumes, in one struct
//! - [`FrameDiff`] - which output groups changed since the previous frame
//! - [`decade_idx`] - named indices into [`ReadoutFrame::decades`]
//!
//! # Update Strategy
//!
//! | Group | Changes when | Redraw |
//! |-------|--------------|--------|
//! | Decade drum | Digit or offset of that drum changes | That drum only |
//! | Fine wheel | Any label or the offset changes | Fine wheel |
//! | Color | Value crosses the MDA, or MDA changes | All digits |
//! | Sign | Value crosses zero | NEG marker |
//!
//! The altitude arrives every tick whether or not it moved, so a steady
//! value yields an empty diff and the renderer can skip the frame.

use crate::config::{DECADE_COUNT, FINE_WHEEL_PHASES};
use crate::drum::{DigitPair, FineLabel, FineWheelState};
use crate::indicators::{ColorTag, SignState};

/// Drum indices for clearer code.
/// Layout (left to right): TEN_THOUSANDS | THOUSANDS | HUNDREDS | fine wheel
pub mod decade_idx {
    pub const TEN_THOUSANDS: usize = 0;
    pub const THOUSANDS: usize = 1;
    pub const HUNDREDS: usize = 2;
}

// =============================================================================
// Readout Frame
// =============================================================================

/// All outputs of one update cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadoutFrame {
    /// Decade drums, most significant first (see [`decade_idx`]).
    pub decades: [DigitPair; DECADE_COUNT],
    /// Fine wheel labels and offset.
    pub fine: FineWheelState,
    /// Digit color.
    pub color: ColorTag,
    /// NEG marker visibility.
    pub sign: SignState,
}

impl ReadoutFrame {
    /// Fine-wheel label text, bottom to top.
    #[inline]
    pub fn fine_labels(&self) -> [FineLabel; FINE_WHEEL_PHASES] { self.fine.labels() }

    /// Compare against the previously published frame.
    pub fn diff(
        &self,
        prev: &Self,
    ) -> FrameDiff {
        FrameDiff {
            decades: core::array::from_fn(|i| self.decades[i] != prev.decades[i]),
            fine: self.fine != prev.fine,
            color: self.color != prev.color,
            sign: self.sign != prev.sign,
        }
    }
}

// =============================================================================
// Frame Diff
// =============================================================================

/// Output groups that changed between two frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameDiff {
    pub decades: [bool; DECADE_COUNT],
    pub fine: bool,
    pub color: bool,
    pub sign: bool,
}

impl FrameDiff {
    /// Nothing changed.
    pub const fn none() -> Self {
        Self {
            decades: [false; DECADE_COUNT],
            fine: false,
            color: false,
            sign: false,
        }
    }

    /// Everything needs drawing (first frame).
    pub const fn all() -> Self {
        Self {
            decades: [true; DECADE_COUNT],
            fine: true,
            color: true,
            sign: true,
        }
    }

    /// Only the digit color changed.
    pub const fn color_only() -> Self {
        Self {
            color: true,
            ..Self::none()
        }
    }

    /// Check if nothing needs redrawing.
    #[inline]
    pub fn is_empty(&self) -> bool { *self == Self::none() }

    /// Check if any drum (decade or fine) moved.
    #[inline]
    pub fn drums_moved(&self) -> bool { self.fine || self.decades.iter().any(|&d| d) }
}

// =============================================================================
// Unit Tests
// =============================================================================
