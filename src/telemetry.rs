//! Telemetry inputs and the rendering seam.
//!
//! The readout consumes two notifications: the minimum descent altitude
//! (sent on change) and the altitude word (sent every tick, changed or not).
//! Results go to whatever implements [`ReadoutSink`].

use crate::render::{FrameDiff, ReadoutFrame};

/// Altitude word as delivered by the source, with its validity status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltitudeSample {
    /// Altitude in feet.
    pub raw: f32,
    /// False when the source reports a failure or no computed data.
    pub valid: bool,
}

impl AltitudeSample {
    /// A valid sample.
    pub const fn new(raw: f32) -> Self { Self { raw, valid: true } }

    /// A sample the source flagged as invalid.
    pub const fn invalid(raw: f32) -> Self { Self { raw, valid: false } }

    /// Valid and finite, i.e. safe to feed to the drums.
    #[inline]
    pub fn is_usable(&self) -> bool { self.valid && self.raw.is_finite() }
}

/// One notification from the telemetry source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TelemetryEvent {
    /// Minimum descent altitude changed (`0.0` = none set).
    Threshold(f32),
    /// New altitude word.
    Altitude(AltitudeSample),
}

/// Receives frames from the pipeline.
///
/// `changed` names the output groups that differ from the previous frame, so
/// the implementation can skip redrawing the rest.
pub trait ReadoutSink {
    fn publish(
        &mut self,
        frame: &ReadoutFrame,
        changed: FrameDiff,
    );
}

impl<F> ReadoutSink for F
where
    F: FnMut(&ReadoutFrame, FrameDiff),
{
    fn publish(
        &mut self,
        frame: &ReadoutFrame,
        changed: FrameDiff,
    ) {
        self(frame, changed);
    }
}
