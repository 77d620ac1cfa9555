//! Update pipeline: turns telemetry notifications into readout frames.
//!
//! The pipeline caches the last accepted altitude and MDA and owns the
//! current [`ReadoutFrame`]. Both cached scalars change only through
//! [`UpdatePipeline::on_threshold_changed`] and
//! [`UpdatePipeline::on_value_changed`], each of which runs to completion
//! before the next notification is handled.
//!
//! # Invalid Input
//!
//! There is no numeric output meaning "unknown", so a rejected altitude
//! (flagged invalid by the source, or not finite) freezes the readout: the
//! last frame and the cached altitude stay exactly as they were.

use crate::config::{DECADE_COUNT, DECADE_MAGNITUDES, ReadoutConfig};
use crate::drum::{DecadeWheel, FineWheel};
use crate::error::ReadoutError;
use crate::indicators::{ColorTag, evaluate_color, sign_indicator};
use crate::log_buffer::LogBuffer;
use crate::render::{FrameDiff, ReadoutFrame};
use crate::telemetry::{AltitudeSample, ReadoutSink, TelemetryEvent};

/// Decade drums in display order, most significant first.
const DECADE_WHEELS: [DecadeWheel; DECADE_COUNT] = [
    DecadeWheel::topmost(DECADE_MAGNITUDES[0]),
    DecadeWheel::subordinate(DECADE_MAGNITUDES[1]),
    DecadeWheel::subordinate(DECADE_MAGNITUDES[2]),
];

/// Orchestrates the drums, color and sign computations.
pub struct UpdatePipeline {
    decades: [DecadeWheel; DECADE_COUNT],
    fine: FineWheel,

    /// Last accepted altitude.
    value: f32,

    /// Last accepted MDA (`0.0` = none).
    threshold: f32,

    /// Current outputs.
    frame: ReadoutFrame,

    /// Whether at least one altitude has been accepted.
    has_value: bool,

    /// Consecutive rejected altitude samples.
    rejected_run: u32,

    /// Altitude notifications processed, accepted or not.
    tick: u32,

    log: LogBuffer,
}

impl UpdatePipeline {
    /// Create a pipeline with the default fine-wheel step.
    pub fn new() -> Self { Self::with_config(ReadoutConfig::default()) }

    /// Create a pipeline with a validated config.
    pub fn with_config(config: ReadoutConfig) -> Self {
        Self {
            decades: DECADE_WHEELS,
            fine: FineWheel::new(&config),
            value: 0.0,
            threshold: 0.0,
            frame: ReadoutFrame::default(),
            has_value: false,
            rejected_run: 0,
            tick: 0,
            log: LogBuffer::new(),
        }
    }

    /// Current frame, or `None` until the first altitude is accepted.
    #[inline]
    pub fn frame(&self) -> Option<&ReadoutFrame> { self.has_value.then_some(&self.frame) }

    /// Current digit color. Tracks the MDA even before the first altitude.
    #[inline]
    pub const fn color(&self) -> ColorTag { self.frame.color }

    /// Last accepted altitude.
    #[inline]
    pub const fn value(&self) -> f32 { self.value }

    /// Last accepted MDA.
    #[inline]
    pub const fn threshold(&self) -> f32 { self.threshold }

    /// Altitude notifications processed so far.
    #[inline]
    pub const fn tick(&self) -> u32 { self.tick }

    /// Recent pipeline events.
    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    /// Handle an MDA notification.
    ///
    /// Re-evaluates the color against the last accepted altitude. A
    /// non-finite MDA is rejected and the previous one stays in force.
    pub fn on_threshold_changed(
        &mut self,
        threshold: f32,
    ) -> Result<ColorTag, ReadoutError> {
        if !threshold.is_finite() {
            log_warn!(self.log, self.tick, "MDA rejected: {}", ReadoutError::NonFiniteValue);
            return Err(ReadoutError::NonFiniteValue);
        }

        if threshold != self.threshold {
            log_info!(self.log, self.tick, "MDA set to {}", threshold);
        }
        self.threshold = threshold;
        self.frame.color = evaluate_color(self.value, self.threshold);
        Ok(self.frame.color)
    }

    /// Handle an altitude notification.
    ///
    /// Recomputes every output from the sample and the cached MDA and
    /// returns which output groups changed. The first accepted sample
    /// reports everything as changed.
    pub fn on_value_changed(
        &mut self,
        sample: AltitudeSample,
    ) -> Result<FrameDiff, ReadoutError> {
        self.tick = self.tick.wrapping_add(1);

        if let Err(e) = Self::check_sample(&sample) {
            self.rejected_run = self.rejected_run.saturating_add(1);
            if self.rejected_run == 1 {
                log_warn!(self.log, self.tick, "Altitude rejected: {}", e);
            }
            return Err(e);
        }

        if self.rejected_run > 0 {
            log_info!(self.log, self.tick, "Altitude valid after {} rejects", self.rejected_run);
            self.rejected_run = 0;
        }

        self.value = sample.raw;
        let next = self.compute_frame();
        let changed = if self.has_value {
            next.diff(&self.frame)
        } else {
            log_debug!(self.log, self.tick, "First altitude frame");
            FrameDiff::all()
        };

        self.frame = next;
        self.has_value = true;
        Ok(changed)
    }

    /// Dispatch a telemetry event and publish the result.
    ///
    /// Nothing is published before the first accepted altitude, or when a
    /// notification is rejected.
    pub fn handle<S: ReadoutSink>(
        &mut self,
        event: TelemetryEvent,
        sink: &mut S,
    ) -> Result<(), ReadoutError> {
        let changed = match event {
            TelemetryEvent::Threshold(threshold) => {
                let before = self.frame.color;
                let after = self.on_threshold_changed(threshold)?;
                if before == after {
                    FrameDiff::none()
                } else {
                    FrameDiff::color_only()
                }
            }
            TelemetryEvent::Altitude(sample) => self.on_value_changed(sample)?,
        };

        if let Some(frame) = self.frame() {
            sink.publish(frame, changed);
        }
        Ok(())
    }

    fn check_sample(sample: &AltitudeSample) -> Result<(), ReadoutError> {
        if !sample.valid {
            Err(ReadoutError::InvalidInput)
        } else if !sample.raw.is_finite() {
            Err(ReadoutError::NonFiniteValue)
        } else {
            Ok(())
        }
    }

    /// Run every computation for the cached altitude and MDA, in display order.
    fn compute_frame(&self) -> ReadoutFrame {
        let value = self.value;
        ReadoutFrame {
            decades: self.decades.map(|wheel| wheel.compute(value)),
            fine: self.fine.compute(value),
            color: evaluate_color(value, self.threshold),
            sign: sign_indicator(value),
        }
    }
}

impl Default for UpdatePipeline {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::SignState;
    use crate::log_buffer::LogLevel;
    use crate::render::decade_idx;

    const EPS: f32 = 1e-4;

    fn accepted(
        pipeline: &mut UpdatePipeline,
        value: f32,
    ) -> ReadoutFrame {
        assert!(pipeline.on_value_changed(AltitudeSample::new(value)).is_ok(), "{value} should be accepted");
        *pipeline.frame().unwrap()
    }

    // -------------------------------------------------------------------------
    // Initial State
    // -------------------------------------------------------------------------

    #[test]
    fn test_pipeline_new() {
        let pipeline = UpdatePipeline::new();
        assert!(pipeline.frame().is_none(), "No frame before first altitude");
        assert_eq!(pipeline.value(), 0.0);
        assert_eq!(pipeline.threshold(), 0.0);
        assert_eq!(pipeline.tick(), 0);
        assert_eq!(pipeline.color(), ColorTag::Normal);
        assert!(pipeline.log().is_empty());
    }

    // -------------------------------------------------------------------------
    // End-to-End Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_scenario_positive_altitude() {
        let mut pipeline = UpdatePipeline::new();
        let frame = accepted(&mut pipeline, 12_345.0);

        let top = frame.decades[decade_idx::TEN_THOUSANDS];
        assert_eq!((top.low, top.high), (1, 2));
        assert!((top.offset - 0.2345).abs() < EPS, "top offset {}", top.offset);

        let thousands = frame.decades[decade_idx::THOUSANDS];
        assert_eq!((thousands.low, thousands.high), (2, 3));

        let hundreds = frame.decades[decade_idx::HUNDREDS];
        assert_eq!((hundreds.low, hundreds.high), (3, 4));

        assert_eq!(frame.fine.values, [20, 40, 60, 80]);
        assert_eq!(frame.color, ColorTag::Normal);
        assert_eq!(frame.sign, SignState::Hidden);
    }

    #[test]
    fn test_scenario_negative_altitude() {
        let mut pipeline = UpdatePipeline::new();
        let frame = accepted(&mut pipeline, -50.0);

        assert_eq!(frame.sign, SignState::Visible);
        let top = frame.decades[decade_idx::TEN_THOUSANDS];
        assert_eq!((top.low, top.high), (0, 1), "Topmost drum uses |value|");
        assert!((top.offset - 0.005).abs() < EPS, "top offset computed on 50");
        assert!(frame.decades[decade_idx::HUNDREDS].offset < 0.0, "Subordinate offset keeps sign");
    }

    #[test]
    fn test_scenario_threshold_caution() {
        let mut pipeline = UpdatePipeline::new();
        assert_eq!(pipeline.on_threshold_changed(600.0), Ok(ColorTag::Caution), "0 ft is below 600 ft");

        assert_eq!(accepted(&mut pipeline, 500.0).color, ColorTag::Caution);
        assert_eq!(accepted(&mut pipeline, 700.0).color, ColorTag::Normal);
    }

    #[test]
    fn test_threshold_change_uses_last_value() {
        let mut pipeline = UpdatePipeline::new();
        accepted(&mut pipeline, 1_000.0);

        assert_eq!(pipeline.on_threshold_changed(1_500.0), Ok(ColorTag::Caution));
        assert_eq!(pipeline.frame().map(|f| f.color), Some(ColorTag::Caution));

        assert_eq!(pipeline.on_threshold_changed(0.0), Ok(ColorTag::Normal), "0 disables the MDA");
    }

    // -------------------------------------------------------------------------
    // Idempotence and Change Tracking
    // -------------------------------------------------------------------------

    #[test]
    fn test_redelivered_value_is_idempotent() {
        let mut pipeline = UpdatePipeline::new();
        assert_eq!(pipeline.on_value_changed(AltitudeSample::new(3_456.7)), Ok(FrameDiff::all()));
        let first = *pipeline.frame().unwrap();

        assert_eq!(
            pipeline.on_value_changed(AltitudeSample::new(3_456.7)),
            Ok(FrameDiff::none()),
            "Same value should change nothing"
        );
        assert_eq!(*pipeline.frame().unwrap(), first);
    }

    #[test]
    fn test_diff_reports_moved_drums() {
        let mut pipeline = UpdatePipeline::new();
        accepted(&mut pipeline, 1_210.0);

        let diff = pipeline.on_value_changed(AltitudeSample::new(1_215.0)).unwrap();
        assert_eq!(diff.decades, [true; DECADE_COUNT], "Every drum offset moved");
        assert!(diff.fine);
        assert!(!diff.color && !diff.sign);
    }

    // -------------------------------------------------------------------------
    // Invalid Input
    // -------------------------------------------------------------------------

    #[test]
    fn test_invalid_sample_freezes_frame() {
        let mut pipeline = UpdatePipeline::new();
        let before = accepted(&mut pipeline, 8_000.0);

        assert_eq!(
            pipeline.on_value_changed(AltitudeSample::invalid(9_000.0)),
            Err(ReadoutError::InvalidInput)
        );
        assert_eq!(*pipeline.frame().unwrap(), before, "Frame unchanged after invalid sample");
        assert_eq!(pipeline.value(), 8_000.0, "Cached value unchanged");
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let mut pipeline = UpdatePipeline::new();
        for raw in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(
                pipeline.on_value_changed(AltitudeSample::new(raw)),
                Err(ReadoutError::NonFiniteValue)
            );
        }
        assert!(pipeline.frame().is_none(), "Still no frame");
        assert_eq!(pipeline.tick(), 3, "Rejected samples still advance the tick");
    }

    #[test]
    fn test_rejected_run_logged_once() {
        let mut pipeline = UpdatePipeline::new();
        for _ in 0..5 {
            let _ = pipeline.on_value_changed(AltitudeSample::invalid(0.0));
        }
        let warnings = pipeline.log().iter().filter(|e| e.level == LogLevel::Warn).count();
        assert_eq!(warnings, 1, "One warning per run of rejects");

        accepted(&mut pipeline, 100.0);
        let recovered = pipeline.log().iter().any(|e| e.message.as_str() == "Altitude valid after 5 rejects");
        assert!(recovered, "Recovery should be logged");
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let mut pipeline = UpdatePipeline::new();
        pipeline.on_threshold_changed(400.0).unwrap();
        assert_eq!(pipeline.on_threshold_changed(f32::NAN), Err(ReadoutError::NonFiniteValue));
        assert_eq!(pipeline.threshold(), 400.0, "Previous MDA stays in force");
    }

    // -------------------------------------------------------------------------
    // Event Dispatch
    // -------------------------------------------------------------------------

    #[test]
    fn test_handle_publishes_after_first_value() {
        let mut pipeline = UpdatePipeline::new();
        let mut published: Vec<(ReadoutFrame, FrameDiff)> = Vec::new();
        let mut sink = |frame: &ReadoutFrame, changed: FrameDiff| published.push((*frame, changed));

        pipeline.handle(TelemetryEvent::Threshold(250.0), &mut sink).unwrap();
        pipeline
            .handle(TelemetryEvent::Altitude(AltitudeSample::new(200.0)), &mut sink)
            .unwrap();
        pipeline.handle(TelemetryEvent::Threshold(150.0), &mut sink).unwrap();
        let rejected = pipeline.handle(TelemetryEvent::Altitude(AltitudeSample::invalid(0.0)), &mut sink);
        assert_eq!(rejected, Err(ReadoutError::InvalidInput));

        assert_eq!(published.len(), 2, "Nothing before first altitude, nothing on reject");
        assert_eq!(published[0].0.color, ColorTag::Caution);
        assert_eq!(published[0].1, FrameDiff::all());
        assert_eq!(published[1].0.color, ColorTag::Normal);
        assert_eq!(published[1].1, FrameDiff::color_only());
    }

    #[test]
    fn test_custom_fine_step() {
        let config = ReadoutConfig::new(10).unwrap();
        let mut pipeline = UpdatePipeline::with_config(config);
        let frame = accepted(&mut pipeline, 1_234.0);
        assert_eq!(frame.fine.values, [20, 30, 40, 50]);
    }
}
