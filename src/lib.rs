//! Rolling-digit altitude readout.
//!
//! Computes the visual state of an odometer-style altitude readout: which two
//! glyphs each decade drum shows and how far it has rolled between them, the
//! four labels of the fine (tens) wheel, the digit color against the minimum
//! descent altitude, and the NEG marker. Drawing is left to the embedding
//! application, which receives a [`ReadoutFrame`] per update.
//!
//! - [`config`]: Drum magnitudes, fine-wheel step and runtime config
//! - [`drum`]: Decade drums and the fine wheel
//! - [`indicators`]: Digit color and NEG marker state
//! - [`pipeline`]: Caches telemetry and recomputes the frame on each notification
//! - [`render`]: Output frame and change tracking
//! - [`telemetry`]: Input samples, events and the sink trait
//! - [`log_buffer`]: On-device log ring buffer
//! - [`colors`]: RGB565 color constants
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while embedded builds are `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Macros first so every module below can use them
#[macro_use]
pub mod log_buffer;

pub mod colors;
pub mod config;
pub mod drum;
pub mod error;
pub mod indicators;
pub mod pipeline;
pub mod render;
pub mod telemetry;

// Re-export commonly used items
pub use config::ReadoutConfig;
pub use drum::{DecadeWheel, DigitPair, FineWheel, FineWheelState};
pub use error::{ConfigError, ReadoutError};
pub use indicators::{ColorTag, SignState, evaluate_color, sign_indicator};
pub use pipeline::UpdatePipeline;
pub use render::{FrameDiff, ReadoutFrame};
pub use telemetry::{AltitudeSample, ReadoutSink, TelemetryEvent};
