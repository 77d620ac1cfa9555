//! Error types for the readout core.

use core::fmt;

/// Why a telemetry notification was not applied.
///
/// The pipeline keeps its last valid frame whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadoutError {
    /// The source flagged the value as invalid (failure warning / no computed data).
    InvalidInput,
    /// The value is NaN or infinite.
    NonFiniteValue,
}

impl fmt::Display for ReadoutError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("invalid input"),
            Self::NonFiniteValue => f.write_str("non-finite value"),
        }
    }
}

impl core::error::Error for ReadoutError {}

/// Rejected [`ReadoutConfig`](crate::config::ReadoutConfig) parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fine-wheel step of zero.
    ZeroStep,
    /// Fine-wheel step does not divide the wrap range.
    StepNotDivisor(u32),
    /// Four fine-wheel steps do not fit in the wrap range.
    StepTooCoarse(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::ZeroStep => f.write_str("fine wheel step must be non-zero"),
            Self::StepNotDivisor(step) => write!(f, "fine wheel step {step} does not divide 100"),
            Self::StepTooCoarse(step) => write!(f, "fine wheel step {step} is too coarse for four phases"),
        }
    }
}

impl core::error::Error for ConfigError {}
