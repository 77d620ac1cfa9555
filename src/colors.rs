//! Color constants for the altitude readout.
//!
//! Colors are `Rgb565`, the native format of the SPI panels the readout is
//! drawn on, so they can be handed to the display without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Drum window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). NEG marker text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green (0, 63, 0). Digits in normal state.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Amber caution color for digits below the minimum descent altitude.
/// RGB565: (31, 40, 0) - warmer than yellow, lighter than orange.
pub const AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Dark gray (8, 16, 8). Verbose log levels.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Pure yellow (31, 63, 0). Warning log level.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure red (31, 0, 0). Error log level.
pub const RED: Rgb565 = Rgb565::RED;
