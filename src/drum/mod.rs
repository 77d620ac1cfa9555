//! Rolling drums of the readout.
//!
//! - `decade`: single-digit drums for ten-thousands, thousands and hundreds
//! - `fine`: four-label two-digit drum for the lowest resolution

mod decade;
mod fine;

pub use decade::{DecadeWheel, DigitPair};
pub use fine::{FineLabel, FineWheel, FineWheelState};
