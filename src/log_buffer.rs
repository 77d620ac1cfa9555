//! Log buffer with levels and tick stamps for on-device log viewing.
//!
//! Each [`UpdatePipeline`](crate::pipeline::UpdatePipeline) owns a circular
//! buffer of recent events (rejected samples, MDA changes) that a debug page
//! can draw. Entries are stamped with the pipeline tick, the number of
//! altitude notifications processed, instead of wall-clock time.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: Gray - debugging information
//! - `Info`: Green - normal operation
//! - `Warn`: Yellow - warnings
//! - `Error`: Red - errors
//!
//! # Usage
//!
//! ```ignore
//! log_info!(self.log, self.tick, "MDA set to {}", mda);
//! log_warn!(self.log, self.tick, "Altitude rejected: {}", err);
//! ```
//!
//! With the `defmt` feature each macro also forwards to the matching
//! `defmt` macro.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, GREEN, RED, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (gray)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (yellow)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and tick.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to LOG_MSG_LEN - 1 characters).
    pub message: String<LOG_MSG_LEN>,
    /// Pipeline tick when the entry was pushed.
    pub tick: u32,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(
        level: LogLevel,
        message: &str,
        tick: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            tick,
        }
    }
}

impl Default for LogEntry {
    fn default() -> Self { Self::new(LogLevel::Info, "", 0) }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    tick: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Push a message at the given level.
    pub fn push_log(
        &mut self,
        level: LogLevel,
        message: &str,
        tick: u32,
    ) {
        self.push(LogEntry::new(level, message, tick));
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// Format a message into a log buffer at a fixed level.
#[doc(hidden)]
#[macro_export]
macro_rules! __push_log {
    ($buffer:expr, $tick:expr, $level:ident, $($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $buffer.push_log($crate::log_buffer::LogLevel::$level, buf.as_str(), $tick);
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($buffer:expr, $tick:expr, $($arg:tt)*) => {{
        $crate::__push_log!($buffer, $tick, Debug, $($arg)*);
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($buffer:expr, $tick:expr, $($arg:tt)*) => {{
        $crate::__push_log!($buffer, $tick, Info, $($arg)*);
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($buffer:expr, $tick:expr, $($arg:tt)*) => {{
        $crate::__push_log!($buffer, $tick, Warn, $($arg)*);
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($buffer:expr, $tick:expr, $($arg:tt)*) => {{
        $crate::__push_log!($buffer, $tick, Error, $($arg)*);
        #[cfg(feature = "defmt")]
        defmt::error!($($arg)*);
    }};
}

// =============================================================================
// Unit Tests
// =============================================================================
