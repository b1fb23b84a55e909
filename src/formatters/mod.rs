//! Formatter implementations

#[cfg(feature = "console")]
pub mod color;
pub mod prefix;
pub mod timestamp;

#[cfg(feature = "console")]
pub use color::ColorLogFormatter;
pub use prefix::PrefixLogFormatter;
pub use timestamp::{Clock, SystemClock, TimestampLogFormatter};

// Re-export traits for convenience
pub use crate::core::{FormatterChain, LogFormatter};
