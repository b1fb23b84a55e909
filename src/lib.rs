//! # Severity Log
//!
//! A lightweight logging facade. A [`Logger`] filters messages against a set
//! of levels and hands the survivors to one or more printers, each of which
//! runs its own formatter chain before writing to its output.
//!
//! ## Features
//!
//! - **Set-based filtering**: levels are bit flags, so `debug|error` is a valid filter
//! - **Lazy messages**: message closures only run when the level is enabled
//! - **Formatter chains**: ordered, shareable message transformations
//! - **Thread Safe**: the filter can be changed while other threads log
//!
//! ```
//! use severity_log::prelude::*;
//! use severity_log::formatters::PrefixLogFormatter;
//!
//! let logger = Logger::builder()
//!     .log_level(LogLevel::DEBUG | LogLevel::ERROR)
//!     .printer(ConsolePrinter::new(
//!         FormatterChain::empty().with(PrefixLogFormatter::new("App")),
//!     ))
//!     .build();
//!
//! logger.error(|| "disk almost full");
//! logger.info(|| format!("{} items processed", 42)); // filtered, never formatted
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod printers;

pub mod prelude {
    pub use crate::core::{
        FormatterChain, FormatterConfig, LogFormatter, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, PrinterConfig, PrinterStrategy, Result,
        TimestampFormat,
    };
    pub use crate::printers::{ConsolePrinter, OsPrinter};
}

pub use crate::core::{
    FormatterChain, FormatterConfig, LogFormatter, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, PrinterConfig, PrinterStrategy, Result,
    TimestampFormat,
};
pub use crate::printers::{ConsolePrinter, OsPrinter};
