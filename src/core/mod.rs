//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod printer;
pub mod timestamp;

pub use config::{FormatterConfig, LoggerConfig, PrinterConfig};
pub use error::{LoggerError, Result};
pub use formatter::{FormatterChain, LogFormatter};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use printer::PrinterStrategy;
pub use timestamp::{date_pattern_to_strftime, TimestampFormat};
