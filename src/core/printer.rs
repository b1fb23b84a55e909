//! Printer strategy trait: a formatter chain paired with one output

use super::{error::Result, formatter::FormatterChain, log_level::LogLevel};

/// A destination that formats a message with its own chain and writes it.
///
/// Every call to [`PrinterStrategy::log`] must result in exactly one write to
/// the underlying output, carrying the chain's result unaltered.
pub trait PrinterStrategy: Send + Sync {
    fn formatters(&self) -> &FormatterChain;

    fn log(&self, message: &str, level: LogLevel) -> Result<()>;

    fn name(&self) -> &str;

    fn format_message(&self, message: &str, level: LogLevel) -> String {
        self.formatters().apply_all(message, level)
    }
}
