//! Main logger implementation

use super::{
    config::LoggerConfig, error::Result, log_level::LogLevel, metrics::LoggerMetrics,
    printer::PrinterStrategy,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Filters messages by level and fans them out to its printers.
///
/// The level filter is the only state that changes after construction. It is
/// guarded by a read/write lock held just long enough to read it or to apply
/// an update; formatting and writing run outside the lock, so concurrent
/// `log` calls only contend on that brief read.
pub struct Logger {
    log_level: RwLock<LogLevel>,
    printers: Vec<Arc<dyn PrinterStrategy>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(printers: Vec<Arc<dyn PrinterStrategy>>, log_level: LogLevel) -> Self {
        Self {
            log_level: RwLock::new(log_level),
            printers,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a deserialized configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let printers = config.build_printers()?;
        Ok(Self::new(printers, config.log_level))
    }

    /// The filter currently in effect
    pub fn log_level(&self) -> LogLevel {
        *self.log_level.read()
    }

    /// Replace the filter with `transform(current)`.
    ///
    /// The write lock is held across the read and the write, so concurrent
    /// updates never lose each other's changes.
    ///
    /// # Deadlocks
    ///
    /// The lock is not reentrant. `transform` must work from the value it is
    /// given and must not call back into this logger (`log_level`,
    /// `is_enabled`, `log` or another update), or the calling thread blocks
    /// forever.
    pub fn update_log_level<F>(&self, transform: F)
    where
        F: FnOnce(LogLevel) -> LogLevel,
    {
        let mut log_level = self.log_level.write();
        *log_level = transform(*log_level);
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.update_log_level(|_| level);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.log_level.read().contains(level)
    }

    pub fn printers(&self) -> &[Arc<dyn PrinterStrategy>] {
        &self.printers
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log a lazily built message.
    ///
    /// `message` is only invoked when the current filter admits `level`.
    ///
    /// `level` is normally one of the single levels, as passed by
    /// [`debug`](Self::debug) and friends. Any value is accepted: it is
    /// admitted when every one of its bits is in the filter. So `OFF` or a set
    /// such as `ERROR | FAULT` passes an `ALL` filter, and the OS printer
    /// then writes it with the `Default` log type.
    pub fn log<F, S>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let message = message().into();
        self.dispatch(&message, level);
    }

    pub fn debug<F, S>(&self, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.log(LogLevel::DEBUG, message);
    }

    pub fn info<F, S>(&self, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.log(LogLevel::INFO, message);
    }

    pub fn error<F, S>(&self, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.log(LogLevel::ERROR, message);
    }

    pub fn fault<F, S>(&self, message: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.log(LogLevel::FAULT, message);
    }

    /// Hand the message to every printer in construction order.
    ///
    /// **Per-Printer Isolation**: each printer is wrapped in catch_unwind and
    /// its error is reported on stderr, so one failing output never keeps the
    /// remaining printers from receiving the message.
    fn dispatch(&self, message: &str, level: LogLevel) {
        self.metrics.record_dispatched();

        for (idx, printer) in self.printers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                printer.log(message, level)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Printer #{} ({}) failed: {}",
                        idx,
                        printer.name(),
                        e
                    );
                    self.metrics.record_failed_write();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Printer #{} ({}) panicked: {}. \
                         Other printers continue to function.",
                        idx,
                        printer.name(),
                        panic_msg
                    );
                    self.metrics.record_failed_write();
                }
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Vec::new(), LogLevel::ALL)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.printers.iter().map(|p| p.name()).collect();
        f.debug_struct("Logger")
            .field("log_level", &format_args!("{}", self.log_level()))
            .field("printers", &names)
            .finish()
    }
}

/// Builder for creating Logger instances with fluent configuration
///
/// # Example
///
/// ```
/// use severity_log::prelude::*;
///
/// let logger = Logger::builder()
///     .log_level(LogLevel::DEBUG | LogLevel::ERROR)
///     .printer(ConsolePrinter::new(FormatterChain::empty()))
///     .build();
///
/// assert!(logger.is_enabled(LogLevel::ERROR));
/// assert!(!logger.is_enabled(LogLevel::INFO));
/// ```
pub struct LoggerBuilder {
    log_level: LogLevel,
    printers: Vec<Arc<dyn PrinterStrategy>>,
}

impl LoggerBuilder {
    /// Create a new builder with default settings
    ///
    /// Defaults:
    /// - log_level: `LogLevel::ALL`
    /// - printers: none
    pub fn new() -> Self {
        Self {
            log_level: LogLevel::ALL,
            printers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Add a printer
    #[must_use = "builder methods return a new value"]
    pub fn printer<P: PrinterStrategy + 'static>(mut self, printer: P) -> Self {
        self.printers.push(Arc::new(printer));
        self
    }

    /// Add a printer that is also held elsewhere, e.g. by a test
    #[must_use = "builder methods return a new value"]
    pub fn shared_printer(mut self, printer: Arc<dyn PrinterStrategy>) -> Self {
        self.printers.push(printer);
        self
    }

    pub fn build(self) -> Logger {
        Logger::new(self.printers, self.log_level)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
