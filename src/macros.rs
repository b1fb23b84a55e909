//! Logging macros for ergonomic log message formatting.
//!
//! Each macro wraps its `format!` arguments in a closure, so the string is
//! only built when the logger's filter admits the level.
//!
//! # Examples
//!
//! ```
//! use severity_log::prelude::*;
//! use severity_log::info;
//!
//! let logger = Logger::default();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a lazily formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use severity_log::prelude::*;
/// # let logger = Logger::default();
/// use severity_log::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, || format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use severity_log::prelude::*;
/// # let logger = Logger::default();
/// use severity_log::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use severity_log::prelude::*;
/// # let logger = Logger::default();
/// use severity_log::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a fault-level message.
#[macro_export]
macro_rules! fault {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::FAULT, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FormatterChain, LogLevel, Logger, PrinterStrategy, Result};
    use parking_lot::Mutex;
    use std::cell::Cell;
    use std::fmt;
    use std::sync::Arc;

    #[derive(Default)]
    struct Capture {
        chain: FormatterChain,
        lines: Mutex<Vec<(String, LogLevel)>>,
    }

    impl PrinterStrategy for Capture {
        fn formatters(&self) -> &FormatterChain {
            &self.chain
        }

        fn log(&self, message: &str, level: LogLevel) -> Result<()> {
            self.lines.lock().push((message.to_string(), level));
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    struct CountingDisplay<'a>(&'a Cell<usize>);

    impl fmt::Display for CountingDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("value")
        }
    }

    fn logger(level: LogLevel) -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let logger = Logger::builder()
            .log_level(level)
            .shared_printer(capture.clone())
            .build();
        (logger, capture)
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = logger(LogLevel::ALL);

        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        error!(logger, "Code: {}", 500);
        fault!(logger, "Critical failure: {}", "system");
        log!(logger, LogLevel::INFO, "Formatted: {}", 42);

        assert_eq!(
            *capture.lines.lock(),
            vec![
                ("Count: 5".to_string(), LogLevel::DEBUG),
                ("Items: 100".to_string(), LogLevel::INFO),
                ("Code: 500".to_string(), LogLevel::ERROR),
                ("Critical failure: system".to_string(), LogLevel::FAULT),
                ("Formatted: 42".to_string(), LogLevel::INFO),
            ]
        );
    }

    #[test]
    fn test_filtered_macro_does_not_format() {
        let (logger, capture) = logger(LogLevel::ERROR);
        let formatted = Cell::new(0);

        debug!(logger, "{}", CountingDisplay(&formatted));
        assert_eq!(formatted.get(), 0);

        error!(logger, "{}", CountingDisplay(&formatted));
        assert_eq!(formatted.get(), 1);
        assert_eq!(capture.lines.lock().len(), 1);
    }
}
