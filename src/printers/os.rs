//! Printer for the operating system's log facility

use super::system_log::SystemLogWriter;
use crate::core::{FormatterChain, LogLevel, PrinterStrategy, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Native priority of a system log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsLogType {
    #[default]
    Default,
    Info,
    Debug,
    Error,
    Fault,
}

impl OsLogType {
    pub fn to_str(&self) -> &'static str {
        match self {
            OsLogType::Default => "DEFAULT",
            OsLogType::Info => "INFO",
            OsLogType::Debug => "DEBUG",
            OsLogType::Error => "ERROR",
            OsLogType::Fault => "FAULT",
        }
    }

    /// RFC 5424 severity code
    pub fn syslog_severity(&self) -> u8 {
        match self {
            OsLogType::Fault => 2,
            OsLogType::Error => 3,
            OsLogType::Default => 5,
            OsLogType::Info => 6,
            OsLogType::Debug => 7,
        }
    }
}

/// Total mapping: the four single levels map to their counterpart, anything
/// else (sets, `OFF`, `ALL`, unnamed bits) to [`OsLogType::Default`].
impl From<LogLevel> for OsLogType {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::DEBUG => OsLogType::Debug,
            LogLevel::INFO => OsLogType::Info,
            LogLevel::ERROR => OsLogType::Error,
            LogLevel::FAULT => OsLogType::Fault,
            _ => OsLogType::Default,
        }
    }
}

impl fmt::Display for OsLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

pub trait OsWriter: Send + Sync {
    fn log(&self, log_type: OsLogType, message: &str) -> Result<()>;
}

/// Formats with its chain and hands the result to the system log with the
/// native priority of the message's level
pub struct OsPrinter {
    formatters: FormatterChain,
    writer: Arc<dyn OsWriter>,
}

impl OsPrinter {
    /// Create a printer writing to the system log under `subsystem`/`category`
    pub fn new(
        subsystem: impl Into<String>,
        category: impl Into<String>,
        formatters: FormatterChain,
    ) -> Self {
        let writer = SystemLogWriter::new(subsystem, category);
        Self::with_writer(formatters, Arc::new(writer))
    }

    pub fn with_writer(formatters: FormatterChain, writer: Arc<dyn OsWriter>) -> Self {
        Self {
            formatters,
            writer,
        }
    }
}

impl PrinterStrategy for OsPrinter {
    fn formatters(&self) -> &FormatterChain {
        &self.formatters
    }

    fn log(&self, message: &str, level: LogLevel) -> Result<()> {
        let message = self.format_message(message, level);
        self.writer.log(OsLogType::from(level), &message)
    }

    fn name(&self) -> &str {
        "os"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct OsWriterMock {
        entries: Mutex<Vec<(OsLogType, String)>>,
    }

    impl OsWriter for OsWriterMock {
        fn log(&self, log_type: OsLogType, message: &str) -> Result<()> {
            self.entries.lock().push((log_type, message.to_string()));
            Ok(())
        }
    }

    fn printer() -> (OsPrinter, Arc<OsWriterMock>) {
        let writer = Arc::new(OsWriterMock::default());
        let chain = FormatterChain::empty().with(|m: &str, _: LogLevel| format!("<{}>", m));
        (OsPrinter::with_writer(chain, writer.clone()), writer)
    }

    #[test]
    fn test_logs_formatted_message_with_native_type() {
        let cases = [
            (LogLevel::DEBUG, OsLogType::Debug),
            (LogLevel::INFO, OsLogType::Info),
            (LogLevel::ERROR, OsLogType::Error),
            (LogLevel::FAULT, OsLogType::Fault),
            (LogLevel::ALL, OsLogType::Default),
        ];

        for (level, expected) in cases {
            let (printer, writer) = printer();
            printer.log("message", level).unwrap();
            assert_eq!(
                *writer.entries.lock(),
                vec![(expected, "<message>".to_string())],
                "level {}",
                level
            );
        }
    }

    #[test]
    fn test_mapping_is_total() {
        assert_eq!(OsLogType::from(LogLevel::OFF), OsLogType::Default);
        assert_eq!(OsLogType::from(LogLevel::empty()), OsLogType::Default);
        assert_eq!(
            OsLogType::from(LogLevel::DEBUG | LogLevel::ERROR),
            OsLogType::Default
        );
        assert_eq!(OsLogType::from(LogLevel::from_bits(1 << 9)), OsLogType::Default);
    }

    #[test]
    fn test_syslog_severity_codes() {
        assert_eq!(OsLogType::Fault.syslog_severity(), 2);
        assert_eq!(OsLogType::Error.syslog_severity(), 3);
        assert_eq!(OsLogType::Default.syslog_severity(), 5);
        assert_eq!(OsLogType::Info.syslog_severity(), 6);
        assert_eq!(OsLogType::Debug.syslog_severity(), 7);
    }
}
