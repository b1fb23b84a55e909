//! Timestamp formatter

use crate::core::timestamp::render_strftime;
use crate::core::{LogFormatter, LogLevel, Result, TimestampFormat};
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Source of the current time, replaceable in tests
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local> + Send + Sync,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}

/// Prepends the current local time, separated by a single space.
///
/// The level is ignored. The date pattern is translated on first use and the
/// result is cached for the lifetime of the formatter.
///
/// ```
/// use severity_log::formatters::TimestampLogFormatter;
/// use severity_log::{LogFormatter, LogLevel};
///
/// let formatter = TimestampLogFormatter::new("yyyy");
/// let year = chrono::Local::now().format("%Y").to_string();
/// assert_eq!(formatter.format("go", LogLevel::DEBUG), format!("{} go", year));
/// ```
pub struct TimestampLogFormatter {
    format: TimestampFormat,
    strftime: OnceLock<Option<String>>,
    clock: Arc<dyn Clock>,
}

impl TimestampLogFormatter {
    /// Create a formatter from a Unicode date pattern such as `dd/MM/yyyy`
    pub fn new(date_format: impl Into<String>) -> Self {
        Self::from_parts(TimestampFormat::Pattern(date_format.into()))
    }

    /// Create a formatter for any [`TimestampFormat`], rejecting formats that
    /// cannot be rendered
    pub fn with_format(format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        Ok(Self::from_parts(format))
    }

    #[must_use]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.format
    }

    fn from_parts(format: TimestampFormat) -> Self {
        Self {
            format,
            strftime: OnceLock::new(),
            clock: Arc::new(SystemClock),
        }
    }

    fn timestamp(&self) -> String {
        let now = self.clock.now();
        match self.strftime.get_or_init(|| self.format.to_strftime()) {
            Some(strftime) => render_strftime(&now, strftime),
            None => self.format.format(&now),
        }
    }
}

impl LogFormatter for TimestampLogFormatter {
    fn format(&self, message: &str, _level: LogLevel) -> String {
        format!("{} {}", self.timestamp(), message)
    }
}

impl fmt::Debug for TimestampLogFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampLogFormatter")
            .field("format", &self.format)
            .finish()
    }
}
