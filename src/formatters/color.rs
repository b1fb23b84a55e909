//! Colour formatter for terminal output

use crate::core::{LogFormatter, LogLevel};
use colored::Colorize;

/// Wraps the message in the terminal colour of its level.
///
/// Combined sets and sentinels are rendered white.
#[derive(Debug, Clone, Copy)]
pub struct ColorLogFormatter {
    bold_faults: bool,
}

impl ColorLogFormatter {
    pub fn new() -> Self {
        Self { bold_faults: true }
    }

    #[must_use]
    pub fn with_bold_faults(mut self, bold: bool) -> Self {
        self.bold_faults = bold;
        self
    }
}

impl Default for ColorLogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFormatter for ColorLogFormatter {
    fn format(&self, message: &str, level: LogLevel) -> String {
        let colored = message.color(level.color_code());
        if self.bold_faults && level == LogLevel::FAULT {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}
