//! Console printer implementation

use crate::core::{FormatterChain, LogLevel, PrinterStrategy, Result};
use std::io::Write;
use std::sync::Arc;

/// Line-oriented text output
pub trait ConsoleWriter: Send + Sync {
    fn print(&self, message: &str) -> Result<()>;
}

/// Writes each message as one line on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn print(&self, message: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", message)?;
        Ok(())
    }
}

/// Formats with its chain, then prints the result unchanged
///
/// # Example
///
/// ```
/// use severity_log::prelude::*;
/// use severity_log::formatters::PrefixLogFormatter;
///
/// let printer = ConsolePrinter::new(FormatterChain::empty().with(PrefixLogFormatter::new("App")));
/// printer.log("started", LogLevel::INFO).unwrap();
/// ```
pub struct ConsolePrinter {
    formatters: FormatterChain,
    writer: Arc<dyn ConsoleWriter>,
}

impl ConsolePrinter {
    pub fn new(formatters: FormatterChain) -> Self {
        Self::with_writer(formatters, Arc::new(StdoutWriter))
    }

    pub fn with_writer(formatters: FormatterChain, writer: Arc<dyn ConsoleWriter>) -> Self {
        Self {
            formatters,
            writer,
        }
    }
}

impl PrinterStrategy for ConsolePrinter {
    fn formatters(&self) -> &FormatterChain {
        &self.formatters
    }

    fn log(&self, message: &str, level: LogLevel) -> Result<()> {
        let message = self.format_message(message, level);
        self.writer.print(&message)
    }

    fn name(&self) -> &str {
        "console"
    }
}
