//! Printer implementations

pub mod console;
pub mod os;
pub mod system_log;

pub use console::{ConsolePrinter, ConsoleWriter, StdoutWriter};
pub use os::{OsLogType, OsPrinter, OsWriter};
pub use system_log::SystemLogWriter;

// Re-export traits for convenience
pub use crate::core::PrinterStrategy;
