//! Serializable logger configuration
//!
//! ```
//! use severity_log::prelude::*;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "log_level": "debug|error",
//!     "printers": [
//!         { "type": "console", "formatters": [ { "type": "prefix", "name": "App" } ] }
//!     ]
//! }"#).unwrap();
//!
//! let logger = Logger::from_config(&config).unwrap();
//! assert!(logger.is_enabled(LogLevel::ERROR));
//! assert!(!logger.is_enabled(LogLevel::INFO));
//! ```

use super::{
    error::{LoggerError, Result},
    formatter::{FormatterChain, LogFormatter},
    log_level::LogLevel,
    printer::PrinterStrategy,
    timestamp::TimestampFormat,
};
use crate::formatters::{PrefixLogFormatter, TimestampLogFormatter};
use crate::printers::{ConsolePrinter, OsPrinter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Levels admitted by the logger, `all` when omitted
    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub printers: Vec<PrinterConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrinterConfig {
    Console {
        #[serde(default)]
        formatters: Vec<FormatterConfig>,
    },
    Os {
        subsystem: String,
        category: String,
        #[serde(default)]
        formatters: Vec<FormatterConfig>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormatterConfig {
    Prefix {
        name: String,
        /// Decorate error and fault messages, off when omitted
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        markers: bool,
    },
    /// Either a Unicode `date_format` or a raw `strftime` string; ISO 8601
    /// when neither is given
    Timestamp {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        strftime: Option<String>,
    },
    /// Requires the `console` feature
    Color,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Instantiate the configured printers in declaration order
    pub fn build_printers(&self) -> Result<Vec<Arc<dyn PrinterStrategy>>> {
        self.printers
            .iter()
            .enumerate()
            .map(|(idx, printer)| {
                printer
                    .build()
                    .map_err(|e| LoggerError::config(format!("printers[{}]", idx), e.to_string()))
            })
            .collect()
    }
}

impl PrinterConfig {
    pub fn build(&self) -> Result<Arc<dyn PrinterStrategy>> {
        let printer: Arc<dyn PrinterStrategy> = match self {
            PrinterConfig::Console { formatters } => {
                Arc::new(ConsolePrinter::new(build_chain(formatters)?))
            }
            PrinterConfig::Os {
                subsystem,
                category,
                formatters,
            } => Arc::new(OsPrinter::new(subsystem, category, build_chain(formatters)?)),
        };
        Ok(printer)
    }
}

impl FormatterConfig {
    pub fn build(&self) -> Result<Arc<dyn LogFormatter>> {
        let formatter: Arc<dyn LogFormatter> = match self {
            FormatterConfig::Prefix { name, markers } => {
                Arc::new(PrefixLogFormatter::new(name.as_str()).with_markers(*markers))
            }
            FormatterConfig::Timestamp {
                date_format,
                strftime,
            } => {
                let format = match (date_format, strftime) {
                    (Some(_), Some(_)) => {
                        return Err(LoggerError::config(
                            "TimestampLogFormatter",
                            "set either `date_format` or `strftime`, not both",
                        ))
                    }
                    (Some(pattern), None) => TimestampFormat::Pattern(pattern.clone()),
                    (None, Some(strftime)) => TimestampFormat::Custom(strftime.clone()),
                    (None, None) => TimestampFormat::default(),
                };
                Arc::new(TimestampLogFormatter::with_format(format)?)
            }
            #[cfg(feature = "console")]
            FormatterConfig::Color => Arc::new(crate::formatters::ColorLogFormatter::new()),
            #[cfg(not(feature = "console"))]
            FormatterConfig::Color => {
                return Err(LoggerError::config(
                    "ColorLogFormatter",
                    "built without the `console` feature",
                ))
            }
        };
        Ok(formatter)
    }
}

fn build_chain(formatters: &[FormatterConfig]) -> Result<FormatterChain> {
    formatters.iter().map(FormatterConfig::build).collect()
}
