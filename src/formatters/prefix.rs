//! Prefix formatter: tags every message with a name

use crate::core::{LogFormatter, LogLevel};

/// Prepends `[name] => ` to the message.
///
/// With [`with_markers`](Self::with_markers) enabled, error and fault
/// messages get an additional marker so they stand out in a terminal. Only the
/// exact single levels are decorated; combined sets and the `OFF`/`ALL`
/// sentinels always use the plain form.
///
/// ```
/// use severity_log::formatters::PrefixLogFormatter;
/// use severity_log::{LogFormatter, LogLevel};
///
/// let formatter = PrefixLogFormatter::new("Network");
/// assert_eq!(formatter.format("lost", LogLevel::ERROR), "[Network] => lost");
///
/// let formatter = formatter.with_markers(true);
/// assert_eq!(formatter.format("lost", LogLevel::ERROR), "💣💥💣💥 [Network] => lost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLogFormatter {
    name: String,
    markers: bool,
}

impl PrefixLogFormatter {
    pub const FAULT_MARKER: &'static str = "🚨🚨🚨";
    pub const ERROR_MARKER: &'static str = "💣💥💣💥";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: false,
        }
    }

    /// Decorate error and fault messages with their marker
    #[must_use]
    pub fn with_markers(mut self, enable: bool) -> Self {
        self.markers = enable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> bool {
        self.markers
    }
}

impl LogFormatter for PrefixLogFormatter {
    fn format(&self, message: &str, level: LogLevel) -> String {
        match level {
            _ if !self.markers => format!("[{}] => {}", self.name, message),
            LogLevel::FAULT => format!("{} [{}] => {}", Self::FAULT_MARKER, self.name, message),
            LogLevel::ERROR => format!("{} [{}] => {}", Self::ERROR_MARKER, self.name, message),
            _ => format!("[{}] => {}", self.name, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> PrefixLogFormatter {
        PrefixLogFormatter::new("name").with_markers(true)
    }

    #[test]
    fn test_plain_by_default() {
        let plain = PrefixLogFormatter::new("X");
        assert!(!plain.markers());
        assert_eq!(plain.format("boom", LogLevel::ERROR), "[X] => boom");
        assert_eq!(plain.format("boom", LogLevel::FAULT), "[X] => boom");
    }

    #[test]
    fn test_fault_is_marked() {
        assert_eq!(
            formatter().format("message", LogLevel::FAULT),
            "🚨🚨🚨 [name] => message"
        );
    }

    #[test]
    fn test_error_is_marked() {
        assert_eq!(
            formatter().format("message", LogLevel::ERROR),
            "💣💥💣💥 [name] => message"
        );
    }

    #[test]
    fn test_debug_and_info_are_plain() {
        assert_eq!(formatter().format("message", LogLevel::DEBUG), "[name] => message");
        assert_eq!(formatter().format("message", LogLevel::INFO), "[name] => message");
    }

    #[test]
    fn test_sets_and_sentinels_are_plain() {
        assert_eq!(formatter().format("message", LogLevel::ALL), "[name] => message");
        assert_eq!(
            formatter().format("message", LogLevel::ERROR | LogLevel::FAULT),
            "[name] => message"
        );
    }
}
