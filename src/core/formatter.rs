//! Formatter trait and the ordered formatter chain

use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;

/// A single step of the formatting pipeline.
///
/// Implementations must not depend on external mutable state; the output is a
/// function of the input message, the level and the formatter's own
/// configuration. A formatter is free to ignore `level`.
pub trait LogFormatter: Send + Sync {
    fn format(&self, message: &str, level: LogLevel) -> String;
}

impl<F> LogFormatter for F
where
    F: Fn(&str, LogLevel) -> String + Send + Sync,
{
    fn format(&self, message: &str, level: LogLevel) -> String {
        self(message, level)
    }
}

/// An ordered sequence of formatters applied left to right.
///
/// The chain `[a, b]` produces `b(a(message))`. Formatters are held behind
/// `Arc` so the same instance can be shared by several printers.
#[derive(Clone, Default)]
pub struct FormatterChain {
    formatters: Vec<Arc<dyn LogFormatter>>,
}

impl FormatterChain {
    pub fn new(formatters: Vec<Arc<dyn LogFormatter>>) -> Self {
        Self { formatters }
    }

    /// The identity chain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a formatter. Only available while the chain is still owned by
    /// the code assembling it.
    #[must_use]
    pub fn with<F: LogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatters.push(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_shared(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        self.formatters.push(formatter);
        self
    }

    /// Thread `message` through every formatter in order. The level is passed
    /// unchanged to each step.
    pub fn apply_all(&self, message: impl Into<String>, level: LogLevel) -> String {
        self.formatters
            .iter()
            .fold(message.into(), |message, formatter| {
                formatter.format(&message, level)
            })
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn LogFormatter>> {
        self.formatters.iter()
    }
}

impl fmt::Debug for FormatterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterChain")
            .field("len", &self.formatters.len())
            .finish()
    }
}

impl FromIterator<Arc<dyn LogFormatter>> for FormatterChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn LogFormatter>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Arc<dyn LogFormatter>>> for FormatterChain {
    fn from(formatters: Vec<Arc<dyn LogFormatter>>) -> Self {
        Self::new(formatters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Tag(&'static str);

    impl LogFormatter for Tag {
        fn format(&self, message: &str, _level: LogLevel) -> String {
            format!("{}({})", self.0, message)
        }
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = FormatterChain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.apply_all("raw", LogLevel::INFO), "raw");
    }

    #[test]
    fn test_chain_applies_left_to_right() {
        let chain = FormatterChain::empty().with(Tag("a")).with(Tag("b"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.apply_all("m", LogLevel::DEBUG), "b(a(m))");
    }

    #[test]
    fn test_level_reaches_every_formatter_unchanged() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            move |message: &str, level: LogLevel| {
                seen.lock().push(level);
                message.to_string()
            }
        };
        let recorder: Arc<dyn LogFormatter> = Arc::new(recorder);
        let chain = FormatterChain::new(vec![Arc::clone(&recorder), recorder]);

        chain.apply_all("m", LogLevel::FAULT);

        assert_eq!(*seen.lock(), vec![LogLevel::FAULT, LogLevel::FAULT]);
    }

    #[test]
    fn test_closures_are_formatters() {
        let chain: FormatterChain = vec![
            Arc::new(|m: &str, _: LogLevel| m.to_uppercase()) as Arc<dyn LogFormatter>,
            Arc::new(|m: &str, l: LogLevel| format!("{l}: {m}")),
        ]
        .into_iter()
        .collect();

        assert_eq!(chain.apply_all("boom", LogLevel::ERROR), "error: BOOM");
    }
}
