//! Log level definitions
//!
//! A [`LogLevel`] is a bit set, not a rank. A logger configured with
//! `LogLevel::DEBUG | LogLevel::ERROR` lets debug and error messages through
//! while suppressing info and fault; there is no "minimum level".

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(u32);

impl LogLevel {
    /// No logging. No message is ever emitted at this level, so a filter of
    /// `OFF` admits nothing.
    pub const OFF: LogLevel = LogLevel(1 << 0);

    /// Fine-grained events that are mostly useful while debugging.
    pub const DEBUG: LogLevel = LogLevel(1 << 1);

    /// Progress of the application at a high level.
    pub const INFO: LogLevel = LogLevel(1 << 2);

    /// Error events that might still allow the application to continue.
    pub const ERROR: LogLevel = LogLevel(1 << 3);

    /// Severe failures that lead the application to abort.
    pub const FAULT: LogLevel = LogLevel(1 << 4);

    /// Every bit set. Deliberately wider than the union of the named levels so
    /// a level added later is covered without touching existing filters.
    pub const ALL: LogLevel = LogLevel(u32::MAX);

    const NAMED: [(LogLevel, &'static str); 4] = [
        (LogLevel::DEBUG, "debug"),
        (LogLevel::INFO, "info"),
        (LogLevel::ERROR, "error"),
        (LogLevel::FAULT, "fault"),
    ];

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        LogLevel(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The empty set. Unlike [`LogLevel::OFF`] this has no bits at all.
    #[inline]
    pub const fn empty() -> Self {
        LogLevel(0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `other` is set in `self`.
    ///
    /// For a single level this is the same as `self & level` being non-zero.
    #[inline]
    pub const fn contains(self, other: LogLevel) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: LogLevel) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: LogLevel) -> Self {
        LogLevel(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: LogLevel) -> Self {
        LogLevel(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: LogLevel) -> Self {
        LogLevel(self.0 & !other.0)
    }

    pub fn insert(&mut self, other: LogLevel) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: LogLevel) {
        self.0 &= !other.0;
    }

    /// Name of a single named level, `None` for sets and sentinels.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| *name)
    }

    /// The named levels present in this set, in declaration order.
    pub fn iter_levels(self) -> impl Iterator<Item = LogLevel> {
        Self::NAMED
            .into_iter()
            .map(|(level, _)| level)
            .filter(move |level| self.contains(*level))
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match *self {
            LogLevel::DEBUG => Blue,
            LogLevel::INFO => Green,
            LogLevel::ERROR => Red,
            LogLevel::FAULT => BrightRed,
            _ => White,
        }
    }

    fn parse_token(token: &str) -> Option<LogLevel> {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "off" | "none" => return Some(LogLevel::OFF),
            "all" => return Some(LogLevel::ALL),
            _ => {}
        }
        if let Some((level, _)) = Self::NAMED.iter().find(|(_, name)| *name == lower) {
            return Some(*level);
        }
        if let Some(hex) = lower.strip_prefix("0x") {
            return u32::from_str_radix(hex, 16).ok().map(LogLevel);
        }
        lower.parse::<u32>().ok().map(LogLevel)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::ALL
    }
}

impl BitOr for LogLevel {
    type Output = LogLevel;

    fn bitor(self, rhs: LogLevel) -> LogLevel {
        self.union(rhs)
    }
}

impl BitOrAssign for LogLevel {
    fn bitor_assign(&mut self, rhs: LogLevel) {
        self.insert(rhs);
    }
}

impl BitAnd for LogLevel {
    type Output = LogLevel;

    fn bitand(self, rhs: LogLevel) -> LogLevel {
        self.intersection(rhs)
    }
}

impl Not for LogLevel {
    type Output = LogLevel;

    fn not(self) -> LogLevel {
        LogLevel(!self.0)
    }
}

impl FromIterator<LogLevel> for LogLevel {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        iter.into_iter().fold(LogLevel::empty(), LogLevel::union)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LogLevel::ALL => return f.write_str("all"),
            LogLevel::OFF => return f.write_str("off"),
            _ => {}
        }

        let mut parts: Vec<String> = Vec::new();
        if self.contains(LogLevel::OFF) {
            parts.push("off".to_string());
        }
        let mut residue = self.difference(LogLevel::OFF);
        for level in self.iter_levels() {
            if let Some(name) = level.name() {
                parts.push(name.to_string());
            }
            residue.remove(level);
        }
        if !residue.is_empty() {
            parts.push(format!("{:#x}", residue.0));
        }

        if parts.is_empty() {
            f.write_str("0x0")
        } else {
            f.write_str(&parts.join("|"))
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Parses names joined by `|` or `,`, e.g. `"debug|error"`, `"all"`, `"0x6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut level = LogLevel::empty();
        let mut seen = false;
        for token in s.split(['|', ',']).map(str::trim).filter(|t| !t.is_empty()) {
            let parsed = Self::parse_token(token).ok_or_else(|| LoggerError::invalid_log_level(s))?;
            level.insert(parsed);
            seen = true;
        }
        if !seen {
            return Err(LoggerError::invalid_log_level(s));
        }
        Ok(level)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}
