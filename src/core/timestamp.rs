//! Timestamp formatting utilities
//!
//! Provides configurable timestamp formats for the timestamp formatter.
//! Besides the fixed ISO 8601, RFC 3339 and Unix formats, two free-form
//! variants exist: raw strftime strings and Unicode date patterns such as
//! `dd/MM/yyyy`, which are translated to strftime once.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use severity_log::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let format = TimestampFormat::Pattern("dd/MM/yyyy".to_string());
/// assert_eq!(format.format(&at), "08/01/2025");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+00:00`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `%d/%b/%Y:%H:%M:%S %z`
    Custom(String),

    /// Unicode date pattern, e.g. `yyyy-MM-dd HH:mm:ss.SSS`
    Pattern(String),
}

impl TimestampFormat {
    /// The strftime string this format renders with, `None` for the numeric
    /// Unix variants.
    #[must_use]
    pub fn to_strftime(&self) -> Option<String> {
        match self {
            TimestampFormat::Iso8601 => Some("%Y-%m-%dT%H:%M:%S%.3f%:z".to_string()),
            TimestampFormat::Rfc3339 => Some("%Y-%m-%dT%H:%M:%S%:z".to_string()),
            TimestampFormat::Unix | TimestampFormat::UnixMillis => None,
            TimestampFormat::Custom(format_str) => Some(format_str.clone()),
            TimestampFormat::Pattern(pattern) => Some(date_pattern_to_strftime(pattern)),
        }
    }

    /// Reject formats chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if let Some(strftime) = self.to_strftime() {
            if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("unsupported format specifier in '{}'", strftime),
                ));
            }
        }
        Ok(())
    }

    /// Format a datetime according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            _ => match self.to_strftime() {
                Some(strftime) => render_strftime(datetime, &strftime),
                None => String::new(),
            },
        }
    }
}

/// Render with a strftime string without panicking on invalid specifiers.
///
/// An unrenderable format yields the format string itself.
pub(crate) fn render_strftime<Tz>(datetime: &DateTime<Tz>, strftime: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(strftime.len() + 8);
    if write!(out, "{}", datetime.format(strftime)).is_err() {
        out.clear();
        out.push_str(strftime);
    }
    out
}

/// Translate a Unicode date pattern (`yyyy-MM-dd HH:mm`) to strftime.
///
/// Text between single quotes is copied verbatim and `''` is a literal quote.
/// Letters without a mapping are copied as-is. Fractional seconds (`S`) are
/// rounded up to 3, 6 or 9 digits.
pub fn date_pattern_to_strftime(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        out.push('\'');
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut out, c);
            i += 1;
            continue;
        }

        let width = chars[i..].iter().take_while(|&&x| x == c).count();
        i += width;
        match pattern_field(c, width) {
            Some(specifier) => out.push_str(specifier),
            None => (0..width).for_each(|_| out.push(c)),
        }
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn pattern_field(symbol: char, width: usize) -> Option<&'static str> {
    let specifier = match (symbol, width) {
        ('y', 2) | ('u', 2) => "%y",
        ('y', _) | ('u', _) => "%Y",
        ('M', 1) | ('L', 1) => "%-m",
        ('M', 2) | ('L', 2) => "%m",
        ('M', 3) | ('L', 3) => "%b",
        ('M', _) | ('L', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('D', _) => "%j",
        ('E', w) if w >= 4 => "%A",
        ('E', _) => "%a",
        ('a', _) => "%p",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', w) if w <= 3 => "%3f",
        ('S', w) if w <= 6 => "%6f",
        ('S', _) => "%9f",
        ('Z', w) if w >= 5 => "%:z",
        ('Z', _) => "%z",
        ('X', w) if w >= 3 => "%:z",
        ('X', _) => "%z",
        ('z', _) => "%Z",
        _ => return None,
    };
    Some(specifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45+00:00");
    }

    #[test]
    fn test_unix_formats() {
        let seconds: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(seconds, 1736332245);
        assert_eq!(millis, 1736332245123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_pattern_format() {
        let format = TimestampFormat::Pattern("dd.MM.yyyy".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08.01.2025");

        let format = TimestampFormat::Pattern("yyyy-MM-dd'T'HH:mm:ss.SSS".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08T10:30:45.123");

        let format = TimestampFormat::Pattern("yyyy".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025");
    }

    #[test]
    fn test_pattern_translation() {
        assert_eq!(date_pattern_to_strftime("dd/MM/yyyy"), "%d/%m/%Y");
        assert_eq!(date_pattern_to_strftime("d MMM yy, h:mm a"), "%-d %b %y, %-I:%M %p");
        assert_eq!(date_pattern_to_strftime("EEEE 'at' HH"), "%A at %H");
        assert_eq!(date_pattern_to_strftime("'o''clock' HH"), "o'clock %H");
        assert_eq!(date_pattern_to_strftime("100% yyyy"), "100%% %Y");
        assert_eq!(date_pattern_to_strftime("HH:mm ZZZZZ"), "%H:%M %:z");
    }

    #[test]
    fn test_unmapped_letters_are_literal() {
        assert_eq!(date_pattern_to_strftime("qq yyyy"), "qq %Y");
    }

    #[test]
    fn test_validate() {
        assert!(TimestampFormat::Iso8601.validate().is_ok());
        assert!(TimestampFormat::Pattern("dd/MM/yyyy".into()).validate().is_ok());
        assert!(TimestampFormat::Custom("%Y-%Q".into()).validate().is_err());
    }

    #[test]
    fn test_invalid_custom_format_does_not_panic() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "%Q");
    }

    #[test]
    fn test_default_is_iso8601() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Iso8601);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Iso8601).expect("serialize");
        assert_eq!(json, "\"Iso8601\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Pattern":"yyyy"}"#).expect("deserialize Pattern");
        assert_eq!(format, TimestampFormat::Pattern("yyyy".to_string()));
    }
}
