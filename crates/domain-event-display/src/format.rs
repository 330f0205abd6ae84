//! Log line formatting
//!
//! A log line is `<timestamp>: <record text>\n`; the record text is written
//! as is, embedded newlines included.

use crate::change::ChangeRecord;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};

/// `Sun Jan 05 14:03:22 2025`: a classic date string without the zone name
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Source of timestamps for log lines
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Builds log lines from change records
pub struct LineFormatter {
    clock: Box<dyn Clock>,
    timestamp_format: String,
}

impl LineFormatter {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use a custom strftime format; invalid formats keep the default
    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        if is_valid_format(format) {
            self.timestamp_format = format.to_string();
        } else {
            log::warn!(
                "Invalid timestamp format {:?}, using {:?}",
                format,
                DEFAULT_TIMESTAMP_FORMAT
            );
        }
        self
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Current timestamp rendered with the configured format
    pub fn timestamp(&self) -> String {
        self.clock
            .now()
            .format(&self.timestamp_format)
            .to_string()
    }

    /// Format one record as a complete log line, trailing newline included
    pub fn format_line(&self, record: &ChangeRecord) -> String {
        format!("{}: {}\n", self.timestamp(), record)
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

impl std::fmt::Debug for LineFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineFormatter")
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> LineFormatter {
        let offset = FixedOffset::east_opt(0).unwrap();
        let instant = offset.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        LineFormatter::new(Box::new(FixedClock(instant)))
    }

    #[test]
    fn test_default_timestamp() {
        assert_eq!(fixed().timestamp(), "Sat Mar 09 14:05:07 2024");
    }

    #[test]
    fn test_format_line() {
        let line = fixed().format_line(&ChangeRecord::new("MEMORY_BLOCK_ADDED"));
        assert_eq!(line, "Sat Mar 09 14:05:07 2024: MEMORY_BLOCK_ADDED\n");
    }

    #[test]
    fn test_custom_format() {
        let formatter = fixed().with_timestamp_format("%H:%M:%S");
        assert_eq!(
            formatter.format_line(&ChangeRecord::new("X")),
            "14:05:07: X\n"
        );
    }

    #[test]
    fn test_invalid_format_keeps_default() {
        let formatter = fixed().with_timestamp_format("%Q");
        assert_eq!(formatter.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);

        let formatter = fixed().with_timestamp_format("");
        assert_eq!(formatter.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_record_text_is_written_unchanged() {
        let formatter = fixed().with_timestamp_format("%H:%M");
        for text in ["CODE_UNIT_CHANGED\nat 0x401000", "A\r\nB", "A\n", "  indented "] {
            let record = ChangeRecord::new(text);
            assert_eq!(formatter.format_line(&record), format!("14:05: {}\n", text));
        }
    }
}
