//! Change records
//!
//! Values produced by a document's change tracking. The plugin treats them as
//! opaque and only ever uses their `Display` text.

use std::fmt;

/// One discrete modification to a domain document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    event_type: String,
    old_value: Option<String>,
    new_value: Option<String>,
}

impl ChangeRecord {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            old_value: None,
            new_value: None,
        }
    }

    /// Attach the value before the change
    pub fn with_old_value(mut self, value: impl Into<String>) -> Self {
        self.old_value = Some(value.into());
        self
    }

    /// Attach the value after the change
    pub fn with_new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = Some(value.into());
        self
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn old_value(&self) -> Option<&str> {
        self.old_value.as_deref()
    }

    pub fn new_value(&self) -> Option<&str> {
        self.new_value.as_deref()
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.event_type)?;
        match (&self.old_value, &self.new_value) {
            (None, None) => Ok(()),
            (old, new) => write!(
                f,
                " {{ oldValue: {}, newValue: {} }}",
                old.as_deref().unwrap_or("null"),
                new.as_deref().unwrap_or("null")
            ),
        }
    }
}

/// Ordered batch of change records delivered in a single notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    records: Vec<ChangeRecord>,
}

impl ChangeBatch {
    pub fn new(records: Vec<ChangeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.records.iter()
    }
}

impl From<Vec<ChangeRecord>> for ChangeBatch {
    fn from(records: Vec<ChangeRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ChangeRecord> for ChangeBatch {
    fn from_iter<I: IntoIterator<Item = ChangeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChangeBatch {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display_without_values() {
        let record = ChangeRecord::new("SYMBOL_ADDED");
        assert_eq!(record.to_string(), "SYMBOL_ADDED");
    }

    #[test]
    fn test_record_display_with_values() {
        let record = ChangeRecord::new("SYMBOL_RENAMED")
            .with_old_value("FUN_00401000")
            .with_new_value("main");
        assert_eq!(
            record.to_string(),
            "SYMBOL_RENAMED { oldValue: FUN_00401000, newValue: main }"
        );
    }

    #[test]
    fn test_record_display_missing_old_value() {
        let record = ChangeRecord::new("COMMENT_CHANGED").with_new_value("entry point");
        assert_eq!(
            record.to_string(),
            "COMMENT_CHANGED { oldValue: null, newValue: entry point }"
        );
    }

    #[test]
    fn test_batch_preserves_order() {
        let batch: ChangeBatch = ["A", "B", "C"].into_iter().map(ChangeRecord::new).collect();
        let types: Vec<&str> = batch.iter().map(|r| r.event_type()).collect();
        assert_eq!(types, vec!["A", "B", "C"]);
        assert_eq!(batch.len(), 3);
        assert!(!batch.is_empty());
    }
}
