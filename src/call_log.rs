//! In-memory journal of calls made against the mock backend.
//!
//! Lets a test assert which wallet calls a UI flow made, and in what order.

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub timestamp: DateTime<Utc>,
    pub operation: &'static str,
    pub details: String,
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] operation={}", self.timestamp.to_rfc3339(), self.operation)?;
        if !self.details.trim().is_empty() {
            write!(f, " {}", self.details)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CallLog {
    records: Vec<CallRecord>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record describing one call.
    pub fn append(&mut self, operation: &'static str, details: impl AsRef<str>) {
        let record = CallRecord {
            timestamp: Utc::now(),
            operation,
            details: details.as_ref().to_string(),
        };
        tracing::debug!("{}", record);
        self.records.push(record);
    }

    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.operation).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Render the journal one record per line
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
