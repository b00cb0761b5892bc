use super::action::Action;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A validated punch event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub seq: usize,                // ⇔ insertion position in the snapshot
    pub employee: String,          // ⇔ events.employee
    pub action: Action,            // ⇔ events.action
    pub timestamp: NaiveDateTime,  // ⇔ events.timestamp (local wall clock)
}

impl Event {
    pub fn new(seq: usize, employee: &str, action: Action, timestamp: NaiveDateTime) -> Self {
        Self {
            seq,
            employee: employee.to_string(),
            action,
            timestamp,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
