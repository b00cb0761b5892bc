use serde::{Deserialize, Serialize};

/// A row exactly as stored in the events table, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawRow {
    #[serde(skip)]
    pub index: usize,
    #[serde(rename = "Employee", default)]
    pub employee: String,
    #[serde(rename = "Action", default)]
    pub action: String,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

impl RawRow {
    pub fn new(index: usize, employee: &str, action: &str, timestamp: &str) -> Self {
        Self {
            index,
            employee: employee.to_string(),
            action: action.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}
