//! Validation of raw store rows into typed events.
//!
//! Malformed rows (missing field, unparsable timestamp) are skipped and
//! recorded in the discard list; rows with an unknown action keep their
//! employee and instant and surface as `UnknownAction` anomalies.

use crate::models::action::Action;
use crate::models::anomaly::{Anomaly, StrayAnomaly};
use crate::models::employee::Employee;
use crate::models::event::Event;
use crate::models::raw_row::RawRow;
use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use std::fmt;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum DiscardReason {
    MissingField(&'static str),
    BadTimestamp(String),
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::MissingField(name) => write!(f, "missing {name}"),
            DiscardReason::BadTimestamp(raw) => write!(f, "unparsable timestamp '{raw}'"),
        }
    }
}

/// A row skipped by validation, identified by its position in the snapshot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Discard {
    pub row: usize,
    pub reason: DiscardReason,
}

#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub discards: Vec<Discard>,
    pub unknown: Vec<StrayAnomaly>,
}

impl Snapshot {
    /// Employees in first-seen order; names only seen on unknown-action rows come last.
    pub fn employees(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let names = self
            .events
            .iter()
            .map(|e| &e.employee)
            .chain(self.unknown.iter().map(|s| &s.employee));
        for name in names {
            if !out.iter().any(|n| n == name) {
                out.push(name.clone());
            }
        }
        out
    }

    pub fn events_for(&self, employee: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.employee == employee)
            .cloned()
            .collect()
    }

    pub fn unknown_for(&self, employee: &str) -> Vec<StrayAnomaly> {
        self.unknown
            .iter()
            .filter(|s| s.employee == employee)
            .cloned()
            .collect()
    }
}

/// Parse a stored timestamp. RFC 3339 values keep their wall-clock part.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    for fmt in TIMESTAMP_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local())
}

pub fn ingest(rows: &[RawRow]) -> Snapshot {
    let mut snapshot = Snapshot::default();

    for row in rows {
        let employee = Employee::normalize_username(&row.employee);
        let action = row.action.trim();
        let timestamp = row.timestamp.trim();

        let missing = if employee.is_empty() {
            Some("employee")
        } else if action.is_empty() {
            Some("action")
        } else if timestamp.is_empty() {
            Some("timestamp")
        } else {
            None
        };

        if let Some(field) = missing {
            snapshot.discards.push(Discard {
                row: row.index,
                reason: DiscardReason::MissingField(field),
            });
            continue;
        }

        let Some(at) = parse_timestamp(timestamp) else {
            snapshot.discards.push(Discard {
                row: row.index,
                reason: DiscardReason::BadTimestamp(timestamp.to_string()),
            });
            continue;
        };

        match Action::parse(action) {
            Some(a) => snapshot.events.push(Event::new(row.index, &employee, a, at)),
            None => snapshot.unknown.push(StrayAnomaly::new(
                &employee,
                at,
                Anomaly::UnknownAction,
                format!("unknown action '{action}'"),
            )),
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::new(0, "anna", "Check In", "2025-03-03 08:00:00"),
            RawRow::new(1, "", "Check Out", "2025-03-03 17:00:00"),
            RawRow::new(2, "anna", "Check Out", "yesterday"),
            RawRow::new(3, "bob", "Teleport", "2025-03-03 09:00:00"),
            RawRow::new(4, "bob", "check in", "2025-03-03T09:15"),
            RawRow::new(5, "anna", "Check Out", "  "),
        ]
    }

    #[test]
    fn malformed_rows_are_discarded_with_index() {
        let snap = ingest(&rows());
        assert_eq!(snap.events.len(), 2);
        assert_eq!(
            snap.discards,
            vec![
                Discard {
                    row: 1,
                    reason: DiscardReason::MissingField("employee")
                },
                Discard {
                    row: 2,
                    reason: DiscardReason::BadTimestamp("yesterday".into())
                },
                Discard {
                    row: 5,
                    reason: DiscardReason::MissingField("timestamp")
                },
            ]
        );
    }

    #[test]
    fn unknown_action_is_an_anomaly_not_a_discard() {
        let snap = ingest(&rows());
        assert_eq!(snap.unknown.len(), 1);
        assert_eq!(snap.unknown[0].employee, "bob");
        assert_eq!(snap.unknown[0].kind, Anomaly::UnknownAction);
        assert_eq!(snap.employees(), vec!["anna".to_string(), "bob".to_string()]);
    }

    #[test]
    fn accepts_rfc3339_wall_clock() {
        let dt = parse_timestamp("2025-03-03T08:00:00+01:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2025-03-03 08:00");
    }

    #[test]
    fn employee_names_fold_to_one_username() {
        let snap = ingest(&[
            RawRow::new(0, "  Anna ", "Check In", "2025-03-03 08:00:00"),
            RawRow::new(1, "anna", "Check Out", "2025-03-03 16:00:00"),
            RawRow::new(2, "ANNA", "Nap", "2025-03-03 12:00:00"),
        ]);
        assert_eq!(snap.employees(), vec!["anna".to_string()]);
        assert_eq!(snap.events_for("anna").len(), 2);
        assert_eq!(snap.unknown[0].employee, "anna");
    }
}
