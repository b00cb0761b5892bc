use super::anomaly::AnomalySet;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A start/end pair; `end == None` means the interval was never closed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl Interval {
    pub fn open(start: NaiveDateTime) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// One reconstructed check-in → check-out work interval.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Session {
    pub employee: String,
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub breaks: Vec<Interval>,
    pub site_visits: Vec<Interval>,
    pub flags: AnomalySet,
}

impl Session {
    pub fn open(employee: &str, start: NaiveDateTime) -> Self {
        Self {
            employee: employee.to_string(),
            date: start.date(),
            start,
            end: None,
            breaks: Vec::new(),
            site_visits: Vec::new(),
            flags: AnomalySet::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}
