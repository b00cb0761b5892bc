use super::anomaly::{AnomalySet, join_flags};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Worked time and flags for one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub employee: String,
    pub date: NaiveDate,
    pub worked: Duration,
    pub breaks: Duration,
    pub site_visits: Duration,
    pub sessions: usize,
    pub first_check_in: Option<NaiveDateTime>,
    pub last_check_out: Option<NaiveDateTime>,
    pub flags: AnomalySet,
}

impl DailySummary {
    pub fn empty(employee: &str, date: NaiveDate) -> Self {
        Self {
            employee: employee.to_string(),
            date,
            worked: Duration::zero(),
            breaks: Duration::zero(),
            site_visits: Duration::zero(),
            sessions: 0,
            first_check_in: None,
            last_check_out: None,
            flags: AnomalySet::new(),
        }
    }

    pub fn worked_minutes(&self) -> i64 {
        self.worked.num_minutes()
    }

    pub fn to_row(&self) -> SummaryRow {
        SummaryRow {
            employee: self.employee.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
            total_hours: hours(self.worked),
            break_hours: hours(self.breaks),
            site_visit_hours: hours(self.site_visits),
            sessions: self.sessions,
            first_in: self
                .first_check_in
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            last_out: self
                .last_check_out
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
            flags: join_flags(&self.flags),
        }
    }
}

/// Flat, serializable rendering of a [`DailySummary`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryRow {
    pub employee: String,
    pub date: String,
    pub total_hours: f64,
    pub break_hours: f64,
    pub site_visit_hours: f64,
    pub sessions: usize,
    pub first_in: String,
    pub last_out: String,
    pub flags: String,
}

/// Duration → decimal hours rounded to two places.
pub fn hours(d: Duration) -> f64 {
    round2(d.num_seconds() as f64 / 3600.0)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_hours_are_rounded() {
        assert_eq!(hours(Duration::minutes(475)), 7.92);
        assert_eq!(hours(Duration::minutes(510)), 8.5);
        assert_eq!(hours(Duration::zero()), 0.0);
    }
}
