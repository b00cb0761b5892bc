//! Snapshot → daily summaries pipeline shared by every report command.

use crate::core::aggregate::{Policy, aggregate};
use crate::core::ingest::{Discard, ingest};
use crate::core::reconstruct::reconstruct;
use crate::models::day_summary::DailySummary;
use crate::models::raw_row::RawRow;
use crate::models::session::Session;
use chrono::NaiveDate;

/// Optional restrictions applied after aggregation.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub employee: Option<String>,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl ReportFilter {
    fn keeps(&self, employee: &str, date: NaiveDate) -> bool {
        let employee_ok = self.employee.as_deref().is_none_or(|e| e == employee);
        let date_ok = self
            .range
            .is_none_or(|(from, to)| date >= from && date <= to);
        employee_ok && date_ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Report {
    pub summaries: Vec<DailySummary>,
    pub sessions: Vec<Session>,
    pub discards: Vec<Discard>,
}

pub fn build_report(rows: &[RawRow], policy: &Policy, filter: &ReportFilter) -> Report {
    let snapshot = ingest(rows);
    let mut report = Report {
        discards: snapshot.discards.clone(),
        ..Report::default()
    };

    for employee in snapshot.employees() {
        if filter.employee.as_deref().is_some_and(|e| e != employee) {
            continue;
        }

        let mut recon = reconstruct(&snapshot.events_for(&employee));
        recon.stray.extend(snapshot.unknown_for(&employee));

        report.summaries.extend(
            aggregate(&recon, policy)
                .into_iter()
                .filter(|d| filter.keeps(&d.employee, d.date)),
        );
        report.sessions.extend(
            recon
                .sessions
                .into_iter()
                .filter(|s| filter.keeps(&s.employee, s.date)),
        );
    }

    report
        .summaries
        .sort_by(|a, b| (a.date, &a.employee).cmp(&(b.date, &b.employee)));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::anomaly::Anomaly;
    use chrono::{Duration, NaiveDateTime, NaiveTime};

    fn policy() -> Policy {
        Policy {
            late_threshold: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            reference_now: NaiveDateTime::parse_from_str("2025-03-04 18:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    fn rows() -> Vec<RawRow> {
        [
            ("anna", "Check In", "2025-03-03 08:00:00"),
            ("bob", "Check In", "2025-03-03 09:30:00"),
            ("anna", "Check Out", "2025-03-03 16:00:00"),
            ("bob", "Nap", "2025-03-03 12:00:00"),
            ("bob", "Check Out", "not a date"),
            ("bob", "Check Out", "2025-03-03 17:30:00"),
            ("anna", "Check In", "2025-03-04 08:00:00"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (e, a, t))| RawRow::new(i, e, a, t))
        .collect()
    }

    #[test]
    fn builds_summaries_for_every_employee() {
        let report = build_report(&rows(), &policy(), &ReportFilter::default());

        assert_eq!(report.discards.len(), 1);
        assert_eq!(report.discards[0].row, 4);
        assert_eq!(report.summaries.len(), 3);

        let bob = &report.summaries[1];
        assert_eq!(bob.employee, "bob");
        assert_eq!(bob.worked, Duration::hours(8));
        assert!(bob.flags.contains(&Anomaly::LateArrival));
        assert!(bob.flags.contains(&Anomaly::UnknownAction));

        let anna_open = &report.summaries[2];
        assert_eq!(anna_open.worked, Duration::hours(10));
        assert!(anna_open.flags.contains(&Anomaly::OpenSession));
    }

    #[test]
    fn filters_by_employee_and_range() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let filter = ReportFilter {
            employee: Some("anna".into()),
            range: Some((day, day)),
        };

        let report = build_report(&rows(), &policy(), &filter);
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].worked, Duration::hours(8));
        assert_eq!(report.sessions.len(), 1);
    }

    #[test]
    fn identical_input_gives_identical_report() {
        let a = build_report(&rows(), &policy(), &ReportFilter::default());
        let b = build_report(&rows(), &policy(), &ReportFilter::default());
        assert_eq!(a.summaries, b.summaries);
        assert_eq!(a.sessions, b.sessions);
        assert_eq!(a.discards, b.discards);
    }

    #[test]
    fn mixed_case_rows_form_one_clean_day() {
        let rows = vec![
            RawRow::new(0, "Anna", "Check In", "2025-03-03 08:00:00"),
            RawRow::new(1, "anna ", "Check Out", "2025-03-03 16:00:00"),
        ];
        let filter = ReportFilter {
            employee: Some("anna".into()),
            range: None,
        };

        let report = build_report(&rows, &policy(), &filter);
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].employee, "anna");
        assert_eq!(report.summaries[0].worked, Duration::hours(8));
        assert!(report.summaries[0].flags.is_empty());
    }
}
