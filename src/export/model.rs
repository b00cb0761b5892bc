use crate::core::period::{MonthlyRow, PaymentRow};
use crate::models::day_summary::SummaryRow;
use crate::models::raw_row::RawRow;
use crate::utils::formatting::fmt_hours;
use serde::Serialize;

/// A flat record that every export backend can write.
///
/// CSV and JSON go through serde; XLSX and terminal tables use
/// `HEADERS` + `cells()`, which must list the fields in serde order.
pub trait ExportRow: Serialize {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Raw store row as exported by `--kind events`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub row: usize,
    pub employee: String,
    pub action: String,
    pub timestamp: String,
}

impl From<&RawRow> for EventExport {
    fn from(r: &RawRow) -> Self {
        Self {
            row: r.index,
            employee: r.employee.clone(),
            action: r.action.clone(),
            timestamp: r.timestamp.clone(),
        }
    }
}

impl ExportRow for EventExport {
    const HEADERS: &'static [&'static str] = &["row", "employee", "action", "timestamp"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.row.to_string(),
            self.employee.clone(),
            self.action.clone(),
            self.timestamp.clone(),
        ]
    }
}

impl ExportRow for SummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "employee",
        "date",
        "total_hours",
        "break_hours",
        "site_visit_hours",
        "sessions",
        "first_in",
        "last_out",
        "flags",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.employee.clone(),
            self.date.clone(),
            fmt_hours(self.total_hours),
            fmt_hours(self.break_hours),
            fmt_hours(self.site_visit_hours),
            self.sessions.to_string(),
            self.first_in.clone(),
            self.last_out.clone(),
            self.flags.clone(),
        ]
    }
}

impl ExportRow for PaymentRow {
    const HEADERS: &'static [&'static str] = &["employee", "total_hours", "total_days"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.employee.clone(),
            fmt_hours(self.total_hours),
            fmt_hours(self.total_days),
        ]
    }
}

impl ExportRow for MonthlyRow {
    const HEADERS: &'static [&'static str] = &["employee", "year", "month", "total_hours"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.employee.clone(),
            self.year.to_string(),
            self.month.clone(),
            fmt_hours(self.total_hours),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_headers() {
        let row = PaymentRow {
            employee: "anna".into(),
            total_hours: 12.0,
            total_days: 1.5,
        };
        assert_eq!(row.cells().len(), PaymentRow::HEADERS.len());
        assert_eq!(row.cells(), vec!["anna", "12.00", "1.50"]);

        let ev = EventExport::from(&RawRow::new(3, "bob", "Check In", "2025-03-03 08:00:00"));
        assert_eq!(ev.cells()[0], "3");
    }
}
