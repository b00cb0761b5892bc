//! Weekly, monthly and payment roll-ups over daily summaries.

use crate::models::day_summary::{DailySummary, hours, round2};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Hours beyond `standard`, never negative.
pub fn overtime(worked: Duration, standard: Duration) -> Duration {
    (worked - standard).max(Duration::zero())
}

/// Monday..Sunday week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Duration::days(day.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyRow {
    pub employee: String,
    pub hours_worked: f64,
    pub break_hours: f64,
    pub site_visit_hours: f64,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyRow {
    pub employee: String,
    pub year: i32,
    pub month: String,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentRow {
    pub employee: String,
    pub total_hours: f64,
    pub total_days: f64,
}

#[derive(Default)]
struct Totals {
    worked: Duration,
    breaks: Duration,
    site_visits: Duration,
}

/// Per-employee totals for the week containing `day`.
///
/// `employees` lists everyone to report, so employees without events that
/// week still appear with zero hours. Weekly overtime is measured against
/// five standard days.
pub fn weekly_summary(
    summaries: &[DailySummary],
    employees: &[String],
    day: NaiveDate,
    standard_day: Duration,
) -> Vec<WeeklyRow> {
    let (from, to) = week_bounds(day);
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();

    for d in summaries.iter().filter(|d| d.date >= from && d.date <= to) {
        let t = totals.entry(d.employee.as_str()).or_default();
        t.worked += d.worked;
        t.breaks += d.breaks;
        t.site_visits += d.site_visits;
    }

    employees
        .iter()
        .map(|e| {
            let t = totals.remove(e.as_str()).unwrap_or_default();
            WeeklyRow {
                employee: e.clone(),
                hours_worked: hours(t.worked),
                break_hours: hours(t.breaks),
                site_visit_hours: hours(t.site_visits),
                overtime_hours: hours(overtime(t.worked, standard_day * 5)),
            }
        })
        .collect()
}

/// Hours per employee per calendar month, ordered by employee then month.
pub fn monthly_summary(summaries: &[DailySummary]) -> Vec<MonthlyRow> {
    let mut months: BTreeMap<(&str, i32, u32), Duration> = BTreeMap::new();

    for d in summaries {
        *months
            .entry((d.employee.as_str(), d.date.year(), d.date.month()))
            .or_insert_with(Duration::zero) += d.worked;
    }

    months
        .into_iter()
        .filter_map(|((employee, year, month), worked)| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            Some(MonthlyRow {
                employee: employee.to_string(),
                year,
                month: first.format("%B").to_string(),
                total_hours: hours(worked),
            })
        })
        .collect()
}

/// Total hours and standard-day equivalents per employee; zero-hour employees are omitted.
pub fn payment_summary(summaries: &[DailySummary], standard_day: Duration) -> Vec<PaymentRow> {
    let mut totals: BTreeMap<&str, Duration> = BTreeMap::new();
    for d in summaries {
        *totals
            .entry(d.employee.as_str())
            .or_insert_with(Duration::zero) += d.worked;
    }

    let day_secs = standard_day.num_seconds().max(1) as f64;
    totals
        .into_iter()
        .filter(|(_, worked)| *worked > Duration::zero())
        .map(|(employee, worked)| PaymentRow {
            employee: employee.to_string(),
            total_hours: hours(worked),
            total_days: round2(worked.num_seconds() as f64 / day_secs),
        })
        .collect()
}
