//! Per-day "potential issues" derived from summaries and sessions.

use crate::config::Config;
use crate::models::anomaly::Anomaly;
use crate::models::day_summary::DailySummary;
use crate::models::session::Session;
use crate::utils::formatting::mins2readable;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueThresholds {
    pub late_threshold: NaiveTime,
    pub short_day: Duration,
    pub long_day: Duration,
    pub long_break: Duration,
}

impl IssueThresholds {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            late_threshold: cfg.late_threshold_time(),
            short_day: hours_to_duration(cfg.short_day_hours),
            long_day: hours_to_duration(cfg.long_day_hours),
            long_break: hours_to_duration(cfg.long_break_hours),
        }
    }
}

fn hours_to_duration(h: f64) -> Duration {
    Duration::minutes((h * 60.0).round() as i64)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueKind {
    MissingCheckOut,
    MissingCheckIn,
    UnfinishedInterval,
    IntervalWithoutStart,
    OverlappingCheckIn,
    Overlap,
    UnknownAction,
    LateArrival,
    ShortDay,
    LongDay,
    LongBreak,
    WeekendWork,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::MissingCheckOut => "🔴 Missing check-out",
            IssueKind::MissingCheckIn => "🔴 Missing check-in",
            IssueKind::UnfinishedInterval => "☕ Unfinished break / site visit",
            IssueKind::IntervalWithoutStart => "☕ Break / site visit out of order",
            IssueKind::OverlappingCheckIn => "🔁 Check-in while checked in",
            IssueKind::Overlap => "🔁 Overlapping sessions",
            IssueKind::UnknownAction => "❓ Unknown action",
            IssueKind::LateArrival => "⏰ Late arrival",
            IssueKind::ShortDay => "📉 Short work day",
            IssueKind::LongDay => "⚠️ Excessively long day",
            IssueKind::LongBreak => "☕ Long break",
            IssueKind::WeekendWork => "📅 Weekend work",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Issue {
    pub employee: String,
    pub date: NaiveDate,
    pub kind: IssueKind,
    pub details: String,
}

fn flag_issue(flag: Anomaly, day: &DailySummary, t: &IssueThresholds) -> (IssueKind, String) {
    match flag {
        Anomaly::OpenSession => (IssueKind::MissingCheckOut, "session still open".into()),
        Anomaly::DanglingCheckOut => (
            IssueKind::MissingCheckIn,
            "check-out without a check-in".into(),
        ),
        Anomaly::UnclosedInterval => (
            IssueKind::UnfinishedInterval,
            "interval never ended".into(),
        ),
        Anomaly::OrphanInterval => (
            IssueKind::IntervalWithoutStart,
            "interval event without matching start or session".into(),
        ),
        Anomaly::OverlappingCheckIn => (
            IssueKind::OverlappingCheckIn,
            "previous session closed at the next check-in".into(),
        ),
        Anomaly::Overlap => (IssueKind::Overlap, "sessions overlap".into()),
        Anomaly::UnknownAction => (IssueKind::UnknownAction, "unrecognized action value".into()),
        Anomaly::LateArrival => (
            IssueKind::LateArrival,
            format!(
                "Checked in at {} (after {})",
                day.first_check_in
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default(),
                t.late_threshold.format("%H:%M")
            ),
        ),
    }
}

pub fn find_issues(
    summaries: &[DailySummary],
    sessions: &[Session],
    thresholds: &IssueThresholds,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for day in summaries {
        let mut push = |kind: IssueKind, details: String| {
            issues.push(Issue {
                employee: day.employee.clone(),
                date: day.date,
                kind,
                details,
            })
        };

        for flag in &day.flags {
            let (kind, details) = flag_issue(*flag, day, thresholds);
            push(kind, details);
        }

        let closed = day.sessions > 0 && !day.flags.contains(&Anomaly::OpenSession);
        if closed && day.worked > Duration::zero() && day.worked < thresholds.short_day {
            push(
                IssueKind::ShortDay,
                format!("Only {} worked", mins2readable(day.worked_minutes(), false, false)),
            );
        }
        if closed && day.worked > thresholds.long_day {
            push(
                IssueKind::LongDay,
                format!(
                    "{} worked (more than {})",
                    mins2readable(day.worked_minutes(), false, false),
                    mins2readable(thresholds.long_day.num_minutes(), false, false)
                ),
            );
        }

        let longest_break = sessions
            .iter()
            .filter(|s| s.employee == day.employee && s.date == day.date)
            .flat_map(|s| s.breaks.iter())
            .filter_map(|b| b.end.map(|end| end - b.start))
            .max();
        if let Some(b) = longest_break.filter(|b| *b > thresholds.long_break) {
            push(
                IssueKind::LongBreak,
                format!("Break lasted {}", mins2readable(b.num_minutes(), false, false)),
            );
        }

        if day.sessions > 0 && matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun) {
            push(
                IssueKind::WeekendWork,
                format!("Worked on {}", day.date.format("%A")),
            );
        }
    }

    issues
}
