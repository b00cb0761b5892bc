//! Daily totals and anomaly flags computed from reconstructed sessions.

use crate::core::reconstruct::Reconstruction;
use crate::models::anomaly::Anomaly;
use crate::models::day_summary::DailySummary;
use crate::models::session::{Interval, Session};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// Externally supplied inputs of the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub late_threshold: NaiveTime,
    /// Substitute end for sessions that are still open.
    pub reference_now: NaiveDateTime,
}

/// Per-session durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTotals {
    pub worked: Duration,
    pub breaks: Duration,
    pub site_visits: Duration,
}

/// End used for duration math; an open session runs until `now`, never before its start.
pub fn effective_end(session: &Session, now: NaiveDateTime) -> NaiveDateTime {
    session.end.unwrap_or(now).max(session.start)
}

fn clamped(interval: &Interval, start: NaiveDateTime, end: NaiveDateTime) -> Duration {
    let from = interval.start.clamp(start, end);
    let to = interval.end.unwrap_or(end).clamp(from, end);
    to - from
}

pub fn session_totals(session: &Session, now: NaiveDateTime) -> SessionTotals {
    let start = session.start;
    let end = effective_end(session, now);

    let breaks = session
        .breaks
        .iter()
        .fold(Duration::zero(), |acc, b| acc + clamped(b, start, end));
    let site_visits = session
        .site_visits
        .iter()
        .fold(Duration::zero(), |acc, v| acc + clamped(v, start, end));

    SessionTotals {
        worked: (end - start - breaks).max(Duration::zero()),
        breaks,
        site_visits,
    }
}

fn overlaps(a: &Session, b: &Session) -> bool {
    match (a.end, b.end) {
        (Some(a_end), Some(b_end)) => a.start < b_end && b.start < a_end,
        _ => false,
    }
}

pub fn aggregate(recon: &Reconstruction, policy: &Policy) -> Vec<DailySummary> {
    let mut days: BTreeMap<(NaiveDate, String), DailySummary> = BTreeMap::new();
    let mut by_day: BTreeMap<(NaiveDate, String), Vec<&Session>> = BTreeMap::new();

    for session in &recon.sessions {
        let key = (session.date, session.employee.clone());
        let totals = session_totals(session, policy.reference_now);

        let day = days
            .entry(key.clone())
            .or_insert_with(|| DailySummary::empty(&session.employee, session.date));

        day.worked += totals.worked;
        day.breaks += totals.breaks;
        day.site_visits += totals.site_visits;
        day.sessions += 1;
        day.first_check_in = Some(match day.first_check_in {
            Some(t) => t.min(session.start),
            None => session.start,
        });
        if let Some(end) = session.end {
            day.last_check_out = Some(day.last_check_out.map_or(end, |t| t.max(end)));
        }
        day.flags.extend(session.flags.iter().copied());

        by_day.entry(key).or_default().push(session);
    }

    for (key, sessions) in &by_day {
        let Some(day) = days.get_mut(key) else {
            continue;
        };

        if day
            .first_check_in
            .is_some_and(|t| t.time() > policy.late_threshold)
        {
            day.flags.insert(Anomaly::LateArrival);
        }

        let overlap = sessions
            .iter()
            .enumerate()
            .any(|(i, a)| sessions[i + 1..].iter().any(|b| overlaps(a, b)));
        if overlap {
            day.flags.insert(Anomaly::Overlap);
        }
    }

    for stray in &recon.stray {
        let date = stray.at.date();
        days.entry((date, stray.employee.clone()))
            .or_insert_with(|| DailySummary::empty(&stray.employee, date))
            .flags
            .insert(stray.kind);
    }

    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reconstruct::reconstruct;
    use crate::models::action::Action;
    use crate::models::anomaly::{AnomalySet, StrayAnomaly};
    use crate::models::event::Event;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2025-03-03 {s}:00"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn hm(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn events(list: &[(Action, &str)]) -> Vec<Event> {
        list.iter()
            .enumerate()
            .map(|(i, (a, t))| Event::new(i, "anna", *a, at(t)))
            .collect()
    }

    fn policy(threshold: &str, now: &str) -> Policy {
        Policy {
            late_threshold: hm(threshold),
            reference_now: at(now),
        }
    }

    #[test]
    fn break_is_subtracted_from_worked_time() {
        let recon = reconstruct(&events(&[
            (Action::CheckIn, "08:00"),
            (Action::BreakStart, "12:00"),
            (Action::BreakEnd, "12:30"),
            (Action::CheckOut, "17:00"),
        ]));

        let out = aggregate(&recon, &policy("08:30", "23:00"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].worked, Duration::minutes(8 * 60 + 30));
        assert_eq!(out[0].breaks, Duration::minutes(30));
        assert!(out[0].flags.is_empty());
    }

    #[test]
    fn open_late_session_is_provisional_until_now() {
        let recon = reconstruct(&events(&[(Action::CheckIn, "09:05")]));

        let out = aggregate(&recon, &policy("09:00", "17:00"));
        assert_eq!(out[0].worked, Duration::minutes(7 * 60 + 55));
        let expected: AnomalySet = [Anomaly::OpenSession, Anomaly::LateArrival].into();
        assert_eq!(out[0].flags, expected);
        assert_eq!(out[0].last_check_out, None);
    }

    #[test]
    fn arrival_exactly_at_threshold_is_not_late() {
        let recon = reconstruct(&events(&[
            (Action::CheckIn, "09:00"),
            (Action::CheckOut, "17:00"),
        ]));

        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert_eq!(out[0].worked, Duration::hours(8));
        assert!(out[0].flags.is_empty());
    }

    #[test]
    fn site_visits_count_as_worked_time() {
        let recon = reconstruct(&events(&[
            (Action::CheckIn, "08:00"),
            (Action::SiteVisitStart, "10:00"),
            (Action::SiteVisitEnd, "12:00"),
            (Action::CheckOut, "16:00"),
        ]));

        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert_eq!(out[0].worked, Duration::hours(8));
        assert_eq!(out[0].site_visits, Duration::hours(2));
    }

    #[test]
    fn forced_close_sums_both_sessions() {
        let recon = reconstruct(&events(&[
            (Action::CheckIn, "08:00"),
            (Action::CheckIn, "08:30"),
            (Action::CheckOut, "09:00"),
        ]));

        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert_eq!(out[0].worked, Duration::hours(1));
        assert_eq!(out[0].sessions, 2);
        assert!(out[0].flags.contains(&Anomaly::OverlappingCheckIn));
        assert!(!out[0].flags.contains(&Anomaly::Overlap));
    }

    #[test]
    fn unclosed_break_runs_until_checkout() {
        let recon = reconstruct(&events(&[
            (Action::CheckIn, "08:00"),
            (Action::BreakStart, "16:00"),
            (Action::CheckOut, "17:00"),
        ]));

        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert_eq!(out[0].worked, Duration::hours(8));
        assert!(out[0].flags.contains(&Anomaly::UnclosedInterval));
    }

    #[test]
    fn overlapping_closed_sessions_are_flagged() {
        let mut a = Session::open("anna", at("08:00"));
        a.end = Some(at("12:00"));
        let mut b = Session::open("anna", at("11:00"));
        b.end = Some(at("13:00"));
        let mut open = Session::open("anna", at("11:30"));
        open.flags.insert(Anomaly::OpenSession);

        let recon = Reconstruction {
            sessions: vec![a.clone(), b],
            stray: vec![],
        };
        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert!(out[0].flags.contains(&Anomaly::Overlap));

        let recon = Reconstruction {
            sessions: vec![a, open],
            stray: vec![],
        };
        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert!(!out[0].flags.contains(&Anomaly::Overlap));
    }

    #[test]
    fn stray_only_day_produces_empty_flagged_summary() {
        let recon = Reconstruction {
            sessions: vec![],
            stray: vec![StrayAnomaly::new(
                "anna",
                at("17:00"),
                Anomaly::DanglingCheckOut,
                "",
            )],
        };

        let out = aggregate(&recon, &policy("09:00", "23:00"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].worked, Duration::zero());
        assert_eq!(out[0].sessions, 0);
        assert!(out[0].flags.contains(&Anomaly::DanglingCheckOut));
    }

    #[test]
    fn days_are_split_by_checkin_date() {
        let mut list = events(&[(Action::CheckIn, "08:00"), (Action::CheckOut, "12:00")]);
        let next_day = at("09:00") + Duration::days(1);
        list.push(Event::new(2, "anna", Action::CheckIn, next_day));
        list.push(Event::new(3, "anna", Action::CheckOut, next_day + Duration::hours(2)));

        let out = aggregate(&reconstruct(&list), &policy("09:00", "23:00"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].worked, Duration::hours(4));
        assert_eq!(out[1].worked, Duration::hours(2));
        assert!(out[0].date < out[1].date);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let list = events(&[
            (Action::CheckOut, "07:00"),
            (Action::CheckIn, "08:10"),
            (Action::BreakStart, "12:00"),
            (Action::CheckIn, "13:00"),
        ]);
        let p = policy("08:00", "18:00");

        let first = aggregate(&reconstruct(&list), &p);
        let second = aggregate(&reconstruct(&list), &p);
        assert_eq!(first, second);
        assert_eq!(
            format!("{:?}", first.iter().map(|d| d.to_row()).collect::<Vec<_>>()),
            format!("{:?}", second.iter().map(|d| d.to_row()).collect::<Vec<_>>())
        );
    }
}
