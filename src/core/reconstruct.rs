//! Rebuild work sessions from one employee's punch events.
//!
//! Events are sorted by (timestamp, insertion order) and scanned once with a
//! single "current open session". Nothing here fails: every inconsistency is
//! recorded either as a session flag or as a stray anomaly.

use crate::models::action::Action;
use crate::models::anomaly::{Anomaly, StrayAnomaly};
use crate::models::event::Event;
use crate::models::session::{Interval, Session};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub sessions: Vec<Session>,
    pub stray: Vec<StrayAnomaly>,
}

pub fn reconstruct(events: &[Event]) -> Reconstruction {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.timestamp, e.seq));

    let mut out = Reconstruction::default();
    let mut current: Option<Session> = None;

    for ev in &sorted {
        match ev.action {
            Action::CheckIn => {
                if let Some(mut prev) = current.take() {
                    // policy: force-close the previous session at the new check-in
                    prev.flags.insert(Anomaly::OverlappingCheckIn);
                    close_session(&mut prev, ev);
                    out.sessions.push(prev);
                }
                current = Some(Session::open(&ev.employee, ev.timestamp));
            }

            Action::CheckOut => match current.take() {
                Some(mut s) => {
                    close_session(&mut s, ev);
                    out.sessions.push(s);
                }
                None => out.stray.push(StrayAnomaly::new(
                    &ev.employee,
                    ev.timestamp,
                    Anomaly::DanglingCheckOut,
                    format!("check-out at {} without an open check-in", ev.time_str()),
                )),
            },

            Action::BreakStart | Action::SiteVisitStart => {
                let Some(session) = current.as_mut() else {
                    out.stray.push(orphan(ev, "outside a work session"));
                    continue;
                };

                let list = intervals_mut(session, ev.action);
                if list.last().is_some_and(Interval::is_open) {
                    out.stray.push(orphan(ev, "while the previous one is still open"));
                } else {
                    list.push(Interval::open(ev.timestamp));
                }
            }

            Action::BreakEnd | Action::SiteVisitEnd => {
                let open = current
                    .as_mut()
                    .and_then(|s| intervals_mut(s, ev.action).last_mut())
                    .filter(|i| i.is_open());

                match open {
                    Some(interval) => interval.end = Some(ev.timestamp),
                    None => out.stray.push(orphan(ev, "without a matching start")),
                }
            }
        }
    }

    if let Some(mut s) = current {
        s.flags.insert(Anomaly::OpenSession);
        if has_open_interval(&s) {
            s.flags.insert(Anomaly::UnclosedInterval);
        }
        out.sessions.push(s);
    }

    out
}

fn close_session(session: &mut Session, ev: &Event) {
    session.end = Some(ev.timestamp);
    if has_open_interval(session) {
        session.flags.insert(Anomaly::UnclosedInterval);
    }
}

fn has_open_interval(session: &Session) -> bool {
    session
        .breaks
        .iter()
        .chain(session.site_visits.iter())
        .any(Interval::is_open)
}

fn intervals_mut(session: &mut Session, action: Action) -> &mut Vec<Interval> {
    if action.is_break() {
        &mut session.breaks
    } else {
        &mut session.site_visits
    }
}

fn orphan(ev: &Event, why: &str) -> StrayAnomaly {
    StrayAnomaly::new(
        &ev.employee,
        ev.timestamp,
        Anomaly::OrphanInterval,
        format!("{} at {} {}", ev.action, ev.time_str(), why),
    )
}
