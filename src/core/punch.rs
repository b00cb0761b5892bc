use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::Event;
use chrono::NaiveDate;

/// Last action punched by `employee` on `day`, in (timestamp, insertion) order.
pub fn last_action_on(events: &[Event], employee: &str, day: NaiveDate) -> Option<Action> {
    events
        .iter()
        .filter(|e| e.employee == employee && e.date() == day)
        .max_by_key(|e| (e.timestamp, e.seq))
        .map(|e| e.action)
}

/// Check whether `next` may follow today's last action.
pub fn check_transition(last: Option<Action>, next: Action) -> AppResult<()> {
    use Action::*;

    let working = matches!(last, Some(CheckIn | BreakEnd | SiteVisitEnd));

    let rejection = match next {
        CheckIn => match last {
            None | Some(CheckOut) => None,
            Some(_) => Some("You are already checked in! Please check out first."),
        },
        CheckOut => match last {
            _ if working => None,
            None => Some("You have not checked in today!"),
            Some(CheckOut) => Some("You have already checked out!"),
            Some(BreakStart) => Some("Please end your break before checking out!"),
            Some(_) => Some("Please end your site visit before checking out!"),
        },
        BreakStart | SiteVisitStart => match last {
            _ if working => None,
            Some(BreakStart) if next == BreakStart => Some("Already on break!"),
            Some(BreakStart) => Some("End break first!"),
            Some(SiteVisitStart) if next == SiteVisitStart => Some("Already on site visit!"),
            Some(SiteVisitStart) => Some("End site visit first!"),
            _ => Some("Please check in first!"),
        },
        BreakEnd => (last != Some(BreakStart)).then_some("Not currently on break!"),
        SiteVisitEnd => (last != Some(SiteVisitStart)).then_some("Not currently on site visit!"),
    };

    match rejection {
        Some(msg) => Err(AppError::ActionRejected(msg.to_string())),
        None => Ok(()),
    }
}

/// Human-readable state implied by today's last action.
pub fn state_label(last: Option<Action>) -> &'static str {
    match last {
        None => "Not checked in",
        Some(Action::CheckIn | Action::BreakEnd | Action::SiteVisitEnd) => "Working",
        Some(Action::BreakStart) => "On break",
        Some(Action::SiteVisitStart) => "On site visit",
        Some(Action::CheckOut) => "Checked out",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::Action::*;

    fn allowed(last: Option<Action>, next: Action) -> bool {
        check_transition(last, next).is_ok()
    }

    #[test]
    fn check_in_only_when_not_working() {
        assert!(allowed(None, CheckIn));
        assert!(allowed(Some(CheckOut), CheckIn));
        assert!(!allowed(Some(CheckIn), CheckIn));
        assert!(!allowed(Some(BreakStart), CheckIn));
    }

    #[test]
    fn check_out_requires_no_open_interval() {
        assert!(allowed(Some(CheckIn), CheckOut));
        assert!(allowed(Some(BreakEnd), CheckOut));
        assert!(allowed(Some(SiteVisitEnd), CheckOut));

        let err = check_transition(Some(BreakStart), CheckOut).unwrap_err();
        assert_eq!(err.to_string(), "Please end your break before checking out!");
        let err = check_transition(None, CheckOut).unwrap_err();
        assert_eq!(err.to_string(), "You have not checked in today!");
        assert!(!allowed(Some(CheckOut), CheckOut));
    }

    #[test]
    fn intervals_nest_inside_work() {
        assert!(allowed(Some(CheckIn), BreakStart));
        assert!(allowed(Some(SiteVisitEnd), BreakStart));
        assert!(!allowed(Some(SiteVisitStart), BreakStart));
        assert!(!allowed(None, SiteVisitStart));
        assert!(allowed(Some(BreakStart), BreakEnd));
        assert!(!allowed(Some(CheckIn), BreakEnd));
        assert!(allowed(Some(SiteVisitStart), SiteVisitEnd));
        assert!(!allowed(Some(BreakStart), SiteVisitEnd));
    }

    #[test]
    fn state_follows_last_action() {
        assert_eq!(state_label(None), "Not checked in");
        assert_eq!(state_label(Some(SiteVisitEnd)), "Working");
        assert_eq!(state_label(Some(BreakStart)), "On break");
        assert_eq!(state_label(Some(CheckOut)), "Checked out");
    }
}
