use serde::Serialize;
use std::fmt;

/// Every action an employee can punch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    CheckIn,
    CheckOut,
    BreakStart,
    BreakEnd,
    SiteVisitStart,
    SiteVisitEnd,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::CheckIn,
        Action::CheckOut,
        Action::BreakStart,
        Action::BreakEnd,
        Action::SiteVisitStart,
        Action::SiteVisitEnd,
    ];

    /// Convert enum → label stored in the events table
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "Check In",
            Action::CheckOut => "Check Out",
            Action::BreakStart => "Break Start",
            Action::BreakEnd => "Break End",
            Action::SiteVisitStart => "Site Visit Start",
            Action::SiteVisitEnd => "Site Visit End",
        }
    }

    /// Short code used on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Action::CheckIn => "in",
            Action::CheckOut => "out",
            Action::BreakStart => "break-start",
            Action::BreakEnd => "break-end",
            Action::SiteVisitStart => "visit-start",
            Action::SiteVisitEnd => "visit-end",
        }
    }

    /// Parse a stored label or a CLI code, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.into_iter().find(|a| {
            a.to_db_str().eq_ignore_ascii_case(needle) || a.code().eq_ignore_ascii_case(needle)
        })
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Action::BreakStart | Action::BreakEnd)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
