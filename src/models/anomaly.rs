use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Non-fatal data-quality or policy markers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anomaly {
    OpenSession,
    DanglingCheckOut,
    OverlappingCheckIn,
    UnclosedInterval,
    OrphanInterval,
    LateArrival,
    Overlap,
    UnknownAction,
}

impl Anomaly {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anomaly::OpenSession => "OpenSession",
            Anomaly::DanglingCheckOut => "DanglingCheckOut",
            Anomaly::OverlappingCheckIn => "OverlappingCheckIn",
            Anomaly::UnclosedInterval => "UnclosedInterval",
            Anomaly::OrphanInterval => "OrphanInterval",
            Anomaly::LateArrival => "LateArrival",
            Anomaly::Overlap => "Overlap",
            Anomaly::UnknownAction => "UnknownAction",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of flags; ordering keeps rendered output stable.
pub type AnomalySet = BTreeSet<Anomaly>;

/// Comma-joined rendering used by tables and flat exports.
pub fn join_flags(flags: &AnomalySet) -> String {
    flags
        .iter()
        .map(Anomaly::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// An anomaly that belongs to an employee and an instant but to no session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StrayAnomaly {
    pub employee: String,
    pub at: NaiveDateTime,
    pub kind: Anomaly,
    pub detail: String,
}

impl StrayAnomaly {
    pub fn new(employee: &str, at: NaiveDateTime, kind: Anomaly, detail: impl Into<String>) -> Self {
        Self {
            employee: employee.to_string(),
            at,
            kind,
            detail: detail.into(),
        }
    }
}
