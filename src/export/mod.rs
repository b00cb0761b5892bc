mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod range;
mod xlsx;

pub use logic::{ExportLogic, ExportRequest};
pub(crate) use fs_utils::confirm_overwrite;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which table to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// One row per employee and day
    Daily,
    /// Total hours and standard days per employee
    Payment,
    /// Hours per employee and month
    Monthly,
    /// Raw store rows
    Events,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Daily => "daily",
            ExportKind::Payment => "payment",
            ExportKind::Monthly => "monthly",
            ExportKind::Events => "events",
        }
    }
}
