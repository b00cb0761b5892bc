use crate::config::Config;
use crate::core::ingest::parse_timestamp;
use crate::core::period::{monthly_summary, payment_summary};
use crate::core::report::ReportFilter;
use crate::core::timesheet::TimesheetLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EventExport, ExportRow};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportKind};
use crate::models::employee::Employee;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// What to export and where.
pub struct ExportRequest<'a> {
    pub kind: ExportKind,
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub employee: Option<String>,
    pub now: NaiveDateTime,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the requested table; returns the number of exported rows.
    pub fn export(pool: &DbPool, cfg: &Config, req: &ExportRequest) -> AppResult<usize> {
        let path = Path::new(req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        ensure_writable(path, req.force)?;

        let filter = ReportFilter {
            employee: req.employee.clone(),
            range: req.range,
        };

        let written = match req.kind {
            ExportKind::Events => {
                let rows: Vec<EventExport> = load_snapshot(pool)?
                    .iter()
                    .filter(|r| {
                        filter
                            .employee
                            .as_deref()
                            .is_none_or(|e| e == Employee::normalize_username(&r.employee))
                    })
                    .filter(|r| {
                        req.range.is_none_or(|(from, to)| {
                            parse_timestamp(&r.timestamp)
                                .is_some_and(|t| t.date() >= from && t.date() <= to)
                        })
                    })
                    .map(EventExport::from)
                    .collect();
                write(&rows, req.format, "Events", path)?
            }
            ExportKind::Daily => {
                let report = TimesheetLogic::report(pool, cfg, req.now, &filter)?;
                let rows: Vec<_> = report.summaries.iter().map(|d| d.to_row()).collect();
                write(&rows, req.format, "Daily", path)?
            }
            ExportKind::Payment => {
                let report = TimesheetLogic::report(pool, cfg, req.now, &filter)?;
                let rows = payment_summary(&report.summaries, cfg.standard_day());
                write(&rows, req.format, "Payment", path)?
            }
            ExportKind::Monthly => {
                let report = TimesheetLogic::report(pool, cfg, req.now, &filter)?;
                let rows = monthly_summary(&report.summaries);
                write(&rows, req.format, "Monthly", path)?
            }
        };

        if written == 0 {
            warning("No rows found for the selected filters; wrote headers only.");
        }

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} {} rows as {}",
                written,
                req.kind.as_str(),
                req.format.as_str()
            ),
        );

        Ok(written)
    }
}

fn write<T: ExportRow>(rows: &[T], format: ExportFormat, sheet: &str, path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, sheet, path)?,
    }
    Ok(rows.len())
}
