use crate::cli::commands::{open_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::effective_end;
use crate::core::auth::require_admin;
use crate::core::ingest::Discard;
use crate::core::timesheet::TimesheetLogic;
use crate::db::employees::load_credentials;
use crate::errors::{AppError, AppResult};
use crate::models::anomaly::join_flags;
use crate::models::day_summary::DailySummary;
use crate::models::session::Session;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_flags, colorize_in_out, colorize_optional};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::Table;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Report {
        filter,
        password,
        sessions,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let (now, mut filter) = resolve_filter(filter, cfg)?;

        // Employees may read their own records with their own password.
        match (password, &filter.employee) {
            (Some(p), Some(e)) => {
                let creds = load_credentials(&pool)?;
                filter.employee = Some(creds.require(e, p)?.username.clone());
            }
            (Some(_), None) => return Err(AppError::AdminRequired),
            (None, _) => require_admin(cfg, admin_password)?,
        }

        let report = TimesheetLogic::report(&pool, cfg, now, &filter)?;

        if report.summaries.is_empty() {
            info("No records for the selected filters.");
        } else {
            header("📊 Daily summary");
            print_summaries(&report.summaries);
        }

        if *sessions && !report.sessions.is_empty() {
            header("🕒 Sessions");
            print_sessions(&report.sessions, now);
        }

        print_discards(&report.discards);
    }

    Ok(())
}

fn print_summaries(summaries: &[DailySummary]) {
    let mut table = Table::new(vec![
        "Date",
        "Employee",
        "Hours",
        "Breaks",
        "Site visits",
        "Sessions",
        "First in",
        "Last out",
        "Flags",
    ]);

    for d in summaries {
        let row = d.to_row();
        table.add_row(vec![
            row.date,
            row.employee,
            fmt_hours(row.total_hours),
            colorize_optional(&fmt_hours(row.break_hours)),
            colorize_optional(&fmt_hours(row.site_visit_hours)),
            row.sessions.to_string(),
            colorize_in_out(if row.first_in.is_empty() { "--:--" } else { row.first_in.as_str() }, true),
            colorize_in_out(if row.last_out.is_empty() { "--:--" } else { row.last_out.as_str() }, false),
            colorize_flags(&row.flags),
        ]);
    }

    print!("{}", table.render());
}

fn print_sessions(sessions: &[Session], now: NaiveDateTime) {
    let mut table = Table::new(vec![
        "Date", "Employee", "Start", "End", "Breaks", "Site visits", "Flags",
    ]);

    for s in sessions {
        let end = match s.end {
            Some(e) => e.format("%H:%M:%S").to_string(),
            None => format!("({} open)", effective_end(s, now).format("%H:%M:%S")),
        };
        table.add_row(vec![
            s.date.to_string(),
            s.employee.clone(),
            s.start.format("%H:%M:%S").to_string(),
            end,
            s.breaks.len().to_string(),
            s.site_visits.len().to_string(),
            colorize_flags(&join_flags(&s.flags)),
        ]);
    }

    print!("{}", table.render());
}

fn print_discards(discards: &[Discard]) {
    if discards.is_empty() {
        return;
    }
    warning(format!("{} malformed row(s) skipped:", discards.len()));
    for d in discards {
        println!("   row {}: {}", d.row, d.reason);
    }
}
