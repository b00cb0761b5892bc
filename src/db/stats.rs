use crate::core::ingest::parse_timestamp;
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let rows = load_snapshot(pool)?;
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;

    println!(
        "{}• Total events:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        rows.len(),
        RESET
    );
    println!("{}• Registered employees:{} {}", CYAN, RESET, employees);

    // Timestamps are stored raw, so the range only counts parsable ones.
    let dates: Vec<_> = rows
        .iter()
        .filter_map(|r| parse_timestamp(&r.timestamp))
        .map(|t| t.date())
        .collect();
    let first = dates.iter().min();
    let last = dates.iter().max();

    let fmt = |d: Option<&chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    if let (Some(f), Some(l)) = (first, last) {
        let days = (*l - *f).num_days().max(1);
        let avg = dates.len() as f64 / days as f64;
        println!("{}• Average events/day:{} {:.2}", CYAN, RESET, avg);
    }

    let unreadable = rows.len() - dates.len();
    if unreadable > 0 {
        println!(
            "{}• Rows with unreadable timestamp:{} {}{}{}",
            CYAN, RESET, YELLOW, unreadable, RESET
        );
    }

    println!();
    Ok(())
}
