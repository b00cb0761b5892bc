use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::ingest::ingest;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::append_raw;
use crate::errors::AppResult;
use crate::models::raw_row::RawRow;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Read a sheet export with `Employee,Action,Timestamp` columns.
/// Values are kept verbatim; validation happens when reports are built.
pub fn read_snapshot_csv(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<RawRow>().enumerate() {
        let mut row = rec?;
        row.index = i;
        rows.push(row);
    }
    Ok(rows)
}

fn append_all(pool: &DbPool, rows: &[RawRow]) -> AppResult<()> {
    let tx = pool.conn.unchecked_transaction()?;
    for row in rows {
        append_raw(&tx, row, "import")?;
    }
    tx.commit()?;
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config, admin_password: Option<&str>) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        require_admin(cfg, admin_password)?;
        let pool = open_db(cfg)?;

        let rows = read_snapshot_csv(Path::new(file))?;
        append_all(&pool, &rows)?;

        ttlog(
            &pool.conn,
            "import",
            file,
            &format!("Imported {} rows", rows.len()),
        )?;
        success(format!("Imported {} rows from {}", rows.len(), file));

        let snapshot = ingest(&rows);
        if !snapshot.discards.is_empty() {
            warning(format!(
                "{} imported row(s) are malformed and will be skipped by reports",
                snapshot.discards.len()
            ));
        }
        if !snapshot.unknown.is_empty() {
            warning(format!(
                "{} imported row(s) carry an unknown action",
                snapshot.unknown.len()
            ));
        }
    }

    Ok(())
}
