use crate::db::log::ttlog_soft;
use crate::errors::{AppError, AppResult};
use crate::export::confirm_overwrite;
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally as a zip archive.
    ///
    /// Returns the path actually written, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path.exists() && !force && !confirm_overwrite(&final_path)? {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        if compress {
            compress_into(src, &final_path)?;
        } else {
            fs::copy(src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        if let Ok(conn) = Connection::open(src) {
            ttlog_soft(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Write `src` as the single entry of a deflated zip archive.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid database path: {}", src.display())))?;

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn zipped_backup_contains_database() {
        let dir = env::temp_dir().join("rtimesheet_backup_unit");
        fs::create_dir_all(&dir).unwrap();
        let db = dir.join("db.sqlite");
        fs::write(&db, b"not really sqlite").unwrap();

        let out = BackupLogic::backup(
            db.to_str().unwrap(),
            dir.join("copy.sqlite").to_str().unwrap(),
            true,
            true,
        )
        .unwrap()
        .unwrap();

        assert_eq!(out, dir.join("copy.zip"));
        let archive = zip::ZipArchive::new(fs::File::open(&out).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }
}
