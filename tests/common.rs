#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: &str = "admin123";

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `rtimesheet --db <db> --admin-password admin123 <args>`
pub fn admin(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = rti();
    cmd.args(["--db", db_path, "--admin-password", ADMIN]).args(args);
    cmd
}

pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_employee(db_path: &str, username: &str, name: &str, password: &str) {
    admin(
        db_path,
        &["employee", "add", username, "--name", name, "--password", password],
    )
    .assert()
    .success();
}

pub fn punch(db_path: &str, username: &str, password: &str, action: &str, at: &str) -> Command {
    let mut cmd = rti();
    cmd.args([
        "--db", db_path, "punch", username, action, "--password", password, "--at", at,
    ]);
    cmd
}

/// Fresh DB with two employees:
/// - anna: a complete Monday 2025-03-03 (08:00-17:00, 30 min break)
/// - bob: checked in late on Tuesday 2025-03-04 and never checked out
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_employee(db_path, "anna", "Anna Rossi", "anna-pw");
    add_employee(db_path, "bob", "Bob Bianchi", "bob-pw");

    for (action, at) in [
        ("in", "2025-03-03 08:00"),
        ("break-start", "2025-03-03 12:00"),
        ("break-end", "2025-03-03 12:30"),
        ("out", "2025-03-03 17:00"),
    ] {
        punch(db_path, "anna", "anna-pw", action, at)
            .assert()
            .success();
    }

    punch(db_path, "bob", "bob-pw", "in", "2025-03-04 09:05")
        .assert()
        .success();
}
