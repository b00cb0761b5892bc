use predicates::str::contains;
use std::path::Path;

mod common;
use common::{admin, init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("2025-03-03"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Schema up to date"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("employee_add"))
        .stdout(contains("Check In at 2025-03-03 08:00:00"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);
    let dest = temp_out("backup_zip", "sqlite");
    let zip = temp_out("backup_zip", "zip");

    admin(&db_path, &["backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_clear_with_backup() {
    let db_path = setup_test_db("clear_events");
    init_db_with_data(&db_path);
    let dest = temp_out("clear_events", "sqlite");

    admin(&db_path, &["clear", "--yes", "--backup", &dest])
        .assert()
        .success()
        .stdout(contains("Deleted 5 events."));
    assert!(Path::new(&dest).exists());

    admin(&db_path, &["report", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("No records"));

    // Credentials survive a clear.
    admin(&db_path, &["employee", "list"])
        .assert()
        .success()
        .stdout(contains("anna"));
}

#[test]
fn test_clear_cancelled_without_confirmation() {
    let db_path = setup_test_db("clear_cancel");
    init_db_with_data(&db_path);

    admin(&db_path, &["clear"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("Clear cancelled"));

    admin(&db_path, &["report", "--range", "all", "--now", "2025-03-04 17:00"])
        .assert()
        .success()
        .stdout(contains("8.50"));
}
