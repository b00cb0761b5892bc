use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_employee, admin, init_db, punch, setup_test_db, temp_out};

const SHEET: &str = "Employee,Action,Timestamp
carla,Check In,2025-03-05 08:00:00
carla,,2025-03-05 10:00:00
carla,Lunch,2025-03-05 12:00:00
carla,Check Out,not a time
carla,Check Out,2025-03-05 16:00:00
";

#[test]
fn test_import_keeps_bad_rows_and_reports_them() {
    let db_path = setup_test_db("import_sheet");
    init_db(&db_path);

    let csv_path = temp_out("import_sheet", "csv");
    fs::write(&csv_path, SHEET).unwrap();

    admin(&db_path, &["import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 5 rows"))
        .stdout(contains("2 imported row(s) are malformed"))
        .stdout(contains("1 imported row(s) carry an unknown action"));

    admin(
        &db_path,
        &["report", "--range", "all", "--now", "2025-03-05 18:00"],
    )
    .assert()
    .success()
    .stdout(contains("carla"))
    .stdout(contains("8.00"))
    .stdout(contains("UnknownAction"))
    .stdout(contains("2 malformed row(s) skipped"))
    .stdout(contains("row 1: missing action"))
    .stdout(contains("row 3: unparsable timestamp 'not a time'"));
}

#[test]
fn test_import_requires_admin() {
    let db_path = setup_test_db("import_no_admin");
    init_db(&db_path);

    let csv_path = temp_out("import_no_admin", "csv");
    fs::write(&csv_path, SHEET).unwrap();

    common::rti()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .failure()
        .stderr(contains("Admin password required"));
}

#[test]
fn test_imported_display_names_match_the_username() {
    let db_path = setup_test_db("import_case");
    init_db(&db_path);
    add_employee(&db_path, "anna", "Anna Rossi", "anna-pw");

    let csv_path = temp_out("import_case", "csv");
    fs::write(
        &csv_path,
        "Employee,Action,Timestamp\n Anna ,Check In,2025-03-05 08:00:00\n",
    )
    .unwrap();
    admin(&db_path, &["import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 1 rows"));

    // the imported check-in counts as today's last action for the punch
    punch(&db_path, "anna", "anna-pw", "out", "2025-03-05 16:00")
        .assert()
        .success();

    common::rti()
        .args([
            "--db",
            &db_path,
            "report",
            "--employee",
            "anna",
            "--password",
            "anna-pw",
            "--range",
            "all",
            "--now",
            "2025-03-05 18:00",
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-05"))
        .stdout(contains("8.00"))
        .stdout(contains("DanglingCheckOut").not())
        .stdout(contains("OpenSession").not());
}
