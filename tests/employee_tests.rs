use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, admin, init_db, punch, rti, setup_test_db};

#[test]
fn test_employee_add_list_remove() {
    let db_path = setup_test_db("employee_crud");
    init_db(&db_path);
    add_employee(&db_path, "Anna", "Anna Rossi", "pw");
    add_employee(&db_path, "bob", "Bob Bianchi", "pw2");

    admin(&db_path, &["employee", "list"])
        .assert()
        .success()
        .stdout(contains("anna"))
        .stdout(contains("Anna Rossi"))
        .stdout(contains("Bob Bianchi"))
        .stdout(contains("pw").not());

    admin(
        &db_path,
        &["employee", "add", "anna", "--name", "Other", "--password", "x"],
    )
    .assert()
    .failure()
    .stderr(contains("Employee 'anna' already exists"));

    admin(&db_path, &["employee", "remove", "bob"])
        .assert()
        .success();

    admin(&db_path, &["employee", "list"])
        .assert()
        .success()
        .stdout(contains("Bob Bianchi").not());

    admin(&db_path, &["employee", "remove", "bob"])
        .assert()
        .failure()
        .stderr(contains("Employee 'bob' not found"));
}

#[test]
fn test_employee_add_rejects_empty_fields() {
    let db_path = setup_test_db("employee_empty");
    init_db(&db_path);

    admin(
        &db_path,
        &["employee", "add", "carla", "--name", "  ", "--password", "pw"],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid employee data"));
}

#[test]
fn test_employee_passwd_changes_login() {
    let db_path = setup_test_db("employee_passwd");
    init_db(&db_path);
    add_employee(&db_path, "anna", "Anna Rossi", "old");

    admin(&db_path, &["employee", "passwd", "anna", "--password", "new"])
        .assert()
        .success();

    punch(&db_path, "anna", "old", "in", "2025-03-03 08:00")
        .assert()
        .failure();
    punch(&db_path, "anna", "new", "in", "2025-03-03 08:00")
        .assert()
        .success();
}

#[test]
fn test_employee_commands_require_admin() {
    let db_path = setup_test_db("employee_admin");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .failure()
        .stderr(contains("Admin password required"));
}
