use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, insert_cafe, rcafes, setup_test_db, tables};

#[test]
fn test_init_creates_only_the_cafe_table() {
    let db_path = setup_test_db("init_schema");

    rcafes()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Cafes stored: 0"));

    assert_eq!(tables(&db_path), ["cafe"]);
}

#[test]
fn test_init_twice_keeps_existing_rows() {
    let db_path = setup_test_db("init_twice");

    init_db(&db_path);
    insert_cafe(&db_path, "Keeper");

    rcafes()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Cafes stored: 1"));

    assert_eq!(tables(&db_path), ["cafe"]);
}

#[test]
fn test_only_init_and_serve_are_offered() {
    rcafes()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("serve"))
        .stdout(contains("export").not())
        .stdout(contains("backup").not());

    rcafes().arg("list").assert().failure();
}

#[test]
fn test_serve_help_lists_bind_options() {
    rcafes()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(contains("--host"))
        .stdout(contains("--port"));
}
