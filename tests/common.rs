#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcafes() -> Command {
    cargo_bin_cmd!("rcafes")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcafes.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// `init` in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rcafes()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Insert a row straight into the `cafe` table
pub fn insert_cafe(db_path: &str, name: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO cafe (name, map_url, img_url, location, seats,
                           has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
         VALUES (?1, 'https://goo.gl/maps/abc123', 'https://example.com/cafe.jpg',
                 'Shoreditch', '20-30', 1, 1, 0, 0, '£2.50')",
        [name],
    )
    .expect("insert cafe");
}

/// Names of the user tables in the database
pub fn tables(db_path: &str) -> Vec<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .expect("prepare");
    stmt.query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows")
}
