use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

const CREATE_CAFE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS cafe (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        name           VARCHAR(250) NOT NULL UNIQUE,
        map_url        VARCHAR(500) NOT NULL,
        img_url        VARCHAR(500) NOT NULL,
        location       VARCHAR(250) NOT NULL,
        seats          VARCHAR(250) NOT NULL,
        has_toilet     BOOLEAN NOT NULL,
        has_wifi       BOOLEAN NOT NULL,
        has_sockets    BOOLEAN NOT NULL,
        can_take_calls BOOLEAN NOT NULL,
        coffee_price   VARCHAR(250)
    );
"#;

/// Check if the `cafe` table exists.
pub fn cafe_table_exists(conn: &Connection) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='cafe'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

/// Create the `cafe` table if it is absent. An existing table is left
/// exactly as it is.
///
/// Idempotent: safe to call on every process start, never per request.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    if cafe_table_exists(conn)? {
        tracing::debug!("cafe table already present");
        return Ok(());
    }

    conn.execute_batch(CREATE_CAFE_TABLE)?;
    tracing::info!("created cafe table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();

        init_db(&conn).unwrap();
        conn.execute(
            "INSERT INTO cafe (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls)
             VALUES ('Kept', 'https://a.example.com', 'https://b.example.com', 'X', '1', 0, 0, 0, 0)",
            [],
        )
        .unwrap();
        init_db(&conn).unwrap();

        assert!(cafe_table_exists(&conn).unwrap());
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM cafe", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn cafe_is_the_only_table() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |r| r.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(tables, ["cafe"]);
    }
}
