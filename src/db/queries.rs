use crate::errors::{AppError, AppResult};
use crate::models::cafe::{Cafe, NewCafe};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub fn map_row(row: &Row) -> Result<Cafe> {
    Ok(Cafe {
        id: row.get("id")?,
        name: row.get("name")?,
        map_url: row.get("map_url")?,
        img_url: row.get("img_url")?,
        location: row.get("location")?,
        seats: row.get("seats")?,
        has_toilet: row.get("has_toilet")?,
        has_wifi: row.get("has_wifi")?,
        has_sockets: row.get("has_sockets")?,
        can_take_calls: row.get("can_take_calls")?,
        coffee_price: row.get("coffee_price")?,
    })
}

/// Insert a new cafe and return it with its fresh id.
/// A name collision yields `AppError::DuplicateName`.
pub fn insert_cafe(conn: &Connection, cafe: &NewCafe) -> AppResult<Cafe> {
    conn.execute(
        "INSERT INTO cafe (name, map_url, img_url, location, seats,
                           has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            cafe.name,
            cafe.map_url,
            cafe.img_url,
            cafe.location,
            cafe.seats,
            cafe.has_toilet,
            cafe.has_wifi,
            cafe.has_sockets,
            cafe.can_take_calls,
            cafe.coffee_price,
        ],
    )
    .map_err(|e| AppError::from_write(e, &cafe.name))?;

    Ok(Cafe {
        id: conn.last_insert_rowid(),
        name: cafe.name.clone(),
        map_url: cafe.map_url.clone(),
        img_url: cafe.img_url.clone(),
        location: cafe.location.clone(),
        seats: cafe.seats.clone(),
        has_toilet: cafe.has_toilet,
        has_wifi: cafe.has_wifi,
        has_sockets: cafe.has_sockets,
        can_take_calls: cafe.can_take_calls,
        coffee_price: cafe.coffee_price.clone(),
    })
}

/// `Ok(None)` when no cafe has this id.
pub fn find_cafe(conn: &Connection, id: i64) -> AppResult<Option<Cafe>> {
    let mut stmt = conn.prepare_cached(&format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// All cafes in insertion order.
pub fn load_cafes(conn: &Connection) -> AppResult<Vec<Cafe>> {
    let mut stmt = conn.prepare_cached(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update a cafe (all fields except id) in a single statement.
pub fn update_cafe(conn: &Connection, cafe: &Cafe) -> AppResult<()> {
    let updated = conn
        .execute(
            "UPDATE cafe
             SET name = ?1, map_url = ?2, img_url = ?3,
                 location = ?4, seats = ?5,
                 has_toilet = ?6, has_wifi = ?7,
                 has_sockets = ?8, can_take_calls = ?9,
                 coffee_price = ?10
             WHERE id = ?11",
            params![
                cafe.name,
                cafe.map_url,
                cafe.img_url,
                cafe.location,
                cafe.seats,
                cafe.has_toilet,
                cafe.has_wifi,
                cafe.has_sockets,
                cafe.can_take_calls,
                cafe.coffee_price,
                cafe.id,
            ],
        )
        .map_err(|e| AppError::from_write(e, &cafe.name))?;

    if updated == 0 {
        return Err(AppError::CafeNotFound(cafe.id));
    }
    Ok(())
}

/// Returns `true` when a row was actually removed.
pub fn delete_cafe(conn: &Connection, id: i64) -> AppResult<bool> {
    let removed = conn.execute("DELETE FROM cafe WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn count_cafes(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM cafe", [], |row| row.get(0))?)
}
