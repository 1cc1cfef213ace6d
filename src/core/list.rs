use crate::core::format::{FormattedCafe, format_cafe};
use crate::db::queries::load_cafes;
use crate::errors::AppResult;
use rusqlite::Connection;

pub struct ListLogic;

impl ListLogic {
    /// Every stored cafe, formatted for display, in insertion order.
    pub fn formatted(conn: &Connection) -> AppResult<Vec<FormattedCafe>> {
        Ok(load_cafes(conn)?.iter().map(format_cafe).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_cafe;
    use crate::models::cafe::NewCafe;

    fn new_cafe(name: &str, wifi: bool) -> NewCafe {
        NewCafe {
            name: name.into(),
            map_url: "https://maps.example.com/k".into(),
            img_url: "https://img.example.com/k.png".into(),
            location: "Soho".into(),
            seats: "10-20".into(),
            has_toilet: false,
            has_wifi: wifi,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: Some("£3.10".into()),
        }
    }

    #[test]
    fn formatted_keeps_insertion_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        insert_cafe(&conn, &new_cafe("Zed", true)).unwrap();
        insert_cafe(&conn, &new_cafe("Alpha", false)).unwrap();

        let rows = ListLogic::formatted(&conn).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Zed");
        assert_eq!(rows[0].has_wifi, "✔");
        assert_eq!(rows[1].name, "Alpha");
        assert_eq!(rows[1].has_wifi, "✘");
    }
}
