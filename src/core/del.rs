use crate::db::queries::{delete_cafe, find_cafe};
use crate::errors::AppResult;
use crate::models::cafe::Cafe;
use rusqlite::Connection;

/// "Report closed": permanent delete by id.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Returns the removed cafe, or `None` when the id was unknown.
    pub fn apply(conn: &Connection, id: i64) -> AppResult<Option<Cafe>> {
        let Some(cafe) = find_cafe(conn, id)? else {
            tracing::debug!(id, "delete of unknown cafe ignored");
            return Ok(None);
        };

        if delete_cafe(conn, id)? {
            tracing::info!(id, name = %cafe.name, "cafe reported closed");
        }

        Ok(Some(cafe))
    }
}
