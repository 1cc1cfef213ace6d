use crate::db::queries::{find_cafe, update_cafe};
use crate::errors::{AppError, AppResult};
use crate::forms::{CafeFormData, EditForm};
use crate::models::cafe::Cafe;
use rusqlite::Connection;

/// High-level business logic for the edit flow.
pub struct EditLogic;

impl EditLogic {
    /// Apply a partial edit to cafe `id`.
    ///
    /// Only submitted, non-blank fields are overwritten. All changed columns
    /// are written by a single UPDATE.
    pub fn apply(conn: &Connection, id: i64, data: &CafeFormData) -> AppResult<Cafe> {
        let mut cafe = find_cafe(conn, id)?.ok_or(AppError::CafeNotFound(id))?;

        let changes = EditForm::validate(data).map_err(AppError::Validation)?;
        let changed = changes.apply_to(&mut cafe);

        if changed.is_empty() {
            return Ok(cafe);
        }

        update_cafe(conn, &cafe)?;

        tracing::info!(id, fields = ?changed, "cafe updated");

        Ok(cafe)
    }
}
