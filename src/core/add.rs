use crate::db::queries::insert_cafe;
use crate::errors::{AppError, AppResult};
use crate::forms::{CafeForm, CafeFormData};
use crate::models::cafe::Cafe;
use rusqlite::Connection;

/// High-level business logic for adding a cafe.
pub struct AddLogic;

impl AddLogic {
    /// Validate a creation submission and store it.
    ///
    /// Nothing is written when validation fails. A duplicate name surfaces
    /// as `AppError::DuplicateName`.
    pub fn apply(conn: &Connection, data: &CafeFormData) -> AppResult<Cafe> {
        let new_cafe = CafeForm::validate(data).map_err(AppError::Validation)?;

        let cafe = insert_cafe(conn, &new_cafe)?;

        tracing::info!(id = cafe.id, name = %cafe.name, "cafe added");

        Ok(cafe)
    }
}
