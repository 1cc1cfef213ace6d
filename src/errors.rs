//! Unified application error type.
//! All modules (db, forms, core, cli, web) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::forms::FormErrors;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("A cafe named '{0}' already exists")]
    DuplicateName(String),

    #[error("No cafe found with id {0}")]
    CafeNotFound(i64),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid form data: {0}")]
    Validation(FormErrors),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Turn a failed INSERT/UPDATE into `DuplicateName` when SQLite rejected it
    /// because of the UNIQUE constraint on `cafe.name`.
    pub fn from_write(err: rusqlite::Error, name: &str) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                AppError::DuplicateName(name.to_string())
            }
            _ => AppError::Db(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CafeNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Html(crate::web::views::error_page(status))).into_response()
    }
}
