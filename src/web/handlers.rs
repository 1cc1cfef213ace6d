use super::state::AppState;
use super::views;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::core::format::format_cafe;
use crate::core::list::ListLogic;
use crate::db::queries::find_cafe;
use crate::errors::{AppError, AppResult};
use crate::forms::{CafeFormData, FormErrors};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

const LISTING: &str = "/cafes";

fn to_listing() -> Response {
    Redirect::to(LISTING).into_response()
}

/// Path ids that are not integers behave like unknown ids.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

pub async fn home_handler() -> Html<String> {
    Html(views::index_page())
}

pub async fn add_form_handler() -> Html<String> {
    Html(views::add_page(
        &CafeFormData::default(),
        &FormErrors::default(),
    ))
}

pub async fn add_submit_handler(
    State(state): State<Arc<AppState>>,
    Form(data): Form<CafeFormData>,
) -> AppResult<Response> {
    let result = {
        let pool = state.pool.lock();
        AddLogic::apply(&pool.conn, &data)
    };

    match result {
        Ok(_) => Ok(to_listing()),
        Err(AppError::Validation(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::add_page(&data, &errors)),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn cafes_handler(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let cafes = {
        let pool = state.pool.lock();
        ListLogic::formatted(&pool.conn)?
    };

    Ok(Html(views::cafes_page(&cafes)))
}

pub async fn edit_form_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(to_listing());
    };

    let cafe = {
        let pool = state.pool.lock();
        find_cafe(&pool.conn, id)?
    };

    let Some(cafe) = cafe else {
        tracing::debug!(id, "edit requested for unknown cafe");
        return Ok(to_listing());
    };

    Ok(Html(views::edit_page(
        id,
        &format_cafe(&cafe),
        &CafeFormData::from_cafe(&cafe),
        &FormErrors::default(),
    ))
    .into_response())
}

pub async fn edit_submit_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Form(data): Form<CafeFormData>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(to_listing());
    };

    let pool = state.pool.lock();

    match EditLogic::apply(&pool.conn, id, &data) {
        Ok(_) | Err(AppError::CafeNotFound(_)) => Ok(to_listing()),
        Err(AppError::Validation(errors)) => {
            let Some(cafe) = find_cafe(&pool.conn, id)? else {
                return Ok(to_listing());
            };
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::edit_page(id, &format_cafe(&cafe), &data, &errors)),
            )
                .into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn report_closed_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    if let Some(id) = parse_id(&raw_id) {
        let pool = state.pool.lock();
        DeleteLogic::apply(&pool.conn, id)?;
    }

    Ok(to_listing())
}
