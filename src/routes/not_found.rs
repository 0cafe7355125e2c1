//! Fallback for unknown paths, including misses under `/static`.

use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension,
};
use tracing::instrument;

use crate::config::CACHE_CONTROL_ERROR;
use crate::content::SITE_TITLE;
use crate::error::{AppError, ResultExt};
use crate::middleware::RequestId;
use crate::state::AppState;

#[instrument(name = "not_found", skip(state, request_id))]
pub async fn not_found(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    let mut context = tera::Context::new();
    context.insert("site_title", SITE_TITLE);

    match state
        .tera
        .render("not_found.html", &context)
        .map_err(AppError::from)
        .with_request_id(&request_id)
    {
        Ok(html) => (
            StatusCode::NOT_FOUND,
            [(CACHE_CONTROL, CACHE_CONTROL_ERROR)],
            Html(html),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
