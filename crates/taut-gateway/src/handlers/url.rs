use crate::error::{AppError, Result};
use crate::pages::index_page;
use crate::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tokio::task;

/// Serves the landing page with the submission form.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(index_page(state.base_url()))
}

/// Accepts a multipart form submission and answers with the full short
/// URL as plain text.
///
/// The URL is taken from the first form field, matching what the landing
/// form and the documented curl invocation send.
pub async fn shorten_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String> {
    let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::InvalidRequest(err.to_string()))?
    else {
        return Err(AppError::InvalidRequest(
            "missing url form field".to_string(),
        ));
    };
    let url = field
        .text()
        .await
        .map_err(|err| AppError::InvalidRequest(err.to_string()))?;

    // Engine calls run on the blocking pool: a submission may wait on the
    // store's writer slot.
    let engine = state.engine();
    let code = task::spawn_blocking(move || engine.submit(&url))
        .await
        .map_err(|err| AppError::Internal(err.to_string()))??;

    Ok(code.to_url(state.base_url()))
}

/// Redirects a known short code to its original URL.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let engine = state.engine();
    let url = task::spawn_blocking(move || engine.resolve(&code))
        .await
        .map_err(|err| AppError::Internal(err.to_string()))??;

    let response = (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, url.clone())],
        url,
    )
        .into_response();
    Ok(response)
}
