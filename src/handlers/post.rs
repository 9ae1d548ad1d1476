use crate::error::{ApiError, ErrorResponse};
use crate::models::{DEFAULT_KEY, HighscoreRecord, record_from_body};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};

/// POST /highscore/highscore handler - Store the request body under the default key
///
/// The body is never rejected; see [`record_from_body`] for how it is decoded.
/// Responds with whatever the store returns for the write.
#[utoipa::path(
    post,
    path = routes::HIGHSCORE,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Record as stored", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "highscore"
)]
pub async fn post_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HighscoreRecord>, ApiError> {
    let record = record_from_body(&body);

    let stored = state.store.write(DEFAULT_KEY, record).await?;

    tracing::info!(key = DEFAULT_KEY, value = %stored, "Stored highscore");
    Ok(Json(stored))
}
