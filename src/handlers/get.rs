use crate::error::{ApiError, ErrorResponse};
use crate::models::{DEFAULT_KEY, HighscoreRecord};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, Json};

/// GET /highscore/highscore handler - Read the record under the default key
///
/// Responds with the stored value, or `null` when nothing has been stored.
#[utoipa::path(
    get,
    path = routes::HIGHSCORE,
    responses(
        (status = 200, description = "Stored record, or null", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "highscore"
)]
pub async fn get_default_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<HighscoreRecord>>, ApiError> {
    read_record(&state, DEFAULT_KEY).await.map(Json)
}

/// GET /highscore/highscore/{name} handler - Read the record under `name`
#[utoipa::path(
    get,
    path = routes::HIGHSCORE_BY_NAME,
    params(
        ("name" = String, Path, description = "Key of the highscore record")
    ),
    responses(
        (status = 200, description = "Stored record, or null", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "highscore"
)]
pub async fn get_by_name_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Option<HighscoreRecord>>, ApiError> {
    read_record(&state, &name).await.map(Json)
}

async fn read_record(state: &AppState, key: &str) -> Result<Option<HighscoreRecord>, ApiError> {
    let record = state.store.read(key).await?;
    tracing::debug!("Read highscore {:?} (found: {})", key, record.is_some());
    Ok(record)
}
