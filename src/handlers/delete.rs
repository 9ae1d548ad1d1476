use crate::routes;
use axum::{extract::Path, Json};

/// DELETE /highscore/highscore/{name} handler
///
/// Placeholder: nothing is removed and the store is never called.
#[utoipa::path(
    delete,
    path = routes::HIGHSCORE_BY_NAME,
    params(
        ("name" = String, Path, description = "Key of the highscore record")
    ),
    responses(
        (status = 200, description = "Always an empty string", body = String)
    ),
    tag = "highscore"
)]
pub async fn delete_handler(Path(name): Path<String>) -> Json<&'static str> {
    tracing::debug!("Ignoring delete for highscore {:?}", name);
    Json("")
}
