use crate::error::{ApiError, ErrorResponse};
use crate::models::{EXAMPLE_KEY, HighscoreRecord, example_record};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /highscore/example handler - Write the fixed example record
#[utoipa::path(
    get,
    path = routes::EXAMPLE,
    responses(
        (status = 200, description = "Example record as stored", body = serde_json::Value),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "highscore"
)]
pub async fn example_handler(
    State(state): State<AppState>,
) -> Result<Json<HighscoreRecord>, ApiError> {
    let stored = state.store.write(EXAMPLE_KEY, example_record()).await?;

    tracing::info!(key = EXAMPLE_KEY, value = %stored, "Stored example record");
    Ok(Json(stored))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{body_json, request, test_app};
    use crate::store::recording::{RecordingStore, StoreCall};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_example_writes_fixed_record() {
        let (app, store) = test_app(RecordingStore::new());

        let response = app
            .oneshot(request("GET", "/highscore/example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"text": "this is some random data"})
        );
        assert_eq!(
            store.calls(),
            vec![StoreCall::Write(
                "test key".to_string(),
                json!({"text": "this is some random data"})
            )]
        );
    }

    #[tokio::test]
    async fn test_example_returns_store_reply() {
        let (app, _store) = test_app(RecordingStore::new().with_write_reply(json!("OK")));

        let response = app
            .oneshot(request("GET", "/highscore/example"))
            .await
            .unwrap();

        assert_eq!(body_json(response).await, json!("OK"));
    }

    #[tokio::test]
    async fn test_example_store_failure_is_internal_error() {
        let (app, _store) = test_app(RecordingStore::failing());

        let response = app
            .oneshot(request("GET", "/highscore/example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
