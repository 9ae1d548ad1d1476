use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "highscore-kv API",
        version = "1.0.0",
        description = "Highscore routes over a pluggable JSON key-value store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_default_handler,
        handlers::get::get_by_name_handler,
        handlers::post::post_handler,
        handlers::delete::delete_handler,
        handlers::example::example_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "highscore", description = "Highscore record operations")
    )
)]
pub struct ApiDoc;
