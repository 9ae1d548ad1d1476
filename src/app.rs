use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    delete_handler, example_handler, get_by_name_handler, get_default_handler, health_handler,
    post_handler,
};
use crate::routes;
use crate::state::AppState;

/// Assemble every route, the Swagger UI, and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::HIGHSCORE, get(get_default_handler).post(post_handler))
        .route(
            routes::HIGHSCORE_BY_NAME,
            get(get_by_name_handler).delete(delete_handler),
        )
        .route(routes::EXAMPLE, get(example_handler))
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
