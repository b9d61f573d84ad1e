//! HTTP API route definitions.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    get_metrics, get_server_status, get_status, list_patients, method_not_allowed, not_found,
    root, AppState,
};

/// Dashboard dev-server origins allowed to call the API.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// CORS policy for the local dashboard dev servers.
///
/// Credentials are allowed, so methods are listed and request headers are
/// mirrored rather than wildcarded.
pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::DELETE,
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Dashboard endpoints
        .route("/api/patients", get(list_patients))
        .route("/api/metrics/:patient_id", get(get_metrics))
        .route("/api/status", get(get_status))
        .route("/api/server", get(get_server_status))
        // Docs
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
