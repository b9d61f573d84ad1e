//! HTTP API module for the dashboard endpoints and their OpenAPI document.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::create_router;
