use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{csrf as csrf_handlers, health, verify},
    infra::{app_state::AppState, middleware::csrf},
};

/// Assemble the application router.
///
/// Only the verify route mutates anything on the client's behalf, so only
/// it sits behind the CSRF check. CORS is permissive: this is a demo
/// endpoint with no cross-origin policy of its own.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/csrf", get(csrf_handlers::issue_token))
        .route(
            "/api/verify",
            post(verify::verify_ticket)
                .layer(middleware::from_fn(csrf::require_csrf)),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
