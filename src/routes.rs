use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let router = Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        .merge(crate::api::routes::user_routes::user_routes())
        .merge(crate::api::routes::post_routes::post_routes())

        // Fallback handler for 404
        .fallback(handler_404);

    add_tracing(router).layer(cors_layer())
}

/// Request/response logging at INFO, with latency.
fn add_tracing(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().path().to_string();
                tracing::span!(Level::INFO, "http", %method, %uri)
            })
            .on_response(|res: &http::Response<_>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = %res.status(),
                    elapsed_ms = latency.as_millis() as u64,
                    "response"
                );
            }),
    )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
