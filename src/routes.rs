use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::controller::district::DistrictController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // District subrouter lives under /api
    let api = Router::new()
        .nest("/districts", crate::api::routes::district_routes::district_routes());

    Router::new()
        // Dashboard page
        .route("/", get(index))
        // Health check
        .route("/health", get(health_check))
        // Fetch endpoint used by the dashboard page script; the script posts
        // a form body which is ignored, so GET and POST behave the same.
        .route(
            "/get_data",
            get(DistrictController::get_data).post(DistrictController::get_data),
        )
        // API
        .nest("/api", api)
        // Fallback handler for 404
        .fallback(handler_404)
        // ✅ Apply CORS layer to all routes
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

// Handler for the dashboard page (compiled in; no templating)
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
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
