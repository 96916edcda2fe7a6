pub mod health;
pub mod placeholder;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::fault::PanicResponder;
use crate::limits::enforce_content_length;
use crate::state::AppState;

async fn not_found() -> Result<(), AppError> {
    Err(AppError::NotFound)
}

pub fn build_router(state: AppState) -> Router {
    let max_content_length = state.config.max_content_length;

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        // AI API (placeholders)
        .route("/api/parse-resume", post(placeholder::handle_parse_resume))
        .route("/api/match-jobs", post(placeholder::handle_match_jobs))
        .route("/api/extract-skills", post(placeholder::handle_extract_skills))
        .route(
            "/api/analyze-job-description",
            post(placeholder::handle_analyze_job_description),
        )
        .route_layer(middleware::from_fn_with_state(
            max_content_length,
            enforce_content_length,
        ))
        .layer(DefaultBodyLimit::max(max_content_length))
        .fallback(not_found)
        .with_state(state)
}

/// Router plus the service-wide layers: panic isolation, request tracing, permissive CORS.
pub fn build_app(state: AppState) -> Router {
    let debug = state.config.debug;
    apply_service_layers(build_router(state), debug)
}

fn apply_service_layers(router: Router, debug: bool) -> Router {
    router
        .layer(CatchPanicLayer::custom(PanicResponder::new(debug)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
