pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::positions::handlers as positions;
use crate::screening::handlers as screening;
use crate::state::AppState;

/// Slack on top of the upload limit for the other multipart fields.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Bodies up to twice the upload limit still reach the extractor, so an
    // oversized resume gets a FileTooLarge warning instead of a bare 413.
    let body_limit = usize::try_from(state.config.max_file_size_bytes())
        .unwrap_or(usize::MAX)
        .saturating_mul(2)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Positions
        .route("/api/v1/positions", get(positions::handle_list_positions))
        .route(
            "/api/v1/positions/:name",
            get(positions::handle_get_position).put(positions::handle_upsert_position),
        )
        .route(
            "/api/v1/positions/:name/questions",
            get(interview::handle_sample_questions),
        )
        // Screening
        .route(
            "/api/v1/screenings",
            post(screening::handle_screening).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/api/v1/candidates/validate",
            post(screening::handle_validate_candidate),
        )
        // Interview
        .route(
            "/api/v1/interviews/answers",
            post(interview::handle_evaluate_answer),
        )
        .with_state(state)
}
