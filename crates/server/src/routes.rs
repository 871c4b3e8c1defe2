use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use moviemate_core::error::ApiError;
use moviemate_metadata::MovieDetail;
use moviemate_metadata::search::{self, SearchOutcome};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_titles))
        .route("/movies/{id}", get(get_movie))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Search flow: a blank query is a caller error and never reaches the
/// provider. Everything else returns the classified outcome as content;
/// the page shows outcome error messages verbatim.
async fn search_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, AppError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::BadRequest("query parameter `q` is required".into()).into());
    }

    Ok(Json(search::run(state.provider.as_ref(), query).await))
}

// ---------------------------------------------------------------------------
// Movie detail
// ---------------------------------------------------------------------------

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieDetail>, AppError> {
    let detail = state.provider.get_title(&id).await?;
    Ok(Json(detail))
}
