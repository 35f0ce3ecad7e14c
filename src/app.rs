// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, OpenAPI document and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::error::SearchResult;
use crate::models::aggregation::{FacetBucket, Facets};
use crate::models::movie::{Movie, MovieResponse, SearchRequest};
use crate::models::response::{ApiResponse, FailureData};
use crate::models::version::VersionResponse;
use crate::services::search::SearchClient;
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `MOVIE_SEARCH_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("MOVIE_SEARCH_VERSION");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub search_client: Arc<SearchClient>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// Search movies by free text and filters.
///
/// Engine failures are reported inside the envelope (`status: "failure"`),
/// not through the HTTP status.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    params(
        ("searchText" = Option<String>, Query, description = "Free text matched against title, description, actors, directors and genre"),
        ("country" = Option<String>, Query, description = "Country filter"),
        ("ratingMin" = Option<f64>, Query, description = "Lowest user rating, inclusive"),
        ("ratingMax" = Option<f64>, Query, description = "Highest user rating, inclusive"),
        ("language" = Option<String>, Query, description = "Exact language"),
        ("year" = Option<i64>, Query, description = "Exact release year"),
        ("genre" = Option<Vec<String>>, Query, description = "Genres, any of which qualifies; repeat or comma-separate"),
        ("durationMin" = Option<f64>, Query, description = "Shortest runtime in hours, inclusive"),
        ("durationMax" = Option<f64>, Query, description = "Longest runtime in hours, inclusive"),
        ("page" = Option<u64>, Query, description = "Zero-based page index"),
        ("limit" = Option<u64>, Query, description = "Page size, 10 when absent"),
    ),
    responses(
        (status = 200, description = "`{\"status\": \"success\", \"data\": MovieResponse}`, or `{\"status\": \"failure\", \"data\": FailureData}` when the engine call fails", body = MovieResponse)
    )
)]
pub async fn search_movies_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<ApiResponse<MovieResponse>> {
    let request = SearchRequest::from_query_string(query.as_deref().unwrap_or_default());
    debug!(?request, "Movie search requested");

    Json(envelope(state.search_client.search(&request).await))
}

/// Facet counts across the whole catalog, for building filter controls.
#[utoipa::path(
    get,
    path = "/movies/facets",
    tag = "movies",
    responses(
        (status = 200, description = "`{\"status\": \"success\", \"data\": Facets}`, or `{\"status\": \"failure\", \"data\": FailureData}` when the engine call fails", body = Facets)
    )
)]
pub async fn facets_handler(State(state): State<AppState>) -> Json<ApiResponse<Facets>> {
    Json(envelope(state.search_client.facets().await))
}

#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Service version", body = VersionResponse))
)]
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "movie-search".to_string(),
        version: VERSION.to_string(),
        index: state.search_client.index_name().to_string(),
    })
}

fn envelope<T>(result: SearchResult<T>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::Success(data),
        Err(e) => {
            error!(error = %e, "Search failed");
            ApiResponse::failure(e.to_string(), e.engine_body().cloned())
        }
    }
}

// ---------------------------------------------------------------------------
// OpenAPI
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(search_movies_handler, facets_handler, version_handler),
    components(schemas(MovieResponse, Movie, Facets, FacetBucket, FailureData, VersionResponse)),
    tags((name = "movies", description = "Movie catalog search"))
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router, including Swagger UI at `/swagger-ui`.
///
/// Any origin may call the API; the browser UI is served separately.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(search_movies_handler))
        .route("/movies/facets", get(facets_handler))
        .route("/version", get(version_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
