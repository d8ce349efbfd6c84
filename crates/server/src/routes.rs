use axum::{routing::get, Json, Router};
use common::types::Health;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, state::ServerState};

pub mod todo;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Todo endpoints under `/todo`. `list` is a static segment and wins over `:id`.
pub fn todo_routes() -> Router<ServerState> {
    Router::new()
        .route("/todo", get(todo::welcome).post(todo::create))
        .route("/todo/list", get(todo::list))
        .route(
            "/todo/:id",
            get(todo::get).put(todo::replace).patch(todo::patch).delete(todo::delete),
        )
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        // 5xx responses are logged at ERROR
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(todo_routes())
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace).layer(cors))
}
