// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{content_definitions, contents},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/content-definitions",
            get(content_definitions::list_content_definitions)
                .post(content_definitions::create_content_definition),
        )
        .route(
            "/api/v1/content-definitions/{definition_id}",
            get(content_definitions::get_content_definition),
        )
        .route(
            "/api/v1/content-definitions/{definition_id}/properties",
            post(content_definitions::add_property),
        )
        .route(
            "/api/v1/content-definitions/{definition_id}/properties/{property_id}",
            patch(content_definitions::update_property)
                .delete(content_definitions::delete_property),
        )
        .route(
            "/api/v1/content-definitions/{definition_id}/properties/{property_id}/name",
            put(content_definitions::rename_property),
        )
        .route(
            "/api/v1/content-definitions/{definition_id}/properties/{property_id}/validators/{rule}",
            put(content_definitions::upsert_validator),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents",
            get(contents::list_contents).post(contents::create_content),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}",
            get(contents::get_content),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions",
            get(contents::list_versions).post(contents::create_version),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/fields",
            patch(contents::update_fields),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/languages",
            post(contents::add_language),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/publish",
            post(contents::publish_content),
        )
        .route(
            "/api/v1/workspaces/{workspace_id}/contents/{content_id}/archive",
            post(contents::archive_content),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
