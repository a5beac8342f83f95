// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const LOCAL_SERVER: &str = "http://localhost:3000";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::content_definitions::list_content_definitions,
        crate::presentation::http::controllers::content_definitions::create_content_definition,
        crate::presentation::http::controllers::content_definitions::get_content_definition,
        crate::presentation::http::controllers::content_definitions::add_property,
        crate::presentation::http::controllers::content_definitions::rename_property,
        crate::presentation::http::controllers::content_definitions::update_property,
        crate::presentation::http::controllers::content_definitions::delete_property,
        crate::presentation::http::controllers::content_definitions::upsert_validator,
        crate::presentation::http::controllers::contents::list_contents,
        crate::presentation::http::controllers::contents::create_content,
        crate::presentation::http::controllers::contents::get_content,
        crate::presentation::http::controllers::contents::list_versions,
        crate::presentation::http::controllers::contents::create_version,
        crate::presentation::http::controllers::contents::update_fields,
        crate::presentation::http::controllers::contents::add_language,
        crate::presentation::http::controllers::contents::publish_content,
        crate::presentation::http::controllers::contents::archive_content,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::ViolationResponse,
            crate::presentation::http::controllers::content_definitions::CreateContentDefinitionRequest,
            crate::presentation::http::controllers::content_definitions::AddPropertyRequest,
            crate::presentation::http::controllers::content_definitions::RenamePropertyRequest,
            crate::presentation::http::controllers::content_definitions::UpdatePropertyRequest,
            crate::presentation::http::controllers::content_definitions::UpsertValidatorRequest,
            crate::presentation::http::controllers::contents::CreateContentRequest,
            crate::presentation::http::controllers::contents::UpdateFieldsRequest,
            crate::presentation::http::controllers::contents::AddLanguageRequest,
            crate::application::dto::ContentDefinitionDto,
            crate::application::dto::PropertyDefinitionDto,
            crate::application::dto::ContentDto,
            crate::application::dto::ContentVersionDto,
            crate::application::dto::ContentFieldDto,
            crate::application::dto::VersionSummaryDto
        )
    ),
    tags(
        (name = "ContentDefinitions", description = "Schema management endpoints"),
        (name = "Contents", description = "Content versioning and publishing endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Content Core API",
        description = "Headless CMS content versioning and publish engine",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(LOCAL_SERVER.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI under `/docs`, the document itself under `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
