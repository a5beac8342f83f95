// src/presentation/http/controllers/content_definitions.rs
use crate::application::{
    commands::content_definitions::{
        AddPropertyDefinitionCommand, CreateContentDefinitionCommand,
        DeletePropertyDefinitionCommand, RenamePropertyDefinitionCommand,
        UpdatePropertyDefinitionCommand, UpsertValidatorCommand,
    },
    dto::ContentDefinitionDto,
    queries::content_definitions::{GetContentDefinitionQuery, ListContentDefinitionsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentDefinitionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddPropertyRequest {
    pub name: String,
    /// One of `text`, `number` or `bool`.
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub localized: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenamePropertyRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePropertyRequest {
    pub description: Option<String>,
    pub localized: Option<bool>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub validators: Map<String, Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertValidatorRequest {
    /// `true`/`false` for `required`, a regex for `pattern`,
    /// `{"min": .., "max": ..}` for `range`.
    #[schema(value_type = Object)]
    pub config: Value,
}

#[utoipa::path(
    get,
    path = "/api/v1/content-definitions",
    responses(
        (status = 200, description = "All content definitions.", body = [ContentDefinitionDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn list_content_definitions(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ContentDefinitionDto>>> {
    state
        .services
        .content_definition_queries
        .list_content_definitions(ListContentDefinitionsQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/content-definitions",
    request_body = CreateContentDefinitionRequest,
    responses(
        (status = 201, description = "Content definition created with its name property.", body = ContentDefinitionDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn create_content_definition(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateContentDefinitionRequest>,
) -> HttpResult<(StatusCode, Json<ContentDefinitionDto>)> {
    let command = CreateContentDefinitionCommand {
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .content_definition_commands
        .create_content_definition(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/content-definitions/{definition_id}",
    params(("definition_id" = Uuid, Path, description = "Content definition id")),
    responses(
        (status = 200, description = "Content definition.", body = ContentDefinitionDto),
        (status = 404, description = "Unknown content definition.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn get_content_definition(
    Extension(state): Extension<HttpState>,
    Path(definition_id): Path<Uuid>,
) -> HttpResult<Json<ContentDefinitionDto>> {
    state
        .services
        .content_definition_queries
        .get_content_definition(GetContentDefinitionQuery { id: definition_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/content-definitions/{definition_id}/properties",
    params(("definition_id" = Uuid, Path, description = "Content definition id")),
    request_body = AddPropertyRequest,
    responses(
        (status = 201, description = "Property added.", body = ContentDefinitionDto),
        (status = 400, description = "Unknown type or invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown content definition.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken or concurrent edit.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn add_property(
    Extension(state): Extension<HttpState>,
    Path(definition_id): Path<Uuid>,
    Json(payload): Json<AddPropertyRequest>,
) -> HttpResult<(StatusCode, Json<ContentDefinitionDto>)> {
    let command = AddPropertyDefinitionCommand {
        content_definition_id: definition_id,
        name: payload.name,
        property_type: payload.property_type,
        description: payload.description,
        localized: payload.localized,
    };

    state
        .services
        .content_definition_commands
        .add_property_definition(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/content-definitions/{definition_id}/properties/{property_id}/name",
    params(
        ("definition_id" = Uuid, Path, description = "Content definition id"),
        ("property_id" = Uuid, Path, description = "Property definition id")
    ),
    request_body = RenamePropertyRequest,
    responses(
        (status = 200, description = "Property renamed; its id is unchanged.", body = ContentDefinitionDto),
        (status = 400, description = "The canonical name property cannot be renamed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown definition or property.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn rename_property(
    Extension(state): Extension<HttpState>,
    Path((definition_id, property_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<RenamePropertyRequest>,
) -> HttpResult<Json<ContentDefinitionDto>> {
    let command = RenamePropertyDefinitionCommand {
        content_definition_id: definition_id,
        property_id,
        name: payload.name,
    };

    state
        .services
        .content_definition_commands
        .rename_property_definition(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/content-definitions/{definition_id}/properties/{property_id}",
    params(
        ("definition_id" = Uuid, Path, description = "Content definition id"),
        ("property_id" = Uuid, Path, description = "Property definition id")
    ),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Property updated.", body = ContentDefinitionDto),
        (status = 400, description = "Unknown or invalid validator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown definition or property.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn update_property(
    Extension(state): Extension<HttpState>,
    Path((definition_id, property_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdatePropertyRequest>,
) -> HttpResult<Json<ContentDefinitionDto>> {
    let command = UpdatePropertyDefinitionCommand {
        content_definition_id: definition_id,
        property_id,
        description: payload.description,
        localized: payload.localized,
        validators: payload.validators,
    };

    state
        .services
        .content_definition_commands
        .update_property_definition(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/content-definitions/{definition_id}/properties/{property_id}",
    params(
        ("definition_id" = Uuid, Path, description = "Content definition id"),
        ("property_id" = Uuid, Path, description = "Property definition id")
    ),
    responses(
        (status = 200, description = "Property removed.", body = ContentDefinitionDto),
        (status = 400, description = "The canonical name property cannot be deleted.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown definition or property.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn delete_property(
    Extension(state): Extension<HttpState>,
    Path((definition_id, property_id)): Path<(Uuid, Uuid)>,
) -> HttpResult<Json<ContentDefinitionDto>> {
    let command = DeletePropertyDefinitionCommand {
        content_definition_id: definition_id,
        property_id,
    };

    state
        .services
        .content_definition_commands
        .delete_property_definition(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/content-definitions/{definition_id}/properties/{property_id}/validators/{rule}",
    params(
        ("definition_id" = Uuid, Path, description = "Content definition id"),
        ("property_id" = Uuid, Path, description = "Property definition id"),
        ("rule" = String, Path, description = "required, pattern or range")
    ),
    request_body = UpsertValidatorRequest,
    responses(
        (status = 200, description = "Validator stored.", body = ContentDefinitionDto),
        (status = 400, description = "Unknown, unsupported or malformed validator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown definition or property.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "ContentDefinitions"
)]
pub async fn upsert_validator(
    Extension(state): Extension<HttpState>,
    Path((definition_id, property_id, rule)): Path<(Uuid, Uuid, String)>,
    Json(payload): Json<UpsertValidatorRequest>,
) -> HttpResult<Json<ContentDefinitionDto>> {
    let command = UpsertValidatorCommand {
        content_definition_id: definition_id,
        property_id,
        rule,
        config: payload.config,
    };

    state
        .services
        .content_definition_commands
        .upsert_validator(command)
        .await
        .into_http()
        .map(Json)
}
