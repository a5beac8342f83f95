// src/presentation/http/controllers/contents.rs
use crate::application::{
    commands::contents::{
        AddContentLanguageCommand, ArchiveContentCommand, CreateContentCommand,
        CreateContentVersionCommand, PublishContentCommand, UpdateContentFieldsCommand,
    },
    dto::{ContentDto, VersionSummaryDto},
    queries::contents::{GetContentQuery, ListContentByDefinitionQuery, ListVersionsQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// Comma-separated content definition ids.
    pub content_definition_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentVersionParams {
    /// Explicit version; defaults to the published one, else the newest.
    pub version: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewVersionParams {
    /// Version to derive from; defaults to the newest.
    pub base_version: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    pub content_definition_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFieldsRequest {
    pub language: String,
    /// Field name to new value; `null` clears a field.
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddLanguageRequest {
    pub language: String,
}

fn parse_definition_ids(raw: &str) -> HttpResult<Vec<Uuid>> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            Uuid::parse_str(segment).map_err(|_| {
                HttpError::bad_request(format!("invalid content definition id '{segment}'"))
            })
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/workspaces/{workspace_id}/contents",
    params(("workspace_id" = Uuid, Path, description = "Workspace id"), ContentListParams),
    responses(
        (status = 200, description = "Non-archived content of the given definitions.", body = [ContentDto]),
        (status = 400, description = "Malformed id list.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn list_contents(
    Extension(state): Extension<HttpState>,
    Path(workspace_id): Path<Uuid>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<ContentDto>>> {
    let content_definition_ids = parse_definition_ids(&params.content_definition_id)?;

    state
        .services
        .content_queries
        .list_by_content_definition(ListContentByDefinitionQuery {
            content_definition_ids,
            workspace_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/workspaces/{workspace_id}/contents",
    params(("workspace_id" = Uuid, Path, description = "Workspace id")),
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content created with an empty draft version 0.", body = ContentDto),
        (status = 404, description = "Unknown workspace, definition or parent.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Path(workspace_id): Path<Uuid>,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        content_definition_id: payload.content_definition_id,
        workspace_id,
        parent_id: payload.parent_id,
    };

    state
        .services
        .content_commands
        .create_content(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id"),
        ContentVersionParams
    ),
    responses(
        (status = 200, description = "Content with the selected version.", body = ContentDto),
        (status = 404, description = "Unknown content or version.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn get_content(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<ContentVersionParams>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content(GetContentQuery {
            id: content_id,
            version: params.version,
            workspace_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id")
    ),
    responses(
        (status = 200, description = "Every version, oldest first.", body = [VersionSummaryDto]),
        (status = 404, description = "Unknown content.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn list_versions(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id)): Path<(Uuid, Uuid)>,
) -> HttpResult<Json<Vec<VersionSummaryDto>>> {
    state
        .services
        .content_queries
        .list_versions(ListVersionsQuery {
            content_id,
            workspace_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id"),
        NewVersionParams
    ),
    responses(
        (status = 201, description = "New draft derived under the current content definition.", body = ContentDto),
        (status = 404, description = "Unknown content or base version.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent edit.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn create_version(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<NewVersionParams>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentVersionCommand {
        content_id,
        base_version: params.base_version,
        workspace_id,
    };

    state
        .services
        .content_commands
        .create_content_version(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/fields",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id"),
        ("version" = u32, Path, description = "Draft version number")
    ),
    request_body = UpdateFieldsRequest,
    responses(
        (status = 200, description = "Fields written.", body = ContentDto),
        (status = 400, description = "Missing language or field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown content or version.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Version is not a draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn update_fields(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id, version)): Path<(Uuid, Uuid, u32)>,
    Json(payload): Json<UpdateFieldsRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentFieldsCommand {
        content_id,
        version,
        language: payload.language,
        fields: payload.fields,
        workspace_id,
    };

    state
        .services
        .content_commands
        .update_content_fields(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/languages",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id"),
        ("version" = u32, Path, description = "Draft version number")
    ),
    request_body = AddLanguageRequest,
    responses(
        (status = 200, description = "Language added to the draft.", body = ContentDto),
        (status = 400, description = "Language not configured on the workspace.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Language already present or version not a draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn add_language(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id, version)): Path<(Uuid, Uuid, u32)>,
    Json(payload): Json<AddLanguageRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = AddContentLanguageCommand {
        content_id,
        version,
        language: payload.language,
        workspace_id,
    };

    state
        .services
        .content_commands
        .add_content_language(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/versions/{version}/publish",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id"),
        ("version" = u32, Path, description = "Version to publish")
    ),
    responses(
        (status = 200, description = "Version is live.", body = ContentDto),
        (status = 404, description = "Unknown content or version.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Version cannot be published from its current status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Rejected by field validators.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn publish_content(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id, version)): Path<(Uuid, Uuid, u32)>,
) -> HttpResult<Json<ContentDto>> {
    let command = PublishContentCommand {
        content_id,
        version,
        workspace_id,
    };

    state
        .services
        .content_commands
        .publish_content(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/workspaces/{workspace_id}/contents/{content_id}/archive",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace id"),
        ("content_id" = Uuid, Path, description = "Content id")
    ),
    responses(
        (status = 200, description = "Content archived; still retrievable by id.", body = ContentDto),
        (status = 404, description = "Unknown content.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contents"
)]
pub async fn archive_content(
    Extension(state): Extension<HttpState>,
    Path((workspace_id, content_id)): Path<(Uuid, Uuid)>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_commands
        .archive_content(ArchiveContentCommand {
            content_id,
            workspace_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_ids_are_split_and_trimmed() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let ids = parse_definition_ids(&format!("{a}, {b},")).unwrap();
        assert_eq!(ids, vec![a, b]);
        assert!(parse_definition_ids("not-a-uuid").is_err());
    }
}
