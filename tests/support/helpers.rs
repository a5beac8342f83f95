// tests/support/helpers.rs
use super::mocks::{SequentialIds, SteppingClock};
use axum::body::{self, Body};
use axum::http::{Response, StatusCode};
use content_core::application::{
    commands::content_definitions::{
        AddPropertyDefinitionCommand, CreateContentDefinitionCommand, UpsertValidatorCommand,
    },
    dto::ContentDefinitionDto,
    ports::{ids::IdGenerator, time::Clock},
    services::{ApplicationServices, WorkflowPolicies},
};
use content_core::domain::content::{ContentRepository, Locale};
use content_core::domain::content_definition::ContentDefinitionRepository;
use content_core::domain::workspace::{Workspace, WorkspaceId, WorkspaceRepository};
use content_core::infrastructure::repositories::{
    InMemoryContentDefinitionRepository, InMemoryContentRepository, InMemoryWorkspaceRepository,
};
use content_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

/// sv-SE のみのワークスペース
pub const SWEDISH_WORKSPACE: Uuid = Uuid::from_u128(1);
/// sv-SE を既定とし en-US も持つワークスペース
pub const BILINGUAL_WORKSPACE: Uuid = Uuid::from_u128(2);

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &[])
    }
}

fn workspace(id: Uuid, languages: &[&str]) -> Workspace {
    let languages = languages
        .iter()
        .map(|tag| Locale::new(tag).unwrap())
        .collect();
    Workspace::new(WorkspaceId::new(id), "test", languages).unwrap()
}

/// インメモリリポジトリでサービス一式を組み立てる
pub async fn build_test_app(policies: WorkflowPolicies) -> TestApp {
    let content_repo: Arc<dyn ContentRepository> = Arc::new(InMemoryContentRepository::new());
    let definition_repo: Arc<dyn ContentDefinitionRepository> =
        Arc::new(InMemoryContentDefinitionRepository::new());
    let workspace_repo: Arc<dyn WorkspaceRepository> = Arc::new(InMemoryWorkspaceRepository::new());

    workspace_repo
        .upsert(workspace(SWEDISH_WORKSPACE, &["sv-SE"]))
        .await
        .unwrap();
    workspace_repo
        .upsert(workspace(BILINGUAL_WORKSPACE, &["sv-SE", "en-US"]))
        .await
        .unwrap();

    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIds::default());

    let services = Arc::new(ApplicationServices::new(
        content_repo,
        definition_repo,
        workspace_repo,
        clock,
        ids,
        policies,
    ));
    TestApp { services }
}

pub async fn make_test_router() -> axum::Router {
    build_test_app(WorkflowPolicies::default()).await.router()
}

/// `Person` 定義: `name` (localized, required) と `age` (number, range 0..=150)
pub async fn seed_person_definition(services: &ApplicationServices) -> ContentDefinitionDto {
    let commands = &services.content_definition_commands;
    let definition = commands
        .create_content_definition(CreateContentDefinitionCommand {
            name: "Person".into(),
            description: "people".into(),
        })
        .await
        .unwrap();
    let definition = commands
        .add_property_definition(AddPropertyDefinitionCommand {
            content_definition_id: definition.id,
            name: "age".into(),
            property_type: "number".into(),
            description: String::new(),
            localized: false,
        })
        .await
        .unwrap();
    let age = property_id(&definition, "age");
    commands
        .upsert_validator(UpsertValidatorCommand {
            content_definition_id: definition.id,
            property_id: age,
            rule: "range".into(),
            config: json!({"min": 0, "max": 150}),
        })
        .await
        .unwrap()
}

pub fn property_id(definition: &ContentDefinitionDto, name: &str) -> Uuid {
    definition
        .properties
        .iter()
        .find(|property| property.name == name)
        .map(|property| property.id)
        .unwrap_or_else(|| panic!("property {name} missing"))
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// ErrorResponse 形式の JSON とステータスを検証し、本文を返す
pub async fn assert_error_response(
    resp: Response<Body>,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    let status = resp.status();
    let json = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected body: {json}");
    assert_eq!(json["error"], expected_error);
    assert!(json["message"].is_string());
    json
}
