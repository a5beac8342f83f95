// tests/content_workflow.rs
use content_core::application::{
    commands::{
        content_definitions::{
            DeletePropertyDefinitionCommand, RenamePropertyDefinitionCommand,
        },
        contents::{
            AddContentLanguageCommand, ArchiveContentCommand, CreateContentCommand,
            CreateContentVersionCommand, PublishContentCommand, UpdateContentFieldsCommand,
        },
    },
    dto::ContentDto,
    error::ApplicationError,
    queries::contents::{GetContentQuery, ListContentByDefinitionQuery, ListVersionsQuery},
    services::{ApplicationServices, WorkflowPolicies},
};
use content_core::domain::content::{ArchivePolicy, PublishPolicy};
use content_core::domain::errors::DomainError;
use serde_json::{Map, Value, json};
use uuid::Uuid;

mod support;
use support::{BILINGUAL_WORKSPACE, SWEDISH_WORKSPACE};

async fn create(services: &ApplicationServices, definition_id: Uuid, workspace: Uuid) -> ContentDto {
    services
        .content_commands
        .create_content(CreateContentCommand {
            content_definition_id: definition_id,
            workspace_id: workspace,
            parent_id: None,
        })
        .await
        .unwrap()
}

async fn set_fields(
    services: &ApplicationServices,
    content: &ContentDto,
    version: u32,
    language: &str,
    fields: Value,
) -> Result<ContentDto, ApplicationError> {
    let fields: Map<String, Value> = match fields {
        Value::Object(map) => map,
        other => panic!("fields must be an object, got {other}"),
    };
    services
        .content_commands
        .update_content_fields(UpdateContentFieldsCommand {
            content_id: content.id,
            version,
            language: language.into(),
            fields,
            workspace_id: content.workspace_id,
        })
        .await
}

async fn publish(
    services: &ApplicationServices,
    content: &ContentDto,
    version: u32,
) -> Result<ContentDto, ApplicationError> {
    services
        .content_commands
        .publish_content(PublishContentCommand {
            content_id: content.id,
            version,
            workspace_id: content.workspace_id,
        })
        .await
}

async fn derive(services: &ApplicationServices, content: &ContentDto) -> ContentDto {
    services
        .content_commands
        .create_content_version(CreateContentVersionCommand {
            content_id: content.id,
            base_version: None,
            workspace_id: content.workspace_id,
        })
        .await
        .unwrap()
}

async fn fetch(services: &ApplicationServices, content: &ContentDto, version: Option<u32>) -> ContentDto {
    services
        .content_queries
        .get_content(GetContentQuery {
            id: content.id,
            version,
            workspace_id: content.workspace_id,
        })
        .await
        .unwrap()
}

fn value<'a>(content: &'a ContentDto, locale: &str, field: &str) -> &'a Value {
    &content.version.properties[locale][field].value
}

fn statuses(content: &ContentDto) -> Vec<(u32, String)> {
    content
        .versions
        .iter()
        .map(|summary| (summary.version, summary.status.clone()))
        .collect()
}

/// sv-SE のシナリオ: 作成 → name 設定 → 公開 → 以降の書き込みは NotDraft
#[tokio::test]
async fn swedish_person_scenario() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;

    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;
    assert_eq!(content.version.version, 0);
    assert_eq!(content.version.status, "draft");
    assert_eq!(value(&content, "sv-SE", "name"), &Value::Null);
    assert_eq!(value(&content, "sv-SE", "age"), &Value::Null);

    let content = set_fields(services, &content, 0, "sv-SE", json!({"name": "Alice"}))
        .await
        .unwrap();
    assert_eq!(value(&content, "sv-SE", "name"), "Alice");

    let published = publish(services, &content, 0).await.unwrap();
    assert_eq!(published.status, "published");
    assert_eq!(published.published_version, Some(0));
    assert_eq!(published.version.status, "published");

    let err = set_fields(services, &content, 0, "sv-SE", json!({"name": "Bob"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotDraft(_))));
    assert_eq!(value(&fetch(services, &content, Some(0)).await, "sv-SE", "name"), "Alice");
}

/// 必須フィールドが空のままでは公開できず、状態は Draft のまま
#[tokio::test]
async fn gate_rejection_leaves_version_in_draft() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;

    set_fields(services, &content, 0, "sv-SE", json!({"name": ""}))
        .await
        .unwrap();
    let err = publish(services, &content, 0).await.unwrap_err();
    match err {
        ApplicationError::Domain(DomainError::ValidationFailed(violations)) => {
            let violations = violations.into_inner();
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].rule.to_string(), "required");
            assert_eq!(violations[0].field, "name");
            assert_eq!(violations[0].locale, "sv-SE");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }

    let stored = fetch(services, &content, Some(0)).await;
    assert_eq!(stored.version.status, "draft");
    assert_eq!(stored.published_version, None);
}

/// CollectAll ポリシーでは全違反がロケール順に返る
#[tokio::test]
async fn collect_all_reports_every_locale() {
    let policies = WorkflowPolicies {
        publish: PublishPolicy::CollectAll,
        ..WorkflowPolicies::default()
    };
    let app = support::build_test_app(policies).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, BILINGUAL_WORKSPACE).await;

    set_fields(services, &content, 0, "sv-SE", json!({"age": 200}))
        .await
        .unwrap();
    let err = publish(services, &content, 0).await.unwrap_err();
    let ApplicationError::Domain(DomainError::ValidationFailed(violations)) = err else {
        panic!("expected ValidationFailed");
    };
    let found: Vec<(String, String, String)> = violations
        .into_inner()
        .into_iter()
        .map(|v| (v.field, v.rule.to_string(), v.locale))
        .collect();
    assert_eq!(
        found,
        vec![
            ("age".into(), "range".into(), "sv-SE".into()),
            ("name".into(), "required".into(), "sv-SE".into()),
            ("name".into(), "required".into(), "en-US".into()),
        ]
    );
}

/// 公開中のバージョンを再公開しても状態遷移は起きない
#[tokio::test]
async fn republishing_is_idempotent() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;
    set_fields(services, &content, 0, "sv-SE", json!({"name": "Alice"}))
        .await
        .unwrap();

    let first = publish(services, &content, 0).await.unwrap();
    let second = publish(services, &content, 0).await.unwrap();
    assert_eq!(statuses(&first), statuses(&second));
    assert_eq!(second.published_version, Some(0));
    assert_eq!(second.version.status, "published");
}

/// 新しい下書きを公開すると以前の公開版は PreviouslyPublished になる
#[tokio::test]
async fn publishing_a_newer_version_retires_the_old_one() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;
    set_fields(services, &content, 0, "sv-SE", json!({"name": "Alice", "age": 30}))
        .await
        .unwrap();
    publish(services, &content, 0).await.unwrap();

    let derived = derive(services, &content).await;
    assert_eq!(derived.version.version, 1);
    assert_eq!(derived.version.status, "draft");
    assert_eq!(value(&derived, "sv-SE", "name"), "Alice");
    assert_eq!(value(&derived, "sv-SE", "age"), 30);

    set_fields(services, &content, 1, "sv-SE", json!({"name": "Alicia"}))
        .await
        .unwrap();
    let live = publish(services, &content, 1).await.unwrap();
    assert_eq!(live.published_version, Some(1));
    assert_eq!(
        statuses(&live),
        vec![
            (0, "previously_published".to_string()),
            (1, "published".to_string())
        ]
    );

    let err = publish(services, &content, 0).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidTransition { .. })
    ));

    let current = fetch(services, &content, None).await;
    assert_eq!(current.version.version, 1);
    assert_eq!(value(&current, "sv-SE", "name"), "Alicia");
}

/// アーカイブしたコンテンツは一覧から外れるが ID では取得できる
#[tokio::test]
async fn archived_content_leaves_listing_but_stays_readable() {
    let policies = WorkflowPolicies {
        archive: ArchivePolicy::Archived,
        ..WorkflowPolicies::default()
    };
    let app = support::build_test_app(policies).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let kept = create(services, definition.id, SWEDISH_WORKSPACE).await;
    let archived = create(services, definition.id, SWEDISH_WORKSPACE).await;
    set_fields(services, &archived, 0, "sv-SE", json!({"name": "Old"}))
        .await
        .unwrap();
    publish(services, &archived, 0).await.unwrap();

    let result = services
        .content_commands
        .archive_content(ArchiveContentCommand {
            content_id: archived.id,
            workspace_id: SWEDISH_WORKSPACE,
        })
        .await
        .unwrap();
    assert_eq!(result.status, "archived");
    assert_eq!(result.published_version, None);
    assert_eq!(result.version.status, "archived");

    let listed = services
        .content_queries
        .list_by_content_definition(ListContentByDefinitionQuery {
            content_definition_ids: vec![definition.id],
            workspace_id: SWEDISH_WORKSPACE,
        })
        .await
        .unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|content| content.id).collect();
    assert_eq!(ids, vec![kept.id]);

    let still_there = fetch(services, &archived, None).await;
    assert_eq!(still_there.status, "archived");
    assert_eq!(value(&still_there, "sv-SE", "name"), "Old");
}

/// 他のワークスペースからはコンテンツが見えない
#[tokio::test]
async fn content_is_scoped_to_its_workspace() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;

    let err = services
        .content_queries
        .get_content(GetContentQuery {
            id: content.id,
            version: None,
            workspace_id: BILINGUAL_WORKSPACE,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NotFound(_)) | ApplicationError::NotFound(_)
    ));
}

/// 言語追加: 非ローカライズ値はミラーされ、ローカライズ項目は作られない
#[tokio::test]
async fn added_language_mirrors_shared_fields() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, BILINGUAL_WORKSPACE).await;
    assert!(!content.version.properties.contains_key("en-US"));
    set_fields(services, &content, 0, "sv-SE", json!({"name": "Alice", "age": 41}))
        .await
        .unwrap();

    let add = |language: &str| AddContentLanguageCommand {
        content_id: content.id,
        version: 0,
        language: language.into(),
        workspace_id: BILINGUAL_WORKSPACE,
    };
    let updated = services
        .content_commands
        .add_content_language(add("en-US"))
        .await
        .unwrap();
    assert_eq!(value(&updated, "en-US", "age"), 41);
    assert!(!updated.version.properties["en-US"].contains_key("name"));

    let duplicate = services
        .content_commands
        .add_content_language(add("en-US"))
        .await
        .unwrap_err();
    assert!(matches!(
        duplicate,
        ApplicationError::Domain(DomainError::DuplicateLanguage(_))
    ));
    let unsupported = services
        .content_commands
        .add_content_language(add("de-DE"))
        .await
        .unwrap_err();
    assert!(matches!(unsupported, ApplicationError::Validation(_)));

    // Shared fields follow writes made through any locale.
    let updated = set_fields(services, &content, 0, "en-US", json!({"age": 42, "name": "Alice"}))
        .await
        .unwrap();
    assert_eq!(value(&updated, "sv-SE", "age"), 42);
    assert_eq!(value(&updated, "en-US", "name"), "Alice");

    let live = publish(services, &content, 0).await.unwrap();
    assert_eq!(live.status, "published");
}

/// 定義変更後の派生: 改名は値を保ち、削除された項目は消える
#[tokio::test]
async fn derivation_follows_schema_edits() {
    let app = support::build_test_app(WorkflowPolicies::default()).await;
    let services = &app.services;
    let definition = support::seed_person_definition(services).await;
    let content = create(services, definition.id, SWEDISH_WORKSPACE).await;
    set_fields(services, &content, 0, "sv-SE", json!({"name": "Alice", "age": 30}))
        .await
        .unwrap();

    let age = support::property_id(&definition, "age");
    let edits = &services.content_definition_commands;
    edits
        .rename_property_definition(RenamePropertyDefinitionCommand {
            content_definition_id: definition.id,
            property_id: age,
            name: "Years".into(),
        })
        .await
        .unwrap();

    let renamed = derive(services, &content).await;
    let fields = &renamed.version.properties["sv-SE"];
    assert!(!fields.contains_key("age"));
    assert_eq!(fields["years"].value, 30);
    assert_eq!(fields["years"].id, age);

    edits
        .delete_property_definition(DeletePropertyDefinitionCommand {
            content_definition_id: definition.id,
            property_id: age,
        })
        .await
        .unwrap();
    let pruned = derive(services, &content).await;
    assert_eq!(pruned.version.version, 2);
    let names: Vec<&String> = pruned.version.properties["sv-SE"].keys().collect();
    assert_eq!(names, vec!["name"]);

    let versions = services
        .content_queries
        .list_versions(ListVersionsQuery {
            content_id: content.id,
            workspace_id: SWEDISH_WORKSPACE,
        })
        .await
        .unwrap();
    let numbers: Vec<u32> = versions.iter().map(|summary| summary.version).collect();
    assert_eq!(numbers, vec![0, 1, 2]);
}
