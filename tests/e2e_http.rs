// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use content_core::application::services::WorkflowPolicies;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;
use uuid::Uuid;

mod support;
use support::SWEDISH_WORKSPACE;

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn contents_uri(suffix: &str) -> String {
    format!("/api/v1/workspaces/{SWEDISH_WORKSPACE}/contents{suffix}")
}

/// /health が 200 と JSON を返すことを確認する
#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = support::make_test_router().await;
    let resp = app.oneshot(empty_request(Method::GET, "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::read_json(resp).await;
    assert_eq!(json["status"], "ok");
}

/// OpenAPI ドキュメントが配信されることを確認する
#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(empty_request(Method::GET, "/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = support::read_json(resp).await;
    assert!(json["paths"]["/api/v1/content-definitions"].is_object());
}

/// 定義作成からコンテンツ公開までを HTTP 経由で通す
#[tokio::test]
async fn e2e_define_create_edit_publish() {
    let app = support::build_test_app(WorkflowPolicies::default()).await.router();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/content-definitions",
            &json!({"name": "Person"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let definition = support::read_json(resp).await;
    let definition_id = definition["id"].as_str().unwrap().to_string();
    assert_eq!(definition["properties"][0]["name"], "name");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/content-definitions/{definition_id}/properties"),
            &json!({"name": "Age", "type": "number"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let definition = support::read_json(resp).await;
    let age = definition["properties"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "age")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!(
                "/api/v1/content-definitions/{definition_id}/properties/{age}/validators/range"
            ),
            &json!({"config": {"min": 0, "max": 150}}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &contents_uri(""),
            &json!({"content_definition_id": definition_id}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let content = support::read_json(resp).await;
    let content_id = content["id"].as_str().unwrap().to_string();
    assert_eq!(content["version"]["status"], "draft");
    assert_eq!(content["version"]["properties"]["sv-SE"]["name"]["value"], Value::Null);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &contents_uri(&format!("/{content_id}/versions/0/fields")),
            &json!({"language": "sv-SE", "fields": {"name": "Alice", "age": 31}}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &contents_uri(&format!("/{content_id}/versions/0/publish")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let published = support::read_json(resp).await;
    assert_eq!(published["published_version"], 0);
    assert_eq!(published["version"]["status"], "published");

    // Published versions are frozen.
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &contents_uri(&format!("/{content_id}/versions/0/fields")),
            &json!({"language": "sv-SE", "fields": {"name": "Bob"}}),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &contents_uri(&format!("?content_definition_id={definition_id}")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = support::read_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["version"]["properties"]["sv-SE"]["name"]["value"], "Alice");
}

/// 検証に失敗した公開は 422 と違反一覧を返す
#[tokio::test]
async fn e2e_publish_with_missing_required_returns_422() {
    let test_app = support::build_test_app(WorkflowPolicies::default()).await;
    let definition = support::seed_person_definition(&test_app.services).await;
    let app = test_app.router();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &contents_uri(""),
            &json!({"content_definition_id": definition.id}),
        ))
        .await
        .unwrap();
    let content = support::read_json(resp).await;
    let content_id = content["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &contents_uri(&format!("/{content_id}/versions/0/publish")),
        ))
        .await
        .unwrap();
    let body =
        support::assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            .await;
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["rule"], "required");
    assert_eq!(violations[0]["field"], "name");
    assert_eq!(violations[0]["locale"], "sv-SE");
    assert!(violations[0]["reason"].is_string());

    let resp = app
        .oneshot(empty_request(Method::GET, &contents_uri(&format!("/{content_id}"))))
        .await
        .unwrap();
    let stored = support::read_json(resp).await;
    assert_eq!(stored["version"]["status"], "draft");
}

/// 存在しないコンテンツは 404 を返す
#[tokio::test]
async fn e2e_unknown_content_returns_404() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &contents_uri(&format!("/{}", Uuid::new_v4())),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 不正な定義 ID リストは 400 を返す
#[tokio::test]
async fn e2e_malformed_definition_filter_returns_400() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(empty_request(
            Method::GET,
            &contents_uri("?content_definition_id=not-a-uuid"),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 未知のプロパティ型は 400、正規名プロパティの削除も 400
#[tokio::test]
async fn e2e_schema_misuse_returns_400() {
    let test_app = support::build_test_app(WorkflowPolicies::default()).await;
    let definition = support::seed_person_definition(&test_app.services).await;
    let app = test_app.router();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/content-definitions/{}/properties", definition.id),
            &json!({"name": "when", "type": "datetime"}),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let name = support::property_id(&definition, "name");
    let resp = app
        .oneshot(empty_request(
            Method::DELETE,
            &format!(
                "/api/v1/content-definitions/{}/properties/{name}",
                definition.id
            ),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
