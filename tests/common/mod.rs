#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use edumentor::config::{Config, GenerationMode};
use edumentor::database::{create_pool, create_schema};
use edumentor::{AppState, build_router};

pub const TEST_PASSWORD: &str = "correct-horse";

/// 测试用配置：模板模式、内存数据库、最低 bcrypt 轮数
pub fn test_config(image_dir: &Path) -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        server_host: "127.0.0.1".into(),
        server_port: 0,
        api_base_uri: "/api".into(),
        jwt_secret: "integration-test-secret".into(),
        jwt_expiration_secs: 3600,
        generation_mode: GenerationMode::Template,
        generation_fallback: true,
        deepseek_api_key: None,
        deepseek_base_url: "http://127.0.0.1:9".into(),
        stability_api_key: None,
        stability_api_url: "http://127.0.0.1:9/image".into(),
        image_dir: PathBuf::from(image_dir),
        request_timeout_secs: 5,
        bcrypt_cost: 4,
    }
}

pub async fn build_app_with(config: Config) -> Router {
    let pool = create_pool(&config.database_url)
        .await
        .expect("in-memory pool should open");
    create_schema(&pool).await.expect("schema should apply");

    let state = AppState::new(pool, config).expect("state should build");
    build_router(state)
}

pub async fn build_test_app(image_dir: &Path) -> Router {
    build_app_with(test_config(image_dir)).await
}

/// 发送请求并返回状态码和 JSON 响应体
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    read_response(app, request).await
}

async fn read_response(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// 用原样的 Authorization 头发送 GET 请求
pub async fn get_with_authorization(
    app: &Router,
    uri: &str,
    authorization: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();

    read_response(app, request).await
}

pub async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "username": username, "password": password });
    send(app, Method::POST, "/api/users/register", None, Some(body)).await
}

pub async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "username": username, "password": password });
    send(app, Method::POST, "/api/users/login", None, Some(body)).await
}

/// 注册并登录，返回 token
pub async fn login_as(app: &Router, username: &str) -> String {
    let (status, _) = register(app, username, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = login(app, username, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    json["resp_data"]["token"]
        .as_str()
        .expect("login response must carry a token")
        .to_string()
}
