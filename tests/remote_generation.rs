//! 远程生成策略：用本地假服务模拟 DeepSeek 与 Stability 接口

mod common;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};

use common::{get, login_as, post as post_json, send};
use edumentor::config::GenerationMode;

const SESSION_KEY: &str = "sk-session";
const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-image";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {SESSION_KEY}"))
}

async fn fake_chat(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    let prompt = body["messages"][1]["content"].as_str().unwrap_or_default();
    let content = if prompt.contains("trắc nghiệm") {
        json!({
            "questions": [{
                "question": "2 + 2 = ?",
                "options": ["3", "4", "5", "6"],
                "correct_answer": 1,
                "explanation": "Phép cộng cơ bản"
            }]
        })
    } else {
        json!({
            "title": "Bài giảng từ mô hình",
            "outline": ["Mở đầu", "Kết luận"],
            "content": "Nội dung do mô hình tạo",
            "key_points": ["Ý chính"],
            "estimated_time": "40 phút"
        })
    };

    // 模拟模型把 JSON 包在代码块里返回
    let fenced = format!("```json\n{content}\n```");
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": fenced } }]
    }))
    .into_response()
}

async fn fake_image(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    Json(json!({
        "artifacts": [{ "base64": STANDARD.encode(FAKE_PNG), "seed": 1, "finishReason": "SUCCESS" }]
    }))
    .into_response()
}

async fn spawn_fake_api() -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_chat))
        .route("/v1/text-to-image", post(fake_image));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn app_against(base: &str, dir: &std::path::Path, fallback: bool) -> Router {
    let mut config = common::test_config(dir);
    config.deepseek_base_url = format!("{base}/v1");
    config.stability_api_url = format!("{base}/v1/text-to-image");
    config.generation_fallback = fallback;
    common::build_app_with(config).await
}

async fn set_keys(app: &Router, token: &str, key: &str) {
    let (status, _) = send(
        app,
        axum::http::Method::PUT,
        "/api/session/api-keys",
        Some(token),
        Some(json!({ "deepseek_api_key": key, "stability_api_key": key })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn session_key_switches_to_remote_generation() {
    let base = spawn_fake_api().await;
    let dir = tempfile::tempdir().unwrap();
    let app = app_against(&base, dir.path(), true).await;
    let token = login_as(&app, "giaovien").await;
    set_keys(&app, &token, SESSION_KEY).await;

    let (status, json) = post_json(
        &app,
        "/api/lessons/outline",
        &token,
        json!({ "topic": "Số học", "subject": "Toán" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resp_data"]["source"], "remote");
    assert_eq!(json["resp_data"]["document"]["title"], "Bài giảng từ mô hình");

    let (status, json) = post_json(
        &app,
        "/api/quizzes",
        &token,
        json!({ "topic": "Số học", "count": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resp_data"]["source"], "remote");
    assert_eq!(json["resp_data"]["questions"][0]["correct_answer"], 1);
}

#[tokio::test]
async fn remote_illustration_is_stored_as_png() {
    let base = spawn_fake_api().await;
    let dir = tempfile::tempdir().unwrap();
    let app = app_against(&base, dir.path(), true).await;
    let token = login_as(&app, "giaovien").await;
    set_keys(&app, &token, SESSION_KEY).await;

    let (status, json) = post_json(
        &app,
        "/api/illustrations",
        &token,
        json!({ "topic": "Tam giác", "prompt": "a right triangle", "lesson_id": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let data = &json["resp_data"];
    assert_eq!(data["source"], "remote");
    assert!(data["image"].as_str().unwrap().starts_with("data:image/png;base64,"));

    let path = data["image_path"].as_str().unwrap();
    assert!(path.ends_with(".png"));
    assert_eq!(std::fs::read(path).unwrap(), FAKE_PNG);
}

#[tokio::test]
async fn remote_failure_falls_back_to_template() {
    let base = spawn_fake_api().await;
    let dir = tempfile::tempdir().unwrap();
    let app = app_against(&base, dir.path(), true).await;
    let token = login_as(&app, "giaovien").await;
    set_keys(&app, &token, "sk-wrong").await;

    let (status, json) = post_json(
        &app,
        "/api/lessons/outline",
        &token,
        json!({ "topic": "Số học", "subject": "Toán" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resp_data"]["source"], "fallback");
    assert_eq!(json["resp_data"]["document"]["title"], "Bài học về Số học");
}

#[tokio::test]
async fn remote_failure_without_fallback_is_a_gateway_error() {
    let base = spawn_fake_api().await;
    let dir = tempfile::tempdir().unwrap();
    let app = app_against(&base, dir.path(), false).await;
    let token = login_as(&app, "giaovien").await;
    set_keys(&app, &token, "sk-wrong").await;

    let (status, json) = post_json(
        &app,
        "/api/quizzes",
        &token,
        json!({ "topic": "Số học" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], 2001);

    // 失败的生成不会覆盖会话里的测验
    let (status, _) = get(&app, "/api/quizzes/current", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remote_mode_without_any_key_is_rejected_unless_fallback() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = common::test_config(dir.path());
    config.generation_mode = GenerationMode::Remote;
    config.generation_fallback = false;
    let app = common::build_app_with(config).await;
    let token = login_as(&app, "giaovien").await;

    let (status, json) = post_json(
        &app,
        "/api/lessons/outline",
        &token,
        json!({ "topic": "Số học", "subject": "Toán" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["msg"].as_str().unwrap().contains("missing API key"));

    let mut config = common::test_config(dir.path());
    config.generation_mode = GenerationMode::Remote;
    let app = common::build_app_with(config).await;
    let token = login_as(&app, "giaovien").await;

    let (status, json) = post_json(
        &app,
        "/api/lessons/outline",
        &token,
        json!({ "topic": "Số học", "subject": "Toán" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resp_data"]["source"], "fallback");
}
