use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    routes::current_session,
    session::QuizDraft,
    utils::{Claims, success_to_api_response},
};

use super::model::QuizRequest;

/// 生成测验并作为当前测验保存在会话里
#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let session = current_session(&state, &claims).await?;
    let count = req.count();

    let generated = state
        .content
        .quiz(session.api_keys.deepseek.as_deref(), &req.topic, count)
        .await?;

    let quiz = QuizDraft {
        topic: req.topic,
        source: generated.source,
        questions: generated.value,
    };

    state
        .sessions
        .update(&claims.sid, |s| s.current_quiz = Some(quiz.clone()))
        .await
        .ok_or(AppError::Unauthorized)?;

    tracing::debug!("Generated {} questions on {}", count, quiz.topic);
    Ok((StatusCode::OK, success_to_api_response(quiz)))
}

#[axum::debug_handler]
pub async fn current_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = current_session(&state, &claims)
        .await?
        .current_quiz
        .ok_or_else(|| AppError::NotFound("当前没有测验".to_string()))?;

    Ok((StatusCode::OK, success_to_api_response(quiz)))
}
