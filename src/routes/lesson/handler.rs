use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    generator::{DEFAULT_GRADE_LEVEL, outline::format_duration},
    routes::current_session,
    session::LessonDraft,
    utils::{Claims, success_to_api_response},
};

use super::model::{OutlineRequest, SaveLessonRequest, SaveLessonResponse};

/// 生成大纲并作为当前课程草稿保存在会话里
#[axum::debug_handler]
pub async fn generate_outline(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<OutlineRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let session = current_session(&state, &claims).await?;

    let grade_level = req
        .grade_level
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_GRADE_LEVEL);

    let generated = state
        .content
        .outline(
            session.api_keys.deepseek.as_deref(),
            &req.topic,
            &req.subject,
            grade_level,
        )
        .await?;

    let mut document = generated.value;
    if let Some(minutes) = req.duration_minutes {
        document.estimated_time = format_duration(minutes);
    }

    let draft = LessonDraft {
        topic: req.topic,
        subject: req.subject,
        grade_level: grade_level.to_string(),
        source: generated.source,
        document,
    };

    state
        .sessions
        .update(&claims.sid, |s| s.current_lesson = Some(draft.clone()))
        .await
        .ok_or(AppError::Unauthorized)?;

    tracing::debug!("Generated outline for {} ({:?})", draft.topic, draft.source);
    Ok((StatusCode::OK, success_to_api_response(draft)))
}

#[axum::debug_handler]
pub async fn current_lesson(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let draft = current_session(&state, &claims)
        .await?
        .current_lesson
        .ok_or_else(|| AppError::NotFound("当前没有课程草稿".to_string()))?;

    Ok((StatusCode::OK, success_to_api_response(draft)))
}

/// 保存会话中的课程草稿
#[axum::debug_handler]
pub async fn save_current_lesson(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let draft = current_session(&state, &claims)
        .await?
        .current_lesson
        .ok_or_else(|| AppError::NotFound("当前没有课程草稿".to_string()))?;

    let lesson_id = state
        .lessons
        .save_lesson(
            &draft.document.title,
            &draft.subject,
            &draft.document.content,
            &draft.document.outline,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        success_to_api_response(SaveLessonResponse { lesson_id }),
    ))
}

#[axum::debug_handler]
pub async fn save_lesson(
    State(state): State<AppState>,
    Json(req): Json<SaveLessonRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let lesson_id = state
        .lessons
        .save_lesson(&req.title, &req.subject, &req.content, &req.outline)
        .await?;

    Ok((
        StatusCode::CREATED,
        success_to_api_response(SaveLessonResponse { lesson_id }),
    ))
}

#[axum::debug_handler]
pub async fn list_lessons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lessons = state.lessons.list_lessons().await?;
    Ok((StatusCode::OK, success_to_api_response(lessons)))
}

#[axum::debug_handler]
pub async fn find_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let lesson = state
        .lessons
        .find_lesson(lesson_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("课程 {lesson_id} 不存在")))?;

    Ok((StatusCode::OK, success_to_api_response(lesson)))
}

#[axum::debug_handler]
pub async fn list_lesson_images(
    State(state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let images = state.images.list_images(lesson_id).await?;
    Ok((StatusCode::OK, success_to_api_response(images)))
}
