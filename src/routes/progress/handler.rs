use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, error::AppError, utils::success_to_api_response};

use super::model::{ProgressQuery, ProgressRequest, SaveProgressResponse};

#[axum::debug_handler]
pub async fn save_progress(
    State(state): State<AppState>,
    Json(req): Json<ProgressRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let progress_id = state
        .progress
        .save_progress(
            req.student_name.trim(),
            req.lesson_id,
            req.quiz_score,
            req.completion_status,
            req.study_time,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        success_to_api_response(SaveProgressResponse { progress_id }),
    ))
}

#[axum::debug_handler]
pub async fn list_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.progress.list_progress(query.student_name()).await?;
    Ok((StatusCode::OK, success_to_api_response(records)))
}

#[axum::debug_handler]
pub async fn progress_summary(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state.progress.summary(query.student_name()).await?;
    Ok((StatusCode::OK, success_to_api_response(summary)))
}
