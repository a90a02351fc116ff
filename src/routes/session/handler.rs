use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    routes::current_session,
    utils::{Claims, success_to_api_response},
};

use super::model::{ApiKeysRequest, SessionInfo, apply_key};

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let session = current_session(&state, &claims).await?;
    Ok((
        StatusCode::OK,
        success_to_api_response(SessionInfo::from(&session)),
    ))
}

/// 设置会话级 API Key，只保存在内存
#[axum::debug_handler]
pub async fn set_api_keys(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ApiKeysRequest>,
) -> Result<impl IntoResponse, AppError> {
    let info = state
        .sessions
        .update(&claims.sid, |session| {
            apply_key(&mut session.api_keys.deepseek, req.deepseek_api_key);
            apply_key(&mut session.api_keys.stability, req.stability_api_key);
            SessionInfo::from(&*session)
        })
        .await
        .ok_or(AppError::Unauthorized)?;

    tracing::info!("Updated API keys for session {}", claims.sid);
    Ok((StatusCode::OK, success_to_api_response(info)))
}
