use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    utils::{Claims, generate_token, success_to_api_response},
};

use super::model::{
    LoginRequest, LoginResponse, LogoutResponse, RegisterRequest, RegisterResponse,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let user_id = state.users.register_user(&req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        success_to_api_response(RegisterResponse {
            user_id,
            username: req.username,
        }),
    ))
}

/// 登录成功后创建会话，token 里带会话ID
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = state.users.authenticate(&req.username, &req.password).await? else {
        tracing::info!("Failed login attempt for {}", req.username);
        return Err(AppError::AuthFailed);
    };

    let session = state
        .sessions
        .create(user.id, &user.username, state.config.jwt_expiration())
        .await;

    let (token, expires_at) = match generate_token(&user.username, &session.session_id, &state.config)
    {
        Ok(token) => token,
        Err(e) => {
            state.sessions.remove(&session.session_id).await;
            return Err(AppError::Internal(format!("生成令牌失败: {e}")));
        }
    };

    tracing::info!("User {} logged in", user.username);
    Ok((
        StatusCode::OK,
        success_to_api_response(LoginResponse {
            user_id: user.id,
            username: user.username,
            token,
            expires_at,
        }),
    ))
}

/// 登出即清除会话
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    state.sessions.remove(&claims.sid).await;
    tracing::info!("User {} logged out", claims.sub);

    (StatusCode::OK, success_to_api_response(LogoutResponse {}))
}
