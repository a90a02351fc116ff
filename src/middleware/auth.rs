use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};

use crate::{AppState, error::AppError, utils::verify_token};

/// 校验 Bearer token 并确认会话仍然有效，通过后把 Claims 放进请求扩展
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // 缺少头部或不是 Bearer 方案都按未授权处理
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|e| {
        tracing::debug!("Rejected authorization header: {}", e);
        AppError::Unauthorized
    })?;

    let claims = verify_token(bearer.token(), &state.config).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AppError::Unauthorized
    })?;

    // 登出后的 token 在过期前也不能再用
    if state.sessions.get(&claims.sid).await.is_none() {
        tracing::debug!("Session {} is gone", claims.sid);
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
