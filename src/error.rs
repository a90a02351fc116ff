use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::utils::{error_codes, error_to_api_response};

/// 持久层错误，只有 DuplicateUsername 需要调用方单独处理
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    DuplicateUsername,
    #[error("malformed lesson outline: {0}")]
    MalformedOutline(#[from] serde_json::Error),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername
            }
            _ => StoreError::Database(err),
        }
    }
}

/// 内容生成错误（仅远程策略会产生）
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("missing API key for remote generation")]
    MissingApiKey,
    #[error("request to generation API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation API returned {0}: {1}")]
    Status(reqwest::StatusCode, String),
    #[error("unexpected generation API response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    Validation(String),
    UserExists,
    AuthFailed,
    NotFound(String),
    Generation(GenerationError),
    Store(StoreError),
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername => AppError::UserExists,
            other => AppError::Store(other),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                error_codes::AUTH_FAILED,
                "未授权访问".to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, msg)
            }
            AppError::UserExists => (
                StatusCode::CONFLICT,
                error_codes::USER_EXISTS,
                "用户名已存在".to_string(),
            ),
            AppError::AuthFailed => (
                StatusCode::UNAUTHORIZED,
                error_codes::AUTH_FAILED,
                "用户名或密码错误".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, msg),
            AppError::Generation(e) => (
                StatusCode::BAD_GATEWAY,
                error_codes::GENERATION_FAILED,
                e.to_string(),
            ),
            AppError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                msg,
            ),
        };

        (status, error_to_api_response::<()>(code, message)).into_response()
    }
}
