use serde::{Deserialize, Serialize};

use crate::error::AppError;

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=32;
// bcrypt 只使用前 72 字节
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=72;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !USERNAME_LEN.contains(&self.username.chars().count())
            || !self
                .username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::Validation(
                "用户名须为3到32位，只允许使用字母、数字和下划线".to_string(),
            ));
        }

        if !PASSWORD_LEN.contains(&self.password.len()) {
            return Err(AppError::Validation(
                "密码长度必须在6到72个字节之间".to_string(),
            ));
        }

        Ok(())
    }
}
