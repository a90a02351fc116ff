pub mod illustration;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod user;

use crate::{AppState, error::AppError, session::SessionContext, utils::Claims};

/// 取出当前请求对应的会话
pub(crate) async fn current_session(
    state: &AppState,
    claims: &Claims,
) -> Result<SessionContext, AppError> {
    state
        .sessions
        .get(&claims.sid)
        .await
        .ok_or(AppError::Unauthorized)
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} 不能为空")));
    }
    Ok(())
}
