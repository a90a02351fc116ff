use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionContext;

/// 会话概况，API Key 只返回是否已设置
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub has_current_lesson: bool,
    pub has_current_quiz: bool,
    pub has_deepseek_key: bool,
    pub has_stability_key: bool,
}

impl From<&SessionContext> for SessionInfo {
    fn from(session: &SessionContext) -> Self {
        SessionInfo {
            user_id: session.user_id,
            username: session.username.clone(),
            created_at: session.created_at,
            expires_at: session.expires_at,
            has_current_lesson: session.current_lesson.is_some(),
            has_current_quiz: session.current_quiz.is_some(),
            has_deepseek_key: session.api_keys.deepseek.is_some(),
            has_stability_key: session.api_keys.stability.is_some(),
        }
    }
}

/// 字段缺省表示不修改，空字符串表示清除
#[derive(Debug, Deserialize)]
pub struct ApiKeysRequest {
    pub deepseek_api_key: Option<String>,
    pub stability_api_key: Option<String>,
}

pub(crate) fn apply_key(slot: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update {
        let value = value.trim();
        *slot = (!value.is_empty()).then(|| value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_updates_set_keep_and_clear() {
        let mut slot = None;

        apply_key(&mut slot, Some(" sk-1 ".into()));
        assert_eq!(slot.as_deref(), Some("sk-1"));

        apply_key(&mut slot, None);
        assert_eq!(slot.as_deref(), Some("sk-1"));

        apply_key(&mut slot, Some(String::new()));
        assert!(slot.is_none());
    }
}
