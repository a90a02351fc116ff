// 会话模块
// 每个登录会话一份上下文：当前课程草稿、当前测验和只存在内存里的 API Key。
// 登录时创建，登出时清除，过期会话在创建新会话时顺带清理。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::generator::{ContentSource, LessonDocument, QuestionRecord};

/// 会话级 API Key，不落库也不回显
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub deepseek: Option<String>,
    pub stability: Option<String>,
}

/// 当前课程草稿
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonDraft {
    pub topic: String,
    pub subject: String,
    pub grade_level: String,
    pub source: ContentSource,
    pub document: LessonDocument,
}

/// 当前测验
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizDraft {
    pub topic: String,
    pub source: ContentSource,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub user_id: i64,
    pub username: String,
    pub current_lesson: Option<LessonDraft>,
    pub current_quiz: Option<QuizDraft>,
    pub api_keys: ApiKeys,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// 内存会话存储
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionContext>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建会话并返回其上下文
    pub async fn create(&self, user_id: i64, username: &str, ttl: Duration) -> SessionContext {
        let now = Utc::now();
        // 超出 chrono 表示范围的 TTL 视为永不过期
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let session = SessionContext {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            username: username.to_string(),
            current_lesson: None,
            current_quiz: None,
            api_keys: ApiKeys::default(),
            created_at: now,
            expires_at,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired(now));
        sessions.insert(session.session_id.clone(), session.clone());

        tracing::debug!("Created session {} for {}", session.session_id, username);
        session
    }

    /// 获取未过期的会话快照
    pub async fn get(&self, session_id: &str) -> Option<SessionContext> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .filter(|s| !s.is_expired(Utc::now()))
            .cloned()
    }

    /// 在会话上执行修改，会话不存在或已过期时返回 None
    pub async fn update<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut SessionContext) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions
            .get_mut(session_id)
            .filter(|s| !s.is_expired(Utc::now()))
            .map(f)
    }

    /// 删除会话，返回会话是否存在
    pub async fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        if removed {
            tracing::debug!("Removed session {}", session_id);
        }
        removed
    }
}
