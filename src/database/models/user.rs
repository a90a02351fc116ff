use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// 用户账号实体，密码只保存 bcrypt 哈希
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
