use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 已生成的插图记录
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedImage {
    pub id: i64,
    pub lesson_id: i64,
    pub prompt: String,
    pub image_path: String,
    pub created_at: DateTime<Utc>,
}
