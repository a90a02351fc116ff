// 课程实体
// outline 在库中以 JSON 字符串数组保存

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 课程数据库实体，对应 lessons 表的一行
#[derive(Debug, Clone, FromRow)]
pub struct LessonEntity {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub content: String,
    /// 序列化后的大纲
    pub outline: String,
    pub created_at: DateTime<Utc>,
}

/// 对外使用的课程，大纲已反序列化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub outline: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<LessonEntity> for Lesson {
    type Error = serde_json::Error;

    fn try_from(entity: LessonEntity) -> Result<Self, Self::Error> {
        let outline = serde_json::from_str(&entity.outline)?;
        Ok(Lesson {
            id: entity.id,
            title: entity.title,
            subject: entity.subject,
            content: entity.content,
            outline,
            created_at: entity.created_at,
        })
    }
}
