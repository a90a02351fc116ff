// 课程存储操作

use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::lesson::{Lesson, LessonEntity};
use crate::error::StoreError;

/// 课程存储，处理 lessons 表的插入和查询
#[derive(Clone)]
pub struct LessonOperation {
    pool: SqlitePool,
}

impl LessonOperation {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 保存课程，返回新分配的ID
    pub async fn save_lesson(
        &self,
        title: &str,
        subject: &str,
        content: &str,
        outline: &[String],
    ) -> Result<i64, StoreError> {
        let outline_json = serde_json::to_string(outline)?;

        let (lesson_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO lessons (title, subject, content, outline, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(subject)
        .bind(content)
        .bind(outline_json)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Saved lesson {} ({})", lesson_id, title);
        Ok(lesson_id)
    }

    /// 按创建时间倒序列出全部课程，同一时间戳按ID倒序
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, StoreError> {
        let entities = sqlx::query_as::<_, LessonEntity>(
            r#"
            SELECT id, title, subject, content, outline, created_at
            FROM lessons
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        entities
            .into_iter()
            .map(|entity| Lesson::try_from(entity).map_err(StoreError::from))
            .collect()
    }

    pub async fn find_lesson(&self, lesson_id: i64) -> Result<Option<Lesson>, StoreError> {
        let entity = sqlx::query_as::<_, LessonEntity>(
            r#"
            SELECT id, title, subject, content, outline, created_at
            FROM lessons
            WHERE id = ?1
            "#,
        )
        .bind(lesson_id)
        .fetch_optional(&self.pool)
        .await?;

        entity
            .map(Lesson::try_from)
            .transpose()
            .map_err(StoreError::from)
    }
}
