// 插图记录存储操作

use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::image::GeneratedImage;
use crate::error::StoreError;

#[derive(Clone)]
pub struct ImageOperation {
    pool: SqlitePool,
}

impl ImageOperation {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn save_image(
        &self,
        lesson_id: i64,
        prompt: &str,
        image_path: &str,
    ) -> Result<i64, StoreError> {
        let (image_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO generated_images (lesson_id, prompt, image_path, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(lesson_id)
        .bind(prompt)
        .bind(image_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Recorded image {} for lesson {}", image_id, lesson_id);
        Ok(image_id)
    }

    pub async fn list_images(&self, lesson_id: i64) -> Result<Vec<GeneratedImage>, StoreError> {
        let images = sqlx::query_as::<_, GeneratedImage>(
            r#"
            SELECT id, lesson_id, prompt, image_path, created_at
            FROM generated_images
            WHERE lesson_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(lesson_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }
}
