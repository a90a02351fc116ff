// 学习进度存储操作

use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::progress::{CompletionStatus, ProgressRecord, ProgressSummary};
use crate::error::StoreError;

#[derive(Clone)]
pub struct ProgressOperation {
    pool: SqlitePool,
}

impl ProgressOperation {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 记录一次学习进度，不校验课程是否存在
    pub async fn save_progress(
        &self,
        student_name: &str,
        lesson_id: i64,
        quiz_score: i32,
        completion_status: CompletionStatus,
        study_time: i32,
    ) -> Result<i64, StoreError> {
        let (progress_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO student_progress
                (student_name, lesson_id, quiz_score, completion_status, study_time, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(student_name)
        .bind(lesson_id)
        .bind(quiz_score)
        .bind(completion_status)
        .bind(study_time)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Saved progress {} for {} on lesson {}",
            progress_id,
            student_name,
            lesson_id
        );
        Ok(progress_id)
    }

    /// 列出进度记录，可按学生过滤，新记录在前
    pub async fn list_progress(
        &self,
        student_name: Option<&str>,
    ) -> Result<Vec<ProgressRecord>, StoreError> {
        let records = sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT id, student_name, lesson_id, quiz_score, completion_status, study_time, created_at
            FROM student_progress
            WHERE ?1 IS NULL OR student_name = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(student_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn summary(&self, student_name: Option<&str>) -> Result<ProgressSummary, StoreError> {
        let summary = sqlx::query_as::<_, ProgressSummary>(
            r#"
            SELECT
                COUNT(*) AS total_records,
                AVG(quiz_score) AS average_score,
                COALESCE(SUM(study_time), 0) AS total_study_time,
                COUNT(DISTINCT CASE WHEN completion_status = 'completed' THEN lesson_id END)
                    AS completed_lessons
            FROM student_progress
            WHERE ?1 IS NULL OR student_name = ?1
            "#,
        )
        .bind(student_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_pool, create_schema};

    async fn progress() -> ProgressOperation {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        create_schema(&pool).await.unwrap();
        ProgressOperation::new(pool)
    }

    #[tokio::test]
    async fn progress_for_missing_lesson_is_accepted() {
        let store = progress().await;
        let id = store
            .save_progress("An", 999, 80, CompletionStatus::InProgress, 30)
            .await
            .unwrap();

        let records = store.list_progress(None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].lesson_id, 999);
        assert_eq!(records[0].completion_status, CompletionStatus::InProgress);
    }

    #[tokio::test]
    async fn list_filters_by_student() {
        let store = progress().await;
        store
            .save_progress("An", 1, 70, CompletionStatus::Completed, 20)
            .await
            .unwrap();
        store
            .save_progress("Bình", 1, 90, CompletionStatus::Completed, 25)
            .await
            .unwrap();

        let records = store.list_progress(Some("Bình")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quiz_score, 90);
    }

    #[tokio::test]
    async fn summary_aggregates_scores_and_completions() {
        let store = progress().await;
        assert_eq!(
            store.summary(None).await.unwrap(),
            ProgressSummary {
                total_records: 0,
                average_score: None,
                total_study_time: 0,
                completed_lessons: 0,
            }
        );

        store
            .save_progress("An", 1, 80, CompletionStatus::Completed, 30)
            .await
            .unwrap();
        store
            .save_progress("An", 1, 100, CompletionStatus::Completed, 15)
            .await
            .unwrap();
        store
            .save_progress("An", 2, 60, CompletionStatus::InProgress, 45)
            .await
            .unwrap();

        let summary = store.summary(Some("An")).await.unwrap();
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.average_score, Some(80.0));
        assert_eq!(summary.total_study_time, 90);
        assert_eq!(summary.completed_lessons, 1);
    }
}
