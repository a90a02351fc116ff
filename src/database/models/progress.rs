// 学习进度实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 完成状态，库中以 snake_case 文本保存
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// 学生在某一课程上的一次学习记录
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgressRecord {
    pub id: i64,
    pub student_name: String,
    pub lesson_id: i64,
    pub quiz_score: i32,
    pub completion_status: CompletionStatus,
    /// 学习时长，单位分钟
    pub study_time: i32,
    pub created_at: DateTime<Utc>,
}

/// 进度统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProgressSummary {
    pub total_records: i64,
    /// 没有记录时为空
    pub average_score: Option<f64>,
    pub total_study_time: i64,
    /// 状态为 completed 的不同课程数
    pub completed_lessons: i64,
}
