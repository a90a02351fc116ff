use serde::{Deserialize, Serialize};

use crate::database::CompletionStatus;
use crate::error::AppError;
use crate::routes::require_non_empty;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub student_name: String,
    pub lesson_id: i64,
    pub quiz_score: i32,
    pub completion_status: CompletionStatus,
    /// 分钟
    pub study_time: i32,
}

impl ProgressRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("student_name", &self.student_name)?;
        if !(0..=100).contains(&self.quiz_score) {
            return Err(AppError::Validation("分数必须在0到100之间".to_string()));
        }
        if self.study_time < 0 {
            return Err(AppError::Validation("学习时长不能为负数".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveProgressResponse {
    pub progress_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub student_name: Option<String>,
}

impl ProgressQuery {
    pub fn student_name(&self) -> Option<&str> {
        self.student_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
