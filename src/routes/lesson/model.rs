use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::require_non_empty;

pub const DURATION_RANGE: std::ops::RangeInclusive<u32> = 15..=120;

/// 生成课程大纲
#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    pub topic: String,
    pub subject: String,
    pub grade_level: Option<String>,
    /// 课时（分钟），覆盖模板中的预计时长
    pub duration_minutes: Option<u32>,
}

impl OutlineRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("topic", &self.topic)?;
        require_non_empty("subject", &self.subject)?;
        if let Some(minutes) = self.duration_minutes {
            if !DURATION_RANGE.contains(&minutes) {
                return Err(AppError::Validation(
                    "课时必须在15到120分钟之间".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveLessonRequest {
    pub title: String,
    pub subject: String,
    pub content: String,
    pub outline: Vec<String>,
}

impl SaveLessonRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("title", &self.title)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveLessonResponse {
    pub lesson_id: i64,
}
