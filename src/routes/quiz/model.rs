use serde::Deserialize;

use crate::error::AppError;
use crate::routes::require_non_empty;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    pub count: Option<usize>,
}

impl QuizRequest {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_QUESTION_COUNT)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("topic", &self.topic)?;
        if self.count() > MAX_QUESTION_COUNT {
            return Err(AppError::Validation(format!(
                "题目数量不能超过{MAX_QUESTION_COUNT}"
            )));
        }
        Ok(())
    }
}
