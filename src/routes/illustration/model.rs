use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::generator::ContentSource;
use crate::routes::require_non_empty;

#[derive(Debug, Deserialize)]
pub struct IllustrationRequest {
    pub topic: String,
    /// 缺省时使用 "educational illustration for {topic}"
    pub prompt: Option<String>,
    /// 指定课程时会把图片写入磁盘并记录
    pub lesson_id: Option<i64>,
}

impl IllustrationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("topic", &self.topic)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IllustrationResponse {
    pub source: ContentSource,
    /// data URI
    pub image: String,
    pub image_id: Option<i64>,
    pub image_path: Option<String>,
}
