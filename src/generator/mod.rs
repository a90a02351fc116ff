//! 课程内容生成
//!
//! 纯函数生成器（大纲、测验、插图）加上可切换的生成策略：
//! 模板策略直接调用纯函数，远程策略调用外部 API，失败时是否回退到模板由配置决定。

pub mod illustration;
pub mod outline;
pub mod quiz;
pub mod remote;
pub mod strategy;

use serde::{Deserialize, Serialize};

pub use illustration::{create_placeholder_svg, decode_data_uri, generate_illustration};
pub use outline::{DEFAULT_GRADE_LEVEL, generate_outline};
pub use quiz::generate_quiz;
pub use strategy::{ContentService, ContentStrategy, Generated, IllustrationStrategy};

/// 生成的课程文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDocument {
    pub title: String,
    pub outline: Vec<String>,
    pub content: String,
    pub key_points: Vec<String>,
    pub estimated_time: String,
}

/// 单道选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    /// options 中正确答案的下标
    pub correct_answer: usize,
    pub explanation: String,
}

/// 生成结果的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Template,
    Remote,
    /// 远程生成失败后回退到模板
    Fallback,
}
