// 远程生成客户端
// 内容走 OpenAI 兼容的 chat completions 接口（DeepSeek），插图走 Stability 文生图接口

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::illustration::{PNG_MIME, to_data_uri};
use super::outline::outline_prompt;
use super::quiz::{quiz_prompt, validate_questions};
use super::{LessonDocument, QuestionRecord};
use crate::error::GenerationError;

pub const DEEPSEEK_MODEL: &str = "deepseek-chat";

const SYSTEM_PROMPT: &str =
    "Bạn là trợ lý soạn giáo án. Luôn trả lời bằng một đối tượng JSON hợp lệ.";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct QuizEnvelope {
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct TextToImageResponse {
    artifacts: Vec<ImageArtifact>,
}

#[derive(Debug, Deserialize)]
struct ImageArtifact {
    base64: String,
}

/// 课程内容远程生成客户端
#[derive(Debug, Clone)]
pub struct RemoteContentClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteContentClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn generate_outline(
        &self,
        topic: &str,
        subject: &str,
        grade_level: &str,
    ) -> Result<LessonDocument, GenerationError> {
        let content = self
            .chat(&outline_prompt(topic, subject, grade_level))
            .await?;
        parse_json_content(&content)
    }

    pub async fn generate_quiz(
        &self,
        topic: &str,
        count: usize,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let content = self.chat(&quiz_prompt(topic, count)).await?;
        let envelope: QuizEnvelope = parse_json_content(&content)?;
        validate_questions(envelope.questions, count).map_err(GenerationError::MalformedResponse)
    }

    async fn chat(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": DEEPSEEK_MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "response_format": { "type": "json_object" },
            "stream": false,
        });

        tracing::debug!("Requesting chat completion from {}", url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status(status, text));
        }

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::MalformedResponse("no choices in completion".into()))
    }
}

/// 插图远程生成客户端
#[derive(Debug, Clone)]
pub struct RemoteImageClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl RemoteImageClient {
    pub fn new(http: reqwest::Client, api_url: &str, api_key: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// 返回 PNG 的 data URI
    pub async fn generate_illustration(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = json!({
            "text_prompts": [{ "text": prompt }],
            "cfg_scale": 7,
            "height": 1024,
            "width": 1024,
            "samples": 1,
            "steps": 30,
        });

        tracing::debug!("Requesting illustration from {}", self.api_url);
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status(status, text));
        }

        let image: TextToImageResponse = response.json().await?;
        let artifact = image
            .artifacts
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::MalformedResponse("no artifacts returned".into()))?;

        // 先校验 base64，避免把坏数据写进 data URI
        let bytes = STANDARD
            .decode(&artifact.base64)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
        Ok(to_data_uri(PNG_MIME, &bytes))
    }
}

/// 解析模型返回的 JSON 内容，兼容包在 ```json 代码块里的情况
pub fn parse_json_content<T: DeserializeOwned>(content: &str) -> Result<T, GenerationError> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced.trim())
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}
