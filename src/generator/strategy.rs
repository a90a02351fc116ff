// 生成策略
// 模板 / 远程两种实现，按配置和会话里的 API Key 选择，远程失败时按配置回退到模板

use serde::Serialize;

use super::illustration::generate_illustration;
use super::outline::generate_outline;
use super::quiz::generate_quiz;
use super::remote::{RemoteContentClient, RemoteImageClient};
use super::{ContentSource, LessonDocument, QuestionRecord};
use crate::config::{Config, GenerationMode};
use crate::error::GenerationError;

/// 带来源标记的生成结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated<T> {
    pub source: ContentSource,
    pub value: T,
}

/// 课程大纲和测验的生成策略
#[derive(Debug, Clone)]
pub enum ContentStrategy {
    Template,
    Remote(RemoteContentClient),
}

impl ContentStrategy {
    pub fn source(&self) -> ContentSource {
        match self {
            ContentStrategy::Template => ContentSource::Template,
            ContentStrategy::Remote(_) => ContentSource::Remote,
        }
    }

    pub async fn generate_outline(
        &self,
        topic: &str,
        subject: &str,
        grade_level: &str,
    ) -> Result<LessonDocument, GenerationError> {
        match self {
            ContentStrategy::Template => Ok(generate_outline(topic, subject, grade_level)),
            ContentStrategy::Remote(client) => {
                client.generate_outline(topic, subject, grade_level).await
            }
        }
    }

    pub async fn generate_quiz(
        &self,
        topic: &str,
        count: usize,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        match self {
            ContentStrategy::Template => Ok(generate_quiz(topic, count)),
            ContentStrategy::Remote(client) => client.generate_quiz(topic, count).await,
        }
    }
}

/// 插图生成策略
#[derive(Debug, Clone)]
pub enum IllustrationStrategy {
    Placeholder,
    Remote(RemoteImageClient),
}

impl IllustrationStrategy {
    pub fn source(&self) -> ContentSource {
        match self {
            IllustrationStrategy::Placeholder => ContentSource::Template,
            IllustrationStrategy::Remote(_) => ContentSource::Remote,
        }
    }

    pub async fn generate_illustration(
        &self,
        prompt: &str,
        topic: &str,
    ) -> Result<String, GenerationError> {
        match self {
            IllustrationStrategy::Placeholder => Ok(generate_illustration(prompt, topic)),
            IllustrationStrategy::Remote(client) => client.generate_illustration(prompt).await,
        }
    }
}

/// 内容生成服务，持有远程客户端所需的配置
#[derive(Debug, Clone)]
pub struct ContentService {
    http: reqwest::Client,
    mode: GenerationMode,
    fallback: bool,
    deepseek_base_url: String,
    deepseek_api_key: Option<String>,
    stability_api_url: String,
    stability_api_key: Option<String>,
}

impl ContentService {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            mode: config.generation_mode,
            fallback: config.generation_fallback,
            deepseek_base_url: config.deepseek_base_url.clone(),
            deepseek_api_key: config.deepseek_api_key.clone(),
            stability_api_url: config.stability_api_url.clone(),
            stability_api_key: config.stability_api_key.clone(),
        })
    }

    /// 选择内容策略：配置为远程模式或会话提供了 Key 时走远程
    pub fn content_strategy(
        &self,
        session_key: Option<&str>,
    ) -> Result<ContentStrategy, GenerationError> {
        if self.mode == GenerationMode::Template && session_key.is_none() {
            return Ok(ContentStrategy::Template);
        }

        let api_key = session_key
            .or(self.deepseek_api_key.as_deref())
            .ok_or(GenerationError::MissingApiKey)?;
        Ok(ContentStrategy::Remote(RemoteContentClient::new(
            self.http.clone(),
            &self.deepseek_base_url,
            api_key,
        )))
    }

    pub fn illustration_strategy(
        &self,
        session_key: Option<&str>,
    ) -> Result<IllustrationStrategy, GenerationError> {
        if self.mode == GenerationMode::Template && session_key.is_none() {
            return Ok(IllustrationStrategy::Placeholder);
        }

        let api_key = session_key
            .or(self.stability_api_key.as_deref())
            .ok_or(GenerationError::MissingApiKey)?;
        Ok(IllustrationStrategy::Remote(RemoteImageClient::new(
            self.http.clone(),
            &self.stability_api_url,
            api_key,
        )))
    }

    pub async fn outline(
        &self,
        session_key: Option<&str>,
        topic: &str,
        subject: &str,
        grade_level: &str,
    ) -> Result<Generated<LessonDocument>, GenerationError> {
        let template = || generate_outline(topic, subject, grade_level);
        match self.content_strategy(session_key) {
            Ok(strategy) => {
                let result = strategy.generate_outline(topic, subject, grade_level).await;
                self.resolve(strategy.source(), result, template)
            }
            Err(e) => self.resolve(ContentSource::Remote, Err(e), template),
        }
    }

    pub async fn quiz(
        &self,
        session_key: Option<&str>,
        topic: &str,
        count: usize,
    ) -> Result<Generated<Vec<QuestionRecord>>, GenerationError> {
        let template = || generate_quiz(topic, count);
        match self.content_strategy(session_key) {
            Ok(strategy) => {
                let result = strategy.generate_quiz(topic, count).await;
                self.resolve(strategy.source(), result, template)
            }
            Err(e) => self.resolve(ContentSource::Remote, Err(e), template),
        }
    }

    pub async fn illustration(
        &self,
        session_key: Option<&str>,
        prompt: &str,
        topic: &str,
    ) -> Result<Generated<String>, GenerationError> {
        let template = || generate_illustration(prompt, topic);
        match self.illustration_strategy(session_key) {
            Ok(strategy) => {
                let result = strategy.generate_illustration(prompt, topic).await;
                self.resolve(strategy.source(), result, template)
            }
            Err(e) => self.resolve(ContentSource::Remote, Err(e), template),
        }
    }

    fn resolve<T>(
        &self,
        source: ContentSource,
        result: Result<T, GenerationError>,
        template: impl FnOnce() -> T,
    ) -> Result<Generated<T>, GenerationError> {
        match result {
            Ok(value) => Ok(Generated { source, value }),
            Err(e) if self.fallback => {
                tracing::warn!("Remote generation failed, falling back to template: {}", e);
                Ok(Generated {
                    source: ContentSource::Fallback,
                    value: template(),
                })
            }
            Err(e) => {
                tracing::error!("Remote generation failed: {}", e);
                Err(e)
            }
        }
    }
}
