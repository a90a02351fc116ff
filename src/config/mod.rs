use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 内容生成模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// 本地模板生成
    Template,
    /// 调用远程 API 生成
    Remote,
}

impl GenerationMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => GenerationMode::Remote,
            _ => GenerationMode::Template,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub generation_mode: GenerationMode,
    pub generation_fallback: bool,
    pub deepseek_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub stability_api_key: Option<String>,
    pub stability_api_url: String,
    pub image_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub bcrypt_cost: u32,
}

/// 令牌和会话最长一年
pub const MAX_JWT_EXPIRATION_HOURS: u64 = 24 * 365;

pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_STABILITY_API_URL: &str =
    "https://api.stability.ai/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image";

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: var_or("DATABASE_URL", "sqlite://edumentor.db"),
            server_host: var_or("SERVER_HOST", "0.0.0.0"),
            server_port: var_or("SERVER_PORT", "3000").parse().unwrap_or(3000),
            api_base_uri: var_or("API_BASE_URI", "/api"),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_secs: expiration_secs(&var_or("JWT_EXPIRATION", "24h")),
            generation_mode: GenerationMode::parse(&var_or("GENERATION_MODE", "template")),
            generation_fallback: parse_flag(&var_or("GENERATION_FALLBACK", "true")),
            deepseek_api_key: non_empty_var("DEEPSEEK_API_KEY"),
            deepseek_base_url: var_or("DEEPSEEK_BASE_URL", DEFAULT_DEEPSEEK_BASE_URL),
            stability_api_key: non_empty_var("STABILITY_API_KEY"),
            stability_api_url: var_or("STABILITY_API_URL", DEFAULT_STABILITY_API_URL),
            image_dir: PathBuf::from(var_or("IMAGE_DIR", "generated_images")),
            request_timeout_secs: var_or("REQUEST_TIMEOUT_SECS", "30").parse().unwrap_or(30),
            bcrypt_cost: var_or("BCRYPT_COST", "12")
                .parse::<u32>()
                .unwrap_or(bcrypt::DEFAULT_COST)
                .clamp(4, 31),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// "24h" 或 "24" 形式的小时数转成秒，超过上限按上限处理
fn expiration_secs(value: &str) -> u64 {
    let hours = value
        .trim()
        .trim_end_matches('h')
        .parse::<u64>()
        .unwrap_or(24)
        .min(MAX_JWT_EXPIRATION_HOURS);
    hours * 3600
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
