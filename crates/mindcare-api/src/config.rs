//! Runtime configuration from environment variables. Empty values count as
//! unset.

use std::path::PathBuf;

use axum::http::HeaderValue;
use mindcare_notify::mailer::SmtpSettings;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroqSettings {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    /// `None` leaves the chat model disconnected; chat replies fall back to
    /// a fixed message.
    pub groq: Option<GroqSettings>,
    /// `None` disables email delivery.
    pub smtp: Option<SmtpSettings>,
    /// JSON recipient directory. Without it every report goes to the sender.
    pub recipients_path: Option<PathBuf>,
    /// Front-end files served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let groq = get("GROQ_API_KEY").map(|api_key| GroqSettings {
            api_key,
            model: get("GROQ_MODEL"),
            base_url: get("GROQ_BASE_URL"),
        });

        let smtp_username = get("SMTP_USERNAME");
        let sender = get("MINDCARE_SENDER");
        let smtp = if smtp_username.is_some() || sender.is_some() {
            Some(SmtpSettings {
                server: get("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                port: parse_port("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
                username: smtp_username,
                password: get("SMTP_PASSWORD"),
                sender,
            })
        } else {
            None
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_port("PORT", get("PORT"), DEFAULT_PORT)?,
            allowed_origins: parse_origins(get("ALLOWED_ORIGINS"))?,
            groq,
            smtp,
            recipients_path: get("MINDCARE_RECIPIENTS").map(PathBuf::from),
            static_dir: get("MINDCARE_STATIC_DIR").map(PathBuf::from),
            log_format: parse_log_format(get("MINDCARE_LOG_FORMAT"))?,
        })
    }
}

fn parse_port(key: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }
        }),
    }
}

fn parse_origins(value: Option<String>) -> Result<AllowedOrigins, ConfigError> {
    let Some(raw) = value else {
        return Ok(AllowedOrigins::Any);
    };
    if raw.trim() == "*" {
        return Ok(AllowedOrigins::Any);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                key: "ALLOWED_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}

fn parse_log_format(value: Option<String>) -> Result<LogFormat, ConfigError> {
    match value.as_deref().map(str::trim) {
        None => Ok(LogFormat::Json),
        Some(v) if v.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
        Some(v) if v.eq_ignore_ascii_case("pretty") => Ok(LogFormat::Pretty),
        Some(v) => Err(ConfigError::Invalid {
            key: "MINDCARE_LOG_FORMAT",
            value: v.to_string(),
            reason: "expected json or pretty".to_string(),
        }),
    }
}
