use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;
/// Ten years.
const MAX_REMINDER_LEAD_MINUTES: i64 = 525_600 * 10;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err("expected 'pretty' or 'json'".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Browser origin allowed by CORS. Session cookies are marked secure when it is https.
    pub client_url: String,

    pub session_ttl_days: i64,
    /// How long before a rehearsal starts its reminder goes out.
    pub reminder_lead: chrono::Duration,

    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let session_ttl_days: i64 = parse_or(&lookup, "SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?;
        if session_ttl_days <= 0 {
            return Err(invalid("SESSION_TTL_DAYS", session_ttl_days, "must be positive").into());
        }

        let reminder_lead_minutes: i64 =
            parse_or(&lookup, "REMINDER_LEAD_MINUTES", DEFAULT_REMINDER_LEAD_MINUTES)?;
        if reminder_lead_minutes <= 0 {
            return Err(invalid(
                "REMINDER_LEAD_MINUTES",
                reminder_lead_minutes,
                "must be positive",
            )
            .into());
        }
        if reminder_lead_minutes > MAX_REMINDER_LEAD_MINUTES {
            return Err(invalid(
                "REMINDER_LEAD_MINUTES",
                reminder_lead_minutes,
                "must be at most ten years",
            )
            .into());
        }

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            client_url: lookup("CLIENT_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            session_ttl_days,
            reminder_lead: chrono::Duration::minutes(reminder_lead_minutes),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: parse_or(&lookup, "LOG_FORMAT", LogFormat::Pretty)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cookie_secure(&self) -> bool {
        self.client_url.starts_with("https://")
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

fn invalid(name: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
