use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 3000;
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// What to do when a province has no matching activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyActivitiesPolicy {
    /// Render the activities placeholder and keep going.
    Placeholder,
    /// Answer 404 without calling the completion service.
    Reject,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub supabase_url: Url,
    pub supabase_service_role_key: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub completion_timeout: Duration,
    pub empty_activities: EmptyActivitiesPolicy,
}

// Credentials stay out of Debug output.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("supabase_url", &self.supabase_url.as_str())
            .field("supabase_service_role_key", &mask_secret(&self.supabase_service_role_key))
            .field("openai_api_key", &mask_secret(&self.openai_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("completion_timeout", &self.completion_timeout)
            .field("empty_activities", &self.empty_activities)
            .finish()
    }
}

impl AppConfig {
    /// Reads the process environment. Any missing credential is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = required(&lookup, "SUPABASE_URL")?;
        let supabase_service_role_key = required(&lookup, "SUPABASE_SERVICE_ROLE_KEY")?;
        let openai_api_key = required(&lookup, "OPENAI_API_KEY")?;

        let supabase_url = Url::parse(&supabase_url).map_err(|e| ConfigError::Invalid {
            name: "SUPABASE_URL",
            reason: e.to_string(),
        })?;
        if !matches!(supabase_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "SUPABASE_URL",
                reason: format!("unsupported scheme '{}'", supabase_url.scheme()),
            });
        }

        let port = match optional(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => PORT,
        };

        let completion_timeout_secs = match optional(&lookup, "COMPLETION_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: "COMPLETION_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "COMPLETION_TIMEOUT_SECS",
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_COMPLETION_TIMEOUT_SECS,
        };

        let empty_activities = match optional(&lookup, "REQUIRE_ACTIVITIES") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => EmptyActivitiesPolicy::Reject,
                "0" | "false" | "no" | "off" => EmptyActivitiesPolicy::Placeholder,
                other => {
                    return Err(ConfigError::Invalid {
                        name: "REQUIRE_ACTIVITIES",
                        reason: format!("expected a boolean, got '{}'", other),
                    })
                }
            },
            None => EmptyActivitiesPolicy::Placeholder,
        };

        Ok(Self {
            host: optional(&lookup, "HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            supabase_url,
            supabase_service_role_key,
            openai_api_key,
            openai_base_url: optional(&lookup, "OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: optional(&lookup, "OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            completion_timeout: Duration::from_secs(completion_timeout_secs),
            empty_activities,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
