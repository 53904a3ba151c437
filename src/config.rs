use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Ordered credential sources; first non-empty value wins. The lowercase
/// name is a legacy spelling still present in older deployments.
const API_KEY_VARS: [&str; 2] = ["GROQ_API_KEY", "key"];

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub api_base: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one is present. Fails with `ConfigError` when no API
    /// credential resolves, so a missing key surfaces at startup rather than
    /// on the first generation request.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = resolve_api_key(|name| env::var(name).ok()).ok_or_else(|| {
            AppError::ConfigError(
                "Missing Groq API key. Set GROQ_API_KEY (or legacy 'key') in the environment or .env"
                    .to_string(),
            )
        })?;

        Ok(Self {
            api_key,
            api_base: env::var("GROQ_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            request_timeout_secs: env::var("GROQ_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: 5,
        }
    }
}

fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<SecretString> {
    API_KEY_VARS.iter().find_map(|name| {
        lookup(name).and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(SecretString::from(trimmed.to_string()))
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_primary_name_wins() {
        let key = resolve_api_key(|name| match name {
            "GROQ_API_KEY" => Some("primary".to_string()),
            "key" => Some("legacy".to_string()),
            _ => None,
        })
        .expect("key should resolve");
        assert_eq!(key.expose_secret(), "primary");
    }

    #[test]
    fn test_legacy_name_is_fallback() {
        let key = resolve_api_key(|name| match name {
            "key" => Some("legacy".to_string()),
            _ => None,
        })
        .expect("key should resolve");
        assert_eq!(key.expose_secret(), "legacy");
    }

    #[test]
    fn test_blank_value_does_not_resolve() {
        let key = resolve_api_key(|name| match name {
            "GROQ_API_KEY" => Some("   ".to_string()),
            _ => None,
        });
        assert!(key.is_none());
    }

    #[test]
    fn test_absent_everywhere_does_not_resolve() {
        assert!(resolve_api_key(|_| None).is_none());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout_secs, 5);
    }
}
