//! Runtime configuration, resolved once at startup.

use crate::error::PromptError;
use clap::Parser;
use std::net::SocketAddr;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Parser)]
#[command(name = "nano-banana")]
#[command(about = "Turn an uploaded image into a text-to-image prompt with Gemini")]
#[command(version)]
pub struct Config {
    /// Gemini API key. Read from `GEMINI_API_KEY` only, so it never shows
    /// up in the process list.
    #[arg(skip)]
    pub api_key: Option<String>,

    /// Model used for prompt generation
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Address the web UI listens on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Config {
    /// Parses flags, then takes the API key from the environment.
    pub fn load() -> Self {
        Self::parse().with_env_api_key()
    }

    fn with_env_api_key(mut self) -> Self {
        self.api_key = std::env::var(API_KEY_VAR).ok();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// The API key, or a configuration error when missing or blank.
    pub fn require_api_key(&self) -> Result<&str, PromptError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(PromptError::NotConfigured(API_KEY_VAR))
    }

    pub fn is_configured(&self) -> bool {
        self.require_api_key().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_not_configured() {
        let config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(PromptError::NotConfigured(API_KEY_VAR))
        ));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = Config::default().with_api_key("   ");
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_key_is_trimmed() {
        let config = Config::default().with_api_key(" abc \n");
        assert_eq!(config.require_api_key().unwrap(), "abc");
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "nano-banana",
            "--model",
            "gemini-2.0-flash",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.bind.port(), 8080);
    }

    #[test]
    fn test_api_key_flag_is_rejected() {
        let result = Config::try_parse_from(["nano-banana", "--api-key", "secret"]);
        assert!(result.is_err());
    }
}
