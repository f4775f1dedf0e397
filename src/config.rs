//! Environment-driven configuration

use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::backend::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Error, Debug)]
#[error("Invalid value for {key}: '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub port: u16,
    pub log_level: String,
}

impl AdvisorConfig {
    /// Read configuration from the process environment.
    ///
    /// A missing `GEMINI_API_KEY` is not fatal: the key stays empty and every
    /// backend call fails until one is provided.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY").unwrap_or_default();

        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => parse_value("PORT", raw)?,
            None => 8080,
        };

        Ok(Self {
            api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: lookup("GEMINI_TEMPERATURE")
                .map(|raw| parse_value("GEMINI_TEMPERATURE", raw))
                .transpose()?,
            max_output_tokens: lookup("GEMINI_MAX_OUTPUT_TOKENS")
                .map(|raw| parse_value("GEMINI_MAX_OUTPUT_TOKENS", raw))
                .transpose()?,
            port,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError { key, value: raw })
}
