//! Configuration handling for the pipeline.
//!
//! Everything loads from environment variables with development defaults,
//! so a bare `finthesis` run works offline with the local summarizer and the
//! default feed list. Provider-specific variables are resolved through the
//! closed `LlmProvider` registry: choosing `gemini` makes its key and model
//! variables required, choosing `local` requires nothing.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::llm::LlmProvider;

/// Environment variable names, public so tests and deployment scripts can
/// refer to them.
pub const ENV_LLM_PROVIDER: &str = "LLM_PROVIDER";
pub const ENV_RSS_FEEDS: &str = "RSS_FEEDS";
pub const ENV_LLM_TEMPERATURE: &str = "LLM_TEMPERATURE";

const DEFAULT_PROVIDER: LlmProvider = LlmProvider::Local;
const DEFAULT_FEED_NAME: &str = "TechCrunch Fintech";
const DEFAULT_FEED_URL: &str = "https://techcrunch.com/category/fintech/feed/";
const DEFAULT_TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RssFeedConfig {
    pub name: String,
    pub url: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model_name: String,
    pub api_key: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            chunk_size: crate::retrieval::chunker::DEFAULT_CHUNK_SIZE,
            chunk_overlap: crate::retrieval::chunker::DEFAULT_CHUNK_OVERLAP,
            top_k: 5,
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub llm: LlmConfig,
    pub retrieval: RetrievalConfig,
    pub feeds: Vec<RssFeedConfig>,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    ///
    /// Fails when the selected provider is unknown or its required variables
    /// are missing; every missing variable is reported at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match env::var(ENV_LLM_PROVIDER) {
            Ok(value) => value
                .parse::<LlmProvider>()
                .map_err(|e| ConfigError::UnknownProvider(e.to_string()))?,
            Err(_) => DEFAULT_PROVIDER,
        };

        let mut missing = Vec::new();

        let api_key = match provider.api_key_env() {
            Some(var) => env::var(var).unwrap_or_else(|_| {
                missing.push(var);
                String::new()
            }),
            None => String::new(),
        };
        let model_name = match provider.model_env() {
            Some(var) => env::var(var).unwrap_or_else(|_| {
                missing.push(var);
                String::new()
            }),
            None => crate::llm::local::LOCAL_MODEL_NAME.to_string(),
        };

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        let temperature = env::var(ENV_LLM_TEMPERATURE)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Self {
            llm: LlmConfig {
                provider,
                model_name,
                api_key,
                temperature,
            },
            retrieval: RetrievalConfig::default(),
            feeds: feeds_from_env(),
        })
    }
}

fn feeds_from_env() -> Vec<RssFeedConfig> {
    match env::var(ENV_RSS_FEEDS) {
        Ok(value) if !value.trim().is_empty() => value
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| RssFeedConfig {
                name: url::Url::parse(url)
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_string))
                    .unwrap_or_else(|| url.to_string()),
                url: url.to_string(),
                enabled: true,
            })
            .collect(),
        _ => vec![RssFeedConfig {
            name: DEFAULT_FEED_NAME.to_string(),
            url: DEFAULT_FEED_URL.to_string(),
            enabled: true,
        }],
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingEnv(Vec<&'static str>),
    UnknownProvider(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingEnv(vars) => {
                write!(f, "missing environment variables: {}", vars.join(", "))
            }
            ConfigError::UnknownProvider(detail) => write!(f, "{detail}"),
        }
    }
}

impl Error for ConfigError {}
