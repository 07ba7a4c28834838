//! Closed provider registry.
//!
//! Providers are a fixed enum validated at configuration load; nothing is
//! resolved dynamically from runtime input. Adding a provider means adding a
//! variant here plus its env-var names and construction arm.

use std::str::FromStr;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::llm::{GeminiModel, LanguageModel};
use crate::summarizer::ExtractiveSummarizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Extractive summarizer; needs no credentials.
    Local,
    /// Hosted Gemini model over REST.
    Gemini,
}

impl LlmProvider {
    pub const ALL: &'static [LlmProvider] = &[LlmProvider::Local, LlmProvider::Gemini];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Gemini => "gemini",
        }
    }

    /// Env var holding the provider's API key, when it needs one.
    pub fn api_key_env(self) -> Option<&'static str> {
        match self {
            Self::Local => None,
            Self::Gemini => Some("GOOGLE_API_KEY"),
        }
    }

    /// Env var holding the provider's model name, when it needs one.
    pub fn model_env(self) -> Option<&'static str> {
        match self {
            Self::Local => None,
            Self::Gemini => Some("GEMINI_MODEL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl std::fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let supported: Vec<&str> = LlmProvider::ALL.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "unknown LLM provider '{}', supported: {}",
            self.0,
            supported.join(", ")
        )
    }
}

impl std::error::Error for UnknownProvider {}

impl FromStr for LlmProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "gemini" => Ok(Self::Gemini),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Build the configured language model. The provider was validated when the
/// config was loaded, so this cannot fail.
pub fn create_language_model(config: &LlmConfig) -> Arc<dyn LanguageModel> {
    match config.provider {
        LlmProvider::Local => Arc::new(ExtractiveSummarizer::default()),
        LlmProvider::Gemini => Arc::new(GeminiModel::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_parse() {
        assert_eq!("local".parse::<LlmProvider>().unwrap(), LlmProvider::Local);
        assert_eq!("gemini".parse::<LlmProvider>().unwrap(), LlmProvider::Gemini);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = "openai".parse::<LlmProvider>().unwrap_err();
        assert_eq!(err, UnknownProvider("openai".to_string()));
        assert!(err.to_string().contains("supported: local, gemini"));
    }

    #[test]
    fn local_provider_needs_no_credentials() {
        assert!(LlmProvider::Local.api_key_env().is_none());
        assert!(LlmProvider::Gemini.api_key_env().is_some());
    }

    #[test]
    fn local_model_is_constructed() {
        let config = LlmConfig {
            provider: LlmProvider::Local,
            model_name: "local-extractor".to_string(),
            api_key: String::new(),
            temperature: 0.0,
        };
        let model = create_language_model(&config);
        assert_eq!(model.model_name(), "local-extractor");
    }
}
