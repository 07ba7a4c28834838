pub mod gemini;
pub mod local;
pub mod provider;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Document;

pub use gemini::GeminiModel;
pub use provider::{LlmProvider, create_language_model};

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("llm request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("llm api error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("llm returned no candidates")]
    EmptyResponse,

    #[error("{0} does not support structured output")]
    Unsupported(&'static str),
}

/// Result of a structured-output call. `json` is `None` when the raw text
/// did not parse as JSON; callers branch on that instead of catching an
/// error, and `raw` is always preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredOutput {
    pub raw: String,
    pub json: Option<serde_json::Value>,
}

/// Contract for summarization backends. The remote implementation talks to a
/// hosted model; the local one is the extractive summarizer. Either way the
/// caller gets a plain string summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn summarize(&self, documents: &[Document]) -> Result<String, LlmError>;

    async fn generate_structured_output(&self, prompt: &str)
    -> Result<StructuredOutput, LlmError>;

    fn model_name(&self) -> String;
}

static CODE_FENCES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^```json|```$").unwrap());

/// Strip markdown code fences models like to wrap JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCES.replace_all(raw.trim(), "").trim().to_string()
}
