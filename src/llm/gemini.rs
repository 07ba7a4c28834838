use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LlmConfig;
use crate::llm::{LanguageModel, LlmError, StructuredOutput, strip_code_fences};
use crate::models::Document;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Keep each document's contribution to the prompt bounded.
const MAX_DOC_PROMPT_CHARS: usize = 2000;

static LLM_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("failed to build LLM HTTP client")
});

/// Gemini over the REST generateContent endpoint.
pub struct GeminiModel {
    model: String,
    api_key: String,
    temperature: f32,
}

impl GeminiModel {
    pub fn new(config: &LlmConfig) -> Self {
        info!(model = %config.model_name, "initializing Gemini model");
        Self {
            model: config.model_name.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        debug!(prompt_chars = prompt.len(), "calling Gemini");
        let response = LLM_CLIENT.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn summarize(&self, documents: &[Document]) -> Result<String, LlmError> {
        let mut prompt = String::from(
            "Summarize the following articles into a concise, factual evidence summary. \
             Keep concrete claims; drop marketing language.\n",
        );
        for document in documents {
            prompt.push_str("\n---\n");
            let content: String = document.content.chars().take(MAX_DOC_PROMPT_CHARS).collect();
            prompt.push_str(&content);
        }

        self.generate(&prompt).await
    }

    async fn generate_structured_output(
        &self,
        prompt: &str,
    ) -> Result<StructuredOutput, LlmError> {
        let raw = self.generate(prompt).await?;
        let cleaned = strip_code_fences(&raw);

        let json = match serde_json::from_str(&cleaned) {
            Ok(value) => Some(value),
            Err(e) => {
                // Unparseable output is a recoverable state: the caller still
                // gets the raw text and decides how to degrade.
                warn!(error = %e, "structured output was not valid JSON");
                None
            }
        };

        Ok(StructuredOutput { raw, json })
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
