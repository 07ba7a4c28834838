use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm::{LanguageModel, LlmError};
use crate::models::{Document, StructuredThesis};
use crate::scoring::ThesisStructurer;

#[derive(Error, Debug)]
pub enum ThesisError {
    /// The summarization backend failed or produced nothing usable. Callers
    /// can still show raw retrieval output and skip structuring.
    #[error("summary unavailable: {0}")]
    SummaryUnavailable(#[from] LlmError),

    #[error("language model returned an empty summary")]
    EmptySummary,
}

/// End-to-end thesis assembly: summarize the retrieved documents, map the
/// summary onto the category taxonomies, and collect source URLs.
pub struct ThesisGeneratorService {
    llm: Arc<dyn LanguageModel>,
    structurer: Box<dyn ThesisStructurer>,
}

impl ThesisGeneratorService {
    pub fn new(llm: Arc<dyn LanguageModel>, structurer: Box<dyn ThesisStructurer>) -> Self {
        Self { llm, structurer }
    }

    pub async fn generate(
        &self,
        topic: &str,
        documents: &[Document],
    ) -> Result<StructuredThesis, ThesisError> {
        info!(topic, model = %self.llm.model_name(), "generating thesis");

        let summary = self.llm.summarize(documents).await?;
        if summary.trim().is_empty() {
            return Err(ThesisError::EmptySummary);
        }

        let categories = self.structurer.structure(&summary);

        // Chunked retrieval returns several passages per article; collapse
        // their shared URLs while keeping first-seen order.
        let mut seen = HashSet::new();
        let sources: Vec<String> = documents
            .iter()
            .filter_map(|d| d.metadata.url.clone())
            .filter(|url| seen.insert(url.clone()))
            .collect();

        info!(
            themes = categories.key_themes.len(),
            risks = categories.risks.len(),
            signals = categories.investment_signals.len(),
            "thesis structured"
        );

        Ok(StructuredThesis {
            key_themes: categories.key_themes,
            risks: categories.risks,
            investment_signals: categories.investment_signals,
            sources,
            raw_output: Some(summary),
        })
    }

    /// Alternate path: ask the language model itself to structure the
    /// summary. When the model's output does not parse as JSON the thesis
    /// degrades to raw output with empty category lists instead of failing.
    pub async fn generate_with_llm_structuring(
        &self,
        topic: &str,
        documents: &[Document],
    ) -> Result<StructuredThesis, ThesisError> {
        info!(topic, model = %self.llm.model_name(), "generating LLM-structured thesis");

        let summary = self.llm.summarize(documents).await?;
        if summary.trim().is_empty() {
            return Err(ThesisError::EmptySummary);
        }

        let prompt = analyst_prompt(topic, &summary);
        let output = self.llm.generate_structured_output(&prompt).await?;

        let mut seen = HashSet::new();
        let sources: Vec<String> = documents
            .iter()
            .filter_map(|d| d.metadata.url.clone())
            .filter(|url| seen.insert(url.clone()))
            .collect();

        let thesis = match output.json {
            Some(value) => StructuredThesis {
                key_themes: string_list(&value, "key_themes"),
                risks: string_list(&value, "risks"),
                investment_signals: string_list(&value, "investment_signals"),
                sources,
                raw_output: Some(output.raw),
            },
            None => {
                warn!("model output was not valid JSON; returning raw output only");
                StructuredThesis {
                    sources,
                    raw_output: Some(output.raw),
                    ..Default::default()
                }
            }
        };
        Ok(thesis)
    }
}

fn analyst_prompt(topic: &str, summary: &str) -> String {
    format!(
        "You are an expert VC analyst. Based on this summarized evidence about \"{topic}\":\n\n\
         {summary}\n\n\
         Return a JSON object with keys:\n\
         - key_themes: list of 3 concise themes\n\
         - risks: list of 3 concise risks\n\
         - investment_signals: list of 3 startup focus areas\n\
         Only output valid JSON."
    )
}

fn string_list(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
