//! The extractive summarizer exposed through the `LanguageModel` contract.
//!
//! This is the no-API-key path: summarization runs locally and
//! deterministically. Structured output is not something an extractive
//! model can produce, so that method returns a typed error instead of
//! pretending.

use async_trait::async_trait;

use crate::llm::{LanguageModel, LlmError, StructuredOutput};
use crate::models::Document;
use crate::summarizer::ExtractiveSummarizer;

pub const LOCAL_MODEL_NAME: &str = "local-extractor";

#[async_trait]
impl LanguageModel for ExtractiveSummarizer {
    async fn summarize(&self, documents: &[Document]) -> Result<String, LlmError> {
        Ok(ExtractiveSummarizer::summarize(self, documents))
    }

    async fn generate_structured_output(
        &self,
        _prompt: &str,
    ) -> Result<StructuredOutput, LlmError> {
        Err(LlmError::Unsupported(LOCAL_MODEL_NAME))
    }

    fn model_name(&self) -> String {
        LOCAL_MODEL_NAME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentMetadata;

    fn doc(content: &str) -> Document {
        Document::new(
            content,
            DocumentMetadata {
                source: "test".to_string(),
                title: "test".to_string(),
                url: None,
            },
        )
    }

    #[tokio::test]
    async fn local_model_summarizes_without_io() {
        let model = ExtractiveSummarizer::default();
        let summary = LanguageModel::summarize(
            &model,
            &[doc("Fintech lending platforms expanded their credit products rapidly.")],
        )
        .await
        .unwrap();
        assert!(summary.contains("lending"));
    }

    #[tokio::test]
    async fn structured_output_is_unsupported() {
        let model = ExtractiveSummarizer::default();
        let err = model.generate_structured_output("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Unsupported(_)));
    }

    #[test]
    fn model_name_is_local_extractor() {
        assert_eq!(ExtractiveSummarizer::default().model_name(), "local-extractor");
    }
}
