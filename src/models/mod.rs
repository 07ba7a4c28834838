use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    #[error("article title cannot be empty")]
    EmptyTitle,

    #[error("article text cannot be empty")]
    EmptyText,

    #[error("article source cannot be empty")]
    EmptySource,
}

/// A fetched news article. Construction validates that title, text and source
/// are non-blank; invalid articles are rejected up front rather than silently
/// carried through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub text: String,
    pub source: String,
    pub url: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        source: impl Into<String>,
        url: Option<String>,
    ) -> Result<Self, ArticleError> {
        let title = title.into();
        let text = text.into();
        let source = source.into();

        if title.trim().is_empty() {
            return Err(ArticleError::EmptyTitle);
        }
        if text.trim().is_empty() {
            return Err(ArticleError::EmptyText);
        }
        if source.trim().is_empty() {
            return Err(ArticleError::EmptySource);
        }

        Ok(Self {
            title,
            text,
            source,
            url,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub title: String,
    pub url: Option<String>,
}

/// An immutable unit of text handed to retrieval and summarization.
/// The content of a document built from an article is the title followed by
/// the article body, so the title participates in relevance ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    pub fn from_article(article: &Article) -> Self {
        Self {
            content: format!("{}\n\n{}", article.title, article.text),
            metadata: DocumentMetadata {
                source: article.source.clone(),
                title: article.title.clone(),
                url: article.url.clone(),
            },
        }
    }
}

/// Final structured output of a pipeline run. Lists are freshly allocated per
/// instance and never mutated after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredThesis {
    pub key_themes: Vec<String>,
    pub risks: Vec<String>,
    pub investment_signals: Vec<String>,
    pub sources: Vec<String>,
    pub raw_output: Option<String>,
}
