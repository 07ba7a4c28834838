use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Article, Document};
use crate::sources::{ArticleSource, SourceError};

/// Fetches articles from the configured source and normalizes them into
/// documents for indexing. Articles with identical content (same story
/// syndicated through several feeds) are collapsed by checksum.
pub struct IngestionService {
    source: Arc<dyn ArticleSource>,
}

impl IngestionService {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    pub async fn fetch_articles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        info!(source = self.source.source_name(), query, "ingesting articles");
        let articles = self.source.fetch_articles(query, limit).await?;

        let deduplicated = dedupe_by_checksum(articles);
        info!(count = deduplicated.len(), "ingestion complete");
        Ok(deduplicated)
    }

    pub fn to_documents(&self, articles: &[Article]) -> Vec<Document> {
        let documents: Vec<Document> = articles.iter().map(Document::from_article).collect();
        debug!(count = documents.len(), "converted articles to documents");
        documents
    }
}

fn dedupe_by_checksum(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(content_checksum(article)))
        .collect()
}

fn content_checksum(article: &Article) -> String {
    format!("{:x}", md5::compute(article.text.as_bytes()))
}
