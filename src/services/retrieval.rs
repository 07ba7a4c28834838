use tracing::info;

use crate::models::Document;
use crate::retrieval::{RetrievalError, RetrievalIndex};

/// Owns the retrieval index lifecycle: build once over the ingested corpus,
/// then answer top-k queries. Querying before building and querying into a
/// void are both typed errors, so the orchestration layer can degrade
/// instead of crashing.
pub struct RetrievalService {
    index: Box<dyn RetrievalIndex>,
}

impl RetrievalService {
    pub fn new(index: Box<dyn RetrievalIndex>) -> Self {
        Self { index }
    }

    pub fn build_index(&mut self, documents: &[Document]) -> Result<(), RetrievalError> {
        info!(documents = documents.len(), "building retrieval index");
        self.index.build(documents)
    }

    pub fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Document>, RetrievalError> {
        let documents = self.index.retrieve(query, k)?;
        if documents.is_empty() {
            return Err(RetrievalError::NoMatches {
                query: query.to_string(),
            });
        }

        info!(query, count = documents.len(), "retrieved documents");
        Ok(documents)
    }

    pub fn is_built(&self) -> bool {
        self.index.is_built()
    }
}
