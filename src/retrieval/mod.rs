pub mod chunker;
pub mod text_index;

use thiserror::Error;

use crate::models::Document;

pub use text_index::TextIndex;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("no documents provided to build the index")]
    EmptyCorpus,

    #[error("index not built; call build first")]
    IndexNotBuilt,

    #[error("no documents matched query: {query}")]
    NoMatches { query: String },

    #[error("index failure: {0}")]
    Index(#[from] tantivy::TantivyError),
}

/// Ranked text retrieval over a document corpus. The summarizer downstream
/// is agnostic to how documents were retrieved, so implementations are free
/// to rank however they like as long as `retrieve` returns the top `k`.
pub trait RetrievalIndex: Send + Sync {
    fn build(&mut self, documents: &[Document]) -> Result<(), RetrievalError>;

    fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Document>, RetrievalError>;

    fn is_built(&self) -> bool;
}
