pub mod ingestion;
pub mod retrieval;
pub mod thesis;

pub use ingestion::IngestionService;
pub use retrieval::RetrievalService;
pub use thesis::{ThesisError, ThesisGeneratorService};
