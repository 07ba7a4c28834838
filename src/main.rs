use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;

use finthesis::config::Config;
use finthesis::llm::create_language_model;
use finthesis::retrieval::TextIndex;
use finthesis::scoring::KeywordMappingStructurer;
use finthesis::services::{IngestionService, RetrievalService, ThesisGeneratorService};
use finthesis::sources::RssArticleSource;

const ARTICLE_LIMIT: usize = 20;
const DEFAULT_TOPIC: &str = "B2B Payments";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let topic = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    info!(topic, "starting thesis pipeline");

    let ingestion = IngestionService::new(Arc::new(RssArticleSource::new(config.feeds.clone())));
    let articles = ingestion.fetch_articles(&topic, ARTICLE_LIMIT).await?;
    if articles.is_empty() {
        bail!("no articles could be ingested from the configured feeds");
    }
    let documents = ingestion.to_documents(&articles);

    let mut retrieval = RetrievalService::new(Box::new(TextIndex::new(
        config.retrieval.chunk_size,
        config.retrieval.chunk_overlap,
    )));
    retrieval.build_index(&documents)?;
    let context = retrieval.retrieve(&topic, config.retrieval.top_k)?;

    let llm = create_language_model(&config.llm);
    let generator =
        ThesisGeneratorService::new(llm, Box::new(KeywordMappingStructurer::default()));
    let thesis = generator.generate(&topic, &context).await?;

    println!("{}", serde_json::to_string_pretty(&thesis)?);
    Ok(())
}
