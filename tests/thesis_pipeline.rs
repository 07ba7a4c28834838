//! End-to-end pipeline over an in-memory corpus: documents → retrieval →
//! extractive summary → structured thesis. No network anywhere.

use std::sync::Arc;

use finthesis::cleaner;
use finthesis::models::{Article, Document};
use finthesis::retrieval::{RetrievalIndex, TextIndex};
use finthesis::scoring::KeywordMappingStructurer;
use finthesis::services::{IngestionService, RetrievalService, ThesisGeneratorService};
use finthesis::sources::{ArticleSource, SourceError};
use finthesis::summarizer::{EMPTY_SUMMARY, ExtractiveSummarizer, MAX_SUMMARY_SENTENCES};

use async_trait::async_trait;

fn sample_articles() -> Vec<Article> {
    let raw = [
        (
            "Real-time payments adoption",
            "Real-time payments networks are being adopted by banks and fintechs across many markets. \
             Settlement times dropped from days to seconds for participating institutions. \
             Sign up today for our payments newsletter to stay informed.",
            "https://example.com/article1",
        ),
        (
            "New regulatory updates in payments",
            "New EU regulations around payment services are creating compliance work for providers. \
             Regulatory enforcement actions increased against firms with weak controls.",
            "https://example.com/article2",
        ),
        (
            "B2B payments startups raising capital",
            "Several startups focused on reconciliation and payouts for marketplaces raised new funding. \
             Enterprise treasury teams are adopting automation for accounts payable workflows.",
            "https://example.com/article3",
        ),
        (
            "Embedded finance trend",
            "Embedded finance continues to expand as platforms embed payment and credit rails directly. \
             Banking as a service providers reported growing enterprise demand.",
            "https://example.com/article4",
        ),
    ];

    raw.into_iter()
        .map(|(title, text, url)| {
            let cleaned = cleaner::clean(text);
            Article::new(title, cleaned, "example.com", Some(url.to_string())).unwrap()
        })
        .collect()
}

struct StaticSource(Vec<Article>);

#[async_trait]
impl ArticleSource for StaticSource {
    async fn fetch_articles(
        &self,
        _query: &str,
        limit: usize,
    ) -> Result<Vec<Article>, SourceError> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

#[tokio::test]
async fn full_pipeline_produces_a_structured_thesis() {
    let ingestion = IngestionService::new(Arc::new(StaticSource(sample_articles())));
    let articles = ingestion.fetch_articles("payments", 10).await.unwrap();
    assert_eq!(articles.len(), 4);

    // Cleaning ran before ingestion; promotional lines are gone.
    assert!(
        articles
            .iter()
            .all(|a| !a.text.to_lowercase().contains("sign up"))
    );

    let documents = ingestion.to_documents(&articles);

    let mut retrieval = RetrievalService::new(Box::new(TextIndex::default()));
    retrieval.build_index(&documents).unwrap();
    let context = retrieval.retrieve("payments adoption", 4).unwrap();
    assert!(!context.is_empty());

    let generator = ThesisGeneratorService::new(
        Arc::new(ExtractiveSummarizer::default()),
        Box::new(KeywordMappingStructurer::default()),
    );
    let thesis = generator.generate("payments", &context).await.unwrap();

    let summary = thesis.raw_output.as_deref().unwrap();
    assert_ne!(summary, EMPTY_SUMMARY);

    // Every summary sentence is verbatim from some retrieved document.
    for sentence in summary.split(". ") {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        assert!(
            context.iter().any(|d| d.content.contains(sentence)),
            "sentence not verbatim: {sentence}"
        );
    }

    assert!(!thesis.key_themes.is_empty());
    assert!(thesis.key_themes.len() <= 3);
    assert!(thesis.risks.len() <= 3);
    assert!(thesis.investment_signals.len() <= 3);
    assert!(!thesis.sources.is_empty());
    assert!(thesis.sources.iter().all(|s| s.starts_with("https://")));
}

#[tokio::test]
async fn pipeline_is_deterministic_end_to_end() {
    let articles = sample_articles();
    let documents: Vec<Document> = articles.iter().map(Document::from_article).collect();

    let run = || async {
        let mut index = TextIndex::default();
        index.build(&documents).unwrap();
        let context = index.retrieve("payments", 4).unwrap();

        let generator = ThesisGeneratorService::new(
            Arc::new(ExtractiveSummarizer::default()),
            Box::new(KeywordMappingStructurer::default()),
        );
        generator.generate("payments", &context).await.unwrap()
    };

    let first = run().await;
    let second = run().await;

    assert_eq!(first.raw_output, second.raw_output);
    assert_eq!(first.key_themes, second.key_themes);
    assert_eq!(first.risks, second.risks);
    assert_eq!(first.investment_signals, second.investment_signals);
    assert_eq!(first.sources, second.sources);
}

#[tokio::test]
async fn summary_sentence_count_stays_bounded() {
    // Many keyword-dense documents; the summary must still cap out.
    let documents: Vec<Document> = (0..20)
        .map(|i| {
            let article = Article::new(
                format!("Article {i}"),
                format!(
                    "Fintech payment platform number {i} expanded lending and banking products rapidly."
                ),
                "example.com",
                None,
            )
            .unwrap();
            Document::from_article(&article)
        })
        .collect();

    let summarizer = ExtractiveSummarizer::default();
    let summary = summarizer.summarize(&documents);

    let sentences = summary.matches(['.', '!', '?']).count();
    assert!(sentences <= MAX_SUMMARY_SENTENCES);
}
