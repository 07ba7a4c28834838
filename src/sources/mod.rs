pub mod rss;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Article;

pub use rss::RssArticleSource;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] crate::fetcher::FetchError),

    #[error("feed parse failed: {0}")]
    Parse(String),
}

/// Where articles come from. Implementations fetch up to `limit` articles;
/// per-feed and per-entry failures are logged and skipped rather than
/// aborting the whole run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self, query: &str, limit: usize) -> Result<Vec<Article>, SourceError>;

    fn source_name(&self) -> &'static str;
}
