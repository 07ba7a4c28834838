use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use crate::cleaner;
use crate::config::RssFeedConfig;
use crate::extractor;
use crate::fetcher;
use crate::models::Article;
use crate::sources::{ArticleSource, SourceError};

// Article bodies are truncated before indexing; chunks beyond this add noise
// rather than evidence.
const MAX_ARTICLE_CHARS: usize = 4000;

/// Fetches articles from configured RSS/Atom feeds, scraping each linked
/// page for its full text.
pub struct RssArticleSource {
    feeds: Vec<RssFeedConfig>,
}

impl RssArticleSource {
    pub fn new(feeds: Vec<RssFeedConfig>) -> Self {
        Self { feeds }
    }

    async fn articles_from_feed(
        &self,
        feed: &RssFeedConfig,
        remaining: usize,
    ) -> Result<Vec<Article>, SourceError> {
        let page = fetcher::fetch(&feed.url).await?;
        let parsed = feed_rs::parser::parse(page.body.as_ref())
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if parsed.entries.is_empty() {
            warn!(feed = %feed.name, "feed has no entries");
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();
        for entry in parsed.entries.into_iter().take(remaining) {
            if let Some(article) = self.process_entry(entry).await {
                articles.push(article);
            }
        }
        Ok(articles)
    }

    async fn process_entry(&self, entry: feed_rs::model::Entry) -> Option<Article> {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_else(|| "Untitled".to_string());
        let link = entry.links.first()?.href.clone();

        let text = match self.scrape_entry(&link).await {
            Some(text) => text,
            // Scraping failed; the feed summary is better than nothing.
            None => entry.summary.map(|s| s.content)?,
        };

        let text = cleaner::clean(&text);
        let text = truncate_chars(&text, MAX_ARTICLE_CHARS);

        let source = Url::parse(&link)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());

        match Article::new(title, text, source, Some(link)) {
            Ok(article) => {
                debug!(title = %article.title, "processed feed entry");
                Some(article)
            }
            Err(e) => {
                warn!(error = %e, "invalid article skipped");
                None
            }
        }
    }

    async fn scrape_entry(&self, link: &str) -> Option<String> {
        let page = match fetcher::fetch(link).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %link, error = %e, "entry fetch failed");
                return None;
            }
        };

        let url = page.url_final.clone();
        let extracted = extractor::extract(&page.text, &url)?;

        // The downstream vocabulary is English; skip articles confidently
        // detected as something else.
        if let Some(lang) = extracted.language
            && lang != "eng"
        {
            debug!(url = %link, lang, "skipping non-English article");
            return None;
        }

        Some(extracted.text)
    }
}

#[async_trait]
impl ArticleSource for RssArticleSource {
    async fn fetch_articles(&self, _query: &str, limit: usize) -> Result<Vec<Article>, SourceError> {
        let mut articles = Vec::new();

        for feed in self.feeds.iter().filter(|f| f.enabled) {
            if articles.len() >= limit {
                break;
            }

            info!(feed = %feed.name, "fetching feed");
            match self.articles_from_feed(feed, limit - articles.len()).await {
                Ok(batch) => articles.extend(batch),
                Err(e) => {
                    warn!(feed = %feed.name, error = %e, "feed skipped");
                    continue;
                }
            }
        }

        info!(count = articles.len(), "fetched articles from feeds");
        Ok(articles)
    }

    fn source_name(&self) -> &'static str {
        "RSS Feeds"
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4).chars().count(), 4);
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[tokio::test]
    async fn disabled_feeds_are_ignored() {
        let source = RssArticleSource::new(vec![RssFeedConfig {
            name: "off".to_string(),
            url: "http://127.0.0.1:1/feed".to_string(),
            enabled: false,
        }]);

        let articles = source.fetch_articles("fintech", 5).await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn unreachable_feed_is_skipped_not_fatal() {
        let source = RssArticleSource::new(vec![RssFeedConfig {
            name: "dead".to_string(),
            // Unroutable port; fetch fails fast and the feed is skipped.
            url: "http://127.0.0.1:9/feed".to_string(),
            enabled: true,
        }]);

        let articles = source.fetch_articles("fintech", 5).await.unwrap();
        assert!(articles.is_empty());
    }
}
