use std::time::Duration;

use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use tracing::instrument;

use crate::fetcher::charset;
use crate::fetcher::errors::FetchError;
use crate::fetcher::types::FetchedPage;

// News articles rarely exceed a couple hundred KB of HTML; 2MB leaves room
// for bloated pages while bounding memory per fetch.
const MAX_BODY_SIZE: u64 = 2 * 1024 * 1024;
const USER_AGENT: &str = "finthesis/0.1";

const ACCEPTED_CONTENT_TYPES: &[&str] = &[
    "text/html",
    "application/xhtml",
    "application/xml",
    "text/xml",
    "application/rss+xml",
    "application/atom+xml",
];

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("failed to build HTTP client")
});

/// Fetch a page or feed, enforcing size and content-type limits, and decode
/// the body to UTF-8.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<FetchedPage, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let url_final = response.url().clone();
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Http {
            status,
            retriable: status.is_server_error(),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !is_accepted_content_type(&content_type) {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    // Content-Length can be absent; re-check after download.
    if body.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body.len() as u64));
    }

    let detected = charset::detect(&content_type, &body);
    let text = charset::decode(&body, &detected)?;

    Ok(FetchedPage {
        url_final,
        status,
        content_type,
        body,
        text,
        charset: detected,
        fetched_at: Utc::now(),
    })
}

fn is_accepted_content_type(content_type: &str) -> bool {
    ACCEPTED_CONTENT_TYPES
        .iter()
        .any(|accepted| content_type.starts_with(accepted))
}
