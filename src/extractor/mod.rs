pub mod language;
pub mod reader;
pub mod reject;

use url::Url;

/// Readable text pulled out of a scraped page.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
    pub language: Option<&'static str>,
}

/// Extract the readable article from raw HTML. Returns `None` when the page
/// has no usable article content (consent walls, stubs, link farms); that is
/// a skip, not an error.
pub fn extract(html: &str, url: &Url) -> Option<ExtractedArticle> {
    let (title, text) = reader::extract_text(html, url)?;

    if reject::should_reject(&title, &text) {
        return None;
    }

    let language = language::detect(&text);

    Some(ExtractedArticle {
        title,
        text,
        language,
    })
}
