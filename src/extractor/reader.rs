use readability::extractor;
use scraper::{Html, Selector};
use url::Url;

/// Pull `(title, text)` from HTML. Readability does the heavy lifting; a
/// selector-based pass covers pages it cannot parse.
pub fn extract_text(html: &str, url: &Url) -> Option<(String, String)> {
    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url)
        && !article.text.trim().is_empty()
    {
        return Some((article.title, article.text));
    }

    fallback_extract(html)
}

fn fallback_extract(html: &str) -> Option<(String, String)> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let text = extract_main_text(&document);

    if text.trim().is_empty() {
        return None;
    }

    Some((title, text))
}

fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content")
                && !content.trim().is_empty()
            {
                return Some(content.trim().to_string());
            }
        }
    }

    for candidate in ["title", "h1"] {
        if let Ok(selector) = Selector::parse(candidate) {
            for element in document.select(&selector) {
                let title = element.text().collect::<String>().trim().to_string();
                if !title.is_empty() {
                    return Some(title);
                }
            }
        }
    }

    None
}

fn extract_main_text(document: &Html) -> String {
    let containers = [
        "article",
        "main",
        "[role='main']",
        ".article-body",
        ".entry-content",
        ".post-content",
        "#content",
    ];

    for container in containers {
        if let Ok(selector) = Selector::parse(container) {
            for element in document.select(&selector) {
                let text = paragraphs_of(&element);
                if text.len() > 100 {
                    return text;
                }
            }
        }
    }

    // Last resort: every paragraph on the page.
    if let Ok(p) = Selector::parse("p") {
        let paragraphs: Vec<String> = document
            .select(&p)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        return paragraphs.join("\n\n");
    }

    String::new()
}

fn paragraphs_of(element: &scraper::ElementRef) -> String {
    let Ok(p) = Selector::parse("p") else {
        return String::new();
    };

    let paragraphs: Vec<String> = element
        .select(&p)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if paragraphs.is_empty() {
        element.text().collect::<String>().trim().to_string()
    } else {
        paragraphs.join("\n\n")
    }
}
