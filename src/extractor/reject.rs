const MIN_CONTENT_LENGTH: usize = 250;
const MIN_WORD_COUNT: usize = 50;
const MAX_BOILERPLATE_RATIO: f64 = 0.3;

// Consent walls, error stubs and subscription gates dressed up as pages.
const BOILERPLATE_MARKERS: &[&str] = &[
    "cookie",
    "consent",
    "privacy policy",
    "terms of service",
    "gdpr",
    "advertisement",
    "subscribe",
    "newsletter",
    "sign in",
    "log in",
    "register",
    "password",
    "paywall",
    "404",
    "not found",
    "access denied",
    "please wait",
    "loading",
    "javascript",
    "enable",
    "browser",
    "captcha",
    "click here",
    "read more",
    "learn more",
];

/// Heuristic gate between "a scraped article" and "a page pretending to be
/// one". Rejection means skip the page, nothing more.
pub fn should_reject(title: &str, text: &str) -> bool {
    if text.chars().count() < MIN_CONTENT_LENGTH {
        return true;
    }

    let word_count = text.split_whitespace().count();

    if title.trim().is_empty() && word_count < MIN_WORD_COUNT {
        return true;
    }

    boilerplate_ratio(text, word_count) > MAX_BOILERPLATE_RATIO
}

fn boilerplate_ratio(text: &str, total_words: usize) -> f64 {
    if total_words == 0 {
        return 1.0;
    }

    let text_lower = text.to_lowercase();
    let marker_hits: usize = BOILERPLATE_MARKERS
        .iter()
        .map(|marker| text_lower.matches(marker).count())
        .sum();

    marker_hits as f64 / total_words as f64
}
