//! Charset detection and decoding for fetched pages and feeds.
//!
//! Order of trust: Content-Type header, then in-document declarations
//! (`<meta charset>`, `<meta http-equiv>`, the XML prolog for feeds), then
//! a chardetng guess over the first few KB.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fetcher::errors::FetchError;
use crate::fetcher::types::Charset;

const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static XML_DECL_ENCODING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<\?xml[^>]*?encoding\s*=\s*["']([^"']+)["']"#).unwrap());

pub fn detect(content_type: &str, body: &[u8]) -> Charset {
    if let Some(charset) = label_from(&HEADER_CHARSET, content_type) {
        return charset;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    let sniff = String::from_utf8_lossy(window);

    for pattern in [&META_CHARSET, &XML_DECL_ENCODING] {
        if let Some(charset) = label_from(pattern, &sniff) {
            return charset;
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<Charset> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_lowercase();
    encoding_rs::Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

pub fn decode(body: &[u8], charset: &Charset) -> Result<String, FetchError> {
    let encoding = charset.to_encoding();
    let (decoded, _, had_errors) = encoding.decode(body);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "undecodable bytes for {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins() {
        let charset = detect("text/html; charset=utf-8", b"<html></html>");
        assert_eq!(charset, Charset::Utf8);
    }

    #[test]
    fn meta_charset_is_sniffed() {
        let body = b"<html><head><meta charset=\"windows-1252\"></head></html>";
        let charset = detect("text/html", body);
        assert_eq!(charset, Charset::Windows1252);
    }

    #[test]
    fn xml_prolog_encoding_is_sniffed() {
        let body = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><rss></rss>";
        let charset = detect("application/rss+xml", body);
        assert_eq!(charset, Charset::Utf8);
    }

    #[test]
    fn iso_8859_1_maps_to_windows_1252() {
        // encoding_rs treats latin-1 labels as windows-1252, its superset.
        let body = b"<html><head><meta charset=\"iso-8859-1\"></head></html>";
        let charset = detect("text/html", body);
        assert_eq!(charset, Charset::Windows1252);
    }

    #[test]
    fn utf8_roundtrip_decodes() {
        let text = "Hello, \u{4e16}\u{754c}!";
        let decoded = decode(text.as_bytes(), &Charset::Utf8).unwrap();
        assert_eq!(decoded, text);
    }
}
