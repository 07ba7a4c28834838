#![no_main]

use libfuzzer_sys::fuzz_target;

use finthesis::cleaner::clean;
use finthesis::models::{Document, DocumentMetadata};
use finthesis::summarizer::ExtractiveSummarizer;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data).to_string();

    // Cleaning and summarizing must never panic regardless of input
    let cleaned = clean(&text);

    let document = Document::new(
        cleaned,
        DocumentMetadata {
            source: "fuzz".to_string(),
            title: "fuzz".to_string(),
            url: None,
        },
    );
    let _ = ExtractiveSummarizer::default().summarize(&[document]);
});
