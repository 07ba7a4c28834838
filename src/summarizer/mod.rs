//! Extractive summarization without any model call.
//!
//! Sentences are pulled verbatim from the input documents, scored by domain
//! keyword relevance, deduplicated, and re-emitted in their original order.
//! Given identical input the output is identical; there is no I/O anywhere in
//! this module.

pub mod keywords;

use std::collections::HashSet;

use crate::cleaner;
use crate::models::Document;

/// Returned when the input contains no usable content. Callers must treat
/// this as an empty result, not a failure.
pub const EMPTY_SUMMARY: &str = "No content to summarize.";

/// Default cap on the number of sentences in a summary.
pub const MAX_SUMMARY_SENTENCES: usize = 7;

/// Default bag-of-words overlap ratio at or above which a candidate sentence
/// is considered a near-duplicate of one already selected.
pub const DUPLICATE_OVERLAP_THRESHOLD: f64 = 0.7;

const MIN_SENTENCE_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    top_k: usize,
    duplicate_threshold: f64,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            top_k: MAX_SUMMARY_SENTENCES,
            duplicate_threshold: DUPLICATE_OVERLAP_THRESHOLD,
        }
    }
}

impl ExtractiveSummarizer {
    pub fn new(top_k: usize, duplicate_threshold: f64) -> Self {
        Self {
            top_k,
            duplicate_threshold,
        }
    }

    /// Build a summary of at most `top_k` sentences selected verbatim from
    /// `documents`, ordered as they appeared in the input.
    pub fn summarize(&self, documents: &[Document]) -> String {
        let mut candidates = Vec::new();
        for doc in documents {
            candidates.extend(split_sentences(&doc.content));
        }

        if candidates.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        // Prefer sentences that start with an uppercase letter; mid-sentence
        // fragments from bad segmentation usually don't. Fall back to the
        // whole candidate set rather than returning nothing.
        let complete: Vec<String> = candidates
            .iter()
            .filter(|s| starts_uppercase(s))
            .cloned()
            .collect();
        let pool = if complete.is_empty() {
            candidates
        } else {
            complete
        };

        let scored: Vec<(usize, &str, usize)> = pool
            .iter()
            .enumerate()
            .map(|(position, sentence)| (position, sentence.as_str(), score_sentence(sentence)))
            .collect();

        // Stable sort: ties keep encounter order.
        let mut ranked = scored;
        ranked.sort_by_key(|&(_, _, score)| std::cmp::Reverse(score));
        ranked.truncate(self.top_k.min(ranked.len()));

        // Walk in score order, dropping near-duplicates of anything accepted.
        let mut selected: Vec<(usize, &str)> = Vec::new();
        for (position, sentence, _) in ranked {
            let accepted = selected.iter().map(|&(_, s)| s);
            if !is_near_duplicate(sentence, accepted, self.duplicate_threshold) {
                selected.push((position, sentence));
            }
        }

        // Restore original document order.
        selected.sort_by_key(|&(position, _)| position);

        selected
            .iter()
            .map(|&(_, s)| s)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split text into sentence candidates after `.`, `!` or `?` followed by
/// whitespace, then keep only structurally valid sentences: long enough,
/// terminally punctuated, free of concatenation artifacts and ad phrases.
fn split_sentences(text: &str) -> Vec<String> {
    let mut raw = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?')
            && let Some(&(next_idx, next_ch)) = chars.peek()
            && next_ch.is_whitespace()
        {
            raw.push(&text[start..next_idx]);
            start = next_idx;
        }
    }
    if start < text.len() {
        raw.push(&text[start..]);
    }

    raw.iter()
        .map(|s| s.trim())
        .filter(|s| is_valid_sentence(s))
        .map(str::to_string)
        .collect()
}

fn is_valid_sentence(trimmed: &str) -> bool {
    if trimmed.chars().count() <= MIN_SENTENCE_CHARS {
        return false;
    }
    let Some(last) = trimmed.chars().last() else {
        return false;
    };
    if !matches!(last, '.' | '!' | '?') {
        return false;
    }
    if has_concatenation_artifact(trimmed) {
        return false;
    }
    !cleaner::contains_ad_phrase(trimmed)
}

// Scrapers that join paragraphs without spacing produce text like
// "rates.The next quarter": punctuation immediately followed by a capital
// letter inside the sentence body. The final character is excluded so the
// terminal punctuation never participates.
fn has_concatenation_artifact(sentence: &str) -> bool {
    let body: Vec<char> = sentence.chars().collect();
    if body.len() < 3 {
        return false;
    }
    body[..body.len() - 1]
        .windows(2)
        .any(|pair| matches!(pair[0], '.' | ',') && pair[1].is_uppercase())
}

fn starts_uppercase(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_uppercase)
}

/// Count distinct domain keywords present in the sentence. A keyword that
/// occurs several times still counts once.
fn score_sentence(sentence: &str) -> usize {
    let lower = sentence.to_lowercase();
    keywords::FINTECH_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}

/// Bag-of-words overlap check: `|A ∩ B| / max(|A|, |B|)` over
/// whitespace-separated lowercase tokens, against every accepted sentence.
fn is_near_duplicate<'a>(
    sentence: &str,
    accepted: impl Iterator<Item = &'a str>,
    threshold: f64,
) -> bool {
    let words: HashSet<String> = sentence.split_whitespace().map(str::to_lowercase).collect();

    for existing in accepted {
        let existing_words: HashSet<String> =
            existing.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() || existing_words.is_empty() {
            continue;
        }
        let intersection = words.intersection(&existing_words).count();
        let overlap = intersection as f64 / words.len().max(existing_words.len()) as f64;
        if overlap >= threshold {
            return true;
        }
    }
    false
}
