//! Keyword-driven category scoring over closed taxonomies.

pub mod structurer;
pub mod taxonomies;

pub use structurer::{KeywordMappingStructurer, StructuredCategories, ThesisStructurer};
pub use taxonomies::CategoryTaxonomy;

/// A label paired with the keyword list that triggers it. Taxonomies are
/// ordered sequences of these; the order is the documented tie-break for
/// equal scores.
pub type CategoryEntry<'a> = (&'a str, &'a [&'a str]);

/// Scoring policy over a taxonomy. Injectable so the ranker never has to
/// change when the policy does (e.g. a TF-weighted variant).
pub trait ScoringStrategy: Send + Sync {
    /// Score every label in `categories` against `text`. The result covers
    /// the full label set, zero scores included, in taxonomy order. `text` is
    /// expected to be lowercased by the caller; matching is case-sensitive.
    fn score<'a>(&self, text: &str, categories: &[CategoryEntry<'a>]) -> Vec<(&'a str, usize)>;
}

/// Counts distinct keyword hits per label using substring containment.
///
/// Substring matching is deliberate and matches observed behavior: "pay"
/// scores inside "payment". It also means short keywords can false-positive
/// ("ai" inside "said"), a known precision trade-off, kept rather than
/// silently switching to word-boundary matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCountScoring;

impl ScoringStrategy for KeywordCountScoring {
    fn score<'a>(&self, text: &str, categories: &[CategoryEntry<'a>]) -> Vec<(&'a str, usize)> {
        categories
            .iter()
            .map(|&(label, keywords)| {
                let hits = keywords.iter().filter(|kw| text.contains(*kw)).count();
                (label, hits)
            })
            .collect()
    }
}
