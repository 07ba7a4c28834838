use serde::{Deserialize, Serialize};
use tracing::debug;

use super::taxonomies::{self, CategoryTaxonomy};
use super::{KeywordCountScoring, ScoringStrategy};

/// Default number of labels returned per taxonomy.
pub const DEFAULT_MAX_RESULTS: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredCategories {
    pub key_themes: Vec<String>,
    pub risks: Vec<String>,
    pub investment_signals: Vec<String>,
}

pub trait ThesisStructurer: Send + Sync {
    fn structure(&self, summary: &str) -> StructuredCategories;

    fn structurer_name(&self) -> &'static str;
}

/// Maps a summary onto the three static taxonomies by keyword score.
///
/// The summary is lowercased once; each taxonomy is scored with the injected
/// strategy, zero-score labels are dropped, the rest are sorted by score
/// descending (stable, so taxonomy declaration order breaks ties) and capped
/// at `max_results`.
pub struct KeywordMappingStructurer {
    strategy: Box<dyn ScoringStrategy>,
    max_results: usize,
}

impl Default for KeywordMappingStructurer {
    fn default() -> Self {
        Self::new(Box::new(KeywordCountScoring), DEFAULT_MAX_RESULTS)
    }
}

impl KeywordMappingStructurer {
    pub fn new(strategy: Box<dyn ScoringStrategy>, max_results: usize) -> Self {
        Self {
            strategy,
            max_results,
        }
    }

    fn match_categories(&self, text_lower: &str, taxonomy: &CategoryTaxonomy) -> Vec<String> {
        let mut scored = self.strategy.score(text_lower, taxonomy.categories);
        scored.sort_by_key(|&(_, score)| std::cmp::Reverse(score));

        let matched: Vec<String> = scored
            .into_iter()
            .filter(|&(_, score)| score > 0)
            .take(self.max_results)
            .map(|(label, _)| label.to_string())
            .collect();

        debug!(taxonomy = taxonomy.name, matches = matched.len(), "scored taxonomy");
        matched
    }
}

impl ThesisStructurer for KeywordMappingStructurer {
    fn structure(&self, summary: &str) -> StructuredCategories {
        let text_lower = summary.to_lowercase();

        StructuredCategories {
            key_themes: self.match_categories(&text_lower, &taxonomies::THEMES),
            risks: self.match_categories(&text_lower, &taxonomies::RISKS),
            investment_signals: self.match_categories(&text_lower, &taxonomies::SIGNALS),
        }
    }

    fn structurer_name(&self) -> &'static str {
        "KeywordMappingStructurer"
    }
}
