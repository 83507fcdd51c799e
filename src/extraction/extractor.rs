//! Entity Extractor
//!
//! Maps a raw question to [`ExtractedEntities`] by case-insensitive
//! substring containment against the keyword tables. There is no scoring
//! and no partial matching: a synonym either occurs in the question or it
//! does not.

use regex::Regex;

use crate::error::QaResult;
use crate::extraction::keywords::{
    match_keywords, KeywordSet, CROP_KEYWORDS, INTENT_KEYWORDS, METRIC_KEYWORDS, STATE_KEYWORDS,
    YEAR_PATTERN,
};
use crate::extraction::types::{ExtractedEntities, Intent, Metric};

/// Rule-based extractor. Holds its compiled year pattern; cheap to share.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    states: &'static [KeywordSet],
    crops: &'static [KeywordSet],
    year_pattern: Regex,
}

impl EntityExtractor {
    /// Extractor over the built-in state and crop tables.
    pub fn new() -> QaResult<Self> {
        Self::with_keywords(STATE_KEYWORDS, CROP_KEYWORDS)
    }

    /// Extractor over custom state and crop tables.
    pub fn with_keywords(
        states: &'static [KeywordSet],
        crops: &'static [KeywordSet],
    ) -> QaResult<Self> {
        Ok(Self {
            states,
            crops,
            year_pattern: Regex::new(YEAR_PATTERN)?,
        })
    }

    /// Extract states, crops, years, metrics, and intent from `question`.
    pub fn extract(&self, question: &str) -> ExtractedEntities {
        let lower = question.to_lowercase();

        let entities = ExtractedEntities {
            states: match_keywords(&lower, self.states),
            crops: match_keywords(&lower, self.crops),
            years: self.extract_years(question),
            metrics: extract_metrics(&lower),
            intent: detect_intent(&lower),
        };

        tracing::debug!(
            states = ?entities.states,
            crops = ?entities.crops,
            years = ?entities.years,
            intent = ?entities.intent,
            "Extracted entities"
        );
        entities
    }

    fn extract_years(&self, question: &str) -> Vec<u16> {
        self.year_pattern
            .find_iter(question)
            .filter_map(|m| m.as_str().parse().ok())
            .collect()
    }
}

fn extract_metrics(lower: &str) -> std::collections::BTreeSet<Metric> {
    METRIC_KEYWORDS
        .iter()
        .filter(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(metric, _)| *metric)
        .collect()
}

/// Primary intent classification; `None` leaves routing to the dispatcher's fallback.
pub fn detect_intent(lower: &str) -> Option<Intent> {
    INTENT_KEYWORDS
        .iter()
        .find(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(intent, _)| *intent)
}
