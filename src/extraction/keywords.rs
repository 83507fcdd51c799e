//! Keyword Lookup Tables
//!
//! Ordered `(canonical value, synonyms)` tables used by the entity extractor.
//! Declaration order is extraction order: a question naming Punjab before
//! Rajasthan still yields `["rajasthan", "punjab"]`.

use crate::extraction::types::{Intent, Metric};

/// A canonical entity and the lower-case substrings that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
}

impl KeywordSet {
    /// True if any synonym occurs in `text` (expected lower-case).
    pub fn matches(&self, text: &str) -> bool {
        self.synonyms.iter().any(|synonym| text.contains(synonym))
    }
}

// ============================================================================
// EMBEDDED KEYWORD TABLES
// ============================================================================

pub static STATE_KEYWORDS: &[KeywordSet] = &[
    KeywordSet { canonical: "rajasthan", synonyms: &["rajasthan", "raj"] },
    KeywordSet { canonical: "punjab", synonyms: &["punjab"] },
    KeywordSet { canonical: "gujarat", synonyms: &["gujarat"] },
    KeywordSet { canonical: "haryana", synonyms: &["haryana"] },
];

pub static CROP_KEYWORDS: &[KeywordSet] = &[
    KeywordSet { canonical: "Bajra", synonyms: &["bajra", "pearl millet", "millet"] },
    KeywordSet { canonical: "Wheat", synonyms: &["wheat"] },
    KeywordSet { canonical: "Rice", synonyms: &["rice", "paddy"] },
    KeywordSet { canonical: "Cotton", synonyms: &["cotton"] },
    KeywordSet { canonical: "Groundnut", synonyms: &["groundnut", "peanut"] },
    KeywordSet { canonical: "Guar", synonyms: &["guar", "cluster bean"] },
];

/// Metric tags; every matching row is set.
pub static METRIC_KEYWORDS: &[(Metric, &[&str])] = &[
    (Metric::Rainfall, &["rainfall"]),
    (Metric::Production, &["production", "yield"]),
    (Metric::DroughtResistance, &["drought"]),
    (Metric::WaterRequirement, &["water"]),
];

/// Intent cues; the first matching row wins.
pub static INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Comparison, &["compare"]),
    (Intent::Trend, &["trend"]),
    (Intent::PolicyArguments, &["argument", "promote"]),
];

/// Four-digit years inside the dataset's question range.
pub const YEAR_PATTERN: &str = r"\b(201[8-9]|202[0-4])\b";

// ============================================================================
// MATCHING
// ============================================================================

/// Canonical values of every set matching `text`, in table order, each at most once.
pub fn match_keywords(text: &str, sets: &[KeywordSet]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();
    for set in sets.iter().filter(|set| set.matches(text)) {
        if !matched.iter().any(|m| m == set.canonical) {
            matched.push(set.canonical.to_string());
        }
    }
    matched
}
