use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Kind of answer a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Comparison,
    Trend,
    PolicyArguments,
}

/// Statistic a question mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Rainfall,
    Production,
    DroughtResistance,
    WaterRequirement,
}

/// Entities recognized in a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Canonical state keys ("rajasthan"), in keyword-table order
    pub states: Vec<String>,
    /// Canonical crop names ("Bajra"), in keyword-table order
    pub crops: Vec<String>,
    /// Years 2018-2024 in order of appearance
    pub years: Vec<u16>,
    pub metrics: BTreeSet<Metric>,
    pub intent: Option<Intent>,
}

impl ExtractedEntities {
    pub fn primary_state(&self) -> Option<&str> {
        self.states.first().map(|s| s.as_str())
    }

    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// True if nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
            && self.crops.is_empty()
            && self.years.is_empty()
            && self.metrics.is_empty()
            && self.intent.is_none()
    }
}
