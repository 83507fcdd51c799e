//! Report Section Generators
//!
//! Each module turns extracted entities plus the dataset into one templated
//! markdown answer and its data points. Requested states or crops missing
//! from the dataset fall back to defaults or are skipped; generation never
//! fails on them.

pub mod policy_arguments;
pub mod comparison;
pub mod trend;

use crate::data::Dataset;

/// State used when a question names none (policy and trend reports).
pub const DEFAULT_STATE: &str = "rajasthan";

/// States compared when a question names none.
pub const DEFAULT_COMPARISON_STATES: &[&str] = &["rajasthan", "punjab"];

/// Crops reported when a question names none (comparison and trend reports).
pub const DEFAULT_CROPS: &[&str] = &["Bajra", "Wheat"];

/// Crops needing comparatively little water.
pub const DROUGHT_RESISTANT_CROPS: &[&str] = &["Bajra", "Guar"];

/// Crops needing comparatively high water input.
pub const WATER_INTENSIVE_CROPS: &[&str] = &["Rice", "Wheat"];

/// Label used for missing climate zones and water requirements.
pub const UNKNOWN: &str = "Unknown";

/// `requested` if non-empty, otherwise `defaults`.
pub(crate) fn or_defaults(requested: &[String], defaults: &[&str]) -> Vec<String> {
    if requested.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        requested.to_vec()
    }
}

/// Log states that were asked about but have no records at all.
pub(crate) fn warn_unknown_states(dataset: &Dataset, states: &[String]) {
    for state in states {
        if dataset.climate(state).is_none() && dataset.agriculture(state).is_none() {
            tracing::warn!("No records for state '{}'; reporting defaults", state);
        }
    }
}
