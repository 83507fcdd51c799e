//! Comparative Analysis
//!
//! Side-by-side report of climate zone, average rainfall, and average crop
//! production (with water requirement) for each requested state. Plain
//! reporting only; no statistical test between states.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{Dataset, YearSeries};
use crate::error::QaResult;
use crate::extraction::ExtractedEntities;
use crate::reports::sections::{
    or_defaults, warn_unknown_states, DEFAULT_COMPARISON_STATES, DEFAULT_CROPS, UNKNOWN,
};
use crate::reports::types::AnswerResult;
use crate::utils::{format_thousands, join_titles, mean, title_case};

/// Average production of one crop in one state.
#[derive(Debug, Clone)]
pub struct CropSummary {
    pub crop: String,
    pub average_production: f64,
    pub water_requirement: String,
    pub production: YearSeries,
}

/// One state's column of the comparison.
#[derive(Debug, Clone)]
pub struct StateComparison {
    pub state: String,
    pub climate_zone: String,
    pub average_rainfall: f64,
    pub rainfall: YearSeries,
    /// Requested crops the state records, in request order
    pub crops: Vec<CropSummary>,
}

#[derive(Serialize)]
struct StateDataPoints<'a> {
    rainfall: &'a YearSeries,
    crop_production: BTreeMap<&'a str, &'a YearSeries>,
    climate_zone: &'a str,
}

/// Generate the comparison answer.
pub fn generate(dataset: &Dataset, entities: &ExtractedEntities) -> QaResult<AnswerResult> {
    let comparison = analyze(dataset, entities);
    let answer = render(&comparison);

    let points: BTreeMap<&str, StateDataPoints> = comparison
        .iter()
        .map(|s| {
            let crop_production = s
                .crops
                .iter()
                .map(|c| (c.crop.as_str(), &c.production))
                .collect();
            (
                s.state.as_str(),
                StateDataPoints {
                    rainfall: &s.rainfall,
                    crop_production,
                    climate_zone: &s.climate_zone,
                },
            )
        })
        .collect();

    Ok(AnswerResult {
        answer,
        sources: dataset.sources(),
        data_points: serde_json::to_value(points)?,
    })
}

/// Summarize every requested state (defaults: Rajasthan and Punjab; Bajra and Wheat).
pub fn analyze(dataset: &Dataset, entities: &ExtractedEntities) -> Vec<StateComparison> {
    let states = or_defaults(&entities.states, DEFAULT_COMPARISON_STATES);
    let crops = or_defaults(&entities.crops, DEFAULT_CROPS);
    warn_unknown_states(dataset, &states);

    states
        .into_iter()
        .map(|state| summarize_state(dataset, state, &crops))
        .collect()
}

fn summarize_state(dataset: &Dataset, state: String, crops: &[String]) -> StateComparison {
    let climate = dataset.climate(&state);
    let rainfall = climate.map(|c| c.rainfall.clone()).unwrap_or_default();
    let climate_zone = climate
        .map(|c| c.climate_zone.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let crops = crops
        .iter()
        .filter_map(|crop| {
            let production = dataset.production(&state, crop)?;
            let values: Vec<f64> = production.values().copied().collect();
            Some(CropSummary {
                crop: crop.clone(),
                average_production: mean(&values),
                water_requirement: dataset
                    .water_requirement(&state, crop)
                    .unwrap_or(UNKNOWN)
                    .to_string(),
                production: production.clone(),
            })
        })
        .collect();

    let rainfall_values: Vec<f64> = rainfall.values().copied().collect();
    StateComparison {
        average_rainfall: mean(&rainfall_values),
        state,
        climate_zone,
        rainfall,
        crops,
    }
}

/// Format the comparison as a markdown answer, one section per state.
pub fn render(comparison: &[StateComparison]) -> String {
    let names: Vec<String> = comparison.iter().map(|s| s.state.clone()).collect();
    let mut md = format!("## Comparative Analysis: {}\n\n", join_titles(&names));

    for state in comparison {
        md.push_str(&format!("### {}\n", title_case(&state.state)));
        md.push_str(&format!("- **Climate Zone**: {}\n", state.climate_zone));
        md.push_str(&format!("- **Average Rainfall**: {:.1}mm\n", state.average_rainfall));

        for crop in &state.crops {
            md.push_str(&format!(
                "- **{}**: {} thousand tonnes (Water: {})\n",
                crop.crop,
                format_thousands(crop.average_production),
                crop.water_requirement
            ));
        }
        md.push('\n');
    }

    md
}
