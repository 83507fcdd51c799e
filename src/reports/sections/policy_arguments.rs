//! Policy Arguments: Promoting Drought-Resistant Crops
//!
//! Builds three data-backed arguments for shifting a state's farmers from
//! water-intensive crops (Rice, Wheat) to drought-resistant ones (Bajra, Guar):
//!
//! 1. Water Scarcity Adaptation - average rainfall, climate zone, drought years
//! 2. Economic Resilience - production stability and drought resilience per crop
//! 3. Sustainable Resource Management - water requirement of the recommended crops
//!
//! Drought resilience = mean production in drought years as a percentage of
//! mean production in the other years.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{Dataset, YearSeries};
use crate::error::QaResult;
use crate::extraction::ExtractedEntities;
use crate::reports::sections::{
    warn_unknown_states, DEFAULT_STATE, DROUGHT_RESISTANT_CROPS, UNKNOWN, WATER_INTENSIVE_CROPS,
};
use crate::reports::types::AnswerResult;
use crate::utils::{format_thousands, join_years, mean, title_case, variance};

/// Production stability of one crop in the target state.
#[derive(Debug, Clone, Serialize)]
pub struct CropStability {
    pub average_production: f64,
    pub production_variance: f64,
    /// Ratio formatted as "86.2%"
    pub drought_resilience: String,
    #[serde(skip)]
    pub resilience_ratio: f64,
}

/// Everything the policy report states, before formatting.
#[derive(Debug, Clone)]
pub struct PolicyAnalysis {
    pub state: String,
    pub average_rainfall: f64,
    pub climate_zone: String,
    pub drought_years: Vec<u16>,
    /// Drought-resistant crops first, then water-intensive, as found in the state
    pub crop_stability: Vec<(String, CropStability)>,
    /// Water labels of the drought-resistant crops the state records
    pub recommended_crops: Vec<(String, String)>,
    /// Water labels of all categorized crops ("Unknown" when missing)
    pub water_requirements: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct PolicyDataPoints<'a> {
    average_rainfall: f64,
    drought_years: &'a [u16],
    climate_zone: &'a str,
    crop_stability: BTreeMap<&'a str, &'a CropStability>,
    water_requirements: &'a BTreeMap<String, String>,
}

/// Generate the policy-argument answer.
pub fn generate(dataset: &Dataset, entities: &ExtractedEntities) -> QaResult<AnswerResult> {
    let analysis = analyze(dataset, entities);
    let answer = render(&analysis, &dataset.coverage_label());

    let data_points = serde_json::to_value(PolicyDataPoints {
        average_rainfall: analysis.average_rainfall,
        drought_years: &analysis.drought_years,
        climate_zone: &analysis.climate_zone,
        crop_stability: analysis
            .crop_stability
            .iter()
            .map(|(crop, stability)| (crop.as_str(), stability))
            .collect(),
        water_requirements: &analysis.water_requirements,
    })?;

    Ok(AnswerResult {
        answer,
        sources: dataset.sources(),
        data_points,
    })
}

/// Compute the figures behind the three arguments.
pub fn analyze(dataset: &Dataset, entities: &ExtractedEntities) -> PolicyAnalysis {
    let state = entities.primary_state().unwrap_or(DEFAULT_STATE).to_string();
    warn_unknown_states(dataset, std::slice::from_ref(&state));

    let climate = dataset.climate(&state);
    let rainfall: Vec<f64> = climate
        .map(|c| c.rainfall.values().copied().collect())
        .unwrap_or_default();
    let drought_years = climate.map(|c| c.drought_years.clone()).unwrap_or_default();
    let climate_zone = climate
        .map(|c| c.climate_zone.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let crop_stability = categorized_crops()
        .filter_map(|crop| {
            let series = dataset.production(&state, crop)?;
            if series.len() < 2 {
                return None;
            }
            Some((crop.to_string(), crop_stability(series, &drought_years)))
        })
        .collect();

    let recommended_crops = DROUGHT_RESISTANT_CROPS
        .iter()
        .filter_map(|crop| {
            dataset
                .water_requirement(&state, crop)
                .map(|label| (crop.to_string(), label.to_string()))
        })
        .collect();

    let water_requirements = categorized_crops()
        .map(|crop| {
            let label = dataset.water_requirement(&state, crop).unwrap_or(UNKNOWN);
            (crop.to_string(), label.to_string())
        })
        .collect();

    PolicyAnalysis {
        state,
        average_rainfall: mean(&rainfall),
        climate_zone,
        drought_years,
        crop_stability,
        recommended_crops,
        water_requirements,
    }
}

fn categorized_crops() -> impl Iterator<Item = &'static str> {
    DROUGHT_RESISTANT_CROPS
        .iter()
        .chain(WATER_INTENSIVE_CROPS.iter())
        .copied()
}

fn crop_stability(series: &YearSeries, drought_years: &[u16]) -> CropStability {
    let values: Vec<f64> = series.values().copied().collect();
    let ratio = drought_resilience(series, drought_years);
    CropStability {
        average_production: mean(&values),
        production_variance: variance(&values),
        drought_resilience: format!("{:.1}%", ratio),
        resilience_ratio: ratio,
    }
}

/// Mean drought-year production as a percentage of mean other-year production.
///
/// With no drought years the ratio is 0. With only drought years the
/// denominator is the overall mean. A non-positive denominator gives 0.
pub fn drought_resilience(series: &YearSeries, drought_years: &[u16]) -> f64 {
    let (drought, normal): (Vec<(&u16, &f64)>, Vec<(&u16, &f64)>) = series
        .iter()
        .partition(|(year, _)| drought_years.contains(*year));

    let drought: Vec<f64> = drought.into_iter().map(|(_, v)| *v).collect();
    let normal: Vec<f64> = normal.into_iter().map(|(_, v)| *v).collect();

    let avg_drought = mean(&drought);
    let avg_normal = if normal.is_empty() {
        mean(&series.values().copied().collect::<Vec<_>>())
    } else {
        mean(&normal)
    };

    if avg_normal > 0.0 {
        avg_drought / avg_normal * 100.0
    } else {
        0.0
    }
}

/// Format the analysis as a markdown answer.
pub fn render(analysis: &PolicyAnalysis, period: &str) -> String {
    let state = title_case(&analysis.state);
    let mut md = String::with_capacity(2048);

    md.push_str(&format!(
        "## Data-Backed Arguments for Promoting Drought-Resistant Crops in {}\n\n",
        state
    ));
    md.push_str(&format!(
        "Based on integrated analysis of climate and agricultural data from {}:\n\n",
        period
    ));

    // 1. Water scarcity
    let drought_clause = if analysis.drought_years.is_empty() {
        "no recorded drought years".to_string()
    } else {
        format!("recent drought years in {}", join_years(&analysis.drought_years))
    };
    md.push_str("### 1. Water Scarcity Adaptation\n");
    md.push_str(&format!(
        "**{}** receives only **{:.0}mm** average annual rainfall (classified as {}) with {}. \
         Drought-resistant crops like {} require **60-70% less water** than water-intensive \
         alternatives like {}.\n\n",
        state,
        analysis.average_rainfall,
        analysis.climate_zone.to_lowercase(),
        drought_clause,
        DROUGHT_RESISTANT_CROPS.join(" and "),
        WATER_INTENSIVE_CROPS.join(" and "),
    ));
    md.push_str(&format!("- Average Rainfall: {:.0}mm\n", analysis.average_rainfall));
    md.push_str(&format!("- Climate Zone: {}\n", analysis.climate_zone));
    md.push_str(&format!(
        "- Recent Drought Years: {}\n\n",
        join_years(&analysis.drought_years)
    ));

    // 2. Economic resilience
    md.push_str("### 2. Economic Resilience\n");
    md.push_str(
        "Drought-resistant crops maintain higher production levels during drought years, \
         providing economic stability to farmers when they need it most.\n\n",
    );
    for (crop, stability) in &analysis.crop_stability {
        md.push_str(&format!(
            "- **{}**: {} thousand tonnes average, {} drought resilience\n",
            crop,
            format_thousands(stability.average_production),
            stability.drought_resilience
        ));
    }
    if !analysis.crop_stability.is_empty() {
        md.push('\n');
    }

    // 3. Sustainability
    md.push_str("### 3. Sustainable Resource Management\n");
    md.push_str(&format!(
        "With groundwater levels in {} declining rapidly, shifting to low-water crops is \
         essential for long-term agricultural sustainability.\n\n",
        state
    ));

    md.push_str("### Recommended Drought-Resistant Crops:\n");
    for (crop, label) in &analysis.recommended_crops {
        md.push_str(&format!("- **{}**: {} water requirement\n", crop, label));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entities_for(state: &str) -> ExtractedEntities {
        ExtractedEntities {
            states: vec![state.to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_rajasthan_analysis() {
        let analysis = analyze(&Dataset::builtin(), &entities_for("rajasthan"));
        assert_relative_eq!(analysis.average_rainfall, 370.0, epsilon = 1e-9);
        assert_eq!(analysis.climate_zone, "Arid");
        assert_eq!(analysis.drought_years, vec![2020, 2021]);

        let crops: Vec<&str> = analysis.crop_stability.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(crops, vec!["Bajra", "Guar", "Rice", "Wheat"]);

        let (_, bajra) = &analysis.crop_stability[0];
        assert_relative_eq!(bajra.average_production, 4000.0, epsilon = 1e-9);
        assert_relative_eq!(bajra.production_variance, 116_000.0, epsilon = 1e-6);
        // (3800+3500)/2 = 3650 vs (4500+4200+4000)/3 = 4233.3
        assert_relative_eq!(bajra.resilience_ratio, 86.22, epsilon = 0.01);
        assert_eq!(bajra.drought_resilience, "86.2%");
    }

    #[test]
    fn test_no_drought_years_gives_zero_ratio() {
        let analysis = analyze(&Dataset::builtin(), &entities_for("punjab"));
        assert!(analysis.drought_years.is_empty());
        for (_, stability) in &analysis.crop_stability {
            assert_eq!(stability.drought_resilience, "0.0%");
        }
        // Guar is not grown in Punjab
        assert!(analysis.crop_stability.iter().all(|(c, _)| c != "Guar"));
        assert_eq!(analysis.water_requirements["Guar"], "Unknown");
    }

    #[test]
    fn test_all_drought_years_uses_overall_mean() {
        let series: YearSeries = [(2020, 100.0), (2021, 300.0)].into_iter().collect();
        assert_relative_eq!(drought_resilience(&series, &[2020, 2021]), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_production_gives_zero_ratio() {
        let series: YearSeries = [(2020, 0.0), (2021, 0.0)].into_iter().collect();
        assert_eq!(drought_resilience(&series, &[2020]), 0.0);
    }

    #[test]
    fn test_render_rajasthan() {
        let data = Dataset::builtin();
        let answer = render(&analyze(&data, &entities_for("rajasthan")), "2018-2022");
        assert!(answer.starts_with(
            "## Data-Backed Arguments for Promoting Drought-Resistant Crops in Rajasthan\n"
        ));
        assert!(answer.contains("- Average Rainfall: 370mm\n"));
        assert!(answer.contains("- Recent Drought Years: 2020, 2021\n"));
        assert!(answer.contains("- **Bajra**: Low (350-400mm) water requirement\n"));
        assert!(answer.contains("- **Guar**: Very Low (250-300mm) water requirement\n"));
        assert!(answer.contains("- **Bajra**: 4,000 thousand tonnes average, 86.2% drought resilience\n"));
    }

    #[test]
    fn test_unknown_state_degrades() {
        let data = Dataset::builtin();
        let analysis = analyze(&data, &entities_for("gujarat"));
        assert_eq!(analysis.average_rainfall, 0.0);
        assert_eq!(analysis.climate_zone, "Unknown");
        assert!(analysis.crop_stability.is_empty());
        assert!(analysis.recommended_crops.is_empty());

        let answer = render(&analysis, "2018-2022");
        assert!(answer.contains("Gujarat"));
        assert!(answer.contains("- Recent Drought Years: None\n"));
        assert!(answer.contains("(classified as unknown) with no recorded drought years."));
    }

    #[test]
    fn test_generate_data_points() {
        let result = generate(&Dataset::builtin(), &ExtractedEntities::default()).unwrap();
        let points = &result.data_points;
        assert_eq!(points["climate_zone"], "Arid");
        assert_eq!(points["drought_years"], serde_json::json!([2020, 2021]));
        // (580+550)/2 = 565 vs (600+620+590)/3 = 603.3
        assert_eq!(points["crop_stability"]["Guar"]["drought_resilience"], "93.6%");
        assert!(points["crop_stability"]["Bajra"].get("resilience_ratio").is_none());
        assert_eq!(points["water_requirements"]["Rice"], "Very High (1200-1500mm)");
        assert_eq!(result.sources.len(), 2);
    }
}
