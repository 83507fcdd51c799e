//! Trend Analysis
//!
//! Rainfall and crop production trends for one state over the dataset's
//! years. Trend = (last - first) / number of years; a flat series reads as
//! decreasing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{Dataset, YearSeries};
use crate::error::QaResult;
use crate::extraction::ExtractedEntities;
use crate::reports::sections::{or_defaults, warn_unknown_states, DEFAULT_CROPS, DEFAULT_STATE};
use crate::reports::types::AnswerResult;
use crate::utils::{join_years, linear_trend, title_case, TrendDirection};

/// Slope of a yearly series and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesTrend {
    pub change_per_year: f64,
    pub direction: TrendDirection,
}

impl SeriesTrend {
    /// Trend over the series in ascending year order; `None` below two years.
    pub fn of(series: &YearSeries) -> Option<Self> {
        let values: Vec<f64> = series.values().copied().collect();
        linear_trend(&values).map(|slope| SeriesTrend {
            change_per_year: slope,
            direction: TrendDirection::from_slope(slope),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CropTrend {
    pub crop: String,
    pub production: YearSeries,
    pub trend: SeriesTrend,
}

#[derive(Debug, Clone)]
pub struct TrendAnalysis {
    pub state: String,
    pub rainfall: YearSeries,
    pub rainfall_trend: Option<SeriesTrend>,
    pub drought_years: Vec<u16>,
    /// Requested crops with at least two years of production, in request order
    pub crops: Vec<CropTrend>,
}

#[derive(Serialize)]
struct TrendDataPoints<'a> {
    rainfall_trend: &'a YearSeries,
    crop_trends: BTreeMap<&'a str, &'a YearSeries>,
    rainfall_change_per_year: Option<f64>,
    production_change_per_year: BTreeMap<&'a str, f64>,
}

/// Generate the trend answer.
pub fn generate(dataset: &Dataset, entities: &ExtractedEntities) -> QaResult<AnswerResult> {
    let analysis = analyze(dataset, entities);
    let answer = render(&analysis, &dataset.coverage_label());

    let data_points = serde_json::to_value(TrendDataPoints {
        rainfall_trend: &analysis.rainfall,
        crop_trends: analysis
            .crops
            .iter()
            .map(|c| (c.crop.as_str(), &c.production))
            .collect(),
        rainfall_change_per_year: analysis.rainfall_trend.map(|t| t.change_per_year),
        production_change_per_year: analysis
            .crops
            .iter()
            .map(|c| (c.crop.as_str(), c.trend.change_per_year))
            .collect(),
    })?;

    Ok(AnswerResult {
        answer,
        sources: dataset.sources(),
        data_points,
    })
}

/// Compute rainfall and production trends (defaults: Rajasthan; Bajra and Wheat).
pub fn analyze(dataset: &Dataset, entities: &ExtractedEntities) -> TrendAnalysis {
    let state = entities.primary_state().unwrap_or(DEFAULT_STATE).to_string();
    let crops = or_defaults(&entities.crops, DEFAULT_CROPS);
    warn_unknown_states(dataset, std::slice::from_ref(&state));

    let climate = dataset.climate(&state);
    let rainfall = climate.map(|c| c.rainfall.clone()).unwrap_or_default();
    let drought_years = climate.map(|c| c.drought_years.clone()).unwrap_or_default();

    let crops = crops
        .iter()
        .filter_map(|crop| {
            let production = dataset.production(&state, crop)?;
            let trend = SeriesTrend::of(production)?;
            Some(CropTrend {
                crop: crop.clone(),
                production: production.clone(),
                trend,
            })
        })
        .collect();

    TrendAnalysis {
        rainfall_trend: SeriesTrend::of(&rainfall),
        state,
        rainfall,
        drought_years,
        crops,
    }
}

/// Format the trends as a markdown answer.
pub fn render(analysis: &TrendAnalysis, period: &str) -> String {
    let mut md = format!(
        "## Trend Analysis for {} ({})\n\n",
        title_case(&analysis.state),
        period
    );

    if let Some(trend) = analysis.rainfall_trend {
        md.push_str("### Climate Trends\n");
        md.push_str(&format!(
            "- **Rainfall Trend**: {} {} by {:.1}mm per year\n",
            trend.direction.arrow(),
            trend.direction.label(),
            trend.change_per_year.abs()
        ));
        md.push_str(&format!(
            "- **Drought Years**: {}\n\n",
            join_years(&analysis.drought_years)
        ));
    }

    md.push_str("### Crop Production Trends\n");
    for crop in &analysis.crops {
        md.push_str(&format!(
            "- **{}**: {} {} by {:.1} thousand tonnes/year\n",
            crop.crop,
            crop.trend.direction.chart_icon(),
            crop.trend.direction.label(),
            crop.trend.change_per_year.abs()
        ));
    }

    md
}
