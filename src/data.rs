//! Static Dataset
//!
//! Crop production, water requirements, and climate records for the states
//! the Q&A service knows about, plus the two citation records attached to
//! every answer.
//!
//! The dataset is an explicit, immutable value: build it once with
//! [`Dataset::builtin`] (or load an alternative from JSON) and hand it to
//! [`crate::QaService`]. Nothing in the crate reads ambient global data.
//!
//! JSON shape (also the serde representation):
//!
//! ```json
//! {
//!   "agriculture": { "<state>": { "crops": { "<Crop>": { "2018": 4500 } },
//!                                  "water_requirements": { "<Crop>": "Low (350-400mm)" } } },
//!   "climate": { "<state>": { "rainfall": { "2018": 450 }, "drought_years": [2020],
//!                             "avg_temperature": 28.5, "climate_zone": "Arid" } },
//!   "sources": { "agriculture": { "name": "", "url": "", "description": "" },
//!                "climate": { "name": "", "url": "", "description": "" } }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{QaError, QaResult};

/// Year → value (production in thousand tonnes, or rainfall in mm), ascending by year.
pub type YearSeries = BTreeMap<u16, f64>;

/// Citation record for a statistical source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// The two sources every answer cites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSources {
    pub agriculture: DataSource,
    pub climate: DataSource,
}

/// Per-state crop production and water requirement labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateAgriculture {
    /// Crop (canonical name) → yearly production
    pub crops: BTreeMap<String, YearSeries>,
    /// Crop (canonical name) → water requirement label, e.g. "Low (350-400mm)"
    #[serde(default)]
    pub water_requirements: FxHashMap<String, String>,
}

/// Per-state climate record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateClimate {
    pub rainfall: YearSeries,
    #[serde(default)]
    pub drought_years: Vec<u16>,
    pub avg_temperature: f64,
    pub climate_zone: String,
}

/// Inclusive range of years covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: u16,
    pub end: u16,
}

impl std::fmt::Display for YearSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Immutable agricultural + climate dataset.
///
/// Deserializing goes through [`Dataset::new`], so a dataset built from
/// JSON is always validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    agriculture: FxHashMap<String, StateAgriculture>,
    climate: FxHashMap<String, StateClimate>,
    sources: DataSources,
}

/// Unvalidated wire form of [`Dataset`].
#[derive(Deserialize)]
struct RawDataset {
    agriculture: FxHashMap<String, StateAgriculture>,
    climate: FxHashMap<String, StateClimate>,
    sources: DataSources,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = QaError;

    fn try_from(raw: RawDataset) -> QaResult<Self> {
        Dataset::new(raw.agriculture, raw.climate, raw.sources)
    }
}

impl Dataset {
    /// Assemble a dataset from its tables. Fails if the tables are inconsistent.
    pub fn new(
        agriculture: FxHashMap<String, StateAgriculture>,
        climate: FxHashMap<String, StateClimate>,
        sources: DataSources,
    ) -> QaResult<Self> {
        let dataset = Self { agriculture, climate, sources };
        dataset.validate()?;
        Ok(dataset)
    }

    /// The built-in 2018-2022 dataset for Rajasthan and Punjab.
    pub fn builtin() -> Self {
        let mut agriculture = FxHashMap::default();
        agriculture.insert(
            "rajasthan".to_string(),
            state_agriculture(&[
                ("Bajra", [4500.0, 4200.0, 3800.0, 3500.0, 4000.0], "Low (350-400mm)"),
                ("Wheat", [3200.0, 3100.0, 2800.0, 2500.0, 2700.0], "High (500-600mm)"),
                ("Groundnut", [800.0, 750.0, 700.0, 650.0, 720.0], "Medium (400-500mm)"),
                ("Guar", [600.0, 620.0, 580.0, 550.0, 590.0], "Very Low (250-300mm)"),
                ("Rice", [1200.0, 1100.0, 900.0, 800.0, 850.0], "Very High (1200-1500mm)"),
            ]),
        );
        agriculture.insert(
            "punjab".to_string(),
            state_agriculture(&[
                ("Wheat", [18000.0, 17500.0, 17000.0, 16500.0, 16800.0], "High (500-600mm)"),
                ("Rice", [16000.0, 15800.0, 15500.0, 15200.0, 15400.0], "Very High (1200-1500mm)"),
                ("Cotton", [2000.0, 1900.0, 1850.0, 1800.0, 1820.0], "Medium (400-500mm)"),
                ("Bajra", [800.0, 750.0, 700.0, 650.0, 680.0], "Low (350-400mm)"),
            ]),
        );

        let mut climate = FxHashMap::default();
        climate.insert(
            "rajasthan".to_string(),
            StateClimate {
                rainfall: series([450.0, 380.0, 320.0, 290.0, 410.0]),
                drought_years: vec![2020, 2021],
                avg_temperature: 28.5,
                climate_zone: "Arid".to_string(),
            },
        );
        climate.insert(
            "punjab".to_string(),
            StateClimate {
                rainfall: series([650.0, 620.0, 580.0, 590.0, 610.0]),
                drought_years: Vec::new(),
                avg_temperature: 24.0,
                climate_zone: "Semi-Arid".to_string(),
            },
        );

        let sources = DataSources {
            agriculture: DataSource {
                name: "Ministry of Agriculture - Crop Production Statistics".to_string(),
                url: "https://data.gov.in/resource/all-india-season-wise-crop-production-statistics"
                    .to_string(),
                description: "State-wise and crop-wise production data from 2018-2022".to_string(),
            },
            climate: DataSource {
                name: "India Meteorological Department - Rainfall Data".to_string(),
                url: "https://data.gov.in/resource/district-wise-rainfall-normal".to_string(),
                description: "Historical rainfall patterns and climate data from 2018-2022"
                    .to_string(),
            },
        };

        Self { agriculture, climate, sources }
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(json: &str) -> QaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| QaError::Dataset(format!("invalid dataset JSON: {}", e)))
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {:?}", path))?;

        let dataset = Self::from_json_str(&contents)
            .with_context(|| format!("Failed to load dataset from {:?}", path))?;

        tracing::info!(
            "Loaded dataset from {:?} ({} states)",
            path,
            dataset.states().len()
        );
        Ok(dataset)
    }

    /// Check the invariants every generator relies on.
    pub fn validate(&self) -> QaResult<()> {
        for (state, record) in &self.agriculture {
            for (crop, values) in &record.crops {
                if let Some((year, value)) = values.iter().find(|(_, v)| !is_valid_amount(**v)) {
                    return Err(QaError::Dataset(format!(
                        "{}/{}: production for {} must be finite and non-negative (got {})",
                        state, crop, year, value
                    )));
                }
            }
        }

        for (state, record) in &self.climate {
            if let Some((year, value)) = record.rainfall.iter().find(|(_, v)| !is_valid_amount(**v)) {
                return Err(QaError::Dataset(format!(
                    "{}: rainfall for {} must be finite and non-negative (got {})",
                    state, year, value
                )));
            }
            if !record.avg_temperature.is_finite() {
                return Err(QaError::Dataset(format!("{}: average temperature is not finite", state)));
            }
        }

        for state in self.states() {
            let has_crops = self
                .agriculture
                .get(state)
                .map(|a| !a.crops.is_empty())
                .unwrap_or(false);
            let has_rainfall = self
                .climate
                .get(state)
                .map(|c| !c.rainfall.is_empty())
                .unwrap_or(false);
            if !has_crops && !has_rainfall {
                return Err(QaError::Dataset(format!(
                    "{}: state has neither crop production nor rainfall records",
                    state
                )));
            }
        }

        Ok(())
    }

    pub fn agriculture(&self, state: &str) -> Option<&StateAgriculture> {
        self.agriculture.get(state)
    }

    pub fn climate(&self, state: &str) -> Option<&StateClimate> {
        self.climate.get(state)
    }

    /// Yearly production of `crop` in `state`, if recorded.
    pub fn production(&self, state: &str, crop: &str) -> Option<&YearSeries> {
        self.agriculture.get(state).and_then(|a| a.crops.get(crop))
    }

    /// Water requirement label of `crop` in `state`, if recorded.
    pub fn water_requirement(&self, state: &str, crop: &str) -> Option<&str> {
        self.agriculture
            .get(state)
            .and_then(|a| a.water_requirements.get(crop))
            .map(|s| s.as_str())
    }

    /// Citation records in answer order: agriculture, then climate.
    pub fn sources(&self) -> Vec<DataSource> {
        vec![self.sources.agriculture.clone(), self.sources.climate.clone()]
    }

    /// Every state with agriculture or climate records, sorted.
    pub fn states(&self) -> Vec<&str> {
        let states: BTreeSet<&str> = self
            .agriculture
            .keys()
            .chain(self.climate.keys())
            .map(|s| s.as_str())
            .collect();
        states.into_iter().collect()
    }

    /// Every crop with production records in any state, sorted.
    pub fn crops(&self) -> Vec<&str> {
        let crops: BTreeSet<&str> = self
            .agriculture
            .values()
            .flat_map(|a| a.crops.keys())
            .map(|s| s.as_str())
            .collect();
        crops.into_iter().collect()
    }

    /// First and last year present in any production or rainfall series.
    pub fn coverage(&self) -> Option<YearSpan> {
        let years = self
            .agriculture
            .values()
            .flat_map(|a| a.crops.values())
            .chain(self.climate.values().map(|c| &c.rainfall))
            .flat_map(|s| s.keys().copied());

        years.fold(None, |span: Option<YearSpan>, year| match span {
            None => Some(YearSpan { start: year, end: year }),
            Some(s) => Some(YearSpan {
                start: s.start.min(year),
                end: s.end.max(year),
            }),
        })
    }

    /// Coverage formatted as "2018-2022" for report headings.
    pub fn coverage_label(&self) -> String {
        self.coverage()
            .map(|span| span.to_string())
            .unwrap_or_else(|| "all available years".to_string())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Built-in series all start at 2018.
fn series(values: [f64; 5]) -> YearSeries {
    (2018u16..).zip(values).collect()
}

fn state_agriculture(rows: &[(&str, [f64; 5], &str)]) -> StateAgriculture {
    let mut record = StateAgriculture::default();
    for (crop, values, water) in rows {
        record.crops.insert(crop.to_string(), series(*values));
        record
            .water_requirements
            .insert(crop.to_string(), water.to_string());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let data = Dataset::builtin();
        assert_eq!(data.states(), vec!["punjab", "rajasthan"]);
        assert_eq!(
            data.crops(),
            vec!["Bajra", "Cotton", "Groundnut", "Guar", "Rice", "Wheat"]
        );

        let bajra = data.production("punjab", "Bajra").unwrap();
        assert_eq!(bajra.keys().copied().collect::<Vec<_>>(), vec![2018, 2019, 2020, 2021, 2022]);
        assert_eq!(bajra[&2022], 680.0);

        assert_eq!(data.water_requirement("rajasthan", "Guar"), Some("Very Low (250-300mm)"));
        assert_eq!(data.water_requirement("punjab", "Guar"), None);
        assert_eq!(data.climate("rajasthan").unwrap().drought_years, vec![2020, 2021]);
        assert!(data.climate("gujarat").is_none());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_coverage() {
        let data = Dataset::builtin();
        assert_eq!(data.coverage(), Some(YearSpan { start: 2018, end: 2022 }));
        assert_eq!(data.coverage_label(), "2018-2022");
    }

    #[test]
    fn test_sources_order() {
        let sources = Dataset::builtin().sources();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].name.starts_with("Ministry of Agriculture"));
        assert!(sources[1].name.starts_with("India Meteorological Department"));
    }

    #[test]
    fn test_json_round_trip_preserves_tables() {
        let json = serde_json::to_string(&Dataset::builtin()).unwrap();
        let data = Dataset::from_json_str(&json).unwrap();
        assert_eq!(data.production("rajasthan", "Bajra").unwrap()[&2020], 3800.0);
        assert_eq!(data.climate("punjab").unwrap().climate_zone, "Semi-Arid");
    }

    #[test]
    fn test_rejects_negative_rainfall() {
        let json = r#"{
            "agriculture": {},
            "climate": { "kerala": { "rainfall": { "2020": -5 }, "avg_temperature": 27.0, "climate_zone": "Tropical" } },
            "sources": {
                "agriculture": { "name": "a", "url": "u", "description": "d" },
                "climate": { "name": "c", "url": "u", "description": "d" }
            }
        }"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, QaError::Dataset(_)));
        assert!(err.to_string().contains("kerala"));
    }

    #[test]
    fn test_plain_deserialize_also_validates() {
        let json = r#"{
            "agriculture": { "kerala": { "crops": { "Rice": { "2020": -1 } } } },
            "climate": {},
            "sources": {
                "agriculture": { "name": "a", "url": "u", "description": "d" },
                "climate": { "name": "c", "url": "u", "description": "d" }
            }
        }"#;
        let err = serde_json::from_str::<Dataset>(json).unwrap_err();
        assert!(err.to_string().contains("kerala/Rice"));
    }

    #[test]
    fn test_new_rejects_state_without_records() {
        let mut agriculture = FxHashMap::default();
        agriculture.insert("kerala".to_string(), StateAgriculture::default());
        let sources = Dataset::builtin().sources;

        let err = Dataset::new(agriculture, FxHashMap::default(), sources).unwrap_err();
        assert!(matches!(err, QaError::Dataset(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Dataset::from_json_str("{ not json"),
            Err(QaError::Dataset(_))
        ));
    }
}
