//! Q&A Integration Tests
//!
//! Full question → answer runs through `QaService` against the built-in
//! dataset, plus runs against datasets loaded from JSON or built in code.

use approx::assert_relative_eq;
use rustc_hash::FxHashMap;
use samarth_qa::data::{DataSources, StateAgriculture, StateClimate};
use samarth_qa::reports::formatters::MarkdownFormatter;
use samarth_qa::{DataSource, Dataset, Intent, QaError, QaService};

fn service() -> QaService {
    QaService::new(Dataset::builtin()).expect("built-in dataset is valid")
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_policy_question() {
    let result = service()
        .answer_question("Give me arguments to promote drought-resistant crops in Rajasthan")
        .unwrap();

    assert!(result.answer.starts_with(
        "## Data-Backed Arguments for Promoting Drought-Resistant Crops in Rajasthan\n\n"
    ));
    assert!(result
        .answer
        .contains("Based on integrated analysis of climate and agricultural data from 2018-2022:"));
    assert!(result.answer.contains("### 1. Water Scarcity Adaptation\n"));
    assert!(result.answer.contains("### 2. Economic Resilience\n"));
    assert!(result.answer.contains("### 3. Sustainable Resource Management\n"));
    assert!(result.answer.contains("**370mm** average annual rainfall (classified as arid)"));
    assert!(result.answer.contains("- **Guar**: Very Low (250-300mm) water requirement\n"));
    assert_eq!(result.data_points["average_rainfall"], 370.0);
}

#[test]
fn test_drought_keyword_fallback_routes_to_policy() {
    let result = service()
        .answer_question("Which crops in Rajasthan are drought resistant?")
        .unwrap();
    assert!(result.answer.starts_with("## Data-Backed Arguments"));
}

#[test]
fn test_comparison_question() {
    let svc = service();
    let question = "Compare wheat production in Punjab and Haryana";
    let entities = svc.extract(question);
    assert_eq!(entities.intent, Some(Intent::Comparison));
    assert_eq!(entities.states, vec!["punjab", "haryana"]);

    let result = svc.answer_question(question).unwrap();
    assert!(result.answer.starts_with("## Comparative Analysis: Punjab, Haryana\n\n"));
    assert!(result
        .answer
        .contains("### Punjab\n- **Climate Zone**: Semi-Arid\n- **Average Rainfall**: 610.0mm\n"));
    assert!(result
        .answer
        .contains("- **Wheat**: 17,160 thousand tonnes (Water: High (500-600mm))\n"));
    assert!(result.answer.contains("### Haryana\n- **Climate Zone**: Unknown\n"));
    assert!(!result.answer.contains("Bajra"));
}

#[test]
fn test_trend_question() {
    let result = service()
        .answer_question("What is the trend of wheat and rice production in Punjab?")
        .unwrap();

    assert!(result.answer.starts_with("## Trend Analysis for Punjab (2018-2022)\n\n"));
    // (610 - 650) / 5
    assert!(result.answer.contains("- **Rainfall Trend**: ↓ Decreasing by 8.0mm per year\n"));
    assert!(result.answer.contains("- **Drought Years**: None\n"));
    // (16800 - 18000) / 5 and (15400 - 16000) / 5
    assert!(result
        .answer
        .contains("- **Wheat**: 📉 Decreasing by 240.0 thousand tonnes/year\n"));
    assert!(result
        .answer
        .contains("- **Rice**: 📉 Decreasing by 120.0 thousand tonnes/year\n"));

    let wheat = result.data_points["production_change_per_year"]["Wheat"]
        .as_f64()
        .unwrap();
    assert_relative_eq!(wheat, -240.0, epsilon = 1e-9);
}

#[test]
fn test_unrecognized_question_gets_default_comparison() {
    let svc = service();
    let empty = svc.answer_question("").unwrap();
    let noise = svc.answer_question("hello there").unwrap();

    assert_eq!(empty.answer, noise.answer);
    assert!(empty.answer.starts_with("## Comparative Analysis: Rajasthan, Punjab\n\n"));
    assert!(empty.answer.contains("- **Bajra**: 4,000 thousand tonnes"));
    assert!(empty.answer.contains("- **Wheat**: 2,860 thousand tonnes"));
}

// ============================================================================
// Answer invariants
// ============================================================================

#[test]
fn test_every_answer_cites_both_sources() {
    let svc = service();
    for question in [
        "",
        "Compare rice in Rajasthan and Punjab",
        "Show the rainfall trend for Rajasthan",
        "Why promote bajra?",
        "Tell me about guar in gujarat",
    ] {
        let result = svc.answer_question(question).unwrap();
        let names: Vec<&str> = result.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Ministry of Agriculture - Crop Production Statistics",
                "India Meteorological Department - Rainfall Data",
            ],
            "question: {:?}",
            question
        );
        assert!(result.data_points.is_object());
    }
}

#[test]
fn test_answers_are_deterministic() {
    let svc = service();
    let question = "Compare the production trend of millet in Rajasthan";
    let first = svc.answer_question(question).unwrap();
    let second = svc.answer_question(question).unwrap();
    assert_eq!(first.answer, second.answer);
    assert_eq!(first.data_points, second.data_points);
}

#[test]
fn test_batch_matches_single_answers() {
    let svc = service();
    let questions = vec![
        "Compare bajra in Rajasthan and Punjab".to_string(),
        "Trend of cotton in Punjab".to_string(),
        "Arguments to promote guar in Rajasthan".to_string(),
    ];

    let batch = svc.answer_batch(&questions);
    for (question, result) in questions.iter().zip(&batch) {
        let single = svc.answer_question(question).unwrap();
        assert_eq!(result.as_ref().unwrap().answer, single.answer);
    }
}

#[test]
fn test_markdown_output_lists_sources() {
    let result = service().answer_question("Trend of bajra in Rajasthan").unwrap();
    let md = MarkdownFormatter::format(&result);
    assert!(md.starts_with("## Trend Analysis for Rajasthan (2018-2022)"));
    assert!(md.contains("\n---\n\n### Data Sources\n\n"));
    assert!(md.ends_with("Historical rainfall patterns and climate data from 2018-2022\n"));
}

// ============================================================================
// Alternative datasets
// ============================================================================

const GUJARAT_DATASET: &str = r#"{
  "agriculture": {
    "gujarat": {
      "crops": { "Cotton": { "2019": 8000, "2020": 8600, "2021": 9200 } },
      "water_requirements": { "Cotton": "Medium (400-500mm)" }
    }
  },
  "climate": {
    "gujarat": {
      "rainfall": { "2019": 800, "2020": 700, "2021": 740 },
      "drought_years": [2020],
      "avg_temperature": 27.0,
      "climate_zone": "Semi-Arid"
    }
  },
  "sources": {
    "agriculture": { "name": "Crop stats", "url": "https://example.org/crops", "description": "Crops" },
    "climate": { "name": "Rain stats", "url": "https://example.org/rain", "description": "Rain" }
  }
}"#;

#[test]
fn test_json_dataset_drives_reports() {
    let dataset = Dataset::from_json_str(GUJARAT_DATASET).unwrap();
    assert_eq!(dataset.coverage_label(), "2019-2021");

    let svc = QaService::new(dataset).unwrap();
    let result = svc.answer_question("Show the cotton trend in Gujarat").unwrap();

    assert!(result.answer.starts_with("## Trend Analysis for Gujarat (2019-2021)\n\n"));
    // (740 - 800) / 3 and (9200 - 8000) / 3
    assert!(result.answer.contains("- **Rainfall Trend**: ↓ Decreasing by 20.0mm per year\n"));
    assert!(result.answer.contains("- **Drought Years**: 2020\n"));
    assert!(result
        .answer
        .contains("- **Cotton**: 📈 Increasing by 400.0 thousand tonnes/year\n"));
    assert_eq!(result.sources[0].name, "Crop stats");
}

#[test]
fn test_invalid_json_dataset_is_rejected() {
    let negative = GUJARAT_DATASET.replace("\"2019\": 8000", "\"2019\": -1");
    assert!(matches!(
        Dataset::from_json_str(&negative),
        Err(QaError::Dataset(_))
    ));
    assert!(matches!(
        Dataset::from_json_str("{ not json"),
        Err(QaError::Dataset(_))
    ));
}

fn source(name: &str) -> DataSource {
    DataSource {
        name: name.to_string(),
        url: format!("https://example.org/{}", name),
        description: name.to_string(),
    }
}

#[test]
fn test_injected_dataset_drives_policy_report() {
    let mut haryana = StateAgriculture::default();
    haryana
        .crops
        .insert("Bajra".to_string(), [(2019, 1000.0), (2020, 900.0)].into_iter().collect());
    haryana
        .water_requirements
        .insert("Bajra".to_string(), "Low".to_string());

    let mut agriculture = FxHashMap::default();
    agriculture.insert("haryana".to_string(), haryana);

    let mut climate = FxHashMap::default();
    climate.insert(
        "haryana".to_string(),
        StateClimate {
            rainfall: [(2019, 500.0), (2020, 400.0)].into_iter().collect(),
            drought_years: vec![2020],
            avg_temperature: 25.0,
            climate_zone: "Semi-Arid".to_string(),
        },
    );

    let sources = DataSources {
        agriculture: source("crops"),
        climate: source("rain"),
    };
    let dataset = Dataset::new(agriculture, climate, sources).unwrap();

    let svc = QaService::new(dataset).unwrap();
    let result = svc
        .answer_question("Give arguments to promote bajra in Haryana")
        .unwrap();

    assert!(result.answer.starts_with(
        "## Data-Backed Arguments for Promoting Drought-Resistant Crops in Haryana\n\n"
    ));
    assert!(result.answer.contains("climate and agricultural data from 2019-2020:"));
    assert!(result.answer.contains("- Average Rainfall: 450mm\n"));
    assert!(result.answer.contains("- Recent Drought Years: 2020\n"));
    // 900 in the drought year vs 1000 otherwise
    assert!(result
        .answer
        .contains("- **Bajra**: 950 thousand tonnes average, 90.0% drought resilience\n"));
    assert!(result.answer.contains("- **Bajra**: Low water requirement\n"));
    let names: Vec<&str> = result.sources.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["crops", "rain"]);
}
