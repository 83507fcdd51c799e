//! Report Dispatcher
//!
//! Two-stage classifier choosing which report answers a question:
//!
//! 1. Structured intent from the extractor (compare / trend / argument).
//! 2. Keyword fallback on the raw question when no intent was detected:
//!    drought-related wording still gets the policy-argument report.
//!
//! Anything else gets the comparison report with default states and crops.
//! Stage 2 overlaps stage 1 on "promote" and "argument"; both stages are
//! kept so routing stays identical to the deployed service.

use serde::Serialize;

use crate::extraction::{ExtractedEntities, Intent};
use crate::reports::types::ReportKind;

/// Raw-question cues that route an intent-less question to the policy report.
pub static FALLBACK_KEYWORDS: &[&str] = &["drought", "resistant", "promote", "argument"];

/// Which stage of the classifier picked the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "cue", rename_all = "snake_case")]
pub enum RouteReason {
    Intent(Intent),
    KeywordFallback(&'static str),
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub report: ReportKind,
    pub reason: RouteReason,
}

/// Choose the report for `question`, given the entities extracted from it.
pub fn route(entities: &ExtractedEntities, question: &str) -> Route {
    if let Some(intent) = entities.intent {
        let report = match intent {
            Intent::PolicyArguments => ReportKind::PolicyArguments,
            Intent::Comparison => ReportKind::Comparison,
            Intent::Trend => ReportKind::Trend,
        };
        return Route { report, reason: RouteReason::Intent(intent) };
    }

    let lower = question.to_lowercase();
    if let Some(cue) = FALLBACK_KEYWORDS.iter().find(|cue| lower.contains(*cue)) {
        return Route {
            report: ReportKind::PolicyArguments,
            reason: RouteReason::KeywordFallback(cue),
        };
    }

    Route {
        report: ReportKind::Comparison,
        reason: RouteReason::Default,
    }
}
