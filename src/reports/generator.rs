//! Report Generator
//!
//! Main entry point for turning extracted entities into an answer.
//! Routes through the dispatcher, then runs the chosen section generator
//! against the injected dataset.

use crate::data::Dataset;
use crate::error::QaResult;
use crate::extraction::ExtractedEntities;
use crate::reports::dispatcher::{route, Route};
use crate::reports::sections::{comparison, policy_arguments, trend};
use crate::reports::types::{AnswerResult, ReportKind};

/// Stateless report generator over a borrowed dataset.
pub struct ReportGenerator<'a> {
    dataset: &'a Dataset,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Route `question` and generate the matching report.
    pub fn generate(&self, entities: &ExtractedEntities, question: &str) -> QaResult<AnswerResult> {
        let Route { report, reason } = route(entities, question);
        tracing::debug!(report = %report, reason = ?reason, "Routed question");
        self.generate_report(report, entities)
    }

    /// Generate a specific report, bypassing routing.
    pub fn generate_report(
        &self,
        report: ReportKind,
        entities: &ExtractedEntities,
    ) -> QaResult<AnswerResult> {
        match report {
            ReportKind::PolicyArguments => policy_arguments::generate(self.dataset, entities),
            ReportKind::Comparison => comparison::generate(self.dataset, entities),
            ReportKind::Trend => trend::generate(self.dataset, entities),
        }
    }
}
