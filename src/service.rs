//! Question-Answering Service
//!
//! Owns the dataset and the entity extractor; the one boundary the HTTP
//! server and the CLI call through. Every call is independent and read-only,
//! so a single service can be shared across threads.

use rayon::prelude::*;
use serde::Serialize;

use crate::data::{DataSource, Dataset};
use crate::error::{QaError, QaResult};
use crate::extraction::{EntityExtractor, ExtractedEntities};
use crate::reports::{AnswerResult, ReportGenerator};

pub const SERVICE_NAME: &str = "Project Samarth Q&A System";

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub struct QaService {
    dataset: Dataset,
    extractor: EntityExtractor,
}

impl QaService {
    /// Service over `dataset` with the built-in keyword tables.
    pub fn new(dataset: Dataset) -> QaResult<Self> {
        Ok(Self::with_extractor(dataset, EntityExtractor::new()?))
    }

    pub fn with_extractor(dataset: Dataset, extractor: EntityExtractor) -> Self {
        tracing::info!(
            "Q&A service ready ({} states, {} crops, years {})",
            dataset.states().len(),
            dataset.crops().len(),
            dataset.coverage_label()
        );
        Self { dataset, extractor }
    }

    /// Entities recognized in `question`, without generating an answer.
    pub fn extract(&self, question: &str) -> ExtractedEntities {
        self.extractor.extract(question)
    }

    /// Answer one question.
    ///
    /// Empty or unrecognized questions get the default comparison report.
    /// Failures surface as [`QaError::Internal`].
    pub fn answer_question(&self, question: &str) -> QaResult<AnswerResult> {
        let entities = self.extractor.extract(question);
        ReportGenerator::new(&self.dataset)
            .generate(&entities, question)
            .map_err(|e| match e {
                QaError::Internal(msg) => QaError::Internal(msg),
                other => QaError::Internal(other.to_string()),
            })
    }

    /// Answer many questions in parallel; results keep input order.
    pub fn answer_batch<S: AsRef<str> + Sync>(&self, questions: &[S]) -> Vec<QaResult<AnswerResult>> {
        questions
            .par_iter()
            .map(|q| self.answer_question(q.as_ref()))
            .collect()
    }

    pub fn sources(&self) -> Vec<DataSource> {
        self.dataset.sources()
    }

    pub fn check_health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }
}
