use serde::{Deserialize, Serialize};

use crate::data::DataSource;

/// A generated answer: markdown text, citations, and the numbers behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub sources: Vec<DataSource>,
    /// Structured results used to produce `answer`; the schema depends on the report.
    pub data_points: serde_json::Value,
}

/// The three report templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    PolicyArguments,
    Comparison,
    Trend,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::PolicyArguments => "policy_arguments",
            ReportKind::Comparison => "comparison",
            ReportKind::Trend => "trend",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
