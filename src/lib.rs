//! Samarth Q&A
//!
//! Answers natural-language questions about Indian agricultural and climate
//! statistics from a small, fixed dataset.
//!
//! Pipeline:
//! - `extraction/`: keyword-based recognition of states, crops, years,
//!   metrics, and intent
//! - `reports/`: dispatcher plus the policy-argument, comparison, and trend
//!   report templates
//! - `utils/`: statistics and formatting helpers
//! - `data`: the immutable dataset injected into everything above
//! - `service`: the question-answering boundary used by the binaries
//!
//! ```
//! use samarth_qa::{Dataset, QaService};
//!
//! let service = QaService::new(Dataset::builtin()).unwrap();
//! let result = service.answer_question("Compare bajra in Rajasthan and Punjab").unwrap();
//! assert!(result.answer.contains("Comparative Analysis"));
//! ```

pub mod error;
pub mod data;
pub mod utils;
pub mod extraction;
pub mod reports;
pub mod service;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use data::{DataSource, Dataset, YearSeries};
pub use error::{QaError, QaResult};
pub use extraction::{EntityExtractor, ExtractedEntities, Intent, Metric};
pub use reports::{AnswerResult, ReportGenerator, ReportKind};
pub use service::{HealthStatus, QaService, SERVICE_NAME};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
