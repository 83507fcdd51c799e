//! Report Generation Module
//!
//! Templated markdown answers built from extracted entities and the dataset.
//!
//! ## Reports
//! 1. Policy Arguments - why to promote drought-resistant crops in a state
//! 2. Comparison - climate and crop production side by side, per state
//! 3. Trend - rainfall and production trends for one state
//!
//! The dispatcher picks the report; formatters render the result for the CLI
//! and the HTTP API.

pub mod types;
pub mod dispatcher;
pub mod sections;
pub mod generator;
pub mod formatters;

pub use dispatcher::{route, Route, RouteReason};
pub use generator::ReportGenerator;
pub use types::{AnswerResult, ReportKind};
