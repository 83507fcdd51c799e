//! Utility modules shared across the report sections
//!
//! - Statistics: mean, population variance, linear trend
//! - Formatting: title case, thousands grouping, year lists

pub mod statistics;
pub mod formatting;

// Re-export commonly used helpers
pub use statistics::{linear_trend, mean, variance, TrendDirection};
pub use formatting::{format_thousands, join_titles, join_years, title_case};
