//! Statistics Helpers
//!
//! Elementary summaries over yearly series: mean, population variance, and
//! the first-to-last linear trend used by the trend report.

use serde::{Deserialize, Serialize};

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by n, not n-1); 0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Average change per entry: `(last - first) / n`.
///
/// Note the divisor is the series length, not the number of intervals.
/// Returns `None` for fewer than two values (no trend).
pub fn linear_trend(values: &[f64]) -> Option<f64> {
    match values {
        [first, .., last] => Some((last - first) / values.len() as f64),
        _ => None,
    }
}

/// Direction of a trend slope. Flat series count as decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

impl TrendDirection {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "↑",
            TrendDirection::Decreasing => "↓",
        }
    }

    pub fn chart_icon(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "📈",
            TrendDirection::Decreasing => "📉",
        }
    }
}
