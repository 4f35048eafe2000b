//! Trend detection over the tail of the snapshot history.

use super::precision::round_ratio;
use crate::core::{MetricName, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a metric over the compared window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    NoData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
            Self::NoData => "no_data",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendReport {
    pub metric: MetricName,
    pub trend: Trend,
    pub delta: f64,
}

fn determine_trend(delta: f64, epsilon: f64) -> Trend {
    if delta > epsilon {
        Trend::Rising
    } else if delta < -epsilon {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Compare the first and last of the most recent `window` snapshots.
///
/// A window of 0 behaves like a window of 1.
pub fn detect_trend(
    history: &[Snapshot],
    metric: MetricName,
    window: usize,
    epsilon: f64,
) -> TrendReport {
    if history.is_empty() {
        return TrendReport {
            metric,
            trend: Trend::NoData,
            delta: 0.0,
        };
    }

    let start = history.len().saturating_sub(window.max(1));
    let values: Vec<f64> = history[start..].iter().map(|s| s.value(metric)).collect();

    match (values.first(), values.last()) {
        (Some(first), Some(last)) if values.len() >= 2 => {
            let delta = round_ratio(last - first);
            TrendReport {
                metric,
                trend: determine_trend(delta, epsilon),
                delta,
            }
        }
        _ => TrendReport {
            metric,
            trend: Trend::Stable,
            delta: 0.0,
        },
    }
}
