//! Risk priority numbers (RPN) for product features.
//!
//! Each feature is scored 1-10 for severity, occurrence and detection; the
//! RPN is their product and maps onto a [`RiskLevel`] with a fixed
//! mitigation action.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

const SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,      // rpn < 120
    Medium,   // rpn >= 120
    High,     // rpn >= 200
    Critical, // rpn >= 300
}

impl RiskLevel {
    pub fn from_rpn(rpn: u32) -> Self {
        match rpn {
            300.. => Self::Critical,
            200..=299 => Self::High,
            120..=199 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn mitigation(self) -> &'static str {
        match self {
            Self::Critical => "Immediate mitigation plan and daily testing",
            Self::High => "Increase automated coverage and validate edge scenarios",
            Self::Medium => "Review test cases and reinforce exploratory testing",
            Self::Low => "Continuous monitoring, no additional actions",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Input row of the risk matrix.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureScores {
    pub feature: String,
    pub severity: u8,
    pub occurrence: u8,
    pub detection: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RiskEntry {
    pub feature: String,
    pub severity: u8,
    pub occurrence: u8,
    pub detection: u8,
    pub rpn: u32,
    pub risk_level: RiskLevel,
    pub mitigation: &'static str,
}

impl RiskEntry {
    pub fn assess(feature: &str, severity: u8, occurrence: u8, detection: u8) -> Result<Self> {
        if feature.trim().is_empty() {
            return Err(Error::Validation("feature name must not be blank".to_string()));
        }
        for (name, score) in [
            ("severity", severity),
            ("occurrence", occurrence),
            ("detection", detection),
        ] {
            if !SCORE_RANGE.contains(&score) {
                return Err(Error::Validation(format!(
                    "{} score for '{}' must be between 1 and 10, got {}",
                    name, feature, score
                )));
            }
        }

        let rpn = u32::from(severity) * u32::from(occurrence) * u32::from(detection);
        let risk_level = RiskLevel::from_rpn(rpn);
        Ok(Self {
            feature: feature.to_string(),
            severity,
            occurrence,
            detection,
            rpn,
            risk_level,
            mitigation: risk_level.mitigation(),
        })
    }
}

impl TryFrom<FeatureScores> for RiskEntry {
    type Error = Error;

    fn try_from(scores: FeatureScores) -> Result<Self> {
        Self::assess(
            &scores.feature,
            scores.severity,
            scores.occurrence,
            scores.detection,
        )
    }
}

/// Read `feature,severity,occurrence,detection` rows and assess each one.
pub fn read_matrix<R: Read>(reader: R) -> Result<Vec<RiskEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<FeatureScores>()
        .map(|row| {
            let scores = row.map_err(|e| Error::dataset(&e))?;
            RiskEntry::try_from(scores)
        })
        .collect()
}

pub fn write_matrix<W: Write>(writer: W, entries: &[RiskEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}
