use serde::{Deserialize, Serialize};

/// Exit-criteria thresholds evaluated against every snapshot.
///
/// ```toml
/// [thresholds]
/// max_open_defects = 5
/// min_approval_rate = 0.92
/// max_escape_rate = 0.02
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitThresholds {
    /// Unresolved critical defects allowed (default: 0)
    #[serde(default = "default_max_critical_open")]
    pub max_critical_open: usize,

    /// Unresolved defects of any severity allowed (default: 5)
    #[serde(default = "default_max_open_defects")]
    pub max_open_defects: usize,

    /// Minimum cumulative approval rate (default: 0.92)
    #[serde(default = "default_min_approval_rate")]
    pub min_approval_rate: f64,

    /// Minimum fraction of fully covered requirements (default: 0.85)
    #[serde(default = "default_min_requirement_coverage")]
    pub min_requirement_coverage: f64,

    /// Minimum automation rate (default: 0.60)
    #[serde(default = "default_min_automation_rate")]
    pub min_automation_rate: f64,

    /// Maximum production escape rate (default: 0.02)
    #[serde(default = "default_max_escape_rate")]
    pub max_escape_rate: f64,

    /// Minimum resolution rate (default: 0.80)
    #[serde(default = "default_min_resolution_rate")]
    pub min_resolution_rate: f64,

    /// Maximum mean days to resolve (default: 4.0)
    #[serde(default = "default_max_mean_resolution_days")]
    pub max_mean_resolution_days: f64,
}

impl Default for ExitThresholds {
    fn default() -> Self {
        Self {
            max_critical_open: default_max_critical_open(),
            max_open_defects: default_max_open_defects(),
            min_approval_rate: default_min_approval_rate(),
            min_requirement_coverage: default_min_requirement_coverage(),
            min_automation_rate: default_min_automation_rate(),
            max_escape_rate: default_max_escape_rate(),
            min_resolution_rate: default_min_resolution_rate(),
            max_mean_resolution_days: default_max_mean_resolution_days(),
        }
    }
}

impl ExitThresholds {
    /// Reject thresholds that could never be met or are not numbers.
    pub fn validate(&self) -> Result<(), String> {
        let ratios = [
            ("min_approval_rate", self.min_approval_rate),
            ("min_requirement_coverage", self.min_requirement_coverage),
            ("min_automation_rate", self.min_automation_rate),
            ("max_escape_rate", self.max_escape_rate),
            ("min_resolution_rate", self.min_resolution_rate),
        ];
        if let Some((name, value)) = ratios
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            return Err(format!("{} must be between 0.0 and 1.0, got {}", name, value));
        }
        if !self.max_mean_resolution_days.is_finite() || self.max_mean_resolution_days < 0.0 {
            return Err(format!(
                "max_mean_resolution_days must be a non-negative number, got {}",
                self.max_mean_resolution_days
            ));
        }
        Ok(())
    }
}

fn default_max_critical_open() -> usize {
    0
}
fn default_max_open_defects() -> usize {
    5
}
fn default_min_approval_rate() -> f64 {
    0.92
}
fn default_min_requirement_coverage() -> f64 {
    0.85
}
fn default_min_automation_rate() -> f64 {
    0.60
}
fn default_max_escape_rate() -> f64 {
    0.02
}
fn default_min_resolution_rate() -> f64 {
    0.80
}
fn default_max_mean_resolution_days() -> f64 {
    4.0
}
