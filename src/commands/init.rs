use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# qametrics configuration

[engine]
testers_available = 5
total_planned_cases = 220
total_automated_cases = 150

# Exit criteria; a release is ready when all eight hold
[thresholds]
max_critical_open = 0
max_open_defects = 5
min_approval_rate = 0.92
min_requirement_coverage = 0.85
min_automation_rate = 0.60
max_escape_rate = 0.02
min_resolution_rate = 0.80
max_mean_resolution_days = 4.0

[trend]
window = 3
epsilon = 0.01
summary_metrics = ["open_defects", "approval_rate", "automation_rate"]

# Execution counts per simulated day; the last row repeats
[simulation]
days = 5
scenario = [
    { planned = 40, executed = 36, approved = 32, failed = 4, automated = 20 },
    { planned = 45, executed = 42, approved = 39, failed = 3, automated = 25 },
    { planned = 45, executed = 44, approved = 41, failed = 3, automated = 30 },
    { planned = 50, executed = 48, approved = 46, failed = 2, automated = 35 },
    { planned = 50, executed = 49, approved = 47, failed = 2, automated = 40 },
]

[output]
dashboard_dir = "dashboards"
summary_file = "metrics_summary.csv"
traceability_file = "traceability_matrix.csv"
"#;

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, QaMetricsConfig};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, QaMetricsConfig::default());
    }

    #[test]
    fn test_existing_file_requires_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_default_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_default_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[thresholds]"));
    }
}
