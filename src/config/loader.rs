use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::QaMetricsConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".qametrics.toml";

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<QaMetricsConfig, String> {
    let config = toml::from_str::<QaMetricsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config
        .thresholds
        .validate()
        .map_err(|e| format!("Invalid thresholds: {}", e))?;

    config
        .trend
        .validate()
        .map_err(|e| format!("Invalid trend settings: {}", e))?;

    if config.simulation.scenario.is_empty() {
        return Err("simulation.scenario must contain at least one day".to_string());
    }

    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, any failure
/// here is an error.
pub fn load_config_from(path: &Path) -> Result<QaMetricsConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, warning on invalid files
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<QaMetricsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> QaMetricsConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            QaMetricsConfig::default()
        })
}

/// Load the explicit config when given, otherwise discover one from the
/// current directory
pub fn load_config(explicit: Option<&Path>) -> Result<QaMetricsConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(QaMetricsConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[engine]\ntesters_available = 8\n",
        )
        .unwrap();
        let nested = root.path().join("reports").join("daily");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.engine.testers_available, 8);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[engine\n").unwrap();

        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config, QaMetricsConfig::default());
    }

    #[test]
    fn test_explicit_invalid_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[thresholds]\nmin_approval_rate = 3.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("min_approval_rate"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = load_config(Some(&root.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_negative_trend_epsilon_is_rejected() {
        let err = parse_and_validate_config("[trend]\nepsilon = -0.5\n").unwrap_err();
        assert!(err.contains("epsilon"));
    }

    #[test]
    fn test_nan_trend_epsilon_is_rejected() {
        let err = parse_and_validate_config("[trend]\nepsilon = nan\n").unwrap_err();
        assert!(err.contains("Invalid trend settings"));
    }

    #[test]
    fn test_zero_trend_epsilon_is_accepted() {
        let config = parse_and_validate_config("[trend]\nepsilon = 0.0\n").unwrap();
        assert_eq!(config.trend.epsilon, 0.0);
    }

    #[test]
    fn test_empty_scenario_is_rejected() {
        let err = parse_and_validate_config("[simulation]\nscenario = []\n").unwrap_err();
        assert!(err.contains("scenario"));
    }
}
