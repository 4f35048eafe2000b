pub mod dataset;
pub mod writers;

pub use dataset::{group_by_day, parse_defects, read_defects, recent_days};
pub use writers::{create_writer, MetricsReport, OutputFormat, ReportWriter};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::export(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::export(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_then_write_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("day");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();

        let path = nested.join("report.txt");
        write_file(&path, "ok").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok");
    }

    #[test]
    fn test_write_file_into_missing_dir_is_export_error() {
        let dir = TempDir::new().unwrap();
        let err = write_file(&dir.path().join("missing").join("a.txt"), "x").unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
    }
}
