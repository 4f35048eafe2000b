use crate::core::{Error, ResultExt};
use crate::risk::{read_matrix, write_matrix, RiskLevel};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

pub struct RiskMatrixConfig {
    pub features: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn handle_risk_matrix(config: RiskMatrixConfig) -> anyhow::Result<()> {
    let input = File::open(&config.features)
        .map_err(Error::from)
        .context(format!("cannot open {}", config.features.display()))?;
    let entries = read_matrix(input)?;

    let critical = entries
        .iter()
        .filter(|e| e.risk_level == RiskLevel::Critical)
        .count();
    info!(features = entries.len(), critical, "assessed risk matrix");

    match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::export(path, e))?;
            write_matrix(file, &entries)?;
            info!(path = %path.display(), "wrote risk matrix");
        }
        None => write_matrix(std::io::stdout().lock(), &entries)?,
    }
    Ok(())
}
