use anyhow::Result;
use qametrics::cli::{self, Commands};
use qametrics::commands::{self, RiskMatrixConfig, SimulateConfig, TrendConfig};
use qametrics::observability::init_logging;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Simulate {
            dataset,
            config,
            output_dir,
            days,
            format,
            verbosity: _,
        } => commands::handle_simulate(SimulateConfig {
            dataset,
            config,
            output_dir,
            days,
            format,
        }),
        Commands::Trend {
            dataset,
            metric,
            window,
            config,
            days,
            verbosity: _,
        } => commands::handle_trend(TrendConfig {
            dataset,
            metric,
            window,
            config,
            days,
        }),
        Commands::RiskMatrix {
            features,
            output,
            verbosity: _,
        } => commands::handle_risk_matrix(RiskMatrixConfig { features, output }),
        Commands::Init { force } => commands::init_config(force),
    }
}
