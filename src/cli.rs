use crate::core::MetricName;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qametrics")]
#[command(about = "Test-quality metrics, exit criteria and dashboards for QA cycles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay the most recent dataset days through the metrics engine
    Simulate {
        /// Defect dataset (CSV)
        dataset: PathBuf,

        /// Configuration file (defaults to a discovered .qametrics.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory for dashboards and CSV exports
        #[arg(short, long = "output-dir")]
        output_dir: Option<PathBuf>,

        /// Number of most recent dataset days to replay
        #[arg(long)]
        days: Option<usize>,

        /// Report format printed to stdout
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Report the trend of one metric after replaying the dataset
    Trend {
        /// Defect dataset (CSV)
        dataset: PathBuf,

        /// Metric name (open_defects, approval_rate, requirement_coverage, ...)
        #[arg(short, long)]
        metric: MetricName,

        /// Number of most recent snapshots compared
        #[arg(short, long)]
        window: Option<usize>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of most recent dataset days to replay
        #[arg(long)]
        days: Option<usize>,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Compute the RPN risk matrix for scored features
    RiskMatrix {
        /// CSV with feature,severity,occurrence,detection columns
        features: PathBuf,

        /// Output CSV (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Simulate { verbosity, .. }
            | Self::Trend { verbosity, .. }
            | Self::RiskMatrix { verbosity, .. } => *verbosity,
            Self::Init { .. } => 0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
