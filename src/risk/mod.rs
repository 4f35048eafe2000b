pub mod rpn;

pub use rpn::{read_matrix, write_matrix, FeatureScores, RiskEntry, RiskLevel};
