//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_seed};
pub use check::{CheckResult, check_word};
pub use play::run_play;
pub use survey::{SeedStats, SurveyStatistics, run_survey};
