//! Command implementations

pub mod analyze;
pub mod simple;
pub mod solve;
pub mod test_all;

/// A game counts as a success when solved within this many guesses
pub const MAX_SUCCESSFUL_ATTEMPTS: usize = 6;

pub use analyze::{AnalysisResult, LetterContribution, analyze_word};
pub use simple::{InteractiveConfig, InteractiveOutcome, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use test_all::{EvaluationConfig, TestAllStatistics, print_test_all_statistics, run_test_all};
