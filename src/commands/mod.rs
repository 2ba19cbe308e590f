//! Command implementations

pub mod analyze;
pub mod batch;
pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, Position, analyze_position};
pub use batch::{BatchSummary, run_batch};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::solve_word;
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all, select_words};
