//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, MAX_TURNS, run_benchmark};
pub use suggest::{parse_history, run_suggest};
