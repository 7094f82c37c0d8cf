pub mod evaluation;
pub mod output;
pub mod runner;
pub mod targets;

pub use evaluation::{RunRecord, StrategySummary, summarize};
pub use output::{append_runs_csv, print_summary, write_runs_csv, write_summary_json};
pub use runner::{BenchmarkConfig, BenchmarkResults, run_benchmark};
pub use targets::TargetRanges;
