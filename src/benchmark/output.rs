use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::benchmark::evaluation::{RunRecord, StrategySummary};
use crate::error::Result;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all runs to a CSV file, replacing it.
pub fn write_runs_csv(runs: &[RunRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for run in runs {
        wtr.serialize(run)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Append runs to a CSV log, writing the header only for a new or empty file.
pub fn append_runs_csv(runs: &[RunRecord], path: &Path) -> Result<()> {
    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    for run in runs {
        wtr.serialize(run)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write per-strategy summaries to a JSON file with rounded floats.
pub fn write_summary_json(summaries: &[StrategySummary], trials: usize, seed: u64, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "trials": trials,
        "seed": seed,
        "strategies": summaries.iter().map(|s| {
            serde_json::json!({
                "strategy": s.strategy,
                "runs": s.runs,
                "feasible_rate": truncate(s.feasible_rate, 3),
                "avg_solve_time_ms": truncate(s.avg_solve_time_ms, 4),
                "avg_objective": s.avg_objective.map(|v| truncate(v, 2)),
                "accuracy_rate": truncate(s.accuracy_rate, 3),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the per-strategy table to stdout.
pub fn print_summary(summaries: &[StrategySummary]) {
    println!("\n=== Strategy Summary (best average deviation first) ===\n");
    println!(
        "{:<4} {:<12} {:>6} {:>10} {:>12} {:>14} {:>12}",
        "#", "strategy", "runs", "feasible", "avg dev (g)", "within ±10g", "avg ms"
    );

    for (i, summary) in summaries.iter().enumerate() {
        let objective = summary
            .avg_objective
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<4} {:<12} {:>6} {:>9.1}% {:>12} {:>13.1}% {:>12.4}",
            i + 1,
            summary.strategy.name(),
            summary.runs,
            summary.feasible_rate * 100.0,
            objective,
            summary.accuracy_rate * 100.0,
            summary.avg_solve_time_ms
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::Strategy;
    use tempfile::NamedTempFile;

    fn record(run: usize) -> RunRecord {
        RunRecord {
            run,
            strategy: Strategy::Quantized,
            target_protein: 120.0,
            target_carbs: 150.0,
            target_fats: 40.0,
            pool_size: 4,
            solve_time_ms: 0.05,
            feasible: true,
            protein_error: 4.0,
            carbs_error: 11.0,
            fats_error: 2.5,
            objective_value: 17.5,
        }
    }

    #[test]
    fn test_append_writes_header_once() {
        let file = NamedTempFile::new().unwrap();
        append_runs_csv(&[record(0)], file.path()).unwrap();
        append_runs_csv(&[record(1), record(2)], file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("run,strategy,"));
        assert!(lines[1].starts_with("0,quantized,"));
        assert!(lines[3].starts_with("2,quantized,"));
    }

    #[test]
    fn test_summary_json() {
        let summaries = vec![StrategySummary {
            strategy: Strategy::Stochastic,
            runs: 10,
            feasible_rate: 0.9,
            avg_solve_time_ms: 1.234567,
            avg_objective: Some(12.3456),
            accuracy_rate: 0.4,
        }];
        let file = NamedTempFile::new().unwrap();
        write_summary_json(&summaries, 10, 5, file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["strategies"][0]["strategy"], "stochastic");
        assert_eq!(value["strategies"][0]["avg_objective"], 12.35);
    }
}
