use serde::Serialize;

use crate::models::{MacroTargets, OptimizationResult};
use crate::optimizer::{MacroErrors, Strategy};

/// One solve, flattened for the run log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub run: usize,
    pub strategy: Strategy,
    pub target_protein: f64,
    pub target_carbs: f64,
    pub target_fats: f64,
    pub pool_size: usize,
    pub solve_time_ms: f64,
    pub feasible: bool,
    pub protein_error: f64,
    pub carbs_error: f64,
    pub fats_error: f64,
    pub objective_value: f64,
}

impl RunRecord {
    pub fn new(
        run: usize,
        strategy: Strategy,
        targets: &MacroTargets,
        pool_size: usize,
        result: &OptimizationResult<'_>,
    ) -> Self {
        let errors = MacroErrors::new(&result.macros, targets);
        Self {
            run,
            strategy,
            target_protein: targets.protein,
            target_carbs: targets.carbs,
            target_fats: targets.fats,
            pool_size,
            solve_time_ms: result.solve_time_ms,
            feasible: result.feasible,
            protein_error: errors.protein_error,
            carbs_error: errors.carbs_error,
            fats_error: errors.fats_error,
            objective_value: result.objective_value,
        }
    }

    pub fn errors(&self) -> MacroErrors {
        MacroErrors {
            protein_error: self.protein_error,
            carbs_error: self.carbs_error,
            fats_error: self.fats_error,
        }
    }

    /// Feasible and every macro within ±10g.
    pub fn is_accurate(&self) -> bool {
        self.feasible && self.errors().within_tolerance()
    }
}

/// Aggregated performance of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub runs: usize,
    pub feasible_rate: f64,
    pub avg_solve_time_ms: f64,
    /// Mean deviation over feasible runs; `None` when none were feasible.
    pub avg_objective: Option<f64>,
    /// Share of all runs that landed within tolerance on every macro.
    pub accuracy_rate: f64,
}

impl StrategySummary {
    /// Summarize the records of one strategy. `None` when it has no runs.
    pub fn from_records(strategy: Strategy, records: &[RunRecord]) -> Option<Self> {
        let mine: Vec<&RunRecord> = records.iter().filter(|r| r.strategy == strategy).collect();
        if mine.is_empty() {
            return None;
        }

        let runs = mine.len();
        let feasible: Vec<&&RunRecord> = mine.iter().filter(|r| r.feasible).collect();
        let avg_objective = if feasible.is_empty() {
            None
        } else {
            Some(feasible.iter().map(|r| r.objective_value).sum::<f64>() / feasible.len() as f64)
        };

        Some(Self {
            strategy,
            runs,
            feasible_rate: feasible.len() as f64 / runs as f64,
            avg_solve_time_ms: mine.iter().map(|r| r.solve_time_ms).sum::<f64>() / runs as f64,
            avg_objective,
            accuracy_rate: mine.iter().filter(|r| r.is_accurate()).count() as f64 / runs as f64,
        })
    }

    /// Lower average deviation first; strategies with no feasible run last.
    pub fn cmp_score(&self, other: &Self) -> std::cmp::Ordering {
        match (self.avg_objective, other.avg_objective) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    }
}

/// Summaries for every strategy present in the records, in canonical order.
pub fn summarize(records: &[RunRecord]) -> Vec<StrategySummary> {
    Strategy::ALL
        .into_iter()
        .filter_map(|s| StrategySummary::from_records(s, records))
        .collect()
}
