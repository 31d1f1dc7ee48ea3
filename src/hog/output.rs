//! Strategy table export.

use std::fs::File;
use std::io::Write;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::hog::config::HogConfig;
use crate::hog::solver::HogSolver;

/// Optimal play at one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyEntry {
    /// Score of the player about to move.
    pub score: u32,
    /// Score of the other player.
    pub opponent_score: u32,
    /// Best roll count.
    pub num_rolls: u32,
    /// Win probability when rolling `num_rolls`.
    pub win_probability: f64,
}

/// Best roll count and win probability for every state below the target.
///
/// `num_rolls[score][opponent_score]` and
/// `win_probability[score][opponent_score]` are from the point of view of
/// the player about to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTable {
    /// Rules the table was solved under.
    pub config: HogConfig,
    /// Best roll count per state.
    pub num_rolls: Vec<Vec<u32>>,
    /// Win probability per state under optimal play.
    pub win_probability: Vec<Vec<f64>>,
}

impl StrategyTable {
    /// Solve every state, one row per rayon task.
    pub fn compute(solver: &HogSolver) -> Self {
        Self::compute_with_progress(solver, || {})
    }

    /// Like [`compute`](Self::compute), calling `on_row` after each finished row.
    pub fn compute_with_progress<F>(solver: &HogSolver, on_row: F) -> Self
    where
        F: Fn() + Sync,
    {
        let target = solver.config().target_score;
        log::info!("solving {} states", target as usize * target as usize);

        let rows: Vec<(Vec<u32>, Vec<f64>)> = (0..target)
            .into_par_iter()
            .map(|score| {
                let row: (Vec<u32>, Vec<f64>) = (0..target)
                    .map(|opponent_score| {
                        let decision = solver.best_decision(score, opponent_score);
                        (decision.num_rolls, decision.win_probability)
                    })
                    .unzip();
                on_row();
                row
            })
            .collect();

        let (num_rolls, win_probability): (Vec<Vec<u32>>, Vec<Vec<f64>>) =
            rows.into_iter().unzip();

        Self {
            config: solver.config().clone(),
            num_rolls,
            win_probability,
        }
    }

    /// Optimal play at `(score, opponent_score)`, if it is in the table.
    pub fn get(&self, score: u32, opponent_score: u32) -> Option<StrategyEntry> {
        let num_rolls = *self.num_rolls.get(score as usize)?.get(opponent_score as usize)?;
        let win_probability =
            *self.win_probability.get(score as usize)?.get(opponent_score as usize)?;
        Some(StrategyEntry {
            score,
            opponent_score,
            num_rolls,
            win_probability,
        })
    }

    /// Number of states where `n` dice is the best choice, indexed by `n`.
    pub fn roll_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.config.max_rolls as usize + 1];
        for &n in self.num_rolls.iter().flatten() {
            histogram[n as usize] += 1;
        }
        histogram
    }

    /// Write the table as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Print the opening move and roll-count histogram.
    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  Hog strategy - target {}", self.config.target_score);
        println!(
            "  Hog Wild: {} | Swine Swap: {}",
            if self.config.hog_wild.is_some() { "on" } else { "off" },
            if self.config.swine_swap { "on" } else { "off" }
        );
        println!("========================================\n");

        if let Some(start) = self.get(0, 0) {
            println!(
                "First player at 0-0: roll {} ({:.2}% to win)\n",
                start.num_rolls,
                start.win_probability * 100.0
            );
        }

        println!("Best roll counts:");
        for (n, count) in self.roll_histogram().iter().enumerate() {
            if *count > 0 {
                println!("  {:>2} dice: {:>5} states", n, count);
            }
        }

        // Coarse grid: rows are own score, columns opponent score.
        let step = (self.config.target_score / 10).max(1) as usize;
        print!("\n       ");
        for opponent in (0..self.num_rolls.len()).step_by(step) {
            print!("{:>4}", opponent);
        }
        println!();
        for (score, row) in self.num_rolls.iter().enumerate().step_by(step) {
            print!("{:>5}  ", score);
            for n in row.iter().step_by(step) {
                print!("{:>4}", n);
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_solver() {
        let solver = HogSolver::new(HogConfig::default().with_target_score(30));
        let table = StrategyTable::compute(&solver);

        assert_eq!(table.num_rolls.len(), 30);
        assert!(table.num_rolls.iter().all(|row| row.len() == 30));

        for (score, opponent) in [(0, 0), (5, 12), (29, 29)] {
            let entry = table.get(score, opponent).unwrap();
            let decision = solver.best_decision(score, opponent);
            assert_eq!(entry.num_rolls, decision.num_rolls);
            assert_eq!(entry.win_probability, decision.win_probability);
        }
        assert!(table.get(30, 0).is_none());
        assert_eq!(table.roll_histogram().iter().sum::<usize>(), 900);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = HogConfig::basic().with_target_score(25);
        let table = StrategyTable::compute(&HogSolver::new(config.clone()));

        let fresh = HogSolver::new(config);
        for score in 0..25 {
            for opponent in 0..25 {
                let entry = table.get(score, opponent).unwrap();
                assert_eq!(entry.win_probability, fresh.best_decision(score, opponent).win_probability);
            }
        }
    }

    #[test]
    fn test_json_round_trip() {
        let solver = HogSolver::new(HogConfig::basic().with_target_score(12));
        let table = StrategyTable::compute(&solver);

        let json = serde_json::to_string(&table).unwrap();
        let parsed: StrategyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.config, table.config);
        assert_eq!(parsed.num_rolls, table.num_rolls);
    }
}
