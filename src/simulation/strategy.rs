//! Reference strategies.
//!
//! A strategy maps the current player's score and the opponent's score to
//! a roll count. The simple ones here serve as baselines for measuring the
//! optimal strategy.

use crate::hog::rules::free_bacon;
use crate::hog::solver::HogSolver;

/// Roll count used by the baseline strategies.
pub const BASELINE_NUM_ROLLS: u32 = 5;

/// Free Bacon points at which the bacon strategies prefer rolling zero.
pub const BACON_MARGIN: u32 = 8;

/// Chooses how many dice to roll.
pub trait Strategy: Sync {
    /// Roll count for the player with `score` against `opponent_score`.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;

    /// Short label for reports.
    fn name(&self) -> String;
}

/// Always roll the same number of dice.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysRoll(pub u32);

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }

    fn name(&self) -> String {
        format!("always_roll({})", self.0)
    }
}

/// Roll zero when Free Bacon is worth at least `margin`, otherwise roll
/// `num_rolls`.
#[derive(Debug, Clone, Copy)]
pub struct BaconStrategy {
    /// Smallest Free Bacon score worth rolling zero for.
    pub margin: u32,
    /// Roll count otherwise.
    pub num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self {
            margin: BACON_MARGIN,
            num_rolls: BASELINE_NUM_ROLLS,
        }
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }

    fn name(&self) -> String {
        "bacon_strategy".to_string()
    }
}

/// Bacon strategy that also rolls zero to trigger a helpful Swine Swap and
/// avoids zero when it would trigger a harmful one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapStrategy {
    /// Fallback when no swap is at stake.
    pub bacon: BaconStrategy,
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let after_bacon = score + free_bacon(opponent_score);

        if after_bacon * 2 == opponent_score {
            0
        } else if after_bacon == opponent_score * 2 {
            self.bacon.num_rolls
        } else {
            self.bacon.num_rolls(score, opponent_score)
        }
    }

    fn name(&self) -> String {
        "swap_strategy".to_string()
    }
}

/// Roll whatever maximizes the exact win probability.
#[derive(Debug, Clone, Copy)]
pub struct OptimalStrategy<'a> {
    solver: &'a HogSolver,
}

impl<'a> OptimalStrategy<'a> {
    /// Follow `solver`'s recommendations.
    pub fn new(solver: &'a HogSolver) -> Self {
        Self { solver }
    }
}

impl Strategy for OptimalStrategy<'_> {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self.solver.best_num_dice_to_roll(score, opponent_score)
    }

    fn name(&self) -> String {
        "final_strategy".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hog::config::HogConfig;

    #[test]
    fn test_always_roll() {
        let strategy = AlwaysRoll(5);
        assert_eq!(strategy.num_rolls(0, 0), 5);
        assert_eq!(strategy.num_rolls(99, 99), 5);
    }

    #[test]
    fn test_bacon_strategy() {
        let strategy = BaconStrategy::default();
        assert_eq!(strategy.num_rolls(0, 0), 5);
        assert_eq!(strategy.num_rolls(70, 50), 5);
        assert_eq!(strategy.num_rolls(50, 70), 0);
    }

    #[test]
    fn test_swap_strategy() {
        let strategy = SwapStrategy::default();
        // 23 + (1 + max(6, 0)) = 30, half of 60
        assert_eq!(strategy.num_rolls(23, 60), 0);
        // 27 + (1 + max(1, 8)) = 36, double 18
        assert_eq!(strategy.num_rolls(27, 18), 5);
        // 1 + max(8, 0) = 9 points of bacon
        assert_eq!(strategy.num_rolls(50, 80), 0);
        assert_eq!(strategy.num_rolls(12, 12), 5);
    }

    #[test]
    fn test_optimal_follows_solver() {
        let solver = HogSolver::new(HogConfig::default());
        let strategy = OptimalStrategy::new(&solver);
        for (score, opponent) in [(0, 0), (33, 66), (90, 10)] {
            assert_eq!(
                strategy.num_rolls(score, opponent),
                solver.best_num_dice_to_roll(score, opponent)
            );
        }
    }
}
