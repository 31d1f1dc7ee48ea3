//! Exact win probabilities for the dice game Hog.
//!
//! # Rules
//!
//! Two players race to [`TARGET_SCORE`]. On each turn the player to move
//! picks a number of dice `n` in `0..=10`:
//!
//! - **Pig Out**: rolling any 1 scores exactly 1 for the turn, otherwise
//!   the turn scores the sum of the dice.
//! - **Free Bacon**: rolling zero dice scores one more than the larger
//!   digit of the opponent's score.
//! - **Hog Wild**: when the sum of both scores is a multiple of 7, the
//!   player rolls four-sided dice instead of six-sided ones.
//! - **Swine Swap**: at the end of a turn, if one score is exactly double
//!   the other, the scores are exchanged.
//!
//! Hog Wild and Swine Swap can be switched off and the free action replaced
//! by a fixed score through [`HogConfig`].
//!
//! # Usage
//!
//! The free functions in this module use the default rule set and a
//! memoized solver local to the calling thread:
//!
//! ```
//! use hog_solver::hog::{best_num_dice_to_roll, probability_of_winning_by_rolling_n};
//!
//! let n = best_num_dice_to_roll(0, 0);
//! let p = probability_of_winning_by_rolling_n(0, 0, n);
//! assert!(p > 0.0 && p <= 1.0);
//! ```
//!
//! Use [`HogSolver`] directly for other rule sets or to share one cache
//! across threads.

pub mod config;
pub mod output;
pub mod rules;
pub mod scoring;
pub mod solver;
pub mod storage;

pub use config::{
    ConfigError, FreeAction, HogConfig, HogWild, SolverStats, DICE_SIDES, FREE_ACTION_SCORE,
    HOG_WILD_MODULUS, HOG_WILD_SIDES, MAX_DICE_ROLLS, TARGET_SCORE,
};
pub use output::{StrategyEntry, StrategyTable};
pub use rules::{free_bacon, Rules};
pub use scoring::{number_of_ways_to_score, probability_of_scoring, ScoringTable};
pub use solver::HogSolver;
pub use storage::{Decision, WinStorage};

thread_local! {
    static DEFAULT_SOLVER: HogSolver = HogSolver::default();
}

/// Probability that the player who just ended a turn with `score` wins
/// against `opponent_score`, under the default rules.
pub fn probability_of_winning_with_end_turn_scores(score: u32, opponent_score: u32) -> f64 {
    DEFAULT_SOLVER.with(|solver| solver.probability_of_winning_with_end_turn_scores(score, opponent_score))
}

/// Probability of winning by rolling exactly `n` dice this turn, under the
/// default rules.
pub fn probability_of_winning_by_rolling_n(score: u32, opponent_score: u32, n: u32) -> f64 {
    DEFAULT_SOLVER.with(|solver| solver.probability_of_winning_by_rolling_n(score, opponent_score, n))
}

/// Roll count in `0..=10` that maximizes the chance of winning, under the
/// default rules. Ties go to the fewest dice.
pub fn best_num_dice_to_roll(score: u32, opponent_score: u32) -> u32 {
    DEFAULT_SOLVER.with(|solver| solver.best_num_dice_to_roll(score, opponent_score))
}

/// Clear the calling thread's default solver cache.
pub fn reset_cache() {
    DEFAULT_SOLVER.with(|solver| solver.clear_cache());
}
