//! Exact Hog win probabilities by memoized recursion over end-turn states.
//!
//! The value of a state is defined across turn boundaries:
//!
//! ```text
//! W(s, o)       = 1                               if s >= target
//!               = 0                               if o >= target
//!               = 1 - R(o, s, best(o, s))         otherwise
//! R(s, o, n)    = sum over k of P(k | n) * W(swap(s + k, o))
//! best(s, o)    = argmax over n in 0..=max_rolls of R(s, o, n)
//! ```
//!
//! `W` is the win probability of the player who has just ended a turn,
//! `R` the win probability of the player to move when rolling `n` dice.
//! Every turn scores at least one point and Swine Swap keeps the score sum,
//! so `s + o` strictly grows along the recursion and it terminates.

use rustc_hash::FxHashMap;

use crate::hog::config::{ConfigError, HogConfig, SolverStats};
use crate::hog::rules::Rules;
use crate::hog::scoring::{self, ScoringTable};
use crate::hog::storage::{Decision, WinStorage};

/// Optimal-play solver for one rule set.
///
/// Results are memoized in interior-mutable storage, so every query takes
/// `&self` and a solver can be shared across threads.
///
/// # Example
/// ```
/// use hog_solver::hog::{HogConfig, HogSolver};
///
/// let solver = HogSolver::new(HogConfig::default());
/// assert_eq!(solver.probability_of_winning_with_end_turn_scores(100, 50), 1.0);
///
/// let n = solver.best_num_dice_to_roll(0, 0);
/// assert!(n <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct HogSolver {
    /// Rule set being solved.
    config: HogConfig,

    /// Turn-score distributions keyed by die size.
    tables: FxHashMap<u32, ScoringTable>,

    /// Memoized win probabilities and decisions.
    storage: WinStorage,
}

impl Default for HogSolver {
    fn default() -> Self {
        Self::new(HogConfig::default())
    }
}

impl HogSolver {
    /// Create a solver for a configuration the caller has already validated.
    pub fn new(config: HogConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid Hog config: {:?}", config);

        let tables = config
            .sides_in_play()
            .into_iter()
            .map(|sides| (sides, ScoringTable::new(sides, config.max_rolls)))
            .collect();
        let storage = WinStorage::with_target(config.target_score);

        log::debug!(
            "hog solver: target {}, d{}, max rolls {}",
            config.target_score,
            config.dice_sides,
            config.max_rolls
        );

        Self {
            config,
            tables,
            storage,
        }
    }

    /// Validate `config` and create a solver for it.
    pub fn try_new(config: HogConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The rule set being solved.
    pub fn config(&self) -> &HogConfig {
        &self.config
    }

    /// Rule lookups for this solver's configuration.
    pub fn rules(&self) -> Rules<'_> {
        Rules::new(&self.config)
    }

    /// Probability of scoring exactly `k` with `n` dice of `s` sides.
    ///
    /// `n == 0` is the free action scored against an opponent with no
    /// points.
    pub fn probability_of_scoring(&self, k: u32, n: u32, s: u32) -> f64 {
        if n == 0 {
            let free = self.rules().free_action_score(0);
            return scoring::turn_score_probability(k, 0, s, free);
        }
        match self.tables.get(&s) {
            Some(table) if n <= table.max_rolls() => table.probability(k, n),
            _ => scoring::probability_of_scoring(k, n, s),
        }
    }

    /// Probability that the player who just ended a turn with `score` wins,
    /// with `opponent_score` to move and both sides playing optimally.
    pub fn probability_of_winning_with_end_turn_scores(
        &self,
        score: u32,
        opponent_score: u32,
    ) -> f64 {
        let target = self.config.target_score;
        if score >= target {
            return 1.0;
        }
        if opponent_score >= target {
            return 0.0;
        }

        let key = (score, opponent_score);
        if let Some(probability) = self.storage.end_turn(key) {
            return probability;
        }

        // Assume the opponent replies optimally.
        let reply = self.best_decision(opponent_score, score);
        let probability = (1.0 - reply.win_probability).clamp(0.0, 1.0);

        self.storage.insert_end_turn(key, probability);
        probability
    }

    /// Probability of winning when the player to move commits to rolling
    /// exactly `n` dice this turn.
    ///
    /// On a finished game this is 1.0 or 0.0 depending on who reached the
    /// target. `n` above `max_rolls` is a contract violation and yields 0.0
    /// in release builds.
    pub fn probability_of_winning_by_rolling_n(
        &self,
        score: u32,
        opponent_score: u32,
        n: u32,
    ) -> f64 {
        debug_assert!(
            n <= self.config.max_rolls,
            "cannot roll {} dice, max is {}",
            n,
            self.config.max_rolls
        );
        if n > self.config.max_rolls {
            return 0.0;
        }

        let rules = self.rules();
        if rules.is_over(score, opponent_score) {
            return self.probability_of_winning_with_end_turn_scores(score, opponent_score);
        }

        if n == 0 {
            let points = rules.free_action_score(opponent_score);
            return self.win_after_turn(score + points, opponent_score);
        }

        let sides = rules.dice_sides(score, opponent_score);
        let mut probability = 0.0;
        match self.tables.get(&sides) {
            Some(table) => {
                for (k, p) in table.outcomes(n) {
                    probability += p * self.win_after_turn(score + k, opponent_score);
                }
            }
            None => {
                for k in 1..=n * sides {
                    let p = scoring::probability_of_scoring(k, n, sides);
                    if p > 0.0 {
                        probability += p * self.win_after_turn(score + k, opponent_score);
                    }
                }
            }
        }
        // Rounding can push the sum a hair past 1.
        probability.min(1.0)
    }

    /// Best roll count for the player to move, ties going to the fewest dice.
    pub fn best_num_dice_to_roll(&self, score: u32, opponent_score: u32) -> u32 {
        self.best_decision(score, opponent_score).num_rolls
    }

    /// Best roll count and the win probability it gives.
    pub fn best_decision(&self, score: u32, opponent_score: u32) -> Decision {
        let key = (score, opponent_score);
        if let Some(decision) = self.storage.decision(key) {
            return decision;
        }

        let mut best = Decision {
            num_rolls: 0,
            win_probability: self.probability_of_winning_by_rolling_n(score, opponent_score, 0),
        };
        for n in 1..=self.config.max_rolls {
            let probability = self.probability_of_winning_by_rolling_n(score, opponent_score, n);
            if probability > best.win_probability {
                best = Decision {
                    num_rolls: n,
                    win_probability: probability,
                };
            }
        }

        self.storage.insert_decision(key, best);
        best
    }

    /// Win probability for every roll count, indexed by `n`.
    pub fn roll_probabilities(&self, score: u32, opponent_score: u32) -> Vec<f64> {
        (0..=self.config.max_rolls)
            .map(|n| self.probability_of_winning_by_rolling_n(score, opponent_score, n))
            .collect()
    }

    /// Cache statistics.
    pub fn stats(&self) -> SolverStats {
        SolverStats {
            end_turn_states: self.storage.num_end_turn(),
            decisions: self.storage.num_decisions(),
            scoring_tables: self.tables.len(),
        }
    }

    /// Drop all memoized results. Later queries recompute identical values.
    pub fn clear_cache(&self) {
        log::debug!("clearing {} cached end-turn states", self.storage.num_end_turn());
        self.storage.clear();
    }

    /// End-turn win probability for the mover once `score` is banked.
    fn win_after_turn(&self, score: u32, opponent_score: u32) -> f64 {
        let (score, opponent_score) = self.rules().swine_swap(score, opponent_score);
        self.probability_of_winning_with_end_turn_scores(score, opponent_score)
    }
}
