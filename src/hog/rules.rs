//! Turn-level rules of Hog.
//!
//! These are the deterministic parts of a turn: which die is rolled, what
//! the free action scores, and how scores change hands at the end of a
//! turn. Dice outcomes themselves live in [`scoring`](super::scoring).

use crate::hog::config::{FreeAction, HogConfig};

/// Free Bacon: one more than the larger digit of the opponent's score.
///
/// The tens digit is reduced modulo 10, so scores of 100 and above still
/// produce a score in `1..=10`.
pub fn free_bacon(opponent_score: u32) -> u32 {
    let ones = opponent_score % 10;
    let tens = (opponent_score / 10) % 10;
    1 + ones.max(tens)
}

/// Rule lookups for a specific [`HogConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Rules<'a> {
    config: &'a HogConfig,
}

impl<'a> Rules<'a> {
    /// Wrap a configuration.
    pub fn new(config: &'a HogConfig) -> Self {
        Self { config }
    }

    /// The configuration these rules read from.
    pub fn config(&self) -> &'a HogConfig {
        self.config
    }

    /// Sides on the die rolled this turn (Hog Wild).
    pub fn dice_sides(&self, score: u32, opponent_score: u32) -> u32 {
        match self.config.hog_wild {
            Some(wild) if (score + opponent_score) % wild.modulus == 0 => wild.sides,
            _ => self.config.dice_sides,
        }
    }

    /// Points scored by rolling zero dice against `opponent_score`.
    pub fn free_action_score(&self, opponent_score: u32) -> u32 {
        match self.config.free_action {
            FreeAction::FreeBacon => free_bacon(opponent_score),
            FreeAction::Fixed(points) => points,
        }
    }

    /// Apply end-of-turn score exchange (Swine Swap).
    ///
    /// Returns `(score, opponent_score)` as they stand once the turn is over.
    pub fn swine_swap(&self, score: u32, opponent_score: u32) -> (u32, u32) {
        if self.config.swine_swap
            && (score * 2 == opponent_score || opponent_score * 2 == score)
        {
            (opponent_score, score)
        } else {
            (score, opponent_score)
        }
    }

    /// Whether either player has reached the target.
    pub fn is_over(&self, score: u32, opponent_score: u32) -> bool {
        score >= self.config.target_score || opponent_score >= self.config.target_score
    }
}
