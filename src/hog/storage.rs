//! Memo storage for the Hog solver.
//!
//! The win probability of an end-turn state is a pure function of
//! `(score, opponent_score)`, so entries are written once and never
//! invalidated. The maps sit behind `RwLock` so one solver can serve
//! several rayon workers; callers never hold a guard across a recursive
//! call.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// A `(score, opponent_score)` pair.
pub type ScoreKey = (u32, u32);

/// The best roll count for a state and the win probability it gives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Number of dice to roll, `0` meaning the free action.
    pub num_rolls: u32,
    /// Probability of winning when rolling `num_rolls`.
    pub win_probability: f64,
}

/// Thread-safe memo tables.
///
/// - **End-turn**: probability that the player who just finished a turn wins
/// - **Decisions**: best roll count for the player about to move
#[derive(Debug, Default)]
pub struct WinStorage {
    /// (score, opponent_score) -> end-turn win probability
    end_turn: RwLock<FxHashMap<ScoreKey, f64>>,

    /// (score, opponent_score) -> best decision for the player to move
    decisions: RwLock<FxHashMap<ScoreKey, Decision>>,
}

impl WinStorage {
    /// Create new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage sized for every state below `target_score`.
    pub fn with_target(target_score: u32) -> Self {
        let capacity = (target_score as usize) * (target_score as usize);
        Self {
            end_turn: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
            decisions: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Look up a memoized end-turn win probability.
    pub fn end_turn(&self, key: ScoreKey) -> Option<f64> {
        self.end_turn.read().unwrap().get(&key).copied()
    }

    /// Record an end-turn win probability.
    pub fn insert_end_turn(&self, key: ScoreKey, probability: f64) {
        self.end_turn.write().unwrap().insert(key, probability);
    }

    /// Look up a memoized decision.
    pub fn decision(&self, key: ScoreKey) -> Option<Decision> {
        self.decisions.read().unwrap().get(&key).copied()
    }

    /// Record a decision.
    pub fn insert_decision(&self, key: ScoreKey, decision: Decision) {
        self.decisions.write().unwrap().insert(key, decision);
    }

    /// Number of memoized end-turn states.
    pub fn num_end_turn(&self) -> usize {
        self.end_turn.read().unwrap().len()
    }

    /// Number of memoized decisions.
    pub fn num_decisions(&self) -> usize {
        self.decisions.read().unwrap().len()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.end_turn.write().unwrap().clear();
        self.decisions.write().unwrap().clear();
    }
}

impl Clone for WinStorage {
    fn clone(&self) -> Self {
        Self {
            end_turn: RwLock::new(self.end_turn.read().unwrap().clone()),
            decisions: RwLock::new(self.decisions.read().unwrap().clone()),
        }
    }
}
