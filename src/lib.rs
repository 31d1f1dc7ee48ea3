//! # Hog Solver
//!
//! Exact win probabilities and optimal roll counts for the two-player dice
//! game Hog.
//!
//! ## Features
//!
//! - **Exact Turn Distributions**: Pig Out scoring computed by dynamic
//!   programming, no sampling
//! - **Optimal Play**: Memoized recursion over `(score, opponent_score)`
//!   end-turn states
//! - **Rule Variants**: Free Bacon, Hog Wild and Swine Swap, each
//!   configurable
//! - **Thread-Safe Caches**: One solver can be shared across rayon workers
//! - **Simulation**: Monte Carlo games to compare strategies empirically
//!
//! ## Quick Start
//!
//! ```
//! use hog_solver::{best_num_dice_to_roll, probability_of_winning_by_rolling_n};
//!
//! let n = best_num_dice_to_roll(0, 0);
//! let p = probability_of_winning_by_rolling_n(0, 0, n);
//! println!("roll {} dice to win with probability {:.3}", n, p);
//! ```
//!
//! ## Modules
//!
//! - [`hog`]: Rules, scoring distributions and the exact solver
//! - [`simulation`]: Dice, reference strategies and simulated games
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  best_num_dice_to_roll(score, opp)                              │
//! │      └─ probability_of_winning_by_rolling_n(score, opp, n)      │
//! │           ├─ probability_of_scoring(k, n, s)                    │
//! │           └─ probability_of_winning_with_end_turn_scores(...)   │
//! │                └─ best_num_dice_to_roll(opp, score) (memoized)  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ OptimalStrategy
//!                               ▼
//!                    ┌─────────────────────┐
//!                    │  Simulated games    │
//!                    │  (rayon, seeded)    │
//!                    └─────────────────────┘
//! ```

#![warn(missing_docs)]

/// Exact Hog solver.
///
/// This is the core module: rule configuration, turn-score distributions
/// and the memoized win-probability recursion.
pub mod hog;

/// Monte Carlo simulation of Hog games.
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use hog::{
    best_num_dice_to_roll, probability_of_scoring, probability_of_winning_by_rolling_n,
    probability_of_winning_with_end_turn_scores, reset_cache, Decision, HogConfig, HogSolver,
};
