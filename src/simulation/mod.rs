//! Monte Carlo simulation of Hog games.
//!
//! The exact solver answers "what is the probability of winning"; this
//! module plays actual games with random dice so strategies can be compared
//! empirically, including against the solver's own recommendations.
//!
//! Games are independent, so win rates are estimated in parallel with
//! rayon. Each game draws from its own `StdRng` seeded from the base seed
//! and the game index, which keeps results reproducible regardless of
//! scheduling.

pub mod dice;
pub mod strategy;

pub use dice::{Dice, FairDice, TestDice};
pub use strategy::{
    AlwaysRoll, BaconStrategy, OptimalStrategy, Strategy, SwapStrategy, BACON_MARGIN,
    BASELINE_NUM_ROLLS,
};

use rayon::prelude::*;

use crate::hog::config::HogConfig;
use crate::hog::rules::Rules;

/// Roll `num_rolls` dice with `sides` faces. Scores 1 if any die shows a 1
/// (Pig Out), otherwise the sum. Always calls `dice` exactly `num_rolls`
/// times.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, sides: u32, dice: &mut D) -> u32 {
    debug_assert!(num_rolls > 0, "must roll at least once");

    let mut rolled_one = false;
    let mut sum = 0;
    for _ in 0..num_rolls {
        let face = dice.roll(sides);
        if face == 1 {
            rolled_one = true;
        }
        sum += face;
    }

    if rolled_one {
        1
    } else {
        sum
    }
}

/// Points scored by the player with `score` choosing `num_rolls` against
/// `opponent_score`. Zero dice takes the free action.
pub fn take_turn<D: Dice + ?Sized>(
    rules: &Rules<'_>,
    num_rolls: u32,
    score: u32,
    opponent_score: u32,
    dice: &mut D,
) -> u32 {
    debug_assert!(
        num_rolls <= rules.config().max_rolls,
        "cannot roll more than {} dice",
        rules.config().max_rolls
    );

    if num_rolls == 0 {
        rules.free_action_score(opponent_score)
    } else {
        let sides = rules.dice_sides(score, opponent_score);
        roll_dice(num_rolls, sides, dice)
    }
}

/// Play one game and return the final scores, player 0 first.
///
/// Player 0 moves first. Each strategy sees its own score first.
/// Roll counts above `max_rolls` are clamped.
pub fn play<D: Dice + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
    config: &HogConfig,
) -> (u32, u32) {
    debug_assert!(config.validate().is_ok(), "invalid Hog config: {:?}", config);

    let rules = Rules::new(config);
    let mut who = 0;
    let (mut score, mut opponent_score) = (0, 0);

    while !rules.is_over(score, opponent_score) {
        if who == 0 {
            let n = strategy0.num_rolls(score, opponent_score).min(config.max_rolls);
            score += take_turn(&rules, n, score, opponent_score, dice);
        } else {
            let n = strategy1.num_rolls(opponent_score, score).min(config.max_rolls);
            opponent_score += take_turn(&rules, n, opponent_score, score, dice);
        }
        (score, opponent_score) = rules.swine_swap(score, opponent_score);
        who = 1 - who;
    }

    (score, opponent_score)
}

/// 0 if `strategy0` wins a game against `strategy1`, 1 otherwise.
pub fn winner<D: Dice + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
    config: &HogConfig,
) -> usize {
    let (score0, score1) = play(strategy0, strategy1, dice, config);
    if score0 > score1 {
        0
    } else {
        1
    }
}

/// Mean turn score over `samples` rolls of `num_rolls` dice.
pub fn average_turn_score<D: Dice + ?Sized>(
    num_rolls: u32,
    sides: u32,
    dice: &mut D,
    samples: u32,
) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    let total: u64 = (0..samples)
        .map(|_| u64::from(roll_dice(num_rolls, sides, dice)))
        .sum();
    total as f64 / samples as f64
}

/// Roll count in `1..=max_rolls` with the highest average turn score, with
/// the averages for every count (index 0 is `n = 1`). Ties go to the fewest
/// dice.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(
    sides: u32,
    max_rolls: u32,
    dice: &mut D,
    samples: u32,
) -> (u32, Vec<f64>) {
    let averages: Vec<f64> = (1..=max_rolls)
        .map(|n| average_turn_score(n, sides, dice, samples))
        .collect();

    let mut best = 1;
    let mut best_average = 0.0;
    for (i, &average) in averages.iter().enumerate() {
        if average > best_average {
            best_average = average;
            best = i as u32 + 1;
        }
    }

    (best, averages)
}

/// Fraction of games `strategy` wins against `baseline`, averaged over
/// moving first and moving second. Runs `samples` games in each seat.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    config: &HogConfig,
    samples: u64,
    seed: u64,
) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let wins_first: u64 = (0..samples)
        .into_par_iter()
        .map(|i| {
            let mut dice = FairDice::seeded(seed.wrapping_add(i));
            u64::from(winner(strategy, baseline, &mut dice, config) == 0)
        })
        .sum();

    let wins_second: u64 = (0..samples)
        .into_par_iter()
        .map(|i| {
            let mut dice = FairDice::seeded(seed.wrapping_add(samples).wrapping_add(i));
            u64::from(winner(baseline, strategy, &mut dice, config) == 1)
        })
        .sum();

    let rate = (wins_first + wins_second) as f64 / (2 * samples) as f64;
    log::info!(
        "{} vs {}: {:.4} over {} games",
        strategy.name(),
        baseline.name(),
        rate,
        2 * samples
    );
    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hog::solver::HogSolver;

    #[test]
    fn test_roll_dice() {
        let mut dice = TestDice::new(&[3, 1, 5, 6]);
        assert_eq!(roll_dice(2, 6, &mut dice), 1);
        assert_eq!(roll_dice(2, 6, &mut dice), 11);
        assert_eq!(roll_dice(3, 6, &mut dice), 1);
        // Every die is rolled even after a 1: the next roll starts on 6.
        assert_eq!(roll_dice(1, 6, &mut dice), 6);
    }

    #[test]
    fn test_take_turn() {
        let config = HogConfig::default();
        let rules = Rules::new(&config);
        let mut dice = TestDice::new(&[4]);
        assert_eq!(take_turn(&rules, 0, 10, 47, &mut dice), 8);
        assert_eq!(take_turn(&rules, 3, 10, 47, &mut dice), 12);
    }

    #[test]
    fn test_average_turn_score() {
        let mut dice = TestDice::new(&[3, 1, 5, 6]);
        assert_eq!(average_turn_score(1, 6, &mut dice, 1000), 3.75);

        let mut dice = TestDice::new(&[3, 1, 5, 6]);
        assert_eq!(average_turn_score(2, 6, &mut dice, 1000), 6.0);
    }

    #[test]
    fn test_max_scoring_num_rolls() {
        let mut dice = TestDice::new(&[3]);
        let (best, averages) = max_scoring_num_rolls(6, 10, &mut dice, 10);
        assert_eq!(best, 10);
        assert_eq!(averages.len(), 10);
        assert_eq!(averages[0], 3.0);
        assert_eq!(averages[9], 30.0);
    }

    #[test]
    fn test_play_basic_rules() {
        let config = HogConfig::basic();
        let mut dice = TestDice::new(&[3]);
        let always_five = AlwaysRoll(5);
        // Every turn scores 15; player 0 gets there first.
        assert_eq!(play(&always_five, &always_five, &mut dice, &config), (105, 90));
    }

    #[test]
    fn test_play_with_swine_swap() {
        let config = HogConfig::default();
        let mut dice = TestDice::new(&[3]);
        let always_five = AlwaysRoll(5);
        // Swaps at (30, 15), (30, 60) and (90, 45) hand the game to player 1.
        let scores = play(&always_five, &always_five, &mut dice, &config);
        assert_eq!(scores, (45, 105));
        assert_eq!(winner(&always_five, &always_five, &mut TestDice::new(&[3]), &config), 1);
    }

    #[test]
    fn test_win_rate_is_reproducible() {
        let config = HogConfig::default();
        let bacon = BaconStrategy::default();
        let baseline = AlwaysRoll(BASELINE_NUM_ROLLS);

        let first = average_win_rate(&bacon, &baseline, &config, 200, 42);
        let second = average_win_rate(&bacon, &baseline, &config, 200, 42);
        assert_eq!(first, second);
        assert!((0.0..=1.0).contains(&first));
        assert_eq!(average_win_rate(&bacon, &baseline, &config, 0, 42), 0.0);
    }

    #[test]
    fn test_optimal_beats_baseline() {
        let config = HogConfig::default();
        let solver = HogSolver::new(config.clone());
        let optimal = OptimalStrategy::new(&solver);
        let baseline = AlwaysRoll(BASELINE_NUM_ROLLS);

        let rate = average_win_rate(&optimal, &baseline, &config, 1000, 7);
        assert!(rate > 0.6, "optimal strategy won only {:.3}", rate);
    }
}
