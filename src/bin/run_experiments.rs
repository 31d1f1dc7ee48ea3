//! Hog strategy experiments.
//!
//! Prints average turn scores per roll count, then the win rate of each
//! reference strategy against always rolling five.

use std::time::Instant;

use hog_solver::hog::{HogConfig, HogSolver, DICE_SIDES, HOG_WILD_SIDES};
use hog_solver::simulation::{
    average_win_rate, max_scoring_num_rolls, AlwaysRoll, BaconStrategy, FairDice,
    OptimalStrategy, Strategy, SwapStrategy, BASELINE_NUM_ROLLS,
};

const TURN_SAMPLES: u32 = 1000;
const GAME_SAMPLES: u64 = 10_000;
const SEED: u64 = 61;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("=== Hog Experiments ===\n");

    let config = HogConfig::default();
    let mut dice = FairDice::seeded(SEED);

    for sides in [DICE_SIDES, HOG_WILD_SIDES] {
        let (best, averages) = max_scoring_num_rolls(sides, config.max_rolls, &mut dice, TURN_SAMPLES);
        for (i, average) in averages.iter().enumerate() {
            println!("{} dice scores {} on average", i + 1, average);
        }
        println!("Max scoring num rolls for {}-sided dice: {}\n", sides, best);
    }

    let start = Instant::now();
    let solver = HogSolver::new(config.clone());
    let decision = solver.best_decision(0, 0);
    println!(
        "Solved optimal play in {:.2}s: roll {} at 0-0 ({:.2}% to win)\n",
        start.elapsed().as_secs_f64(),
        decision.num_rolls,
        decision.win_probability * 100.0
    );

    let baseline = AlwaysRoll(BASELINE_NUM_ROLLS);
    let always_eight = AlwaysRoll(8);
    let bacon = BaconStrategy::default();
    let swap = SwapStrategy::default();
    let optimal = OptimalStrategy::new(&solver);
    let strategies: Vec<&dyn Strategy> = vec![&always_eight, &bacon, &swap, &optimal];

    for strategy in strategies {
        let rate = average_win_rate(strategy, &baseline, &config, GAME_SAMPLES, SEED);
        println!("{} win rate: {:.4}", strategy.name(), rate);
    }
}
