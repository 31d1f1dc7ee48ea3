//! Hog strategy solver.
//!
//! Computes the optimal roll count for every state and writes the table as
//! JSON. Takes an optional path to a JSON rule config.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use hog_solver::hog::{HogConfig, HogSolver, StrategyTable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Hog Strategy Solver ===\n");

    let config = load_config();
    println!(
        "Target: {} | Dice: d{} | Max rolls: {}",
        config.target_score, config.dice_sides, config.max_rolls
    );
    println!();

    let start = Instant::now();
    let solver = HogSolver::new(config);

    let progress = ProgressBar::new(u64::from(solver.config().target_score));
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let table = StrategyTable::compute_with_progress(&solver, || progress.inc(1));
    progress.finish_and_clear();

    let stats = solver.stats();
    println!(
        "Solved in {:.2}s ({} end-turn states, {} decisions)",
        start.elapsed().as_secs_f64(),
        stats.end_turn_states,
        stats.decisions
    );

    let json_path = "hog_strategy.json";
    match table.save_json(json_path) {
        Ok(_) => println!("Saved JSON: {}", json_path),
        Err(e) => eprintln!("Error saving JSON: {}", e),
    }

    table.print_summary();
}

fn load_config() -> HogConfig {
    let Some(path) = std::env::args().nth(1) else {
        println!("Using default rules");
        return HogConfig::default();
    };

    match HogConfig::from_json_file(&path) {
        Ok(config) => {
            println!("Loaded config from: {}", path);
            config
        }
        Err(e) => {
            eprintln!("Could not load {}: {}", path, e);
            println!("Using default rules");
            HogConfig::default()
        }
    }
}
