//! Exact turn-score distributions under the Pig Out rule.
//!
//! Rolling `n` dice scores the sum of the faces, unless any die shows a 1,
//! in which case the turn scores exactly 1. The probability of a sum `k`
//! without any 1s is counted by dynamic programming over faces `2..=s`:
//!
//! ```text
//! ways(0, 0) = 1
//! ways(d, t) = sum over f in 2..=s of ways(d - 1, t - f)
//! P(k)       = ways(n, k) / s^n            for k >= 2
//! P(1)       = 1 - ((s - 1) / s)^n
//! ```

use crate::hog::config::FREE_ACTION_SCORE;

/// Count ordered outcomes of `n` dice with faces in `2..=s` that sum to `k`.
///
/// Counts fit in a `u64` for `n <= 10`, since they never exceed `s^n`.
pub fn number_of_ways_to_score(k: u32, n: u32, s: u32) -> u64 {
    if s < 2 {
        return u64::from(n == 0 && k == 0);
    }
    if k > n * s {
        return 0;
    }
    let table = ways_table(n, s);
    table[n as usize][k as usize]
}

/// Probability of scoring exactly `k` points by rolling `n` dice with `s`
/// sides.
///
/// `n == 0` is the free action. With no opponent score to look at it
/// scores [`FREE_ACTION_SCORE`] with certainty.
pub fn probability_of_scoring(k: u32, n: u32, s: u32) -> f64 {
    turn_score_probability(k, n, s, FREE_ACTION_SCORE)
}

/// Like [`probability_of_scoring`], with the free-action score supplied by
/// the caller.
pub fn turn_score_probability(k: u32, n: u32, s: u32, free_action_score: u32) -> f64 {
    if n == 0 {
        return if k == free_action_score { 1.0 } else { 0.0 };
    }
    if s == 0 {
        return 0.0;
    }
    if k == 1 {
        return pig_out_probability(n, s);
    }
    number_of_ways_to_score(k, n, s) as f64 / (s as f64).powi(n as i32)
}

/// Probability that at least one of `n` dice shows a 1.
fn pig_out_probability(n: u32, s: u32) -> f64 {
    1.0 - (s.saturating_sub(1) as f64 / s as f64).powi(n as i32)
}

/// `ways[d][t]` for `d <= n`, `t <= n * s`.
fn ways_table(n: u32, s: u32) -> Vec<Vec<u64>> {
    let width = (n * s) as usize + 1;
    let mut ways = vec![vec![0u64; width]; n as usize + 1];
    ways[0][0] = 1;

    for d in 1..=n as usize {
        for total in 0..width {
            ways[d][total] = (2..=s as usize)
                .filter(|&face| face <= total)
                .map(|face| ways[d - 1][total - face])
                .sum();
        }
    }

    ways
}

/// Precomputed turn-score distributions for one die size.
///
/// `distributions[n][k]` is the probability of scoring `k` with `n` dice,
/// for `1 <= n <= max_rolls`. The free action is not stored here since its
/// score depends on the opponent.
#[derive(Debug, Clone)]
pub struct ScoringTable {
    sides: u32,
    distributions: Vec<Vec<f64>>,
}

impl ScoringTable {
    /// Build distributions for every roll count up to `max_rolls`.
    pub fn new(sides: u32, max_rolls: u32) -> Self {
        let ways = ways_table(max_rolls, sides);
        let mut distributions = Vec::with_capacity(max_rolls as usize + 1);
        distributions.push(Vec::new());

        for n in 1..=max_rolls {
            let outcomes = (sides as f64).powi(n as i32);
            let mut dist: Vec<f64> = (0..=(n * sides) as usize)
                .map(|k| ways[n as usize][k] as f64 / outcomes)
                .collect();
            dist[1] = pig_out_probability(n, sides);
            distributions.push(dist);
        }

        log::debug!("built scoring table for d{} up to {} rolls", sides, max_rolls);

        Self {
            sides,
            distributions,
        }
    }

    /// Sides on the die this table describes.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Largest roll count in the table.
    pub fn max_rolls(&self) -> u32 {
        (self.distributions.len() - 1) as u32
    }

    /// Probability of scoring `k` with `n` dice. Zero outside the table.
    pub fn probability(&self, k: u32, n: u32) -> f64 {
        self.distributions
            .get(n as usize)
            .and_then(|dist| dist.get(k as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Every `(k, P(k))` with non-zero probability for `n` dice.
    pub fn outcomes(&self, n: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.distributions
            .get(n as usize)
            .into_iter()
            .flat_map(|dist| dist.iter().enumerate())
            .filter(|&(_, &p)| p > 0.0)
            .map(|(k, &p)| (k as u32, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_single_die() {
        assert!((probability_of_scoring(1, 1, 6) - 1.0 / 6.0).abs() < EPS);
        for k in 2..=6 {
            assert!((probability_of_scoring(k, 1, 6) - 1.0 / 6.0).abs() < EPS);
        }
        assert_eq!(probability_of_scoring(7, 1, 6), 0.0);
        assert_eq!(probability_of_scoring(0, 1, 6), 0.0);
    }

    #[test]
    fn test_two_dice() {
        assert!((probability_of_scoring(1, 2, 6) - 11.0 / 36.0).abs() < EPS);
        assert!((probability_of_scoring(4, 2, 6) - 1.0 / 36.0).abs() < EPS);
        assert!((probability_of_scoring(7, 2, 6) - 4.0 / 36.0).abs() < EPS);
        assert_eq!(probability_of_scoring(3, 2, 6), 0.0);
        assert_eq!(probability_of_scoring(13, 2, 6), 0.0);
    }

    #[test]
    fn test_ways() {
        assert_eq!(number_of_ways_to_score(0, 0, 6), 1);
        // (2, 6), (3, 5), (4, 4), (5, 3), (6, 2)
        assert_eq!(number_of_ways_to_score(8, 2, 6), 5);
        assert_eq!(number_of_ways_to_score(12, 2, 6), 1);
        assert_eq!(number_of_ways_to_score(6, 3, 6), 1);
        assert_eq!(number_of_ways_to_score(5, 3, 6), 0);
        assert_eq!(number_of_ways_to_score(61, 10, 6), 0);
    }

    #[test]
    fn test_ways_cover_every_face_pair() {
        // Two dice without a 1 on faces 2..=6: 5 * 5 ordered outcomes.
        let total: u64 = (0..=12).map(|k| number_of_ways_to_score(k, 2, 6)).sum();
        assert_eq!(total, 25);
    }

    #[test]
    fn test_distributions_sum_to_one() {
        for s in 2..=8 {
            for n in 1..=10 {
                let total: f64 = (0..=n * s + 1).map(|k| probability_of_scoring(k, n, s)).sum();
                assert!((total - 1.0).abs() < 1e-9, "n={} s={} total={}", n, s, total);
            }
        }
    }

    #[test]
    fn test_unreachable_scores_are_zero() {
        for n in 1..=10 {
            assert_eq!(probability_of_scoring(0, n, 6), 0.0);
            for k in 2..2 * n {
                assert_eq!(probability_of_scoring(k, n, 6), 0.0, "k={} n={}", k, n);
            }
            assert_eq!(probability_of_scoring(n * 6 + 1, n, 6), 0.0);
        }
    }

    #[test]
    fn test_zero_dice_is_free_action() {
        assert_eq!(probability_of_scoring(FREE_ACTION_SCORE, 0, 6), 1.0);
        assert_eq!(probability_of_scoring(0, 0, 6), 0.0);
        assert_eq!(turn_score_probability(9, 0, 6, 9), 1.0);
        assert_eq!(turn_score_probability(8, 0, 6, 9), 0.0);
    }

    #[test]
    fn test_degenerate_sides() {
        assert_eq!(probability_of_scoring(1, 3, 0), 0.0);
        // A one-sided die always shows 1.
        assert_eq!(probability_of_scoring(1, 3, 1), 1.0);
        assert_eq!(probability_of_scoring(3, 3, 1), 0.0);
    }

    #[test]
    fn test_table_matches_direct_computation() {
        let table = ScoringTable::new(4, 10);
        assert_eq!(table.sides(), 4);
        assert_eq!(table.max_rolls(), 10);
        for n in 1..=10 {
            for k in 0..=n * 4 + 2 {
                let direct = probability_of_scoring(k, n, 4);
                assert!((table.probability(k, n) - direct).abs() < EPS);
            }
            let total: f64 = table.outcomes(n).map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
        assert_eq!(table.probability(1, 11), 0.0);
        assert_eq!(table.outcomes(0).count(), 0);
    }
}
