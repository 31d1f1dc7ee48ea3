//! Dice sources for the simulator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that produces die faces.
pub trait Dice {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Uniformly random dice.
#[derive(Debug, Clone)]
pub struct FairDice<R: Rng> {
    rng: R,
}

impl<R: Rng> FairDice<R> {
    /// Roll with the given random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FairDice<StdRng> {
    /// Reproducible dice from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Dice for FairDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }
}

/// Dice that cycle through a fixed sequence of faces, whatever the die size.
#[derive(Debug, Clone)]
pub struct TestDice {
    outcomes: Vec<u32>,
    next: usize,
}

impl TestDice {
    /// # Panics
    /// Panics if `outcomes` is empty.
    pub fn new(outcomes: &[u32]) -> Self {
        assert!(!outcomes.is_empty(), "test dice need at least one outcome");
        Self {
            outcomes: outcomes.to_vec(),
            next: 0,
        }
    }
}

impl Dice for TestDice {
    fn roll(&mut self, _sides: u32) -> u32 {
        let face = self.outcomes[self.next];
        self.next = (self.next + 1) % self.outcomes.len();
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_dice_cycle() {
        let mut dice = TestDice::new(&[4, 1, 2]);
        let rolls: Vec<u32> = (0..7).map(|_| dice.roll(6)).collect();
        assert_eq!(rolls, vec![4, 1, 2, 4, 1, 2, 4]);
    }

    #[test]
    fn test_fair_dice_in_range_and_seeded() {
        let mut a = FairDice::seeded(7);
        let mut b = FairDice::seeded(7);
        for _ in 0..1000 {
            let face = a.roll(4);
            assert!((1..=4).contains(&face));
            assert_eq!(face, b.roll(4));
        }
    }
}
