//! Rule configuration for the Hog solver.
//!
//! Hog has several house-rule variants. This module collects the rule
//! parameters in one serializable struct so the probability engine can be
//! reused across them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Score at or above which a player wins.
pub const TARGET_SCORE: u32 = 100;

/// Sides on a regular die.
pub const DICE_SIDES: u32 = 6;

/// Largest number of dice a player may roll in one turn.
pub const MAX_DICE_ROLLS: u32 = 10;

/// Score of the free action when the opponent has no points.
///
/// Under Free Bacon this is `1 + max(0, 0)`. It is also the score used by
/// [`FreeAction::Fixed`] presets and by the context-free
/// [`probability_of_scoring`](crate::hog::scoring::probability_of_scoring).
pub const FREE_ACTION_SCORE: u32 = 1;

/// Sides on the die used when Hog Wild is in effect.
pub const HOG_WILD_SIDES: u32 = 4;

/// Hog Wild applies when the sum of both scores is a multiple of this.
pub const HOG_WILD_MODULUS: u32 = 7;

/// What rolling zero dice scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreeAction {
    /// One more than the larger digit of the opponent's score.
    FreeBacon,
    /// A fixed number of points.
    Fixed(u32),
}

/// Hog Wild: switch to a smaller die when the score sum is a multiple of
/// `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogWild {
    /// Divisor tested against `score + opponent_score`.
    pub modulus: u32,
    /// Sides on the replacement die.
    pub sides: u32,
}

impl Default for HogWild {
    fn default() -> Self {
        Self {
            modulus: HOG_WILD_MODULUS,
            sides: HOG_WILD_SIDES,
        }
    }
}

/// Rule set used by the solver and the simulator.
///
/// The default is the full rule set: Pig Out, Free Bacon, Hog Wild and
/// Swine Swap, played to 100 with six-sided dice.
///
/// # Example
/// ```
/// use hog_solver::hog::HogConfig;
///
/// let config = HogConfig::default();
/// assert_eq!(config.target_score, 100);
/// assert!(config.swine_swap);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogConfig {
    /// Score at or above which a player wins.
    pub target_score: u32,

    /// Sides on the regular die.
    pub dice_sides: u32,

    /// Largest roll count a player may choose.
    ///
    /// Bounded by [`MAX_DICE_ROLLS`] so that `sides^n` outcome counts fit
    /// in a `u64`.
    pub max_rolls: u32,

    /// Scoring rule for rolling zero dice.
    pub free_action: FreeAction,

    /// Hog Wild parameters, or `None` to always roll the regular die.
    #[serde(default)]
    pub hog_wild: Option<HogWild>,

    /// Exchange scores at the end of a turn when one is double the other.
    #[serde(default)]
    pub swine_swap: bool,
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            target_score: TARGET_SCORE,
            dice_sides: DICE_SIDES,
            max_rolls: MAX_DICE_ROLLS,
            free_action: FreeAction::FreeBacon,
            hog_wild: Some(HogWild::default()),
            swine_swap: true,
        }
    }
}

impl HogConfig {
    /// Create a new HogConfig with the full rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pig Out and Free Bacon only.
    ///
    /// Without Hog Wild or Swine Swap the game is easier to reason about by
    /// hand, which makes this preset handy in tests.
    pub fn basic() -> Self {
        Self {
            hog_wild: None,
            swine_swap: false,
            ..Default::default()
        }
    }

    /// Builder method: set the target score.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Builder method: set the sides on the regular die.
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Builder method: set the largest roll count.
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Builder method: set the zero-dice rule.
    pub fn with_free_action(mut self, free_action: FreeAction) -> Self {
        self.free_action = free_action;
        self
    }

    /// Builder method: enable or disable Hog Wild.
    pub fn with_hog_wild(mut self, hog_wild: Option<HogWild>) -> Self {
        self.hog_wild = hog_wild;
        self
    }

    /// Builder method: enable or disable Swine Swap.
    pub fn with_swine_swap(mut self, enable: bool) -> Self {
        self.swine_swap = enable;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::InvalidTargetScore(self.target_score));
        }

        if self.dice_sides < 2 {
            return Err(ConfigError::InvalidDiceSides(self.dice_sides));
        }

        if self.max_rolls == 0 || self.max_rolls > MAX_DICE_ROLLS {
            return Err(ConfigError::InvalidMaxRolls(self.max_rolls));
        }

        if self.free_action == FreeAction::Fixed(0) {
            return Err(ConfigError::InvalidFreeAction);
        }

        if let Some(wild) = self.hog_wild {
            if wild.modulus == 0 || wild.sides < 2 {
                return Err(ConfigError::InvalidHogWild {
                    modulus: wild.modulus,
                    sides: wild.sides,
                });
            }
        }

        Ok(())
    }

    /// Every die size this rule set can roll.
    pub fn sides_in_play(&self) -> Vec<u32> {
        let mut sides = vec![self.dice_sides];
        if let Some(wild) = self.hog_wild {
            if wild.sides != self.dice_sides {
                sides.push(wild.sides);
            }
        }
        sides
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors that can occur when validating or loading a rule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Target score must be positive.
    InvalidTargetScore(u32),
    /// Dice need at least two sides.
    InvalidDiceSides(u32),
    /// Max rolls is outside `1..=MAX_DICE_ROLLS`.
    InvalidMaxRolls(u32),
    /// A fixed free action must score at least one point.
    InvalidFreeAction,
    /// Hog Wild modulus is zero or its die has fewer than two sides.
    InvalidHogWild {
        /// Offending modulus.
        modulus: u32,
        /// Offending side count.
        sides: u32,
    },
    /// Reading a config file failed.
    Io(String),
    /// JSON could not be parsed or produced.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTargetScore(val) => {
                write!(f, "Target score {} must be greater than 0", val)
            }
            ConfigError::InvalidDiceSides(val) => {
                write!(f, "Dice with {} sides are not allowed, need at least 2", val)
            }
            ConfigError::InvalidMaxRolls(val) => {
                write!(f, "Max rolls {} is out of range [1, {}]", val, MAX_DICE_ROLLS)
            }
            ConfigError::InvalidFreeAction => {
                write!(f, "Free action must score at least 1 point")
            }
            ConfigError::InvalidHogWild { modulus, sides } => {
                write!(f, "Hog Wild modulus {} with {}-sided dice is invalid", modulus, sides)
            }
            ConfigError::Io(msg) => write!(f, "Failed to read config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Cache statistics for a solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverStats {
    /// Number of memoized end-turn win probabilities.
    pub end_turn_states: usize,

    /// Number of memoized best decisions.
    pub decisions: usize,

    /// Number of per-die scoring tables.
    pub scoring_tables: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_rule_set() {
        let config = HogConfig::default();
        assert_eq!(config.target_score, TARGET_SCORE);
        assert_eq!(config.dice_sides, DICE_SIDES);
        assert_eq!(config.max_rolls, MAX_DICE_ROLLS);
        assert_eq!(config.free_action, FreeAction::FreeBacon);
        assert_eq!(config.hog_wild, Some(HogWild { modulus: 7, sides: 4 }));
        assert!(config.swine_swap);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_basic_disables_special_rules() {
        let config = HogConfig::basic();
        assert!(config.hog_wild.is_none());
        assert!(!config.swine_swap);
        assert_eq!(config.sides_in_play(), vec![6]);
        assert_eq!(HogConfig::default().sides_in_play(), vec![6, 4]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            HogConfig::default().with_target_score(0).validate(),
            Err(ConfigError::InvalidTargetScore(0))
        );
        assert_eq!(
            HogConfig::default().with_dice_sides(1).validate(),
            Err(ConfigError::InvalidDiceSides(1))
        );
        assert_eq!(
            HogConfig::default().with_max_rolls(11).validate(),
            Err(ConfigError::InvalidMaxRolls(11))
        );
        assert_eq!(
            HogConfig::default().with_max_rolls(0).validate(),
            Err(ConfigError::InvalidMaxRolls(0))
        );
        assert!(HogConfig::default()
            .with_hog_wild(Some(HogWild { modulus: 0, sides: 4 }))
            .validate()
            .is_err());
        assert_eq!(
            HogConfig::default()
                .with_free_action(FreeAction::Fixed(0))
                .validate(),
            Err(ConfigError::InvalidFreeAction)
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = HogConfig::basic()
            .with_target_score(50)
            .with_free_action(FreeAction::Fixed(3));
        let json = config.to_json().unwrap();
        let parsed = HogConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_str_validates() {
        let json = r#"{
            "target_score": 100,
            "dice_sides": 0,
            "max_rolls": 10,
            "free_action": "FreeBacon"
        }"#;
        assert_eq!(
            HogConfig::from_json_str(json),
            Err(ConfigError::InvalidDiceSides(0))
        );

        let err = HogConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = HogConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("Failed to read config"));
    }
}
