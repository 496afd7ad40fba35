use crate::{
    name::{NormalizedName, normalize_with},
    script::ScriptPair,
    similarity::{DEFAULT_PREFIX_WEIGHT, JaroWinkler, MAX_PREFIX_WEIGHT},
    stage::strip_prefixes::PrefixMode,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_PHONETIC_FLOOR: f64 = 0.85;
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.92;
pub const DEFAULT_POSSIBLE_THRESHOLD: f64 = 0.85;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("phonetic floor must lie in [0, 1], got {0}")]
    InvalidPhoneticFloor(f64),
    #[error("thresholds must satisfy 0 <= possible ({possible}) <= match ({matched}) <= 1")]
    InvalidThresholds { possible: f64, matched: f64 },
    #[error("prefix weight must lie in [0, 0.25], got {0}")]
    InvalidPrefixWeight(f64),
    #[error("maximum name length must be positive")]
    ZeroMaxNameChars,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("{side} name is {len} characters long, limit is {max}")]
    NameTooLong { side: Side, len: usize, max: usize },
}

/// Which input of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// MPI verdict band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Match,
    Possible,
    NoMatch,
}

/// Tunables for [`Matcher`]. Every field has a default, so a partial JSON
/// document deserializes into a complete config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub prefix_mode: PrefixMode,
    /// Minimum final score for an Arabic pair whose phonetic codes agree.
    pub phonetic_floor: f64,
    pub match_threshold: f64,
    pub possible_threshold: f64,
    /// Winkler prefix bonus weight.
    pub prefix_weight: f64,
    /// Reject longer names in [`Matcher::try_compare`]. `None` disables the check.
    pub max_name_chars: Option<usize>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            prefix_mode: PrefixMode::default(),
            phonetic_floor: DEFAULT_PHONETIC_FLOOR,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            possible_threshold: DEFAULT_POSSIBLE_THRESHOLD,
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_name_chars: None,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |x: f64| (0.0..=1.0).contains(&x);
        if !unit(self.phonetic_floor) {
            return Err(ConfigError::InvalidPhoneticFloor(self.phonetic_floor));
        }
        if !unit(self.possible_threshold)
            || !unit(self.match_threshold)
            || self.possible_threshold > self.match_threshold
        {
            return Err(ConfigError::InvalidThresholds {
                possible: self.possible_threshold,
                matched: self.match_threshold,
            });
        }
        if !(0.0..=MAX_PREFIX_WEIGHT).contains(&self.prefix_weight) {
            return Err(ConfigError::InvalidPrefixWeight(self.prefix_weight));
        }
        if self.max_name_chars == Some(0) {
            return Err(ConfigError::ZeroMaxNameChars);
        }
        Ok(())
    }

    fn level(&self, score: f64) -> MatchLevel {
        if score >= self.match_threshold {
            MatchLevel::Match
        } else if score >= self.possible_threshold {
            MatchLevel::Possible
        } else {
            MatchLevel::NoMatch
        }
    }
}

/// Outcome of comparing two names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameComparison {
    pub left: NormalizedName,
    pub right: NormalizedName,
    pub pair: ScriptPair,
    /// Only ever true for Arabic/Arabic pairs.
    pub phonetic_match: bool,
    pub raw_score: f64,
    pub final_score: f64,
    pub level: MatchLevel,
}

/// Configured name-matching engine. Cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    config: MatcherConfig,
    scorer: JaroWinkler,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::build_unchecked(MatcherConfig::default())
    }
}

impl Matcher {
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::default()
    }

    pub fn from_config(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build_unchecked(config))
    }

    fn build_unchecked(config: MatcherConfig) -> Self {
        Self {
            config,
            scorer: JaroWinkler::new().with_prefix_weight(config.prefix_weight),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn normalize(&self, name: &str) -> NormalizedName {
        normalize_with(name, self.config.prefix_mode)
    }

    /// Normalize both names under their own scripts and score the pair.
    ///
    /// Total over all string input; see [`Matcher::try_compare`] for the
    /// length-bounded variant.
    pub fn compare(&self, left: &str, right: &str) -> NameComparison {
        let left = self.normalize(left);
        let right = self.normalize(right);
        let pair = ScriptPair::of(left.script(), right.script());

        let raw_score = self.scorer.similarity(left.normalized(), right.normalized());
        // Two empty codes are equal: names that normalize to nothing agree
        let phonetic_match =
            pair == ScriptPair::Arabic && left.phonetic_code() == right.phonetic_code();
        let final_score = if phonetic_match {
            raw_score.max(self.config.phonetic_floor)
        } else {
            raw_score
        };
        let level = self.config.level(final_score);

        debug!(
            ?pair,
            phonetic_match,
            raw_score,
            final_score,
            ?level,
            "names compared"
        );

        NameComparison {
            left,
            right,
            pair,
            phonetic_match,
            raw_score,
            final_score,
            level,
        }
    }

    /// Like [`Matcher::compare`], but refuses names longer than
    /// `max_name_chars` before doing any work.
    pub fn try_compare(&self, left: &str, right: &str) -> Result<NameComparison, MatchError> {
        if let Some(max) = self.config.max_name_chars {
            for (side, name) in [(Side::Left, left), (Side::Right, right)] {
                let len = name.chars().count();
                if len > max {
                    warn!(%side, len, max, "name rejected: too long");
                    return Err(MatchError::NameTooLong { side, len, max });
                }
            }
        }
        Ok(self.compare(left, right))
    }

    /// Compare many pairs in parallel. Output order follows input order.
    pub fn compare_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<NameComparison>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        debug!(pairs = pairs.len(), "batch comparison");
        pairs
            .par_iter()
            .map(|(a, b)| self.compare(a.as_ref(), b.as_ref()))
            .collect()
    }

    /// Length-bounded batch; one result per pair, in input order.
    pub fn try_compare_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<Result<NameComparison, MatchError>>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        debug!(pairs = pairs.len(), "bounded batch comparison");
        pairs
            .par_iter()
            .map(|(a, b)| self.try_compare(a.as_ref(), b.as_ref()))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MatcherBuilder {
    config: MatcherConfig,
}

impl MatcherBuilder {
    pub fn prefix_mode(mut self, mode: PrefixMode) -> Self {
        self.config.prefix_mode = mode;
        self
    }

    pub fn phonetic_floor(mut self, floor: f64) -> Self {
        self.config.phonetic_floor = floor;
        self
    }

    pub fn thresholds(mut self, possible: f64, matched: f64) -> Self {
        self.config.possible_threshold = possible;
        self.config.match_threshold = matched;
        self
    }

    pub fn prefix_weight(mut self, weight: f64) -> Self {
        self.config.prefix_weight = weight;
        self
    }

    pub fn max_name_chars(mut self, max: usize) -> Self {
        self.config.max_name_chars = Some(max);
        self
    }

    pub fn build(self) -> Result<Matcher, ConfigError> {
        Matcher::from_config(self.config)
    }
}

/// Compare two raw names with the default configuration.
#[inline]
pub fn compare_names(left: &str, right: &str) -> NameComparison {
    Matcher::default().compare(left, right)
}
